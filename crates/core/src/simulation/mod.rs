//! Interactive fog LIDAR session
//!
//! `FogSimulation` is the boundary between a presentation layer and the
//! model. It owns the one `ParameterSet` of the session and the one worker
//! pool, and turns every parameter change into a full recompute of the hard
//! and soft curves.

pub mod command;

pub use command::Command;

use crate::core_types::ParameterSet;
use crate::solver::{Curve, CurveEvaluator, CurveKind, EvaluatorError, SweepCurves};
use tracing::debug;

/// Session state: parameters, worker pool and the latest curves
#[derive(Debug)]
pub struct FogSimulation {
    params: ParameterSet,
    evaluator: CurveEvaluator,
    curves: SweepCurves,
}

impl FogSimulation {
    /// Session with default parameters and a pool sized to the CPU count
    ///
    /// # Errors
    /// Returns [`EvaluatorError`] if the worker pool cannot be created.
    pub fn new() -> Result<Self, EvaluatorError> {
        Ok(Self::with_evaluator(
            ParameterSet::default(),
            CurveEvaluator::new()?,
        ))
    }

    /// Session over explicit parameters and evaluator; curves are computed immediately
    pub fn with_evaluator(params: ParameterSet, evaluator: CurveEvaluator) -> Self {
        let mut sim = Self {
            params,
            evaluator,
            curves: SweepCurves::default(),
        };
        sim.recompute();
        sim
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Direct write access to the parameters
    ///
    /// Changes take effect (including the `r_2 ≥ r_1` correction) on the
    /// next [`recompute`](Self::recompute).
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }

    /// Curves of the latest recompute
    pub fn curves(&self) -> &SweepCurves {
        &self.curves
    }

    pub fn evaluator(&self) -> &CurveEvaluator {
        &self.evaluator
    }

    /// Re-derive dependent parameters and re-sweep both curves
    pub fn recompute(&mut self) -> &SweepCurves {
        self.params.recompute_derived();
        self.curves = self.evaluator.sweep(&self.params);
        &self.curves
    }

    /// Apply one parameter change and recompute both curves
    pub fn apply(&mut self, command: Command) -> &SweepCurves {
        debug!("Applying {:?}", command);
        command.apply_to(&mut self.params);
        self.recompute()
    }

    /// Evaluate any response over the current sweep without touching the stored curves
    pub fn evaluate(&self, kind: CurveKind) -> Curve {
        self.evaluator.evaluate(&self.params, kind)
    }
}
