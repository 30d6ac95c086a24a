//! Pooled parallel curve evaluation
//!
//! A sweep is an embarrassingly parallel map: every range sample is evaluated
//! independently against the same read-only `ParameterSet`. Rayon's indexed
//! `collect` writes each result at its input position, so the output order is
//! the sample order no matter which worker finishes first.

use super::sampling::{range_samples, Curve, CurveKind, SweepCurves};
use crate::core_types::ParameterSet;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fmt;
use tracing::{debug, info};

/// Failure to bring up the worker pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    /// The thread pool could not be created
    PoolBuild(String),
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluatorError::PoolBuild(msg) => write!(f, "Failed to build worker pool: {msg}"),
        }
    }
}

impl std::error::Error for EvaluatorError {}

/// Curve evaluator owning a fixed-size worker pool
///
/// The pool is built once and reused for every sweep. Sweeps issued from one
/// thread run one after the other.
pub struct CurveEvaluator {
    pool: ThreadPool,
}

impl CurveEvaluator {
    /// Evaluator with one worker per available CPU core
    ///
    /// # Errors
    /// Returns [`EvaluatorError::PoolBuild`] if the OS refuses to spawn threads.
    pub fn new() -> Result<Self, EvaluatorError> {
        Self::with_threads(0)
    }

    /// Evaluator with `num_threads` workers (0 selects the core count)
    ///
    /// # Errors
    /// Returns [`EvaluatorError::PoolBuild`] if the OS refuses to spawn threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, EvaluatorError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("lidar-fog-worker-{i}"))
            .build()
            .map_err(|e| EvaluatorError::PoolBuild(e.to_string()))?;

        info!(
            "Curve evaluator using {} worker thread(s)",
            pool.current_num_threads()
        );

        Ok(Self { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Power of `kind` at each of `ranges`, in the order given
    pub fn evaluate_at(&self, p: &ParameterSet, kind: CurveKind, ranges: &[f64]) -> Vec<f64> {
        self.pool
            .install(|| ranges.par_iter().map(|&r| kind.power(p, r)).collect())
    }

    /// Evaluate `kind` over the sweep `[0, r_range]` with `n` samples
    pub fn evaluate(&self, p: &ParameterSet, kind: CurveKind) -> Curve {
        let ranges = range_samples(p);
        debug!(
            "Evaluating {:?} over {} samples in [0, {}] m",
            kind,
            ranges.len(),
            p.r_range
        );
        let powers = self.evaluate_at(p, kind, &ranges);
        Curve::from_ranges(p, &ranges, powers)
    }

    /// Recompute both plotted curves: attenuated hard-target echo and fog backscatter
    pub fn sweep(&self, p: &ParameterSet) -> SweepCurves {
        SweepCurves {
            hard: self.evaluate(p, CurveKind::FogHard),
            soft: self.evaluate(p, CurveKind::FogSoft),
        }
    }
}

impl fmt::Debug for CurveEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveEvaluator")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
