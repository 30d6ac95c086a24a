//! Range sweeps and the curves they produce

use crate::core_types::ParameterSet;
use crate::physics::{
    clear_hard_target_response, fog_hard_target_response, fog_response, fog_soft_target_response,
    linspace,
};
use serde::{Deserialize, Serialize};

/// Which response a curve plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    /// Hard-target echo attenuated by fog (the plotted "hard" curve)
    FogHard,
    /// Fog backscatter (the plotted "soft" curve)
    FogSoft,
    /// Sum of backscatter and attenuated echo
    Fog,
    /// Hard-target echo in clear weather
    ClearHard,
}

impl CurveKind {
    /// Received power (W) at `range` for this response
    #[inline]
    pub fn power(self, p: &ParameterSet, range: f64) -> f64 {
        match self {
            CurveKind::FogHard => fog_hard_target_response(p, range),
            CurveKind::FogSoft => fog_soft_target_response(p, range),
            CurveKind::Fog => fog_response(p, range),
            CurveKind::ClearHard => clear_hard_target_response(p, range),
        }
    }
}

/// Unshifted range samples of one sweep: `n` points over `[0, r_range]`
pub fn range_samples(p: &ParameterSet) -> Vec<f64> {
    linspace(0.0, p.r_range, p.n)
}

/// Plot-ready curve
///
/// `x` holds the range samples shifted by `−τ_H·c/2`, which places the
/// transmitted pulse peak at 0 and the hard-target peak at `r_0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    /// Build a curve from unshifted `ranges` and their powers
    ///
    /// `powers` must hold one value per range.
    pub(crate) fn from_ranges(p: &ParameterSet, ranges: &[f64], powers: Vec<f64>) -> Self {
        debug_assert_eq!(ranges.len(), powers.len());
        let shift = p.pulse_half_length();
        Self {
            x: ranges.iter().map(|r| r - shift).collect(),
            y: powers,
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn points(&self) -> impl DoubleEndedIterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// First sample holding the maximum power
    pub fn peak(&self) -> Option<(f64, f64)> {
        let mut best: Option<(f64, f64)> = None;
        for (x, y) in self.points() {
            match best {
                Some((_, best_y)) if y <= best_y => {}
                _ => best = Some((x, y)),
            }
        }
        best
    }

    /// Shifted x of the first and last non-zero sample
    pub fn support(&self) -> Option<(f64, f64)> {
        let first = self.points().find(|&(_, y)| y != 0.0)?;
        let last = self.points().rev().find(|&(_, y)| y != 0.0)?;
        Some((first.0, last.0))
    }
}

/// The two curves produced by one recompute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SweepCurves {
    pub hard: Curve,
    pub soft: Curve,
}

/// Evaluate `kind` over the sweep on the calling thread
pub fn sample_curve(p: &ParameterSet, kind: CurveKind) -> Curve {
    let ranges = range_samples(p);
    let powers = ranges.iter().map(|&r| kind.power(p, r)).collect();
    Curve::from_ranges(p, &ranges, powers)
}
