//! Total fog return: soft-target backscatter plus attenuated hard-target echo

use super::hard_target::fog_hard_target_response;
use super::soft_target::fog_soft_target_response_with_samples;
use crate::core_types::ParameterSet;

/// Total received power (W) in fog at `range` with `n` quadrature samples
pub fn fog_response_with_samples(p: &ParameterSet, range: f64, n: usize) -> f64 {
    fog_soft_target_response_with_samples(p, range, n) + fog_hard_target_response(p, range)
}

/// Total received power (W) in fog at `range` using `p.n` quadrature samples
pub fn fog_response(p: &ParameterSet, range: f64) -> f64 {
    fog_response_with_samples(p, range, p.n)
}
