//! Hard-target (discrete reflector) return
//!
//! A target at range `r_0` echoes the transmitted pulse back as a raised-sine
//! of duration `c·τ_H` in range. In fog the echo is attenuated by the
//! double-pass extinction over `r_0`.
//!
//! # Formula
//! ```text
//! P_clear(R) = C_A · P_0 · ξ(R_0)/R_0² · β_0 · sin²(π(R − R_0) / (c·τ_H))   for R_0 ≤ R ≤ R_0 + c·τ_H
//! P_fog(R)   = exp(−2·α·R_0) · P_clear(R)
//! ```

use super::overlap::xsi_at_target;
use crate::core_types::{ParameterSet, SPEED_OF_LIGHT};
use std::f64::consts::PI;

/// Received power (W) from the hard target in clear weather
///
/// Exactly 0 outside `[r_0, r_0 + c·τ_H]`.
pub fn clear_hard_target_response(p: &ParameterSet, range: f64) -> f64 {
    let pulse_length = SPEED_OF_LIGHT * p.tau_h;
    if range < p.r_0 || range > p.r_0 + pulse_length {
        return 0.0;
    }

    let shape = (PI * (range - p.r_0) / pulse_length).sin();

    p.c_a() * p.p_0 * (xsi_at_target(p) / (p.r_0 * p.r_0)) * p.beta_0() * shape * shape
}

/// Double-pass fog transmission to the hard target, `exp(−2·α·r_0)`
#[inline]
pub fn hard_target_transmission(p: &ParameterSet) -> f64 {
    (-2.0 * p.alpha * p.r_0).exp()
}

/// Received power (W) from the hard target seen through fog
pub fn fog_hard_target_response(p: &ParameterSet, range: f64) -> f64 {
    hard_target_transmission(p) * clear_hard_target_response(p, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn peak_power(p: &ParameterSet) -> f64 {
        p.c_a() * p.p_0 * xsi_at_target(p) / (p.r_0 * p.r_0) * p.beta_0()
    }

    #[test]
    fn test_zero_outside_return_window() {
        let p = ParameterSet::default();
        let end = p.r_0 + SPEED_OF_LIGHT * p.tau_h;
        for range in [0.0, 10.0, p.r_0 - 1e-9, end + 1e-9, end + 5.0, 200.0] {
            assert_eq!(clear_hard_target_response(&p, range), 0.0, "R = {range}");
        }
    }

    #[test]
    fn test_window_edges_and_peak() {
        let p = ParameterSet::default();
        let centre = p.r_0 + p.pulse_half_length();

        assert_eq!(clear_hard_target_response(&p, p.r_0), 0.0);
        assert_relative_eq!(
            clear_hard_target_response(&p, centre),
            peak_power(&p),
            max_relative = 1e-12
        );
        // Symmetric raised sine around the window centre
        let offset = 1.3;
        assert_relative_eq!(
            clear_hard_target_response(&p, centre - offset),
            clear_hard_target_response(&p, centre + offset),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_fog_attenuation_is_double_pass() {
        let p = ParameterSet::default();
        let range = p.r_0 + 2.0;
        assert_relative_eq!(
            fog_hard_target_response(&p, range),
            (-2.0 * p.alpha * p.r_0).exp() * clear_hard_target_response(&p, range),
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_zero_attenuation_matches_clear_weather() {
        let mut p = ParameterSet::default();
        p.alpha = 0.0;
        let range = p.r_0 + 1.0;
        assert_eq!(hard_target_transmission(&p), 1.0);
        assert_eq!(
            fog_hard_target_response(&p, range),
            clear_hard_target_response(&p, range)
        );
    }

    #[test]
    fn test_target_inside_overlap_transition_is_dimmed() {
        let mut p = ParameterSet::default();
        let centre = p.r_0 + p.pulse_half_length();
        let full = clear_hard_target_response(&p, centre);

        p.r_1 = 10.0;
        p.r_2 = 50.0;
        p.recompute_derived();
        // ξ(30) = 0.5 on the linear ramp
        assert_relative_eq!(
            clear_hard_target_response(&p, centre),
            0.5 * full,
            max_relative = 1e-12
        );
    }
}
