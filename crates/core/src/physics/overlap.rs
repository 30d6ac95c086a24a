//! Beam-capture fraction ξ(R)
//!
//! Fraction of the transmitted beam that falls inside the receiver field of
//! view. Below `r_1` the receiver sees nothing, beyond `r_2` it sees the
//! whole beam. In between either a linear ramp or the exact lens-area ratio
//! of the two footprints is used, depending on [`XsiMode`].
//!
//! # Formula (geometric mode)
//! ```text
//! ξ = [r_T²·(φ_T − sin φ_T) + r_R²·(φ_R − sin φ_R)] / (2π·r_T²)
//! ```

use super::geometry::{
    receiver_overlap_angle, receiver_radius, transmitter_overlap_angle, transmitter_radius,
};
use crate::core_types::{ParameterSet, XsiMode};
use std::f64::consts::PI;

/// Beam-capture fraction at `range`, in `[0, 1]`
pub fn xsi(p: &ParameterSet, range: f64) -> f64 {
    if range <= p.r_1 {
        return 0.0;
    }
    if range >= p.r_2 {
        return 1.0;
    }

    match p.xsi_mode {
        XsiMode::Linear => {
            let m = 1.0 / (p.r_2 - p.r_1);
            let b = -(m * p.r_1);
            m * range + b
        }
        XsiMode::Geometric => {
            let r_t = transmitter_radius(p, range);
            let r_r = receiver_radius(p, range);
            let phi_t = transmitter_overlap_angle(p, range);
            let phi_r = receiver_overlap_angle(p, range);

            (r_t * r_t * (phi_t - phi_t.sin()) + r_r * r_r * (phi_r - phi_r.sin()))
                / (2.0 * PI * r_t * r_t)
        }
    }
}

/// Beam-capture fraction at the hard-target range `r_0`
#[inline]
pub fn xsi_at_target(p: &ParameterSet) -> f64 {
    xsi(p, p.r_0)
}

/// Elementwise [`xsi`] over `ranges`
pub fn xsi_profile(p: &ParameterSet, ranges: &[f64]) -> Vec<f64> {
    ranges.iter().map(|&range| xsi(p, range)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regimes_outside_transition() {
        let p = ParameterSet::default();
        assert_eq!(xsi(&p, -1.0), 0.0);
        assert_eq!(xsi(&p, 0.0), 0.0);
        assert_eq!(xsi(&p, p.r_1), 0.0);
        assert_eq!(xsi(&p, p.r_2), 1.0);
        assert_eq!(xsi(&p, 150.0), 1.0);
    }

    #[test]
    fn test_linear_ramp_midpoint() {
        let p = ParameterSet::default();
        assert_relative_eq!(xsi(&p, 0.95), 0.5, max_relative = 1e-9);
    }

    #[test]
    fn test_linear_ramp_monotonic() {
        let mut p = ParameterSet::default();
        p.r_1 = 2.0;
        p.r_2 = 7.0;

        let mut last = xsi(&p, 2.0);
        for i in 1..=500 {
            let r = 2.0 + 5.0 * f64::from(i) / 500.0;
            let value = xsi(&p, r);
            assert!(value >= last, "xsi decreased at R = {r}");
            last = value;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_geometric_mode_full_capture_far_field() {
        let mut p = ParameterSet::default();
        p.xsi_mode = XsiMode::Geometric;
        p.r_1 = 0.0;
        p.r_2 = 50.0;
        // Transmitter footprint entirely inside the receiver footprint
        assert_relative_eq!(xsi(&p, 10.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_mode_partial_overlap() {
        let mut p = ParameterSet::default();
        p.xsi_mode = XsiMode::Geometric;
        p.r_1 = 0.0;
        p.r_2 = 50.0;

        assert_eq!(xsi(&p, 0.5), 0.0);
        let partial = xsi(&p, 3.0);
        assert!(partial > 0.0 && partial < 1.0, "xsi(3) = {partial}");

        for value in xsi_profile(&p, &[0.5, 1.0, 2.0, 3.0, 4.0, 6.0, 10.0, 40.0]) {
            assert!((-1e-12..=1.0 + 1e-12).contains(&value));
        }
    }

    #[test]
    fn test_profile_is_elementwise() {
        let p = ParameterSet::default();
        let ranges = [0.5, 0.92, 0.95, 0.99, 1.5];
        let profile = xsi_profile(&p, &ranges);
        assert_eq!(profile.len(), ranges.len());
        for (value, &r) in profile.iter().zip(&ranges) {
            assert_eq!(*value, xsi(&p, r));
        }
    }

    #[test]
    fn test_at_target_uses_r0() {
        let mut p = ParameterSet::default();
        p.r_1 = 10.0;
        p.r_2 = 50.0;
        p.r_0 = 30.0;
        assert_relative_eq!(xsi_at_target(&p), 0.5, max_relative = 1e-12);
    }
}
