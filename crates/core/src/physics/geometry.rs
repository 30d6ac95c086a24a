//! Transmitter/receiver footprint geometry
//!
//! Both optical paths widen linearly with range. Their footprints are two
//! circles whose centres sit `D` apart (the sensor baseline). The overlap
//! angles φ are the central angles of the circular segments that make up the
//! lens-shaped intersection of the two footprints.
//!
//! # Formula
//! ```text
//! r(R) = R · tan(Γ/2) + ρ
//! x    = (r_self² − r_other² + D²) / (2 · D · r_self)
//! φ    = 2 · arccos(x)       for −1 < x < 1
//! ```

use crate::core_types::ParameterSet;
use std::f64::consts::PI;

/// Transmitter footprint radius (m) at `range`
#[inline]
pub fn transmitter_radius(p: &ParameterSet, range: f64) -> f64 {
    range * (p.geometry.gamma_t / 2.0).tan() + p.geometry.rho_t
}

/// Transmitter footprint radius (m) at the hard-target range `r_0`
#[inline]
pub fn transmitter_radius_at_target(p: &ParameterSet) -> f64 {
    transmitter_radius(p, p.r_0)
}

/// Receiver footprint radius (m) at `range`
#[inline]
pub fn receiver_radius(p: &ParameterSet, range: f64) -> f64 {
    range * (p.geometry.gamma_r / 2.0).tan() + p.geometry.rho_r
}

/// Receiver footprint radius (m) at the hard-target range `r_0`
#[inline]
pub fn receiver_radius_at_target(p: &ParameterSet) -> f64 {
    receiver_radius(p, p.r_0)
}

/// Overlap angle of the footprint with radius `r_self` (rad)
///
/// `x` saturates instead of reaching `acos` outside its domain:
/// `x ≥ 1` (no intersection boundary) gives 0, `x ≤ −1` (own footprint fully
/// inside the other one) gives 2π. NaN also falls through to 0.
fn overlap_angle(r_self: f64, r_other: f64, baseline: f64) -> f64 {
    let x = (r_self * r_self - r_other * r_other + baseline * baseline)
        / (2.0 * baseline * r_self);

    let half_angle = if x < 1.0 {
        if x > -1.0 {
            x.acos()
        } else {
            PI
        }
    } else {
        0.0
    };

    2.0 * half_angle
}

/// Overlap angle `φ_T` of the transmitter footprint at `range` (rad)
pub fn transmitter_overlap_angle(p: &ParameterSet, range: f64) -> f64 {
    overlap_angle(
        transmitter_radius(p, range),
        receiver_radius(p, range),
        p.geometry.baseline,
    )
}

/// Overlap angle `φ_T` at the hard-target range `r_0` (rad)
pub fn transmitter_overlap_angle_at_target(p: &ParameterSet) -> f64 {
    transmitter_overlap_angle(p, p.r_0)
}

/// Overlap angle `φ_R` of the receiver footprint at `range` (rad)
pub fn receiver_overlap_angle(p: &ParameterSet, range: f64) -> f64 {
    overlap_angle(
        receiver_radius(p, range),
        transmitter_radius(p, range),
        p.geometry.baseline,
    )
}

/// Overlap angle `φ_R` at the hard-target range `r_0` (rad)
pub fn receiver_overlap_angle_at_target(p: &ParameterSet) -> f64 {
    receiver_overlap_angle(p, p.r_0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radius_is_linear_in_range() {
        let p = ParameterSet::default();
        let slope = (1.0_f64.to_radians()).tan();
        assert_relative_eq!(transmitter_radius(&p, 0.0), 0.01);
        assert_relative_eq!(
            transmitter_radius(&p, 10.0),
            10.0 * slope + 0.01,
            max_relative = 1e-14
        );
        assert!(receiver_radius(&p, 10.0) > transmitter_radius(&p, 10.0));
    }

    #[test]
    fn test_at_target_variants_use_r0() {
        let mut p = ParameterSet::default();
        p.r_0 = 42.0;
        assert_eq!(transmitter_radius_at_target(&p), transmitter_radius(&p, 42.0));
        assert_eq!(receiver_radius_at_target(&p), receiver_radius(&p, 42.0));
        assert_eq!(
            transmitter_overlap_angle_at_target(&p),
            transmitter_overlap_angle(&p, 42.0)
        );
        assert_eq!(
            receiver_overlap_angle_at_target(&p),
            receiver_overlap_angle(&p, 42.0)
        );
    }

    #[test]
    fn test_disjoint_footprints_have_zero_angle() {
        // At the sensor both footprints are 1 cm circles 10 cm apart
        let p = ParameterSet::default();
        assert_eq!(transmitter_overlap_angle(&p, 0.0), 0.0);
        assert_eq!(receiver_overlap_angle(&p, 0.0), 0.0);
    }

    #[test]
    fn test_contained_footprint_saturates_to_full_circle() {
        // Far away the narrow transmitter footprint lies inside the receiver one
        let p = ParameterSet::default();
        assert_eq!(transmitter_overlap_angle(&p, 10.0), 2.0 * PI);
        assert_eq!(receiver_overlap_angle(&p, 10.0), 0.0);
    }

    #[test]
    fn test_partial_overlap_inside_open_interval() {
        let p = ParameterSet::default();
        let phi_t = transmitter_overlap_angle(&p, 3.0);
        let phi_r = receiver_overlap_angle(&p, 3.0);
        assert!(phi_t > 0.0 && phi_t < 2.0 * PI, "phi_t = {phi_t}");
        assert!(phi_r > 0.0 && phi_r < 2.0 * PI, "phi_r = {phi_r}");
        // The smaller circle always subtends the larger segment angle
        assert!(phi_t > phi_r);
    }

    #[test]
    fn test_overlap_angle_saturation_boundaries() {
        // x exactly 1 and exactly −1
        assert_eq!(overlap_angle(1.0, 1.0, 2.0), 0.0);
        assert_eq!(overlap_angle(1.0, 2.0, 1.0), 2.0 * PI);
        assert!(overlap_angle(f64::NAN, 1.0, 1.0) == 0.0);
    }
}
