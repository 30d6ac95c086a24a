//! Validation of the radiometric model against its closed-form properties
//!
//! Covers the overlap regimes, the hard-target return window, the fog
//! attenuation identity and the end-to-end shape of a full hard-target sweep.

use approx::assert_relative_eq;
use lidar_fog_core::physics::{
    clear_hard_target_response, fog_hard_target_response, fog_soft_target_response, xsi,
};
use lidar_fog_core::solver::range_samples;
use lidar_fog_core::{CurveEvaluator, CurveKind, ParameterSet, XsiMode, SPEED_OF_LIGHT};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_xsi_saturates_outside_transition() {
    for mode in [XsiMode::Linear, XsiMode::Geometric] {
        let mut p = ParameterSet::default();
        p.xsi_mode = mode;
        p.r_1 = 2.0;
        p.r_2 = 6.0;

        for range in [-5.0, 0.0, 1.0, 1.999, 2.0] {
            assert_eq!(xsi(&p, range), 0.0, "{mode}: R = {range}");
        }
        for range in [6.0, 6.001, 30.0, 500.0] {
            assert_eq!(xsi(&p, range), 1.0, "{mode}: R = {range}");
        }
    }
}

#[test]
fn test_linear_xsi_passes_through_endpoints() {
    let mut p = ParameterSet::default();
    p.r_1 = 2.0;
    p.r_2 = 6.0;

    // Approaching the ramp ends from inside
    assert_relative_eq!(xsi(&p, 2.0 + 1e-9), 0.0, epsilon = 1e-8);
    assert_relative_eq!(xsi(&p, 6.0 - 1e-9), 1.0, epsilon = 1e-8);
    assert_relative_eq!(xsi(&p, 3.0), 0.25, max_relative = 1e-12);
    assert_relative_eq!(xsi(&p, 5.0), 0.75, max_relative = 1e-12);
}

#[test]
fn test_clear_hard_response_vanishes_outside_window() {
    let mut p = ParameterSet::default();
    p.r_0 = 55.0;
    p.tau_h = 3e-8;
    p.recompute_derived();

    let end = p.r_0 + SPEED_OF_LIGHT * p.tau_h;
    let mut inside = 0;
    for i in 0..=2000 {
        let range = f64::from(i) * 0.05;
        let power = clear_hard_target_response(&p, range);
        if range < p.r_0 || range > end {
            assert_eq!(power, 0.0, "R = {range}");
        } else {
            assert!(power >= 0.0);
            inside += 1;
        }
    }
    assert!(inside > 100, "only {inside} samples inside the window");
}

#[test]
fn test_fog_hard_is_attenuated_clear_hard() {
    for alpha in [0.0, 0.003, 0.06, 0.25, 0.5] {
        let mut p = ParameterSet::default();
        p.alpha = alpha;
        p.recompute_derived();

        for range in [0.0, 29.0, 30.0, 31.0, 33.0, 35.5, 36.5, 90.0] {
            assert_eq!(
                fog_hard_target_response(&p, range),
                (-2.0 * p.alpha * p.r_0).exp() * clear_hard_target_response(&p, range),
                "alpha = {alpha}, R = {range}"
            );
        }
    }
}

#[test]
fn test_end_to_end_hard_curve_shape() {
    let mut p = ParameterSet::default();
    p.r_0 = 100.0;
    p.r_range = 200.0;
    p.n = 1000;
    p.tau_h = 5e-9;
    p.recompute_derived();

    let evaluator = CurveEvaluator::with_threads(4).unwrap();
    let curve = evaluator.evaluate(&p, CurveKind::FogHard);
    let ranges = range_samples(&p);
    assert_eq!(curve.len(), 1000);

    // Exactly zero outside the unshifted return window [r_0, r_0 + c·τ_H]
    let end = p.r_0 + SPEED_OF_LIGHT * p.tau_h;
    for (&range, &power) in ranges.iter().zip(&curve.y) {
        if range < p.r_0 || range > end {
            assert_eq!(power, 0.0, "R = {range}");
        }
    }

    // After the shift the echo is centred on r_0
    let spacing = p.r_range / (p.n - 1) as f64;
    let (peak_x, peak_power) = curve.peak().unwrap();
    assert!(peak_power > 0.0);
    assert!(
        (peak_x - p.r_0).abs() <= spacing,
        "peak at {peak_x}, expected near {}",
        p.r_0
    );

    let (first, last) = curve.support().unwrap();
    let half = p.pulse_half_length();
    assert!(first >= p.r_0 - half && last <= p.r_0 + half);
}

#[test]
fn test_soft_curve_confined_in_front_of_target() {
    let mut p = ParameterSet::default();
    p.n = 400;

    let evaluator = CurveEvaluator::with_threads(2).unwrap();
    let curve = evaluator.evaluate(&p, CurveKind::FogSoft);
    let ranges = range_samples(&p);

    let end = p.r_0 + SPEED_OF_LIGHT * p.tau_h;
    for (&range, &power) in ranges.iter().zip(&curve.y) {
        assert!(power.is_finite() && power >= 0.0, "R = {range}: {power}");
        if range <= p.r_1 || range > end {
            assert_eq!(power, 0.0, "R = {range}");
        }
    }

    // Backscatter builds up close to the sensor and decays with range
    let (peak_x, _) = curve.peak().unwrap();
    assert!(peak_x < p.r_0, "soft peak at {peak_x}");
    assert!(fog_soft_target_response(&p, 5.0) > fog_soft_target_response(&p, 25.0));
}
