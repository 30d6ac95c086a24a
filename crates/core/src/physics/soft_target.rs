//! Soft-target (fog backscatter) return
//!
//! Fog particles between the sensor and the hard target backscatter part of
//! the pulse. The received power at range `R` collects contributions from
//! every instant `t ∈ [0, 2·τ_H]` of the pulse, each originating at the
//! virtual range `R − c·t/2`.
//!
//! # Formula
//! ```text
//! P_soft(R) = C_A · P_0 · β · ∫₀^{2τ_H} sin²(π·t/(2τ_H))
//!                                  · exp(−2α(R − ct/2))
//!                                  · 1/(R − ct/2)²
//!                                  · ξ(R − ct/2)
//!                                  · U(R_0 − R + ct/2) dt
//! ```
//!
//! The integral is evaluated with composite Simpson on an even grid, so the
//! sample count directly controls accuracy.

use super::overlap::xsi_profile;
use super::quadrature::{linspace, simpson};
use crate::core_types::{ParameterSet, SPEED_OF_LIGHT};
use std::f64::consts::PI;

/// Inverse-square falloff `1/(R − c·t/2)²` for a single pulse instant
///
/// Returns 0 once the virtual range has moved inside `r_1`, where ξ is 0
/// anyway and the falloff would otherwise diverge.
#[inline]
pub fn inverse_square_modified_at(p: &ParameterSet, range: f64, t: f64) -> f64 {
    if t >= 2.0 * (range - p.r_1) / SPEED_OF_LIGHT {
        return 0.0;
    }
    let virtual_range = range - SPEED_OF_LIGHT * t / 2.0;
    1.0 / (virtual_range * virtual_range)
}

/// Elementwise [`inverse_square_modified_at`] over pulse instants `t` (s)
pub fn inverse_square_modified(p: &ParameterSet, range: f64, t: &[f64]) -> Vec<f64> {
    t.iter()
        .map(|&t_star| inverse_square_modified_at(p, range, t_star))
        .collect()
}

/// Unit step, 1 for `x ≥ 0`
#[inline]
fn unit_step(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Integrand of the soft-target response sampled over `t`
fn soft_target_integrand(p: &ParameterSet, range: f64, t: &[f64]) -> Vec<f64> {
    let virtual_ranges: Vec<f64> = t
        .iter()
        .map(|&t_star| range - SPEED_OF_LIGHT * t_star / 2.0)
        .collect();
    let falloff = inverse_square_modified(p, range, t);
    let capture = xsi_profile(p, &virtual_ranges);

    t.iter()
        .zip(&virtual_ranges)
        .zip(falloff.iter().zip(&capture))
        .map(|((&t_star, &virtual_range), (&falloff, &capture))| {
            let pulse = (PI / (2.0 * p.tau_h) * t_star).sin();
            pulse * pulse
                * (-2.0 * p.alpha * virtual_range).exp()
                * falloff
                * capture
                * unit_step(p.r_0 - virtual_range)
        })
        .collect()
}

/// Received fog backscatter power (W) at `range` with `n` quadrature samples
pub fn fog_soft_target_response_with_samples(p: &ParameterSet, range: f64, n: usize) -> f64 {
    let t = linspace(0.0, 2.0 * p.tau_h, n);
    let dt = if n > 1 { t[1] - t[0] } else { 0.0 };
    let integral = simpson(&soft_target_integrand(p, range, &t), dt);

    p.c_a() * p.p_0 * p.beta * integral
}

/// Received fog backscatter power (W) at `range` using `p.n` quadrature samples
pub fn fog_soft_target_response(p: &ParameterSet, range: f64) -> f64 {
    fog_soft_target_response_with_samples(p, range, p.n)
}
