//! LIDAR and fog parameter record
//!
//! `ParameterSet` is the single configuration value consumed by every model
//! function. Independent quantities are public fields; dependent quantities
//! (MOR, pulse energy, system constant, differential reflectivity) are private
//! and only ever written by [`ParameterSet::recompute_derived`].
//!
//! # Units
//! - Ranges and distances: m
//! - Attenuation coefficient `alpha`: 1/m
//! - Backscatter coefficient `beta`: 1/(m·sr)
//! - Power: W, pulse width: s, aperture area: m²
//! - Angles: rad

use super::constants::{meteorological_optical_range, SPEED_OF_LIGHT};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use tracing::debug;

/// Approximation used for the beam-capture fraction ξ between `r_1` and `r_2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum XsiMode {
    /// Linear ramp from 0 at `r_1` to 1 at `r_2`
    #[default]
    Linear,
    /// Circular-segment overlap area of the transmitter and receiver footprints
    Geometric,
}

impl XsiMode {
    /// The other approximation
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Geometric,
            Self::Geometric => Self::Linear,
        }
    }

    #[must_use]
    pub const fn is_linear(self) -> bool {
        matches!(self, Self::Linear)
    }
}

impl fmt::Display for XsiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear xsi"),
            Self::Geometric => write!(f, "formula xsi"),
        }
    }
}

/// Fixed optical geometry of the sensor head
///
/// These are physical constants of the device and are not exposed as
/// adjustable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorGeometry {
    /// Displacement between transmitter and receiver axes (m)
    pub baseline: f64,
    /// Transmitter aperture radius (m)
    pub rho_t: f64,
    /// Receiver aperture radius (m)
    pub rho_r: f64,
    /// Transmitter field-of-view opening angle (rad)
    pub gamma_t: f64,
    /// Receiver field-of-view opening angle (rad)
    pub gamma_r: f64,
}

impl Default for SensorGeometry {
    fn default() -> Self {
        Self {
            baseline: 0.1,
            rho_t: 0.01,
            rho_r: 0.01,
            gamma_t: 2.0_f64.to_radians(),
            gamma_r: 3.5_f64.to_radians(),
        }
    }
}

/// User-adjustable quantities of a [`ParameterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// Sweep range (m)
    RRange,
    /// Sample count of the sweep and of the soft-target quadrature
    N,
    /// Attenuation coefficient (1/m)
    Alpha,
    /// Backscatter coefficient (1/(m·sr))
    Beta,
    /// Pulse peak power (W)
    P0,
    /// Half-power pulse width (s)
    TauH,
    /// Receiver aperture area (m²)
    Ar,
    /// Receiver optics loss (fraction)
    Lr,
    /// Start of the overlap transition (m)
    R1,
    /// End of the overlap transition (m)
    R2,
    /// Hard-target range (m)
    R0,
    /// Hard-target reflectivity
    Gamma,
}

impl Param {
    /// Every adjustable parameter in presentation order
    pub const ALL: [Param; 12] = [
        Param::RRange,
        Param::N,
        Param::Alpha,
        Param::Beta,
        Param::P0,
        Param::TauH,
        Param::Ar,
        Param::Lr,
        Param::R1,
        Param::R2,
        Param::R0,
        Param::Gamma,
    ];

    /// Short field name
    pub const fn name(self) -> &'static str {
        match self {
            Param::RRange => "r_range",
            Param::N => "n",
            Param::Alpha => "alpha",
            Param::Beta => "beta",
            Param::P0 => "p_0",
            Param::TauH => "tau_h",
            Param::Ar => "a_r",
            Param::Lr => "l_r",
            Param::R1 => "r_1",
            Param::R2 => "r_2",
            Param::R0 => "r_0",
            Param::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Admissible interval and slider scale of one parameter
///
/// The scale is the integer factor a slider-based front end multiplies the
/// value by to obtain a slider position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    pub min: f64,
    pub max: f64,
    pub scale: f64,
}

impl ParamBounds {
    pub const fn new(min: f64, max: f64, scale: f64) -> Self {
        Self { min, max, scale }
    }

    /// Clamp `value` into `[min, max]`
    ///
    /// An empty interval (`min > max`) collapses onto `min`.
    #[inline]
    pub fn clamp(self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    #[inline]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Slider position for `value`, rounded to the nearest step
    #[inline]
    pub fn slider_position(self, value: f64) -> i64 {
        (value * self.scale).round() as i64
    }

    /// Value for a slider position
    #[inline]
    pub fn slider_value(self, position: i64) -> f64 {
        position as f64 / self.scale
    }
}

/// Violated model precondition
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// `alpha` must be strictly positive (MOR divides by it)
    NonPositiveAttenuation(f64),
    /// `r_0` must be strictly positive (hard-target power divides by `r_0²`)
    NonPositiveTargetRange(f64),
    /// `tau_h` must be strictly positive (pulse shape divides by it)
    NonPositivePulseWidth(f64),
    /// At least two samples are needed for a sweep and for quadrature
    TooFewSamples(usize),
    /// A rate, area, power or loss quantity was negative
    Negative { param: Param, value: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonPositiveAttenuation(v) => {
                write!(f, "attenuation coefficient must be > 0, got {v}")
            }
            ParameterError::NonPositiveTargetRange(v) => {
                write!(f, "hard-target range must be > 0, got {v}")
            }
            ParameterError::NonPositivePulseWidth(v) => {
                write!(f, "half-power pulse width must be > 0, got {v}")
            }
            ParameterError::TooFewSamples(n) => write!(f, "sample count must be >= 2, got {n}"),
            ParameterError::Negative { param, value } => {
                write!(f, "{param} must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Full parameter record of the fog LIDAR model
///
/// # Example
/// ```
/// use lidar_fog_core::core_types::{Param, ParameterSet};
///
/// let mut p = ParameterSet::default();
/// p.set(Param::Alpha, 0.1);
/// assert!((p.mor() - 20f64.ln() / 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Sweep range (m)
    pub r_range: f64,
    /// Sample count, also used as quadrature resolution
    pub n: usize,
    /// Attenuation coefficient (1/m)
    pub alpha: f64,
    /// Backscatter coefficient (1/(m·sr))
    pub beta: f64,
    /// Pulse peak power (W)
    pub p_0: f64,
    /// Half-power pulse width (s)
    pub tau_h: f64,
    /// Receiver aperture area (m²)
    pub a_r: f64,
    /// Receiver optics loss
    pub l_r: f64,
    /// Range below which the receiver sees none of the beam (m)
    pub r_1: f64,
    /// Range above which the receiver sees all of the beam (m)
    pub r_2: f64,
    /// Hard-target range (m)
    pub r_0: f64,
    /// Hard-target reflectivity
    pub gamma: f64,
    pub xsi_mode: XsiMode,
    pub geometry: SensorGeometry,

    mor: f64,
    e_p: f64,
    c_a: f64,
    beta_0: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        let alpha = 0.06;
        let mut params = Self {
            r_range: 100.0,
            n: 500,
            alpha,
            beta: 0.046 / meteorological_optical_range(alpha),
            p_0: 80.0,
            tau_h: 2e-8,
            a_r: 0.25,
            l_r: 0.05,
            r_1: 0.9,
            r_2: 1.0,
            r_0: 30.0,
            gamma: 1e-6,
            xsi_mode: XsiMode::Linear,
            geometry: SensorGeometry::default(),
            mor: 0.0,
            e_p: 0.0,
            c_a: 0.0,
            beta_0: 0.0,
        };
        params.recompute_derived();
        params
    }
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the overlap ordering and re-derive every dependent quantity
    ///
    /// Must run after any direct write to a public field.
    pub fn recompute_derived(&mut self) {
        if self.r_2 < self.r_1 {
            debug!(
                "r_2 = {} is below r_1 = {}, clamping r_2 to r_1",
                self.r_2, self.r_1
            );
            self.r_2 = self.r_1;
        }

        self.mor = meteorological_optical_range(self.alpha);
        self.e_p = self.p_0 * self.tau_h;
        self.c_a = SPEED_OF_LIGHT * self.l_r * self.a_r / 2.0;
        self.beta_0 = self.gamma / PI;
    }

    /// Meteorological optical range (m)
    #[inline]
    pub fn mor(&self) -> f64 {
        self.mor
    }

    /// Total pulse energy (J)
    #[inline]
    pub fn e_p(&self) -> f64 {
        self.e_p
    }

    /// System constant `C_A = c · L_R · A_R / 2`
    #[inline]
    pub fn c_a(&self) -> f64 {
        self.c_a
    }

    /// Differential reflectivity of the hard target `β₀ = Γ / π`
    #[inline]
    pub fn beta_0(&self) -> f64 {
        self.beta_0
    }

    /// Slider scale of `beta`; positions are `β · MOR · 1000`
    #[inline]
    pub fn beta_scale(&self) -> f64 {
        1000.0 * self.mor
    }

    /// Distance travelled by light during one half-power pulse width, halved
    ///
    /// This is the shift applied to plotted ranges so that the transmitted
    /// pulse peak sits at the origin.
    #[inline]
    pub fn pulse_half_length(&self) -> f64 {
        self.tau_h * SPEED_OF_LIGHT / 2.0
    }

    /// Admissible interval and slider scale for `param`
    ///
    /// `beta` bounds follow the current MOR and the lower bound of `r_2`
    /// is the current `r_1`.
    pub fn bounds(&self, param: Param) -> ParamBounds {
        match param {
            Param::RRange => ParamBounds::new(50.0, 500.0, 1.0),
            Param::N => ParamBounds::new(100.0, 1000.0, 1.0),
            Param::Alpha => ParamBounds::new(0.003, 0.5, 1000.0),
            Param::Beta => {
                ParamBounds::new(0.023 / self.mor, 0.092 / self.mor, self.beta_scale())
            }
            Param::P0 => ParamBounds::new(60.0, 100.0, 1.0),
            Param::TauH => ParamBounds::new(5e-9, 8e-8, 1e9),
            Param::Ar => ParamBounds::new(0.01, 0.5, 1000.0),
            Param::Lr => ParamBounds::new(0.01, 0.10, 100.0),
            Param::R1 => ParamBounds::new(0.0, 10.0, 10.0),
            Param::R2 => ParamBounds::new(self.r_1, 10.0, 10.0),
            Param::R0 => ParamBounds::new(1.0, 200.0, 1.0),
            Param::Gamma => ParamBounds::new(1e-7, 1e-5, 1e7),
        }
    }

    /// Current value of `param`
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::RRange => self.r_range,
            Param::N => self.n as f64,
            Param::Alpha => self.alpha,
            Param::Beta => self.beta,
            Param::P0 => self.p_0,
            Param::TauH => self.tau_h,
            Param::Ar => self.a_r,
            Param::Lr => self.l_r,
            Param::R1 => self.r_1,
            Param::R2 => self.r_2,
            Param::R0 => self.r_0,
            Param::Gamma => self.gamma,
        }
    }

    /// Write `param`, clamped into its bounds, and re-derive
    ///
    /// Changing `alpha` rescales `beta` so that `β · MOR` (and with it the
    /// `beta` slider position) stays put. Returns the value actually stored.
    pub fn set(&mut self, param: Param, value: f64) -> f64 {
        let bounds = self.bounds(param);
        let clamped = bounds.clamp(value);
        if clamped != value {
            debug!(
                "{} = {} outside [{}, {}], clamped to {}",
                param, value, bounds.min, bounds.max, clamped
            );
        }

        match param {
            Param::RRange => self.r_range = clamped,
            Param::N => self.n = (clamped.round() as usize).max(2),
            Param::Alpha => {
                // beta is held at a fixed multiple of 1/MOR
                let beta_mor = self.beta * self.mor;
                self.alpha = clamped;
                self.beta = beta_mor / meteorological_optical_range(clamped);
            }
            Param::Beta => self.beta = clamped,
            Param::P0 => self.p_0 = clamped,
            Param::TauH => self.tau_h = clamped,
            Param::Ar => self.a_r = clamped,
            Param::Lr => self.l_r = clamped,
            Param::R1 => self.r_1 = clamped,
            Param::R2 => self.r_2 = clamped,
            Param::R0 => self.r_0 = clamped,
            Param::Gamma => self.gamma = clamped,
        }

        self.recompute_derived();
        self.get(param)
    }

    /// Write `param` from a slider position
    pub fn set_from_slider(&mut self, param: Param, position: i64) -> f64 {
        let value = self.bounds(param).slider_value(position);
        self.set(param, value)
    }

    /// Slider position of the current value of `param`
    pub fn slider_position(&self, param: Param) -> i64 {
        self.bounds(param).slider_position(self.get(param))
    }

    pub fn toggle_xsi_mode(&mut self) {
        self.xsi_mode = self.xsi_mode.toggled();
    }

    /// Check the preconditions the model functions rely on
    ///
    /// # Errors
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(ParameterError::NonPositiveAttenuation(self.alpha));
        }
        if self.r_0.is_nan() || self.r_0 <= 0.0 {
            return Err(ParameterError::NonPositiveTargetRange(self.r_0));
        }
        if self.tau_h.is_nan() || self.tau_h <= 0.0 {
            return Err(ParameterError::NonPositivePulseWidth(self.tau_h));
        }
        if self.n < 2 {
            return Err(ParameterError::TooFewSamples(self.n));
        }

        for param in [
            Param::RRange,
            Param::Beta,
            Param::P0,
            Param::Ar,
            Param::Lr,
            Param::R1,
            Param::R2,
            Param::Gamma,
        ] {
            let value = self.get(param);
            if value.is_nan() || value < 0.0 {
                return Err(ParameterError::Negative { param, value });
            }
        }

        Ok(())
    }
}
