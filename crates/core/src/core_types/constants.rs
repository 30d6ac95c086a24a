//! Physical constants shared by the radiometric model

/// Speed of light in vacuum (m/s), exact SI value
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Contrast threshold used by the meteorological optical range definition.
///
/// MOR is the distance at which a collimated beam drops to 5% of its
/// initial flux, so `MOR = ln(1 / 0.05) / α = ln(20) / α`.
pub const MOR_CONTRAST_INVERSE: f64 = 20.0;

/// Meteorological optical range (m) for an attenuation coefficient `alpha` (1/m)
///
/// `alpha` must be positive; zero yields `inf`.
#[inline]
pub fn meteorological_optical_range(alpha: f64) -> f64 {
    MOR_CONTRAST_INVERSE.ln() / alpha
}
