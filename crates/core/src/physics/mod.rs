//! Radiometric model of a pulsed LIDAR in fog
//!
//! Every function here is pure: it reads a [`ParameterSet`](crate::ParameterSet)
//! snapshot and a range (m) and returns a power (W), fraction or angle. The
//! caller is expected to keep `alpha > 0`, `r_0 > 0` and `tau_h > 0`.
//!
//! # References
//! - Rasshofer, R.H., Spies, M., Spies, H. (2011). "Influences of weather
//!   phenomena on automotive laser radar systems." Advances in Radio Science, 9, 49-60.
//! - Hahner, M., Sakaridis, C., Dai, D., Van Gool, L. (2021). "Fog Simulation on
//!   Real LiDAR Point Clouds for 3D Object Detection in Adverse Weather." ICCV.

pub mod combined;
pub mod geometry;
pub mod hard_target;
pub mod overlap;
pub mod quadrature;
pub mod soft_target;

pub use combined::{fog_response, fog_response_with_samples};
pub use geometry::{
    receiver_overlap_angle, receiver_overlap_angle_at_target, receiver_radius,
    receiver_radius_at_target, transmitter_overlap_angle, transmitter_overlap_angle_at_target,
    transmitter_radius, transmitter_radius_at_target,
};
pub use hard_target::{
    clear_hard_target_response, fog_hard_target_response, hard_target_transmission,
};
pub use overlap::{xsi, xsi_at_target, xsi_profile};
pub use quadrature::{linspace, simpson};
pub use soft_target::{
    fog_soft_target_response, fog_soft_target_response_with_samples, inverse_square_modified,
    inverse_square_modified_at,
};
