//! Core types: physical constants and the model parameter record

pub mod constants;
pub mod params;

pub use constants::{meteorological_optical_range, SPEED_OF_LIGHT};
pub use params::{Param, ParamBounds, ParameterError, ParameterSet, SensorGeometry, XsiMode};
