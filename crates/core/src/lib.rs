//! LIDAR Fog Return Model
//!
//! Computes the optical power received by a pulsed LIDAR in fog, split into
//! the echo of a discrete hard target and the backscatter of the fog itself.
//! Both are evaluated over a range sweep on a reusable worker pool so a front
//! end can re-plot them whenever a parameter changes.
//!
//! ## Layout
//! - [`core_types`]: physical constants and the `ParameterSet` record
//! - [`physics`]: footprint geometry, overlap fraction ξ, hard- and
//!   soft-target responses, Simpson quadrature
//! - [`solver`]: range sweeps and the pooled `CurveEvaluator`
//! - [`simulation`]: `FogSimulation`, the command-driven session object

// Core types and constants
pub mod core_types;

// Radiometric model
pub mod physics;

// Sweep evaluation
pub mod solver;

// Session boundary
pub mod simulation;

// Re-export core types
pub use core_types::{
    Param, ParamBounds, ParameterError, ParameterSet, SensorGeometry, XsiMode, SPEED_OF_LIGHT,
};

// Re-export sweep and session types
pub use simulation::{Command, FogSimulation};
pub use solver::{Curve, CurveEvaluator, CurveKind, EvaluatorError, SweepCurves};
