//! Curve evaluation over a range sweep
//!
//! The evaluator maps a response function over `n` evenly spaced ranges in
//! `[0, r_range]` on a reusable worker pool, then shifts the ranges by
//! `−τ_H·c/2` for plotting.
//!
//! # Example
//!
//! ```rust
//! use lidar_fog_core::solver::CurveEvaluator;
//! use lidar_fog_core::ParameterSet;
//!
//! let mut params = ParameterSet::default();
//! params.n = 100;
//! let evaluator = CurveEvaluator::with_threads(2).unwrap();
//! let curves = evaluator.sweep(&params);
//! assert_eq!(curves.hard.len(), 100);
//! assert_eq!(curves.soft.len(), 100);
//! ```

mod parallel;
mod sampling;

pub use parallel::{CurveEvaluator, EvaluatorError};
pub use sampling::{range_samples, sample_curve, Curve, CurveKind, SweepCurves};
