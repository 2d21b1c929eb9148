//! # Trajectory Smoother
//!
//! Cubic-spline smoothing and even-spacing resampling for 3D pose
//! trajectories.
//!
//! ## Overview
//!
//! Recorded pose sequences are rarely usable as motion targets: samples
//! bunch up where the recorder lingered, spread out where it rushed, and
//! carry jitter in both position and orientation. This library fits seven
//! independent natural cubic splines through the samples (three position
//! components, four quaternion components), measures the fitted path by
//! arc length, and lays down fresh poses at an even distance interval with
//! each pose's forward axis aimed along the direction of travel.
//!
//! ## Quick Start
//!
//! ```
//! use nalgebra::{Point3, UnitQuaternion};
//! use trajectory_smoother::{smooth, Pose};
//!
//! // A sparse recording along the x axis.
//! let raw: Vec<Pose> = (0..6)
//!     .map(|i| Pose::new(Point3::new(i as f64, 0.0, 0.0), UnitQuaternion::identity()))
//!     .collect();
//!
//! // Resample it with half a unit between consecutive poses.
//! let dense = smooth(&raw, 0.5)?;
//!
//! assert!(dense.len() > raw.len());
//! # Ok::<(), trajectory_smoother::Error>(())
//! ```
//!
//! For repeated resampling of one recording, fit once and reuse the state:
//! [`TrajectorySmoother::fit`] followed by any number of
//! [`TrajectorySmoother::resample_with_spacing`] calls.
//!
//! ## Architecture
//!
//! - [`pose`]: pose representation, fallible normalization, input prefilter
//! - [`curve`]: natural cubic spline over uniformly indexed samples
//! - [`smoothing`]: channel fitting, arc-length walking, resampling,
//!   heading alignment, and the [`TrajectorySmoother`] front door
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Pose samples│───▶│ Channel fit │───▶│ Arc-length  │───▶│   Heading   │
//! │ (sparse)    │    │ (7 splines) │    │  resample   │    │  alignment  │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//! ```

pub mod curve;
pub mod pose;
pub mod smoothing;

// Re-export commonly used types
pub use curve::CubicSpline;
pub use pose::{moving_average, Pose};
pub use smoothing::{
    align_headings, resample, smooth, ArcLengthWalker, ArcStep, PoseCurveSet, SmootherConfig,
    TrajectorySmoother, DEFAULT_INTEGRATION_STEPS,
};

/// Result type alias for the trajectory smoother
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the trajectory smoother
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("at least {required} samples are required, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("point spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("orientation magnitude vanished at parameter {parameter}")]
    DegenerateOrientation { parameter: f64 },

    #[error("curve evaluation produced a non-finite value at parameter {parameter}")]
    NonFiniteEvaluation { parameter: f64 },

    #[error("singular tridiagonal system while fitting spline coefficients")]
    SingularSystem,
}
