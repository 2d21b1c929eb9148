//! Pose data model and input preprocessing
//!
//! This module owns the pose representation shared by the whole pipeline:
//! - a position plus unit-quaternion orientation sample ([`Pose`])
//! - fallible normalization of raw interpolated quaternions
//! - an optional moving-average prefilter for jittery recordings

pub mod prefilter;
pub mod types;

pub use prefilter::moving_average;
pub use types::{Pose, MIN_ORIENTATION_NORM};
