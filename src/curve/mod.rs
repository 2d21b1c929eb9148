//! Scalar curve machinery
//!
//! Every trajectory channel (a position component or a quaternion
//! component) is treated as a plain scalar function of its sample index
//! and fit independently. This module holds the spline that does it.

pub mod cubic_spline;

pub use cubic_spline::CubicSpline;
