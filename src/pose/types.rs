//! Pose representation
//!
//! A pose couples a 3D position with a unit-quaternion orientation. The
//! unit-magnitude invariant is carried by the type: raw quaternion
//! components coming out of per-channel interpolation only become a pose
//! through [`Pose::from_raw`], which normalizes or refuses.

use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Quaternion magnitudes at or below this cannot be normalized.
pub const MIN_ORIENTATION_NORM: f64 = 1e-9;

/// A position and orientation sample along a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in the caller's frame.
    pub position: Point3<f64>,
    /// Orientation in the caller's frame, unit magnitude by construction.
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    /// Create a pose from an already-unit orientation.
    pub fn new(position: Point3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Build a pose from a raw, generally non-unit quaternion.
    ///
    /// Interpolating quaternion components channel by channel denormalizes
    /// them; this is where they get renormalized. Returns `None` when the
    /// magnitude is numerically indistinguishable from zero, which is not
    /// recoverable by scaling.
    pub fn from_raw(position: Point3<f64>, orientation: Quaternion<f64>) -> Option<Self> {
        let orientation = UnitQuaternion::try_new(orientation, MIN_ORIENTATION_NORM)?;
        Some(Self::new(position, orientation))
    }

    /// Local +X axis expressed in the caller's frame.
    ///
    /// This is the axis the heading alignment pass aims along the path.
    #[inline]
    pub fn forward_axis(&self) -> Vector3<f64> {
        self.orientation * Vector3::x()
    }

    /// Blend toward `other` by `alpha`, clamped to `[0, 1]`.
    ///
    /// Positions blend linearly. Orientations blend by normalized linear
    /// interpolation with the target sign-aligned first, so the blend
    /// takes the short way around even when the two quaternions sit on
    /// opposite hemispheres.
    pub fn interpolate(&self, other: &Pose, alpha: f64) -> Pose {
        let alpha = alpha.clamp(0.0, 1.0);
        let position = Point3::from(self.position.coords.lerp(&other.position.coords, alpha));

        let target = if self.orientation.dot(&other.orientation) < 0.0 {
            UnitQuaternion::new_unchecked(-other.orientation.into_inner())
        } else {
            other.orientation
        };
        let orientation = self.orientation.nlerp(&target, alpha);

        Pose::new(position, orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn make_pose(x: f64, y: f64, z: f64) -> Pose {
        Pose::new(Point3::new(x, y, z), UnitQuaternion::identity())
    }

    #[test]
    fn test_from_raw_normalizes() {
        let raw = Quaternion::new(2.0, 0.0, 0.0, 0.0);
        let pose = Pose::from_raw(Point3::origin(), raw).unwrap();

        assert!((pose.orientation.norm() - 1.0).abs() < 1e-12);
        assert!(pose.orientation.angle() < 1e-12);
    }

    #[test]
    fn test_from_raw_rejects_vanishing_magnitude() {
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(Pose::from_raw(Point3::origin(), zero).is_none());

        let tiny = Quaternion::new(1e-12, 1e-12, 0.0, 0.0);
        assert!(Pose::from_raw(Point3::origin(), tiny).is_none());
    }

    #[test]
    fn test_forward_axis_follows_orientation() {
        let pose = make_pose(0.0, 0.0, 0.0);
        assert!((pose.forward_axis() - Vector3::x()).norm() < 1e-12);

        let turned = Pose::new(
            Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        );
        assert!((turned.forward_axis() - Vector3::y()).norm() < 1e-9);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let a = make_pose(0.0, 0.0, 0.0);
        let b = Pose::new(
            Point3::new(2.0, 0.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        );

        let mid = a.interpolate(&b, 0.5);

        assert!((mid.position - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((mid.orientation.angle() - FRAC_PI_2 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_takes_short_way() {
        let a = make_pose(0.0, 0.0, 0.0);
        let small_turn = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.2);
        // Same rotation, opposite quaternion hemisphere.
        let flipped = UnitQuaternion::new_unchecked(-small_turn.into_inner());
        let b = Pose::new(Point3::origin(), flipped);

        let mid = a.interpolate(&b, 0.5);

        assert!((mid.orientation.angle() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_clamps_alpha() {
        let a = make_pose(0.0, 0.0, 0.0);
        let b = make_pose(4.0, 0.0, 0.0);

        let past = a.interpolate(&b, 2.5);
        assert!((past.position - b.position).norm() < 1e-12);

        let before = a.interpolate(&b, -1.0);
        assert!((before.position - a.position).norm() < 1e-12);
    }

    #[test]
    fn test_serde_round_trip() {
        let pose = Pose::new(
            Point3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.4),
        );

        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();

        assert!((back.position - pose.position).norm() < 1e-12);
        assert!(back.orientation.angle_to(&pose.orientation) < 1e-12);
    }
}
