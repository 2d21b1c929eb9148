//! Travel-direction orientation alignment
//!
//! Channel-wise quaternion interpolation keeps orientations smooth but
//! leaves them ignorant of where the resampled path actually goes. This
//! pass re-aims each pose's local +X axis at its successor's position
//! using the smallest rotation that does the job, which leaves the roll
//! about the travel direction exactly as interpolation produced it.

use nalgebra::{Unit, UnitQuaternion, Vector3};
use tracing::debug;

use crate::pose::Pose;

/// Directions shorter than this count as no direction at all.
const MIN_DIRECTION_NORM: f64 = 1e-10;

/// Re-aim every pose's forward axis along the path.
///
/// Each pose except the last points at the position of its successor. The
/// last pose has no successor and reuses the heading of the segment
/// arriving at it. A pose whose segment is numerically zero length keeps
/// the orientation it arrived with.
pub fn align_headings(poses: &mut [Pose]) {
    if poses.len() < 2 {
        return;
    }

    let mut aligned = 0usize;
    for i in 0..poses.len() {
        let (from, to) = if i + 1 < poses.len() {
            (poses[i].position, poses[i + 1].position)
        } else {
            (poses[i - 1].position, poses[i].position)
        };

        let direction = to - from;
        if direction.norm() < MIN_DIRECTION_NORM {
            continue;
        }

        if let Some(rotation) = aim_rotation(&poses[i].forward_axis(), &direction) {
            poses[i].orientation = rotation * poses[i].orientation;
            aligned += 1;
        }
    }

    debug!(poses = poses.len(), aligned, "aligned headings along path");
}

/// Minimal rotation taking `forward` onto the direction of `target`.
///
/// `rotation_between` has no unique answer for opposed vectors; that case
/// is a half turn about an arbitrary axis orthogonal to `forward`.
fn aim_rotation(forward: &Vector3<f64>, target: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
    match UnitQuaternion::rotation_between(forward, target) {
        Some(rotation) => Some(rotation),
        None => {
            let axis = orthogonal_axis(forward)?;
            Some(UnitQuaternion::from_axis_angle(&axis, std::f64::consts::PI))
        }
    }
}

fn orthogonal_axis(v: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    let candidate = v.cross(&Vector3::z());
    let candidate = if candidate.norm() < MIN_DIRECTION_NORM {
        v.cross(&Vector3::y())
    } else {
        candidate
    };
    Unit::try_new(candidate, MIN_DIRECTION_NORM)
}
