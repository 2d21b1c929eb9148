//! Moving-average prefilter for raw pose sequences
//!
//! Recorded pose streams carry sensor jitter that a cubic fit would
//! faithfully reproduce. This pass averages each pose with its neighbors
//! over a fixed-width window before any curve is fit. The window shrinks
//! symmetrically near the sequence ends, so the first and last poses pass
//! through untouched and the path keeps its endpoints.

use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use tracing::debug;

use crate::pose::{Pose, MIN_ORIENTATION_NORM};

/// Average `poses` over a centered window of `window` samples.
///
/// A window of 0 or 1 returns the input unchanged. Even widths are
/// treated as the next odd width so the window stays centered.
pub fn moving_average(poses: &[Pose], window: usize) -> Vec<Pose> {
    if window <= 1 {
        return poses.to_vec();
    }

    let half = window / 2;
    let mut filtered = Vec::with_capacity(poses.len());

    for i in 0..poses.len() {
        // Shrink to the largest window still centered on i.
        let reach = half.min(i).min(poses.len() - 1 - i);
        filtered.push(window_average(&poses[i - reach..=i + reach], &poses[i]));
    }

    debug!(
        window,
        count = filtered.len(),
        "applied moving-average prefilter"
    );
    filtered
}

/// Average one window of poses.
///
/// Positions average component-wise. Orientations average sign-aligned
/// quaternion components and renormalize; if the sum degenerates (only
/// possible for near-antipodal spreads), the center pose keeps its own
/// orientation.
fn window_average(window: &[Pose], center: &Pose) -> Pose {
    let inv = 1.0 / window.len() as f64;

    let mut position = Vector3::zeros();
    let mut orientation = Quaternion::new(0.0, 0.0, 0.0, 0.0);

    for pose in window {
        position += pose.position.coords;
        let q = if center.orientation.dot(&pose.orientation) < 0.0 {
            -pose.orientation.into_inner()
        } else {
            pose.orientation.into_inner()
        };
        orientation += q;
    }

    let position = Point3::from(position * inv);
    match UnitQuaternion::try_new(orientation, MIN_ORIENTATION_NORM) {
        Some(averaged) => Pose::new(position, averaged),
        None => Pose::new(position, center.orientation),
    }
}
