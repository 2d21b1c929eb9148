//! Even-spacing resampling of a fitted trajectory

use tracing::debug;

use crate::pose::Pose;
use crate::smoothing::arc_length::ArcLengthWalker;
use crate::smoothing::curve_fitting::PoseCurveSet;
use crate::{Error, Result};

/// Lay fresh poses along `curves` at even distance intervals of `spacing`.
///
/// `total_distance` is the integrated length of `curves` and `steps` the
/// walk resolution used to locate each target distance. The first output
/// pose sits at parameter 0 and the last exactly at the end of the
/// domain, whatever residue of `spacing` is left before it; every pose in
/// between sits one `spacing` of path length after its predecessor, up to
/// walk resolution. Output order follows distance along the path.
///
/// Fails on a non-positive or non-finite `spacing`, and propagates any
/// degenerate or non-finite evaluation without producing partial output.
pub fn resample(
    curves: &PoseCurveSet,
    total_distance: f64,
    spacing: f64,
    steps: usize,
) -> Result<Vec<Pose>> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(Error::InvalidSpacing(spacing));
    }

    // One pose per spacing interval plus the start, never fewer than the
    // two endpoints, even for a zero-length path. Ratios a rounding error
    // shy of an integer count as exact, so a 10-unit path at spacing 2
    // yields six poses, not seven.
    let ratio = total_distance / spacing;
    let intervals = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round()
    } else {
        ratio.ceil()
    };
    let n_points = (intervals as usize + 1).max(2);

    let mut walker = ArcLengthWalker::with_steps(curves, steps);
    let mut output = Vec::with_capacity(n_points);

    for k in 0..n_points {
        let parameter = if k == n_points - 1 {
            // The final pose always lands on the end of the domain.
            curves.max_parameter()
        } else {
            walker.seek(k as f64 * spacing).parameter
        };
        output.push(curves.pose_at(parameter)?);
    }

    debug!(
        points = output.len(),
        spacing, total_distance, "resampled trajectory"
    );
    Ok(output)
}
