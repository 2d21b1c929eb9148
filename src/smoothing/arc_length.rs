//! Arc-length measurement along a fitted trajectory
//!
//! The spline parameter is a sample index, not a distance: equal parameter
//! steps cover unequal path lengths wherever the input samples bunch up or
//! spread out. Resampling at even distances therefore needs the map from
//! distance traveled to parameter value. This module approximates it by
//! walking the parameter in fixed increments and summing chord lengths
//! between consecutive evaluated positions.

use nalgebra::Point3;
use tracing::debug;

use crate::smoothing::curve_fitting::PoseCurveSet;

/// Parameter increments per walk of the full domain.
///
/// One thousandth of the domain keeps the chord-sum error well below any
/// spacing worth resampling at, while bounding the work per walk.
pub const DEFAULT_INTEGRATION_STEPS: usize = 1000;

/// Where an arc-length seek landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStep {
    /// Parameter value reached.
    pub parameter: f64,
    /// Cumulative distance actually traveled since the walk started.
    pub traveled: f64,
}

/// Resumable cursor mapping cumulative path distance to parameter values.
///
/// The cursor only moves forward: each [`seek`](Self::seek) continues from
/// where the previous one stopped, so walking a whole series of resample
/// targets costs one traversal of the curve regardless of how many targets
/// there are.
#[derive(Debug)]
pub struct ArcLengthWalker<'a> {
    curves: &'a PoseCurveSet,
    step: f64,
    parameter: f64,
    position: Point3<f64>,
    traveled: f64,
}

impl<'a> ArcLengthWalker<'a> {
    /// Start a walk at parameter 0 with the default step resolution.
    pub fn new(curves: &'a PoseCurveSet) -> Self {
        Self::with_steps(curves, DEFAULT_INTEGRATION_STEPS)
    }

    /// Start a walk at parameter 0, dividing the domain into `steps`
    /// increments (at least one).
    pub fn with_steps(curves: &'a PoseCurveSet, steps: usize) -> Self {
        Self {
            curves,
            step: curves.max_parameter() / steps.max(1) as f64,
            parameter: 0.0,
            position: curves.position_at(0.0),
            traveled: 0.0,
        }
    }

    /// Parameter value the cursor currently sits at.
    #[inline]
    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    /// Cumulative distance traveled so far.
    #[inline]
    pub fn traveled(&self) -> f64 {
        self.traveled
    }

    /// Advance until the cumulative distance reaches `target` or the
    /// parameter domain runs out, whichever comes first.
    ///
    /// Returns the parameter reached and the distance actually
    /// accumulated, which overshoots `target` by at most one chord. A
    /// target at or below the distance already traveled returns without
    /// moving; the cursor never walks backward.
    pub fn seek(&mut self, target: f64) -> ArcStep {
        let max_parameter = self.curves.max_parameter();

        while self.traveled < target && self.parameter < max_parameter {
            let next = (self.parameter + self.step).min(max_parameter);
            let position = self.curves.position_at(next);
            // Coincident samples yield zero-length chords; they advance
            // the parameter without adding distance.
            self.traveled += (position - self.position).norm();
            self.parameter = next;
            self.position = position;
        }

        ArcStep {
            parameter: self.parameter,
            traveled: self.traveled,
        }
    }

    /// Total chord-sum length of `curves` over the full domain.
    pub fn total_distance(curves: &PoseCurveSet, steps: usize) -> f64 {
        let mut walker = ArcLengthWalker::with_steps(curves, steps);
        let total = walker.seek(f64::INFINITY).traveled;
        debug!(total, steps, "integrated trajectory arc length");
        total
    }
}
