//! Trajectory smoothing pipeline
//!
//! [`TrajectorySmoother`] turns a sparse pose sequence into an evenly
//! spaced one in four stages:
//! - optional moving-average prefilter over the raw poses
//! - per-channel natural cubic fit ([`PoseCurveSet`])
//! - arc-length walk mapping even distance targets back to parameters
//! - travel-direction heading alignment
//!
//! Fitting happens once per input sequence; resampling can run any number
//! of times against the same fitted state, with different spacings.

pub mod arc_length;
pub mod curve_fitting;
pub mod heading_alignment;
pub mod resampling;

pub use arc_length::{ArcLengthWalker, ArcStep, DEFAULT_INTEGRATION_STEPS};
pub use curve_fitting::PoseCurveSet;
pub use heading_alignment::align_headings;
pub use resampling::resample;

use tracing::debug;

use crate::pose::{moving_average, Pose};
use crate::Result;

/// Settings for [`TrajectorySmoother`].
#[derive(Debug, Clone)]
pub struct SmootherConfig {
    /// Path distance between consecutive output poses.
    pub point_spacing: f64,
    /// Moving-average window applied to the input before fitting.
    /// 0 or 1 disables the prefilter.
    pub prefilter_window: usize,
    /// Parameter increments per arc-length walk of the full domain.
    pub integration_steps: usize,
}

impl SmootherConfig {
    /// Settings with the given spacing, no prefilter, default resolution.
    pub fn new(point_spacing: f64) -> Self {
        Self {
            point_spacing,
            prefilter_window: 0,
            integration_steps: DEFAULT_INTEGRATION_STEPS,
        }
    }

    /// Enable the input prefilter with the given window width.
    pub fn with_prefilter_window(mut self, window: usize) -> Self {
        self.prefilter_window = window;
        self
    }

    /// Override the arc-length walk resolution (at least one step).
    pub fn with_integration_steps(mut self, steps: usize) -> Self {
        self.integration_steps = steps.max(1);
        self
    }
}

/// Fitted smoothing state for one input sequence.
///
/// Construction fits the seven channels and integrates the total path
/// length; the state never mutates afterwards, so repeated resampling is
/// cheap and concurrent use needs no coordination.
#[derive(Debug)]
pub struct TrajectorySmoother {
    curves: PoseCurveSet,
    total_distance: f64,
    config: SmootherConfig,
}

impl TrajectorySmoother {
    /// Fit a smoother over `poses` with the given output spacing.
    ///
    /// Fails when fewer than two poses are supplied. The spacing is not
    /// checked here; resampling validates whatever spacing it ends up
    /// using.
    pub fn fit(poses: &[Pose], point_spacing: f64) -> Result<Self> {
        Self::with_config(poses, SmootherConfig::new(point_spacing))
    }

    /// Fit a smoother with explicit settings.
    pub fn with_config(poses: &[Pose], config: SmootherConfig) -> Result<Self> {
        // Step 1: knock recording jitter out of the raw samples.
        let curves = if config.prefilter_window > 1 {
            let filtered = moving_average(poses, config.prefilter_window);
            PoseCurveSet::fit(&filtered)?
        } else {
            PoseCurveSet::fit(poses)?
        };

        // Step 2: integrate the path length once; every resample reuses it.
        let total_distance = ArcLengthWalker::total_distance(&curves, config.integration_steps);

        debug!(
            samples = poses.len(),
            total_distance, "fitted trajectory smoother"
        );

        Ok(Self {
            curves,
            total_distance,
            config,
        })
    }

    /// Resample at the spacing captured at construction.
    pub fn resample(&self) -> Result<Vec<Pose>> {
        self.resample_with_spacing(self.config.point_spacing)
    }

    /// Resample at an override spacing, leaving the configured one alone.
    pub fn resample_with_spacing(&self, spacing: f64) -> Result<Vec<Pose>> {
        // Step 3: place poses at even distance targets.
        let mut poses = resample(
            &self.curves,
            self.total_distance,
            spacing,
            self.config.integration_steps,
        )?;

        // Step 4: aim each pose along the path it now follows.
        align_headings(&mut poses);

        Ok(poses)
    }

    /// Integrated length of the fitted path.
    #[inline]
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Upper end of the parameter domain (sample count minus one).
    #[inline]
    pub fn max_parameter(&self) -> f64 {
        self.curves.max_parameter()
    }

    /// Output spacing captured at construction.
    #[inline]
    pub fn point_spacing(&self) -> f64 {
        self.config.point_spacing
    }

    /// The fitted channels, for callers that want raw curve access.
    pub fn curves(&self) -> &PoseCurveSet {
        &self.curves
    }
}

/// Smooth `poses` into an evenly spaced trajectory in one call.
///
/// Equivalent to [`TrajectorySmoother::fit`] followed by
/// [`TrajectorySmoother::resample`], holding no state across the call.
pub fn smooth(poses: &[Pose], point_spacing: f64) -> Result<Vec<Pose>> {
    TrajectorySmoother::fit(poses, point_spacing)?.resample()
}
