//! Per-channel cubic fitting of a pose sequence
//!
//! A trajectory is decomposed into seven scalar channels (x, y, z and the
//! four quaternion components), each fit as a natural cubic spline over
//! the sample index. Sample `i` sits at parameter `i`, so all channels
//! share the domain `[0, N-1]` and one parameter value addresses one pose
//! on the smoothed path.
//!
//! Quaternion samples are made sign-consistent before fitting: `q` and
//! `-q` encode the same rotation, and recordings hop between the two.
//! Interpolating across such a hop would drag the components through zero
//! instead of holding the orientation steady.

use nalgebra::{Point3, Quaternion};
use tracing::debug;

use crate::curve::CubicSpline;
use crate::pose::Pose;
use crate::{Error, Result};

/// The seven fitted channels of one trajectory.
#[derive(Debug, Clone)]
pub struct PoseCurveSet {
    x: CubicSpline,
    y: CubicSpline,
    z: CubicSpline,
    qx: CubicSpline,
    qy: CubicSpline,
    qz: CubicSpline,
    qw: CubicSpline,
    max_parameter: f64,
}

impl PoseCurveSet {
    /// Fit all seven channels through `poses`, sample `i` at parameter `i`.
    ///
    /// Needs at least two poses; on failure no partial state escapes.
    pub fn fit(poses: &[Pose]) -> Result<Self> {
        let n = poses.len();
        if n < 2 {
            return Err(Error::InsufficientSamples {
                required: 2,
                actual: n,
            });
        }

        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);
        let mut qx = Vec::with_capacity(n);
        let mut qy = Vec::with_capacity(n);
        let mut qz = Vec::with_capacity(n);
        let mut qw = Vec::with_capacity(n);

        let mut sign_flips = 0usize;
        let mut prev = poses[0].orientation.into_inner();

        for pose in poses {
            x.push(pose.position.x);
            y.push(pose.position.y);
            z.push(pose.position.z);

            let mut q = pose.orientation.into_inner();
            if prev.dot(&q) < 0.0 {
                q = -q;
                sign_flips += 1;
            }
            qx.push(q.i);
            qy.push(q.j);
            qz.push(q.k);
            qw.push(q.w);
            prev = q;
        }

        debug!(samples = n, sign_flips, "fit trajectory channels");

        Ok(Self {
            x: CubicSpline::fit(&x)?,
            y: CubicSpline::fit(&y)?,
            z: CubicSpline::fit(&z)?,
            qx: CubicSpline::fit(&qx)?,
            qy: CubicSpline::fit(&qy)?,
            qz: CubicSpline::fit(&qz)?,
            qw: CubicSpline::fit(&qw)?,
            max_parameter: (n - 1) as f64,
        })
    }

    /// Upper end of the shared parameter domain (sample count minus one).
    #[inline]
    pub fn max_parameter(&self) -> f64 {
        self.max_parameter
    }

    /// Number of input poses behind each channel.
    pub fn sample_count(&self) -> usize {
        self.x.sample_count()
    }

    /// Evaluate the position channels at parameter `t`.
    #[inline]
    pub fn position_at(&self, t: f64) -> Point3<f64> {
        Point3::new(self.x.evaluate(t), self.y.evaluate(t), self.z.evaluate(t))
    }

    /// Evaluate all seven channels at parameter `t` and rebuild a pose.
    ///
    /// The interpolated quaternion is generally not unit magnitude and is
    /// renormalized here. Fails when any channel evaluates non-finite or
    /// the quaternion magnitude vanishes.
    pub fn pose_at(&self, t: f64) -> Result<Pose> {
        let position = self.position_at(t);
        let raw = Quaternion::new(
            self.qw.evaluate(t),
            self.qx.evaluate(t),
            self.qy.evaluate(t),
            self.qz.evaluate(t),
        );

        let finite = position.coords.iter().all(|v| v.is_finite())
            && raw.coords.iter().all(|v| v.is_finite());
        if !finite {
            return Err(Error::NonFiniteEvaluation { parameter: t });
        }

        Pose::from_raw(position, raw).ok_or(Error::DegenerateOrientation { parameter: t })
    }
}
