use tinyvec::ArrayVec;

use super::*;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.eval(t)
    }
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Build a curve from an ordered sequence of control points.
    /// Anything but exactly four points is rejected with `InvalidCurveDefinition`.
    pub fn from_points<I>(points: I) -> Result<Self, ResampleError>
    where
        I: IntoIterator<Item = P>,
    {
        let mut iter = points.into_iter();
        let mut buf: ArrayVec<[P; 4]> = ArrayVec::new();
        let mut rejected = 0;
        for p in iter.by_ref() {
            if buf.try_push(p).is_some() {
                rejected = 1;
                break;
            }
        }
        // points beyond the fourth are only counted
        let found = buf.len() + rejected + iter.count();
        match buf.as_slice() {
            [start, ctrl1, ctrl2, end] if found == 4 => {
                Ok(CubicBezier::new(*start, *ctrl1, *ctrl2, *end))
            }
            _ => Err(ResampleError::InvalidCurveDefinition { found }),
        }
    }

    /// Returns a copy of the control points in order start, ctrl1, ctrl2, end.
    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t by direct evaluation of the Bernstein polynomials.
    /// Returns exactly `start` for t = 0 and exactly `end` for t = 1.
    pub fn eval(&self, t: P::Scalar) -> P {
        let three = count_to_scalar::<P::Scalar>(3);
        let one_t = P::Scalar::one() - t;

        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * t * one_t * one_t)
            + self.ctrl2 * (three * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }

    /// Approximates the arc length of the curve by flattening it with `nsteps` straight line segments.
    /// Remember this works by linear approximation, not the integral, so the result
    /// always underestimates the true length slightly.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        let nsteps = nsteps.max(1);
        let steps: P::Scalar = count_to_scalar(nsteps);
        let mut arclen = P::Scalar::zero();
        let mut prev = self.start;
        for i in 1..=nsteps {
            let p = self.eval(count_to_scalar::<P::Scalar>(i) / steps);
            arclen = arclen + p.distance(prev);
            prev = p;
        }
        arclen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    #[test]
    fn eval_endpoints_exact() {
        let bezier = CubicBezier::new(
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
        );
        assert_eq!(bezier.eval(0.0), PointN::new([0f64, 1.77f64]));
        assert_eq!(bezier.eval(1.0), PointN::new([3.2f64, -4f64]));
    }

    #[test]
    fn circle_approximation_error() {
        // define closure for unit circle
        let circle = |p: PointN<f64, 2>| -> f64 { p.squared_norm().sqrt() - 1f64 };

        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let quadrant = CubicBezier::new(
            PointN::new([0f64, 1f64]),
            PointN::new([c, 1f64]),
            PointN::new([1f64, c]),
            PointN::new([1f64, 0f64]),
        );
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            assert!(circle(quadrant.eval(t)).abs() <= max_error);
        }
        // a quarter of the unit circle is pi/2 long
        let quarter = quadrant.arclen(1000);
        assert!((quarter - core::f64::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn eval_equivalence_casteljau() {
        let bezier = CubicBezier::new(
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = bezier.eval(t) - bezier.eval_casteljau(t);
            assert!(err.squared_norm() < EPSILON);
        }
    }

    #[test]
    fn from_points_requires_four() {
        let p = |x: f64| PointN::new([x, 0.0]);
        assert_eq!(
            CubicBezier::from_points([p(0.0), p(1.0), p(2.0)]),
            Err(ResampleError::InvalidCurveDefinition { found: 3 })
        );
        assert_eq!(
            CubicBezier::from_points([p(0.0), p(1.0), p(2.0), p(3.0), p(4.0), p(5.0)]),
            Err(ResampleError::InvalidCurveDefinition { found: 6 })
        );
        // nothing left over after the rejected fifth point
        assert_eq!(
            CubicBezier::from_points([p(0.0), p(1.0), p(2.0), p(3.0), p(4.0)]),
            Err(ResampleError::InvalidCurveDefinition { found: 5 })
        );
        assert_eq!(
            CubicBezier::<PointN<f64, 2>>::from_points([]),
            Err(ResampleError::InvalidCurveDefinition { found: 0 })
        );
        let curve = CubicBezier::from_points([p(0.0), p(1.0), p(2.0), p(3.0)]).unwrap();
        assert_eq!(curve.control_points(), [p(0.0), p(1.0), p(2.0), p(3.0)]);
    }

    #[test]
    fn sample_covers_closed_interval() {
        let bezier = CubicBezier::new(
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 0f64]),
            PointN::new([1f64, 1f64]),
            PointN::new([0f64, 1f64]),
        );
        let samples = bezier.sample(10).unwrap();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0], bezier.start);
        assert_eq!(samples[10], bezier.end);
        // symmetric curve: t = 0.5 lies on the axis of symmetry
        assert!((samples[5] - PointN::new([0.75, 0.5])).squared_norm() < EPSILON);

        assert_eq!(bezier.sample(0), Err(ResampleError::InvalidSampleCount));
    }

    #[test]
    fn sample_with_maps_every_point() {
        let bezier = CubicBezier::new(
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 2f64]),
            PointN::new([3f64, -1f64]),
            PointN::new([4f64, 0f64]),
        );
        let plain = bezier.sample(8).unwrap();
        let shifted = bezier
            .sample_with(8, |p| p + PointN::new([10.0, -10.0]))
            .unwrap();
        assert_eq!(plain.len(), shifted.len());
        for (a, b) in plain.iter().zip(shifted.iter()) {
            assert!((*b - *a - PointN::new([10.0, -10.0])).squared_norm() < EPSILON);
        }
    }

    #[test]
    fn arclen_of_straight_curve() {
        // evenly spaced colinear control points trace the segment with uniform speed
        let bezier = CubicBezier::new(
            PointN::new([0f64, 0f64]),
            PointN::new([1f64, 0f64]),
            PointN::new([2f64, 0f64]),
            PointN::new([3f64, 0f64]),
        );
        assert!((bezier.arclen(64) - 3.0).abs() < EPSILON);
    }
}
