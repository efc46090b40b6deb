use super::*;

/// LineSegment defined by a start and an endpoint, evaluatable
/// anywhere inbetween using interpolation parameter t: [0,1] in eval().
/// The euclidean length is computed once on construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSegment<P: Point> {
    pub(crate) start: P,
    pub(crate) end: P,
    pub(crate) length: P::Scalar,
}

impl<P> Spline<P> for LineSegment<P>
where
    P: Point,
{
    fn eval(&self, t: P::Scalar) -> P {
        self.eval(t)
    }
}

impl<P> LineSegment<P>
where
    P: Point,
{
    pub fn new(start: P, end: P) -> Self {
        LineSegment {
            start,
            end,
            length: end.distance(start),
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    pub fn length(&self) -> P::Scalar {
        self.length
    }

    pub fn eval(&self, t: P::Scalar) -> P {
        self.start + (self.end - self.start) * t
    }

    /// Parameter t in [0,1] of the point on the segment closest to `p`.
    /// Zero-length segments project everything onto their start.
    pub fn project(&self, p: P) -> P::Scalar {
        let dir = self.end - self.start;
        let l2 = dir.squared_norm();
        if l2 <= P::Scalar::zero() {
            return P::Scalar::zero();
        }
        let v = p - self.start;
        let dot = (0..P::DIM).fold(P::Scalar::zero(), |acc, i| acc + v.axis(i) * dir.axis(i));
        (dot / l2).max(P::Scalar::zero()).min(P::Scalar::one())
    }

    /// Return the distance from the LineSegment to Point p by calculating the projection
    pub fn distance_to_point(&self, p: P) -> P::Scalar {
        p.distance(self.eval(self.project(p)))
    }
}
