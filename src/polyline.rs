//! Piecewise linear approximation of a sampled curve.

use alloc::vec::Vec;
use core::slice;

use super::*;

/// An ordered, index addressable sequence of line segments connecting consecutive points,
/// together with the sum of their lengths.
/// A polyline always holds at least one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline<P: Point> {
    segments: Vec<LineSegment<P>>,
    total_length: P::Scalar,
}

/// Where a point sits along a polyline, see `Polyline::locate()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Location<S> {
    /// Index of the closest segment.
    pub segment: usize,
    /// Arc length from the start of the polyline to the closest point on it.
    pub arc_length: S,
    /// Euclidean distance between the located point and the polyline.
    pub distance: S,
}

impl<P> Polyline<P>
where
    P: Point,
{
    /// Connects every pair of consecutive `points` with a segment.
    /// Fewer than two points cannot form a segment and yield `InsufficientPoints`.
    pub fn build(points: &[P]) -> Result<Self, ResampleError> {
        if points.len() < 2 {
            return Err(ResampleError::InsufficientPoints {
                found: points.len(),
            });
        }
        let mut segments = Vec::with_capacity(points.len() - 1);
        segments.extend(points.windows(2).map(|pair| LineSegment::new(pair[0], pair[1])));
        let total_length = segments
            .iter()
            .fold(P::Scalar::zero(), |acc, segment| acc + segment.length);

        Ok(Polyline {
            segments,
            total_length,
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> slice::Iter<'_, LineSegment<P>> {
        self.segments.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LineSegment<P>> {
        self.segments.get(index)
    }

    pub fn total_length(&self) -> P::Scalar {
        self.total_length
    }

    pub fn first_point(&self) -> P {
        self.segments[0].start
    }

    pub fn last_point(&self) -> P {
        self.segments[self.segments.len() - 1].end
    }

    /// Returns the point reached after walking `length` along the polyline from its start.
    /// `length` is clamped to [0, total_length].
    pub fn point_at_length(&self, length: P::Scalar) -> P {
        let zero = P::Scalar::zero();
        if length.is_nan() || length <= zero {
            return self.first_point();
        }
        let mut offset = zero;
        for segment in self.segments.iter() {
            if offset + segment.length >= length {
                if segment.length <= zero {
                    return segment.start;
                }
                return segment.eval((length - offset) / segment.length);
            }
            offset = offset + segment.length;
        }
        self.last_point()
    }

    /// Finds the point of the polyline closest to `p` and reports its segment,
    /// its arc length position and its distance to `p`.
    /// Ties go to the earlier segment.
    pub fn locate(&self, p: P) -> Location<P::Scalar> {
        let mut offset = P::Scalar::zero();
        let mut best: Option<Location<P::Scalar>> = None;
        for (index, segment) in self.segments.iter().enumerate() {
            let t = segment.project(p);
            let distance = p.distance(segment.eval(t));
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Location {
                    segment: index,
                    arc_length: offset + segment.length * t,
                    distance,
                });
            }
            offset = offset + segment.length;
        }
        // the first segment always produces a candidate
        best.unwrap_or(Location {
            segment: 0,
            arc_length: P::Scalar::zero(),
            distance: p.distance(self.first_point()),
        })
    }
}
