//! Redistribution of points along a polyline so that consecutive points are
//! equally far apart when measured along the polyline (not along the curve parameter).
//!
//! The polyline is walked once from its start. Each breakpoint consumes
//! `total_length / count` of arc length, either ending inside a segment
//! (the point is interpolated) or within `tolerance` of a segment's end
//! (the point snaps onto that vertex). Whatever a snap over- or undershoots
//! is carried into the next step, so every breakpoint `k` is aimed at arc length
//! `k * step` and snapping errors never add up.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use log::{debug, trace, warn};

use super::*;

/// Splits polylines into a fixed number of pieces of equal arc length.
///
/// Parameters are validated once in `new()`, the segmenter can then be applied
/// to any number of polylines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcLengthSegmenter<S> {
    count: usize,
    tolerance: S,
}

impl<S> ArcLengthSegmenter<S>
where
    S: Float + Debug,
{
    /// `count` is the number of pieces (the output has `count + 1` points),
    /// `tolerance` the arc length slack within which a breakpoint snaps onto a vertex.
    pub fn new(count: usize, tolerance: S) -> Result<Self, ResampleError> {
        if count < 1 {
            return Err(ResampleError::InvalidSegmentCount);
        }
        if !tolerance.is_finite() || tolerance <= S::zero() {
            return Err(ResampleError::InvalidTolerance);
        }
        Ok(ArcLengthSegmenter { count, tolerance })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn tolerance(&self) -> S {
        self.tolerance
    }

    /// Returns `count + 1` points on `polyline`, starting at its first and ending at its last point,
    /// with consecutive points `total_length / count` apart along the polyline.
    pub fn segment<P>(&self, polyline: &Polyline<P>) -> Result<Vec<P>, ResampleError>
    where
        P: Point<Scalar = S>,
    {
        let eps = self.tolerance;
        let total = polyline.total_length();
        let limit = eps * count_to_scalar(self.count);
        // also rejects NaN lengths
        if total.partial_cmp(&limit) != Some(Ordering::Greater) {
            return Err(ResampleError::DegenerateCurve);
        }
        let step = total / count_to_scalar(self.count);
        debug!(
            "segmenting {} polyline segments of total length {:?} into {} steps of {:?}",
            polyline.len(),
            total,
            self.count,
            step
        );

        let mut cursor = polyline.first_point();
        let mut index = 0;
        let mut carry = S::zero();
        let mut breakpoints = alloc::vec![cursor; self.count + 1];

        for (breakpoint, slot) in breakpoints.iter_mut().enumerate().skip(1) {
            let is_last = breakpoint == self.count;
            let target = step - carry;

            // local run from the cursor to the end of the segment it sits on
            let mut segment = polyline
                .get(index)
                .ok_or_else(|| overrun(breakpoint, polyline.len()))?;
            let mut acc = segment.end.distance(cursor);

            // the last breakpoint also swallows trailing segments shorter than the tolerance
            while target - acc > eps || (is_last && index + 1 < polyline.len()) {
                index += 1;
                segment = polyline
                    .get(index)
                    .ok_or_else(|| overrun(breakpoint, polyline.len()))?;
                acc = acc + segment.length;
            }

            let overshoot = acc - target;
            if overshoot > eps {
                // walk back from the segment end towards its start by the overshoot
                let t = overshoot / segment.length;
                cursor = segment.start * t + segment.end * (S::one() - t);
                carry = S::zero();
                trace!("breakpoint {} inside segment {} at t = {:?}", breakpoint, index, S::one() - t);
            } else {
                cursor = segment.end;
                carry = overshoot;
                trace!("breakpoint {} snapped to the end of segment {}", breakpoint, index);
                index += 1;
            }
            *slot = cursor;
        }

        Ok(breakpoints)
    }
}

fn overrun(breakpoint: usize, segments: usize) -> ResampleError {
    warn!(
        "arc length walk ran out of segments at breakpoint {} ({} segments)",
        breakpoint, segments
    );
    ResampleError::ArcLengthOverrun {
        breakpoint,
        segments,
    }
}

/// Splits `polyline` into `count` pieces of equal arc length and returns the `count + 1` breakpoints.
/// Shortcut for `ArcLengthSegmenter::new(count, tolerance)?.segment(polyline)`.
pub fn segment<P>(
    polyline: &Polyline<P>,
    count: usize,
    tolerance: P::Scalar,
) -> Result<Vec<P>, ResampleError>
where
    P: Point,
{
    ArcLengthSegmenter::new(count, tolerance)?.segment(polyline)
}
