//! Configuration for the resampling pipeline.
//!
//! The numbers that drive the math (sample density, segment count, tolerance)
//! are kept apart from the numbers that only matter for showing the result
//! (scale, offset, viewport). Both are passed explicitly, there is no global state.

use core::fmt::Debug;

use super::*;

/// Parameters of sampling and arc length segmentation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentationConfig<S> {
    /// Arc length slack within which a breakpoint snaps onto a polyline vertex.
    pub tolerance: S,
    /// Number of equal arc length pieces, the output has one more breakpoint.
    pub segment_count: usize,
    /// Number of parametric steps over [0, 1], the sample has one more point.
    pub sample_steps: usize,
}

impl<S> SegmentationConfig<S>
where
    S: Float + Debug,
{
    pub fn new(segment_count: usize, tolerance: S, sample_steps: usize) -> Self {
        SegmentationConfig {
            tolerance,
            segment_count,
            sample_steps,
        }
    }

    /// Checks every parameter without touching a curve.
    pub fn validate(&self) -> Result<(), ResampleError> {
        self.segmenter().map(|_| ())
    }

    /// Returns the segmenter described by this configuration.
    pub fn segmenter(&self) -> Result<ArcLengthSegmenter<S>, ResampleError> {
        if self.sample_steps < 1 {
            return Err(ResampleError::InvalidSampleCount);
        }
        ArcLengthSegmenter::new(self.segment_count, self.tolerance)
    }
}

impl<S> Default for SegmentationConfig<S>
where
    S: Float + Debug,
{
    /// 10 pieces, a tolerance of 1e-3 and 200 sample steps.
    fn default() -> Self {
        SegmentationConfig {
            tolerance: float_to_scalar(1e-3),
            segment_count: 10,
            sample_steps: 200,
        }
    }
}

/// Size of the drawing surface in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1280,
            height: 720,
        }
    }
}

/// Where sampled points end up on a drawing surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PresentationConfig<P> {
    pub scale: P,
    pub offset: P,
    pub viewport: Viewport,
}

impl<P> PresentationConfig<P>
where
    P: Point,
{
    /// The map from curve space into presentation space.
    pub fn transform(&self) -> Affine<P> {
        Affine::new(self.scale, self.offset)
    }
}

impl<T> Default for PresentationConfig<PointN<T, 2>>
where
    T: Float + Default + Debug,
{
    /// Unit curves scaled by 300 and moved to (400, 300) on a 1280x720 surface.
    fn default() -> Self {
        PresentationConfig {
            scale: PointN::new([float_to_scalar(300.0), float_to_scalar(300.0)]),
            offset: PointN::new([float_to_scalar(400.0), float_to_scalar(300.0)]),
            viewport: Viewport::default(),
        }
    }
}
