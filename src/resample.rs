//! The whole way from four control points to equal arc length breakpoints in one call.

use alloc::vec::Vec;

use log::debug;

use super::*;

/// Everything a renderer needs to show a resampled curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Resampled<P: Point> {
    /// Control points as supplied, in curve space.
    pub control_points: [P; 4],
    /// Dense sample of the curve, in presentation space.
    pub sample: Vec<P>,
    /// Polyline through `sample`.
    pub polyline: Polyline<P>,
    /// `segment_count + 1` points equally spaced along `polyline`.
    pub breakpoints: Vec<P>,
}

/// Samples `curve` with `config.sample_steps` steps, maps the samples through `transform`,
/// and splits the resulting polyline into `config.segment_count` pieces of equal arc length.
///
/// The tolerance is measured in presentation space, i.e. after `transform` was applied.
pub fn resample<P>(
    curve: &CubicBezier<P>,
    config: &SegmentationConfig<P::Scalar>,
    transform: &Affine<P>,
) -> Result<Resampled<P>, ResampleError>
where
    P: Point,
{
    let segmenter = config.segmenter()?;
    let sample = curve.sample_with(config.sample_steps, |p| transform.apply(p))?;
    let polyline = Polyline::build(&sample)?;
    debug!(
        "sampled {} points, polyline length {:?}",
        sample.len(),
        polyline.total_length()
    );
    let breakpoints = segmenter.segment(&polyline)?;

    Ok(Resampled {
        control_points: curve.control_points(),
        sample,
        polyline,
        breakpoints,
    })
}
