//! Error type shared by sampling, polyline construction and segmentation.

use thiserror::Error;

/// Every way an input can be rejected on its way from control points to breakpoints.
///
/// All variants describe precondition violations or numerical breakdowns of a
/// single deterministic pass, so none of them is worth retrying with the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResampleError {
    /// A cubic Bezier curve needs exactly four control points.
    #[error("a cubic bezier curve needs exactly 4 control points, got {found}")]
    InvalidCurveDefinition {
        /// Number of control points supplied.
        found: usize,
    },

    /// The curve must be sampled with at least one parametric step.
    #[error("sample step count must be at least 1")]
    InvalidSampleCount,

    /// A polyline needs at least two points to form a segment.
    #[error("a polyline needs at least 2 points, got {found}")]
    InsufficientPoints {
        /// Number of points supplied.
        found: usize,
    },

    /// The polyline is too short to be split at the requested tolerance.
    #[error("polyline length is too small to split into the requested number of segments")]
    DegenerateCurve,

    /// The tolerance has to be a positive, finite number.
    #[error("tolerance must be positive and finite")]
    InvalidTolerance,

    /// At least one segment has to be requested.
    #[error("segment count must be at least 1")]
    InvalidSegmentCount,

    /// The arc length walk consumed every segment before placing all breakpoints.
    #[error("arc length walk ran past the last of {segments} segments while placing breakpoint {breakpoint}")]
    ArcLengthOverrun {
        /// Index of the breakpoint that could not be placed.
        breakpoint: usize,
        /// Number of segments in the polyline.
        segments: usize,
    },
}
