//! Samples cubic Bezier curves and re-segments the samples into pieces of equal arc length.
//!
//! The pipeline is
//! control points → `CubicBezier` → dense sample (optionally mapped by an `Affine`)
//! → `Polyline` → `ArcLengthSegmenter` → breakpoints.
//!
//! Everything is generic over the `Point` trait (implemented by `PointN<T, N>`)
//! and works without `std`, only `alloc` is required for the output vectors.
//!
//! ```rust
//! use equiarc::{resample, Affine, CubicBezier, PointN, SegmentationConfig};
//!
//! let curve = CubicBezier::new(
//!     PointN::new([0.0, 0.0]),
//!     PointN::new([1.0, 0.0]),
//!     PointN::new([1.0, 1.0]),
//!     PointN::new([0.0, 1.0]),
//! );
//! let config = SegmentationConfig::new(4, 1e-4, 100);
//! let result = resample(&curve, &config, &Affine::identity()).unwrap();
//! assert_eq!(result.breakpoints.len(), 5);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use num_traits::{Float, NumCast, One, ToPrimitive, Zero};

pub mod arc_length;
pub mod config;
pub mod cubic_bezier;
pub mod error;
pub mod line;
pub mod point;
pub mod point_generic;
pub mod polyline;
pub mod resample;
pub mod spline;
pub mod transform;

pub use arc_length::{segment, ArcLengthSegmenter};
pub use config::{PresentationConfig, SegmentationConfig, Viewport};
pub use cubic_bezier::CubicBezier;
pub use error::ResampleError;
pub use line::LineSegment;
pub use point::Point;
pub use point_generic::PointN;
pub use polyline::{Location, Polyline};
pub use resample::{resample, Resampled};
pub use spline::Spline;
pub use transform::Affine;

/// Absolute error used by the tests to compare squared distances and lengths.
#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-10;

/// Converts a count into the scalar type, counts always fit into a float's range.
#[inline]
pub(crate) fn count_to_scalar<S: Float>(n: usize) -> S {
    cast(n)
}

/// Converts a literal constant into the scalar type.
#[inline]
pub(crate) fn float_to_scalar<S: Float>(value: f64) -> S {
    cast(value)
}

// NaN on failure, which every validation in this crate rejects
fn cast<S: Float, T: ToPrimitive>(value: T) -> S {
    <S as NumCast>::from(value).unwrap_or_else(S::nan)
}
