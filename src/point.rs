use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points P whose components are of type `Scalar`.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing the trait requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy.
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes.
    const DIM: usize;

    /// Returns the component of the point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Overwrites the component at `index`.
    fn set_axis(&mut self, index: usize, value: Self::Scalar);

    /// Returns the squared L2 norm of the point interpreted as a vector.
    fn squared_norm(&self) -> Self::Scalar {
        (0..Self::DIM).fold(Self::Scalar::zero(), |acc, i| {
            acc + self.axis(i) * self.axis(i)
        })
    }

    /// Returns the euclidean distance between self and other.
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_norm().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    fn distance_to_origin<P: Point>(p: P) -> P::Scalar {
        p.distance(P::default())
    }

    #[test]
    fn norms_through_the_scalar_type() {
        assert_eq!(PointN::new([3f32, 4f32]).squared_norm(), 25.0);
        assert_eq!(distance_to_origin(PointN::new([0f64, 3f64, 4f64])), 5.0);
        // no axes, nothing to sum
        assert_eq!(PointN::<f64, 0>::default().squared_norm(), 0.0);
    }
}
