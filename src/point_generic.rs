use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::Point;

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array).
/// This type only interacts with the library through
/// the point trait, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) trait
#[derive(Debug, Copy, Clone)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }
}

impl<T: Copy> PointN<T, 2> {
    /// Shortcut for `axis(0)` of a 2D point.
    pub fn x(&self) -> T {
        self.0[0]
    }

    /// Shortcut for `axis(1)` of a 2D point.
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T, const N: usize> From<[T; N]> for PointN<T, N> {
    fn from(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> PartialEq for PointN<T, N>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

impl<T, const N: usize, U> Mul<U> for PointN<T, N>
where
    // The mulitplication is done by mulitpling T * U => T, this
    // trait bound for T will specify this requirement as the mul operator is
    // translated to using the first operand as self and the second as rhs.
    T: Mul<U, Output = T> + Copy,
    U: Copy,
{
    type Output = PointN<T, N>;

    fn mul(self, rhs: U) -> PointN<T, N> {
        let mut res = self;
        for component in res.0.iter_mut() {
            *component = *component * rhs;
        }
        res
    }
}

impl<T, const N: usize> IntoIterator for PointN<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.0)
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = N;

    fn axis(&self, index: usize) -> Self::Scalar {
        self.0[index]
    }

    fn set_axis(&mut self, index: usize, value: Self::Scalar) {
        self.0[index] = value;
    }
}
