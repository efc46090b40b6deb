//! Trait for common abstractions over parametric curves evaluated on [0, 1]

use alloc::vec::Vec;

use super::*;

pub trait Spline<P: Point> {
    fn eval(&self, t: P::Scalar) -> P;

    /// Evaluates the curve at `step_count + 1` evenly spaced parameters covering [0, 1].
    /// The first sample is taken at exactly t = 0 and the last at exactly t = 1.
    fn sample(&self, step_count: usize) -> Result<Vec<P>, ResampleError> {
        self.sample_with(step_count, |p| p)
    }

    /// Like `sample()`, but every evaluated point is passed through `map` before it is stored,
    /// e.g. to move curve space coordinates into presentation space (see `Affine::apply()`).
    fn sample_with<F>(&self, step_count: usize, map: F) -> Result<Vec<P>, ResampleError>
    where
        F: Fn(P) -> P,
    {
        if step_count < 1 {
            return Err(ResampleError::InvalidSampleCount);
        }
        let steps: P::Scalar = count_to_scalar(step_count);
        let mut samples = Vec::with_capacity(step_count + 1);
        samples.extend(
            (0..=step_count).map(|i| map(self.eval(count_to_scalar::<P::Scalar>(i) / steps))),
        );
        Ok(samples)
    }
}
