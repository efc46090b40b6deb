//! Per-axis affine map from curve space into presentation space.
//!
//! Sampling takes the map as a plain function (`Spline::sample_with()`),
//! so the curve itself never depends on where it is going to be shown.

use super::*;

/// Scales every axis independently and then translates: `p'[i] = p[i] * scale[i] + offset[i]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine<P> {
    pub scale: P,
    pub offset: P,
}

impl<P> Affine<P>
where
    P: Point,
{
    pub fn new(scale: P, offset: P) -> Self {
        Affine { scale, offset }
    }

    /// The map that leaves every point where it is.
    pub fn identity() -> Self {
        let mut scale = P::default();
        for i in 0..P::DIM {
            scale.set_axis(i, P::Scalar::one());
        }
        Affine {
            scale,
            offset: P::default(),
        }
    }

    pub fn apply(&self, p: P) -> P {
        let mut mapped = p;
        for i in 0..P::DIM {
            mapped.set_axis(i, p.axis(i) * self.scale.axis(i) + self.offset.axis(i));
        }
        mapped
    }
}

impl<P> Default for Affine<P>
where
    P: Point,
{
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointN;

    #[test]
    fn identity_keeps_points() {
        let p = PointN::new([0.45f64, 0.328f64]);
        assert_eq!(Affine::identity().apply(p), p);
    }

    #[test]
    fn scale_then_offset() {
        let map = Affine::new(PointN::new([300.0, 300.0]), PointN::new([400.0, 300.0]));
        assert_eq!(map.apply(PointN::new([1.0, 0.5])), PointN::new([700.0, 450.0]));
        // axes are independent
        let stretch = Affine::new(PointN::new([2.0, -1.0]), PointN::default());
        assert_eq!(stretch.apply(PointN::new([1.5, 3.0])), PointN::new([3.0, -3.0]));
    }
}
