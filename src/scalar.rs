use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

/// Arithmetic required of transfer function coefficients.
///
/// Division is only used once, to normalize by the leading denominator
/// coefficient at construction.
pub trait Coefficient:
    Copy + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
}

impl<T> Coefficient for T where
    T: Copy
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// A signal sample that can be weighted by a coefficient of type `C`.
///
/// Blanket-implemented wherever `C * D` yields `D`, e.g. `f64` samples with
/// `f64` coefficients or `Complex<f64>` samples with `f64` coefficients.
pub trait Sample<C>: Copy + Zero + Add<Output = Self> + Sub<Output = Self> {
    /// Multiply this sample by `coeff`
    fn scale(self, coeff: C) -> Self;
}

impl<C, D> Sample<C> for D
where
    C: Coefficient + Mul<D, Output = D>,
    D: Copy + Zero + Add<Output = D> + Sub<Output = D>,
{
    #[inline]
    fn scale(self, coeff: C) -> D {
        coeff * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_real_scale() {
        assert_eq!(<f64 as Sample<f64>>::scale(3.0, 0.5), 1.5);
        assert_eq!(<i32 as Sample<i32>>::scale(7, -2), -14);
    }

    #[test]
    fn test_complex_sample_real_coefficient() {
        let z = Complex::new(1.0_f64, -2.0);
        assert_eq!(z.scale(2.0_f64), Complex::new(2.0, -4.0));
    }
}
