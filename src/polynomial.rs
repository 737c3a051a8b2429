use std::ops::{Add, Mul};

use num_traits::Zero;

/// Product of two polynomials given as coefficients from lowest to highest
/// degree.
///
/// For `p1 = [a0, a1]` and `p2 = [b0, 0, b2]` the result is
/// `[a0*b0, a1*b0, a0*b2, a1*b2]`. Zero coefficients are kept as-is, they
/// shape the result.
///
/// Each output coefficient is a folded sum: the terms `p1[i] * p2[k - i]`
/// are paired from both ends of the index range before accumulation.
/// Swapping the operands reverses that term sequence, which leaves every
/// pair (and so every rounding step) unchanged, so
/// `multiply(p, q) == multiply(q, p)` holds bit for bit even for floats.
///
/// Both inputs must be non-empty; if either is empty the product is empty.
///
/// # Example
/// ```
/// use digital_filters::polynomial::multiply;
///
/// // (1 + x + x^2)(1 + x) = 1 + 2x + 2x^2 + x^3
/// assert_eq!(multiply(&[1.0, 1.0, 1.0], &[1.0, 1.0]), vec![1.0, 2.0, 2.0, 1.0]);
/// ```
pub fn multiply<T>(p1: &[T], p2: &[T]) -> Vec<T>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    if p1.is_empty() || p2.is_empty() {
        return Vec::new();
    }

    let (d1, d2) = (p1.len(), p2.len());
    (0..d1 + d2 - 1)
        .map(|k| {
            let term = |i: usize| p1[i] * p2[k - i];

            // i walks p1, k - i walks p2
            let mut lo = k.saturating_sub(d2 - 1);
            let mut hi = k.min(d1 - 1);

            let mut acc = T::zero();
            while lo < hi {
                acc = acc + (term(lo) + term(hi));
                lo += 1;
                hi -= 1;
            }
            if lo == hi {
                acc = acc + term(lo);
            }
            acc
        })
        .collect()
}
