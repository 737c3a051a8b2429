use num_traits::{Float, FloatConst, NumCast};

use super::Coefficients;
use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::polynomial::multiply;
use crate::scalar::Sample;

/// Butterworth low-pass design via the bilinear transform
///
/// The numerator is `(1 + z^-1)^order`. The denominator is the product of
/// one second-order section per conjugate pole pair, plus a first-order
/// section for odd orders. The numerator is then rescaled for unity gain
/// at DC. `order == 0` yields the identity filter `[1] / [1]`.
///
/// # Arguments
/// * `order` - Filter order
/// * `cutoff` - -3 dB frequency, same unit as `sampling`
/// * `sampling` - Sampling frequency
///
/// # Errors
/// Returns `FilterError::FilterDesign` if `cutoff` is not positive or is not
/// below the Nyquist frequency `sampling / 2`
pub fn butterworth<C>(order: u32, cutoff: C, sampling: C) -> Result<Coefficients<C>>
where
    C: Float + FloatConst,
{
    let two = C::one() + C::one();
    if cutoff * two >= sampling {
        return Err(FilterError::FilterDesign(
            "cutoff frequency should be less than half of sampling frequency".to_string(),
        ));
    }
    if !(cutoff > C::zero()) {
        return Err(FilterError::FilterDesign(
            "cutoff frequency must be positive".to_string(),
        ));
    }

    let mut numerator = vec![C::one()];
    let mut denominator = vec![C::one()];
    if order == 0 {
        return Ok(Coefficients {
            numerator,
            denominator,
        });
    }

    let to_c = |v: u32| <C as NumCast>::from(v).unwrap_or_else(C::nan);
    let n = to_c(order);

    // Prewarped analog cutoff
    let gc = (C::PI() * cutoff / sampling).tan();
    let gc2 = gc * gc;

    let one_plus_z = [C::one(), C::one()];
    for _ in 0..order {
        numerator = multiply(&numerator, &one_plus_z);
    }

    for i in 0..order / 2 {
        let ci = two * gc * ((n + C::one() + two * to_c(i)) * C::PI() / (two * n)).cos();
        let den = C::one() + gc2 - ci;
        let section = [
            C::one(),
            two * (gc2 - C::one()) / den,
            (C::one() + gc2 + ci) / den,
        ];
        denominator = multiply(&denominator, &section);
    }

    if order % 2 == 1 {
        let section = [C::one(), (gc - C::one()) / (gc + C::one())];
        denominator = multiply(&denominator, &section);
    }

    // Unity DC gain: H(1) = sum(b) / sum(a)
    let sum = |p: &[C]| p.iter().fold(C::zero(), |acc, &c| acc + c);
    let (sn, sd) = (sum(&numerator), sum(&denominator));
    for b in numerator.iter_mut() {
        *b = *b * sd / sn;
    }

    log::debug!(
        "Butterworth order {} designed: {} numerator, {} denominator coefficients",
        order,
        numerator.len(),
        denominator.len()
    );

    Ok(Coefficients {
        numerator,
        denominator,
    })
}

/// Butterworth low-pass filter, see [`butterworth`]
pub fn butterworth_filter<D, C>(order: u32, cutoff: C, sampling: C) -> Result<Filter<D, C>>
where
    C: Float + FloatConst,
    D: Sample<C>,
{
    butterworth(order, cutoff, sampling)?.into_filter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_butterworth_design() {
        assert!(butterworth(4, 20.0_f64, 100.0).is_ok());
        assert!(butterworth_filter::<f32, f32>(3, 0.8, 20.0).is_ok());
    }

    #[test]
    fn test_cutoff_above_nyquist_rejected() {
        assert!(matches!(
            butterworth(2, 60.0_f64, 100.0),
            Err(FilterError::FilterDesign(_))
        ));
        assert!(butterworth(2, 0.0_f64, 100.0).is_err());
    }

    #[test]
    fn test_cutoff_at_nyquist_rejected() {
        // Would place a double pole on the unit circle at z = -1
        assert!(matches!(
            butterworth(2, 50.0_f64, 100.0),
            Err(FilterError::FilterDesign(_))
        ));
        assert!(butterworth(2, 49.9_f64, 100.0).is_ok());
    }

    #[test]
    fn test_order_zero_is_identity() {
        let c = butterworth(0, 10.0_f64, 100.0).unwrap();
        assert_eq!(c.numerator, vec![1.0]);
        assert_eq!(c.denominator, vec![1.0]);
    }

    #[test]
    fn test_first_order() {
        // Half-band: gc = tan(pi/4) = 1, single pole at the origin
        let c = butterworth(1, 25.0_f64, 100.0).unwrap();
        assert_relative_eq!(c.numerator[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.numerator[1], 0.5, epsilon = 1e-12);
        assert_eq!(c.denominator[0], 1.0);
        assert_relative_eq!(c.denominator[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unity_dc_gain() {
        for order in 1..=6 {
            let c = butterworth(order, 5.0_f64, 100.0).unwrap();
            let sn: f64 = c.numerator.iter().sum();
            let sd: f64 = c.denominator.iter().sum();
            assert_relative_eq!(sn / sd, 1.0, max_relative = 1e-9);
            assert_eq!(c.numerator.len(), order as usize + 1);
            assert_eq!(c.denominator.len(), order as usize + 1);
        }
    }
}
