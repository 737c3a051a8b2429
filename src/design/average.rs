use num_traits::{FromPrimitive, One};

use super::Coefficients;
use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::scalar::{Coefficient, Sample};

/// Moving average over `window_size` samples, scaled by `gain`.
///
/// Numerator is `window_size` copies of `gain`, denominator the single
/// value `window_size`, so the DC gain equals `gain`.
///
/// # Errors
/// Returns `FilterError::FilterDesign` if `window_size` cannot be
/// represented in `C`
pub fn average<C>(window_size: usize, gain: C) -> Result<Coefficients<C>>
where
    C: Coefficient + FromPrimitive,
{
    let size = C::from_usize(window_size).ok_or_else(|| {
        FilterError::FilterDesign(format!("window size {} out of range", window_size))
    })?;

    Ok(Coefficients {
        numerator: vec![gain; window_size],
        denominator: vec![size],
    })
}

/// Unity-gain moving average filter
///
/// # Errors
/// Returns `FilterError::EmptyCoefficients` for a zero window
pub fn average_filter<D, C>(window_size: usize) -> Result<Filter<D, C>>
where
    C: Coefficient + FromPrimitive + One,
    D: Sample<C>,
{
    average_with_gain_filter(window_size, C::one())
}

/// Moving average filter with DC gain `gain`
pub fn average_with_gain_filter<D, C>(window_size: usize, gain: C) -> Result<Filter<D, C>>
where
    C: Coefficient + FromPrimitive,
    D: Sample<C>,
{
    average(window_size, gain)?.into_filter()
}
