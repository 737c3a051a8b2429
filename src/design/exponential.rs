use num_traits::{Float, One};

use super::Coefficients;
use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::scalar::{Coefficient, Sample};

/// Exponential smoother `y[k] = alpha x[k] + (1 - alpha) y[k-1]`
pub fn exponential<C: Coefficient + One>(alpha: C) -> Coefficients<C> {
    Coefficients {
        numerator: vec![alpha],
        denominator: vec![C::one(), alpha - C::one()],
    }
}

/// Exponential smoother with a time constant.
///
/// Uses `alpha = 1 - exp(-sampling / time_constant)`: the step response
/// reaches 63%, 86% and 95% after one, two and three time constants.
///
/// # Arguments
/// * `sampling` - Sampling period
/// * `time_constant` - Time constant, same unit as `sampling`
///
/// # Errors
/// Returns `FilterError::FilterDesign` if either argument is not positive
pub fn exponential_time_constant<C: Float>(sampling: C, time_constant: C) -> Result<Coefficients<C>> {
    if !(sampling > C::zero()) || !(time_constant > C::zero()) {
        return Err(FilterError::FilterDesign(
            "sampling period and time constant must be positive".to_string(),
        ));
    }
    let alpha = C::one() - (-sampling / time_constant).exp();
    log::debug!(
        "Exponential smoother: alpha = {:?}",
        alpha.to_f64().unwrap_or(f64::NAN)
    );
    Ok(exponential(alpha))
}

pub fn exponential_filter<D, C>(alpha: C) -> Result<Filter<D, C>>
where
    C: Coefficient + One,
    D: Sample<C>,
{
    exponential(alpha).into_filter()
}

pub fn exponential_time_constant_filter<D, C>(sampling: C, time_constant: C) -> Result<Filter<D, C>>
where
    C: Float,
    D: Sample<C>,
{
    exponential_time_constant(sampling, time_constant)?.into_filter()
}
