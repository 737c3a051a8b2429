//! Coefficient design for commonly used filters.
//!
//! Each design comes in two forms: one returning the raw [`Coefficients`]
//! and a `*_filter` form returning a ready-to-use [`crate::Filter`].

mod average;
mod butterworth;
mod exponential;

pub use average::{average, average_filter, average_with_gain_filter};
pub use butterworth::{butterworth, butterworth_filter};
pub use exponential::{
    exponential, exponential_filter, exponential_time_constant,
    exponential_time_constant_filter,
};

use crate::error::Result;
use crate::filter::Filter;
use crate::scalar::{Coefficient, Sample};

/// Numerator and denominator of a transfer function, lowest power first
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients<C> {
    pub numerator: Vec<C>,
    pub denominator: Vec<C>,
}

impl<C: Coefficient> Coefficients<C> {
    /// Build the filter engine for these coefficients
    pub fn into_filter<D: Sample<C>>(self) -> Result<Filter<D, C>> {
        Filter::new(&self.numerator, &self.denominator)
    }
}
