//! Generic recursive digital filters.
//!
//! A [`Filter`] holds a normalized transfer function `b(z) / a(z)` and the
//! sample history needed to evaluate it one sample at a time. Whole signals
//! can be filtered from explicit initial conditions or forward-backward for
//! zero phase, and filters compose exactly through polynomial products.

pub mod config;
pub mod design;
pub mod error;
pub mod filter;
pub mod history;
pub mod output;
pub mod polynomial;
pub mod process;
pub mod scalar;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::{FilterConfig, FilterSpec};
pub use error::{FilterError, Result};
pub use filter::Filter;
pub use process::SampleFilter;
pub use scalar::{Coefficient, Sample};
