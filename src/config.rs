//! Filter chain configuration.
//!
//! A chain is a list of filter stages that get designed for the signal's
//! sample rate and concatenated into a single engine. Stages can be given
//! on the command line in a compact form or in a TOML file:
//!
//! ```toml
//! zero_phase = true
//!
//! [[filter]]
//! type = "butterworth"
//! order = 4
//! cutoff_hz = 20.0
//!
//! [[filter]]
//! type = "average"
//! window = 5
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::design;
use crate::error::{FilterError, Result};
use crate::filter::Filter;

/// One stage of a filter chain
///
/// # Parsing formats
/// - `butterworth:4:20` or `butterworth:4:20hz` - order 4, cutoff 20 Hz
/// - `average:5` - 5 sample moving average, `average:5:3.5` with gain 3.5
/// - `exponential:0.8` - exponential smoother with alpha 0.8
/// - `tau:0.15`, `tau:150ms` - exponential smoother with a time constant
///
/// # Example
/// ```
/// use digital_filters::config::FilterSpec;
///
/// let spec: FilterSpec = "butterworth:4:20hz".parse().unwrap();
/// assert_eq!(spec, FilterSpec::Butterworth { order: 4, cutoff_hz: 20.0 });
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FilterSpec {
    /// Butterworth low-pass
    Butterworth { order: u32, cutoff_hz: f64 },
    /// Moving average
    Average {
        window: usize,
        #[serde(default = "unity")]
        gain: f64,
    },
    /// Exponential smoother with explicit smoothing factor
    Exponential { alpha: f64 },
    /// Exponential smoother with a time constant in seconds
    ExponentialTimeConstant { time_constant_s: f64 },
}

fn unity() -> f64 {
    1.0
}

impl FilterSpec {
    /// Design this stage for `sample_rate` (Hz)
    pub fn build(&self, sample_rate: f64) -> Result<Filter<f64, f64>> {
        match *self {
            FilterSpec::Butterworth { order, cutoff_hz } => {
                design::butterworth_filter(order, cutoff_hz, sample_rate)
            }
            FilterSpec::Average { window, gain } => design::average_with_gain_filter(window, gain),
            FilterSpec::Exponential { alpha } => design::exponential_filter(alpha),
            FilterSpec::ExponentialTimeConstant { time_constant_s } => {
                design::exponential_time_constant_filter(1.0 / sample_rate, time_constant_s)
            }
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSpec::Butterworth { order, cutoff_hz } => {
                write!(f, "butterworth:{}:{}hz", order, cutoff_hz)
            }
            FilterSpec::Average { window, gain } if *gain == 1.0 => write!(f, "average:{}", window),
            FilterSpec::Average { window, gain } => write!(f, "average:{}:{}", window, gain),
            FilterSpec::Exponential { alpha } => write!(f, "exponential:{}", alpha),
            FilterSpec::ExponentialTimeConstant { time_constant_s } => {
                write!(f, "tau:{}s", time_constant_s)
            }
        }
    }
}

fn parse_number<T: FromStr>(field: &str, s: &str) -> std::result::Result<T, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid {}: {}", field, s))
}

fn parse_positive(field: &str, s: &str) -> std::result::Result<f64, String> {
    let v: f64 = parse_number(field, s)?;
    if !(v > 0.0) {
        return Err(format!("{} must be positive", field));
    }
    Ok(v)
}

impl FromStr for FilterSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.split(':');
        let kind = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match (kind.as_str(), args.as_slice()) {
            ("butterworth" | "butter", [order, cutoff]) => {
                let cutoff = cutoff.trim();
                let cutoff = cutoff
                    .strip_suffix("hz")
                    .or_else(|| cutoff.strip_suffix("Hz"))
                    .unwrap_or(cutoff);
                Ok(FilterSpec::Butterworth {
                    order: parse_number("order", order)?,
                    cutoff_hz: parse_positive("cutoff", cutoff)?,
                })
            }
            ("average" | "avg", [window]) => Ok(FilterSpec::Average {
                window: parse_number("window", window)?,
                gain: 1.0,
            }),
            ("average" | "avg", [window, gain]) => Ok(FilterSpec::Average {
                window: parse_number("window", window)?,
                gain: parse_number("gain", gain)?,
            }),
            ("exponential" | "exp", [alpha]) => Ok(FilterSpec::Exponential {
                alpha: parse_number("alpha", alpha)?,
            }),
            ("tau", [tau]) => {
                let tau = tau.trim();
                let seconds = if let Some(ms) = tau.strip_suffix("ms") {
                    parse_positive("time constant", ms)? / 1000.0
                } else {
                    parse_positive("time constant", tau.strip_suffix('s').unwrap_or(tau))?
                };
                Ok(FilterSpec::ExponentialTimeConstant {
                    time_constant_s: seconds,
                })
            }
            _ => Err(format!("unrecognized filter: {}", s)),
        }
    }
}

/// A chain of filter stages and how to apply it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    /// Filter forward and backward instead of a single causal pass
    #[serde(default)]
    pub zero_phase: bool,
    /// Stages, applied in order
    #[serde(default, rename = "filter")]
    pub filters: Vec<FilterSpec>,
}

impl FilterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Design every stage and concatenate them into one filter
    ///
    /// # Errors
    /// Returns `FilterError::Config` for an empty chain, or the design error
    /// of the first stage that fails
    pub fn build(&self, sample_rate: f64) -> Result<Filter<f64, f64>> {
        let mut stages = self.filters.iter();
        let first = stages
            .next()
            .ok_or_else(|| FilterError::Config("no filter stages configured".to_string()))?;

        let mut chain = first.build(sample_rate)?;
        for spec in stages {
            chain = chain.concat(&spec.build(sample_rate)?);
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_butterworth() {
        let spec: FilterSpec = "butterworth:4:20".parse().unwrap();
        assert_eq!(
            spec,
            FilterSpec::Butterworth {
                order: 4,
                cutoff_hz: 20.0
            }
        );
        let spec: FilterSpec = "butter:2:5.5Hz".parse().unwrap();
        assert_eq!(
            spec,
            FilterSpec::Butterworth {
                order: 2,
                cutoff_hz: 5.5
            }
        );
    }

    #[test]
    fn test_parse_average() {
        assert_eq!(
            "average:5".parse::<FilterSpec>().unwrap(),
            FilterSpec::Average {
                window: 5,
                gain: 1.0
            }
        );
        assert_eq!(
            "avg:5:3.5".parse::<FilterSpec>().unwrap(),
            FilterSpec::Average {
                window: 5,
                gain: 3.5
            }
        );
    }

    #[test]
    fn test_parse_exponential() {
        assert_eq!(
            "exponential:0.8".parse::<FilterSpec>().unwrap(),
            FilterSpec::Exponential { alpha: 0.8 }
        );
        assert_eq!(
            "tau:150ms".parse::<FilterSpec>().unwrap(),
            FilterSpec::ExponentialTimeConstant {
                time_constant_s: 0.15
            }
        );
        assert_eq!(
            "tau:2s".parse::<FilterSpec>().unwrap(),
            FilterSpec::ExponentialTimeConstant {
                time_constant_s: 2.0
            }
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<FilterSpec>().is_err());
        assert!("butterworth:4".parse::<FilterSpec>().is_err());
        assert!("butterworth:x:20".parse::<FilterSpec>().is_err());
        assert!("butterworth:4:-20".parse::<FilterSpec>().is_err());
        assert!("tau:0".parse::<FilterSpec>().is_err());
        assert!("median:3".parse::<FilterSpec>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["butterworth:3:12.5hz", "average:7", "average:4:2", "exponential:0.25"] {
            let spec: FilterSpec = s.parse().unwrap();
            assert_eq!(spec.to_string(), s);
        }
    }

    #[test]
    fn test_toml_config() {
        let config = FilterConfig::from_toml_str(
            r#"
            zero_phase = true

            [[filter]]
            type = "butterworth"
            order = 2
            cutoff_hz = 10.0

            [[filter]]
            type = "average"
            window = 3

            [[filter]]
            type = "exponential-time-constant"
            time_constant_s = 0.05
            "#,
        )
        .unwrap();

        assert!(config.zero_phase);
        assert_eq!(config.filters.len(), 3);
        assert_eq!(
            config.filters[1],
            FilterSpec::Average {
                window: 3,
                gain: 1.0
            }
        );

        // Lengths add up minus one per concatenation: 3, 3, 1 and 3, 1, 2
        let chain = config.build(100.0).unwrap();
        assert_eq!(chain.numerator().len(), 5);
        assert_eq!(chain.denominator().len(), 4);
    }

    #[test]
    fn test_toml_unknown_type() {
        let err = FilterConfig::from_toml_str("[[filter]]\ntype = \"median\"\n");
        assert!(matches!(err, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_empty_chain_rejected() {
        let config = FilterConfig::default();
        assert!(matches!(config.build(100.0), Err(FilterError::Config(_))));
    }
}
