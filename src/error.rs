use std::fmt;

use thiserror::Error;

/// Which half of a transfer function a coefficient set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polynomial {
    Numerator,
    Denominator,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polynomial::Numerator => write!(f, "numerator (b)"),
            Polynomial::Denominator => write!(f, "denominator (a)"),
        }
    }
}

/// Which sample history an initial condition targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Input,
    Output,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryKind::Input => write!(f, "input"),
            HistoryKind::Output => write!(f, "output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Filter {0} is empty")]
    EmptyCoefficients(Polynomial),

    #[error("Initial {history} conditions: expected {expected} samples, got {actual}")]
    InitialConditionSizeMismatch {
        history: HistoryKind,
        expected: usize,
        actual: usize,
    },

    #[error("Filter design failed: {0}")]
    FilterDesign(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
