//! Error types for trajectory initialization.

use thiserror::Error;
use ts_core::{Real, TsError};

/// Result type for initialization operations.
pub type InitResult<T> = Result<T, InitError>;

/// Errors raised while configuring or querying an initializer.
///
/// Configuration errors are detected when a provider is built and are fatal
/// to that configuration. Argument errors are raised per query and leave the
/// provider and the caller's output untouched.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Trajectory length mismatch: time={time}, state={state}, input={input}")]
    LengthMismatch {
        time: usize,
        state: usize,
        input: usize,
    },

    #[error("Time samples must be non-decreasing (index={index}: {previous} -> {value})")]
    NonMonotonicTime {
        index: usize,
        previous: Real,
        value: Real,
    },

    #[error("Non-finite time sample (index={index}): {value}")]
    NonFiniteTime { index: usize, value: Real },

    #[error("Inconsistent {what} dimension (index={index}, expected={expected}, got={got})")]
    SampleDimension {
        what: &'static str,
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Inverted time interval: start={start_time}, final={final_time}")]
    InvertedInterval { start_time: Real, final_time: Real },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: Real },

    #[error("Dimension mismatch: {what} (expected={expected}, got={got})")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InitError {
    /// True for errors caused by malformed provider data.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            InitError::InvalidConfig { .. }
                | InitError::LengthMismatch { .. }
                | InitError::NonMonotonicTime { .. }
                | InitError::NonFiniteTime { .. }
                | InitError::SampleDimension { .. }
        )
    }

    /// True for errors caused by the arguments of a single query.
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            InitError::InvalidArg { .. }
                | InitError::InvertedInterval { .. }
                | InitError::NonFinite { .. }
                | InitError::DimensionMismatch { .. }
        )
    }
}

/// Core checks run on query arguments, so they surface as argument errors.
/// Construction-time checks report [`InitError::NonFiniteTime`] and
/// [`InitError::SampleDimension`] instead.
impl From<TsError> for InitError {
    fn from(e: TsError) -> Self {
        match e {
            TsError::NonFinite { what, value } => InitError::NonFinite { what, value },
            TsError::DimensionMismatch {
                what,
                expected,
                got,
            } => InitError::DimensionMismatch {
                what,
                expected,
                got,
            },
        }
    }
}
