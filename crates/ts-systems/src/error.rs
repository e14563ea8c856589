//! Error types for model evaluation.

use thiserror::Error;
use ts_core::TsError;

pub type SystemResult<T> = Result<T, SystemError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Linearization point not set: {what}")]
    PointNotSet { what: &'static str },

    #[error("Core error: {0}")]
    Core(#[from] TsError),
}
