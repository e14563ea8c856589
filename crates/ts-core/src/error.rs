use thiserror::Error;

pub type TsResult<T> = Result<T, TsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Dimension mismatch: {what} (expected={expected}, got={got})")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}
