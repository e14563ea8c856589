//! ts-core: stable foundation for trajseed.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - linalg (nalgebra vector/matrix aliases for states and inputs)
//! - error (shared error types)

pub mod error;
pub mod linalg;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TsError, TsResult};
pub use linalg::*;
pub use numeric::*;
