//! Model interfaces consumed by an iterative optimal-control solver.
//!
//! The initializer in `ts-init` never calls these; the solver evaluates them
//! after the initial guess seeds its first iteration.
//!
//! Provides:
//! - [`DynamicsModel`]: flow map and optional inequality constraint
//! - [`DerivativesModel`]: linearization about a point set beforehand
//! - [`CostModel`]: running/terminal cost with gradients and Hessians
//! - [`SwitchedSystem`]: one model triple per mode plus switching times
//! - [`exp3`]: three-mode switched example system

pub mod cost;
pub mod derivatives;
pub mod dynamics;
pub mod error;
pub mod exp3;
pub mod point;
pub mod switched;

pub use cost::CostModel;
pub use derivatives::DerivativesModel;
pub use dynamics::DynamicsModel;
pub use error::{SystemError, SystemResult};
pub use point::EvalPoint;
pub use switched::{Mode, SwitchedSystem};
