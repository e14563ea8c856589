//! Operating-trajectory initialization for iterative optimal-control solvers.
//!
//! A DDP/SLQ style solver needs a zeroth iterate before its first backward
//! pass. This crate produces that iterate as time/state/input samples over a
//! requested horizon, either by holding a single operating point or by
//! slicing a previously recorded trajectory.
//!
//! # Architecture
//!
//! - [`OperatingTrajectories`] is the strategy seam the solver talks to.
//! - [`OperatingPoints`] is the point/recorded-trajectory implementation.
//! - [`OperatingTrajectory`] is the caller-owned output buffer.
//! - [`partition`] assembles full-horizon guesses, optionally in parallel.
//! - [`config`] loads provider definitions from YAML or JSON.
//!
//! Recorded trajectories encode a switching time as two consecutive samples
//! with the same time stamp. Those pairs are kept verbatim in every output.

pub mod config;
pub mod error;
pub mod operating_points;
pub mod partition;
pub mod provider;
pub mod trajectory;

pub use config::{OperatingPointsDef, SampleDef, load_json, load_yaml, save_json, save_yaml};
pub use error::{InitError, InitResult};
pub use operating_points::{OperatingData, OperatingPoints};
pub use partition::{seed_partitions, seed_partitions_parallel};
pub use provider::OperatingTrajectories;
pub use trajectory::OperatingTrajectory;
