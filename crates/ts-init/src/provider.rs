//! Strategy seam between the solver and its initial-guess source.

use ts_core::{Real, StateVector};

use crate::error::InitResult;
use crate::trajectory::OperatingTrajectory;

/// Source of operating trajectories used to seed an iterative solver.
///
/// Implementations are deterministic lookups over data fixed at
/// configuration time. A query never mutates the provider, and each parallel
/// solver worker owns its own copy obtained through [`clone_box`].
///
/// [`clone_box`]: OperatingTrajectories::clone_box
pub trait OperatingTrajectories: Send + Sync {
    /// Strategy name for diagnostics.
    fn name(&self) -> &str;

    fn state_dim(&self) -> usize;

    fn input_dim(&self) -> usize;

    /// Produce samples covering `[start_time, final_time]`.
    ///
    /// # Arguments
    /// * `initial_state` - State at `start_time`. Must match `state_dim()`;
    ///   strategies that linearize about the true initial condition use it.
    /// * `start_time`, `final_time` - Requested horizon, `final_time >= start_time`
    /// * `output` - Caller-owned buffer
    /// * `concat` - Append to `output` instead of replacing its contents
    ///
    /// # Errors
    /// Argument errors are returned before `output` is touched.
    fn trajectories(
        &self,
        initial_state: &StateVector,
        start_time: Real,
        final_time: Real,
        output: &mut OperatingTrajectory,
        concat: bool,
    ) -> InitResult<()>;

    /// Independent deep copy of this provider.
    fn clone_box(&self) -> Box<dyn OperatingTrajectories>;
}

impl Clone for Box<dyn OperatingTrajectories> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
