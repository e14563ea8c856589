//! System dynamics: dx/dt = f(t, x, u).

use ts_core::{ConstraintVector, InputVector, Real, StateVector};

use crate::error::SystemResult;

/// Controlled system dynamics.
///
/// Implementations are deterministic functions of time, state and input, so
/// one instance can be shared read-only or cloned per worker.
pub trait DynamicsModel: Send + Sync {
    /// Model name for diagnostics.
    fn name(&self) -> &str;

    fn state_dim(&self) -> usize;

    fn input_dim(&self) -> usize;

    /// Time derivative of the state.
    fn flow_map(&self, t: Real, x: &StateVector, u: &InputVector) -> SystemResult<StateVector>;

    /// Optional state-input inequality constraint values.
    ///
    /// The number of active constraints is the length of the returned vector.
    /// Default implementation has no constraints.
    fn constraint(
        &self,
        _t: Real,
        _x: &StateVector,
        _u: &InputVector,
    ) -> SystemResult<Option<ConstraintVector>> {
        Ok(None)
    }

    fn clone_box(&self) -> Box<dyn DynamicsModel>;
}

impl Clone for Box<dyn DynamicsModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
