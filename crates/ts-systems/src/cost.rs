//! Running and terminal cost with first and second derivatives.

use ts_core::{InputMatrix, InputStateMatrix, InputVector, Real, StateMatrix, StateVector};

use crate::error::SystemResult;

/// Quadratizable cost model.
///
/// Like [`DerivativesModel`](crate::DerivativesModel), evaluation happens at a
/// point set beforehand. Terminal terms are only used at the horizon end.
pub trait CostModel: Send + Sync {
    fn set_current_state_and_input(
        &mut self,
        t: Real,
        x: &StateVector,
        u: &InputVector,
    ) -> SystemResult<()>;

    /// L
    fn cost(&self) -> SystemResult<Real>;

    /// dL/dx
    fn cost_derivative_state(&self) -> SystemResult<StateVector>;

    /// d2L/dx2
    fn cost_second_derivative_state(&self) -> SystemResult<StateMatrix>;

    /// dL/du
    fn cost_derivative_input(&self) -> SystemResult<InputVector>;

    /// d2L/du2
    fn cost_second_derivative_input(&self) -> SystemResult<InputMatrix>;

    /// d2L/dudx
    fn cost_derivative_input_state(&self) -> SystemResult<InputStateMatrix>;

    /// Phi
    fn terminal_cost(&self) -> SystemResult<Real>;

    /// dPhi/dx
    fn terminal_cost_derivative_state(&self) -> SystemResult<StateVector>;

    /// d2Phi/dx2
    fn terminal_cost_second_derivative_state(&self) -> SystemResult<StateMatrix>;

    fn clone_box(&self) -> Box<dyn CostModel>;
}

impl Clone for Box<dyn CostModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
