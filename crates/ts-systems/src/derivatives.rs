//! Linearized dynamics about a previously set point.

use nalgebra::DMatrix;
use ts_core::{InputVector, Real, StateInputMatrix, StateMatrix, StateVector};

use crate::error::SystemResult;

/// Partial derivatives of the flow map (and constraints, if any).
///
/// Call [`set_linearization_point`] first; the getters evaluate at that point.
///
/// [`set_linearization_point`]: DerivativesModel::set_linearization_point
pub trait DerivativesModel: Send + Sync {
    fn set_linearization_point(
        &mut self,
        t: Real,
        x: &StateVector,
        u: &InputVector,
    ) -> SystemResult<()>;

    /// df/dx
    fn flow_map_derivative_state(&self) -> SystemResult<StateMatrix>;

    /// df/du
    fn flow_map_derivative_input(&self) -> SystemResult<StateInputMatrix>;

    /// dg/dx, one row per constraint. Default implementation has no constraints.
    fn constraint_derivative_state(&self) -> SystemResult<Option<DMatrix<Real>>> {
        Ok(None)
    }

    /// dg/du, one row per constraint. Default implementation has no constraints.
    fn constraint_derivative_input(&self) -> SystemResult<Option<DMatrix<Real>>> {
        Ok(None)
    }

    fn clone_box(&self) -> Box<dyn DerivativesModel>;
}

impl Clone for Box<dyn DerivativesModel> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
