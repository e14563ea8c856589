//! Evaluation point shared by derivative and cost models.

use ts_core::{InputVector, Real, StateVector, TsResult, ensure_dim, ensure_finite};

/// Time, state and input at which a model is linearized or evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalPoint {
    pub t: Real,
    pub x: StateVector,
    pub u: InputVector,
}

impl EvalPoint {
    /// Build a point after checking dimensions and finiteness of `t`.
    pub fn checked(
        t: Real,
        x: &StateVector,
        u: &InputVector,
        state_dim: usize,
        input_dim: usize,
    ) -> TsResult<Self> {
        ensure_finite(t, "evaluation time")?;
        ensure_dim("state", x, state_dim)?;
        ensure_dim("input", u, input_dim)?;
        Ok(Self {
            t,
            x: x.clone(),
            u: u.clone(),
        })
    }
}
