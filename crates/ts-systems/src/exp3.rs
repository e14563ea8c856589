//! Three-mode switched example system with two states and two inputs.
//!
//! Each mode has a nonlinear flow map driven by `u[0]` and a single
//! inequality constraint on `u[1]`. All modes share a quadratic running cost
//! pulling the state towards `(1, -1)`; only the last mode carries a terminal
//! cost.

use nalgebra::{DMatrix, DVector};
use ts_core::{
    ConstraintVector, InputMatrix, InputStateMatrix, InputVector, Real, StateInputMatrix,
    StateMatrix, StateVector,
};

use crate::cost::CostModel;
use crate::derivatives::DerivativesModel;
use crate::dynamics::DynamicsModel;
use crate::error::{SystemError, SystemResult};
use crate::point::EvalPoint;
use crate::switched::{Mode, SwitchedSystem};

pub const STATE_DIM: usize = 2;
pub const INPUT_DIM: usize = 2;

/// Input weight on `u[1]` in the running cost.
pub const INPUT_WEIGHT: Real = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exp3Mode {
    One,
    Two,
    Three,
}

impl Exp3Mode {
    pub const ALL: [Exp3Mode; 3] = [Exp3Mode::One, Exp3Mode::Two, Exp3Mode::Three];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exp3Mode::One => "exp3 mode 1",
            Exp3Mode::Two => "exp3 mode 2",
            Exp3Mode::Three => "exp3 mode 3",
        }
    }
}

fn vec2(a: Real, b: Real) -> DVector<Real> {
    DVector::from_vec(vec![a, b])
}

fn mat(rows: usize, cols: usize, entries: &[Real]) -> DMatrix<Real> {
    DMatrix::from_row_slice(rows, cols, entries)
}

/// Flow map and constraint of one EXP3 mode.
#[derive(Debug, Clone)]
pub struct Exp3Dynamics {
    pub mode: Exp3Mode,
}

impl DynamicsModel for Exp3Dynamics {
    fn name(&self) -> &str {
        self.mode.as_str()
    }

    fn state_dim(&self) -> usize {
        STATE_DIM
    }

    fn input_dim(&self) -> usize {
        INPUT_DIM
    }

    fn flow_map(&self, t: Real, x: &StateVector, u: &InputVector) -> SystemResult<StateVector> {
        let p = EvalPoint::checked(t, x, u, STATE_DIM, INPUT_DIM)?;
        let (x, u) = (&p.x, &p.u);
        Ok(match self.mode {
            Exp3Mode::One => vec2(x[0] + u[0] * x[0].sin(), -x[1] - u[0] * x[1].cos()),
            Exp3Mode::Two => vec2(x[1] + u[0] * x[1].sin(), -x[0] - u[0] * x[0].cos()),
            Exp3Mode::Three => vec2(-x[0] - u[0] * x[0].sin(), x[1] + u[0] * x[1].cos()),
        })
    }

    fn constraint(
        &self,
        t: Real,
        x: &StateVector,
        u: &InputVector,
    ) -> SystemResult<Option<ConstraintVector>> {
        let p = EvalPoint::checked(t, x, u, STATE_DIM, INPUT_DIM)?;
        let (x, u) = (&p.x, &p.u);
        let g = match self.mode {
            Exp3Mode::One => u[1] * x[0].sin() - u[1] * x[1].cos() + 0.1 * u[1] - 1.0,
            Exp3Mode::Two => u[1] * x[1].sin() - u[1] * x[0].cos() + 0.1 * u[1] - 1.0,
            Exp3Mode::Three => -u[1] * x[0].sin() + u[1] * x[1].cos() + 0.1 * u[1] - 1.0,
        };
        Ok(Some(DVector::from_vec(vec![g])))
    }

    fn clone_box(&self) -> Box<dyn DynamicsModel> {
        Box::new(self.clone())
    }
}

/// Analytic linearization of one EXP3 mode.
#[derive(Debug, Clone)]
pub struct Exp3Derivatives {
    pub mode: Exp3Mode,
    point: Option<EvalPoint>,
}

impl Exp3Derivatives {
    pub fn new(mode: Exp3Mode) -> Self {
        Self { mode, point: None }
    }

    fn point(&self) -> SystemResult<&EvalPoint> {
        self.point.as_ref().ok_or(SystemError::PointNotSet {
            what: "exp3 derivatives",
        })
    }
}

impl DerivativesModel for Exp3Derivatives {
    fn set_linearization_point(
        &mut self,
        t: Real,
        x: &StateVector,
        u: &InputVector,
    ) -> SystemResult<()> {
        self.point = Some(EvalPoint::checked(t, x, u, STATE_DIM, INPUT_DIM)?);
        Ok(())
    }

    fn flow_map_derivative_state(&self) -> SystemResult<StateMatrix> {
        let EvalPoint { x, u, .. } = self.point()?;
        Ok(match self.mode {
            Exp3Mode::One => mat(
                2,
                2,
                &[1.0 + u[0] * x[0].cos(), 0.0, 0.0, -1.0 + u[0] * x[1].sin()],
            ),
            Exp3Mode::Two => mat(
                2,
                2,
                &[0.0, 1.0 + u[0] * x[1].cos(), -1.0 + u[0] * x[0].sin(), 0.0],
            ),
            Exp3Mode::Three => mat(
                2,
                2,
                &[-1.0 - u[0] * x[0].cos(), 0.0, 0.0, 1.0 - u[0] * x[1].sin()],
            ),
        })
    }

    fn flow_map_derivative_input(&self) -> SystemResult<StateInputMatrix> {
        let EvalPoint { x, .. } = self.point()?;
        Ok(match self.mode {
            Exp3Mode::One => mat(2, 2, &[x[0].sin(), 0.0, -x[1].cos(), 0.0]),
            Exp3Mode::Two => mat(2, 2, &[x[1].sin(), 0.0, -x[0].cos(), 0.0]),
            Exp3Mode::Three => mat(2, 2, &[-x[0].sin(), 0.0, x[1].cos(), 0.0]),
        })
    }

    fn constraint_derivative_state(&self) -> SystemResult<Option<DMatrix<Real>>> {
        let EvalPoint { x, u, .. } = self.point()?;
        let row = match self.mode {
            Exp3Mode::One => [u[1] * x[0].cos(), u[1] * x[1].sin()],
            Exp3Mode::Two => [u[1] * x[0].sin(), u[1] * x[1].cos()],
            Exp3Mode::Three => [-u[1] * x[0].cos(), -u[1] * x[1].sin()],
        };
        Ok(Some(mat(1, 2, &row)))
    }

    fn constraint_derivative_input(&self) -> SystemResult<Option<DMatrix<Real>>> {
        let EvalPoint { x, .. } = self.point()?;
        let du1 = match self.mode {
            Exp3Mode::One => x[0].sin() - x[1].cos() + 0.1,
            Exp3Mode::Two => x[1].sin() - x[0].cos() + 0.1,
            Exp3Mode::Three => -x[0].sin() + x[1].cos() + 0.1,
        };
        Ok(Some(mat(1, 2, &[0.0, du1])))
    }

    fn clone_box(&self) -> Box<dyn DerivativesModel> {
        Box::new(self.clone())
    }
}

/// Quadratic tracking cost towards `(1, -1)`.
#[derive(Debug, Clone)]
pub struct Exp3Cost {
    pub alpha: Real,
    /// 0 disables the terminal cost, 1 uses the state part of the running cost.
    pub terminal_weight: Real,
    point: Option<EvalPoint>,
}

impl Exp3Cost {
    pub fn new(mode: Exp3Mode) -> Self {
        let terminal_weight = match mode {
            Exp3Mode::Three => 1.0,
            Exp3Mode::One | Exp3Mode::Two => 0.0,
        };
        Self {
            alpha: INPUT_WEIGHT,
            terminal_weight,
            point: None,
        }
    }

    fn point(&self) -> SystemResult<&EvalPoint> {
        self.point.as_ref().ok_or(SystemError::PointNotSet { what: "exp3 cost" })
    }

    fn state_error(x: &StateVector) -> StateVector {
        vec2(x[0] - 1.0, x[1] + 1.0)
    }
}

impl CostModel for Exp3Cost {
    fn set_current_state_and_input(
        &mut self,
        t: Real,
        x: &StateVector,
        u: &InputVector,
    ) -> SystemResult<()> {
        self.point = Some(EvalPoint::checked(t, x, u, STATE_DIM, INPUT_DIM)?);
        Ok(())
    }

    fn cost(&self) -> SystemResult<Real> {
        let EvalPoint { x, u, .. } = self.point()?;
        let e = Self::state_error(x);
        Ok(0.5 * e.norm_squared() + 0.5 * u[0] * u[0] + 0.5 * self.alpha * u[1] * u[1])
    }

    fn cost_derivative_state(&self) -> SystemResult<StateVector> {
        Ok(Self::state_error(&self.point()?.x))
    }

    fn cost_second_derivative_state(&self) -> SystemResult<StateMatrix> {
        self.point()?;
        Ok(StateMatrix::identity(STATE_DIM, STATE_DIM))
    }

    fn cost_derivative_input(&self) -> SystemResult<InputVector> {
        let u = &self.point()?.u;
        Ok(vec2(u[0], self.alpha * u[1]))
    }

    fn cost_second_derivative_input(&self) -> SystemResult<InputMatrix> {
        self.point()?;
        Ok(mat(2, 2, &[1.0, 0.0, 0.0, self.alpha]))
    }

    fn cost_derivative_input_state(&self) -> SystemResult<InputStateMatrix> {
        self.point()?;
        Ok(InputStateMatrix::zeros(INPUT_DIM, STATE_DIM))
    }

    fn terminal_cost(&self) -> SystemResult<Real> {
        let e = Self::state_error(&self.point()?.x);
        Ok(0.5 * self.terminal_weight * e.norm_squared())
    }

    fn terminal_cost_derivative_state(&self) -> SystemResult<StateVector> {
        Ok(Self::state_error(&self.point()?.x) * self.terminal_weight)
    }

    fn terminal_cost_second_derivative_state(&self) -> SystemResult<StateMatrix> {
        self.point()?;
        Ok(StateMatrix::identity(STATE_DIM, STATE_DIM) * self.terminal_weight)
    }

    fn clone_box(&self) -> Box<dyn CostModel> {
        Box::new(self.clone())
    }
}

/// Dynamics, derivatives and cost of one mode.
pub fn mode(mode: Exp3Mode) -> Mode {
    Mode {
        dynamics: Box::new(Exp3Dynamics { mode }),
        derivatives: Box::new(Exp3Derivatives::new(mode)),
        cost: Box::new(Exp3Cost::new(mode)),
    }
}

/// All three modes in order, switching at the two given times.
pub fn switched_system(switching_times: Vec<Real>) -> SystemResult<SwitchedSystem> {
    SwitchedSystem::new(Exp3Mode::ALL.iter().map(|&m| mode(m)).collect(), switching_times)
}
