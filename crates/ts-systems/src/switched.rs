//! Switched system: one model triple per mode, ordered by switching times.

use ts_core::{Real, TsError, first_decrease};

use crate::cost::CostModel;
use crate::derivatives::DerivativesModel;
use crate::dynamics::DynamicsModel;
use crate::error::{SystemError, SystemResult};

/// Models active between two consecutive switching times.
#[derive(Clone)]
pub struct Mode {
    pub dynamics: Box<dyn DynamicsModel>,
    pub derivatives: Box<dyn DerivativesModel>,
    pub cost: Box<dyn CostModel>,
}

/// Ordered modes with `modes.len() - 1` switching times between them.
///
/// At a switching time the later mode is active, matching how recorded
/// operating trajectories put the post-switch sample second.
#[derive(Clone)]
pub struct SwitchedSystem {
    modes: Vec<Mode>,
    switching_times: Vec<Real>,
}

impl SwitchedSystem {
    pub fn new(modes: Vec<Mode>, switching_times: Vec<Real>) -> SystemResult<Self> {
        if modes.is_empty() {
            return Err(SystemError::InvalidArg {
                what: "switched system needs at least one mode",
            });
        }
        if switching_times.len() + 1 != modes.len() {
            return Err(SystemError::InvalidArg {
                what: "need exactly one switching time between consecutive modes",
            });
        }
        if first_decrease(&switching_times).is_some() {
            return Err(SystemError::InvalidArg {
                what: "switching times must be non-decreasing",
            });
        }
        let nx = modes[0].dynamics.state_dim();
        let nu = modes[0].dynamics.input_dim();
        for mode in &modes {
            if mode.dynamics.state_dim() != nx {
                return Err(TsError::DimensionMismatch {
                    what: "mode state dimension",
                    expected: nx,
                    got: mode.dynamics.state_dim(),
                }
                .into());
            }
            if mode.dynamics.input_dim() != nu {
                return Err(TsError::DimensionMismatch {
                    what: "mode input dimension",
                    expected: nu,
                    got: mode.dynamics.input_dim(),
                }
                .into());
            }
        }
        Ok(Self {
            modes,
            switching_times,
        })
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn switching_times(&self) -> &[Real] {
        &self.switching_times
    }

    pub fn state_dim(&self) -> usize {
        self.modes[0].dynamics.state_dim()
    }

    pub fn input_dim(&self) -> usize {
        self.modes[0].dynamics.input_dim()
    }

    /// Index of the mode active at `t`.
    pub fn mode_index(&self, t: Real) -> usize {
        self.switching_times.partition_point(|&s| s <= t)
    }

    pub fn mode_at(&self, t: Real) -> &Mode {
        &self.modes[self.mode_index(t)]
    }

    pub fn mode_at_mut(&mut self, t: Real) -> &mut Mode {
        let index = self.mode_index(t);
        &mut self.modes[index]
    }
}
