//! File format for operating-point initializers.
//!
//! ```yaml
//! mode: trajectory
//! samples:
//!   - { t: 0.0, state: [0.0, 1.0], input: [0.0] }
//!   - { t: 1.0, state: [1.0, 1.0], input: [0.5] }
//! ```
//!
//! or `mode: point` with top-level `state` and `input` lists.

use serde::{Deserialize, Serialize};
use std::path::Path;
use ts_core::{InputVector, Real, StateVector};

use crate::error::{InitError, InitResult};
use crate::operating_points::{OperatingData, OperatingPoints};
use crate::trajectory::OperatingTrajectory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OperatingPointsDef {
    Point {
        state: Vec<Real>,
        input: Vec<Real>,
    },
    Trajectory {
        #[serde(default)]
        samples: Vec<SampleDef>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleDef {
    pub t: Real,
    pub state: Vec<Real>,
    pub input: Vec<Real>,
}

impl SampleDef {
    pub fn new(t: Real, state: &StateVector, input: &InputVector) -> Self {
        Self {
            t,
            state: state.iter().copied().collect(),
            input: input.iter().copied().collect(),
        }
    }
}

impl TryFrom<OperatingPointsDef> for OperatingPoints {
    type Error = InitError;

    fn try_from(def: OperatingPointsDef) -> InitResult<Self> {
        match def {
            OperatingPointsDef::Point { state, input } => Ok(OperatingPoints::from_point(
                StateVector::from_vec(state),
                InputVector::from_vec(input),
            )),
            OperatingPointsDef::Trajectory { samples } => {
                let mut time = Vec::with_capacity(samples.len());
                let mut state = Vec::with_capacity(samples.len());
                let mut input = Vec::with_capacity(samples.len());
                for sample in samples {
                    time.push(sample.t);
                    state.push(StateVector::from_vec(sample.state));
                    input.push(InputVector::from_vec(sample.input));
                }
                OperatingPoints::from_trajectory(time, state, input)
            }
        }
    }
}

impl OperatingPoints {
    /// Export the stored data in file form.
    pub fn to_def(&self) -> OperatingPointsDef {
        match self.data() {
            OperatingData::Point { state, input } => OperatingPointsDef::Point {
                state: state.iter().copied().collect(),
                input: input.iter().copied().collect(),
            },
            OperatingData::Trajectory { time, state, input } => OperatingPointsDef::Trajectory {
                samples: time
                    .iter()
                    .zip(state)
                    .zip(input)
                    .map(|((&t, x), u)| SampleDef::new(t, x, u))
                    .collect(),
            },
        }
    }
}

impl OperatingTrajectory {
    /// Samples in file form, for dumping an extracted guess.
    pub fn to_samples(&self) -> Vec<SampleDef> {
        self.time
            .iter()
            .zip(&self.state)
            .zip(&self.input)
            .map(|((&t, x), u)| SampleDef::new(t, x, u))
            .collect()
    }
}

pub fn load_yaml(path: &Path) -> InitResult<OperatingPoints> {
    let content = std::fs::read_to_string(path)?;
    let def: OperatingPointsDef = serde_yaml::from_str(&content)?;
    OperatingPoints::try_from(def)
}

pub fn save_yaml(path: &Path, points: &OperatingPoints) -> InitResult<()> {
    let content = serde_yaml::to_string(&points.to_def())?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> InitResult<OperatingPoints> {
    let content = std::fs::read_to_string(path)?;
    let def: OperatingPointsDef = serde_json::from_str(&content)?;
    OperatingPoints::try_from(def)
}

pub fn save_json(path: &Path, points: &OperatingPoints) -> InitResult<()> {
    let content = serde_json::to_string_pretty(&points.to_def())?;
    std::fs::write(path, content)?;
    Ok(())
}
