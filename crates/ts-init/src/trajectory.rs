//! Caller-owned output buffer for operating trajectories.

use ts_core::{InputVector, Real, StateVector, first_decrease};

use crate::error::{InitError, InitResult};

/// Time, state and input samples handed to the solver as its zeroth iterate.
///
/// The three sequences are parallel. Two consecutive samples with the same
/// time mark a discontinuity (a switching time or a concatenation seam).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatingTrajectory {
    pub time: Vec<Real>,
    pub state: Vec<StateVector>,
    pub input: Vec<InputVector>,
}

impl OperatingTrajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn clear(&mut self) {
        self.time.clear();
        self.state.clear();
        self.input.clear();
    }

    pub fn push(&mut self, t: Real, state: StateVector, input: InputVector) {
        self.time.push(t);
        self.state.push(state);
        self.input.push(input);
    }

    /// Move all samples of `other` to the end of `self`.
    pub fn append(&mut self, mut other: OperatingTrajectory) {
        self.time.append(&mut other.time);
        self.state.append(&mut other.state);
        self.input.append(&mut other.input);
    }

    pub fn start_time(&self) -> Option<Real> {
        self.time.first().copied()
    }

    pub fn final_time(&self) -> Option<Real> {
        self.time.last().copied()
    }

    /// Check the output postconditions: non-empty, parallel, time-monotonic.
    pub fn validate(&self) -> InitResult<()> {
        if self.time.len() != self.state.len() || self.time.len() != self.input.len() {
            return Err(InitError::LengthMismatch {
                time: self.time.len(),
                state: self.state.len(),
                input: self.input.len(),
            });
        }
        if self.is_empty() {
            return Err(InitError::InvalidConfig {
                what: "operating trajectory is empty".to_string(),
            });
        }
        if let Some(index) = first_decrease(&self.time) {
            return Err(InitError::NonMonotonicTime {
                index,
                previous: self.time[index - 1],
                value: self.time[index],
            });
        }
        Ok(())
    }

    /// Split at every duplicate-time seam into discontinuity-free pieces.
    ///
    /// The sample before a seam ends one piece and the sample after it starts
    /// the next, so each piece is a single control regime.
    pub fn segments(&self) -> Vec<OperatingTrajectory> {
        let mut pieces = Vec::new();
        let mut begin = 0;
        for k in 1..=self.len() {
            let at_seam = k < self.len() && self.time[k] == self.time[k - 1];
            if k == self.len() || at_seam {
                pieces.push(self.slice(begin, k));
                begin = k;
            }
        }
        pieces
    }

    fn slice(&self, begin: usize, end: usize) -> OperatingTrajectory {
        OperatingTrajectory {
            time: self.time[begin..end].to_vec(),
            state: self.state[begin..end].to_vec(),
            input: self.input[begin..end].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: Real) -> StateVector {
        StateVector::from_vec(vec![x])
    }

    fn sample_trajectory(times: &[Real]) -> OperatingTrajectory {
        let mut traj = OperatingTrajectory::new();
        for (i, &t) in times.iter().enumerate() {
            traj.push(t, v(i as Real), v(-(i as Real)));
        }
        traj
    }

    #[test]
    fn push_and_append_keep_sequences_parallel() {
        let mut a = sample_trajectory(&[0.0, 1.0]);
        let b = sample_trajectory(&[1.0, 2.0]);
        a.append(b);
        assert_eq!(a.len(), 4);
        assert_eq!(a.state.len(), 4);
        assert_eq!(a.input.len(), 4);
        assert_eq!(a.start_time(), Some(0.0));
        assert_eq!(a.final_time(), Some(2.0));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_decreasing() {
        assert!(OperatingTrajectory::new().validate().is_err());

        let traj = sample_trajectory(&[0.0, 2.0, 1.0]);
        match traj.validate() {
            Err(InitError::NonMonotonicTime { index, .. }) => assert_eq!(index, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_ragged_buffers() {
        let mut traj = sample_trajectory(&[0.0, 1.0]);
        traj.input.pop();
        assert!(matches!(
            traj.validate(),
            Err(InitError::LengthMismatch { input: 1, .. })
        ));
    }

    #[test]
    fn segments_split_at_duplicate_times() {
        let traj = sample_trajectory(&[0.0, 1.0, 1.0, 2.0, 3.0, 3.0]);
        let pieces = traj.segments();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].time, vec![0.0, 1.0]);
        assert_eq!(pieces[1].time, vec![1.0, 2.0, 3.0]);
        assert_eq!(pieces[2].time, vec![3.0]);
        assert_eq!(pieces[1].state[0], v(2.0));
    }

    #[test]
    fn segments_of_continuous_trajectory_is_itself() {
        let traj = sample_trajectory(&[0.0, 0.5, 1.0]);
        assert_eq!(traj.segments(), vec![traj.clone()]);
        assert!(OperatingTrajectory::new().segments().is_empty());
    }
}
