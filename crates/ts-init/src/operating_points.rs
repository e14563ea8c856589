//! Operating point / recorded operating trajectory initializer.
//!
//! Two modes share one provider:
//! - **Point**: a single state/input pair held over any requested horizon.
//! - **Trajectory**: recorded samples sliced to the requested horizon.
//!
//! # Boundary policy (trajectory mode)
//!
//! - A boundary before the first or after the last stored time holds the
//!   nearest stored sample.
//! - A boundary strictly between two stored times is linearly interpolated
//!   from the bracketing samples. At a switching time the bracket starts at
//!   the post-switch sample.
//! - A boundary that equals a stored time emits every stored sample at that
//!   time. At a switching time this yields both the pre- and post-switch
//!   samples, so the first/last output time still equals the boundary.

use tracing::{debug, trace, warn};
use ts_core::{InputVector, Real, StateVector, ensure_dim, ensure_finite, first_decrease, lerp};

use crate::error::{InitError, InitResult};
use crate::provider::OperatingTrajectories;
use crate::trajectory::OperatingTrajectory;

/// Data held by an [`OperatingPoints`] provider.
#[derive(Debug, Clone, PartialEq)]
pub enum OperatingData {
    /// Constant state/input pair, valid over all time.
    Point {
        state: StateVector,
        input: InputVector,
    },
    /// Recorded samples with non-decreasing time stamps.
    Trajectory {
        time: Vec<Real>,
        state: Vec<StateVector>,
        input: Vec<InputVector>,
    },
}

/// Initializer based on an operating point or a recorded operating trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoints {
    data: OperatingData,
}

impl OperatingPoints {
    /// Hold `state`/`input` over every requested horizon.
    pub fn from_point(state: StateVector, input: InputVector) -> Self {
        Self {
            data: OperatingData::Point { state, input },
        }
    }

    /// Slice a recorded trajectory.
    ///
    /// # Errors
    ///
    /// Fails if the sequences are empty or of different lengths, if a time is
    /// non-finite or smaller than its predecessor, or if the state or input
    /// dimension changes along the trajectory.
    pub fn from_trajectory(
        time: Vec<Real>,
        state: Vec<StateVector>,
        input: Vec<InputVector>,
    ) -> InitResult<Self> {
        validate_recorded(&time, &state, &input)?;
        Ok(Self {
            data: OperatingData::Trajectory { time, state, input },
        })
    }

    pub fn data(&self) -> &OperatingData {
        &self.data
    }

    pub fn is_point(&self) -> bool {
        matches!(self.data, OperatingData::Point { .. })
    }

    /// Replace the stored data with a single operating point.
    pub fn set_operating_point(&mut self, state: StateVector, input: InputVector) {
        self.data = OperatingData::Point { state, input };
    }

    /// Replace the stored data with a recorded trajectory.
    ///
    /// On error the previous data is kept.
    pub fn set_trajectory(
        &mut self,
        time: Vec<Real>,
        state: Vec<StateVector>,
        input: Vec<InputVector>,
    ) -> InitResult<()> {
        validate_recorded(&time, &state, &input)?;
        self.data = OperatingData::Trajectory { time, state, input };
        Ok(())
    }

    /// Stored times that carry more than one sample, in ascending order.
    pub fn switching_times(&self) -> Vec<Real> {
        match &self.data {
            OperatingData::Point { .. } => Vec::new(),
            OperatingData::Trajectory { time, .. } => {
                let mut switches: Vec<Real> = time
                    .windows(2)
                    .filter(|w| w[0] == w[1])
                    .map(|w| w[0])
                    .collect();
                switches.dedup();
                switches
            }
        }
    }

    fn check_query(
        &self,
        initial_state: &StateVector,
        start_time: Real,
        final_time: Real,
    ) -> InitResult<()> {
        ensure_finite(start_time, "start time")?;
        ensure_finite(final_time, "final time")?;
        if final_time < start_time {
            return Err(InitError::InvertedInterval {
                start_time,
                final_time,
            });
        }
        ensure_dim("initial state", initial_state, self.state_dim())?;
        Ok(())
    }
}

impl OperatingTrajectories for OperatingPoints {
    fn name(&self) -> &str {
        match self.data {
            OperatingData::Point { .. } => "operating point",
            OperatingData::Trajectory { .. } => "operating trajectory",
        }
    }

    fn state_dim(&self) -> usize {
        match &self.data {
            OperatingData::Point { state, .. } => state.len(),
            OperatingData::Trajectory { state, .. } => state[0].len(),
        }
    }

    fn input_dim(&self) -> usize {
        match &self.data {
            OperatingData::Point { input, .. } => input.len(),
            OperatingData::Trajectory { input, .. } => input[0].len(),
        }
    }

    fn trajectories(
        &self,
        initial_state: &StateVector,
        start_time: Real,
        final_time: Real,
        output: &mut OperatingTrajectory,
        concat: bool,
    ) -> InitResult<()> {
        self.check_query(initial_state, start_time, final_time)?;

        if !concat {
            output.clear();
        }
        let before = output.len();

        match &self.data {
            OperatingData::Point { state, input } => {
                output.push(start_time, state.clone(), input.clone());
                output.push(final_time, state.clone(), input.clone());
            }
            OperatingData::Trajectory { time, state, input } => {
                let recorded = Recorded { time, state, input };
                recorded.extract(start_time, final_time, output);
            }
        }

        debug!(
            mode = self.name(),
            start_time,
            final_time,
            samples = output.len() - before,
            concat,
            "operating trajectories extracted"
        );
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn OperatingTrajectories> {
        Box::new(self.clone())
    }
}

fn validate_recorded(
    time: &[Real],
    state: &[StateVector],
    input: &[InputVector],
) -> InitResult<()> {
    if time.len() != state.len() || time.len() != input.len() {
        return Err(InitError::LengthMismatch {
            time: time.len(),
            state: state.len(),
            input: input.len(),
        });
    }
    if time.is_empty() {
        return Err(InitError::InvalidConfig {
            what: "operating trajectory needs at least one sample".to_string(),
        });
    }
    if let Some((index, &value)) = time.iter().enumerate().find(|(_, t)| !t.is_finite()) {
        return Err(InitError::NonFiniteTime { index, value });
    }
    if let Some(index) = first_decrease(time) {
        return Err(InitError::NonMonotonicTime {
            index,
            previous: time[index - 1],
            value: time[index],
        });
    }
    let nx = state[0].len();
    let nu = input[0].len();
    for (index, (x, u)) in state.iter().zip(input).enumerate() {
        if x.len() != nx {
            return Err(InitError::SampleDimension {
                what: "state",
                index,
                expected: nx,
                got: x.len(),
            });
        }
        if u.len() != nu {
            return Err(InitError::SampleDimension {
                what: "input",
                index,
                expected: nu,
                got: u.len(),
            });
        }
    }
    Ok(())
}

/// Borrowed view of a validated recorded trajectory.
struct Recorded<'a> {
    time: &'a [Real],
    state: &'a [StateVector],
    input: &'a [InputVector],
}

impl Recorded<'_> {
    fn extract(&self, start_time: Real, final_time: Real, output: &mut OperatingTrajectory) {
        let first = self.time[0];
        let last = self.time[self.time.len() - 1];
        if final_time < first || start_time > last {
            warn!(
                start_time,
                final_time,
                first,
                last,
                "requested horizon lies outside recorded data; holding boundary sample"
            );
        }

        let emitted = output.len();
        self.push_boundary(start_time, output);

        if final_time > start_time {
            // Samples strictly inside the horizon, switches included.
            let lo = self.time.partition_point(|&s| s <= start_time);
            let hi = self.time.partition_point(|&s| s < final_time);
            self.push_stored(lo..hi, output);
            self.push_boundary(final_time, output);
        } else if output.len() - emitted == 1 {
            // Degenerate horizon: still hand back a two-sample hold.
            let k = output.len() - 1;
            let (x, u) = (output.state[k].clone(), output.input[k].clone());
            output.push(final_time, x, u);
        }
    }

    /// Emit the sample(s) describing the trajectory at a horizon boundary.
    fn push_boundary(&self, t: Real, output: &mut OperatingTrajectory) {
        let coincident = self.coincident(t);
        if coincident.is_empty() {
            let (x, u) = self.value_at(t);
            output.push(t, x, u);
        } else {
            self.push_stored(coincident, output);
        }
    }

    fn push_stored(&self, range: std::ops::Range<usize>, output: &mut OperatingTrajectory) {
        for k in range {
            output.push(self.time[k], self.state[k].clone(), self.input[k].clone());
        }
    }

    /// Indices of stored samples whose time equals `t` exactly.
    fn coincident(&self, t: Real) -> std::ops::Range<usize> {
        let lo = self.time.partition_point(|&s| s < t);
        let hi = self.time.partition_point(|&s| s <= t);
        lo..hi
    }

    /// Hold outside the recorded range, interpolate inside it.
    ///
    /// Only called for times that are not stored, so a bracketing pair always
    /// has distinct time stamps.
    fn value_at(&self, t: Real) -> (StateVector, InputVector) {
        let n = self.time.len();
        let upper = self.time.partition_point(|&s| s <= t);
        if upper == 0 {
            trace!(t, "holding first recorded sample");
            return (self.state[0].clone(), self.input[0].clone());
        }
        if upper == n {
            trace!(t, "holding last recorded sample");
            return (self.state[n - 1].clone(), self.input[n - 1].clone());
        }
        let lower = upper - 1;
        let alpha = (t - self.time[lower]) / (self.time[upper] - self.time[lower]);
        (
            lerp(&self.state[lower], &self.state[upper], alpha),
            lerp(&self.input[lower], &self.input[upper], alpha),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[Real]) -> StateVector {
        StateVector::from_vec(values.to_vec())
    }

    fn x0() -> StateVector {
        v(&[0.0, 0.0])
    }

    /// Switch at t=1 from s1 to s1'.
    fn switched() -> OperatingPoints {
        OperatingPoints::from_trajectory(
            vec![0.0, 1.0, 1.0, 2.0],
            vec![v(&[0.0, 0.0]), v(&[1.0, 1.0]), v(&[5.0, 5.0]), v(&[6.0, 7.0])],
            vec![v(&[0.0]), v(&[1.0]), v(&[-1.0]), v(&[-2.0])],
        )
        .unwrap()
    }

    fn query(p: &OperatingPoints, t0: Real, tf: Real) -> OperatingTrajectory {
        let mut out = OperatingTrajectory::new();
        p.trajectories(&x0(), t0, tf, &mut out, false).unwrap();
        out
    }

    #[test]
    fn point_mode_emits_two_samples() {
        let p = OperatingPoints::from_point(v(&[1.0, -1.0]), v(&[0.0, 0.0]));
        let out = query(&p, 2.0, 5.0);
        assert_eq!(out.time, vec![2.0, 5.0]);
        assert_eq!(out.state, vec![v(&[1.0, -1.0]), v(&[1.0, -1.0])]);
        assert_eq!(out.input, vec![v(&[0.0, 0.0]), v(&[0.0, 0.0])]);
    }

    #[test]
    fn interior_switch_is_kept_verbatim() {
        let out = query(&switched(), 0.5, 1.5);
        assert_eq!(out.time, vec![0.5, 1.0, 1.0, 1.5]);
        assert_eq!(out.state[0], v(&[0.5, 0.5]));
        assert_eq!(out.state[1], v(&[1.0, 1.0]));
        assert_eq!(out.state[2], v(&[5.0, 5.0]));
        // Right boundary interpolates in the post-switch regime.
        assert_eq!(out.state[3], v(&[5.5, 6.0]));
        assert_eq!(out.input[3], v(&[-1.5]));
    }

    #[test]
    fn boundary_on_switch_keeps_both_sides() {
        let out = query(&switched(), 1.0, 2.0);
        assert_eq!(out.time, vec![1.0, 1.0, 2.0]);
        assert_eq!(out.state[0], v(&[1.0, 1.0]));
        assert_eq!(out.state[1], v(&[5.0, 5.0]));

        let out = query(&switched(), 0.0, 1.0);
        assert_eq!(out.time, vec![0.0, 1.0, 1.0]);
        assert_eq!(out.input, vec![v(&[0.0]), v(&[1.0]), v(&[-1.0])]);
    }

    #[test]
    fn horizon_wider_than_recording_is_held() {
        let out = query(&switched(), -1.0, 3.0);
        assert_eq!(out.time, vec![-1.0, 0.0, 1.0, 1.0, 2.0, 3.0]);
        assert_eq!(out.state[0], v(&[0.0, 0.0]));
        assert_eq!(out.state[5], v(&[6.0, 7.0]));
    }

    #[test]
    fn horizon_outside_recording_is_two_sample_hold() {
        let out = query(&switched(), 3.0, 4.0);
        assert_eq!(out.time, vec![3.0, 4.0]);
        assert_eq!(out.state, vec![v(&[6.0, 7.0]), v(&[6.0, 7.0])]);

        let out = query(&switched(), -5.0, -4.0);
        assert_eq!(out.time, vec![-5.0, -4.0]);
        assert_eq!(out.input, vec![v(&[0.0]), v(&[0.0])]);
    }

    #[test]
    fn zero_length_horizon_is_two_samples() {
        let out = query(&switched(), 0.25, 0.25);
        assert_eq!(out.time, vec![0.25, 0.25]);

        let out = query(&switched(), 1.0, 1.0);
        assert_eq!(out.time, vec![1.0, 1.0]);
        assert_eq!(out.state[0], v(&[1.0, 1.0]));
        assert_eq!(out.state[1], v(&[5.0, 5.0]));
    }

    #[test]
    fn single_sample_recording_behaves_like_a_point() {
        let p = OperatingPoints::from_trajectory(vec![1.0], vec![v(&[2.0, 2.0])], vec![v(&[3.0])])
            .unwrap();
        let out = query(&p, 0.0, 4.0);
        assert_eq!(out.time, vec![0.0, 1.0, 4.0]);
        assert!(out.state.iter().all(|x| *x == v(&[2.0, 2.0])));
    }

    #[test]
    fn concat_appends_instead_of_replacing() {
        let p = switched();
        let mut out = OperatingTrajectory::new();
        p.trajectories(&x0(), 0.0, 0.5, &mut out, false).unwrap();
        p.trajectories(&x0(), 0.5, 2.0, &mut out, true).unwrap();
        assert_eq!(out.time, vec![0.0, 0.5, 0.5, 1.0, 1.0, 2.0]);

        p.trajectories(&x0(), 0.0, 0.5, &mut out, false).unwrap();
        assert_eq!(out.time, vec![0.0, 0.5]);
    }

    #[test]
    fn inverted_interval_leaves_output_untouched() {
        let p = switched();
        let mut out = query(&p, 0.0, 2.0);
        let before = out.clone();
        let err = p.trajectories(&x0(), 2.0, 1.0, &mut out, false).unwrap_err();
        assert!(err.is_argument());
        assert_eq!(out, before);
    }

    #[test]
    fn initial_state_dimension_is_checked() {
        let p = switched();
        let mut out = OperatingTrajectory::new();
        let err = p
            .trajectories(&v(&[0.0]), 0.0, 1.0, &mut out, false)
            .unwrap_err();
        assert!(matches!(
            err,
            InitError::DimensionMismatch {
                what: "initial state",
                expected: 2,
                got: 1,
            }
        ));
        assert!(err.is_argument());
        assert!(out.is_empty());
    }

    #[test]
    fn non_finite_times_are_rejected() {
        let p = OperatingPoints::from_point(v(&[0.0, 0.0]), v(&[0.0]));
        let mut out = OperatingTrajectory::new();
        let err = p
            .trajectories(&x0(), 0.0, Real::NAN, &mut out, false)
            .unwrap_err();
        assert!(matches!(err, InitError::NonFinite { what: "final time", .. }));
        assert!(err.is_argument());

        let err = p
            .trajectories(&x0(), Real::NEG_INFINITY, 1.0, &mut out, false)
            .unwrap_err();
        assert!(matches!(err, InitError::NonFinite { what: "start time", .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn construction_validates_eagerly() {
        let err = OperatingPoints::from_trajectory(
            vec![0.0, 1.0],
            vec![v(&[0.0])],
            vec![v(&[0.0]), v(&[0.0])],
        )
        .unwrap_err();
        assert!(matches!(err, InitError::LengthMismatch { state: 1, .. }));

        let err = OperatingPoints::from_trajectory(
            vec![0.0, 2.0, 1.0],
            vec![v(&[0.0]); 3],
            vec![v(&[0.0]); 3],
        )
        .unwrap_err();
        assert!(matches!(err, InitError::NonMonotonicTime { index: 2, .. }));

        let err = OperatingPoints::from_trajectory(vec![], vec![], vec![]).unwrap_err();
        assert!(err.is_config());

        let err = OperatingPoints::from_trajectory(
            vec![0.0, 1.0],
            vec![v(&[0.0]), v(&[0.0, 1.0])],
            vec![v(&[0.0]); 2],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InitError::SampleDimension {
                what: "state",
                index: 1,
                expected: 1,
                got: 2,
            }
        ));
        assert!(err.is_config());

        let err = OperatingPoints::from_trajectory(
            vec![0.0, 1.0],
            vec![v(&[0.0]); 2],
            vec![v(&[0.0]), v(&[])],
        )
        .unwrap_err();
        assert!(matches!(err, InitError::SampleDimension { what: "input", .. }));
        assert!(err.is_config());

        let err = OperatingPoints::from_trajectory(
            vec![0.0, Real::INFINITY],
            vec![v(&[0.0]); 2],
            vec![v(&[0.0]); 2],
        )
        .unwrap_err();
        assert!(matches!(err, InitError::NonFiniteTime { index: 1, .. }));
        assert!(err.is_config());
        assert!(!err.is_argument());
    }

    #[test]
    fn switching_times_lists_duplicates_once() {
        let p = OperatingPoints::from_trajectory(
            vec![0.0, 1.0, 1.0, 1.0, 2.0, 3.0, 3.0],
            vec![v(&[0.0]); 7],
            vec![v(&[0.0]); 7],
        )
        .unwrap();
        assert_eq!(p.switching_times(), vec![1.0, 3.0]);
        assert!(
            OperatingPoints::from_point(v(&[0.0]), v(&[0.0]))
                .switching_times()
                .is_empty()
        );
    }

    #[test]
    fn failed_setter_keeps_previous_data() {
        let mut p = switched();
        let before = p.clone();
        let err = p
            .set_trajectory(vec![1.0, 0.0], vec![v(&[0.0, 0.0]); 2], vec![v(&[0.0]); 2])
            .unwrap_err();
        assert!(err.is_config());
        assert_eq!(p, before);
    }

    #[test]
    fn clones_are_independent() {
        let original = switched();
        let mut copy = original.clone();
        copy.set_operating_point(v(&[9.0, 9.0]), v(&[9.0]));

        let out = query(&original, 0.0, 2.0);
        assert_eq!(out.time, vec![0.0, 1.0, 1.0, 2.0]);
        assert!(copy.is_point());
        assert!(!original.is_point());
    }

    #[test]
    fn boxed_clone_reports_dimensions() {
        let boxed: Box<dyn OperatingTrajectories> = Box::new(switched());
        let copy = boxed.clone();
        assert_eq!(copy.state_dim(), 2);
        assert_eq!(copy.input_dim(), 1);
        assert_eq!(copy.name(), "operating trajectory");
    }
}
