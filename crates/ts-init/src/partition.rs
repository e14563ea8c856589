//! Full-horizon seeding over time partitions.
//!
//! Multi-threaded DDP/SLQ sweeps split the horizon into partitions and seed
//! each one separately. The sequential path reuses one output buffer with
//! `concat = true`; the parallel path gives every partition its own provider
//! clone and joins the pieces in partition order.

use rayon::prelude::*;
use tracing::debug;
use ts_core::{Real, StateVector, first_decrease};

use crate::error::{InitError, InitResult};
use crate::provider::OperatingTrajectories;
use crate::trajectory::OperatingTrajectory;

fn check_partitions(partition_times: &[Real]) -> InitResult<()> {
    if partition_times.len() < 2 {
        return Err(InitError::InvalidArg {
            what: "need at least two partition times",
        });
    }
    if let Some(index) = first_decrease(partition_times) {
        return Err(InitError::InvertedInterval {
            start_time: partition_times[index - 1],
            final_time: partition_times[index],
        });
    }
    Ok(())
}

/// Seed `[partition_times[0], partition_times[n-1]]` one partition at a time.
///
/// Each interior partition time shows up twice in the result, once as the
/// end of one partition and once as the start of the next.
pub fn seed_partitions(
    provider: &dyn OperatingTrajectories,
    initial_state: &StateVector,
    partition_times: &[Real],
) -> InitResult<OperatingTrajectory> {
    check_partitions(partition_times)?;

    let mut output = OperatingTrajectory::new();
    for window in partition_times.windows(2) {
        provider.trajectories(initial_state, window[0], window[1], &mut output, true)?;
    }
    debug!(
        provider = provider.name(),
        partitions = partition_times.len() - 1,
        samples = output.len(),
        "seeded partitions"
    );
    Ok(output)
}

/// Same result as [`seed_partitions`], with partitions extracted in parallel.
pub fn seed_partitions_parallel(
    provider: &dyn OperatingTrajectories,
    initial_state: &StateVector,
    partition_times: &[Real],
) -> InitResult<OperatingTrajectory> {
    check_partitions(partition_times)?;

    let pieces: Vec<OperatingTrajectory> = partition_times
        .par_windows(2)
        .map(|window| {
            let worker = provider.clone_box();
            let mut piece = OperatingTrajectory::new();
            worker.trajectories(initial_state, window[0], window[1], &mut piece, false)?;
            Ok(piece)
        })
        .collect::<InitResult<_>>()?;

    let mut output = OperatingTrajectory::new();
    for piece in pieces {
        output.append(piece);
    }
    debug!(
        provider = provider.name(),
        partitions = partition_times.len() - 1,
        samples = output.len(),
        "seeded partitions in parallel"
    );
    Ok(output)
}
