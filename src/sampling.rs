//! Sampling of spring trajectories with a fixed time step.

use crate::{fph, quantities::Position, spring::Spring};
use anyhow::{Result, bail};
use num_traits::ToPrimitive;

/// The largest number of time steps a single call to [`sample_trajectory`]
/// will take.
pub const MAX_SAMPLING_STEPS: usize = 10_000_000;

/// The position of a spring at a given elapsed time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrajectorySample {
    /// The elapsed time of the spring when the sample was taken.
    pub time: fph,
    /// The position of the spring when the sample was taken.
    pub position: Position,
}

/// Advances the given spring repeatedly with the given time step until the
/// given duration has passed, recording the position before the first step
/// and after every step.
///
/// The spring is driven from its current state, so a freshly created or reset
/// spring yields its pull position as the first sample. The number of steps is
/// the number of whole time steps that fit in the duration.
///
/// # Errors
/// Returns an error if the time step is not a positive finite number, if
/// the duration is not a non-negative finite number, or if more than
/// [`MAX_SAMPLING_STEPS`] steps would be needed.
pub fn sample_trajectory(
    spring: &mut Spring,
    time_step: fph,
    duration: fph,
) -> Result<Vec<TrajectorySample>> {
    if !(time_step.is_finite() && time_step > 0.0) {
        bail!("Invalid time step for sampling spring trajectory: {}", time_step);
    }
    if !(duration.is_finite() && duration >= 0.0) {
        bail!("Invalid duration for sampling spring trajectory: {}", duration);
    }

    let n_steps = match (duration / time_step).floor().to_usize() {
        Some(n_steps) if n_steps <= MAX_SAMPLING_STEPS => n_steps,
        _ => bail!(
            "Too many time steps of duration {} to sample spring trajectory over {} (limit is {})",
            time_step,
            duration,
            MAX_SAMPLING_STEPS
        ),
    };

    let samples = with_debug_logging!(
        "Sampling spring trajectory with {} steps of duration {}", n_steps, time_step; {
        let mut samples = Vec::with_capacity(n_steps + 1);
        samples.push(take_sample(spring));
        for _ in 0..n_steps {
            spring.advance(time_step);
            samples.push(take_sample(spring));
        }
        samples
    });

    Ok(samples)
}

fn take_sample(spring: &Spring) -> TrajectorySample {
    TrajectorySample {
        time: spring.elapsed_time(),
        position: spring.position(),
    }
}
