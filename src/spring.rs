//! Damped spring motion toward an equilibrium position.

use crate::{
    fph, io,
    num::Float,
    quantities::{Direction, Displacement, Position},
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The parameters defining the trajectory of a [`Spring`].
///
/// The point starts out at the pull position and oscillates back and forth
/// along the line through the pull and equilibrium positions. A positive
/// oscillation displaces the point from the equilibrium position away from
/// the pull position. The amplitude
/// of the oscillation decays as `decay_rate^(frequency * time)` and is never
/// allowed to exceed the amplitude cap.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParameters {
    /// The position of the point at time zero. Also determines the direction
    /// and initial amplitude of the oscillation.
    pub pull_position: Position,
    /// The center of oscillation.
    pub equilibrium_position: Position,
    /// The oscillation frequency. Scales both the rate of oscillation and the
    /// rate of decay.
    pub frequency: fph,
    /// The base of the power-law decay of the amplitude. Values in (0, 1) give
    /// decaying motion, 1 gives sustained motion and values above 1 give
    /// growing motion.
    pub decay_rate: fph,
    /// The maximum magnitude of the oscillation amplitude.
    pub amplitude_cap: fph,
}

/// Whether a [`Spring`] has been advanced since it was created or last reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionState {
    /// The spring sits at its pull position with zero elapsed time.
    AtRest,
    /// The spring has been advanced at least once.
    Running,
}

/// A point following a damped oscillation around an equilibrium position.
///
/// The spring accumulates the time deltas passed to [`Self::advance`] and
/// recomputes its position from the accumulated time on every step, so the
/// position never drifts regardless of how the time is split into steps.
///
/// Mutation requires exclusive access, so sharing a spring between threads
/// needs external synchronization.
#[derive(Clone, Debug)]
pub struct Spring {
    parameters: SpringParameters,
    elapsed_time: fph,
    position: Position,
    state: MotionState,
}

impl SpringParameters {
    /// Creates a new set of spring parameters.
    pub fn new(
        pull_position: Position,
        equilibrium_position: Position,
        frequency: fph,
        decay_rate: fph,
        amplitude_cap: fph,
    ) -> Self {
        Self {
            pull_position,
            equilibrium_position,
            frequency,
            decay_rate,
            amplitude_cap,
        }
    }

    /// Parses the parameters from the RON file at the given path and checks
    /// that they are valid.
    ///
    /// # Errors
    /// Returns an error if the file can not be read or parsed, or if any of
    /// the parameters are not finite.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let parameters: Self = io::parse_ron_file(file_path)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Checks that all parameters are finite numbers.
    ///
    /// A [`Spring`] accepts any parameters, so this check is only needed by
    /// callers that want to rule out non-finite output up front.
    ///
    /// # Errors
    /// Returns an error naming the first parameter that is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.pull_position.iter().all(|coord| coord.is_finite()) {
            bail!("Invalid pull position for spring: {}", self.pull_position);
        }
        if !self.equilibrium_position.iter().all(|coord| coord.is_finite()) {
            bail!(
                "Invalid equilibrium position for spring: {}",
                self.equilibrium_position
            );
        }
        if !self.frequency.is_finite() {
            bail!("Invalid frequency for spring: {}", self.frequency);
        }
        if !self.decay_rate.is_finite() {
            bail!("Invalid decay rate for spring: {}", self.decay_rate);
        }
        if !self.amplitude_cap.is_finite() {
            bail!("Invalid amplitude cap for spring: {}", self.amplitude_cap);
        }
        Ok(())
    }

    /// Computes the distance between the pull position and the equilibrium
    /// position, which is the amplitude of the oscillation before any decay.
    pub fn initial_amplitude(&self) -> fph {
        nalgebra::distance(&self.pull_position, &self.equilibrium_position)
    }

    /// Computes the amplitude envelope at the given time, which bounds the
    /// distance of the point from the equilibrium position.
    pub fn compute_amplitude_envelope(&self, time: fph) -> fph {
        let phase = self.frequency * time;
        let amplitude_factor = self.decay_rate.powf(phase);
        let base_amplitude = self.initial_amplitude() * amplitude_factor;
        nan_propagating_min(self.amplitude_cap, base_amplitude)
    }

    /// Computes the position of the point at the given time since the start
    /// of the motion.
    ///
    /// If the pull and equilibrium positions coincide, the direction of
    /// oscillation is undefined and is taken to be the zero vector, so the
    /// point stays at the equilibrium position as long as the amplitude is
    /// finite. A non-finite amplitude still yields a non-finite position.
    pub fn compute_position(&self, time: fph) -> Position {
        let phase = self.frequency * time;

        // The raw time in the sine argument adds a second, slower frequency
        // component to the oscillation
        let oscillation = fph::sin(fph::TWO_PI * phase + time);

        let signed_amplitude = self.compute_amplitude_envelope(time) * oscillation;

        self.equilibrium_position + self.compute_displacement(signed_amplitude)
    }

    fn compute_displacement(&self, signed_amplitude: fph) -> Displacement {
        let direction = Direction::try_new(
            self.equilibrium_position - self.pull_position,
            fph::ZERO,
        )
        .map_or_else(Displacement::zeros, Direction::into_inner);

        signed_amplitude * direction
    }
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self {
            pull_position: Position::new(1.0, 0.0, 0.0),
            equilibrium_position: Position::origin(),
            frequency: 1.0,
            decay_rate: 0.5,
            amplitude_cap: 1.0,
        }
    }
}

impl Spring {
    /// Creates a new spring at rest at the given pull position.
    pub fn new(
        pull_position: Position,
        equilibrium_position: Position,
        frequency: fph,
        decay_rate: fph,
        amplitude_cap: fph,
    ) -> Self {
        Self::from_parameters(SpringParameters::new(
            pull_position,
            equilibrium_position,
            frequency,
            decay_rate,
            amplitude_cap,
        ))
    }

    /// Creates a new spring at rest with the given parameters. The parameters
    /// are not validated.
    pub fn from_parameters(parameters: SpringParameters) -> Self {
        let mut spring = Self {
            parameters,
            elapsed_time: 0.0,
            position: parameters.pull_position,
            state: MotionState::AtRest,
        };
        spring.reset();
        spring
    }

    /// Returns the parameters of the spring.
    pub fn parameters(&self) -> &SpringParameters {
        &self.parameters
    }

    /// Returns the time accumulated over all advances since the spring was
    /// created or last reset.
    pub fn elapsed_time(&self) -> fph {
        self.elapsed_time
    }

    /// Returns the current position of the point.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns whether the spring is at rest or running.
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Whether the spring has not been advanced since it was created or last
    /// reset.
    pub fn is_at_rest(&self) -> bool {
        self.state == MotionState::AtRest
    }

    /// Restarts the motion from time zero, placing the point back at the pull
    /// position.
    pub fn reset(&mut self) {
        self.elapsed_time = 0.0;
        self.position = self.parameters.pull_position;
        self.state = MotionState::AtRest;

        log::debug!(
            "Reset spring to pull position {{{:.3}, {:.3}, {:.3}}}",
            self.position.x,
            self.position.y,
            self.position.z
        );
    }

    /// Advances the motion by the given time delta and recomputes the
    /// position for the new elapsed time.
    ///
    /// The position is recomputed even for a zero delta. Negative deltas move
    /// the elapsed time backward.
    pub fn advance(&mut self, delta_time: fph) {
        self.elapsed_time += delta_time;
        self.position = self.parameters.compute_position(self.elapsed_time);
        self.state = MotionState::Running;

        log::trace!(
            "Spring at time {:.4} has position {{{:.3}, {:.3}, {:.3}}}",
            self.elapsed_time,
            self.position.x,
            self.position.y,
            self.position.z
        );
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::from_parameters(SpringParameters::default())
    }
}

fn nan_propagating_min(a: fph, b: fph) -> fph {
    if a.is_nan() || b.is_nan() {
        fph::NAN
    } else {
        fph::min(a, b)
    }
}
