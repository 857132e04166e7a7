//! Closed-form damped spring motion.
//!
//! A [`Spring`] moves a point back and forth around an equilibrium position,
//! starting from a pull position, with an amplitude that decays over time and
//! never exceeds a configured cap. The caller drives the motion by passing in
//! time deltas, and the position is always recomputed from the total elapsed
//! time.
//!
//! ```
//! use nalgebra::point;
//! use spring_motion::Spring;
//!
//! let mut spring = Spring::new(point![1.0, 0.0, 0.0], point![0.0, 0.0, 0.0], 1.0, 0.5, 10.0);
//! assert_eq!(spring.position(), point![1.0, 0.0, 0.0]);
//!
//! for _ in 0..60 {
//!     spring.advance(1.0 / 60.0);
//! }
//! assert!((spring.elapsed_time() - 1.0).abs() < 1e-9);
//!
//! spring.reset();
//! assert_eq!(spring.position(), point![1.0, 0.0, 0.0]);
//! ```

#[macro_use]
mod macros;

pub mod io;
mod num;
pub mod quantities;
pub mod sampling;
pub mod spring;

pub use spring::{MotionState, Spring, SpringParameters};

/// Floating point type used for spring motion.
#[allow(non_camel_case_types)]
pub type fph = f64;
