//! Numbers and numerics.

use num_traits as nt;

/// Gathers traits and constants useful for working with generic floating
/// point types.
pub trait Float: nt::Float {
    const ZERO: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod test {
    use super::*;

    fn full_turn<F: Float>() -> F {
        F::TWO_PI
    }

    #[test]
    fn two_pi_should_be_twice_pi() {
        assert_eq!(full_turn::<f64>(), 2.0 * f64::PI);
        assert_eq!(full_turn::<f32>(), 2.0 * f32::PI);
        assert_eq!(f64::FRAC_PI_2 * 4.0, f64::TWO_PI);
    }
}
