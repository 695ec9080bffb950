//! Exact integer-lattice vectors and principal-axis rotations.
//!
//! Every rotation is computed with ordinary floating-point trigonometry and
//! then rounded back onto the integer lattice, so repeated rotations never
//! accumulate error.

pub use {approx, log, strum};

/// Floating-point type used for angles.
pub type Float = f64;

/// Angle of a quarter turn, in radians.
pub const QUARTER_TURN: Float = std::f64::consts::FRAC_PI_2;

/// Tolerance for floating-point comparisons.
pub const EPSILON: Float = 0.000001;

/// Asserts that both arguments are approximately equal.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

/// Panics in debug builds and logs an error in release builds.
///
/// Use this for states that can only be reached through a bug.
#[macro_export]
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => $crate::log::error!($($tok)*),
        }
    };
}

mod axis;
#[macro_use]
mod vector;
mod rotation;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::rotation::{Rotation, quarter_turns};
    pub use crate::vector::*;
    pub use crate::{EPSILON, Float, QUARTER_TURN, vector};
}
pub use prelude::*;
