//! Solving phases for the 3x3x3 cube.
//!
//! Each phase moves a few pieces at a time into place and records what it
//! did as a list of [`Partition`]s.

mod cross;
mod error;
mod recorder;
#[cfg(test)]
mod tests;

pub use cross::{CrossCase, CrossSolver};
pub use error::SolveError;
pub use recorder::{Partition, Recorder};
