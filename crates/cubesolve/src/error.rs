use cubepuzzle::{CubeError, Face, OrientationError};
use thiserror::Error;

/// Error produced while solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Moves could not be applied to the cube.
    #[error(transparent)]
    Cube(#[from] CubeError),
    /// Relative direction or turn could not be computed.
    #[error(transparent)]
    Orientation(#[from] OrientationError),
    /// Cube has no middle on a face.
    #[error("no middle on {0}")]
    MissingMiddle(Face),
    /// No middle shows a color that appears on a piece.
    #[error("no middle shows color {0:?}")]
    UnknownColor(char),
    /// Piece does not have the colors the phase expects.
    #[error("piece with colors {0:?} cannot be solved in this phase")]
    InvalidPiece(String),
    /// Piece did not reach its slot.
    #[error("piece with colors {0:?} did not reach its slot")]
    Stuck(String),
}
