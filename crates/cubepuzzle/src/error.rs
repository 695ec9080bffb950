use cubemath::{Axis, Float, Vector};
use thiserror::Error;

use crate::{Face, ParseMoveError, STATE_LEN};

/// Error produced when building or turning a cube.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CubeError {
    /// State string has the wrong number of colors.
    #[error("cube state must have {STATE_LEN} colors, got {len}")]
    WrongStateLength {
        /// Number of characters in the rejected state.
        len: usize,
    },
    /// Move notation could not be parsed.
    #[error(transparent)]
    Notation(#[from] ParseMoveError),
    /// Orientation could not be applied.
    #[error(transparent)]
    Orientation(#[from] OrientationError),
    /// Rotation did not carry a face label onto another face label.
    ///
    /// This only happens for angles that are not a multiple of a quarter
    /// turn.
    #[error("rotating by {angle} radians about the {axis} axis leaves the lattice")]
    OffLattice {
        /// Axis of the rejected rotation.
        axis: Axis,
        /// Angle of the rejected rotation, in radians.
        angle: Float,
    },
}

/// Error produced by the orientation algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    /// Orientation names no faces.
    #[error("orientation must name at least one face")]
    Empty,
    /// Orientation names more than two faces.
    #[error("orientation names {0} faces; at most two are allowed")]
    TooManyFaces(usize),
    /// Orientation does not pin down a unique holding of the cube.
    #[error("orientation is ambiguous; it must place one of up, right, down, or left")]
    Ambiguous,
    /// Two faces of an orientation lie on the same axis.
    #[error("{0} and {1} lie on the same axis")]
    Degenerate(Face, Face),
    /// Turning `face` can never move `other`, because it lies on the same
    /// axis.
    #[error("turning {face} cannot move {other}")]
    RotationAlongAxis {
        /// Face being turned.
        face: Face,
        /// Face on the same axis.
        other: Face,
    },
    /// Vector is not the normal of any face.
    #[error("{0} is not a face normal")]
    NotAFace(Vector),
    /// Unknown face name.
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    /// Malformed orientation text.
    #[error("expected `target=origin`, got {0:?}")]
    Syntax(String),
}
