//! 3x3x3 cube model: cubies on an integer lattice, move notation, and the
//! algebra for re-expressing moves under a different way of holding the
//! cube.
//!
//! ```
//! use cubepuzzle::{Cube, MoveOptions};
//!
//! let mut cube = Cube::from_moves("R U R' U'").unwrap();
//! cube.apply_notation("R U R' U'", &MoveOptions::default().reversed())
//!     .unwrap();
//! assert!(cube.is_solved());
//! ```

pub use cubemath;

mod cube;
mod cubie;
mod error;
mod face;
pub mod notation;
pub mod orientation;
pub mod scramble;

pub use cube::{Cube, SOLVED_STATE, STATE_LEN};
pub use cubie::{Cubie, CubieKind};
pub use error::{CubeError, OrientationError};
pub use face::Face;
pub use notation::{Move, MoveSequence, ParseMoveError, ParseMoveErrorKind, Slab, Slice};
pub use orientation::{
    MoveOptions, Orientation, direction_from_faces, face_from_direction, orient_moves,
    rotation_from_to, transform_moves,
};
