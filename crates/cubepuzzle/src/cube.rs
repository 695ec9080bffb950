//! The whole cube.

use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, vector};
use itertools::{Itertools, iproduct};
use rand::Rng;

use crate::orientation::{MoveOptions, transform_moves};
use crate::{CubeError, Cubie, Face, Move, MoveSequence, scramble};

/// Number of colors in a state string.
pub const STATE_LEN: usize = 54;

/// State string of a solved cube.
pub const SOLVED_STATE: &str = "fffffffffrrrrrrrrruuuuuuuuudddddddddlllllllllbbbbbbbbb";

/// Order in which the nine cubies of a face are read, as seen from outside
/// the cube: rows first, then columns, each sorted ascending by the signed
/// coordinate.
#[derive(Debug, Copy, Clone)]
struct ReadingOrder {
    row: (Axis, i32),
    col: (Axis, i32),
}

const READING_ORDER: [ReadingOrder; 6] = [
    // front
    ReadingOrder {
        row: (Axis::Y, -1),
        col: (Axis::X, 1),
    },
    // right
    ReadingOrder {
        row: (Axis::Y, -1),
        col: (Axis::Z, -1),
    },
    // up
    ReadingOrder {
        row: (Axis::Z, 1),
        col: (Axis::X, 1),
    },
    // down
    ReadingOrder {
        row: (Axis::Z, -1),
        col: (Axis::X, 1),
    },
    // left
    ReadingOrder {
        row: (Axis::Y, -1),
        col: (Axis::Z, 1),
    },
    // back
    ReadingOrder {
        row: (Axis::Y, -1),
        col: (Axis::X, -1),
    },
];

/// 3x3x3 cube made of 26 cubies.
///
/// Each cubie keeps its index in [`Cube::cubies()`] for the lifetime of the
/// cube, so an index identifies a physical piece no matter where it moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    cubies: Vec<Cubie>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Cube {
    /// Writes the state string: each face in turn, each in reading order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in Face::ALL {
            for cubie in self.face(face) {
                let Some(color) = cubie.color_of(face) else {
                    cubemath::debug_panic!("cubie at {} has no {face} color", cubie.position());
                    return Err(fmt::Error);
                };
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Cube {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Cube {
    /// Constructs a cube from a 54-character state string.
    ///
    /// The string lists the colors of the front, right, up, down, left, and
    /// back faces in that order, nine colors each, in reading order.
    pub fn new(state: &str) -> Result<Self, CubeError> {
        let colors = state.chars().collect_vec();
        if colors.len() != STATE_LEN {
            return Err(CubeError::WrongStateLength { len: colors.len() });
        }

        let mut cube = Self::unpainted();
        for (face, face_colors) in std::iter::zip(Face::ALL, colors.chunks_exact(9)) {
            for (i, &color) in std::iter::zip(cube.face_indices(face), face_colors) {
                cube.cubies[i].color_face(face, color);
            }
        }
        Ok(cube)
    }

    /// Constructs a solved cube.
    pub fn solved() -> Self {
        let mut cubies = Self::unpainted().cubies;
        for cubie in &mut cubies {
            let p = cubie.position();
            for face in Face::ALL {
                if p[face.axis()] == face.sign() {
                    cubie.color_face(face, face.letter());
                }
            }
        }
        Self { cubies }
    }

    /// Constructs a solved cube and applies `notations` to it.
    pub fn from_moves(notations: &str) -> Result<Self, CubeError> {
        let mut cube = Self::solved();
        cube.apply_notation(notations, &MoveOptions::default())?;
        Ok(cube)
    }

    /// Constructs a cube scrambled with the default scramble length.
    pub fn scrambled(rng: &mut impl Rng) -> Result<Self, CubeError> {
        Self::scrambled_with_length(scramble::SCRAMBLE_LENGTH, rng)
    }

    /// Constructs a cube scrambled with `length` random moves.
    pub fn scrambled_with_length(length: usize, rng: &mut impl Rng) -> Result<Self, CubeError> {
        let moves = scramble::random_moves(length, rng);
        let mut cube = Self::solved();
        cube.apply_moves(&moves, &MoveOptions::default())?;
        Ok(cube)
    }

    fn unpainted() -> Self {
        let cubies = iproduct!(-1..=1, -1..=1, -1..=1)
            .filter(|&p| p != (0, 0, 0))
            .map(|(x, y, z)| Cubie::new(vector![x, y, z], []))
            .collect();
        Self { cubies }
    }

    /// Returns the indices of the cubies on `face`, in reading order.
    fn face_indices(&self, face: Face) -> Vec<usize> {
        let ReadingOrder { row, col } = READING_ORDER[face as usize];
        self.cubies
            .iter()
            .positions(|c| c.position()[face.axis()] == face.sign())
            .sorted_by_key(|&i| {
                let p = self.cubies[i].position();
                (p[row.0] * row.1, p[col.0] * col.1)
            })
            .collect()
    }

    /// Returns the nine cubies on `face`, in reading order.
    pub fn face(&self, face: Face) -> Vec<&Cubie> {
        self.face_indices(face)
            .into_iter()
            .map(|i| &self.cubies[i])
            .collect()
    }

    /// Returns the colors of the nine stickers on `face`, in reading order.
    pub fn face_colors(&self, face: Face) -> String {
        self.face(face)
            .into_iter()
            .filter_map(|c| c.color_of(face))
            .collect()
    }

    /// Returns all cubies. Each index refers to the same piece for the
    /// lifetime of the cube.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie that occupies exactly `faces`.
    pub fn cubie(&self, faces: &[Face]) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.occupies(faces))
    }

    /// Returns the 8 corners.
    pub fn corners(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter().filter(|c| c.is_corner())
    }

    /// Returns the 12 edges.
    pub fn edges(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter().filter(|c| c.is_edge())
    }

    /// Returns the 6 middles.
    pub fn middles(&self) -> impl Iterator<Item = &Cubie> {
        self.cubies.iter().filter(|c| c.is_middle())
    }

    /// Returns the face whose middle shows `color`.
    pub fn middle_of_color(&self, color: char) -> Option<Face> {
        self.middles()
            .find(|c| c.has_color(color))
            .and_then(|c| c.faces().next())
    }

    /// Returns whether every face shows a single color, matching
    /// [`SOLVED_STATE`].
    pub fn is_solved(&self) -> bool {
        self.to_string() == SOLVED_STATE
    }

    /// Applies a single move.
    pub fn apply_move(&mut self, m: Move) -> Result<(), CubeError> {
        log::trace!("applying move {m}");
        let rotation = m.rotation();
        for cubie in &mut self.cubies {
            if m.slab.contains(cubie.position()) {
                cubie.rotate(rotation.axis, rotation.angle)?;
            }
        }
        Ok(())
    }

    /// Applies a sequence of moves after transforming it according to
    /// `options`, and returns the moves that were actually applied.
    pub fn apply_moves(
        &mut self,
        moves: &[Move],
        options: &MoveOptions,
    ) -> Result<MoveSequence, CubeError> {
        let moves = transform_moves(moves, options)?;
        for &m in moves.iter() {
            self.apply_move(m)?;
        }
        Ok(moves)
    }

    /// Parses whitespace-separated moves and applies them according to
    /// `options`. Nothing is applied if any move fails to parse.
    pub fn apply_notation(
        &mut self,
        notations: &str,
        options: &MoveOptions,
    ) -> Result<MoveSequence, CubeError> {
        let moves: MoveSequence = notations.parse()?;
        self.apply_moves(&moves, options)
    }
}
