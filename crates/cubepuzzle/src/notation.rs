//! Move notation.
//!
//! A move is a face letter, optionally followed by `2` for a double turn and
//! then by `'` or `prime` for a counterclockwise turn:
//!
//! - `F R U D L B` turn one face;
//! - `f r u d l b` turn one face together with the middle slice next to it;
//! - `M E S` (either case) turn only a middle slice.
//!
//! `R2'` is a double turn in the counterclockwise direction. Moves are
//! written back out using `'`.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use cubemath::{Axis, Rotation, Vector};
use itertools::Itertools;
use thiserror::Error;

use crate::Face;

const PRIME_WORD: &str = "prime";

/// Error produced when parsing a [`Move`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move {token:?}: {kind}")]
pub struct ParseMoveError {
    /// Token that failed to parse.
    pub token: String,
    /// What was wrong with it.
    pub kind: ParseMoveErrorKind,
}

/// Reason a [`Move`] failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveErrorKind {
    /// Token was empty.
    #[error("empty move")]
    Empty,
    /// First character is not a face or slice letter.
    #[error("unknown face or slice {0:?}")]
    UnknownLetter(char),
    /// Characters after the letter are not a valid modifier.
    #[error("unknown modifier {0:?}")]
    BadModifier(String),
}

/// Middle slice between two opposite faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Slice between left and right, turning like left.
    M,
    /// Slice between up and down, turning like down.
    E,
    /// Slice between front and back, turning like front.
    S,
}

impl Slice {
    /// Returns the slice perpendicular to `axis`.
    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Slice::M,
            Axis::Y => Slice::E,
            Axis::Z => Slice::S,
        }
    }

    /// Returns the slice for a letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Slice::M),
            'E' => Some(Slice::E),
            'S' => Some(Slice::S),
            _ => None,
        }
    }

    /// Returns the uppercase letter for the slice.
    pub fn letter(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }

    /// Returns the axis the slice turns around.
    pub fn axis(self) -> Axis {
        match self {
            Slice::M => Axis::X,
            Slice::E => Axis::Y,
            Slice::S => Axis::Z,
        }
    }

    /// Returns the face whose clockwise direction the slice follows.
    pub fn reference_face(self) -> Face {
        match self {
            Slice::M => Face::Left,
            Slice::E => Face::Down,
            Slice::S => Face::Front,
        }
    }
}

/// Set of cubies turned together by a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slab {
    /// The nine cubies on one face.
    Face(Face),
    /// The cubies on one face plus the middle slice next to it.
    Wide(Face),
    /// The cubies in one middle slice.
    Slice(Slice),
}

impl Slab {
    /// Returns the axis the slab turns around.
    pub fn axis(self) -> Axis {
        match self {
            Slab::Face(face) | Slab::Wide(face) => face.axis(),
            Slab::Slice(slice) => slice.axis(),
        }
    }

    /// Returns the face whose clockwise direction the slab follows.
    pub fn reference_face(self) -> Face {
        match self {
            Slab::Face(face) | Slab::Wide(face) => face,
            Slab::Slice(slice) => slice.reference_face(),
        }
    }

    /// Returns whether a cubie at `position` is turned by the slab.
    pub fn contains(self, position: Vector) -> bool {
        let coord = position[self.axis()];
        match self {
            Slab::Face(face) => coord == face.sign(),
            Slab::Wide(face) => coord == face.sign() || coord == 0,
            Slab::Slice(_) => coord == 0,
        }
    }

    /// Returns the slab of the same kind that follows `face` instead,
    /// along with whether the turning direction flips.
    ///
    /// A slice follows a fixed face on its axis, so a slice that should
    /// follow the opposite face turns the other way.
    pub fn with_reference_face(self, face: Face) -> (Self, bool) {
        match self {
            Slab::Face(_) => (Slab::Face(face), false),
            Slab::Wide(_) => (Slab::Wide(face), false),
            Slab::Slice(_) => {
                let slice = Slice::from_axis(face.axis());
                (Slab::Slice(slice), face != slice.reference_face())
            }
        }
    }

    /// Returns the axis and direction of a clockwise quarter turn.
    fn base_turn(self) -> (Axis, i32) {
        match self.reference_face() {
            Face::Front => (Axis::Z, -1),
            Face::Right => (Axis::X, -1),
            Face::Up => (Axis::Y, -1),
            Face::Down => (Axis::Y, 1),
            Face::Left => (Axis::X, 1),
            Face::Back => (Axis::Z, 1),
        }
    }

    fn letter(self) -> char {
        match self {
            Slab::Face(face) => face.letter().to_ascii_uppercase(),
            Slab::Wide(face) => face.letter(),
            Slab::Slice(slice) => slice.letter(),
        }
    }
}

/// Single move, such as `R`, `u2`, or `M'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Cubies to turn.
    pub slab: Slab,
    /// Whether to turn twice.
    pub double: bool,
    /// Whether to turn counterclockwise.
    pub prime: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slab.letter())?;
        if self.double {
            write!(f, "2")?;
        }
        if self.prime {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let err = |kind| ParseMoveError {
            token: token.to_owned(),
            kind,
        };

        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(|| err(ParseMoveErrorKind::Empty))?;
        let slab = match Slice::from_letter(letter) {
            Some(slice) => Slab::Slice(slice),
            None => match Face::from_letter(letter) {
                Some(face) if letter.is_ascii_uppercase() => Slab::Face(face),
                Some(face) => Slab::Wide(face),
                None => return Err(err(ParseMoveErrorKind::UnknownLetter(letter))),
            },
        };

        let mut modifier = chars.as_str();
        let mut prime = false;
        if let Some(rest) = modifier.strip_suffix('\'') {
            (modifier, prime) = (rest, true);
        } else if let Some(rest) = strip_prime_word(modifier) {
            (modifier, prime) = (rest, true);
        }
        let double = match modifier {
            "" => false,
            "2" => true,
            other => return Err(err(ParseMoveErrorKind::BadModifier(other.to_owned()))),
        };

        Ok(Self {
            slab,
            double,
            prime,
        })
    }
}

fn strip_prime_word(s: &str) -> Option<&str> {
    let split = s.len().checked_sub(PRIME_WORD.len())?;
    let (rest, suffix) = (s.get(..split)?, s.get(split..)?);
    suffix.eq_ignore_ascii_case(PRIME_WORD).then_some(rest)
}

impl Move {
    /// Constructs a clockwise quarter turn of `slab`.
    pub const fn new(slab: Slab) -> Self {
        Self {
            slab,
            double: false,
            prime: false,
        }
    }

    /// Constructs a clockwise quarter turn of `face`.
    pub const fn face(face: Face) -> Self {
        Self::new(Slab::Face(face))
    }

    /// Constructs the move that turns `slab` by `turns` clockwise quarter
    /// turns, or `None` if that is a multiple of a full turn.
    pub fn from_quarter_turns(slab: Slab, turns: i32) -> Option<Self> {
        let m = Self::new(slab);
        match turns.rem_euclid(4) {
            0 => None,
            1 => Some(m),
            2 => Some(m.doubled()),
            _ => Some(m.inverse()),
        }
    }

    /// Returns the same move turned twice.
    #[must_use]
    pub fn doubled(self) -> Self {
        Self {
            double: true,
            ..self
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            prime: !self.prime,
            ..self
        }
    }

    /// Returns the signed number of clockwise quarter turns.
    pub fn quarter_turns(self) -> i32 {
        let turns = if self.double { 2 } else { 1 };
        if self.prime { -turns } else { turns }
    }

    /// Returns the rotation applied to every cubie in the slab.
    pub fn rotation(self) -> Rotation {
        let (axis, direction) = self.slab.base_turn();
        Rotation::from_quarter_turns(axis, direction * self.quarter_turns())
    }
}

/// Sequence of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence(pub Vec<Move>);

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    /// Parses whitespace-separated moves. Extra whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveSequence {
    /// Constructs an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the sequence that undoes this one: every move inverted, in
    /// reverse order.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Returns an equivalent sequence in which no two adjacent moves turn the
    /// same slab.
    ///
    /// Adjacent turns of the same slab are merged, and merged turns that add
    /// up to a whole rotation are removed, which may in turn expose more
    /// merges.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut merged: Vec<(Slab, i32)> = vec![];
        for m in &self.0 {
            let mut turns = m.quarter_turns();
            if let Some(&(slab, previous)) = merged.last()
                && slab == m.slab
            {
                merged.pop();
                turns += previous;
            }
            if turns.rem_euclid(4) != 0 {
                merged.push((m.slab, turns));
            }
        }
        merged
            .into_iter()
            .filter_map(|(slab, turns)| Move::from_quarter_turns(slab, turns))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seq(s: &str) -> MoveSequence {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_move() {
        let r = Move::face(Face::Right);
        assert_eq!("R".parse(), Ok(r));
        assert_eq!("R'".parse(), Ok(r.inverse()));
        assert_eq!("R2".parse(), Ok(r.doubled()));
        assert_eq!("R2'".parse(), Ok(r.doubled().inverse()));
        assert_eq!("Rprime".parse(), Ok(r.inverse()));
        assert_eq!("R2PRIME".parse(), Ok(r.doubled().inverse()));
        assert_eq!("r".parse(), Ok(Move::new(Slab::Wide(Face::Right))));
        assert_eq!("m'".parse(), Ok(Move::new(Slab::Slice(Slice::M)).inverse()));
        assert_eq!("E".parse(), Ok(Move::new(Slab::Slice(Slice::E))));
    }

    #[test]
    fn test_parse_move_errors() {
        let kind = |s: &str| s.parse::<Move>().unwrap_err().kind;
        assert_eq!(kind(""), ParseMoveErrorKind::Empty);
        assert_eq!(kind("X"), ParseMoveErrorKind::UnknownLetter('X'));
        assert_eq!(kind("R3"), ParseMoveErrorKind::BadModifier("3".to_owned()));
        assert_eq!(kind("R'2"), ParseMoveErrorKind::BadModifier("'2".to_owned()));
        assert_eq!(kind("Ré"), ParseMoveErrorKind::BadModifier("é".to_owned()));
    }

    #[test]
    fn test_move_display() {
        for s in ["F", "b'", "U2", "d2'", "M", "E'", "S2"] {
            assert_eq!(s.parse::<Move>().unwrap().to_string(), s);
        }
        assert_eq!("Uprime".parse::<Move>().unwrap().to_string(), "U'");
        assert_eq!("s".parse::<Move>().unwrap().to_string(), "S");
    }

    #[test]
    fn test_move_rotation_table() {
        let expected = [
            ("F", Axis::Z, -1),
            ("R", Axis::X, -1),
            ("U", Axis::Y, -1),
            ("D", Axis::Y, 1),
            ("L", Axis::X, 1),
            ("B", Axis::Z, 1),
            ("M", Axis::X, 1),
            ("E", Axis::Y, 1),
            ("S", Axis::Z, -1),
            ("R2", Axis::X, -2),
            ("L'", Axis::X, -1),
        ];
        for (s, axis, turns) in expected {
            let rotation = s.parse::<Move>().unwrap().rotation();
            assert_eq!((rotation.axis, rotation.quarter_turns()), (axis, turns), "{s}");
        }
    }

    #[test]
    fn test_slab_contains() {
        use cubemath::vector;

        let corner = vector![1, 1, 1];
        let edge = vector![0, 1, 1];
        assert!(Slab::Face(Face::Right).contains(corner));
        assert!(!Slab::Face(Face::Right).contains(edge));
        assert!(Slab::Wide(Face::Right).contains(edge));
        assert!(!Slab::Wide(Face::Left).contains(corner));
        assert!(Slab::Slice(Slice::M).contains(edge));
        assert!(!Slab::Slice(Slice::E).contains(edge));
    }

    #[test]
    fn test_sequence_parse_and_display() {
        assert_eq!(seq("  R   U'  f2 ").to_string(), "R U' f2");
        assert_eq!(seq(""), MoveSequence::new());
        assert!("R Q".parse::<MoveSequence>().is_err());
    }

    #[test]
    fn test_sequence_inverse() {
        assert_eq!(seq("R U2 M'").inverse(), seq("M U2' R'"));
    }

    #[test]
    fn test_simplify() {
        assert_eq!(seq("R R").simplified(), seq("R2"));
        assert_eq!(seq("R U U' R'").simplified(), seq(""));
        assert_eq!(seq("R2 R").simplified(), seq("R'"));
        assert_eq!(seq("R R' U").simplified(), seq("U"));
        assert_eq!(seq("R r").simplified(), seq("R r"));
        assert_eq!(seq("F2 F2' B").simplified(), seq("B"));
        assert_eq!(seq("L U2 U2 L").simplified(), seq("L2"));
    }
}
