//! The six face labels of the cube.

use cubemath::{Axis, Float, Rotation, Vector, vector};

/// Face of the cube, identified by its outward normal.
///
/// The declaration order is the order in which faces appear in a state
/// string.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Face {
    /// Face toward the viewer, +Z.
    Front,
    /// +X.
    Right,
    /// +Y.
    Up,
    /// -Y.
    Down,
    /// -X.
    Left,
    /// Face away from the viewer, -Z.
    Back,
}

const NORMALS: [Vector; 6] = [
    vector![0, 0, 1],
    vector![1, 0, 0],
    vector![0, 1, 0],
    vector![0, -1, 0],
    vector![-1, 0, 0],
    vector![0, 0, -1],
];

const LETTERS: [char; 6] = ['f', 'r', 'u', 'd', 'l', 'b'];

impl Face {
    /// All faces, in state-string order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector {
        NORMALS[self as usize]
    }

    /// Returns the face whose normal is `normal`, or `None` if `normal` is
    /// not a unit vector along an axis.
    pub fn from_normal(normal: Vector) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.normal() == normal)
    }

    /// Returns the axis of the face's normal.
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Returns `1` if the normal points along the positive end of its axis
    /// and `-1` otherwise.
    pub fn sign(self) -> i32 {
        self.normal()[self.axis()]
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Back => Face::Front,
        }
    }

    /// Returns the lowercase letter used for the face in notation and in
    /// state strings.
    pub fn letter(self) -> char {
        LETTERS[self as usize]
    }

    /// Returns the face for a letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.letter() == c)
    }

    /// Returns whether the face is one of up, right, down, or left.
    pub fn is_lateral(self) -> bool {
        matches!(self, Face::Up | Face::Right | Face::Down | Face::Left)
    }

    /// Returns the rotation that re-holds the cube so that this face ends up
    /// where `target` is.
    pub fn rotation_to(self, target: Face) -> Rotation {
        Rotation::from_normals(self.normal(), target.normal())
    }

    /// Returns the label this face gets after re-holding the cube so that
    /// this face ends up where `target` is.
    pub fn oriented_to(self, target: Face) -> Option<Self> {
        self.rotated_by(self.rotation_to(target))
    }

    /// Returns the face this face is carried to by rotating the whole cube,
    /// or `None` if the rotation does not carry it onto a face.
    pub fn rotated(self, axis: Axis, angle: Float) -> Option<Self> {
        Self::from_normal(self.normal().rotated(axis, angle))
    }

    /// Returns the face this face is carried to by `rotation`.
    pub fn rotated_by(self, rotation: Rotation) -> Option<Self> {
        self.rotated(rotation.axis, rotation.angle)
    }
}
