//! Individual pieces of the cube.

use cubemath::{Axis, Float, Vector};
use smallvec::SmallVec;

use crate::{CubeError, Face};

/// Map from the faces a cubie occupies to the colors painted on them, kept
/// sorted by face.
type ColorMap = SmallVec<[(Face, char); 3]>;

/// Kind of cubie, determined by how many faces it occupies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CubieKind {
    /// Cubie on three faces.
    Corner,
    /// Cubie on two faces.
    Edge,
    /// Cubie on one face.
    Middle,
}

/// One of the 26 visible pieces of the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    position: Vector,
    colors: ColorMap,
}

impl Cubie {
    /// Constructs a cubie at `position` with the given colors.
    pub fn new(position: Vector, colors: impl IntoIterator<Item = (Face, char)>) -> Self {
        let mut ret = Self {
            position,
            colors: ColorMap::new(),
        };
        for (face, color) in colors {
            ret.color_face(face, color);
        }
        ret
    }

    /// Constructs a cubie in its home position on `faces`, painted with each
    /// face's letter.
    pub fn from_faces(faces: &[Face]) -> Self {
        let position = faces.iter().fold(Vector::ZERO, |mut acc, face| {
            acc.0[face.axis().index()] += face.sign();
            acc
        });
        Self::new(position, faces.iter().map(|&f| (f, f.letter())))
    }

    /// Returns the lattice position of the cubie.
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Returns the kind of cubie, or `None` if it has no colors yet.
    pub fn kind(&self) -> Option<CubieKind> {
        match self.colors.len() {
            1 => Some(CubieKind::Middle),
            2 => Some(CubieKind::Edge),
            3 => Some(CubieKind::Corner),
            _ => None,
        }
    }
    /// Returns whether the cubie is a corner.
    pub fn is_corner(&self) -> bool {
        self.kind() == Some(CubieKind::Corner)
    }
    /// Returns whether the cubie is an edge.
    pub fn is_edge(&self) -> bool {
        self.kind() == Some(CubieKind::Edge)
    }
    /// Returns whether the cubie is a middle.
    pub fn is_middle(&self) -> bool {
        self.kind() == Some(CubieKind::Middle)
    }

    /// Paints `face` with `color`, replacing any color already there.
    pub fn color_face(&mut self, face: Face, color: char) -> &mut Self {
        match self.colors.binary_search_by_key(&face, |&(f, _)| f) {
            Ok(i) => self.colors[i].1 = color,
            Err(i) => self.colors.insert(i, (face, color)),
        }
        self
    }

    /// Returns the color on `face`, or `None` if the cubie is not on it.
    pub fn color_of(&self, face: Face) -> Option<char> {
        self.colors.iter().find(|&&(f, _)| f == face).map(|&(_, c)| c)
    }

    /// Returns the face showing `color`, or `None` if the cubie does not have
    /// it.
    pub fn face_of(&self, color: char) -> Option<Face> {
        self.colors.iter().find(|&&(_, c)| c == color).map(|&(f, _)| f)
    }

    /// Returns whether the cubie is on `face`.
    pub fn has_face(&self, face: Face) -> bool {
        self.color_of(face).is_some()
    }

    /// Returns whether the cubie shows `color`.
    pub fn has_color(&self, color: char) -> bool {
        self.face_of(color).is_some()
    }

    /// Returns whether the cubie occupies exactly `faces`, in any order.
    pub fn occupies(&self, faces: &[Face]) -> bool {
        self.colors.len() == faces.len() && faces.iter().all(|&f| self.has_face(f))
    }

    /// Returns the faces the cubie occupies.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.colors.iter().map(|&(f, _)| f)
    }

    /// Returns the colors of the cubie.
    pub fn colors(&self) -> impl Iterator<Item = char> + '_ {
        self.colors.iter().map(|&(_, c)| c)
    }

    /// Rotates the cubie by `angle` radians about `axis`, moving it to a new
    /// position and relabeling every face it occupies.
    ///
    /// If the rotation does not carry every face onto another face, the cubie
    /// is left unchanged and an error is returned.
    pub fn rotate(&mut self, axis: Axis, angle: Float) -> Result<(), CubeError> {
        let mut colors = ColorMap::new();
        for &(face, color) in &self.colors {
            let new_face = face
                .rotated(axis, angle)
                .ok_or(CubeError::OffLattice { axis, angle })?;
            colors.push((new_face, color));
        }
        colors.sort_unstable_by_key(|&(f, _)| f);

        self.position.rotate(axis, angle);
        self.colors = colors;
        Ok(())
    }
}
