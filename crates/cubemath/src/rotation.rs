use std::fmt;

use crate::{Axis, Float, QUARTER_TURN, Vector};

/// Returns the number of quarter turns closest to `angle`.
pub fn quarter_turns(angle: Float) -> i32 {
    // Angles are bounded by a full turn, so the cast cannot saturate.
    (angle / QUARTER_TURN).round() as i32
}

/// Rotation about a principal axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    /// Axis of rotation.
    pub axis: Axis,
    /// Angle in radians, counterclockwise when looking down the axis from
    /// its positive end.
    pub angle: Float,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.quarter_turns())
    }
}

impl Rotation {
    /// Constructs a rotation by `angle` radians about `axis`.
    pub const fn new(axis: Axis, angle: Float) -> Self {
        Self { axis, angle }
    }

    /// Constructs a rotation by a whole number of quarter turns about `axis`.
    pub fn from_quarter_turns(axis: Axis, turns: i32) -> Self {
        Self::new(axis, Float::from(turns) * QUARTER_TURN)
    }

    /// Returns a rotation that carries `n1` onto `n2`.
    ///
    /// The axis is the one along `n1 × n2`. When `n1` and `n2` are parallel
    /// or antiparallel, the cross product vanishes and the axis is instead
    /// the first of X, Y, and Z that `n1` does not lie along.
    pub fn from_normals(n1: Vector, n2: Vector) -> Self {
        let axis = n1.cross_product(n2).axis().unwrap_or_else(|| {
            let own_axis = n1.axis();
            Axis::ALL
                .into_iter()
                .find(|&axis| Some(axis) != own_axis)
                .unwrap_or(Axis::X)
        });
        Self::new(axis, Vector::signed_angle(n1, n2))
    }

    /// Returns the inverse rotation.
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::new(self.axis, -self.angle)
    }

    /// Returns the angle as a whole number of quarter turns.
    pub fn quarter_turns(self) -> i32 {
        quarter_turns(self.angle)
    }

    /// Returns whether the rotation is a half turn in either direction.
    pub fn is_half_turn(self) -> bool {
        self.quarter_turns().abs() == 2
    }

    /// Applies the rotation to a vector.
    pub fn apply(self, v: Vector) -> Vector {
        v.rotated(self.axis, self.angle)
    }
}
