use std::fmt;
use std::ops::{Index, Neg};
use std::str::FromStr;

use crate::{Axis, EPSILON, Float};

/// Constructs a vector from three integer components.
#[macro_export]
macro_rules! vector {
    [$x:expr, $y:expr, $z:expr $(,)?] => {
        $crate::Vector::from_ints([$x, $y, $z])
    };
}

/// Vector on the integer lattice.
///
/// Rotations are computed in floating point and rounded back to integers
/// immediately, so a vector never drifts off the lattice no matter how many
/// times it is rotated.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector(pub [i32; 3]);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

/// Error returned when parsing a [`Vector`] from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ParseVectorError {
    #[error("expected 3 components, got {0}")]
    WrongComponentCount(usize),
    #[error("invalid component {0:?}")]
    BadComponent(String),
    #[error("component {0:?} is not -1, 0, or 1")]
    OutOfRange(String),
}

impl FromStr for Vector {
    type Err = ParseVectorError;

    /// Parses space-separated components such as `"0 -1 0"`. The
    /// parenthesized form produced by [`Display`](fmt::Display) is accepted
    /// too. Each component is rounded to the nearest integer, which must be
    /// -1, 0, or 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                let x = token
                    .parse::<Float>()
                    .map_err(|_| ParseVectorError::BadComponent(token.to_owned()))?;
                if (-1.0..=1.0).contains(&x.round()) {
                    Ok(x)
                } else {
                    Err(ParseVectorError::OutOfRange(token.to_owned()))
                }
            })
            .collect::<Result<Vec<Float>, _>>()?;
        match components[..] {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(ParseVectorError::WrongComponentCount(components.len())),
        }
    }
}

impl Index<Axis> for Vector {
    type Output = i32;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|c| -c))
    }
}

impl Vector {
    /// Zero vector.
    pub const ZERO: Self = Self([0; 3]);

    /// Constructs a vector from floating-point components, rounding each to
    /// the nearest integer.
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z].map(round_to_lattice))
    }

    /// Constructs a vector from integer components.
    pub const fn from_ints(components: [i32; 3]) -> Self {
        Self(components)
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, rhs: Self) -> i32 {
        std::iter::zip(self.0, rhs.0).map(|(a, b)| a * b).sum()
    }

    /// Returns the cross product of two vectors.
    pub fn cross_product(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Returns the Euclidean length of the vector.
    pub fn mag(self) -> Float {
        Float::from(self.dot(self)).sqrt()
    }

    /// Returns the axis the vector lies along, or `None` if it does not have
    /// exactly two zero components.
    pub fn axis(self) -> Option<Axis> {
        match self.0 {
            [x, 0, 0] if x != 0 => Some(Axis::X),
            [0, y, 0] if y != 0 => Some(Axis::Y),
            [0, 0, z] if z != 0 => Some(Axis::Z),
            _ => None,
        }
    }

    /// Returns the single nonzero component, or `None` if the vector does not
    /// lie along an axis.
    pub fn magnitude(self) -> Option<i32> {
        self.axis().map(|axis| self[axis])
    }

    /// Rotates the vector in place by `angle` radians about `axis`, using the
    /// right-hand rule, and rounds the result back onto the lattice.
    pub fn rotate(&mut self, axis: Axis, angle: Float) -> &mut Self {
        *self = self.rotated(axis, angle);
        self
    }

    /// Returns the vector rotated by `angle` radians about `axis`, using the
    /// right-hand rule, rounded back onto the lattice.
    #[must_use]
    pub fn rotated(self, axis: Axis, angle: Float) -> Self {
        let [x, y, z] = self.0.map(Float::from);
        let (s, c) = angle.sin_cos();
        match axis {
            Axis::X => Self::new(x, y * c - z * s, y * s + z * c),
            Axis::Y => Self::new(z * s + x * c, y, z * c - x * s),
            Axis::Z => Self::new(x * c - y * s, x * s + y * c, z),
        }
    }

    /// Returns the angle from `v1` to `v2` in radians.
    ///
    /// The sign is taken from the cross product when it lies along an axis;
    /// otherwise the angle is unsigned. Returns zero if either vector is zero.
    pub fn signed_angle(v1: Self, v2: Self) -> Float {
        let denominator = v1.mag() * v2.mag();
        if approx::abs_diff_eq!(denominator, 0.0, epsilon = EPSILON) {
            return 0.0;
        }
        let cos = (Float::from(v1.dot(v2)) / denominator).clamp(-1.0, 1.0);
        let angle = cos.acos();
        match v1.cross_product(v2).magnitude() {
            Some(m) if m < 0 => -angle,
            _ => angle,
        }
    }
}

fn round_to_lattice(x: Float) -> i32 {
    // Lattice coordinates are tiny, so the cast cannot saturate.
    x.round() as i32
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{QUARTER_TURN, assert_approx_eq};

    #[test]
    fn test_vector_rotate_corner() {
        let corner = vector![1, 1, 1];
        assert_eq!(corner.rotated(Axis::X, -QUARTER_TURN), vector![1, 1, -1]);
        assert_eq!(corner.rotated(Axis::Y, -QUARTER_TURN), vector![-1, 1, 1]);
        assert_eq!(corner.rotated(Axis::Z, -QUARTER_TURN), vector![1, -1, 1]);
    }

    #[test]
    fn test_vector_rotate_in_place() {
        let mut v = vector![0, 1, 0];
        v.rotate(Axis::X, QUARTER_TURN).rotate(Axis::X, QUARTER_TURN);
        assert_eq!(v, vector![0, -1, 0]);
    }

    #[test]
    fn test_vector_rotation_stays_exact() {
        let mut v = vector![1, 0, -1];
        for _ in 0..1000 {
            v.rotate(Axis::Y, QUARTER_TURN);
        }
        assert_eq!(v, vector![1, 0, -1]);
    }

    #[test]
    fn test_vector_axis_and_magnitude() {
        assert_eq!(vector![0, -1, 0].axis(), Some(Axis::Y));
        assert_eq!(vector![0, -1, 0].magnitude(), Some(-1));
        assert_eq!(vector![0, 0, 1].axis(), Some(Axis::Z));
        assert_eq!(vector![1, 1, 0].axis(), None);
        assert_eq!(vector![1, 1, 0].magnitude(), None);
        assert_eq!(Vector::ZERO.axis(), None);
    }

    #[test]
    fn test_vector_cross_product() {
        assert_eq!(
            vector![1, 0, 0].cross_product(vector![0, 1, 0]),
            vector![0, 0, 1],
        );
        assert_eq!(
            vector![0, 0, 1].cross_product(vector![1, 0, 0]),
            vector![0, 1, 0],
        );
    }

    #[test]
    fn test_vector_signed_angle() {
        let x = vector![1, 0, 0];
        let y = vector![0, 1, 0];
        assert_approx_eq!(Vector::signed_angle(x, y), QUARTER_TURN);
        assert_approx_eq!(Vector::signed_angle(y, x), -QUARTER_TURN);
        assert_approx_eq!(Vector::signed_angle(x, -x).abs(), 2.0 * QUARTER_TURN);
        assert_eq!(Vector::signed_angle(x, x), 0.0);
        assert_eq!(Vector::signed_angle(x, Vector::ZERO), 0.0);
    }

    #[test]
    fn test_vector_from_str() {
        assert_eq!("0 -1 0".parse(), Ok(vector![0, -1, 0]));
        assert_eq!(" 1  0 -1 ".parse(), Ok(vector![1, 0, -1]));
        assert_eq!("0.9999 0 -0.2".parse(), Ok(vector![1, 0, 0]));
        assert_eq!(vector![1, -1, 1].to_string().parse(), Ok(vector![1, -1, 1]));
        assert_eq!(
            "1 2".parse::<Vector>(),
            Err(ParseVectorError::WrongComponentCount(2)),
        );
        assert_eq!(
            "1 two 3".parse::<Vector>(),
            Err(ParseVectorError::BadComponent("two".to_owned())),
        );
    }

    #[test]
    fn test_vector_from_str_rejects_off_cube_components() {
        assert_eq!(
            "1e10 0 0".parse::<Vector>(),
            Err(ParseVectorError::OutOfRange("1e10".to_owned())),
        );
        assert_eq!(
            "0 -2 0".parse::<Vector>(),
            Err(ParseVectorError::OutOfRange("-2".to_owned())),
        );
        assert_eq!("1.4 -1.4 0".parse(), Ok(vector![1, -1, 0]));
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(vector![0, -1, 0].to_string(), "(0, -1, 0)");
    }
}
