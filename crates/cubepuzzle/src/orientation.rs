//! Re-expressing moves and directions for a different way of holding the
//! cube.
//!
//! An [`Orientation`] says which face label ends up where: the pair
//! `(Face::Down, Face::Right)` means "hold the cube so that the face
//! currently labeled right is at the bottom". The functions in this module
//! use it to translate moves and relative directions between the two
//! holdings.

use std::fmt;
use std::str::FromStr;

use cubemath::{Axis, Rotation, Vector, quarter_turns};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Face, Move, MoveSequence, OrientationError};

/// Way of holding the cube, given as one or two `(target, origin)` pairs.
///
/// At least one target must be up, right, down, or left; that pair fixes the
/// rotation around the front-back axis. The two pairs may not share a target
/// axis or an origin axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orientation {
    pairs: SmallVec<[(Face, Face); 2]>,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(target, origin)| format!("{target}={origin}"));
        write!(f, "{}", pairs.format(", "))
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    /// Parses pairs such as `"front=back, down=right"`. Either `=` or `:` may
    /// separate a target from its origin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_face = |name: &str| {
            let name = name.trim();
            name.parse::<Face>()
                .map_err(|_| OrientationError::UnknownFace(name.to_owned()))
        };
        let pairs = s
            .split(',')
            .filter(|pair| !pair.trim().is_empty())
            .map(|pair| {
                let (target, origin) = pair
                    .split_once(['=', ':'])
                    .ok_or_else(|| OrientationError::Syntax(pair.trim().to_owned()))?;
                Ok((parse_face(target)?, parse_face(origin)?))
            })
            .collect::<Result<Vec<_>, OrientationError>>()?;
        Self::new(pairs)
    }
}

impl Orientation {
    /// Constructs an orientation from `(target, origin)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (Face, Face)>) -> Result<Self, OrientationError> {
        let pairs: SmallVec<[(Face, Face); 2]> = pairs.into_iter().collect();
        match pairs.len() {
            0 => return Err(OrientationError::Empty),
            1 | 2 => (),
            n => return Err(OrientationError::TooManyFaces(n)),
        }
        if !pairs.iter().any(|(target, _)| target.is_lateral()) {
            return Err(OrientationError::Ambiguous);
        }
        if let [(t0, o0), (t1, o1)] = pairs[..] {
            if t0.axis() == t1.axis() {
                return Err(OrientationError::Degenerate(t0, t1));
            }
            if o0.axis() == o1.axis() {
                return Err(OrientationError::Degenerate(o0, o1));
            }
        }
        Ok(Self { pairs })
    }

    /// Returns the orientation that keeps every face where it is.
    pub fn upright() -> Self {
        Self {
            pairs: smallvec::smallvec![(Face::Up, Face::Up)],
        }
    }

    /// Returns the `(target, origin)` pairs.
    pub fn pairs(&self) -> &[(Face, Face)] {
        &self.pairs
    }

    /// Returns the orientation that undoes this one.
    ///
    /// Fails if swapping the pairs leaves no lateral target, which happens
    /// for a single pair whose origin is front or back.
    pub fn inverse(&self) -> Result<Self, OrientationError> {
        Self::new(self.pairs.iter().map(|&(t, o)| (o, t)))
    }

    /// Returns the whole-cube rotations that carry every origin onto its
    /// target.
    fn rotations(&self) -> Result<[Rotation; 2], OrientationError> {
        let [(t0, o0), (t1, o1)] = self.pairs[..] else {
            return Err(OrientationError::Ambiguous);
        };
        let r1 = o0.rotation_to(t0);
        let r2 = rotation_onto(r1.apply(o1.normal()), t1, t0.axis());
        Ok([r1, r2])
    }

    /// Returns the whole-cube rotations that carry `origin` onto the front
    /// and then the lateral origin onto its target.
    ///
    /// If the lateral origin lies on `origin`'s axis, the second rotation
    /// moves the front too.
    fn rotations_from_front(&self, origin: Face) -> Result<[Rotation; 2], OrientationError> {
        let &(target, lateral) = self
            .pairs
            .iter()
            .find(|(target, _)| target.is_lateral())
            .ok_or(OrientationError::Ambiguous)?;
        let r1 = origin.rotation_to(Face::Front);
        let r2 = rotation_onto(r1.apply(lateral.normal()), target, Axis::Z);
        Ok([r1, r2])
    }
}

/// Returns the rotation carrying `normal` onto `target`, using
/// `half_turn_axis` for half turns.
fn rotation_onto(normal: Vector, target: Face, half_turn_axis: Axis) -> Rotation {
    let mut rotation = Rotation::from_normals(normal, target.normal());
    if rotation.is_half_turn() {
        rotation.axis = half_turn_axis;
    }
    rotation
}

fn apply_all(v: Vector, rotations: &[Rotation]) -> Vector {
    rotations.iter().fold(v, |v, r| r.apply(v))
}

fn inverse_of(rotations: [Rotation; 2]) -> [Rotation; 2] {
    let [r1, r2] = rotations;
    [r2.reverse(), r1.reverse()]
}

fn face_at(v: Vector) -> Result<Face, OrientationError> {
    Face::from_normal(v).ok_or(OrientationError::NotAFace(v))
}

/// Returns the direction of `target` as seen from `origin` when the cube is
/// held according to `orientation`.
///
/// For example, with up kept up, the right face is to the right of the front
/// face and the back face is behind it.
pub fn direction_from_faces(
    origin: Face,
    target: Face,
    orientation: &Orientation,
) -> Result<Face, OrientationError> {
    let rotations = orientation.rotations_from_front(origin)?;
    face_at(apply_all(target.normal(), &rotations))
}

/// Returns the face in `direction` as seen from `origin` when the cube is
/// held according to `orientation`.
///
/// This is the inverse of [`direction_from_faces()`].
pub fn face_from_direction(
    origin: Face,
    direction: Face,
    orientation: &Orientation,
) -> Result<Face, OrientationError> {
    let rotations = orientation.rotations_from_front(origin)?;
    let front = apply_all(origin.normal(), &rotations);
    let pointed = Rotation::from_normals(front, direction.normal()).apply(front);
    face_at(apply_all(pointed, &inverse_of(rotations)))
}

/// Returns the turn of `face` that carries the edge position next to `from`
/// onto the one next to `to`, or `None` if they are the same.
///
/// Returns an error if `from` or `to` lies on `face`'s axis.
pub fn rotation_from_to(face: Face, from: Face, to: Face) -> Result<Option<Move>, OrientationError> {
    for other in [from, to] {
        if other.axis() == face.axis() {
            return Err(OrientationError::RotationAlongAxis { face, other });
        }
    }
    let turns = quarter_turns(Vector::signed_angle(from.normal(), to.normal())) * face.sign();
    let m = Move::face(face);
    Ok(match turns {
        0 => None,
        2 | -2 => Some(m.doubled()),
        t if t < 0 => Some(m),
        _ => Some(m.inverse()),
    })
}

/// Rewrites `moves` so that applying them to a cube held according to
/// `orientation` has the same effect as applying the original moves to the
/// cube held normally.
///
/// Both pairs of the orientation are required.
pub fn orient_moves(
    moves: &[Move],
    orientation: &Orientation,
) -> Result<MoveSequence, OrientationError> {
    let inverse = inverse_of(orientation.rotations()?);
    moves
        .iter()
        .map(|&m| {
            let face = face_at(apply_all(m.slab.reference_face().normal(), &inverse))?;
            let (slab, flip) = m.slab.with_reference_face(face);
            Ok(Move {
                slab,
                prime: m.prime != flip,
                ..m
            })
        })
        .collect()
}

/// Options controlling how a move sequence is applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveOptions {
    /// Orientation to re-express the moves for before applying them.
    pub orientation: Option<Orientation>,
    /// Whether to apply the inverse sequence instead.
    pub reverse: bool,
}

impl MoveOptions {
    /// Returns the options with `orientation` set.
    #[must_use]
    pub fn oriented(self, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..self
        }
    }

    /// Returns the options with `reverse` set.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            reverse: true,
            ..self
        }
    }
}

/// Applies `options` to a move sequence: first the orientation, then the
/// reversal.
pub fn transform_moves(
    moves: &[Move],
    options: &MoveOptions,
) -> Result<MoveSequence, OrientationError> {
    let moves = match &options.orientation {
        Some(orientation) => orient_moves(moves, orientation)?,
        None => MoveSequence(moves.to_vec()),
    };
    Ok(match options.reverse {
        true => moves.inverse(),
        false => moves,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use Face::*;

    fn orientation(pairs: &[(Face, Face)]) -> Orientation {
        Orientation::new(pairs.iter().copied()).unwrap()
    }

    fn orient(moves: &str, pairs: &[(Face, Face)]) -> String {
        let moves: MoveSequence = moves.parse().unwrap();
        orient_moves(&moves, &orientation(pairs))
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_orientation_validation() {
        assert_eq!(Orientation::new([]), Err(OrientationError::Empty));
        assert_eq!(
            Orientation::new([(Front, Back)]),
            Err(OrientationError::Ambiguous),
        );
        assert_eq!(
            Orientation::new([(Front, Front), (Back, Back)]),
            Err(OrientationError::Ambiguous),
        );
        assert_eq!(
            Orientation::new([(Up, Up), (Down, Front)]),
            Err(OrientationError::Degenerate(Up, Down)),
        );
        assert_eq!(
            Orientation::new([(Up, Left), (Front, Right)]),
            Err(OrientationError::Degenerate(Left, Right)),
        );
        assert_eq!(
            Orientation::new([(Up, Up), (Front, Front), (Right, Right)]),
            Err(OrientationError::TooManyFaces(3)),
        );
    }

    #[test]
    fn test_orientation_text() {
        let o: Orientation = "front=back, Down:right".parse().unwrap();
        assert_eq!(o.pairs(), &[(Front, Back), (Down, Right)]);
        assert_eq!(o.to_string(), "front=back, down=right");
        assert_eq!(
            "front".parse::<Orientation>(),
            Err(OrientationError::Syntax("front".to_owned())),
        );
        assert_eq!(
            "top=up".parse::<Orientation>(),
            Err(OrientationError::UnknownFace("top".to_owned())),
        );
        assert_eq!("".parse::<Orientation>(), Err(OrientationError::Empty));
    }

    #[test]
    fn test_direction_from_faces() {
        let upright = Orientation::upright();
        assert_eq!(direction_from_faces(Front, Right, &upright), Ok(Right));
        assert_eq!(direction_from_faces(Front, Back, &upright), Ok(Back));
        assert_eq!(direction_from_faces(Front, Left, &upright), Ok(Left));
        assert_eq!(
            direction_from_faces(Back, Up, &orientation(&[(Down, Right)])),
            Ok(Left),
        );
        assert_eq!(
            direction_from_faces(Left, Down, &orientation(&[(Up, Back)])),
            Ok(Left),
        );
    }

    #[test]
    fn test_direction_from_lateral_axis() {
        // The origin lies on the axis of the lateral face.
        let upright = Orientation::upright();
        assert_eq!(direction_from_faces(Up, Front, &upright), Ok(Front));
        assert_eq!(face_from_direction(Up, Front, &upright), Ok(Front));

        let sideways = orientation(&[(Front, Front), (Right, Down)]);
        for origin in [Up, Down] {
            for target in Face::ALL {
                let direction = direction_from_faces(origin, target, &sideways).unwrap();
                assert_eq!(face_from_direction(origin, direction, &sideways), Ok(target));
            }
        }
    }

    #[test]
    fn test_face_from_direction() {
        let upright = Orientation::upright();
        assert_eq!(face_from_direction(Front, Right, &upright), Ok(Right));
        assert_eq!(
            face_from_direction(Left, Down, &orientation(&[(Up, Back)])),
            Ok(Front),
        );
        assert_eq!(
            face_from_direction(Back, Right, &orientation(&[(Up, Down)])),
            Ok(Right),
        );
    }

    #[test]
    fn test_rotation_from_to() {
        let turn = |face, from, to| rotation_from_to(face, from, to).map(|m| m.map(|m| m.to_string()));
        assert_eq!(turn(Up, Front, Right), Ok(Some("U'".to_owned())));
        assert_eq!(turn(Up, Right, Front), Ok(Some("U".to_owned())));
        assert_eq!(turn(Left, Front, Back), Ok(Some("L2".to_owned())));
        assert_eq!(turn(Down, Left, Back), Ok(Some("D'".to_owned())));
        assert_eq!(turn(Front, Up, Left), Ok(Some("F'".to_owned())));
        assert_eq!(turn(Right, Up, Up), Ok(None));
        assert_eq!(
            turn(Up, Down, Front),
            Err(OrientationError::RotationAlongAxis {
                face: Up,
                other: Down,
            }),
        );
    }

    #[test]
    fn test_rotation_from_to_carries_edges() {
        use crate::Cube;

        // Turning `face` by the returned move carries the edge between
        // `face` and `from` onto the slot between `face` and `to`.
        for face in Face::ALL {
            for from in Face::ALL {
                for to in Face::ALL {
                    let Ok(Some(m)) = rotation_from_to(face, from, to) else {
                        continue;
                    };
                    let mut cube = Cube::solved();
                    cube.apply_move(m).unwrap();
                    let edge = cube.cubie(&[face, to]).unwrap();
                    assert_eq!(edge.color_of(to), Some(from.letter()), "{face} {from} {to}");
                }
            }
        }
    }

    #[test]
    fn test_orient_moves() {
        assert_eq!(orient("R U", &[(Front, Front), (Down, Right)]), "U L");
        assert_eq!(orient("R U L' D", &[(Up, Back), (Right, Down)]), "D B U' F");
        assert_eq!(orient("R U", &[(Front, Back), (Down, Right)]), "D L");
        assert_eq!(orient("D L", &[(Back, Front), (Right, Down)]), "R U");
    }

    #[test]
    fn test_orient_moves_requires_two_faces() {
        let moves: MoveSequence = "R".parse().unwrap();
        assert_eq!(
            orient_moves(&moves, &Orientation::upright()),
            Err(OrientationError::Ambiguous),
        );
    }

    #[test]
    fn test_orientation_inverse() {
        assert_eq!(
            orientation(&[(Down, Right)]).inverse(),
            Ok(orientation(&[(Right, Down)])),
        );
        assert_eq!(
            orientation(&[(Front, Back), (Down, Right)]).inverse(),
            Ok(orientation(&[(Back, Front), (Right, Down)])),
        );
        // Swapped, the only target would be front.
        assert_eq!(
            orientation(&[(Up, Front)]).inverse(),
            Err(OrientationError::Ambiguous),
        );
    }

    #[test]
    fn test_orient_slices_and_wide_moves() {
        let pairs = [(Front, Front), (Down, Right)];
        let o = orientation(&pairs);
        let oriented = orient("M E' S2 r' b", &pairs);
        let back: MoveSequence = oriented.parse().unwrap();
        assert_eq!(
            orient_moves(&back, &o.inverse().unwrap()).unwrap().to_string(),
            "M E' S2 r' b",
        );
    }

    #[test]
    fn test_transform_moves() {
        let moves: MoveSequence = "R U".parse().unwrap();
        let options = MoveOptions::default()
            .oriented(orientation(&[(Front, Front), (Down, Right)]))
            .reversed();
        assert_eq!(transform_moves(&moves, &options).unwrap().to_string(), "L' U'");
        assert_eq!(
            transform_moves(&moves, &MoveOptions::default()).unwrap(),
            moves,
        );
    }
}
