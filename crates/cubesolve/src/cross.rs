//! First phase: the cross on the up face.

use std::fmt;

use cubepuzzle::{
    Cube, Cubie, Face, Move, MoveOptions, Orientation, direction_from_faces, rotation_from_to,
};

use crate::{Partition, Recorder, SolveError};

/// Moves needed for one edge never exceed three steps; anything more means
/// the edge is cycling.
const MAX_STEPS_PER_EDGE: usize = 4;

/// Position of a cross edge relative to its slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CrossCase {
    /// Already in its slot.
    Solved,
    /// Cross color on the up face, above the wrong middle.
    CrossFaceMisplaced,
    /// Cross color on the down face.
    OppositeFace,
    /// On the up face, but flipped.
    CrossFaceFlipped,
    /// On the down face, but flipped.
    OppositeFaceFlipped,
    /// In the middle layer, with the other color to the right of the cross
    /// color.
    MiddleRight,
    /// In the middle layer, with the other color to the left of the cross
    /// color.
    MiddleLeft,
}

/// Faces a cross edge currently occupies, and where it belongs.
#[derive(Debug, Copy, Clone)]
struct EdgeFaces {
    /// Face showing the cross color.
    cross: Face,
    /// Face showing the other color.
    other: Face,
    /// Face whose middle matches the other color.
    target: Face,
}

/// Solves the four edges around the up middle.
pub struct CrossSolver<'a> {
    recorder: Recorder<'a>,
    partitions: Vec<Partition<CrossCase>>,
    after_each: Vec<Box<dyn FnMut(&Partition<CrossCase>) + 'a>>,
}

impl fmt::Debug for CrossSolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossSolver")
            .field("recorder", &self.recorder)
            .field("partitions", &self.partitions)
            .finish_non_exhaustive()
    }
}

impl<'a> CrossSolver<'a> {
    /// Constructs a solver that will turn `cube`.
    pub fn new(cube: &'a mut Cube) -> Self {
        Self {
            recorder: Recorder::new(cube),
            partitions: vec![],
            after_each: vec![],
        }
    }

    /// Registers a callback to run after each edge is solved.
    pub fn after_each(&mut self, callback: impl FnMut(&Partition<CrossCase>) + 'a) -> &mut Self {
        self.after_each.push(Box::new(callback));
        self
    }

    /// Returns the cube.
    pub fn cube(&self) -> &Cube {
        self.recorder.cube()
    }

    /// Returns the partitions recorded so far.
    pub fn partitions(&self) -> &[Partition<CrossCase>] {
        &self.partitions
    }

    /// Returns the color of the up middle.
    pub fn cross_color(&self) -> Result<char, SolveError> {
        self.cube()
            .cubie(&[Face::Up])
            .and_then(|middle| middle.color_of(Face::Up))
            .ok_or(SolveError::MissingMiddle(Face::Up))
    }

    /// Solves every cross edge, one at a time, and returns a partition for
    /// each.
    pub fn solve(&mut self) -> Result<&[Partition<CrossCase>], SolveError> {
        let cross_color = self.cross_color()?;
        for index in self.cross_edge_indices(cross_color) {
            let partition = self.solve_edge(index, cross_color)?;
            log::debug!(
                "solved cross edge {:?} from case {} with {:?}",
                partition.after.colors().collect::<String>(),
                partition.case,
                partition.moves.to_string(),
            );
            for callback in &mut self.after_each {
                callback(&partition);
            }
            self.partitions.push(partition);
        }
        Ok(&self.partitions)
    }

    /// Returns whether every cross edge is in its slot.
    pub fn is_solved(&self) -> Result<bool, SolveError> {
        let cross_color = self.cross_color()?;
        for index in self.cross_edge_indices(cross_color) {
            if !self.is_edge_solved(&self.cube().cubies()[index])? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns whether `edge` shows the cross color on the up face and its
    /// other color above the matching middle.
    pub fn is_edge_solved(&self, edge: &Cubie) -> Result<bool, SolveError> {
        let faces = self.edge_faces(edge, self.cross_color()?)?;
        Ok(faces.cross == Face::Up && faces.other == faces.target)
    }

    /// Returns the case `edge` is in.
    pub fn case_of(&self, edge: &Cubie) -> Result<CrossCase, SolveError> {
        classify(self.edge_faces(edge, self.cross_color()?)?)
    }

    fn cross_edge_indices(&self, cross_color: char) -> Vec<usize> {
        let cubies = self.cube().cubies();
        (0..cubies.len())
            .filter(|&i| cubies[i].is_edge() && cubies[i].has_color(cross_color))
            .collect()
    }

    fn solve_edge(
        &mut self,
        index: usize,
        cross_color: char,
    ) -> Result<Partition<CrossCase>, SolveError> {
        let before = self.cube().cubies()[index].clone();
        let case = classify(self.edge_faces(&before, cross_color)?)?;

        let mut steps = 0;
        let after = loop {
            let edge = self.cube().cubies()[index].clone();
            let faces = self.edge_faces(&edge, cross_color)?;
            let step = classify(faces)?;
            if step == CrossCase::Solved {
                break edge;
            }
            if steps == MAX_STEPS_PER_EDGE {
                return Err(SolveError::Stuck(edge.colors().collect()));
            }
            steps += 1;
            let moves = moves_for(step, faces)?;
            self.recorder.apply(&moves, &MoveOptions::default())?;
        };

        Ok(Partition {
            case,
            before,
            after,
            moves: self.recorder.take_moves(),
        })
    }

    fn edge_faces(&self, edge: &Cubie, cross_color: char) -> Result<EdgeFaces, SolveError> {
        let invalid = || SolveError::InvalidPiece(edge.colors().collect());
        if !edge.is_edge() {
            return Err(invalid());
        }
        let cross = edge.face_of(cross_color).ok_or_else(invalid)?;
        let other = edge.faces().find(|&f| f != cross).ok_or_else(invalid)?;
        let other_color = edge
            .color_of(other)
            .filter(|&c| c != cross_color)
            .ok_or_else(invalid)?;
        let target = self
            .cube()
            .middle_of_color(other_color)
            .ok_or(SolveError::UnknownColor(other_color))?;
        Ok(EdgeFaces {
            cross,
            other,
            target,
        })
    }
}

fn classify(faces: EdgeFaces) -> Result<CrossCase, SolveError> {
    Ok(match (faces.cross, faces.other) {
        (Face::Up, other) if other == faces.target => CrossCase::Solved,
        (Face::Up, _) => CrossCase::CrossFaceMisplaced,
        (Face::Down, _) => CrossCase::OppositeFace,
        (_, Face::Up) => CrossCase::CrossFaceFlipped,
        (_, Face::Down) => CrossCase::OppositeFaceFlipped,
        (cross, other) => match direction_from_faces(cross, other, &Orientation::upright())? {
            Face::Right => CrossCase::MiddleRight,
            Face::Left => CrossCase::MiddleLeft,
            _ => return Err(SolveError::InvalidPiece(format!("{cross} {other}"))),
        },
    })
}

/// Returns the moves that bring an edge one step closer to its slot.
fn moves_for(case: CrossCase, faces: EdgeFaces) -> Result<Vec<Move>, SolveError> {
    let EdgeFaces {
        cross,
        other,
        target,
    } = faces;
    Ok(match case {
        CrossCase::Solved => vec![],
        // Drop it to the down face.
        CrossCase::CrossFaceMisplaced => vec![Move::face(other).doubled()],
        // Line it up under its middle, then bring it up.
        CrossCase::OppositeFace => rotation_from_to(Face::Down, other, target)?
            .into_iter()
            .chain([Move::face(target).doubled()])
            .collect(),
        // Move it into the middle layer.
        CrossCase::CrossFaceFlipped => vec![Move::face(cross)],
        CrossCase::OppositeFaceFlipped => rotation_from_to(Face::Down, cross, target)?
            .into_iter()
            .chain([Move::face(target).inverse()])
            .collect(),
        // Turn the slot next to it, insert, and turn the slot back.
        CrossCase::MiddleRight | CrossCase::MiddleLeft => {
            let setup = rotation_from_to(Face::Up, other, target)?;
            let insert = match case {
                CrossCase::MiddleLeft => Move::face(other).inverse(),
                _ => Move::face(other),
            };
            setup
                .map(Move::inverse)
                .into_iter()
                .chain([insert])
                .chain(setup)
                .collect()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn solve(scramble: &str) -> (Cube, Vec<Partition<CrossCase>>) {
        let mut cube = Cube::from_moves(scramble).unwrap();
        let partitions = CrossSolver::new(&mut cube).solve().unwrap().to_vec();
        (cube, partitions)
    }

    fn solution(partitions: &[Partition<CrossCase>]) -> String {
        partitions
            .iter()
            .filter(|p| !p.moves.is_empty())
            .map(|p| p.moves.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_solved_cube_needs_no_moves() {
        let (cube, partitions) = solve("");
        assert!(cube.is_solved());
        assert_eq!(partitions.len(), 4);
        assert!(partitions.iter().all(|p| p.case == CrossCase::Solved));
        assert!(partitions.iter().all(|p| p.moves.is_empty()));
    }

    #[test]
    fn test_single_face_turns() {
        assert_eq!(solution(&solve("F2").1), "F2");
        assert_eq!(solution(&solve("F").1), "F'");
    }

    #[test]
    fn test_case_of() {
        let cases = [
            ("", CrossCase::Solved),
            ("U", CrossCase::CrossFaceMisplaced),
            ("F2", CrossCase::OppositeFace),
            ("F'", CrossCase::MiddleRight),
            ("F", CrossCase::MiddleLeft),
        ];
        for (scramble, expected) in cases {
            let mut cube = Cube::from_moves(scramble).unwrap();
            let solver = CrossSolver::new(&mut cube);
            let edge = solver
                .cube()
                .edges()
                .find(|e| e.has_color('u') && e.has_color('f'))
                .unwrap()
                .clone();
            assert_eq!(solver.case_of(&edge).unwrap(), expected, "{scramble:?}");
        }
    }

    #[test]
    fn test_partitions_keep_copies() {
        let (_, partitions) = solve("F");
        let moved = partitions
            .iter()
            .find(|p| !p.moves.is_empty())
            .unwrap();
        assert_ne!(moved.before.position(), moved.after.position());
        assert_eq!(moved.after.color_of(Face::Up), Some('u'));
    }

    #[test]
    fn test_after_each_callbacks() {
        let mut seen = vec![];
        let mut cube = Cube::from_moves("R U F").unwrap();
        let mut solver = CrossSolver::new(&mut cube);
        solver.after_each(|partition| seen.push(partition.case));
        solver.solve().unwrap();
        assert!(solver.is_solved().unwrap());
        drop(solver);
        assert_eq!(seen.len(), 4);
    }
}
