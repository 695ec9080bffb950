use cubepuzzle::{Cube, Cubie, Move, MoveOptions, MoveSequence};

use crate::SolveError;

/// Record of one solving step: the case that was recognized, the piece
/// before and after, and the moves in between.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<C> {
    /// Case the piece was in before solving.
    pub case: C,
    /// Copy of the piece before solving.
    pub before: Cubie,
    /// Copy of the piece after solving.
    pub after: Cubie,
    /// Moves applied to solve it.
    pub moves: MoveSequence,
}

/// Cube that remembers every move applied to it, as actually executed.
#[derive(Debug)]
pub struct Recorder<'a> {
    cube: &'a mut Cube,
    moves: MoveSequence,
}

impl<'a> Recorder<'a> {
    /// Wraps a cube.
    pub fn new(cube: &'a mut Cube) -> Self {
        Self {
            cube,
            moves: MoveSequence::new(),
        }
    }

    /// Returns the cube.
    pub fn cube(&self) -> &Cube {
        &*self.cube
    }

    /// Applies `moves` according to `options` and records the moves that
    /// were actually executed.
    pub fn apply(&mut self, moves: &[Move], options: &MoveOptions) -> Result<(), SolveError> {
        let applied = self.cube.apply_moves(moves, options)?;
        self.moves.extend(applied);
        Ok(())
    }

    /// Parses and applies moves according to `options`.
    pub fn apply_notation(&mut self, notations: &str, options: &MoveOptions) -> Result<(), SolveError> {
        let applied = self.cube.apply_notation(notations, options)?;
        self.moves.extend(applied);
        Ok(())
    }

    /// Returns the moves recorded so far.
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    /// Returns the moves recorded so far and starts a new recording.
    pub fn take_moves(&mut self) -> MoveSequence {
        std::mem::take(&mut self.moves)
    }
}
