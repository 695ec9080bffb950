//! Random scrambles.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Face, Move, MoveSequence};

/// Number of moves in a default scramble.
pub const SCRAMBLE_LENGTH: usize = 25;

/// Returns a random sequence of `length` quarter turns of the outer faces in
/// which no two adjacent moves turn the same face.
pub fn random_moves(length: usize, rng: &mut impl Rng) -> MoveSequence {
    let mut moves = MoveSequence::new();
    while moves.len() < length {
        let missing = length - moves.len();
        moves.extend((0..missing).map(|_| random_quarter_turn(rng)));
        moves = moves.simplified();
    }
    log::debug!("generated scramble {moves}");
    moves
}

/// Returns the same scramble every time for a given `seed`.
pub fn seeded_moves(length: usize, seed: u64) -> MoveSequence {
    random_moves(length, &mut ChaCha8Rng::seed_from_u64(seed))
}

fn random_quarter_turn(rng: &mut impl Rng) -> Move {
    let m = Move::face(Face::ALL[rng.random_range(0..Face::ALL.len())]);
    if rng.random_bool(0.5) { m.inverse() } else { m }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Slab;

    #[test]
    fn test_scramble_length_and_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let moves = random_moves(SCRAMBLE_LENGTH, &mut rng);
            assert_eq!(moves.len(), SCRAMBLE_LENGTH);
            assert_eq!(moves.simplified(), moves);
            assert!(moves.iter().all(|m| matches!(m.slab, Slab::Face(_))));
        }
    }

    #[test]
    fn test_seeded_scramble_is_deterministic() {
        assert_eq!(seeded_moves(30, 1234), seeded_moves(30, 1234));
        assert_ne!(seeded_moves(30, 1234), seeded_moves(30, 4321));
        assert_eq!(seeded_moves(0, 1), MoveSequence::new());
    }
}
