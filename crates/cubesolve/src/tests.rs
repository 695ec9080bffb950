use cubepuzzle::scramble::{SCRAMBLE_LENGTH, seeded_moves};
use cubepuzzle::{Cube, Face, MoveOptions, MoveSequence};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn scrambled(seed: u64) -> Cube {
    let mut cube = Cube::solved();
    cube.apply_moves(&seeded_moves(SCRAMBLE_LENGTH, seed), &MoveOptions::default())
        .unwrap();
    cube
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_cross_solves_any_scramble(seed in any::<u64>()) {
        let mut cube = scrambled(seed);
        let start = cube.clone();

        let mut solver = CrossSolver::new(&mut cube);
        let partitions = solver.solve().unwrap().to_vec();
        prop_assert!(solver.is_solved().unwrap());
        prop_assert_eq!(partitions.len(), 4);
        drop(solver);

        // Replaying the recorded moves reproduces the solve.
        let solution: MoveSequence = partitions.iter().flat_map(|p| p.moves.iter().copied()).collect();
        let mut replay = start;
        replay.apply_moves(&solution, &MoveOptions::default()).unwrap();
        prop_assert_eq!(replay, cube.clone());

        // Every cross edge ends up between the up face and its own middle.
        for edge in cube.edges().filter(|e| e.has_color('u')) {
            prop_assert_eq!(edge.color_of(Face::Up), Some('u'));
            let other = edge.faces().find(|&f| f != Face::Up).unwrap();
            prop_assert_eq!(edge.color_of(other), Some(other.letter()));
        }
    }

    #[test]
    fn proptest_partitions_end_solved(seed in any::<u64>()) {
        let mut cube = scrambled(seed);
        let mut solver = CrossSolver::new(&mut cube);
        let partitions = solver.solve().unwrap().to_vec();
        for partition in &partitions {
            prop_assert_eq!(partition.after.color_of(Face::Up), Some('u'));
            prop_assert_eq!(partition.moves.is_empty(), partition.case == CrossCase::Solved);
        }
    }
}

#[test]
fn test_solved_cross_is_left_alone() {
    let mut cube = Cube::from_moves("R' D R D2 F D' F'").unwrap();
    let mut solver = CrossSolver::new(&mut cube);
    assert!(solver.is_solved().unwrap());
    let partitions = solver.solve().unwrap();
    assert!(partitions.iter().all(|p| p.moves.is_empty()));
}

#[test]
fn test_cross_follows_middles() {
    // After a slice move the up middle shows a different color, and the cross
    // is built around it.
    let mut cube = Cube::from_moves("E").unwrap();
    let mut solver = CrossSolver::new(&mut cube);
    assert_eq!(solver.cross_color().unwrap(), 'u');
    assert!(!solver.is_solved().unwrap());
    solver.solve().unwrap();
    assert!(solver.is_solved().unwrap());
}
