use proptest::prelude::*;

use crate::{Cube, Move};


/// Returns the cube after applying `moves` to a solved cube.
fn scrambled(moves: &[Move]) -> Cube {
    moves
        .iter()
        .fold(Cube::solved(), |cube, &mv| cube.apply_move(mv))
}

/// Strategy generating cube states reachable from the solved cube.
fn reachable_cube() -> impl Strategy<Value = Cube> {
    prop::collection::vec(any::<Move>(), 0..40).prop_map(|moves| scrambled(&moves))
}
