//! Move table and the face-turn transformation.
//!
//! Each face turn does two things:
//!
//! - rotates the nine facelets of the turned face in place
//! - cycles a strip of three facelets on each of the four adjacent faces
//!
//! The strips are listed in [`FACE_CYCLES`]. For a clockwise quarter turn,
//! each strip receives the facelets of the strip that follows it in the
//! cycle. The three indices of each strip are ordered so that the first
//! facelet of one strip lands on the first facelet of the next.

use crate::face::PERM_CW;
use crate::{Cube, Face, FaceArray, Move};

/// One strip of three facelets on an adjacent face.
type Strip = (Face, [usize; 3]);

/// Strips moved by a turn of each face, indexed by [`Face::index()`].
///
/// For a clockwise turn, `strip[k]` receives the facelets from
/// `strip[(k + 1) % 4]`.
const FACE_CYCLES: [[Strip; 4]; 6] = {
    use Face::*;

    [
        // U
        [(F, [0, 1, 2]), (R, [0, 1, 2]), (B, [0, 1, 2]), (L, [0, 1, 2])],
        // R
        [(F, [2, 5, 8]), (D, [2, 5, 8]), (B, [6, 3, 0]), (U, [2, 5, 8])],
        // F
        [(U, [6, 7, 8]), (L, [8, 5, 2]), (D, [2, 1, 0]), (R, [0, 3, 6])],
        // D
        [(F, [6, 7, 8]), (L, [6, 7, 8]), (B, [6, 7, 8]), (R, [6, 7, 8])],
        // L
        [(F, [0, 3, 6]), (U, [0, 3, 6]), (B, [8, 5, 2]), (D, [0, 3, 6])],
        // B
        [(U, [2, 1, 0]), (R, [8, 5, 2]), (D, [6, 7, 8]), (L, [0, 3, 6])],
    ]
};

/// Returns the strips moved by a turn of `face`.
pub(crate) fn face_cycle(face: Face) -> &'static [Strip; 4] {
    &FACE_CYCLES[face.index()]
}

/// Returns `cube` after applying `mv`. The input is not modified.
pub(crate) fn apply_move(cube: &Cube, mv: Move) -> Cube {
    let old = cube.faces();
    let mut new = *old;

    let shift = mv.turn.quarter_turns();

    // Rotate the turned face.
    let mut turned = old[mv.face.index()];
    for _ in 0..shift {
        turned = turned.permuted(&PERM_CW);
    }
    new[mv.face.index()] = turned;

    // Cycle the adjacent strips.
    let cycle = face_cycle(mv.face);
    for (k, &(dst_face, dst_indices)) in cycle.iter().enumerate() {
        let (src_face, src_indices) = cycle[(k + shift) % 4];
        let src: &FaceArray = &old[src_face.index()];
        for (&dst, &src_i) in std::iter::zip(&dst_indices, &src_indices) {
            new[dst_face.index()].0[dst] = src[src_i];
        }
    }

    Cube::from_faces(new)
}
