//! Functions for parsing and formatting face turn notation.
//!
//! A move token is a face letter from `U R F D L B` followed by nothing
//! (clockwise), `'` (counterclockwise), or `2` (half turn). Tokens are
//! case-sensitive.

use std::str::FromStr;

use itertools::Itertools;

use crate::{Cube, Face, InvalidMove, Move, Turn};

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

/// Parses a single move, ignoring surrounding whitespace.
///
/// The error carries `token` exactly as it was given.
pub fn parse_move(token: &str) -> Result<Move, InvalidMove> {
    let trimmed = token.trim();
    let mut chars = trimmed.chars();
    let face = chars.next().and_then(Face::from_symbol);
    let turn = Turn::from_suffix(chars.as_str());
    match face.zip(turn) {
        Some((face, turn)) => Ok(Move::new(face, turn)),
        None => Err(InvalidMove::new(token)),
    }
}

/// Returns `cube` after applying `mv`. Never fails.
pub fn apply_move(cube: &Cube, mv: Move) -> Cube {
    crate::transform::apply_move(cube, mv)
}

/// Parses a whitespace-separated sequence of moves.
///
/// Errors carry the index of the offending token.
pub fn parse_moves(s: &str) -> impl '_ + Iterator<Item = Result<Move, InvalidMove>> {
    s.split_whitespace()
        .enumerate()
        .map(|(i, token)| parse_move(token).map_err(|e| e.at(i)))
}

/// Applies a whitespace-separated sequence of moves to `cube`, in order.
///
/// Stops at the first token that is not a valid move and returns an error;
/// `cube` itself is never modified. An empty sequence returns `cube`
/// unchanged.
pub fn apply_moves(cube: &Cube, sequence: &str) -> Result<Cube, InvalidMove> {
    let mut state = *cube;
    let mut count = 0;
    for result in parse_moves(sequence) {
        let mv = result.inspect_err(|e| {
            log::debug!("rejected move sequence at token {:?}: {e}", e.position);
        })?;
        log::trace!("applying {mv}");
        state = apply_move(&state, mv);
        count += 1;
    }
    log::debug!("applied {count} moves");
    Ok(state)
}

/// Formats a sequence of moves as a string, separated by spaces.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().join(" ")
}
