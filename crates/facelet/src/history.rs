//! Undo/redo history of moves applied to a cube.

use crate::{Cube, InvalidMove, Move, parse_moves};

/// Move applied to a cube, along with the resulting state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Entry {
    mv: Move,
    state: Cube,
}

/// Cube with a stack of applied moves that can be undone and redone.
///
/// Undoing never goes past the state the history was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// State before any move.
    initial: Cube,
    /// Stack of moves to undo.
    undo_stack: Vec<Entry>,
    /// Stack of moves to redo.
    redo_stack: Vec<Entry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Cube::solved())
    }
}

impl History {
    /// Constructs a history starting from `initial`.
    pub fn new(initial: Cube) -> Self {
        Self {
            initial,
            undo_stack: vec![],
            redo_stack: vec![],
        }
    }

    /// Returns the latest state.
    pub fn current(&self) -> &Cube {
        self.undo_stack
            .last()
            .map_or(&self.initial, |entry| &entry.state)
    }

    /// Returns the state the history started from.
    pub fn initial(&self) -> &Cube {
        &self.initial
    }

    /// Returns the moves applied since the initial state, oldest first.
    pub fn moves(&self) -> impl '_ + DoubleEndedIterator<Item = Move> + ExactSizeIterator {
        self.undo_stack.iter().map(|entry| entry.mv)
    }

    /// Applies a move and returns the new state. Clears the redo stack.
    pub fn apply_move(&mut self, mv: Move) -> &Cube {
        self.redo_stack.clear();
        self.push(mv);
        self.current()
    }

    fn push(&mut self, mv: Move) {
        let state = self.current().apply_move(mv);
        self.undo_stack.push(Entry { mv, state });
    }

    /// Applies a whitespace-separated sequence of moves, one history entry per
    /// move.
    ///
    /// The whole sequence is parsed before anything is applied, so on error
    /// the history is unchanged.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<&Cube, InvalidMove> {
        let moves = parse_moves(sequence).collect::<Result<Vec<Move>, _>>()?;
        if !moves.is_empty() {
            self.redo_stack.clear();
        }
        for mv in moves {
            self.push(mv);
        }
        Ok(self.current())
    }

    /// Returns whether there is a move available to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }
    /// Returns whether there is a move available to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undoes the last move and returns it, or returns `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(entry);
        Some(entry.mv)
    }
    /// Redoes the last undone move and returns it, or returns `None` if there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<Move> {
        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(entry);
        Some(entry.mv)
    }

    /// Discards every move and returns to a solved cube.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apply_moves, format_moves};

    #[test]
    fn test_undo_redo() {
        let mut history = History::default();
        history.apply_sequence("R U R' U'").unwrap();
        assert_eq!(format_moves(history.moves()), "R U R' U'");
        assert_eq!(
            *history.current(),
            apply_moves(&Cube::solved(), "R U R' U'").unwrap(),
        );

        assert_eq!(history.undo(), "U'".parse().ok());
        assert_eq!(history.undo(), "R'".parse().ok());
        assert_eq!(*history.current(), apply_moves(&Cube::solved(), "R U").unwrap());
        assert!(history.can_redo());

        assert_eq!(history.redo(), "R'".parse().ok());
        assert_eq!(format_moves(history.moves()), "R U R'");

        // A new move discards the redo stack.
        history.apply_move("F".parse().unwrap());
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_undo_stops_at_initial_state() {
        let initial = apply_moves(&Cube::solved(), "F2 B").unwrap();
        let mut history = History::new(initial);
        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);

        history.apply_sequence("L D").unwrap();
        history.undo();
        history.undo();
        assert_eq!(history.undo(), None);
        assert_eq!(*history.current(), initial);
        assert_eq!(history.initial(), &initial);
    }

    #[test]
    fn test_invalid_sequence_is_atomic() {
        let mut history = History::default();
        history.apply_sequence("R U").unwrap();
        history.undo();
        let before = history.clone();

        let err = history.apply_sequence("F X B").unwrap_err();
        assert_eq!(err.token, "X");
        assert_eq!(err.position, Some(1));
        assert_eq!(history, before);
        assert!(history.can_redo());
    }

    #[test]
    fn test_reset() {
        let mut history = History::new(apply_moves(&Cube::solved(), "R").unwrap());
        history.apply_sequence("U").unwrap();
        history.reset();
        assert!(history.current().is_solved());
        assert!(!history.can_undo());
        assert_eq!(history.moves().len(), 0);
    }
}
