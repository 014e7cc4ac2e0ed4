use std::fmt;

use strum::EnumIter;

use crate::Face;

/// Amount to turn a face, as seen when looking at that face.
#[derive(EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turn {
    /// 90 degrees clockwise, written without a suffix.
    #[default]
    Cw,
    /// 90 degrees counterclockwise, written with a trailing `'`.
    Ccw,
    /// 180 degrees, written with a trailing `2`.
    Half,
}

impl Turn {
    /// All turn amounts, in notation order (none, `'`, `2`).
    pub const ALL: [Turn; 3] = [Turn::Cw, Turn::Ccw, Turn::Half];

    /// Returns the notation suffix for the turn.
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Cw => "",
            Turn::Ccw => "'",
            Turn::Half => "2",
        }
    }

    /// Returns the turn with the given notation suffix.
    pub fn from_suffix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|turn| turn.suffix() == s)
    }

    /// Returns the number of clockwise quarter turns equivalent to this turn.
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Cw => 1,
            Turn::Ccw => 3,
            Turn::Half => 2,
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
            Turn::Half => Turn::Half,
        }
    }

    /// Returns a human-friendly name for the turn.
    pub fn name(self) -> &'static str {
        match self {
            Turn::Cw => "CW",
            Turn::Ccw => "CCW",
            Turn::Half => "180",
        }
    }
}

/// One of the eighteen face turns: a face plus a turn amount.
///
/// A `Move` can only hold a valid combination, so applying one never fails.
/// Its [`Display`](fmt::Display) form is the canonical notation token, such as
/// `R`, `U'`, or `B2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Face being turned.
    pub face: Face,
    /// Amount to turn it.
    pub turn: Turn,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl Move {
    /// All eighteen moves, grouped by face in the order `U R F D L B`.
    pub const ALL: [Move; 18] = {
        let mut ret = [Move::new(Face::U, Turn::Cw); 18];
        let mut i = 0;
        while i < 18 {
            ret[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        ret
    };

    /// Constructs a move.
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.rev(),
        }
    }
}
