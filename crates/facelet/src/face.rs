use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{Color, FACELETS_PER_FACE};

/// Index permutation for a 90-degree clockwise rotation of a face.
///
/// ```text
/// 0 1 2      6 3 0
/// 3 4 5  =>  7 4 1
/// 6 7 8      8 5 2
/// ```
pub const PERM_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Index permutation for a 90-degree counterclockwise rotation of a face.
pub const PERM_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];
/// Index permutation for a 180-degree rotation of a face.
pub const PERM_180: [usize; 9] = [8, 7, 6, 5, 4, 3, 2, 1, 0];

/// Index of the center facelet, which no rotation moves.
pub(crate) const CENTER: usize = 4;

/// Face of the cube, named by its position.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Face {
    /// Up
    U = 0,
    /// Right
    R = 1,
    /// Front
    F = 2,
    /// Down
    D = 3,
    /// Left
    L = 4,
    /// Back
    B = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Face {
    /// All faces, in the order `U R F D L B`.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Returns the index of the face in `0..6`, following [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            U => D,
            D => U,
            R => L,
            L => R,
            F => B,
            B => F,
        }
    }

    /// Returns the color of every facelet on this face when the cube is
    /// solved.
    pub fn solved_color(self) -> Color {
        use Face::*;

        match self {
            U => Color::White,
            R => Color::Red,
            F => Color::Green,
            D => Color::Yellow,
            L => Color::Orange,
            B => Color::Blue,
        }
    }

    /// Returns the notation letter for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            U => 'U',
            R => 'R',
            F => 'F',
            D => 'D',
            L => 'L',
            B => 'B',
        }
    }

    /// Returns the face with the given notation letter. Lowercase letters are
    /// not accepted.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.symbol() == c)
    }

    /// Returns the full name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            U => "Up",
            R => "Right",
            F => "Front",
            D => "Down",
            L => "Left",
            B => "Back",
        }
    }
}

/// Nine facelets of one face, in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// Rotations return a new array and never modify `self`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FaceArray(pub [Color; FACELETS_PER_FACE]);

impl Index<usize> for FaceArray {
    type Output = Color;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[Color; FACELETS_PER_FACE]> for FaceArray {
    fn from(value: [Color; FACELETS_PER_FACE]) -> Self {
        Self(value)
    }
}

impl fmt::Display for FaceArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().map(|row| row.iter().join(" ")).join("\n"))
    }
}

impl FaceArray {
    /// Returns a face where every facelet has the same color.
    pub fn uniform(color: Color) -> Self {
        Self([color; FACELETS_PER_FACE])
    }

    /// Returns the facelets as a slice.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Returns a new face where facelet `i` is `self[perm[i]]`.
    #[must_use]
    pub fn permuted(&self, perm: &[usize; FACELETS_PER_FACE]) -> Self {
        Self(perm.map(|i| self.0[i]))
    }

    /// Returns the face rotated 90 degrees clockwise.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        self.permuted(&PERM_CW)
    }
    /// Returns the face rotated 90 degrees counterclockwise.
    #[must_use]
    pub fn rotated_ccw(&self) -> Self {
        self.permuted(&PERM_CCW)
    }
    /// Returns the face rotated 180 degrees.
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        self.permuted(&PERM_180)
    }

    /// Returns the three rows of the face, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.0.chunks_exact(3)
    }

    /// Returns the center facelet.
    pub fn center(&self) -> Color {
        self.0[CENTER]
    }

    /// Returns whether every facelet has the same color.
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all_equal()
    }
}
