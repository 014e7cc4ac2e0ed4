use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::structured::CubeRepr;
use crate::{Color, FACE_COUNT, Face, FaceArray, InvalidMove, Move};

/// State of a 3x3x3 Rubik's cube: six faces of nine facelets each.
///
/// Cube values are immutable. Every move returns a new cube, so old values
/// can be kept around (for undo, for example) and shared freely.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(from = "CubeRepr", into = "CubeRepr")]
pub struct Cube {
    faces: [FaceArray; FACE_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Face> for Cube {
    type Output = FaceArray;

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face.index()]
    }
}

impl Cube {
    /// Returns the solved cube, with every face showing its own color.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| FaceArray::uniform(face.solved_color())),
        }
    }

    /// Constructs a cube from its faces, given in the order of [`Face::ALL`]
    /// (`U R F D L B`).
    pub fn from_faces(faces: [FaceArray; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// Returns the faces in the order of [`Face::ALL`].
    pub fn faces(&self) -> &[FaceArray; FACE_COUNT] {
        &self.faces
    }

    /// Returns a copy of the cube with one face replaced.
    #[must_use]
    pub fn with_face(mut self, face: Face, contents: FaceArray) -> Self {
        self.faces[face.index()] = contents;
        self
    }

    /// Returns all 54 facelets, face by face in the order of [`Face::ALL`].
    pub fn facelets(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.iter().flat_map(|face| face.0)
    }

    /// Returns how many facelets there are of each color, indexed by
    /// [`Color::index()`].
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for color in self.facelets() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Returns whether every face shows its own solved color.
    ///
    /// Centers never move, so this is the only solved orientation.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self[face] == FaceArray::uniform(face.solved_color()))
    }

    /// Returns the cube after applying `mv`.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Self {
        crate::transform::apply_move(self, mv)
    }

    /// Returns the cube after applying a whitespace-separated sequence of
    /// moves. See [`crate::apply_moves()`].
    pub fn apply_moves(&self, sequence: &str) -> Result<Self, InvalidMove> {
        crate::notation::apply_moves(self, sequence)
    }
}
