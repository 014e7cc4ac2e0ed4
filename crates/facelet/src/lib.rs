//! State and face-turn engine for the 3x3x3 Rubik's cube.
//!
//! A [`Cube`] is an immutable value made of six [`FaceArray`]s. Each of the
//! eighteen legal [`Move`]s maps one cube to a new cube; the input is never
//! modified. Move strings in standard notation (`R U R' U'`) are parsed with
//! [`parse_move`] and folded over a cube with [`apply_moves`].
//!
//! ```
//! use facelet::{Cube, apply_moves};
//!
//! let solved = Cube::solved();
//! let sexy = apply_moves(&solved, "R U R' U'").unwrap();
//! assert_ne!(sexy, solved);
//! assert_eq!(apply_moves(&sexy, "U R U' R'").unwrap(), solved);
//! ```

mod color;
mod cube;
pub mod error;
mod face;
pub mod history;
pub mod net;
pub mod notation;
pub mod scramble;
pub mod structured;
mod transform;
mod twist;

pub use color::Color;
pub use cube::Cube;
pub use error::{InvalidMove, LoadCubeError};
pub use face::{Face, FaceArray, PERM_180, PERM_CCW, PERM_CW};
pub use history::History;
pub use net::print_cube;
pub use notation::{apply_move, apply_moves, format_moves, parse_move, parse_moves};
pub use scramble::{ScrambleParams, Scrambled};
pub use structured::{from_json, from_structured, to_json, to_structured};
pub use twist::{Move, Turn};

/// Number of facelets on one face.
pub const FACELETS_PER_FACE: usize = 9;
/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Number of facelets on the whole cube.
pub const FACELET_COUNT: usize = FACELETS_PER_FACE * FACE_COUNT;

/// Number of moves in a default random scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 20;

#[cfg(test)]
mod tests;
