//! Error types.

use thiserror::Error;

/// Error returned when a token is not one of the eighteen legal moves.
///
/// Parsing a sequence stops at the first invalid token, and nothing after it
/// is applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid move: {token}")]
pub struct InvalidMove {
    /// Offending token, exactly as it was given.
    pub token: String,
    /// Index of the token within its sequence, if it came from one.
    pub position: Option<usize>,
}

impl InvalidMove {
    /// Constructs an error for a token that was parsed on its own.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            position: None,
        }
    }

    /// Returns the error with the index of the token within its sequence.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

/// Error returned when loading a cube from its structured form fails.
///
/// The structured form must have exactly the keys `U R F D L B`, each holding
/// exactly nine color codes.
#[derive(Error, Debug)]
#[error("malformed cube: {0}")]
pub struct LoadCubeError(#[from] serde_json::Error);
