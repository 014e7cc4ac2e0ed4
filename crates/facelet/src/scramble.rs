//! Deterministic random scrambles.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Cube, DEFAULT_SCRAMBLE_LENGTH, Move};

/// Parameters to deterministically generate a move sequence to scramble a
/// cube.
///
/// The same parameters always produce the same moves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of moves to generate.
    pub length: u32,
    /// Random seed.
    pub seed: String,
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}

impl ScrambleParams {
    /// Returns parameters for a scramble of `length` moves with a fresh random
    /// seed.
    pub fn new(length: u32) -> Self {
        let random_u64: u64 = rand::rng().random();
        Self::with_seed(length, random_u64.to_string())
    }

    /// Returns parameters for a scramble of `length` moves with a known seed.
    pub fn with_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let mut seed = [0; 32];
        seed.copy_from_slice(&sha256.finalize());
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Returns the scramble moves, each chosen uniformly from the eighteen
    /// legal moves.
    pub fn moves(&self) -> Vec<Move> {
        let mut rng = self.rng();
        std::iter::from_fn(|| Move::ALL.choose(&mut rng).copied())
            .take(self.length as usize)
            .collect()
    }

    /// Generates the scramble and applies it to a solved cube.
    pub fn generate(self) -> Scrambled {
        let moves = self.moves();
        let state = moves
            .iter()
            .fold(Cube::solved(), |cube, &mv| cube.apply_move(mv));
        log::debug!("generated {}-move scramble from seed {:?}", moves.len(), self.seed);
        Scrambled {
            params: self,
            moves,
            state,
        }
    }
}

/// Output of scrambling a cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrambled {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble moves applied.
    pub moves: Vec<Move>,
    /// State of the cube after scrambling.
    pub state: Cube,
}
