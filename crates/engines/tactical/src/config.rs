//! Engine configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the stock
//! engine:
//!
//! ```toml
//! use_book = true
//! book_plies = 6
//! seed = 42
//!
//! [weights]
//! check = 0.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Score deltas applied by [`crate::TacticalEvaluator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// The move captures something
    pub capture: f64,
    /// The move gives check
    pub check: f64,
    /// The moved piece is the king
    pub king_move: f64,
    /// Per defender able to recapture on the destination
    pub defended: f64,
    /// Per defender that attacks the destination but cannot legally recapture
    pub pinned_defender: f64,
    /// Once per enemy capture that no defender can answer
    pub undefended: f64,
    /// Per reply to our check that captures with a non-king piece
    pub refuting_capture: f64,
    /// Per reply to our check made by a pawn
    pub pawn_response: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            capture: 0.1,
            check: 0.5,
            king_move: -0.1,
            defended: 0.1,
            pinned_defender: -0.1,
            undefended: -0.2,
            refuting_capture: -0.4,
            pawn_response: -0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Consult the opening book in the first `book_plies` plies
    pub use_book: bool,
    /// Book lookups happen only while the game ply is below this
    pub book_plies: u32,
    /// Answer an uncontested single centre pawn with the other centre push at ply 2
    pub book_break: bool,
    /// Fixed RNG seed for reproducible tie-breaks (None = seeded from entropy)
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_book: true,
            book_plies: 6,
            book_break: true,
            seed: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
