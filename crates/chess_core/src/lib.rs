pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by every move-selection strategy
// =============================================================================

/// Result of a move selection.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The chosen move (None if the position has no legal moves)
    pub best_move: Option<Move>,
    /// Heuristic score of the chosen move, when it was scored at all
    pub score: Option<f64>,
    /// Number of candidate moves evaluated
    pub nodes: u64,
}

/// Trait that all engines implement so hosts can swap strategies.
pub trait Engine: Send {
    /// Choose a move for the side to move.
    ///
    /// The game may be pushed and popped during the call but must be handed
    /// back in the state it was received.
    fn search(&mut self, game: &mut Game) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "tactical-chess"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
