//! The computer player: picks a column for the current position

use crate::{board::*, search::*};

/// The game progress estimate at the start of a game
const INITIAL_PIECES_PLACED: u32 = 1;

/// Pieces assumed to be placed per call to `choose_move`, one per side
const PIECES_PER_ROUND: u32 = 2;

/// An opponent for a human player, always playing `Label::Computer`
///
/// Keeps a running estimate of how many pieces have been placed, which
/// dampens positional scores as the game matures. Use one `Computer` per game
/// or call [`reset`](Computer::reset) between games.
#[derive(Clone, Debug)]
pub struct Computer {
    engine: SearchEngine,
    pieces_placed: u32,
}

impl Computer {
    /// Creates a computer player with the default search depth and weights
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            engine: SearchEngine::new(config),
            pieces_placed: INITIAL_PIECES_PLACED,
        }
    }

    /// The current game progress estimate
    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    /// The number of nodes visited by the last search
    pub fn node_count(&self) -> usize {
        self.engine.node_count
    }

    /// Restarts the game progress estimate for a new game
    pub fn reset(&mut self) {
        self.pieces_placed = INITIAL_PIECES_PLACED;
    }

    /// Chooses the computer's next column
    ///
    /// Returns `None` if the board is full. The board itself is not modified,
    /// the caller applies the move.
    pub fn choose_move(&mut self, board: &BoardState) -> Option<usize> {
        self.pieces_placed += PIECES_PER_ROUND;
        if board.free_columns().is_empty() {
            return None;
        }
        let (_score, column) = self.engine.best_move(board, self.pieces_placed);
        column
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}
