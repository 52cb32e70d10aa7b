//! Depth-bounded minimax search with alpha-beta pruning

use tracing::{debug, trace};

use crate::{board::*, evaluator::*};

/// Tuning for a `SearchEngine`
#[derive(Copy, Clone, Debug)]
pub struct SearchConfig {
    /// The number of plies searched from the root
    pub max_depth: u32,
    /// The score of a win found at the root, wins found deeper are discounted
    pub win_score: f64,
    pub weights: Weights,
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            win_score: 1000.0,
            weights: Weights::default(),
        }
    }
}

/// A minimax searcher playing as `Label::Computer`
///
/// # Scoring
/// Positions are scored from the computer's point of view. A computer win
/// found `n` plies below the root scores
/// `win_score * (1 - 0.25 * n / max_depth)`, so faster wins score higher and
/// the mirrored discount makes slower losses preferable to faster ones.
/// Draws and positions at the depth limit are scored by the `Evaluator` with
/// the same discount applied towards zero.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    config: SearchConfig,
    evaluator: Evaluator,
    pieces_placed: u32,

    /// The number of nodes searched by the last top-level search (for diagnostics only)
    pub node_count: usize,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(config.weights),
            pieces_placed: 1,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches the position at the configured depth with the computer to move
    ///
    /// `pieces_placed` is the game progress estimate handed to the evaluator.
    /// Returns the score of the position and the best column, or `None` if
    /// the position is already over.
    pub fn best_move(&mut self, board: &BoardState, pieces_placed: u32) -> (f64, Option<usize>) {
        self.pieces_placed = pieces_placed;
        self.node_count = 0;

        // the search applies and undoes moves in place, so work on a copy
        let mut scratch = *board;
        let (score, column) = self.search(
            &mut scratch,
            self.config.max_depth,
            true,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        debug_assert_eq!(&scratch, board, "search did not restore the board");

        debug!(
            score,
            ?column,
            nodes = self.node_count,
            depth = self.config.max_depth,
            "search finished"
        );
        (score, column)
    }

    // fraction of a score kept at a given depth
    fn discount(&self, depth: u32) -> f64 {
        let max_depth = f64::from(self.config.max_depth.max(1));
        1.0 - 0.25 * (max_depth - f64::from(depth)) / max_depth
    }

    /// Performs minimax search with alpha-beta pruning
    ///
    /// `maximizing` is true on the computer's plies. Every move is undone
    /// before returning, so `board` is left as it was passed in.
    pub fn search(
        &mut self,
        board: &mut BoardState,
        depth: u32,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<usize>) {
        self.node_count += 1;

        match board.outcome(Label::Computer) {
            Outcome::ComputerWin => return (self.config.win_score * self.discount(depth), None),
            Outcome::HumanWin => return (-self.config.win_score * self.discount(depth), None),
            Outcome::Draw => return (self.static_score(board, depth), None),
            _ if depth == 0 => return (self.static_score(board, depth), None),
            _ => {}
        }

        let mut best_column = None;
        let mut best_score;

        if maximizing {
            best_score = f64::NEG_INFINITY;
            for column in board.free_columns() {
                board.apply_move(column, Label::Computer);
                // a human line already on the board is lost whatever the computer plays
                let score = if board.outcome(Label::Human) == Outcome::HumanWin {
                    -self.config.win_score / 2.0
                } else {
                    self.search(board, depth - 1, false, alpha, beta).0
                };
                board.undo_move(column);

                if depth == self.config.max_depth {
                    trace!(column, score, "root candidate");
                }
                if score > best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
        } else {
            best_score = f64::INFINITY;
            for column in board.free_columns() {
                board.apply_move(column, Label::Human);
                let score = self.search(board, depth - 1, true, alpha, beta).0;
                board.undo_move(column);

                if score < best_score {
                    best_score = score;
                    best_column = Some(column);
                }
                beta = beta.min(score);
                if alpha >= beta {
                    break;
                }
            }
        }

        (best_score, best_column)
    }

    fn static_score(&self, board: &BoardState, depth: u32) -> f64 {
        self.evaluator.evaluate(board, self.pieces_placed) * self.discount(depth)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
