//! A depth-bounded minimax agent for playing the board game 'Connect 4'
//! against a human opponent
//!
//! The agent searches the game tree with alpha-beta pruning and scores
//! unfinished positions with a hand-tuned positional heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::*, computer::Computer};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = BoardState::from_rows(&[
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     ".......",
//!     "HHH.CC.",
//! ])?;
//! let mut computer = Computer::new();
//! let column = computer.choose_move(&board);
//!
//! assert_eq!(column, Some(3));
//! assert_eq!(board.apply_move(3, Label::Computer), Outcome::Continue);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod evaluator;

pub mod search;

pub mod computer;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles in a row needed to win
pub const LINE_LENGTH: usize = 4;

// a winning line has to fit on the board in every direction
const_assert!(LINE_LENGTH <= WIDTH);
const_assert!(LINE_LENGTH <= HEIGHT);
// column indices are reported to front-ends as single digits
const_assert!(WIDTH <= 9);
