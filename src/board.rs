//! The game board: cell occupancy, gravity placement and win/draw detection

use anyhow::{anyhow, bail, Result};

use std::fmt;

use crate::{HEIGHT, LINE_LENGTH, WIDTH};

/// Line directions as (row step, column step), rows counting downwards:
/// right, down, down-right and down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The owner of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Label {
    Empty,
    Human,
    Computer,
}

impl Label {
    fn is_empty(&self) -> bool {
        match self {
            Label::Empty => true,
            _ => false,
        }
    }

    /// The side playing against this one, `Empty` has no opponent
    pub fn opponent(&self) -> Label {
        match self {
            Label::Human => Label::Computer,
            Label::Computer => Label::Human,
            Label::Empty => Label::Empty,
        }
    }

    /// The outcome reported when this label completes a line
    pub fn winning_outcome(&self) -> Option<Outcome> {
        match self {
            Label::Human => Some(Outcome::HumanWin),
            Label::Computer => Some(Outcome::ComputerWin),
            Label::Empty => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Label::Empty => '.',
            Label::Human => 'H',
            Label::Computer => 'C',
        }
    }
}

/// The state of the game after a move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Continue,
    HumanWin,
    ComputerWin,
    Draw,
    /// The move was rejected and the board is unchanged
    InvalidMove,
}

impl Outcome {
    /// Whether the game is over
    pub fn is_terminal(&self) -> bool {
        match self {
            Outcome::HumanWin | Outcome::ComputerWin | Outcome::Draw => true,
            Outcome::Continue | Outcome::InvalidMove => false,
        }
    }
}

/// A fixed size Connect 4 grid
///
/// Row 0 is the top of the board. Pieces fall to the lowest empty cell of
/// their column, so every column is filled as a contiguous run from the
/// bottom row upwards.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardState {
    cells: [[Label; WIDTH]; HEIGHT],
    // number of pieces in each column
    heights: [usize; WIDTH],
}

impl BoardState {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Label::Empty; WIDTH]; HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Creates a board from a diagram of its rows, top row first
    ///
    /// `.` is an empty cell, `H` a human piece and `C` a computer piece.
    /// Diagrams with floating pieces are rejected.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            bail!("expected {} rows, found {}", HEIGHT, rows.len());
        }
        let mut board = Self::new();

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != WIDTH {
                bail!("row {} must be {} cells wide: '{}'", row, WIDTH, line);
            }
            for (column, symbol) in line.chars().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Label::Empty,
                    'H' | 'h' => Label::Human,
                    'C' | 'c' => Label::Computer,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
                };
            }
        }

        for column in 0..WIDTH {
            let filled = (0..HEIGHT)
                .rev()
                .take_while(|&row| !board.cells[row][column].is_empty())
                .count();
            if (0..HEIGHT - filled).any(|row| !board.cells[row][column].is_empty()) {
                bail!("column {} has a floating piece", column + 1);
            }
            board.heights[column] = filled;
        }
        Ok(board)
    }

    /// The label at a given cell, row 0 being the top
    pub fn cell(&self, row: usize, column: usize) -> Label {
        self.cells[row][column]
    }

    /// Columns with at least one empty cell, left to right
    ///
    /// An empty list means the board is full.
    pub fn free_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    /// The number of pieces placed on the board
    pub fn occupied(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Label::is_empty)
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT
    }

    /// Drops a piece into a column and returns the resulting outcome for
    /// the player who moved
    ///
    /// Full or out of range columns return `InvalidMove` and leave the board
    /// untouched.
    pub fn apply_move(&mut self, column: usize, label: Label) -> Outcome {
        if column >= WIDTH || label.is_empty() || !self.playable(column) {
            return Outcome::InvalidMove;
        }
        let row = HEIGHT - 1 - self.heights[column];
        self.cells[row][column] = label;
        self.heights[column] += 1;

        self.outcome(label)
    }

    /// Removes the top piece of a column, reversing the last `apply_move`
    /// into it
    pub(crate) fn undo_move(&mut self, column: usize) {
        debug_assert!(self.heights[column] > 0, "undo on empty column {}", column);
        let row = HEIGHT - self.heights[column];
        self.cells[row][column] = Label::Empty;
        self.heights[column] -= 1;
    }

    /// The state of the game as seen by `label`
    ///
    /// Reports a win when `label` owns a complete line anywhere on the board,
    /// otherwise a draw if the board is full.
    pub fn outcome(&self, label: Label) -> Outcome {
        if let Some(win) = label.winning_outcome() {
            for row in 0..HEIGHT {
                for column in 0..WIDTH {
                    if DIRECTIONS
                        .iter()
                        .any(|&direction| self.check_line(row, column, direction, label))
                    {
                        return win;
                    }
                }
            }
        }

        if self.free_columns().is_empty() {
            Outcome::Draw
        } else {
            Outcome::Continue
        }
    }

    // check for a full line of `label` starting at (row, column)
    fn check_line(
        &self,
        row: usize,
        column: usize,
        (d_row, d_column): (isize, isize),
        label: Label,
    ) -> bool {
        (0..LINE_LENGTH as isize).all(|i| {
            let r = row as isize + i * d_row;
            let c = column as isize + i * d_column;
            r >= 0
                && r < HEIGHT as isize
                && c >= 0
                && c < WIDTH as isize
                && self.cells[r as usize][c as usize] == label
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(Label::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
