//! Static heuristic scoring of a position from the computer's point of view

use anyhow::{bail, Result};

use crate::{board::*, HEIGHT, LINE_LENGTH, WIDTH};

/// Per-piece contributions to a window's score, indexed by how many pieces
/// of the same label were already seen in that window
///
/// Each table has one entry per cell of a line, so every possible count
/// has a weight.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Weights {
    computer: [f64; LINE_LENGTH],
    human: [f64; LINE_LENGTH],
}

impl Weights {
    /// Creates a validated pair of weight tables
    ///
    /// Computer weights must be non-negative and non-decreasing, human
    /// weights non-positive and non-increasing.
    pub fn new(computer: [f64; LINE_LENGTH], human: [f64; LINE_LENGTH]) -> Result<Self> {
        if computer.iter().any(|w| !w.is_finite() || *w < 0.0) {
            bail!("computer weights must be finite and non-negative: {:?}", computer);
        }
        if human.iter().any(|w| !w.is_finite() || *w > 0.0) {
            bail!("human weights must be finite and non-positive: {:?}", human);
        }
        if computer.windows(2).any(|pair| pair[1] < pair[0]) {
            bail!("computer weights must be non-decreasing: {:?}", computer);
        }
        if human.windows(2).any(|pair| pair[1] > pair[0]) {
            bail!("human weights must be non-increasing: {:?}", human);
        }
        Ok(Self { computer, human })
    }

    pub fn computer(&self) -> &[f64; LINE_LENGTH] {
        &self.computer
    }

    pub fn human(&self) -> &[f64; LINE_LENGTH] {
        &self.human
    }
}

impl Default for Weights {
    // human pieces are penalised harder than computer pieces are rewarded,
    // which biases the search towards blocking
    fn default() -> Self {
        Self {
            computer: [0.5, 3.0, 9.0, 9.0],
            human: [-0.5, -2.0, -100.0, -100.0],
        }
    }
}

/// Every run of `LINE_LENGTH` cells on the board, each listed once
///
/// Horizontal runs go left to right and the others top to bottom.
pub fn windows() -> impl Iterator<Item = [(usize, usize); LINE_LENGTH]> {
    let span = LINE_LENGTH - 1;
    // starting rows, starting columns and direction of each line family
    let families = [
        (0..HEIGHT, 0..WIDTH - span, (0, 1)),
        (0..HEIGHT - span, 0..WIDTH, (1, 0)),
        (0..HEIGHT - span, 0..WIDTH - span, (1, 1)),
        (0..HEIGHT - span, span..WIDTH, (1, -1)),
    ];

    IntoIterator::into_iter(families).flat_map(|(rows, columns, direction)| {
        rows.flat_map(move |row| {
            columns
                .clone()
                .map(move |column| window(row, column, direction))
        })
    })
}

fn window(
    row: usize,
    column: usize,
    (d_row, d_column): (isize, isize),
) -> [(usize, usize); LINE_LENGTH] {
    let mut cells = [(0, 0); LINE_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        *cell = (
            (row as isize + i as isize * d_row) as usize,
            (column as isize + i as isize * d_column) as usize,
        );
    }
    cells
}

/// Scores positions by summing the contributions of every window
#[derive(Copy, Clone, Debug, Default)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores a position, positive values favouring the computer
    ///
    /// The window total is divided by `pieces_placed`, an estimate of game
    /// progress, so positional scores shrink as the game goes on.
    pub fn evaluate(&self, board: &BoardState, pieces_placed: u32) -> f64 {
        let total: f64 = windows()
            .map(|window| self.evaluate_window(board, &window))
            .sum();
        total / f64::from(pieces_placed.max(1))
    }

    fn evaluate_window(&self, board: &BoardState, window: &[(usize, usize); LINE_LENGTH]) -> f64 {
        let mut computer_count = 0;
        let mut human_count = 0;
        let mut score = 0.0;

        for &(row, column) in window.iter() {
            match board.cell(row, column) {
                Label::Computer => {
                    score += self.weights.computer[computer_count];
                    computer_count += 1;
                }
                Label::Human => {
                    score += self.weights.human[human_count];
                    human_count += 1;
                }
                Label::Empty => {}
            }
        }
        score
    }
}
