use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{board::*, HEIGHT, WIDTH};

/// Draws the board with column numbers above it
pub fn display(board: &BoardState) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Label::Human => Color::Red,
                        Label::Computer => Color::Yellow,
                        Label::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Prints a prompt and reads one trimmed line from stdin
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;

    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_lowercase())
}

/// Asks a yes/no question until a valid answer is given
pub fn ask(question: &str) -> Result<bool> {
    loop {
        match prompt(&format!("{} y/n: ", question))?.chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Reads a 1-indexed column from the human, returning it 0-indexed
///
/// Out of range numbers are passed through for the board to reject.
pub fn read_column() -> Result<Option<usize>> {
    let input = prompt("Move input > ")?;
    match input.parse::<usize>() {
        Ok(column) if column >= 1 => Ok(Some(column - 1)),
        _ => {
            println!("Invalid number: {}", input);
            Ok(None)
        }
    }
}
