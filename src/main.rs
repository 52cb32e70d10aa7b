use anyhow::{anyhow, bail, Context, Result};
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use std::thread;

use connect4_minimax::{board::*, computer::Computer, search::SearchConfig, WIDTH};

mod terminal;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = SearchConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let depth = arg
            .parse::<u32>()
            .with_context(|| format!("search depth must be a positive integer, got '{}'", arg))?;
        if depth == 0 {
            bail!("search depth must be at least 1");
        }
        config = config.with_max_depth(depth);
    }

    println!("Welcome to Connect 4\n");

    loop {
        play_game(config)?;
        if !terminal::ask("Play again?")? {
            break;
        }
    }
    Ok(())
}

fn play_game(config: SearchConfig) -> Result<()> {
    let mut board = BoardState::new();
    let mut computer = Computer::with_config(config);
    let mut human_turn = terminal::ask("Do you want to move first?")?;

    // game loop
    loop {
        terminal::display(&board)?;

        let outcome = if human_turn {
            let column = match terminal::read_column()? {
                Some(column) => column,
                None => continue,
            };
            board.apply_move(column, Label::Human)
        } else {
            println!("Computer is thinking...");
            let (returned, column) = think(computer, board)?;
            computer = returned;

            let column = column.ok_or_else(|| anyhow!("computer found no move to play"))?;
            println!("Computer plays: {}", column + 1);
            board.apply_move(column, Label::Computer)
        };

        match outcome {
            Outcome::InvalidMove => {
                println!("Invalid move, columns must be between 1 and {} and not full", WIDTH);
                // try the move again
                continue;
            }
            Outcome::Continue => human_turn = !human_turn,

            // end states
            Outcome::HumanWin => {
                terminal::display(&board)?;
                println!("You win!");
                return Ok(());
            }
            Outcome::ComputerWin => {
                terminal::display(&board)?;
                println!("Computer wins!");
                return Ok(());
            }
            Outcome::Draw => {
                terminal::display(&board)?;
                println!("Draw!");
                return Ok(());
            }
        }
    }
}

// search on a worker thread so the spinner keeps ticking
fn think(mut computer: Computer, board: BoardState) -> Result<(Computer, Option<usize>)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("searching");
    spinner.enable_steady_tick(100);

    let handle = thread::spawn(move || {
        let column = computer.choose_move(&board);
        (computer, column)
    });
    let result = handle
        .join()
        .map_err(|_| anyhow!("search thread panicked"));

    spinner.finish_and_clear();
    result
}
