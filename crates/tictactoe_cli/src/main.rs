//! Tic-tac-toe - terminal driver
//!
//! Reads cell choices from stdin and draws the board after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use tictactoe::{
    Difficulty, GameEvent, GameMode, GameOutcome, GameSession, Mark, Position, SessionObserver,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config().context("Failed to load session config")?;
    info!(?config, "Starting tic-tac-toe");

    let mut session = GameSession::new(config);
    session.subscribe(Box::new(EventPrinter { json: cli.json }));
    if !cli.json {
        print_help();
    }
    play(&mut session, cli.json)
}

/// Writes finished games and, in JSON mode, every event to stdout.
struct EventPrinter {
    json: bool,
}

impl SessionObserver for EventPrinter {
    fn on_event(&mut self, event: &GameEvent) {
        if self.json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => debug!(error = %e, "Failed to encode event"),
            }
            return;
        }
        if let GameEvent::Finished { outcome, board } = event {
            println!("\n{}\n", board.display());
            match outcome {
                GameOutcome::Win(mark) => println!("{mark} wins!"),
                GameOutcome::Draw => println!("It's a draw."),
                GameOutcome::InProgress => {}
            }
            println!("New game.");
        }
    }
}

/// A line of input from the player.
#[derive(Debug, PartialEq)]
enum Input {
    Cell(usize),
    NewGame,
    Mode(GameMode),
    Difficulty(Difficulty),
    SwapSides,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    /// Parses a cell (1-9 as drawn, or a label like `top-left`) or a command.
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("new"), None) => Input::NewGame,
            (Some("swap"), None) => Input::SwapSides,
            (Some("help" | "?"), None) => Input::Help,
            (Some("quit" | "q" | "exit"), None) => Input::Quit,
            (Some("mode"), Some(arg)) => arg
                .parse()
                .map(Input::Mode)
                .unwrap_or_else(|_| Input::Unknown(line.to_string())),
            (Some("difficulty"), Some(arg)) => arg
                .parse()
                .map(Input::Difficulty)
                .unwrap_or_else(|_| Input::Unknown(line.to_string())),
            _ => match line.parse::<usize>() {
                Ok(n @ 1..=9) => Input::Cell(n - 1),
                Ok(_) => Input::Unknown(line.to_string()),
                Err(_) => Position::from_label_or_number(line)
                    .map(|pos| Input::Cell(pos.to_index()))
                    .unwrap_or_else(|| Input::Unknown(line.to_string())),
            },
        }
    }
}

#[instrument(skip_all)]
fn play(session: &mut GameSession, json: bool) -> Result<()> {
    let stdin = io::stdin();
    loop {
        if !json {
            draw(session);
        }
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(());
        }

        match Input::parse(&line) {
            Input::Cell(index) => {
                if let Err(e) = session.try_select_cell(index)
                    && !json
                {
                    println!("{e}");
                }
            }
            Input::NewGame => {
                session.new_game();
            }
            Input::Mode(mode) => session.set_mode(mode),
            Input::Difficulty(difficulty) => session.set_difficulty(difficulty),
            Input::SwapSides => {
                let first = session.config().first_player().toggle();
                session.set_first_player(first);
            }
            Input::Help => print_help(),
            Input::Quit => return Ok(()),
            Input::Unknown(text) => {
                if !text.is_empty() {
                    println!("Unrecognized input: {text} (type 'help')");
                }
            }
        }
    }
}

fn draw(session: &GameSession) {
    println!("\n{}\n", session.board().display());
    let seat = |mark: Mark| session.player(mark).name().to_string();
    if let Some(mark) = session.to_move() {
        print!("{mark} to move ({}) > ", seat(mark));
    }
}

fn print_help() {
    println!("Enter a cell 1-9 or a label such as 'center' or 'top-left'.");
    println!("Commands: new, swap, mode <one_player|two_player>, difficulty <easy|normal|hard>, quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_numbered_as_drawn() {
        assert_eq!(Input::parse("1"), Input::Cell(0));
        assert_eq!(Input::parse("9\n"), Input::Cell(8));
        assert_eq!(Input::parse("0"), Input::Unknown("0".to_string()));
        assert_eq!(Input::parse("Center"), Input::Cell(4));
    }

    #[test]
    fn test_commands() {
        assert_eq!(Input::parse("new"), Input::NewGame);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("difficulty hard"), Input::Difficulty(Difficulty::Hard));
        assert_eq!(Input::parse("mode two_player"), Input::Mode(GameMode::TwoPlayer));
        assert_eq!(
            Input::parse("difficulty extreme"),
            Input::Unknown("difficulty extreme".to_string())
        );
    }

    #[test]
    fn test_refusal_message_names_the_reason() {
        let config = tictactoe::SessionConfig::new().with_mode(GameMode::TwoPlayer);
        let mut session = GameSession::new(config);
        session.try_select_cell(4).unwrap();
        let occupied = session.try_select_cell(4).unwrap_err().to_string();
        assert!(occupied.contains("occupied"), "{occupied}");
        let out_of_range = session.try_select_cell(9).unwrap_err().to_string();
        assert!(out_of_range.contains("out of range"), "{out_of_range}");
    }
}
