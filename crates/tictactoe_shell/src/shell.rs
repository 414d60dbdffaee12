//! Interactive line-oriented game shell.

use anyhow::Result;
use std::io::{self, Write};
use tictactoe_core::{GameService, Strategy};
use tracing::debug;

/// Command summary printed by `help` and at startup.
const HELP: &str = "\
Commands:
  play <0-8>    p   place the current player's mark
  random        r   play a random available position
  minimax       m   play the exhaustive-minimax engine move
  alphabeta     a   play the alpha-beta engine move
  start         s   start a new game
  simulate <n>  x   run n engine-vs-engine games
  help          h   show this message
  quit          q   leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(usize),
    Random,
    Minimax,
    AlphaBeta,
    Start,
    Simulate(u32),
    Help,
    Quit,
}

impl Command {
    /// Parses one trimmed input line. Returns the message to show the user
    /// when the line is not a command.
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(String::from("Type a command, or help to list them."));
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("Too many arguments for {keyword}."));
        }
        match keyword {
            "play" | "p" => {
                let word = argument.ok_or("play needs a position (0-8).")?;
                Ok(Command::Play(parse_position(word)?))
            }
            "random" | "r" => bare(keyword, argument, Command::Random),
            "minimax" | "m" => bare(keyword, argument, Command::Minimax),
            "alphabeta" | "a" => bare(keyword, argument, Command::AlphaBeta),
            "start" | "s" => bare(keyword, argument, Command::Start),
            "simulate" | "x" => {
                let word = argument.ok_or("simulate needs a game count.")?;
                Ok(Command::Simulate(parse_games(word)?))
            }
            "help" | "h" => bare(keyword, argument, Command::Help),
            "quit" | "q" => bare(keyword, argument, Command::Quit),
            other => Err(format!(
                "Unknown command: {other}. Type help to list commands."
            )),
        }
    }
}

/// Accepts a keyword that takes no argument.
fn bare(keyword: &str, argument: Option<&str>, command: Command) -> Result<Command, String> {
    match argument {
        Some(_) => Err(format!("{keyword} takes no argument.")),
        None => Ok(command),
    }
}

fn parse_position(word: &str) -> Result<usize, String> {
    word.parse()
        .map_err(|_| format!("{word} is not a position (0-8)."))
}

fn parse_games(word: &str) -> Result<u32, String> {
    let games: u32 = word
        .parse()
        .map_err(|_| format!("{word} is not a game count."))?;
    if games == 0 {
        return Err(String::from("simulate needs at least one game."));
    }
    Ok(games)
}

/// Runs the shell until `quit` or end of input.
pub fn run(mut service: GameService) -> Result<()> {
    println!("Tic-tac-toe. X moves first; positions are 0-8, left to right, top to bottom.");
    println!("{HELP}");
    println!("{}", service.render());

    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Command::parse(trimmed) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&mut service, command),
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}

/// Applies one game command and prints its outcome. Core errors are shown
/// to the user and the shell keeps going.
fn dispatch(service: &mut GameService, command: Command) {
    debug!(?command, "Dispatching shell command");
    let outcome = match command {
        Command::Play(position) => service.play_at(position),
        Command::Random => service.play_random(),
        Command::Minimax => service.play_search(Strategy::Minimax),
        Command::AlphaBeta => service.play_search(Strategy::AlphaBeta),
        Command::Start => Ok(service.reset()),
        Command::Simulate(games) => service.simulate(games).map(|report| report.to_string()),
        Command::Help => Ok(String::from(HELP)),
        Command::Quit => return,
    };
    match outcome {
        Ok(output) => println!("{output}"),
        Err(error) => println!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_position() {
        assert_eq!(Command::parse("play 4"), Ok(Command::Play(4)));
        assert_eq!(Command::parse("p 0"), Ok(Command::Play(0)));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Command::parse("random"), Ok(Command::Random));
        assert_eq!(Command::parse("r"), Ok(Command::Random));
        assert_eq!(Command::parse("m"), Ok(Command::Minimax));
        assert_eq!(Command::parse("a"), Ok(Command::AlphaBeta));
        assert_eq!(Command::parse("s"), Ok(Command::Start));
        assert_eq!(Command::parse("x 3"), Ok(Command::Simulate(3)));
        assert_eq!(Command::parse("h"), Ok(Command::Help));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("play").is_err());
        assert!(Command::parse("play four").is_err());
        assert!(Command::parse("play 1 2").is_err());
        assert!(Command::parse("simulate 0").is_err());
        assert!(Command::parse("random 2").is_err());
        assert!(Command::parse("launch").is_err());
    }
}
