//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that the
//! game loop can dispatch on.

use crate::ui::Key;

/// A parsed front-end command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pointer click at surface coordinates: `click <x> <y>`.
    Click { x: f64, y: f64 },

    /// Key press: `key <name>`.
    Key(Key),

    /// Deal a fresh board.
    Shuffle,

    /// Print the current board.
    Board,

    /// Reseed the random source and deal a fresh board: `seed <n>`.
    Seed(u64),

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "shuffle" | "reset" => Some(Command::Shuffle),
        "board" => Some(Command::Board),
        "quit" => Some(Command::Quit),

        "click" => parse_click(&tokens),
        "key" => parse_key(&tokens),
        "seed" => parse_seed(&tokens),

        other => {
            log::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `click <x> <y>`.
fn parse_click(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        log::warn!("malformed click: expected 'click <x> <y>'");
        return None;
    }
    match (tokens[1].parse::<f64>(), tokens[2].parse::<f64>()) {
        (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => Some(Command::Click { x, y }),
        _ => {
            log::warn!("invalid click coordinates: '{} {}'", tokens[1], tokens[2]);
            None
        }
    }
}

/// Parses `key <name>`.
fn parse_key(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        log::warn!("malformed key: expected 'key <name>'");
        return None;
    }
    match Key::from_name(tokens[1]) {
        Some(key) => Some(Command::Key(key)),
        None => {
            log::debug!("ignoring key: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `seed <n>`.
fn parse_seed(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        log::warn!("malformed seed: expected 'seed <n>'");
        return None;
    }
    match tokens[1].parse::<u64>() {
        Ok(seed) => Some(Command::Seed(seed)),
        Err(_) => {
            log::warn!("invalid seed value: '{}'", tokens[1]);
            None
        }
    }
}
