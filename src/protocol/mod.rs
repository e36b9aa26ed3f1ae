//! Line protocol for driving a game from stdin.
//!
//! One command per line; the game loop answers on stdout.

pub mod parser;

pub use parser::{parse_command, Command};
