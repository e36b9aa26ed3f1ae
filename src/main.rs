//! Tilematch -- a tile-matching game driven by a line protocol.
//!
//! This binary reads commands from stdin and writes board renderings and
//! match announcements to stdout. Logs go to stderr (`RUST_LOG`).

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tilematch::catalog::{load_images, load_quotes};
use tilematch::config::GameConfig;
use tilematch::game::Game;
use tilematch::protocol::{parse_command, Command};
use tilematch::ui::TextModal;

#[derive(Parser, Debug)]
#[command(name = "tilematch", version, about = "Tile-matching game over stdin/stdout")]
struct Args {
    /// JSON configuration file; missing fields take their defaults
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON array of image identifiers, replacing the configured catalog
    #[arg(long, value_name = "FILE")]
    images: Option<PathBuf>,

    /// JSON array of {"text", "author"} quotes, replacing the configured catalog
    #[arg(long, value_name = "FILE")]
    quotes: Option<PathBuf>,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0u64)]
    seed: u64,
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(path) = &args.images {
        config.images = load_images(path)?;
    }
    if let Some(path) = &args.quotes {
        config.quotes = load_quotes(path)?;
    }
    let rng = if args.seed != 0 {
        SmallRng::seed_from_u64(args.seed)
    } else {
        SmallRng::from_entropy()
    };

    let mut game = Game::new(config, TextModal::new(), rng)?;
    if let Some((width, height)) = game.config().surface_size() {
        log::info!(
            "dealt {} pieces on a {}x{} board ({}x{} px)",
            game.board().pieces().len(),
            game.board().rows(),
            game.board().cols(),
            width,
            height
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    game.handle_command(Command::Board, &mut out)?;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        if !game.handle_command(cmd, &mut out)? {
            break;
        }
    }

    Ok(())
}
