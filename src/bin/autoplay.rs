//! Random-agent autoplay CLI.
//!
//! Plays batches of tilematch boards with a key-mashing agent and outputs one
//! JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin autoplay -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use tilematch::autoplay::{self, AutoplayConfig};
use tilematch::board::Setup;

#[derive(Parser, Debug)]
#[command(name = "autoplay", about = "Play random tilematch games and report match statistics")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Key presses per game before it is abandoned
    #[arg(long, default_value_t = 2000)]
    max_moves: usize,

    /// Board rows
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Distinct images dealt
    #[arg(long, default_value_t = 7)]
    images: usize,

    /// Copies of each image
    #[arg(long, default_value_t = 3)]
    copies: usize,

    /// Number of parallel threads
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0u64)]
    seed: u64,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Suppress summary output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = AutoplayConfig {
        num_games: args.games,
        max_moves: args.max_moves,
        threads: args.threads,
        seed: args.seed,
        setup: Setup {
            rows: args.rows,
            cols: args.cols,
            image_count: args.images,
            copies: args.copies,
        },
    };

    if !args.quiet {
        eprintln!(
            "Autoplay: {} games on {}x{}, {} images x{}, {} presses max, {} threads",
            config.num_games,
            config.setup.rows,
            config.setup.cols,
            config.setup.image_count,
            config.setup.copies,
            config.max_moves,
            config.threads
        );
    }

    let start = Instant::now();
    let games = autoplay::run_autoplay(&config)?;
    let elapsed = start.elapsed();

    if !args.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        eprintln!("{}", autoplay::summarize(&games));
    }

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            autoplay::write_jsonl(&games, &mut writer)?;
            if !args.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            autoplay::write_jsonl(&games, &mut writer)?;
        }
    }

    Ok(())
}
