//! Random-agent playthroughs.
//!
//! Deals boards and plays them with a key-mashing agent: each step picks a
//! random piece and a random direction, exactly like a player who clicks
//! somewhere and presses an arrow key. Records how long boards take to produce
//! their first match and how many pieces end up matched. Useful for tuning
//! board shapes and as a workload for benchmarks.

use std::fmt;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{deal, Board, Setup, SetupError, ALL_DIRECTIONS};
use crate::rules::move_piece;

/// Configuration for an autoplay batch.
#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Key presses allowed per game before it is abandoned.
    pub max_moves: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    pub setup: Setup,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        AutoplayConfig {
            num_games: 100,
            max_moves: 2000,
            threads: 4,
            seed: 0,
            setup: Setup::default(),
        }
    }
}

/// Errors that stop a batch from running.
#[derive(Debug, thiserror::Error)]
pub enum AutoplayError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Outcome of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    /// Key presses issued, legal or not.
    pub moves_attempted: usize,
    /// Key presses that moved a piece.
    pub moves_accepted: usize,
    /// Attempt number (1-based) of the move that produced the first match.
    pub first_match: Option<usize>,
    /// Detection passes that found at least one match.
    pub match_passes: usize,
    pub matched_pieces: usize,
    pub total_pieces: usize,
    /// Every piece ended up matched.
    pub cleared: bool,
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays `board` until every piece is matched or `max_moves` key presses
/// have been issued.
pub fn play_board(
    mut board: Board,
    game_id: usize,
    max_moves: usize,
    rng: &mut impl Rng,
) -> GameRecord {
    let mut record = GameRecord {
        game_id,
        moves_attempted: 0,
        moves_accepted: 0,
        first_match: None,
        match_passes: 0,
        matched_pieces: 0,
        total_pieces: board.pieces().len(),
        cleared: false,
    };

    while record.moves_attempted < max_moves && board.matched_count() < record.total_pieces {
        let idx = rng.gen_range(0..record.total_pieces);
        let dir = ALL_DIRECTIONS[rng.gen_range(0..ALL_DIRECTIONS.len())];

        record.moves_attempted += 1;
        if let Ok(moved) = move_piece(&mut board, idx, dir) {
            record.moves_accepted += 1;
            if moved.matches.found() {
                record.match_passes += 1;
                record.first_match.get_or_insert(record.moves_attempted);
            }
        }
    }

    record.matched_pieces = board.matched_count();
    record.cleared = record.total_pieces > 0 && record.matched_pieces == record.total_pieces;
    record
}

/// Deals and plays one game.
pub fn play_game(
    config: &AutoplayConfig,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameRecord, SetupError> {
    let board = deal(&config.setup, rng)?;
    Ok(play_board(board, game_id, config.max_moves, rng))
}

/// Runs a batch of games, ordered by game id.
///
/// When `config.threads > 1`, games are played concurrently using rayon. Each
/// game gets its own board and random source.
pub fn run_autoplay(config: &AutoplayConfig) -> Result<Vec<GameRecord>, AutoplayError> {
    config.setup.validate()?;

    if config.threads <= 1 {
        return (0..config.num_games)
            .map(|i| {
                play_game(config, i, &mut game_rng(config.seed, i)).map_err(AutoplayError::from)
            })
            .collect();
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let mut games = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let game = play_game(config, i, &mut game_rng(config.seed, i));
                if let Ok(g) = &game {
                    log::debug!(
                        "game {}: {} of {} matched after {} presses",
                        g.game_id,
                        g.matched_pieces,
                        g.total_pieces,
                        g.moves_attempted
                    );
                }
                game
            })
            .collect::<Result<Vec<_>, _>>()
    })?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub with_match: usize,
    pub cleared: usize,
    pub mean_first_match: Option<f64>,
    pub mean_matched: f64,
}

pub fn summarize(games: &[GameRecord]) -> Summary {
    let firsts: Vec<usize> = games.iter().filter_map(|g| g.first_match).collect();
    let mean_first_match = if firsts.is_empty() {
        None
    } else {
        Some(firsts.iter().sum::<usize>() as f64 / firsts.len() as f64)
    };
    let mean_matched = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.matched_pieces).sum::<usize>() as f64 / games.len() as f64
    };
    Summary {
        games: games.len(),
        with_match: firsts.len(),
        cleared: games.iter().filter(|g| g.cleared).count(),
        mean_first_match,
        mean_matched,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games: {}", self.games)?;
        writeln!(f, "Games with a match: {}", self.with_match)?;
        writeln!(f, "Boards cleared: {}", self.cleared)?;
        match self.mean_first_match {
            Some(m) => writeln!(f, "Mean presses to first match: {:.1}", m)?,
            None => writeln!(f, "Mean presses to first match: n/a")?,
        }
        write!(f, "Mean matched pieces: {:.2}", self.mean_matched)
    }
}
