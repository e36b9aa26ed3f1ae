//! Match detection.
//!
//! Scans every row and column for windows of exactly [`RUN_LENGTH`]
//! consecutive cells holding pieces with the same image. Windows are checked
//! independently, so a line of four identical pieces yields two overlapping
//! windows. Pieces matched by an earlier pass never take part in a new window.

use crate::board::{Board, Cell};

/// Number of identical pieces that make a match.
pub const RUN_LENGTH: usize = 3;

/// Axis along which a run lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One matching window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRun {
    pub orientation: Orientation,
    /// Top-most or left-most cell of the window.
    pub start: Cell,
    pub image: usize,
    /// Piece indices in window order.
    pub pieces: [usize; RUN_LENGTH],
}

/// Result of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Horizontal windows first (row by row), then vertical (column by column).
    pub runs: Vec<MatchRun>,
}

impl MatchReport {
    pub fn found(&self) -> bool {
        !self.runs.is_empty()
    }

    /// Distinct piece indices flagged by this pass, ascending.
    pub fn matched_pieces(&self) -> Vec<usize> {
        let mut pieces: Vec<usize> = self.runs.iter().flat_map(|r| r.pieces).collect();
        pieces.sort_unstable();
        pieces.dedup();
        pieces
    }
}

/// Returns the window starting at `start` if all of its cells hold unmatched
/// pieces with one image.
fn window(board: &Board, start: Cell, orientation: Orientation) -> Option<MatchRun> {
    let mut pieces = [0usize; RUN_LENGTH];
    let mut image = None;
    for (k, slot) in pieces.iter_mut().enumerate() {
        let cell = match orientation {
            Orientation::Horizontal => Cell::new(start.row, start.col + k),
            Orientation::Vertical => Cell::new(start.row + k, start.col),
        };
        let idx = board.piece_at(cell)?;
        let piece = &board.pieces()[idx];
        if piece.matched {
            return None;
        }
        match image {
            None => image = Some(piece.image),
            Some(i) if i != piece.image => return None,
            Some(_) => {}
        }
        *slot = idx;
    }
    image.map(|image| MatchRun {
        orientation,
        start,
        image,
        pieces,
    })
}

/// Lists every matching window without touching the board.
pub fn find_runs(board: &Board) -> Vec<MatchRun> {
    let mut runs = Vec::new();
    let (rows, cols) = (board.rows(), board.cols());

    if cols >= RUN_LENGTH {
        for row in 0..rows {
            for col in 0..=cols - RUN_LENGTH {
                if let Some(run) = window(board, Cell::new(row, col), Orientation::Horizontal) {
                    runs.push(run);
                }
            }
        }
    }

    if rows >= RUN_LENGTH {
        for col in 0..cols {
            for row in 0..=rows - RUN_LENGTH {
                if let Some(run) = window(board, Cell::new(row, col), Orientation::Vertical) {
                    runs.push(run);
                }
            }
        }
    }

    runs
}

/// Runs one detection pass and flags every piece in a matching window.
pub fn detect_matches(board: &mut Board) -> MatchReport {
    let runs = find_runs(board);
    for run in &runs {
        for &idx in &run.pieces {
            board.mark_matched(idx);
        }
        log::info!(
            "{:?} match of image {} starting at ({}, {})",
            run.orientation,
            run.image,
            run.start.row,
            run.start.col
        );
    }
    MatchReport { runs }
}
