//! Movement legality and application.
//!
//! A piece moves one cell at a time. The step is legal iff the destination is
//! on the board and empty. Matched pieces move like any other; they just never
//! join another window.

use crate::board::{Board, Cell, Direction};

use super::matching::{detect_matches, MatchReport};

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("no piece is selected")]
    NoSelection,

    #[error("piece {0} does not exist")]
    UnknownPiece(usize),

    #[error("moving {} would leave the board", .0.name())]
    OutOfBounds(Direction),

    #[error("cell ({}, {}) is occupied", .0.row, .0.col)]
    Occupied(Cell),
}

/// A move that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub piece: usize,
    pub from: Cell,
    pub to: Cell,
    /// Matches found by the detection pass that followed the move.
    pub matches: MatchReport,
}

/// Returns the destination of moving piece `idx` one step in `dir`.
pub fn legal_target(board: &Board, idx: usize, dir: Direction) -> Result<Cell, MoveRejection> {
    let piece = board.piece(idx).ok_or(MoveRejection::UnknownPiece(idx))?;
    let to = piece
        .cell
        .step(dir, board.rows(), board.cols())
        .ok_or(MoveRejection::OutOfBounds(dir))?;
    if board.piece_at(to).is_some() {
        return Err(MoveRejection::Occupied(to));
    }
    Ok(to)
}

/// Moves piece `idx` one step and runs match detection. On rejection the
/// board is left untouched.
pub fn move_piece(board: &mut Board, idx: usize, dir: Direction) -> Result<Moved, MoveRejection> {
    let to = legal_target(board, idx, dir)?;
    let from = board.pieces()[idx].cell;
    board.relocate(idx, to);
    let matches = detect_matches(board);
    Ok(Moved {
        piece: idx,
        from,
        to,
        matches,
    })
}

/// Moves the selected piece one step and runs match detection.
pub fn move_selected(board: &mut Board, dir: Direction) -> Result<Moved, MoveRejection> {
    let idx = board.selected().ok_or(MoveRejection::NoSelection)?;
    move_piece(board, idx, dir)
}
