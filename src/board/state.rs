//! Board state representation.
//!
//! Holds the piece list, the derived cell-to-piece grid, and the current
//! selection. The grid is a cache over the piece list: every piece is
//! referenced from exactly the cell it sits on and no two pieces share a cell.

use super::piece::{Cell, Piece};

/// Errors raised when assembling a board from an explicit piece list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({}, {}) is outside a {rows}x{cols} board", .cell.row, .cell.col)]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },

    #[error("cell ({}, {}) holds more than one piece", .0.row, .0.col)]
    Occupied(Cell),
}

/// Complete state of one game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    pieces: Vec<Piece>,
    /// Piece index at each cell, row-major.
    grid: Vec<Option<usize>>,
    selected: Option<usize>,
}

impl Board {
    /// Creates an empty board with no pieces and no selection.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            pieces: Vec::new(),
            grid: vec![None; rows * cols],
            selected: None,
        }
    }

    /// Builds a board from explicit `(row, col, image)` placements.
    pub fn from_layout(
        rows: usize,
        cols: usize,
        layout: &[(usize, usize, usize)],
    ) -> Result<Self, BoardError> {
        let mut board = Board::empty(rows, cols);
        for &(row, col, image) in layout {
            let cell = Cell::new(row, col);
            if !board.in_bounds(cell) {
                return Err(BoardError::OutOfBounds { cell, rows, cols });
            }
            if !board.place(cell, image) {
                return Err(BoardError::Occupied(cell));
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, idx: usize) -> Option<&Piece> {
        self.pieces.get(idx)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn slot(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Index of the piece at `cell`, if any.
    pub fn piece_at(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.grid[self.slot(cell)]
    }

    /// Image index of the piece at `cell`, if any.
    pub fn image_at(&self, cell: Cell) -> Option<usize> {
        self.piece_at(cell).map(|idx| self.pieces[idx].image)
    }

    /// Places a new piece. Returns false if the cell is out of bounds or
    /// already occupied.
    pub fn place(&mut self, cell: Cell, image: usize) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        let slot = self.slot(cell);
        if self.grid[slot].is_some() {
            return false;
        }
        self.grid[slot] = Some(self.pieces.len());
        self.pieces.push(Piece::new(cell, image));
        true
    }

    /// Currently selected piece index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the piece at `cell`. An empty or out-of-bounds cell leaves
    /// the selection unchanged. Returns the selected piece, if any.
    pub fn select_cell(&mut self, cell: Cell) -> Option<usize> {
        if let Some(idx) = self.piece_at(cell) {
            self.selected = Some(idx);
        }
        self.selected
    }

    /// Selects the piece under a pointer position given in surface pixels.
    pub fn select_point(&mut self, x: f64, y: f64, tile_size: u32) -> Option<usize> {
        match cell_at_point(x, y, tile_size) {
            Some(cell) => self.select_cell(cell),
            None => self.selected,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves piece `idx` to `to`, keeping the grid in step. The caller must
    /// have checked that `to` is in bounds and empty.
    pub(crate) fn relocate(&mut self, idx: usize, to: Cell) {
        let from = self.pieces[idx].cell;
        let from_slot = self.slot(from);
        let to_slot = self.slot(to);
        debug_assert!(self.grid[to_slot].is_none());
        self.grid[from_slot] = None;
        self.grid[to_slot] = Some(idx);
        self.pieces[idx].cell = to;
    }

    pub(crate) fn mark_matched(&mut self, idx: usize) {
        self.pieces[idx].matched = true;
    }

    pub fn matched_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.matched).count()
    }

    /// Checks that the grid and piece list describe the same occupancy.
    pub fn is_consistent(&self) -> bool {
        let occupied = self.grid.iter().filter(|s| s.is_some()).count();
        if occupied != self.pieces.len() {
            return false;
        }
        self.pieces
            .iter()
            .enumerate()
            .all(|(idx, p)| self.in_bounds(p.cell) && self.grid[self.slot(p.cell)] == Some(idx))
    }
}

/// Maps a pointer position to a cell by integer division by the tile size.
/// Negative coordinates map to no cell; bounds are checked by the board.
pub fn cell_at_point(x: f64, y: f64, tile_size: u32) -> Option<Cell> {
    if tile_size == 0 || !(x >= 0.0 && y >= 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let tile = tile_size as f64;
    Some(Cell::new((y / tile) as usize, (x / tile) as usize))
}
