//! Initial board generation.
//!
//! Builds a pool holding each image index `copies` times, shuffles it, and
//! deals it onto a shuffled list of the board's cells. Dealing from the cell
//! list keeps generation bounded no matter how full the board gets.

use rand::seq::SliceRandom;
use rand::Rng;

use super::piece::Cell;
use super::state::Board;

/// Largest board that can be dealt, in cells.
pub const MAX_CELLS: usize = 1 << 16;

/// Shape of a freshly dealt board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    pub rows: usize,
    pub cols: usize,
    /// Number of distinct images placed.
    pub image_count: usize,
    /// How many pieces carry each image.
    pub copies: usize,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            rows: 4,
            cols: 8,
            image_count: 7,
            copies: 3,
        }
    }
}

/// Errors that make a setup impossible to deal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("copies per image must be at least 1")]
    NoCopies,

    #[error("a {rows}x{cols} board exceeds {max} cells", max = MAX_CELLS)]
    BoardTooLarge { rows: usize, cols: usize },

    #[error("{pieces} pieces do not fit on {cells} cells")]
    PoolTooLarge { pieces: usize, cells: usize },
}

impl Setup {
    /// Pieces in the pool, saturating at `usize::MAX`.
    pub fn piece_count(&self) -> usize {
        self.image_count.saturating_mul(self.copies)
    }

    /// Cells on the board, or `None` if the product overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SetupError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.copies == 0 {
            return Err(SetupError::NoCopies);
        }
        let cells = match self.cell_count() {
            Some(cells) if cells <= MAX_CELLS => cells,
            _ => {
                return Err(SetupError::BoardTooLarge {
                    rows: self.rows,
                    cols: self.cols,
                })
            }
        };
        if self.piece_count() > cells {
            return Err(SetupError::PoolTooLarge {
                pieces: self.piece_count(),
                cells,
            });
        }
        Ok(())
    }
}

/// Returns the unshuffled pool: `0,0,0,1,1,1,...` for three copies.
pub fn image_pool(image_count: usize, copies: usize) -> Vec<usize> {
    (0..image_count)
        .flat_map(|image| std::iter::repeat(image).take(copies))
        .collect()
}

/// Deals a new board for `setup`.
pub fn deal(setup: &Setup, rng: &mut impl Rng) -> Result<Board, SetupError> {
    setup.validate()?;

    let mut pool = image_pool(setup.image_count, setup.copies);
    pool.shuffle(rng);

    let mut cells: Vec<Cell> = (0..setup.rows)
        .flat_map(|row| (0..setup.cols).map(move |col| Cell::new(row, col)))
        .collect();
    cells.shuffle(rng);

    let mut board = Board::empty(setup.rows, setup.cols);
    for (&image, &cell) in pool.iter().zip(cells.iter()) {
        let placed = board.place(cell, image);
        debug_assert!(placed, "dealt cells are distinct");
    }

    log::debug!(
        "dealt {} pieces on a {}x{} board",
        board.pieces().len(),
        setup.rows,
        setup.cols
    );
    Ok(board)
}
