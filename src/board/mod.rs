//! Board representation and game-state types.
//!
//! Contains pieces, cells, the board state with its derived grid, and the
//! initial deal.

pub mod piece;
pub mod placement;
pub mod state;

pub use piece::{Cell, Direction, Piece, ALL_DIRECTIONS};
pub use placement::{deal, image_pool, Setup, SetupError};
pub use state::{cell_at_point, Board, BoardError};
