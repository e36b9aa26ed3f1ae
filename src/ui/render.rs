//! Board rendering.

use crate::board::{Board, Cell};
use crate::catalog::ImageCatalog;

use super::{Rect, Surface};

/// Pixel rectangle covered by `cell`. Coordinates saturate at `u32::MAX`.
pub fn cell_rect(cell: Cell, tile_size: u32) -> Rect {
    let offset = |n: usize| u32::try_from(n).unwrap_or(u32::MAX).saturating_mul(tile_size);
    Rect {
        x: offset(cell.col),
        y: offset(cell.row),
        w: tile_size,
        h: tile_size,
    }
}

/// Clears `surface`, draws every piece, and outlines the selected one.
pub fn render_board<S: Surface>(
    surface: &mut S,
    board: &Board,
    images: &ImageCatalog,
    tile_size: u32,
) {
    surface.clear();

    for piece in board.pieces() {
        match images.get(piece.image) {
            Some(image) => {
                surface.draw_image(image, cell_rect(piece.cell, tile_size), piece.matched)
            }
            None => log::warn!("no image for index {}", piece.image),
        }
    }

    if let Some(piece) = board.selected().and_then(|idx| board.piece(idx)) {
        surface.stroke_rect(cell_rect(piece.cell, tile_size));
    }
}
