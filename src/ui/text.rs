//! Terminal front end: a character-grid surface and an in-memory modal.
//!
//! Each catalog image is assigned a letter when the surface is built, so
//! drawing never waits on an image. Matched pieces print in lowercase and the
//! selected piece is bracketed.

use std::collections::HashMap;

use crate::catalog::{ImageCatalog, Quote};
use crate::config::GameConfig;

use super::{ModalView, Rect, Surface, UiError};

/// Glyph for catalog position `index`.
fn glyph_for(index: usize) -> char {
    if index < 26 {
        (b'A' + index as u8) as char
    } else {
        '#'
    }
}

/// A surface that rasterises tiles onto a character grid.
#[derive(Debug, Clone)]
pub struct TextSurface {
    rows: usize,
    cols: usize,
    tile_size: u32,
    glyphs: HashMap<String, char>,
    /// Glyph and dimmed flag at each cell, row-major.
    cells: Vec<Option<(char, bool)>>,
    outlined: Vec<bool>,
}

impl TextSurface {
    pub fn new(images: &ImageCatalog, rows: usize, cols: usize, tile_size: u32) -> Self {
        let glyphs = images
            .iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), glyph_for(i)))
            .collect();
        TextSurface {
            rows,
            cols,
            tile_size: tile_size.max(1),
            glyphs,
            cells: vec![None; rows * cols],
            outlined: vec![false; rows * cols],
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        TextSurface::new(&config.images, config.rows, config.cols, config.tile_size)
    }

    fn slot(&self, rect: Rect) -> Option<usize> {
        let row = (rect.y / self.tile_size) as usize;
        let col = (rect.x / self.tile_size) as usize;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Renders the grid, one string per board row.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let slot = row * self.cols + col;
                        let glyph = match self.cells[slot] {
                            Some((g, true)) => g.to_ascii_lowercase(),
                            Some((g, false)) => g,
                            None => '.',
                        };
                        if self.outlined[slot] {
                            format!("[{}]", glyph)
                        } else {
                            format!(" {} ", glyph)
                        }
                    })
                    .collect::<String>()
            })
            .collect()
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.outlined.iter_mut().for_each(|o| *o = false);
    }

    fn draw_image(&mut self, image: &str, rect: Rect, dimmed: bool) {
        let glyph = self.glyphs.get(image).copied().unwrap_or('?');
        if let Some(slot) = self.slot(rect) {
            self.cells[slot] = Some((glyph, dimmed));
        }
    }

    fn stroke_rect(&mut self, rect: Rect) {
        if let Some(slot) = self.slot(rect) {
            self.outlined[slot] = true;
        }
    }
}

/// A modal held in memory. A detached modal stands in for a page without the
/// modal element and fails every call.
#[derive(Debug, Clone, Default)]
pub struct TextModal {
    detached: bool,
    visible: bool,
    quote: Option<Quote>,
    shown: usize,
}

impl TextModal {
    pub fn new() -> Self {
        TextModal::default()
    }

    pub fn detached() -> Self {
        TextModal {
            detached: true,
            ..TextModal::default()
        }
    }

    /// Quote currently filled into the modal.
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Number of times the modal has been shown.
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl ModalView for TextModal {
    fn show(&mut self, quote: &Quote) -> Result<(), UiError> {
        if self.detached {
            return Err(UiError::ModalMissing);
        }
        self.quote = Some(quote.clone());
        self.visible = true;
        self.shown += 1;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), UiError> {
        if self.detached {
            return Err(UiError::ModalMissing);
        }
        self.visible = false;
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
