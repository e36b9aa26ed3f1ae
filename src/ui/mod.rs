//! Presentation adapters.
//!
//! The board engine never draws or shows anything itself. A front end
//! provides a [`Surface`] to draw tiles on and a [`ModalView`] for the match
//! quote; [`render::render_board`] and the session in [`crate::game`] drive
//! them. The `text` module holds the terminal implementations.

pub mod render;
pub mod text;

use crate::board::Direction;
use crate::catalog::Quote;

pub use render::render_board;
pub use text::{TextModal, TextSurface};

/// A rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// A 2D drawing target.
pub trait Surface {
    fn clear(&mut self);

    /// Draws the image with catalog identifier `image` into `rect`. Matched
    /// pieces are drawn `dimmed`.
    fn draw_image(&mut self, image: &str, rect: Rect, dimmed: bool);

    /// Outlines `rect`.
    fn stroke_rect(&mut self, rect: Rect);
}

/// Failures reported by a front end.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("modal element not found")]
    ModalMissing,
}

/// The modal that announces a match.
pub trait ModalView {
    fn show(&mut self, quote: &Quote) -> Result<(), UiError>;

    fn hide(&mut self) -> Result<(), UiError>;

    fn is_visible(&self) -> bool;
}

/// A key the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Arrow(Direction),
    Close,
}

impl Key {
    /// Parses a key from a direction name (`left`, `ArrowLeft`) or a close
    /// name (`close`, `Escape`).
    pub fn from_name(name: &str) -> Option<Key> {
        if let Some(dir) = Direction::from_key(name) {
            return Some(Key::Arrow(dir));
        }
        match name.to_ascii_lowercase().as_str() {
            "close" | "escape" | "esc" => Some(Key::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Arrow(Direction::Up)));
        assert_eq!(Key::from_name("left"), Some(Key::Arrow(Direction::Left)));
        assert_eq!(Key::from_name("Escape"), Some(Key::Close));
        assert_eq!(Key::from_name("close"), Some(Key::Close));
        assert_eq!(Key::from_name("space"), None);
    }
}
