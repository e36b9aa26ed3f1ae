//! Game configuration.
//!
//! Board dimensions, tile size, deal shape, and catalogs. Loaded from an
//! optional JSON file where any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Setup, SetupError};
use crate::catalog::{CatalogError, ImageCatalog, QuoteCatalog};

/// Errors that make a configuration unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,

    #[error("{rows}x{cols} tiles of {tile_size} px do not fit a u32 surface")]
    SurfaceTooLarge {
        rows: usize,
        cols: usize,
        tile_size: u32,
    },

    #[error("{needed} distinct images requested but the catalog has {available}")]
    NotEnoughImages { needed: usize, available: usize },

    #[error("quote catalog is empty")]
    NoQuotes,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Complete configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge length of one tile in surface pixels.
    pub tile_size: u32,
    pub image_count: usize,
    pub copies: usize,
    pub images: ImageCatalog,
    pub quotes: QuoteCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        let setup = Setup::default();
        GameConfig {
            rows: setup.rows,
            cols: setup.cols,
            tile_size: 130,
            image_count: setup.image_count,
            copies: setup.copies,
            images: ImageCatalog::default(),
            quotes: QuoteCatalog::default(),
        }
    }
}

impl GameConfig {
    /// Reads a JSON configuration file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json).map_err(CatalogError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn setup(&self) -> Setup {
        Setup {
            rows: self.rows,
            cols: self.cols,
            image_count: self.image_count,
            copies: self.copies,
        }
    }

    /// Surface size in pixels needed to draw the whole board, or `None` if
    /// either side overflows `u32`.
    pub fn surface_size(&self) -> Option<(u32, u32)> {
        let cols = u32::try_from(self.cols).ok()?;
        let rows = u32::try_from(self.rows).ok()?;
        Some((
            cols.checked_mul(self.tile_size)?,
            rows.checked_mul(self.tile_size)?,
        ))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.setup().validate()?;
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.surface_size().is_none() {
            return Err(ConfigError::SurfaceTooLarge {
                rows: self.rows,
                cols: self.cols,
                tile_size: self.tile_size,
            });
        }
        if self.image_count > self.images.len() {
            return Err(ConfigError::NotEnoughImages {
                needed: self.image_count,
                available: self.images.len(),
            });
        }
        if self.quotes.is_empty() {
            return Err(ConfigError::NoQuotes);
        }
        Ok(())
    }
}
