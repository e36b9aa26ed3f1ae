//! Image and quote catalogs.
//!
//! The image catalog is the ordered list of identifiers a piece's image index
//! points into. The quote catalog holds the text shown when a match is found.
//! Both have built-in defaults and can be loaded from JSON.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Image paths shipped with the game.
pub const DEFAULT_IMAGES: [&str; 11] = [
    "images/IMG_9254.jpg",
    "images/IMG_9259.jpg",
    "images/IMG_9292.jpg",
    "images/IMG_9509.jpg",
    "images/IMG_9294.jpg",
    "images/IMG_9432.jpg",
    "images/IMG_9599.jpg",
    "images/IMG_9572.jpg",
    "images/IMG_9378.jpg",
    "images/IMG_9382.jpg",
    "images/IMG_9381.jpg",
];

const DEFAULT_QUOTES: [(&str, &str); 6] = [
    ("Well done is better than well said.", "Benjamin Franklin"),
    ("Little by little, one travels far.", "J.R.R. Tolkien"),
    ("Fortune favors the bold.", "Virgil"),
    ("Patience is bitter, but its fruit is sweet.", "Jean-Jacques Rousseau"),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
];

/// Errors raised while loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Ordered image identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageCatalog {
    images: Vec<String>,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        ImageCatalog::new(DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect())
    }
}

impl ImageCatalog {
    pub fn new(images: Vec<String>) -> Self {
        ImageCatalog { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }
}

/// A quote and its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Quotes shown in the match modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
}

impl Default for QuoteCatalog {
    fn default() -> Self {
        QuoteCatalog::new(
            DEFAULT_QUOTES
                .iter()
                .map(|(text, author)| Quote {
                    text: text.to_string(),
                    author: author.to_string(),
                })
                .collect(),
        )
    }
}

impl QuoteCatalog {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteCatalog { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Picks a uniformly random quote.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<&Quote> {
        self.quotes.choose(rng)
    }
}

/// Loads an image catalog from a JSON array of identifiers.
pub fn load_images(path: &Path) -> Result<ImageCatalog, CatalogError> {
    Ok(serde_json::from_str(&read_file(path)?)?)
}

/// Loads a quote catalog from a JSON array of `{ "text", "author" }` objects.
pub fn load_quotes(path: &Path) -> Result<QuoteCatalog, CatalogError> {
    load_quotes_from_str(&read_file(path)?)
}

pub fn load_quotes_from_str(json: &str) -> Result<QuoteCatalog, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn default_images_are_the_shipped_paths() {
        let images = ImageCatalog::default();
        assert_eq!(images.len(), 11);
        assert_eq!(images.get(0), Some("images/IMG_9254.jpg"));
        assert_eq!(images.get(11), None);
    }

    #[test]
    fn pick_reaches_every_quote() {
        let quotes = QuoteCatalog::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = vec![false; quotes.len()];
        for _ in 0..500 {
            let q = quotes.pick(&mut rng).unwrap();
            let i = quotes.quotes().iter().position(|x| x == q).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn empty_catalog_picks_nothing() {
        let quotes = QuoteCatalog::new(Vec::new());
        assert!(quotes.pick(&mut SmallRng::seed_from_u64(1)).is_none());
    }

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tilematch-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn images_load_from_file() {
        let path = temp_file("images.json", r#"["x.png", "y.png", "z.png"]"#);
        let images = load_images(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(images.len(), 3);
        assert_eq!(images.iter().collect::<Vec<_>>(), vec!["x.png", "y.png", "z.png"]);
    }

    #[test]
    fn quotes_load_from_file() {
        let path = temp_file("quotes.json", r#"[{"text": "Onward.", "author": "Someone"}]"#);
        let quotes = load_quotes(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes.quotes()[0].author, "Someone");
    }

    #[test]
    fn missing_catalog_file_reported() {
        let path = Path::new("/nonexistent/tilematch-images.json");
        assert!(matches!(load_images(path), Err(CatalogError::Io { .. })));
        assert!(matches!(load_quotes(path), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn quotes_parse_from_json() {
        let json = r#"[{"text": "Onward.", "author": "Someone"}]"#;
        let quotes = load_quotes_from_str(json).unwrap();
        assert_eq!(quotes.quotes()[0].text, "Onward.");
    }

    #[test]
    fn malformed_quotes_rejected() {
        assert!(matches!(
            load_quotes_from_str(r#"{"text": 1}"#),
            Err(CatalogError::Json(_))
        ));
    }
}
