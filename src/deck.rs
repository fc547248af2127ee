use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{builtin_slides, BUILTIN_NAME};
use crate::errors::{DeckError, Result};
use crate::slide::Slide;

/// Ordered, read-only collection of slides. Always holds at least one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckFile")]
pub struct Deck {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    slides: Vec<Slide>,
}

// On-disk shape, validated into a `Deck` on the way in.
#[derive(Deserialize)]
struct DeckFile {
    #[serde(default)]
    name: Option<String>,
    slides: Vec<Slide>,
}

impl TryFrom<DeckFile> for Deck {
    type Error = DeckError;

    fn try_from(file: DeckFile) -> Result<Self> {
        Deck::new(file.name, file.slides)
    }
}

impl Deck {
    pub fn new(name: Option<String>, slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (i, slide) in slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(DeckError::BlankTitle(i + 1));
            }
            if slide.description.trim().is_empty() {
                return Err(DeckError::BlankDescription(i + 1));
            }
        }
        Ok(Self { name, slides })
    }

    pub fn builtin() -> Self {
        Self {
            name: Some(BUILTIN_NAME.to_string()),
            slides: builtin_slides(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let deck = Self::from_json_str(&json)?;
        debug!(path = %path.display(), slides = deck.len(), "Deck file parsed");
        Ok(deck)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of slides, never zero.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Slide at `index`. Callers bounds-check first; out of range panics.
    pub fn get(&self, index: usize) -> &Slide {
        &self.slides[index]
    }
}
