//! Errors raised while building a deck or setting up a presentation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read deck file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck has no slides")]
    Empty,

    #[error("Slide {0} has an empty title")]
    BlankTitle(usize),

    #[error("Slide {0} has an empty description")]
    BlankDescription(usize),

    #[error("Start slide {requested} is out of range (deck has {total} slides)")]
    StartOutOfRange { requested: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, DeckError>;
