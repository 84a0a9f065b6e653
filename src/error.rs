//! Error types for rich text conversion.

use thiserror::Error;

/// Errors that can occur while converting rich text to Markdown.
#[derive(Error, Debug)]
pub enum Error {
    #[error("expected a rich_text document, got `{0}`")]
    InvalidRoot(String),

    #[error("unsupported list style `{0}`")]
    UnsupportedListStyle(String),

    #[error("list indent {0} is deeper than supported")]
    ListTooDeep(usize),

    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
