//! Error types for the WordPiece tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Encode was called before a vocabulary was loaded
    #[error("vocabulary not loaded")]
    VocabularyNotLoaded,

    /// Load-time error: unrecognized structure or missing special tokens
    #[error("malformed vocabulary: {0}")]
    VocabularyMalformed(String),

    /// Encode sink cannot hold the framed output
    #[error("sink too small: {capacity} slots (need at least {required})")]
    SinkTooSmall { capacity: usize, required: usize },

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
