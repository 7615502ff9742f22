//! Serialization and deserialization for tokenizer checkpoints.
//!
//! This module provides functionality for loading and saving vocabularies
//! in the line-oriented `vocab.txt` format with its JSON configuration
//! sidecar.

pub mod format;
pub mod load;
pub mod save;

pub use format::{TokenizerConfig, CONFIG_FILE, VOCAB_FILE};
pub use load::VocabularyLoader;
pub use save::TokenizerSaver;
