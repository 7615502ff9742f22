//! Bertpiece-tokenizer - High-level WordPiece tokenizer API
//!
//! This crate provides a BERT-compatible tokenization pipeline: Unicode
//! cleaning and word splitting, greedy WordPiece subword matching, and
//! `[CLS]`/`[SEP]`/`[PAD]` framing with attention-mask and token-type
//! output.
//!
//! # Features
//!
//! - Sink-based encoding into caller-provided buffers, allocation-lean on
//!   the hot path
//! - Allocating convenience form returning all three sequences
//! - Parallel batch encoding, including rectangular `batch × row` sinks
//! - Loading and saving the `vocab.txt` + `tokenizer_config.json` format
//!
//! # Example
//!
//! ```rust,no_run
//! use bertpiece_tokenizer::BertTokenizer;
//!
//! let tokenizer = BertTokenizer::builder()
//!     .vocab_file("vocab.txt")
//!     .build()?;
//!
//! let encoding = tokenizer.encode("Hello, world!", 128, Some(128))?;
//! println!("{:?}", encoding.input_ids);
//! # Ok::<(), bertpiece_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bertpiece_core::{
    NormalizationForm, Normalizer, Result, SpecialTokens, TokenizerError, Vocabulary,
    VocabularyBuilder, WordPieceMatcher,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{BertTokenizer, BertTokenizerBuilder, Encoding};

// IO/Serialization
pub mod io;
pub use io::{TokenizerConfig, TokenizerSaver, VocabularyLoader};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::WordSplitter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
