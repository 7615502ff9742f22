//! Bertpiece-core - Core WordPiece algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! WordPiece tokenization, independent of any file format or encoding
//! pipeline.
//!
//! # Features
//!
//! - Trie-backed vocabulary with longest-match lookup over code points
//! - Unicode scalar classification for cleaning and word splitting
//! - Normalization and diacritic stripping with allocation elision
//! - Greedy subword matching with a bounded unknown-word fallback cascade
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use bertpiece_core::{NormalizationForm, Vocabulary, WordPieceMatcher};
//!
//! let mut builder = Vocabulary::builder(true, NormalizationForm::NFD);
//! for token in ["[PAD]", "[UNK]", "[CLS]", "[SEP]", "play", "##ing"] {
//!     builder.push_token(token);
//! }
//! let vocab = builder.build().unwrap();
//!
//! let matcher = WordPieceMatcher::new(&vocab);
//! let word: Vec<char> = "playing".chars().collect();
//! let mut ids = [0u32; 8];
//! let written = matcher.encode_word(&word, &mut ids).unwrap();
//! assert_eq!(&ids[..written], &[4, 5]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Unicode scalar classification and normalization
pub mod normalize;
pub mod unicode;
pub use normalize::{NormalizationForm, Normalizer};

// Vocabulary data structures
pub mod core;
pub use self::core::{
    CharTrie, SpecialTokens, Vocabulary, VocabularyBuilder, CLS_TOKEN, CONTINUATION_PREFIX,
    PAD_TOKEN, SEP_TOKEN, UNK_TOKEN,
};

// Subword encoding
pub mod encoding;
pub use encoding::WordPieceMatcher;
