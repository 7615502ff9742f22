//! Core vocabulary data structures.
//!
//! This module contains the trie and vocabulary types the WordPiece
//! matcher looks up against, independent of any I/O format.

pub mod trie;
pub mod vocab;

pub use trie::CharTrie;
pub use vocab::{
    SpecialTokens, Vocabulary, VocabularyBuilder, CLS_TOKEN, CONTINUATION_PREFIX, PAD_TOKEN,
    SEP_TOKEN, UNK_TOKEN,
};
