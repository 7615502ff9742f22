//! Subword encoding.

pub mod wordpiece;

pub use wordpiece::WordPieceMatcher;
