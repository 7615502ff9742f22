//! Vocabulary storage and lookup.
//!
//! A loaded vocabulary is an immutable value: two tries (whole-word
//! prefixes and `##` continuation suffixes), the id → literal table for
//! decoding, the four reserved special-token ids, and the preprocessing
//! flags captured at load time. It may be shared by any number of
//! concurrent encodes without synchronization.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::core::trie::CharTrie;
use crate::error::{Result, TokenizerError};
use crate::normalize::NormalizationForm;

/// Sequence-start token literal.
pub const CLS_TOKEN: &str = "[CLS]";
/// Separator / sequence-end token literal.
pub const SEP_TOKEN: &str = "[SEP]";
/// Unknown-word substitute literal.
pub const UNK_TOKEN: &str = "[UNK]";
/// Right-padding filler literal.
pub const PAD_TOKEN: &str = "[PAD]";
/// Marker that prefixes continuation tokens in vocabulary files.
pub const CONTINUATION_PREFIX: &str = "##";

/// The four reserved token ids, cached for fast access during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// `[CLS]` id
    pub cls: u32,
    /// `[SEP]` id
    pub sep: u32,
    /// `[UNK]` id
    pub unk: u32,
    /// `[PAD]` id
    pub pad: u32,
}

impl SpecialTokens {
    /// Check if an id is one of the reserved tokens.
    #[inline]
    pub fn is_special(&self, id: u32) -> bool {
        id == self.cls || id == self.sep || id == self.unk || id == self.pad
    }
}

/// Immutable WordPiece vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Whole words and leading segments
    prefix: CharTrie,
    /// Continuation segments, `##` marker stripped
    suffix: CharTrie,
    /// id → literal (with marker), for decoding
    tokens: Vec<CompactString>,
    special: SpecialTokens,
    lowercase: bool,
    normalization: NormalizationForm,
}

impl Vocabulary {
    /// Start building a vocabulary with the given preprocessing flags.
    pub fn builder(lowercase: bool, normalization: NormalizationForm) -> VocabularyBuilder {
        VocabularyBuilder::new(lowercase, normalization)
    }

    /// Reserved token ids.
    #[inline]
    pub fn special(&self) -> SpecialTokens {
        self.special
    }

    /// Whether input is lowercased before matching.
    #[inline]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Normalization form this vocabulary assumes.
    #[inline]
    pub fn normalization(&self) -> NormalizationForm {
        self.normalization
    }

    /// Total number of entries (including special tokens).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The literal for an id, as written in the vocabulary file
    /// (continuation tokens keep their `##` marker).
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|s| s.as_str())
    }

    /// Look up a token by its file literal; `##`-prefixed literals are
    /// routed to the continuation table.
    pub fn token_id(&self, token: &str) -> Option<u32> {
        match token.strip_prefix(CONTINUATION_PREFIX) {
            Some(rest) => self.suffix.get(rest),
            None => self.prefix.get(token),
        }
    }

    /// Longest whole-word or leading-segment match at the start of `span`.
    /// Returns the match length in code points and the token id.
    #[inline]
    pub fn longest_prefix(&self, span: &[char]) -> Option<(usize, u32)> {
        self.prefix.longest_match(span)
    }

    /// Longest continuation-segment match at the start of `span`.
    #[inline]
    pub fn longest_suffix(&self, span: &[char]) -> Option<(usize, u32)> {
        self.suffix.longest_match(span)
    }
}

/// Builder that assigns sequential ids and routes entries to the two
/// tries; [`VocabularyBuilder::build`] validates the reserved tokens.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    prefix: CharTrie,
    suffix: CharTrie,
    tokens: Vec<CompactString>,
    cls: Option<u32>,
    sep: Option<u32>,
    unk: Option<u32>,
    pad: Option<u32>,
    lowercase: bool,
    normalization: NormalizationForm,
}

impl VocabularyBuilder {
    /// Create a builder with the given preprocessing flags.
    pub fn new(lowercase: bool, normalization: NormalizationForm) -> Self {
        Self {
            lowercase,
            normalization,
            ..Self::default()
        }
    }

    /// Append a token literal; its id is the number of tokens pushed so
    /// far (the zero-based line number of a vocabulary file).
    pub fn push_token(&mut self, literal: &str) -> u32 {
        let id = self.tokens.len() as u32;
        match literal.strip_prefix(CONTINUATION_PREFIX) {
            Some(rest) => self.suffix.insert(rest, id),
            None => {
                self.prefix.insert(literal, id);
                match literal {
                    CLS_TOKEN => self.cls = Some(id),
                    SEP_TOKEN => self.sep = Some(id),
                    UNK_TOKEN => self.unk = Some(id),
                    PAD_TOKEN => self.pad = Some(id),
                    _ => {}
                }
            }
        }
        self.tokens.push(CompactString::new(literal));
        id
    }

    /// Finish building; fails unless all four reserved tokens were seen.
    pub fn build(self) -> Result<Vocabulary> {
        let special = SpecialTokens {
            cls: self.cls.ok_or_else(|| missing(CLS_TOKEN))?,
            sep: self.sep.ok_or_else(|| missing(SEP_TOKEN))?,
            unk: self.unk.ok_or_else(|| missing(UNK_TOKEN))?,
            pad: self.pad.ok_or_else(|| missing(PAD_TOKEN))?,
        };
        Ok(Vocabulary {
            prefix: self.prefix,
            suffix: self.suffix,
            tokens: self.tokens,
            special,
            lowercase: self.lowercase,
            normalization: self.normalization,
        })
    }
}

fn missing(literal: &str) -> TokenizerError {
    TokenizerError::VocabularyMalformed(format!("missing special token {literal}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_minimal() -> Vocabulary {
        let mut builder = Vocabulary::builder(true, NormalizationForm::NFD);
        for literal in [PAD_TOKEN, UNK_TOKEN, CLS_TOKEN, SEP_TOKEN, "play", "##ing"] {
            builder.push_token(literal);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_sequential_ids() {
        let vocab = build_minimal();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.special().pad, 0);
        assert_eq!(vocab.special().unk, 1);
        assert_eq!(vocab.special().cls, 2);
        assert_eq!(vocab.special().sep, 3);
        assert_eq!(vocab.token_id("play"), Some(4));
        assert_eq!(vocab.token_id("##ing"), Some(5));
    }

    #[test]
    fn test_continuation_routing() {
        let vocab = build_minimal();
        // "##ing" lives in the suffix table only; "ing" is not a word.
        assert_eq!(vocab.token_id("ing"), None);
        let span: Vec<char> = "ing".chars().collect();
        assert_eq!(vocab.longest_suffix(&span), Some((3, 5)));
        assert_eq!(vocab.longest_prefix(&span), None);
    }

    #[test]
    fn test_get_token_keeps_marker() {
        let vocab = build_minimal();
        assert_eq!(vocab.get_token(5), Some("##ing"));
        assert_eq!(vocab.get_token(4), Some("play"));
        assert_eq!(vocab.get_token(99), None);
    }

    #[test]
    fn test_missing_special_token_fails() {
        let mut builder = Vocabulary::builder(true, NormalizationForm::NFD);
        for literal in [PAD_TOKEN, UNK_TOKEN, CLS_TOKEN, "play"] {
            builder.push_token(literal);
        }
        let err = builder.build().unwrap_err();
        assert!(matches!(err, TokenizerError::VocabularyMalformed(_)));
        assert!(err.to_string().contains("[SEP]"));
    }

    #[test]
    fn test_is_special() {
        let vocab = build_minimal();
        assert!(vocab.special().is_special(0));
        assert!(vocab.special().is_special(3));
        assert!(!vocab.special().is_special(4));
    }

    #[test]
    fn test_flags_captured() {
        let vocab = build_minimal();
        assert!(vocab.lowercase());
        assert_eq!(vocab.normalization(), NormalizationForm::NFD);
    }
}
