//! Greedy WordPiece subword matching.
//!
//! Decomposes one pre-tokenized word span into subword ids: longest
//! leading-segment match against the prefix trie, then repeated longest
//! continuation matches against the suffix trie. A word that cannot be
//! fully decomposed goes through a bounded fallback cascade (re-clean,
//! re-normalize, strip diacritics) before it becomes `[UNK]`.

use std::borrow::Cow;

use crate::core::vocab::Vocabulary;
use crate::normalize::Normalizer;
use crate::unicode;

/// Words longer than this are not decomposed and map straight to `[UNK]`,
/// matching the reference tokenizer's per-word character cap.
const MAX_WORD_CHARS: usize = 100;

/// Outcome of one decomposition attempt.
enum Decompose {
    /// Fully decomposed; this many ids were written.
    Fits(usize),
    /// The decomposition needs more sink capacity than remains.
    Overflow,
    /// Some segment has no match; the word is unknown as given.
    Unknown,
}

/// Matcher borrowing an immutable vocabulary; cheap to construct, one per
/// encode call.
pub struct WordPieceMatcher<'v> {
    vocab: &'v Vocabulary,
    normalizer: Normalizer,
}

impl<'v> WordPieceMatcher<'v> {
    /// Create a matcher for the given vocabulary.
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            normalizer: Normalizer::new(vocab.normalization()),
        }
    }

    /// Encode one word span into `sink`, returning the number of ids
    /// written. `None` means the decomposition did not fit in the sink;
    /// nothing usable was emitted and the caller drops the whole word.
    pub fn encode_word(&self, word: &[char], sink: &mut [u32]) -> Option<usize> {
        if word.is_empty() {
            return Some(0);
        }
        if word.len() > MAX_WORD_CHARS {
            return self.emit_unknown(sink);
        }
        match self.decompose(word, sink) {
            Decompose::Fits(written) => Some(written),
            Decompose::Overflow => None,
            Decompose::Unknown => self.encode_fallback(word, sink),
        }
    }

    /// Fallback cascade for words the vocabulary does not cover as given.
    /// Each stage runs once, on the output of the previous stage, and only
    /// retries the match when it actually changed the word.
    fn encode_fallback(&self, word: &[char], sink: &mut [u32]) -> Option<usize> {
        // Re-clean. Encoder input arrives pre-cleaned, but the matcher
        // also accepts raw spans.
        let mut current: Vec<char> = word.to_vec();
        if current.iter().any(|&c| unicode::is_ignored(c)) {
            current.retain(|&c| !unicode::is_ignored(c));
            if current.is_empty() {
                return Some(0);
            }
            match self.decompose(&current, sink) {
                Decompose::Fits(written) => return Some(written),
                Decompose::Overflow => return None,
                Decompose::Unknown => {}
            }
        }

        // Re-normalize to the configured form.
        let mut text: String = current.iter().collect();
        if !self.normalizer.is_normalized(&text) {
            let normalized = self.normalizer.normalize(&text).into_owned();
            if normalized != text {
                let span: Vec<char> = normalized.chars().collect();
                match self.decompose(&span, sink) {
                    Decompose::Fits(written) => return Some(written),
                    Decompose::Overflow => return None,
                    Decompose::Unknown => {}
                }
                text = normalized;
            }
        }

        // Strip diacritics.
        if let Cow::Owned(stripped) = self.normalizer.strip_diacritics(&text) {
            if stripped != text {
                let span: Vec<char> = stripped.chars().collect();
                match self.decompose(&span, sink) {
                    Decompose::Fits(written) => return Some(written),
                    Decompose::Overflow => return None,
                    Decompose::Unknown => {}
                }
            }
        }

        self.emit_unknown(sink)
    }

    fn emit_unknown(&self, sink: &mut [u32]) -> Option<usize> {
        if sink.is_empty() {
            return None;
        }
        sink[0] = self.vocab.special().unk;
        Some(1)
    }

    /// One greedy longest-match pass. On `Unknown` the sink may hold a
    /// partial write; the caller either retries from index 0 or discards.
    fn decompose(&self, word: &[char], sink: &mut [u32]) -> Decompose {
        let Some((prefix_len, prefix_id)) = self.vocab.longest_prefix(word) else {
            return Decompose::Unknown;
        };
        if sink.is_empty() {
            return Decompose::Overflow;
        }
        sink[0] = prefix_id;
        let mut written = 1;
        let mut remaining = &word[prefix_len..];
        while !remaining.is_empty() {
            let Some((seg_len, seg_id)) = self.vocab.longest_suffix(remaining) else {
                return Decompose::Unknown;
            };
            if written == sink.len() {
                return Decompose::Overflow;
            }
            sink[written] = seg_id;
            written += 1;
            remaining = &remaining[seg_len..];
        }
        Decompose::Fits(written)
    }
}
