//! Word splitting for pre-tokenization.
//!
//! Walks the input once and yields cleaned word spans to a callback:
//! control-class scalars are dropped, whitespace separates words,
//! punctuation and CJK ideographs become single-scalar words, and the
//! remaining text is optionally case-folded. The callback returns whether
//! to continue; the walk stops early when it returns false.

use bertpiece_core::unicode;

/// Callback-driven word splitter.
#[derive(Debug, Clone, Copy)]
pub struct WordSplitter {
    lowercase: bool,
}

impl WordSplitter {
    /// Create a splitter; `lowercase` selects invariant case folding of
    /// word characters.
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    /// Whether case folding is applied.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Walk `text` and deliver each non-empty word span, in input order.
    ///
    /// The span is valid only for the duration of the callback; the
    /// backing buffer is reused across words. Returning `false` from the
    /// callback stops the walk.
    pub fn for_each_word<F>(&self, text: &str, mut visit: F)
    where
        F: FnMut(&[char]) -> bool,
    {
        fn flush<F>(word: &mut Vec<char>, visit: &mut F) -> bool
        where
            F: FnMut(&[char]) -> bool,
        {
            if word.is_empty() {
                return true;
            }
            let keep_going = visit(word);
            word.clear();
            keep_going
        }

        let mut word: Vec<char> = Vec::with_capacity(16);
        for c in text.chars() {
            if unicode::is_ignored(c) {
                continue;
            }
            if unicode::is_whitespace(c) {
                if !flush(&mut word, &mut visit) {
                    return;
                }
                continue;
            }
            if unicode::is_punctuation(c) || unicode::is_cjk(c) {
                if !flush(&mut word, &mut visit) {
                    return;
                }
                if !visit(&[c]) {
                    return;
                }
                continue;
            }
            if self.lowercase {
                word.extend(c.to_lowercase());
            } else {
                word.push(c);
            }
        }
        flush(&mut word, &mut visit);
    }
}

impl Default for WordSplitter {
    fn default() -> Self {
        Self::new(true)
    }
}
