//! Main tokenizer implementation.
//!
//! This module provides the high-level [`BertTokenizer`] that integrates
//! the pre-tokenizer, the WordPiece matcher, and special-token framing
//! into BERT-style model input: `input_ids`, `attention_mask`, and
//! `token_type_ids`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bertpiece_core::{
    NormalizationForm, Result, TokenizerError, Vocabulary, WordPieceMatcher, CONTINUATION_PREFIX,
};
use rayon::prelude::*;

use crate::io::{TokenizerConfig, VocabularyLoader};
use crate::pre_tokenizer::WordSplitter;

/// High-level WordPiece tokenizer.
///
/// Encoding is a pure function of the loaded vocabulary and the input
/// text; a tokenizer is freely shared across threads and every encode
/// call writes only into caller-provided or call-local storage.
pub struct BertTokenizer {
    /// Loaded vocabulary; encode fails until one is set
    vocab: Option<Arc<Vocabulary>>,
    /// Word splitter configured from the vocabulary's lowercase flag
    splitter: WordSplitter,
}

impl BertTokenizer {
    /// Create a tokenizer with no vocabulary. Every encode fails with
    /// `VocabularyNotLoaded` until [`Self::set_vocabulary`] is called.
    pub fn new() -> Self {
        Self {
            vocab: None,
            splitter: WordSplitter::default(),
        }
    }

    /// Create a tokenizer from a loaded vocabulary.
    pub fn with_vocabulary(vocab: Vocabulary) -> Self {
        let mut tokenizer = Self::new();
        tokenizer.set_vocabulary(vocab);
        tokenizer
    }

    /// Create a tokenizer builder.
    pub fn builder() -> BertTokenizerBuilder {
        BertTokenizerBuilder::new()
    }

    /// Load a tokenizer from a checkpoint directory (`vocab.txt` plus an
    /// optional `tokenizer_config.json`).
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Ok(Self::with_vocabulary(VocabularyLoader::load_dir(dir)?))
    }

    /// Install a vocabulary, replacing any previous one.
    pub fn set_vocabulary(&mut self, vocab: Vocabulary) {
        self.splitter = WordSplitter::new(vocab.lowercase());
        self.vocab = Some(Arc::new(vocab));
    }

    /// The loaded vocabulary, if any.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocab.as_deref()
    }

    /// Number of entries in the loaded vocabulary (0 when none).
    pub fn vocab_size(&self) -> usize {
        self.vocab.as_ref().map_or(0, |v| v.len())
    }

    fn loaded_vocab(&self) -> Result<&Vocabulary> {
        self.vocab
            .as_deref()
            .ok_or(TokenizerError::VocabularyNotLoaded)
    }

    /// Encode `text` into caller-provided sinks.
    ///
    /// Writes `[CLS] …ids… [SEP]` positionally into `input_ids`, then pads
    /// with `[PAD]` up to `pad_to` when given. The usable capacity is the
    /// shortest provided sink; a word whose decomposition does not fit in
    /// the remaining capacity is dropped whole and encoding stops there.
    /// Fills `attention_mask` (1 for content, 0 for padding) and
    /// `token_type_ids` (all 0) for the sinks the caller provided.
    ///
    /// Returns the total length `L` written; on error the sinks' contents
    /// are unspecified.
    pub fn encode_into(
        &self,
        text: &str,
        input_ids: &mut [u32],
        mut attention_mask: Option<&mut [u32]>,
        mut token_type_ids: Option<&mut [u32]>,
        pad_to: Option<usize>,
    ) -> Result<usize> {
        let vocab = self.loaded_vocab()?;

        let mut capacity = input_ids.len();
        if let Some(mask) = attention_mask.as_deref() {
            capacity = capacity.min(mask.len());
        }
        if let Some(types) = token_type_ids.as_deref() {
            capacity = capacity.min(types.len());
        }
        if capacity < 2 {
            return Err(TokenizerError::SinkTooSmall {
                capacity,
                required: 2,
            });
        }
        if let Some(pad) = pad_to {
            if pad > capacity {
                return Err(TokenizerError::SinkTooSmall {
                    capacity,
                    required: pad,
                });
            }
        }

        let special = vocab.special();
        input_ids[0] = special.cls;
        let mut pos = 1;

        // One slot stays reserved for [SEP]; words are all-or-nothing.
        let matcher = WordPieceMatcher::new(vocab);
        self.splitter.for_each_word(text, |word| {
            match matcher.encode_word(word, &mut input_ids[pos..capacity - 1]) {
                Some(written) => {
                    pos += written;
                    true
                }
                None => false,
            }
        });

        input_ids[pos] = special.sep;
        let content_len = pos + 1;

        let total_len = pad_to.map_or(content_len, |pad| pad.max(content_len));
        input_ids[content_len..total_len].fill(special.pad);
        if let Some(mask) = attention_mask.as_deref_mut() {
            mask[..content_len].fill(1);
            mask[content_len..total_len].fill(0);
        }
        if let Some(types) = token_type_ids.as_deref_mut() {
            types[..total_len].fill(0);
        }

        Ok(total_len)
    }

    /// Encode `text`, allocating all three output sequences.
    ///
    /// Content is truncated to `maximum_tokens` (including the frame);
    /// `pad_to` may exceed `maximum_tokens`, in which case the output is
    /// padding beyond it.
    pub fn encode(
        &self,
        text: &str,
        maximum_tokens: usize,
        pad_to: Option<usize>,
    ) -> Result<Encoding> {
        let vocab = self.loaded_vocab()?;
        let pad_id = vocab.special().pad;

        let alloc_len = maximum_tokens.max(pad_to.unwrap_or(0));
        let mut input_ids = vec![pad_id; alloc_len];
        let mut attention_mask = vec![0u32; alloc_len];
        let mut token_type_ids = vec![0u32; alloc_len];

        let content_len = self.encode_into(
            text,
            &mut input_ids[..maximum_tokens],
            Some(&mut attention_mask[..maximum_tokens]),
            Some(&mut token_type_ids[..maximum_tokens]),
            None,
        )?;

        let total_len = pad_to.map_or(content_len, |pad| pad.max(content_len));
        input_ids.truncate(total_len);
        attention_mask.truncate(total_len);
        token_type_ids.truncate(total_len);

        Ok(Encoding {
            input_ids,
            attention_mask,
            token_type_ids,
        })
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S>(
        &self,
        texts: &[S],
        maximum_tokens: usize,
        pad_to: Option<usize>,
    ) -> Result<Vec<Encoding>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref(), maximum_tokens, pad_to))
            .collect()
    }

    /// Encode a batch into flat sinks of shape `texts.len() × row_len`.
    ///
    /// Each input is written into its row and padded to the row width, so
    /// rows align into a rectangular array. Rows are encoded in parallel;
    /// workers write into disjoint row slices.
    pub fn encode_batch_into<S>(
        &self,
        texts: &[S],
        row_len: usize,
        input_ids: &mut [u32],
        attention_mask: &mut [u32],
        token_type_ids: &mut [u32],
    ) -> Result<()>
    where
        S: AsRef<str> + Sync,
    {
        if row_len < 2 {
            return Err(TokenizerError::SinkTooSmall {
                capacity: row_len,
                required: 2,
            });
        }
        let needed = texts.len() * row_len;
        let capacity = input_ids
            .len()
            .min(attention_mask.len())
            .min(token_type_ids.len());
        if capacity < needed {
            return Err(TokenizerError::SinkTooSmall {
                capacity,
                required: needed,
            });
        }

        input_ids[..needed]
            .par_chunks_mut(row_len)
            .zip(attention_mask[..needed].par_chunks_mut(row_len))
            .zip(token_type_ids[..needed].par_chunks_mut(row_len))
            .zip(texts.par_iter())
            .try_for_each(|(((ids, mask), types), text)| {
                self.encode_into(text.as_ref(), ids, Some(mask), Some(types), Some(row_len))
                    .map(|_| ())
            })
    }

    /// Decode token ids back to text.
    ///
    /// Continuation tokens are appended to the previous piece without a
    /// space; other pieces are joined with single spaces. Ids outside the
    /// vocabulary are skipped.
    pub fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String> {
        let vocab = self.loaded_vocab()?;
        let special = vocab.special();

        let mut out = String::new();
        for &id in ids {
            if skip_special_tokens && special.is_special(id) {
                continue;
            }
            let Some(token) = vocab.get_token(id) else {
                continue;
            };
            if let Some(rest) = token.strip_prefix(CONTINUATION_PREFIX) {
                out.push_str(rest);
            } else {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(token);
            }
        }
        Ok(out)
    }
}

impl Default for BertTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct BertTokenizerBuilder {
    vocab_file: Option<PathBuf>,
    config: TokenizerConfig,
}

impl BertTokenizerBuilder {
    /// Create a new builder with the uncased defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `vocab.txt` path to load from.
    pub fn vocab_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vocab_file = Some(path.into());
        self
    }

    /// Select input case folding.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.do_lower_case = lowercase;
        self
    }

    /// Select the normalization form the vocabulary assumes.
    pub fn normalization(mut self, form: NormalizationForm) -> Self {
        self.config.normalization_form = form;
        self
    }

    /// Build the tokenizer, loading the vocabulary when a path was given.
    pub fn build(self) -> Result<BertTokenizer> {
        match self.vocab_file {
            Some(path) => {
                let vocab = VocabularyLoader::load_txt(&path, &self.config)?;
                Ok(BertTokenizer::with_vocabulary(vocab))
            }
            None => Ok(BertTokenizer::new()),
        }
    }
}

/// Result of an allocating encode: three parallel sequences of equal
/// length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Token ids, `[CLS] … [SEP]` then padding
    pub input_ids: Vec<u32>,
    /// 1 for content positions, 0 for padding
    pub attention_mask: Vec<u32>,
    /// All zeros (single-sequence input)
    pub token_type_ids: Vec<u32>,
}

impl Encoding {
    /// Total length `L`, padding included.
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    /// Check if the encoding is empty (never true for a successful
    /// encode, which holds at least `[CLS] [SEP]`).
    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// Content length `N`: positions before padding.
    pub fn content_len(&self) -> usize {
        self.attention_mask
            .iter()
            .take_while(|&&mask| mask == 1)
            .count()
    }
}
