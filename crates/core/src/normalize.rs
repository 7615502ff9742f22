//! Unicode normalization and diacritic stripping.
//!
//! Normalization to NFC/NFD/NFKC/NFKD plus the accent-stripping pass used
//! by uncased vocabularies. Both operations return [`Cow`] and skip
//! allocation entirely when the input already satisfies the target form.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::{
    is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick, IsNormalized,
    UnicodeNormalization,
};

use crate::unicode::is_non_spacing_mark;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition
    NFC,
    /// Canonical decomposition (the form uncased BERT vocabularies assume)
    #[default]
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
}

/// Unicode normalizer.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    form: NormalizationForm,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    /// The target normalization form.
    pub fn form(&self) -> NormalizationForm {
        self.form
    }

    /// Check whether text is already in the target form.
    ///
    /// Uses the quick-check property; a `Maybe` answer is treated as "no"
    /// and the caller re-normalizes, which is harmless.
    pub fn is_normalized(&self, text: &str) -> bool {
        let quick = match self.form {
            NormalizationForm::NFC => is_nfc_quick(text.chars()),
            NormalizationForm::NFD => is_nfd_quick(text.chars()),
            NormalizationForm::NFKC => is_nfkc_quick(text.chars()),
            NormalizationForm::NFKD => is_nfkd_quick(text.chars()),
        };
        quick == IsNormalized::Yes
    }

    /// Normalize text to the target form, borrowing when already normalized.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.is_normalized(text) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(self.apply(text.chars()))
    }

    /// Strip diacritics and recompose into the target form.
    ///
    /// Decomposes to NFD, drops every non-spacing mark, and lower-cases any
    /// remaining letter whose lowercase form differs (case mappings that
    /// only surface after decomposition are not caught by an earlier
    /// lowercase pass). Returns the input unchanged when it contains no
    /// marks and no case-changing letters after decomposition.
    pub fn strip_diacritics<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let untouched = !text
            .chars()
            .nfd()
            .any(|c| is_non_spacing_mark(c) || changes_on_lowercase(c));
        if untouched {
            return Cow::Borrowed(text);
        }

        let stripped: String = text
            .chars()
            .nfd()
            .filter(|&c| !is_non_spacing_mark(c))
            .flat_map(char::to_lowercase)
            .collect();

        // Recompose into the target form; lowercase mappings can emit
        // sequences that are not normalized.
        if self.is_normalized(&stripped) {
            Cow::Owned(stripped)
        } else {
            Cow::Owned(self.apply(stripped.chars()))
        }
    }

    fn apply(&self, chars: impl Iterator<Item = char>) -> String {
        match self.form {
            NormalizationForm::NFC => chars.nfc().collect(),
            NormalizationForm::NFD => chars.nfd().collect(),
            NormalizationForm::NFKC => chars.nfkc().collect(),
            NormalizationForm::NFKD => chars.nfkd().collect(),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizationForm::default())
    }
}

/// True when lowercasing `c` yields anything other than `c` itself.
/// Catches uppercase and titlecase letters alike.
fn changes_on_lowercase(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}
