//! File formats for tokenizer loading and saving.
//!
//! A tokenizer on disk is a `vocab.txt` (one token per line, zero-based
//! line number is the token id) plus an optional `tokenizer_config.json`
//! sidecar carrying the preprocessing flags.

use bertpiece_core::NormalizationForm;
use serde::{Deserialize, Serialize};

/// Vocabulary file name inside a tokenizer directory.
pub const VOCAB_FILE: &str = "vocab.txt";

/// Configuration sidecar file name inside a tokenizer directory.
pub const CONFIG_FILE: &str = "tokenizer_config.json";

/// Preprocessing flags captured at load time.
///
/// Mirrors the sidecar JSON; unknown fields in checkpoint configs are
/// ignored, absent fields take the uncased defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Lowercase input before matching
    #[serde(default = "default_lowercase")]
    pub do_lower_case: bool,
    /// Normalization form the vocabulary assumes
    #[serde(default)]
    pub normalization_form: NormalizationForm,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            do_lower_case: true,
            normalization_form: NormalizationForm::default(),
        }
    }
}

fn default_lowercase() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenizerConfig::default();
        assert!(config.do_lower_case);
        assert_eq!(config.normalization_form, NormalizationForm::NFD);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TokenizerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.do_lower_case);
        assert_eq!(config.normalization_form, NormalizationForm::NFD);

        let config: TokenizerConfig =
            serde_json::from_str(r#"{"do_lower_case": false}"#).unwrap();
        assert!(!config.do_lower_case);
    }

    #[test]
    fn test_deserialize_form_names() {
        let config: TokenizerConfig =
            serde_json::from_str(r#"{"normalization_form": "NFKC"}"#).unwrap();
        assert_eq!(config.normalization_form, NormalizationForm::NFKC);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let config: TokenizerConfig = serde_json::from_str(
            r#"{"do_lower_case": true, "model_max_length": 512, "tokenizer_class": "BertTokenizer"}"#,
        )
        .unwrap();
        assert!(config.do_lower_case);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TokenizerConfig {
            do_lower_case: false,
            normalization_form: NormalizationForm::NFC,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TokenizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
