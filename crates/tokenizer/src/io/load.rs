//! Load functionality for pre-trained vocabularies.
//!
//! Reads the line-oriented `vocab.txt` format used by BERT-family
//! checkpoints, with an optional `tokenizer_config.json` sidecar selecting
//! the preprocessing flags.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use bertpiece_core::{Result, TokenizerError, Vocabulary};
use tracing::debug;

use super::format::{TokenizerConfig, CONFIG_FILE, VOCAB_FILE};

/// Vocabulary loader - handles loading from checkpoint files.
pub struct VocabularyLoader;

impl VocabularyLoader {
    /// Parse vocabulary text: one token per line, the zero-based line
    /// number is the token id, `##` marks continuation tokens.
    ///
    /// Fails with `VocabularyMalformed` unless all four of `[CLS]`,
    /// `[SEP]`, `[UNK]`, `[PAD]` are present.
    pub fn parse_txt(contents: &str, config: &TokenizerConfig) -> Result<Vocabulary> {
        let mut builder =
            Vocabulary::builder(config.do_lower_case, config.normalization_form);
        for line in contents.lines() {
            builder.push_token(line);
        }
        let vocab = builder.build()?;

        let special = vocab.special();
        debug!(
            vocab_size = vocab.len(),
            cls_id = special.cls,
            sep_id = special.sep,
            unk_id = special.unk,
            pad_id = special.pad,
            lowercase = vocab.lowercase(),
            "vocabulary loaded"
        );
        Ok(vocab)
    }

    /// Read a vocabulary from any buffered reader, e.g. an embedded
    /// resource or a decompression stream. Read failures surface as I/O
    /// errors without path context.
    pub fn read_txt<R: BufRead>(mut reader: R, config: &TokenizerConfig) -> Result<Vocabulary> {
        let mut contents = String::new();
        reader
            .read_to_string(&mut contents)
            .map_err(|err| TokenizerError::Io {
                path: PathBuf::new(),
                err,
            })?;
        Self::parse_txt(&contents, config)
    }

    /// Load a vocabulary from a `vocab.txt` file.
    pub fn load_txt(path: &Path, config: &TokenizerConfig) -> Result<Vocabulary> {
        let contents = fs::read_to_string(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Self::parse_txt(&contents, config)
    }

    /// Load from a checkpoint directory: `vocab.txt` plus an optional
    /// `tokenizer_config.json`. An absent sidecar means the uncased
    /// defaults.
    pub fn load_dir(dir: &Path) -> Result<Vocabulary> {
        let config_path = dir.join(CONFIG_FILE);
        let config = if config_path.is_file() {
            let raw = fs::read_to_string(&config_path).map_err(|err| TokenizerError::Io {
                path: config_path.clone(),
                err,
            })?;
            serde_json::from_str(&raw)?
        } else {
            TokenizerConfig::default()
        };

        Self::load_txt(&dir.join(VOCAB_FILE), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bertpiece_core::NormalizationForm;

    const VOCAB_TXT: &str = "[PAD]\n[UNK]\n[CLS]\n[SEP]\nplay\n##ing\n";

    #[test]
    fn test_parse_txt_line_numbers_are_ids() {
        let vocab =
            VocabularyLoader::parse_txt(VOCAB_TXT, &TokenizerConfig::default()).unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.special().pad, 0);
        assert_eq!(vocab.special().unk, 1);
        assert_eq!(vocab.special().cls, 2);
        assert_eq!(vocab.special().sep, 3);
        assert_eq!(vocab.token_id("play"), Some(4));
        assert_eq!(vocab.token_id("##ing"), Some(5));
    }

    #[test]
    fn test_parse_txt_missing_special_fails() {
        let err = VocabularyLoader::parse_txt(
            "[PAD]\n[UNK]\n[CLS]\nplay\n",
            &TokenizerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TokenizerError::VocabularyMalformed(_)));
    }

    #[test]
    fn test_read_txt_from_reader() {
        let reader = std::io::Cursor::new(VOCAB_TXT.as_bytes());
        let vocab =
            VocabularyLoader::read_txt(reader, &TokenizerConfig::default()).unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.token_id("##ing"), Some(5));
    }

    #[test]
    fn test_parse_txt_crlf() {
        let vocab = VocabularyLoader::parse_txt(
            "[PAD]\r\n[UNK]\r\n[CLS]\r\n[SEP]\r\nplay\r\n",
            &TokenizerConfig::default(),
        )
        .unwrap();
        assert_eq!(vocab.token_id("play"), Some(4));
    }

    #[test]
    fn test_parse_txt_applies_config() {
        let config = TokenizerConfig {
            do_lower_case: false,
            normalization_form: NormalizationForm::NFC,
        };
        let vocab = VocabularyLoader::parse_txt(VOCAB_TXT, &config).unwrap();
        assert!(!vocab.lowercase());
        assert_eq!(vocab.normalization(), NormalizationForm::NFC);
    }

    #[test]
    fn test_load_dir_roundtrip() {
        let temp_dir = std::env::temp_dir().join("bertpiece_test_load_dir");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join(VOCAB_FILE), VOCAB_TXT).unwrap();
        std::fs::write(
            temp_dir.join(CONFIG_FILE),
            r#"{"do_lower_case": false, "normalization_form": "NFC"}"#,
        )
        .unwrap();

        let vocab = VocabularyLoader::load_dir(&temp_dir).unwrap();
        assert_eq!(vocab.len(), 6);
        assert!(!vocab.lowercase());
        assert_eq!(vocab.normalization(), NormalizationForm::NFC);

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_load_dir_without_sidecar_uses_defaults() {
        let temp_dir = std::env::temp_dir().join("bertpiece_test_load_defaults");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join(VOCAB_FILE), VOCAB_TXT).unwrap();

        let vocab = VocabularyLoader::load_dir(&temp_dir).unwrap();
        assert!(vocab.lowercase());
        assert_eq!(vocab.normalization(), NormalizationForm::NFD);

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_load_txt_missing_file() {
        let err = VocabularyLoader::load_txt(
            Path::new("/nonexistent/vocab.txt"),
            &TokenizerConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }
}
