//! Save functionality for loaded vocabularies.
//!
//! Writes a checkpoint directory that round-trips with
//! [`VocabularyLoader`](super::load::VocabularyLoader): `vocab.txt` with
//! one token per line and the `tokenizer_config.json` sidecar.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use bertpiece_core::{Result, TokenizerError, Vocabulary};

use super::format::{TokenizerConfig, CONFIG_FILE, VOCAB_FILE};

/// Vocabulary saver - writes checkpoint files.
pub struct TokenizerSaver<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a saver for a loaded vocabulary.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Write `vocab.txt` and `tokenizer_config.json` into `dir`, creating
    /// the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|err| TokenizerError::Io {
            path: dir.to_path_buf(),
            err,
        })?;

        let vocab_path = dir.join(VOCAB_FILE);
        let io_err = |err| TokenizerError::Io {
            path: vocab_path.clone(),
            err,
        };
        let file = File::create(&vocab_path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for id in 0..self.vocab.len() as u32 {
            // Every id below len has a literal; ids are assigned densely.
            let token = self.vocab.get_token(id).unwrap_or_default();
            writeln!(writer, "{token}").map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        let config = TokenizerConfig {
            do_lower_case: self.vocab.lowercase(),
            normalization_form: self.vocab.normalization(),
        };
        let config_path = dir.join(CONFIG_FILE);
        let file = File::create(&config_path).map_err(|err| TokenizerError::Io {
            path: config_path.clone(),
            err,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), &config)?;

        Ok(())
    }
}
