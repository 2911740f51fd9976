//! Configuration loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::choice::DEFAULT_QUESTION_COUNT;
use crate::error::{Result, VocabError};

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "vocab.toml";

/// Environment variable that overrides `words_file`.
pub const WORDS_FILE_ENV: &str = "VOCAB_WORDS_FILE";

/// Top-level vocab configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabConfig {
    /// Path of the word file.
    #[serde(default = "default_words_file")]
    pub words_file: PathBuf,
    /// Questions per multiple-choice quiz.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Maximum entries listed by `review`.
    #[serde(default = "default_review_limit")]
    pub review_limit: usize,
}

fn default_words_file() -> PathBuf {
    PathBuf::from("words.txt")
}
fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}
fn default_review_limit() -> usize {
    600
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            question_count: default_question_count(),
            review_limit: default_review_limit(),
        }
    }
}

impl VocabConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str, source: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| VocabError::Config {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Render as TOML, used by `vocab init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| VocabError::Config {
            path: PathBuf::from(LOCAL_CONFIG_FILE),
            message: e.to_string(),
        })
    }
}

/// Load config from well-known paths.
///
/// Search order:
/// 1. `vocab.toml` in the current directory
/// 2. `~/.config/vocab/config.toml`
///
/// Environment variable override: `VOCAB_WORDS_FILE`.
pub fn load_config() -> Result<VocabConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<VocabConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(VocabError::Config {
                path: p.to_path_buf(),
                message: "config file not found".into(),
            })
        }
        None => {
            let local = PathBuf::from(LOCAL_CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path).map_err(|e| VocabError::Config {
                path: path.clone(),
                message: e.to_string(),
            })?;
            tracing::debug!("using config {}", path.display());
            VocabConfig::from_toml(&content, &path)?
        }
        None => VocabConfig::default(),
    };

    if let Ok(words_file) = std::env::var(WORDS_FILE_ENV) {
        if words_file.trim().is_empty() {
            tracing::warn!("ignoring empty {WORDS_FILE_ENV}");
        } else {
            config.words_file = PathBuf::from(words_file);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("vocab"))
}
