//! Error types for the vocabulary core.
//!
//! Validation, empty-pool and invalid-choice errors are meant to be shown to
//! the user as plain messages. File and import errors carry the underlying
//! I/O cause so the caller can decide whether to abort.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout `vocab-core`.
pub type Result<T, E = VocabError> = std::result::Result<T, E>;

/// Errors that can occur while reading, writing, or quizzing on the word list.
#[derive(Debug, Error)]
pub enum VocabError {
    /// A word was empty after trimming.
    #[error("Word cannot be empty.")]
    EmptyWord,

    /// The word is already in the store (compared case-insensitively).
    #[error("That word already exists: {0}")]
    DuplicateWord(String),

    /// A word or definition would span more than one line of the store.
    #[error("Words and definitions must fit on one line.")]
    LineBreak,

    /// The backing store could not be created, read, or appended to.
    #[error("cannot access word file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pack could not be read. Words appended before the failure are kept.
    #[error("Could not load pack {} ({added} word(s) added before the failure): {source}", path.display())]
    Import {
        path: PathBuf,
        added: usize,
        #[source]
        source: io::Error,
    },

    /// No entry has a real definition to quiz on.
    #[error("No definitions found to quiz on. Add lines like:  word - definition")]
    EmptyPool,

    /// A multiple-choice pool has fewer distinct pairs than choices per question.
    #[error("Need at least {needed} distinct word/definition pairs for a multiple-choice quiz, found {available}.")]
    PoolTooSmall { needed: usize, available: usize },

    /// A multiple-choice selection was not a number in range.
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    /// `submit` was called without a question awaiting an answer.
    #[error("no question is awaiting an answer")]
    NoActiveQuestion,

    /// The quiz session has already been finished.
    #[error("quiz session is finished")]
    SessionFinished,

    /// The configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl VocabError {
    /// Returns `true` for user input problems that never abort a session.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VocabError::EmptyWord | VocabError::DuplicateWord(_) | VocabError::LineBreak
        )
    }

    /// Returns `true` if the error is recoverable by showing its message and
    /// carrying on (validation, empty pool, bad selection, tiny pool).
    pub fn is_recoverable(&self) -> bool {
        self.is_validation()
            || matches!(
                self,
                VocabError::EmptyPool
                    | VocabError::InvalidChoice(_)
                    | VocabError::PoolTooSmall { .. }
            )
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VocabError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
