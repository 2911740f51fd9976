//! Core data model types for vocab.
//!
//! An [`Entry`] pairs a word with a [`Definition`]. Words keep their case for
//! display but are compared through their lower-cased [`Entry::key`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text written to disk for a word that has no definition yet.
pub const PENDING_SENTINEL: &str = "TBD";

/// The definition half of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    /// No real definition yet. Excluded from quizzes and lookups.
    Pending,
    /// A real definition.
    Text(String),
}

impl Definition {
    /// Build a definition from free text. Blank text becomes `Pending`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Definition::Pending
        } else {
            Definition::Text(trimmed.to_string())
        }
    }

    /// Read-path constructor: also maps the on-disk sentinel to `Pending`.
    pub fn from_stored(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(PENDING_SENTINEL) {
            Definition::Pending
        } else {
            Definition::from_raw(trimmed)
        }
    }

    /// Returns `true` if this is a real definition.
    pub fn is_real(&self) -> bool {
        matches!(self, Definition::Text(_))
    }

    /// The real definition text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Definition::Text(t) => Some(t),
            Definition::Pending => None,
        }
    }

    /// The form written to the store file.
    pub fn as_stored(&self) -> &str {
        self.text().unwrap_or(PENDING_SENTINEL)
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored())
    }
}

/// A single word/definition record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// The word, case preserved.
    pub word: String,
    /// Its definition, possibly pending.
    pub definition: Definition,
}

impl Entry {
    pub fn new(word: impl Into<String>, definition: Definition) -> Self {
        Self {
            word: word.into(),
            definition,
        }
    }

    /// Shorthand for an entry with a real definition.
    pub fn defined(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::new(word, Definition::Text(definition.into()))
    }

    /// Identity key: the lower-cased word.
    pub fn key(&self) -> String {
        word_key(&self.word)
    }
}

/// Lower-cased, trimmed identity key for a word.
pub fn word_key(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_definition_is_pending() {
        assert_eq!(Definition::from_raw("   "), Definition::Pending);
        assert_eq!(
            Definition::from_raw(" to lessen "),
            Definition::Text("to lessen".into())
        );
    }

    #[test]
    fn stored_sentinel_is_pending() {
        assert_eq!(Definition::from_stored("TBD"), Definition::Pending);
        assert_eq!(Definition::from_stored("tbd"), Definition::Pending);
        assert!(Definition::from_stored("TBD later").is_real());
    }

    #[test]
    fn pending_renders_as_sentinel() {
        assert_eq!(Definition::Pending.as_stored(), "TBD");
        assert_eq!(Definition::Pending.text(), None);
        assert_eq!(Definition::Text("kind".into()).to_string(), "kind");
    }

    #[test]
    fn key_ignores_case() {
        assert_eq!(Entry::defined("Abate", "x").key(), "abate");
        assert_eq!(word_key("  LUCID "), "lucid");
    }

    #[test]
    fn entry_serializes_pending_as_null() {
        let json = serde_json::to_string(&Entry::new("abate", Definition::Pending)).unwrap();
        assert_eq!(json, r#"{"word":"abate","definition":null}"#);
        let json = serde_json::to_string(&Entry::defined("abate", "to lessen")).unwrap();
        assert_eq!(json, r#"{"word":"abate","definition":"to lessen"}"#);
    }
}
