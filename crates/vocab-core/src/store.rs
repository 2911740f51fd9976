//! The pair store: a plain-text word file, one entry per line.
//!
//! The file is the only source of truth. Every [`PairStore::load`] re-reads
//! and re-parses the whole file, and writes only ever append one line.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, VocabError};
use crate::model::{word_key, Definition, Entry};
use crate::parser::{format_line, has_separator, parse_line, parse_line_with, SeparatorMode};

/// Handle to a word file on disk. Holds no cached entries.
#[derive(Debug, Clone)]
pub struct PairStore {
    path: PathBuf,
}

impl PairStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty backing file (and its parent directories) if missing.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| VocabError::file_access(&self.path, e))?;
        }
        fs::write(&self.path, "").map_err(|e| VocabError::file_access(&self.path, e))?;
        tracing::debug!("created empty word file {}", self.path.display());
        Ok(())
    }

    /// Load every entry, deduplicated by key with the first occurrence kept.
    pub fn load(&self) -> Result<Vec<Entry>> {
        self.ensure_exists()?;
        let content =
            fs::read_to_string(&self.path).map_err(|e| VocabError::file_access(&self.path, e))?;

        let entries = entries_from_str(&content);
        tracing::debug!(
            "loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Append a new word. A missing, blank or `TBD` definition is stored as
    /// pending, so the returned entry matches what a later load reads back.
    ///
    /// Nothing is written when the word is blank, already present, or either
    /// part contains a line break.
    pub fn save(&self, word: &str, definition: Option<&str>) -> Result<Entry> {
        let definition = definition.unwrap_or_default();
        if [word, definition].iter().any(|s| s.contains(['\n', '\r'])) {
            return Err(VocabError::LineBreak);
        }
        let word = word.trim();
        if word.is_empty() {
            return Err(VocabError::EmptyWord);
        }
        if self.contains(word)? {
            return Err(VocabError::DuplicateWord(word.to_string()));
        }

        let entry = Entry::new(word, Definition::from_stored(definition));
        self.append(&entry)?;
        Ok(entry)
    }

    /// Whether a word is present, ignoring case.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let key = word_key(word);
        Ok(self.load()?.iter().any(|e| e.key() == key))
    }

    /// First real definition stored for `word`, ignoring case.
    pub fn find_definition(&self, word: &str) -> Result<Option<String>> {
        let key = word_key(word);
        Ok(self
            .load()?
            .into_iter()
            .find(|e| e.key() == key && e.definition.is_real())
            .and_then(|e| e.definition.text().map(str::to_string)))
    }

    /// Append one canonical line without any duplicate check.
    pub(crate) fn append(&self, entry: &Entry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| VocabError::file_access(&self.path, e))?;

        let line = format_line(&entry.word, entry.definition.as_stored());
        writeln!(file, "{line}").map_err(|e| VocabError::file_access(&self.path, e))?;
        tracing::info!("appended \"{}\" to {}", entry.word, self.path.display());
        Ok(())
    }
}

/// Parse store-format text into deduplicated entries.
pub fn entries_from_str(content: &str) -> Vec<Entry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (word, definition) = parse_line(line);
        let entry = Entry::new(word, Definition::from_stored(&definition));
        if seen.insert(entry.key()) {
            entries.push(entry);
        }
    }

    entries
}

/// Read a word list for the multiple-choice quiz.
///
/// Uses the bare-colon format (`word:definition`). Lines without a colon, or
/// with an empty word or definition, are skipped. No deduplication is done.
pub fn load_word_list(path: &Path) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path).map_err(|e| VocabError::file_access(path, e))?;

    let entries: Vec<Entry> = content
        .lines()
        .map(str::trim)
        .filter(|line| has_separator(line, SeparatorMode::BareColon))
        .filter_map(|line| {
            let (word, definition) = parse_line_with(line, SeparatorMode::BareColon);
            if word.is_empty() || definition.is_empty() {
                None
            } else {
                Some(Entry::defined(word, definition))
            }
        })
        .collect();

    tracing::debug!("read {} word-list entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, PairStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = PairStore::new(dir.path().join("words.txt"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_created_empty() {
        let (_dir, store) = temp_store();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn ensure_exists_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = PairStore::new(dir.path().join("nested/deeper/words.txt"));
        store.ensure_exists().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn load_dedups_first_wins() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            "Abate - to lessen\n\n   \nabate - to reduce\nlucid \u{2013} clear\n",
        )
        .unwrap();

        let entries = store.load().unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::defined("Abate", "to lessen"),
                Entry::defined("lucid", "clear"),
            ]
        );
    }

    #[test]
    fn load_normalizes_missing_definition() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "gregarious\ncandid - TBD\n").unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.definition == Definition::Pending));
    }

    #[test]
    fn load_reflects_external_edits() {
        let (_dir, store) = temp_store();
        store.save("abate", Some("to lessen")).unwrap();
        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        writeln!(file, "lucid - clear").unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn save_then_load() {
        let (_dir, store) = temp_store();
        let saved = store.save("abate", Some("to lessen")).unwrap();
        assert_eq!(saved, Entry::defined("abate", "to lessen"));

        assert_eq!(store.load().unwrap(), vec![Entry::defined("abate", "to lessen")]);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "abate - to lessen\n"
        );
    }

    #[test]
    fn save_duplicate_is_rejected() {
        let (_dir, store) = temp_store();
        store.save("abate", Some("to lessen")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.save("ABATE", Some("something else")).unwrap_err();
        assert!(matches!(err, VocabError::DuplicateWord(_)));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn save_empty_word_is_rejected() {
        let (_dir, store) = temp_store();
        let err = store.save("   ", Some("x")).unwrap_err();
        assert!(matches!(err, VocabError::EmptyWord));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_without_definition_writes_sentinel() {
        let (_dir, store) = temp_store();
        store.save("  frugal ", None).unwrap();
        store.save("lucid", Some("  ")).unwrap();
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "frugal - TBD\nlucid - TBD\n"
        );
    }

    #[test]
    fn save_rejects_line_breaks() {
        let (_dir, store) = temp_store();
        store.save("abate", Some("to lessen")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        for (word, definition) in [
            ("lucid\nabate", Some("x")),
            ("lucid", Some("clear\r\nfrugal - thrifty")),
            ("candid\r", None),
        ] {
            let err = store.save(word, definition).unwrap_err();
            assert!(matches!(err, VocabError::LineBreak));
            assert!(err.is_validation());
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_sentinel_definition_returns_pending() {
        let (_dir, store) = temp_store();
        let saved = store.save("gregarious", Some("tbd")).unwrap();
        assert_eq!(saved.definition, Definition::Pending);
        assert_eq!(store.load().unwrap(), vec![saved]);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "gregarious - TBD\n"
        );
    }

    #[test]
    fn find_definition_skips_pending() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "abate - TBD\nlucid - clear\n").unwrap();

        assert_eq!(store.find_definition("abate").unwrap(), None);
        assert_eq!(store.find_definition("LUCID").unwrap(), Some("clear".into()));
        assert_eq!(store.find_definition("missing").unwrap(), None);
    }

    #[test]
    fn contains_ignores_case() {
        let (_dir, store) = temp_store();
        store.save("Lucid", Some("clear")).unwrap();
        assert!(store.contains("lucid").unwrap());
        assert!(!store.contains("abate").unwrap());
    }

    #[test]
    fn invalid_utf8_is_file_access_error() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), b"fo\xff\xfe").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            VocabError::FileAccess { .. }
        ));
    }

    #[test]
    fn word_list_uses_bare_colon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(
            &path,
            "frugal:thrifty\nlucid - clear\n:orphan\nempty:\ncandid : honest\nfrugal:thrifty\n",
        )
        .unwrap();

        let entries = load_word_list(&path).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::defined("frugal", "thrifty"),
                Entry::defined("candid", "honest"),
                Entry::defined("frugal", "thrifty"),
            ]
        );
    }

    #[test]
    fn word_list_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_word_list(&dir.path().join("nope.txt")).is_err());
    }
}
