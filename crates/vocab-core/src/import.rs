//! Pack import: merge new words from an external file into the store.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, VocabError};
use crate::model::{word_key, Definition, Entry};
use crate::parser::parse_line;
use crate::store::PairStore;

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Lines appended to the store.
    pub added: usize,
    /// Non-blank lines skipped because the word was empty or already known.
    pub skipped: usize,
}

/// Import every genuinely new word from `pack` into `store`.
///
/// Each new word is appended as soon as it is read, so a read failure part
/// way through leaves the earlier appends in place and is reported as
/// [`VocabError::Import`] with the number already added.
pub fn import_pack(store: &PairStore, pack: &Path) -> Result<ImportSummary> {
    let mut known: HashSet<String> = store.load()?.iter().map(Entry::key).collect();
    let mut summary = ImportSummary::default();

    let import_err = |added: usize, source: std::io::Error| VocabError::Import {
        path: pack.to_path_buf(),
        added,
        source,
    };

    let file = File::open(pack).map_err(|e| import_err(0, e))?;

    for raw in BufReader::new(file).lines() {
        let raw = raw.map_err(|e| import_err(summary.added, e))?;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (word, definition) = parse_line(line);
        let key = word_key(&word);
        if key.is_empty() || known.contains(&key) {
            summary.skipped += 1;
            continue;
        }

        store.append(&Entry::new(word, Definition::from_stored(&definition)))?;
        known.insert(key);
        summary.added += 1;
    }

    tracing::info!(
        "imported {} new word(s) from {} ({} skipped)",
        summary.added,
        pack.display(),
        summary.skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup(
        store_content: &str,
        pack_content: impl AsRef<[u8]>,
    ) -> (tempfile::TempDir, PairStore, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let store = PairStore::new(dir.path().join("words.txt"));
        fs::write(store.path(), store_content).unwrap();
        let pack = dir.path().join("pack.txt");
        fs::write(&pack, pack_content).unwrap();
        (dir, store, pack)
    }

    #[test]
    fn adds_only_new_words() {
        let (_dir, store, pack) = setup("abate - to lessen\n", "abate - to reduce\nlucid - clear\n");

        let summary = import_pack(&store, &pack).unwrap();
        assert_eq!(summary, ImportSummary { added: 1, skipped: 1 });
        assert_eq!(
            store.load().unwrap(),
            vec![
                Entry::defined("abate", "to lessen"),
                Entry::defined("lucid", "clear"),
            ]
        );
    }

    #[test]
    fn known_word_in_other_case_is_skipped() {
        let (_dir, store, pack) = setup("Abate - to lessen\n", "ABATE \u{2014} to lessen\n");

        assert_eq!(import_pack(&store, &pack).unwrap().added, 0);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn duplicates_within_pack_added_once() {
        let (_dir, store, pack) = setup("", "lucid - clear\n\nLucid - transparent\n  \ncandid : honest\n");

        let summary = import_pack(&store, &pack).unwrap();
        assert_eq!(summary.added, 2);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "lucid - clear\ncandid - honest\n"
        );
    }

    #[test]
    fn missing_definition_written_as_sentinel() {
        let (_dir, store, pack) = setup("", "gregarious\n");

        import_pack(&store, &pack).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "gregarious - TBD\n");
    }

    #[test]
    fn missing_pack_is_import_error() {
        let (dir, store, _pack) = setup("", "");
        let err = import_pack(&store, &dir.path().join("no-such-pack.txt")).unwrap_err();
        assert!(matches!(err, VocabError::Import { added: 0, .. }));
        assert!(err.to_string().contains("Could not load pack"));
    }

    #[test]
    fn bad_encoding_keeps_partial_progress() {
        let (_dir, store, pack) = setup("", b"lucid - clear\nfrugal - thrifty\n\xff\xfe broken\nlater - never\n");

        let err = import_pack(&store, &pack).unwrap_err();
        assert!(matches!(err, VocabError::Import { added: 2, .. }));
        let words: Vec<String> = store.load().unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["lucid", "frugal"]);
    }
}
