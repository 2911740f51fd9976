//! The `vocab add` command.

use anyhow::Result;

use vocab_core::PairStore;

pub fn execute(store: &PairStore, word: &str, definition: Option<&str>) -> Result<()> {
    match store.save(word, definition) {
        Ok(entry) => println!("Saved \u{201c}{}\u{201d}", entry.word),
        Err(e) if e.is_validation() => println!("{e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
