//! The `vocab lookup` command.

use anyhow::Result;

use vocab_core::builtin::builtin_definition;
use vocab_core::PairStore;

pub fn execute(store: &PairStore, word: &str) -> Result<()> {
    let word = word.trim();
    if let Some(definition) = store.find_definition(word)? {
        println!("{word}: {definition}");
    } else if let Some(definition) = builtin_definition(word) {
        println!("{word}: {definition} (built-in)");
    } else {
        println!("No definition found for \u{201c}{word}\u{201d}.");
    }
    Ok(())
}
