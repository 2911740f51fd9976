//! The `vocab import` command.

use std::path::Path;

use anyhow::Result;

use vocab_core::import::import_pack;
use vocab_core::PairStore;

pub fn execute(store: &PairStore, pack: &Path) -> Result<()> {
    let summary = import_pack(store, pack)?;
    println!("Added {} new words.", summary.added);
    if summary.skipped > 0 {
        println!("Skipped {} already in your list.", summary.skipped);
    }
    Ok(())
}
