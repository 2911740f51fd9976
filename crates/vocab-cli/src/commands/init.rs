//! The `vocab init` command.

use std::path::Path;

use anyhow::{Context, Result};

use vocab_core::builtin::starter_pack;
use vocab_core::config::{VocabConfig, LOCAL_CONFIG_FILE};
use vocab_core::PairStore;

const STARTER_PACK: &str = "packs/starter.txt";

pub fn execute(store: &PairStore) -> Result<()> {
    // Create vocab.toml
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        println!("{LOCAL_CONFIG_FILE} already exists, skipping.");
    } else {
        let config = VocabConfig {
            words_file: store.path().to_path_buf(),
            ..VocabConfig::default()
        };
        std::fs::write(LOCAL_CONFIG_FILE, config.to_toml()?)
            .with_context(|| format!("failed to write {LOCAL_CONFIG_FILE}"))?;
        println!("Created {LOCAL_CONFIG_FILE}");
    }

    // Create the word file
    if store.path().exists() {
        println!("{} already exists, skipping.", store.path().display());
    } else {
        store.ensure_exists()?;
        println!("Created {}", store.path().display());
    }

    // Create the starter pack
    let pack = Path::new(STARTER_PACK);
    if pack.exists() {
        println!("{STARTER_PACK} already exists, skipping.");
    } else {
        std::fs::create_dir_all("packs")?;
        std::fs::write(pack, starter_pack())
            .with_context(|| format!("failed to write {STARTER_PACK}"))?;
        println!("Created {STARTER_PACK}");
    }

    println!("\nNext steps:");
    println!("  1. Run: vocab import {STARTER_PACK}");
    println!("  2. Run: vocab review");
    println!("  3. Run: vocab quiz");

    Ok(())
}
