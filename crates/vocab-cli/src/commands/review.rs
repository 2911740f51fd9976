//! The `vocab review` command.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use vocab_core::{Entry, PairStore};

/// How `review` prints the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReviewFormat {
    Table,
    Plain,
    Json,
}

pub fn execute(store: &PairStore, format: ReviewFormat, limit: usize) -> Result<()> {
    let entries = store.load()?;
    write_review(&entries, format, limit, &mut io::stdout())
}

/// Render the list. `limit` caps the table and plain listings; JSON is complete.
pub fn write_review<W: Write>(
    entries: &[Entry],
    format: ReviewFormat,
    limit: usize,
    out: &mut W,
) -> Result<()> {
    if format == ReviewFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(
            out,
            "Your list is empty. Add words with `vocab add` or load a pack with `vocab import`."
        )?;
        return Ok(());
    }

    let shown = &entries[..entries.len().min(limit)];
    match format {
        ReviewFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Word", "Definition"]);
            for entry in shown {
                table.add_row(vec![
                    Cell::new(&entry.word),
                    Cell::new(entry.definition.as_stored()),
                ]);
            }
            writeln!(out, "{table}")?;
        }
        ReviewFormat::Plain | ReviewFormat::Json => {
            writeln!(out, "\n=== Vocabulary List ===")?;
            for entry in shown {
                writeln!(out, "- {}: {}", entry.word, entry.definition)?;
            }
        }
    }

    if entries.len() > shown.len() {
        writeln!(out, "\n(+ {} more not shown)", entries.len() - shown.len())?;
    }
    writeln!(out, "Total: {} words", entries.len())?;
    Ok(())
}
