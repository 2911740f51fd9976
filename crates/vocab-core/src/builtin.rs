//! Small built-in dictionary.
//!
//! Used as a fallback by lookups when the word file has no real definition,
//! and as the contents of the starter pack written by `vocab init`.

use crate::model::{word_key, Entry};
use crate::parser::format_line;

const BUILTIN_DEFINITIONS: &[(&str, &str)] = &[
    ("abate", "to lessen"),
    ("abdicate", "to give up power"),
    ("ambiguous", "unclear"),
    ("amiable", "friendly"),
    ("benevolent", "kind"),
    ("candid", "honest"),
    ("coerce", "to force"),
    ("concise", "brief"),
    ("diligent", "hardworking"),
    ("elucidate", "to explain"),
    ("feasible", "possible"),
    ("frugal", "thrifty"),
    ("gregarious", "sociable"),
    ("impeccable", "flawless"),
    ("innate", "inborn"),
    ("lucid", "clear"),
    ("meticulous", "very careful"),
    ("obsolete", "out of date"),
    ("pragmatic", "practical"),
    ("succinct", "brief and to the point"),
];

/// Built-in definition for `word`, ignoring case.
pub fn builtin_definition(word: &str) -> Option<&'static str> {
    let key = word_key(word);
    BUILTIN_DEFINITIONS
        .iter()
        .find(|(w, _)| *w == key)
        .map(|(_, d)| *d)
}

/// All built-in entries, alphabetical.
pub fn builtin_entries() -> Vec<Entry> {
    BUILTIN_DEFINITIONS
        .iter()
        .map(|(w, d)| Entry::defined(*w, *d))
        .collect()
}

/// The built-in dictionary rendered as a pack file.
pub fn starter_pack() -> String {
    BUILTIN_DEFINITIONS
        .iter()
        .map(|(w, d)| format_line(w, d) + "\n")
        .collect()
}
