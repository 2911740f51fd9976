//! vocab-core — word store, pack import, and quiz engines.
//!
//! This crate owns everything with rules in it: parsing word-file lines,
//! deduplicating and appending entries, merging packs, and running quizzes.
//! Presentation lives in `vocab-cli`.

pub mod builtin;
pub mod choice;
pub mod config;
pub mod error;
pub mod import;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod store;

pub use error::{Result, VocabError};
pub use model::{Definition, Entry};
pub use store::PairStore;
