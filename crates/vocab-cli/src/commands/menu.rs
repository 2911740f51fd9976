//! The interactive text menu, used when `vocab` runs without a subcommand.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use vocab_core::choice::ChoiceQuiz;
use vocab_core::config::VocabConfig;
use vocab_core::import::import_pack;
use vocab_core::quiz::QuizSession;
use vocab_core::{PairStore, VocabError};

use super::choice::run_choice_quiz;
use super::prompt;
use super::quiz::run_session;
use super::review::{write_review, ReviewFormat};

const MENU: &str = "\
====== Vocabulary Builder ======
1) Review words
2) Take a quiz
3) Add a word
4) Load a pack
5) Multiple-choice quiz
6) Exit";

pub fn execute(store: &PairStore, config: &VocabConfig) -> Result<()> {
    store.ensure_exists()?;
    // Stdout is locked per write so the Ctrl+C handler can still print.
    run_menu(store, config, &mut io::stdin().lock(), &mut io::stdout())
}

/// Loop over menu choices until Exit or end of input.
///
/// Failures inside one action are reported and the menu carries on.
pub fn run_menu<I: BufRead, W: Write>(
    store: &PairStore,
    config: &VocabConfig,
    input: &mut I,
    output: &mut W,
) -> Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => review(store, config, output),
            "2" => free_response(store, input, output),
            "3" => add_word(store, input, output),
            "4" => load_pack(store, input, output),
            "5" => multiple_choice(store, config, input, output),
            "6" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid choice.")?;
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::warn!("menu action failed: {e:#}");
            writeln!(output, "Error: {e:#}")?;
        }
        writeln!(output)?;
    }
}

/// Print recoverable core errors as plain messages; pass the rest up.
fn report_recoverable<W: Write>(err: VocabError, output: &mut W) -> Result<()> {
    if err.is_recoverable() {
        writeln!(output, "{err}")?;
        Ok(())
    } else {
        Err(err.into())
    }
}

fn review<W: Write>(store: &PairStore, config: &VocabConfig, output: &mut W) -> Result<()> {
    write_review(&store.load()?, ReviewFormat::Plain, config.review_limit, output)
}

fn free_response<I: BufRead, W: Write>(store: &PairStore, input: &mut I, output: &mut W) -> Result<()> {
    match QuizSession::new(&store.load()?) {
        Ok(mut session) => run_session(&mut session, input, output, None).map(|_| ()),
        Err(e) => report_recoverable(e, output),
    }
}

fn add_word<I: BufRead, W: Write>(store: &PairStore, input: &mut I, output: &mut W) -> Result<()> {
    let word = prompt(input, output, "Word: ")?.unwrap_or_default();
    if word.is_empty() {
        return report_recoverable(VocabError::EmptyWord, output);
    }
    let definition = prompt(input, output, "Definition (leave blank for TBD): ")?;

    match store.save(&word, definition.as_deref()) {
        Ok(entry) => {
            writeln!(output, "Saved \u{201c}{}\u{201d}", entry.word)?;
            Ok(())
        }
        Err(e) => report_recoverable(e, output),
    }
}

fn load_pack<I: BufRead, W: Write>(store: &PairStore, input: &mut I, output: &mut W) -> Result<()> {
    let path = prompt(input, output, "Pack file: ")?.unwrap_or_default();
    if path.is_empty() {
        writeln!(output, "Load cancelled.")?;
        return Ok(());
    }
    let summary = import_pack(store, Path::new(&path))?;
    writeln!(output, "Added {} new words.", summary.added)?;
    Ok(())
}

fn multiple_choice<I: BufRead, W: Write>(
    store: &PairStore,
    config: &VocabConfig,
    input: &mut I,
    output: &mut W,
) -> Result<()> {
    match ChoiceQuiz::new(store.load()?, config.question_count) {
        Ok(mut quiz) => run_choice_quiz(&mut quiz, input, output).map(|_| ()),
        Err(e) => report_recoverable(e, output),
    }
}
