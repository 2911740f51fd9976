//! The `vocab choice` command: multiple-choice quiz.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use rand::Rng;

use vocab_core::choice::{ChoiceOutcome, ChoiceQuiz, ChoiceReport};
use vocab_core::store::load_word_list;
use vocab_core::PairStore;

use super::prompt;

/// Run a quiz over `file` (bare-colon word list) or, without one, the store.
pub fn execute(store: &PairStore, file: Option<&Path>, count: usize) -> Result<()> {
    let pairs = match file {
        Some(path) => load_word_list(path)?,
        None => store.load()?,
    };

    let mut quiz = match ChoiceQuiz::new(pairs, count) {
        Ok(quiz) => quiz,
        Err(e) if e.is_recoverable() => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    run_choice_quiz(&mut quiz, &mut io::stdin().lock(), &mut io::stdout())?;
    Ok(())
}

/// Ask every question, then print the score and the words to review.
///
/// End of input counts the remaining questions as missed.
pub fn run_choice_quiz<R: Rng, I: BufRead, W: Write>(
    quiz: &mut ChoiceQuiz<R>,
    input: &mut I,
    output: &mut W,
) -> Result<ChoiceReport> {
    while let Some(question) = quiz.next_question()? {
        writeln!(
            output,
            "\nQuestion {}/{}: What does \u{201c}{}\u{201d} mean?",
            quiz.answered() + 1,
            quiz.total(),
            question.word()
        )?;
        for (i, choice) in question.choices.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, choice.definition)?;
        }

        let answer = prompt(input, output, "Your answer (1-4): ")?.unwrap_or_default();
        match quiz.answer(&question, &answer)? {
            ChoiceOutcome::Correct => writeln!(output, "\u{2705} Correct!")?,
            ChoiceOutcome::Incorrect => writeln!(
                output,
                "\u{274c} Wrong. Answer: {}",
                question.correct.definition
            )?,
            ChoiceOutcome::Invalid => writeln!(output, "Invalid choice, counted as missed.")?,
        }
    }

    let report = quiz.report();
    writeln!(output, "\nScore: {}/{}", report.score, report.total)?;
    if !report.missed.is_empty() {
        writeln!(output, "Words to review:")?;
        for entry in &report.missed {
            writeln!(output, "- {}: {}", entry.word, entry.definition)?;
        }
    }
    Ok(report)
}
