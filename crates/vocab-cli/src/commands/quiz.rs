//! The `vocab quiz` command: free-response, line by line.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::Rng;

use vocab_core::quiz::{Outcome, QuizSession, Score};
use vocab_core::PairStore;

use super::prompt;

const SKIP: &str = ":next";
const RESET: &str = ":reset";

pub fn execute(store: &PairStore, limit: Option<usize>) -> Result<()> {
    let entries = store.load()?;
    let mut session = match QuizSession::new(&entries) {
        Ok(session) => session,
        Err(e) if e.is_recoverable() => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    run_session(&mut session, &mut io::stdin().lock(), &mut io::stdout(), limit)?;
    Ok(())
}

/// Drive a session until an empty answer, end of input, or `limit` answers.
///
/// `:next` skips the current definition without scoring it and `:reset`
/// starts over with a zero score.
pub fn run_session<R: Rng, I: BufRead, W: Write>(
    session: &mut QuizSession<R>,
    input: &mut I,
    output: &mut W,
    limit: Option<usize>,
) -> Result<Score> {
    let mut definition = session.next()?.definition.clone();

    loop {
        writeln!(output, "\nDefinition:\n{definition}")?;
        let answer = prompt(
            input,
            output,
            &format!("Type the word ({SKIP} to skip, {RESET} to restart, ENTER to quit): "),
        )?;

        match answer.as_deref() {
            None | Some("") => break,
            Some(SKIP) => {}
            Some(RESET) => {
                definition = session.reset()?.definition.clone();
                writeln!(output, "Quiz reset. Score: {}", session.score())?;
                continue;
            }
            Some(answer) => {
                match session.submit(answer)? {
                    Outcome::Correct => writeln!(output, "\u{2705} Correct!")?,
                    Outcome::Incorrect { word } => {
                        writeln!(output, "\u{274c} Incorrect. Correct word: {word}")?
                    }
                }
                writeln!(output, "(score {})", session.score())?;
                if limit.is_some_and(|n| session.score().asked >= n) {
                    break;
                }
            }
        }

        definition = session.next()?.definition.clone();
    }

    let score = session.finish();
    if score.asked > 0 {
        writeln!(output, "\nScore: {score}")?;
    }
    Ok(score)
}
