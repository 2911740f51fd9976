//! Multiple-choice quiz: show a word, pick its definition out of four.
//!
//! Unlike the free-response quiz this works on the full word list, pending
//! definitions included, and runs for a fixed number of questions.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, VocabError};
use crate::model::Entry;

/// Choices shown per question.
pub const CHOICE_COUNT: usize = 4;

/// Questions per quiz when the caller does not say otherwise.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// One generated question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    pub correct: Entry,
    /// Exactly [`CHOICE_COUNT`] distinct pairs in display order.
    pub choices: Vec<Entry>,
}

impl ChoiceQuestion {
    /// The word being asked about.
    pub fn word(&self) -> &str {
        &self.correct.word
    }

    /// Whether the zero-based `index` points at the correct pair.
    pub fn check(&self, index: usize) -> bool {
        self.choices.get(index) == Some(&self.correct)
    }
}

fn distinct_pairs(pairs: &[Entry]) -> usize {
    pairs.iter().collect::<HashSet<_>>().len()
}

fn ensure_pool_size(pairs: &[Entry]) -> Result<()> {
    let available = distinct_pairs(pairs);
    if available < CHOICE_COUNT {
        return Err(VocabError::PoolTooSmall {
            needed: CHOICE_COUNT,
            available,
        });
    }
    Ok(())
}

/// Build one question from `pairs`.
///
/// The correct pair and every distractor are drawn uniformly from the whole
/// list; draws already in the choice set are discarded. Pools with fewer than
/// [`CHOICE_COUNT`] distinct pairs are rejected up front.
pub fn generate_question<R: Rng>(pairs: &[Entry], rng: &mut R) -> Result<ChoiceQuestion> {
    ensure_pool_size(pairs)?;

    let correct = pairs
        .choose(rng)
        .cloned()
        .ok_or(VocabError::PoolTooSmall {
            needed: CHOICE_COUNT,
            available: 0,
        })?;

    let mut choices = vec![correct.clone()];
    while choices.len() < CHOICE_COUNT {
        let candidate = &pairs[rng.gen_range(0..pairs.len())];
        if !choices.contains(candidate) {
            choices.push(candidate.clone());
        }
    }
    choices.shuffle(rng);

    Ok(ChoiceQuestion { correct, choices })
}

/// Parse a 1-indexed selection into a zero-based choice index.
pub fn parse_selection(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=CHOICE_COUNT).contains(&n) => Ok(n - 1),
        _ => Err(VocabError::InvalidChoice(trimmed.to_string())),
    }
}

/// How one answer was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Correct,
    Incorrect,
    /// Not a number in range; counted as a miss.
    Invalid,
}

/// Final tally of a multiple-choice quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceReport {
    pub score: usize,
    pub total: usize,
    /// Every word answered wrongly or invalidly, in question order.
    pub missed: Vec<Entry>,
}

/// A fixed-length multiple-choice quiz.
pub struct ChoiceQuiz<R = ThreadRng> {
    pairs: Vec<Entry>,
    total: usize,
    answered: usize,
    score: usize,
    missed: Vec<Entry>,
    rng: R,
}

impl ChoiceQuiz<ThreadRng> {
    pub fn new(pairs: Vec<Entry>, total: usize) -> Result<Self> {
        Self::with_rng(pairs, total, rand::thread_rng())
    }
}

impl<R: Rng> ChoiceQuiz<R> {
    pub fn with_rng(pairs: Vec<Entry>, total: usize, rng: R) -> Result<Self> {
        ensure_pool_size(&pairs)?;
        Ok(Self {
            pairs,
            total,
            answered: 0,
            score: 0,
            missed: Vec::new(),
            rng,
        })
    }

    /// The next question, or `None` once every question has been answered.
    pub fn next_question(&mut self) -> Result<Option<ChoiceQuestion>> {
        if self.is_complete() {
            return Ok(None);
        }
        generate_question(&self.pairs, &mut self.rng).map(Some)
    }

    /// Score raw user input against `question`.
    ///
    /// Once every question is answered the tally is frozen and further
    /// answers return [`VocabError::SessionFinished`].
    pub fn answer(&mut self, question: &ChoiceQuestion, input: &str) -> Result<ChoiceOutcome> {
        if self.is_complete() {
            return Err(VocabError::SessionFinished);
        }
        self.answered += 1;
        let outcome = match parse_selection(input) {
            Ok(index) if question.check(index) => ChoiceOutcome::Correct,
            Ok(_) => ChoiceOutcome::Incorrect,
            Err(e) => {
                tracing::debug!("counting invalid selection as a miss: {e}");
                ChoiceOutcome::Invalid
            }
        };

        if outcome == ChoiceOutcome::Correct {
            self.score += 1;
        } else {
            self.missed.push(question.correct.clone());
        }
        Ok(outcome)
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    /// Questions answered so far.
    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn report(&self) -> ChoiceReport {
        ChoiceReport {
            score: self.score,
            total: self.total,
            missed: self.missed.clone(),
        }
    }
}
