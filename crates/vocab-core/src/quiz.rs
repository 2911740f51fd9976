//! Free-response quiz: show a definition, type the word.
//!
//! A [`QuizSession`] is owned by its caller and cycles through the eligible
//! pool indefinitely. The working pool is reshuffled before every draw and
//! refilled from the full pool once exhausted.

use std::fmt;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, VocabError};
use crate::model::{word_key, Entry};

/// Entries with a real definition, in their original order.
pub fn eligible_pool(entries: &[Entry]) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| e.definition.is_real())
        .cloned()
        .collect()
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub word: String,
    pub definition: String,
}

/// Result of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect { word: String },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Where a session is in its question/answer cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// Created, no question drawn yet.
    Ready,
    AwaitingAnswer,
    /// The last question was answered.
    Answered(Outcome),
    Finished,
}

/// Running score, displayed as `correct/asked`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub asked: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.asked)
    }
}

/// A free-response quiz over a fixed eligible pool.
pub struct QuizSession<R = ThreadRng> {
    pool: Vec<Entry>,
    working: Vec<Entry>,
    current: Option<Question>,
    state: QuizState,
    score: Score,
    rng: R,
}

impl QuizSession<ThreadRng> {
    /// Start a session over the real-definition entries of `entries`.
    pub fn new(entries: &[Entry]) -> Result<Self> {
        Self::with_rng(entries, rand::thread_rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Start a session with an explicit random source.
    pub fn with_rng(entries: &[Entry], mut rng: R) -> Result<Self> {
        let pool = eligible_pool(entries);
        if pool.is_empty() {
            return Err(VocabError::EmptyPool);
        }

        let mut working = pool.clone();
        working.shuffle(&mut rng);
        tracing::debug!("quiz session started with {} eligible entries", pool.len());

        Ok(Self {
            pool,
            working,
            current: None,
            state: QuizState::Ready,
            score: Score::default(),
            rng,
        })
    }

    /// Draw the next question.
    pub fn next(&mut self) -> Result<&Question> {
        if self.state == QuizState::Finished {
            return Err(VocabError::SessionFinished);
        }

        if self.working.is_empty() {
            self.working = self.pool.clone();
        }
        self.working.shuffle(&mut self.rng);
        let entry = self.working.pop().ok_or(VocabError::EmptyPool)?;

        self.state = QuizState::AwaitingAnswer;
        let question: &Question = self.current.insert(Question {
            definition: entry.definition.text().unwrap_or_default().to_string(),
            word: entry.word,
        });
        Ok(question)
    }

    /// Score an answer to the current question.
    ///
    /// The answer is compared trimmed and case-insensitively. `asked` goes up
    /// on every call that reaches a question, right or wrong.
    pub fn submit(&mut self, answer: &str) -> Result<Outcome> {
        match self.state {
            QuizState::AwaitingAnswer => {}
            QuizState::Finished => return Err(VocabError::SessionFinished),
            _ => return Err(VocabError::NoActiveQuestion),
        }
        let question = self.current.as_ref().ok_or(VocabError::NoActiveQuestion)?;

        self.score.asked += 1;
        let outcome = if word_key(answer) == word_key(&question.word) {
            self.score.correct += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect {
                word: question.word.clone(),
            }
        };

        self.state = QuizState::Answered(outcome.clone());
        Ok(outcome)
    }

    /// Throw away progress, refill the working pool, and serve a new question.
    pub fn reset(&mut self) -> Result<&Question> {
        self.working = self.pool.clone();
        self.working.shuffle(&mut self.rng);
        self.score = Score::default();
        self.current = None;
        self.state = QuizState::Ready;
        self.next()
    }

    /// End the session and return the final score.
    pub fn finish(&mut self) -> Score {
        self.state = QuizState::Finished;
        self.current = None;
        self.score
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Size of the full eligible pool.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Entries left in the current pass.
    pub fn remaining(&self) -> usize {
        self.working.len()
    }
}
