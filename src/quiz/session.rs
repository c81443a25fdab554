//! Single quiz session state machine
//!
//! A session walks forward through a merged question set: an answer locks
//! the current question, "next" either moves on or finishes. There is no
//! backward transition, and the score is counted exactly once when the
//! session finishes.

use crate::backend::types::QuizQuestion;
use crate::error::{CareerCompassError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to question `index`.
    AwaitingAnswer { index: usize },
    /// Question `index` answered with option `chosen`; waiting for "next".
    Locked { index: usize, chosen: usize },
    /// All questions consumed.
    Finished { score: u32, total: u32 },
}

#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    state: QuizState,
}

impl QuizSession {
    /// Start a session over a merged question set. An empty set finishes
    /// immediately with a zero score rather than erroring.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let state = if questions.is_empty() {
            QuizState::Finished { score: 0, total: 0 }
        } else {
            QuizState::AwaitingAnswer { index: 0 }
        };
        let answers = vec![None; questions.len()];

        Self {
            questions,
            answers,
            state,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question currently awaiting an answer or locked, if any.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::AwaitingAnswer { index } | QuizState::Locked { index, .. } => {
                self.questions.get(index)
            }
            QuizState::Finished { .. } => None,
        }
    }

    /// Record the chosen option for the current question and lock it.
    /// Returns whether the choice was correct.
    pub fn select(&mut self, option_index: usize) -> Result<bool> {
        let QuizState::AwaitingAnswer { index } = self.state else {
            return Err(CareerCompassError::Quiz(
                "no question is awaiting an answer".to_string(),
            ));
        };

        let question = &self.questions[index];
        if option_index >= question.options.len() {
            return Err(CareerCompassError::Quiz(format!(
                "option {} out of range for question {}",
                option_index, index
            )));
        }

        self.answers[index] = Some(option_index);
        self.state = QuizState::Locked {
            index,
            chosen: option_index,
        };
        Ok(option_index == question.correct_index)
    }

    /// Move past a locked question: on to the next one, or finish and
    /// count the score when the locked question was the last.
    pub fn advance(&mut self) -> Result<&QuizState> {
        let QuizState::Locked { index, .. } = self.state else {
            return Err(CareerCompassError::Quiz(
                "current question has not been answered".to_string(),
            ));
        };

        self.state = if index + 1 < self.questions.len() {
            QuizState::AwaitingAnswer { index: index + 1 }
        } else {
            QuizState::Finished {
                score: self.count_score(),
                total: self.questions.len() as u32,
            }
        };
        Ok(&self.state)
    }

    fn count_score(&self) -> u32 {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct_index))
            .count() as u32
    }
}

/// Encouragement shown after a finished quiz, tiered by percentage.
pub fn outcome_message(score: u32, total: u32) -> &'static str {
    if total == 0 {
        return "No questions were available for this quiz.";
    }
    let pct = score as f64 / total as f64 * 100.0;

    if pct >= 100.0 {
        "PERFECT SCORE! You're absolutely brilliant! Keep it up!"
    } else if pct >= 80.0 {
        "Excellent work! You really know your stuff!"
    } else if pct >= 60.0 {
        "Good job! With a bit more practice, you'll be unstoppable!"
    } else if pct >= 40.0 {
        "Nice try! Every expert started as a beginner. Keep practicing!"
    } else {
        "Don't give up! Review the explanations and try again. You'll improve!"
    }
}
