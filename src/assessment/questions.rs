//! The fixed interest questionnaire and answer scale
//!
//! The catalog is immutable: exactly 10 questions, 1-2 per category. Scores
//! are aggregated per category by the scoring module; the question order
//! here defines the answer indices used throughout.

use crate::assessment::scoring::Category;
use std::collections::BTreeMap;

/// One statement of the interest questionnaire, tagged with the category
/// its agreement score feeds into.
#[derive(Debug, Clone, Copy)]
pub struct InterestQuestion {
    pub text: &'static str,
    pub category: Category,
}

/// The fixed 10-question interest catalog.
pub const INTEREST_QUESTIONS: [InterestQuestion; 10] = [
    InterestQuestion {
        text: "I enjoy solving complex mathematical or logical problems",
        category: Category::Technical,
    },
    InterestQuestion {
        text: "I like building or fixing things with technology",
        category: Category::Technical,
    },
    InterestQuestion {
        text: "I am passionate about helping people stay healthy",
        category: Category::Medical,
    },
    InterestQuestion {
        text: "I want to contribute to medical research or patient care",
        category: Category::Medical,
    },
    InterestQuestion {
        text: "I love expressing ideas through art, design, or storytelling",
        category: Category::Creative,
    },
    InterestQuestion {
        text: "I enjoy creating visuals, animations, or multimedia content",
        category: Category::Creative,
    },
    InterestQuestion {
        text: "I am interested in managing teams and business strategies",
        category: Category::Business,
    },
    InterestQuestion {
        text: "I want to start my own company or lead ventures",
        category: Category::Business,
    },
    InterestQuestion {
        text: "I am interested in serving the nation through public service",
        category: Category::Government,
    },
    InterestQuestion {
        text: "I enjoy investigating, experimenting, and discovering new things",
        category: Category::Research,
    },
];

/// Agreement scale shown for every question, strongest first.
pub const ANSWER_OPTIONS: [(&str, u32); 4] = [
    ("Strongly Agree", 3),
    ("Agree", 2),
    ("Neutral", 1),
    ("Disagree", 0),
];

/// Maximum response value on the agreement scale.
pub const MAX_ANSWER_VALUE: u32 = 3;

/// The five skills rated during the assessment.
pub const SKILL_NAMES: [&str; 5] = [
    "Communication",
    "Coding",
    "Analytical Thinking",
    "Creativity",
    "Leadership",
];

/// Slider default for skill self-ratings.
pub const DEFAULT_SKILL_RATING: u32 = 3;

/// Answers collected so far, keyed by question index (0..9).
///
/// Partial sets are valid inputs to scoring (missing answers contribute 0);
/// completeness is only enforced by the caller before submission.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    answers: BTreeMap<usize, u32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the response for a question index. Range validation of the
    /// value is the form's responsibility, not the answer set's.
    pub fn record(&mut self, question_index: usize, value: u32) {
        self.answers.insert(question_index, value);
    }

    pub fn get(&self, question_index: usize) -> Option<u32> {
        self.answers.get(&question_index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Complete means every question index has an entry.
    pub fn is_complete(&self) -> bool {
        (0..INTEREST_QUESTIONS.len()).all(|i| self.answers.contains_key(&i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.answers.iter().map(|(&i, &v)| (i, v))
    }
}

impl FromIterator<(usize, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (usize, u32)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
