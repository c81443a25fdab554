//! Category score aggregation
//!
//! Turns questionnaire answers into per-category scores. All functions here
//! are pure and total: missing answers contribute zero rather than erroring,
//! so partial answer sets score cleanly.

use crate::assessment::questions::{AnswerSet, INTEREST_QUESTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six career-interest domains.
///
/// Internal keys are lowercase, the backend's category strings are
/// display-cased; both sides of that mapping live here so the aggregator
/// and the matcher cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Medical,
    Creative,
    Business,
    Government,
    Research,
}

impl Category {
    /// Canonical ordering, also the tie-break order when ranking.
    pub const ALL: [Category; 6] = [
        Category::Technical,
        Category::Medical,
        Category::Creative,
        Category::Business,
        Category::Government,
        Category::Research,
    ];

    /// Lowercase key used internally and on the wire for scores.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Medical => "medical",
            Category::Creative => "creative",
            Category::Business => "business",
            Category::Government => "government",
            Category::Research => "research",
        }
    }

    /// Display-cased name as the backend stores it on careers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Medical => "Medical",
            Category::Creative => "Creative",
            Category::Business => "Business",
            Category::Government => "Government",
            Category::Research => "Research",
        }
    }

    /// Parse either form, case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Category> {
        let lower = name.trim().to_lowercase();
        Category::ALL.iter().copied().find(|c| c.key() == lower)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Aggregated interest scores, one field per category.
///
/// Invariant: the sum of all six fields equals the sum of all answer
/// values that produced them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: u32,
    pub medical: u32,
    pub creative: u32,
    pub business: u32,
    pub government: u32,
    pub research: u32,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Technical => self.technical,
            Category::Medical => self.medical,
            Category::Creative => self.creative,
            Category::Business => self.business,
            Category::Government => self.government,
            Category::Research => self.research,
        }
    }

    fn add(&mut self, category: Category, value: u32) {
        match category {
            Category::Technical => self.technical += value,
            Category::Medical => self.medical += value,
            Category::Creative => self.creative += value,
            Category::Business => self.business += value,
            Category::Government => self.government += value,
            Category::Research => self.research += value,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// (category, score) pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// Aggregate questionnaire answers into category scores.
///
/// Each answered question adds its response value to the total of the
/// category the question is tagged with; unanswered questions add nothing.
/// Response-range validation is the form's concern, values sum as given.
pub fn compute_scores(answers: &AnswerSet) -> CategoryScores {
    let mut scores = CategoryScores::default();

    for (i, question) in INTEREST_QUESTIONS.iter().enumerate() {
        scores.add(question.category, answers.get(i).unwrap_or(0));
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answers_score_zero() {
        let scores = compute_scores(&AnswerSet::new());

        assert_eq!(scores, CategoryScores::default());
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn test_score_sum_matches_answer_sum() {
        let answers: AnswerSet = [(0, 3), (1, 1), (2, 2), (5, 3), (8, 1), (9, 2)]
            .into_iter()
            .collect();

        let scores = compute_scores(&answers);
        assert_eq!(scores.total(), 12);
    }

    #[test]
    fn test_all_agree_distribution() {
        // All 10 answers = 2 (Agree): paired categories land on 4,
        // single-question categories on 2.
        let answers: AnswerSet = (0..10).map(|i| (i, 2)).collect();
        let scores = compute_scores(&answers);

        assert_eq!(scores.technical, 4);
        assert_eq!(scores.medical, 4);
        assert_eq!(scores.creative, 4);
        assert_eq!(scores.business, 4);
        assert_eq!(scores.government, 2);
        assert_eq!(scores.research, 2);
    }

    #[test]
    fn test_partial_answers_contribute_zero() {
        let answers: AnswerSet = [(8, 3)].into_iter().collect();
        let scores = compute_scores(&answers);

        assert_eq!(scores.government, 3);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_category_mapping_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.key()), Some(category));
            assert_eq!(Category::parse(category.display_name()), Some(category));
        }
        assert_eq!(Category::parse("astrology"), None);
    }
}
