//! Question set merging
//!
//! Fills a fixed-size quiz from backend questions first, topping up from
//! the local bank when the backend comes up short. Every call reshuffles,
//! so repeated quizzes on the same category vary. Only cardinality and
//! dedup are guaranteed, never ordering.

use crate::backend::types::QuizQuestion;
use crate::quiz::bank;
use log::debug;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Normalized question text used for duplicate detection.
fn dedup_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Merge remote questions with the local fallback bank into a quiz set of
/// at most `count` questions.
///
/// With enough remote questions, a uniform shuffle of the remote set is
/// truncated to `count`. Otherwise the local bank for `category` (Technical
/// when unrecognized) fills the remainder, skipping any local question
/// whose text duplicates a remote one case-insensitively. Both pools empty
/// yields an empty set; the caller handles short quizzes.
pub fn merge_questions(
    remote: Vec<QuizQuestion>,
    category: &str,
    count: usize,
) -> Vec<QuizQuestion> {
    let mut rng = rand::thread_rng();

    if remote.len() >= count {
        let mut questions = remote;
        questions.shuffle(&mut rng);
        questions.truncate(count);
        return questions;
    }

    let needed = count - remote.len();
    let remote_texts: HashSet<String> = remote.iter().map(|q| dedup_key(&q.text)).collect();

    let mut local: Vec<QuizQuestion> = bank::fallback_bank(category)
        .into_iter()
        .filter(|q| !remote_texts.contains(&dedup_key(&q.text)))
        .collect();
    local.shuffle(&mut rng);
    local.truncate(needed);

    debug!(
        "merging {} remote + {} local questions for {}",
        remote.len(),
        local.len(),
        category
    );

    let mut merged = remote;
    merged.extend(local);
    merged.shuffle(&mut rng);
    merged.truncate(count);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(text: &str) -> QuizQuestion {
        QuizQuestion {
            text: text.to_string(),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_index: 0,
            explanation: "Because A.".to_string(),
        }
    }

    fn texts(questions: &[QuizQuestion]) -> HashSet<String> {
        questions.iter().map(|q| dedup_key(&q.text)).collect()
    }

    #[test]
    fn test_remote_sufficient_uses_only_remote() {
        let pool: Vec<QuizQuestion> = (0..8).map(|i| remote(&format!("Remote {}", i))).collect();
        let remote_texts = texts(&pool);

        let merged = merge_questions(pool, "Technical", 5);

        assert_eq!(merged.len(), 5);
        for q in &merged {
            assert!(remote_texts.contains(&dedup_key(&q.text)));
        }
    }

    #[test]
    fn test_shortfall_filled_from_local_bank() {
        let pool = vec![remote("Remote medical one"), remote("Remote medical two")];

        let merged = merge_questions(pool, "Medical", 5);

        assert_eq!(merged.len(), 5);
        let merged_texts = texts(&merged);
        assert!(merged_texts.contains("remote medical one"));
        assert!(merged_texts.contains("remote medical two"));
        // The other three come from the Medical bank.
        assert_eq!(merged_texts.len(), 5);
    }

    #[test]
    fn test_no_duplicate_texts_when_remote_mirrors_bank() {
        // Remote question identical (modulo case/whitespace) to a bank entry
        // must not appear twice.
        let bank_text = bank::fallback_bank("Technical")[0].text.clone();
        let pool = vec![remote(&format!("  {}  ", bank_text.to_uppercase()))];

        let merged = merge_questions(pool, "Technical", 5);

        assert_eq!(merged.len(), 5);
        assert_eq!(texts(&merged).len(), 5);
    }

    #[test]
    fn test_empty_remote_draws_entirely_from_bank() {
        let merged = merge_questions(vec![], "Creative", 5);

        assert_eq!(merged.len(), 5);
        assert_eq!(texts(&merged).len(), 5);
    }

    #[test]
    fn test_result_bounded_by_available_questions() {
        let bank_size = bank::fallback_bank("Research").len();
        let merged = merge_questions(vec![remote("Extra")], "Research", bank_size + 10);

        assert_eq!(merged.len(), bank_size + 1);
    }

    #[test]
    fn test_count_zero_returns_empty() {
        let merged = merge_questions(vec![remote("Any")], "Technical", 0);
        assert!(merged.is_empty());
    }
}
