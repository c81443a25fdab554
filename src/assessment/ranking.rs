//! Category ranking and career matching
//!
//! Ranks the six category scores and maps the top categories onto the
//! backend's career catalog to pick recommendations.

use crate::assessment::scoring::{Category, CategoryScores};
use crate::backend::types::Career;

/// Rank categories by score, highest first, returning the top `n`.
///
/// Ties keep the canonical category order (technical, medical, creative,
/// business, government, research) via a stable sort, so equal scores
/// always rank deterministically.
pub fn rank_top_categories(scores: &CategoryScores, n: usize) -> Vec<Category> {
    let mut ranked: Vec<(Category, u32)> = scores.entries().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked.into_iter().take(n).map(|(c, _)| c).collect()
}

/// Filter the career catalog down to the top categories, keeping the
/// backend's order, and return at most `limit` matches.
///
/// Careers are matched on the backend's display-cased category string.
/// Fewer than `limit` matches (or an empty catalog) yields however many
/// are available; there is no padding from other categories.
pub fn match_careers<'a>(
    careers: &'a [Career],
    top_categories: &[Category],
    limit: usize,
) -> Vec<&'a Career> {
    careers
        .iter()
        .filter(|c| {
            top_categories
                .iter()
                .any(|t| t.display_name() == c.category)
        })
        .take(limit)
        .collect()
}

/// The user's strongest interest category from a saved assessment,
/// defaulting to Technical when no assessment exists. Used to suggest a
/// quiz category.
pub fn top_interest_category(assessment: Option<&crate::backend::types::Assessment>) -> Category {
    let Some(assessment) = assessment else {
        return Category::Technical;
    };

    let scores = CategoryScores {
        technical: assessment.technical_score,
        medical: assessment.medical_score,
        creative: assessment.creative_score,
        business: assessment.business_score,
        government: assessment.government_score,
        research: assessment.research_score,
    };

    rank_top_categories(&scores, 1)
        .first()
        .copied()
        .unwrap_or(Category::Technical)
}
