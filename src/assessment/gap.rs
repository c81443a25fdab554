//! Skill gap analysis
//!
//! Compares the user's self-rated skill levels against a target career's
//! required levels and summarizes how ready they are as a 0-100 percentage.

use crate::backend::types::{Assessment, Career, SkillRating};
use serde::{Deserialize, Serialize};

/// Required level assumed for skills the target career does not list.
/// A deliberate neutral midpoint, not an omission.
pub const DEFAULT_REQUIRED_LEVEL: u32 = 3;

/// Ratings and required levels are both bounded 1..5, so a single skill's
/// positive gap never exceeds 4 and the readiness denominator uses 5.
const MAX_SKILL_LEVEL: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapStatus {
    OnTrack,
    Close,
    NeedsImprovement,
}

impl GapStatus {
    fn from_gap(gap: i32) -> Self {
        if gap <= 0 {
            GapStatus::OnTrack
        } else if gap == 1 {
            GapStatus::Close
        } else {
            GapStatus::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapStatus::OnTrack => "on-track",
            GapStatus::Close => "close",
            GapStatus::NeedsImprovement => "needs-improvement",
        }
    }
}

/// Derived comparison of one skill against the target career. Never
/// persisted, recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapEntry {
    pub skill_name: String,
    pub user_rating: u32,
    pub required_level: u32,
    pub gap: i32,
    pub status: GapStatus,
}

/// Compute gap entries for each rated skill against the target career.
///
/// The required level is looked up by case-insensitive skill name; skills
/// the career does not list fall back to [`DEFAULT_REQUIRED_LEVEL`]. With
/// no target career at all, every skill uses the default.
pub fn compute_gap(skill_ratings: &[SkillRating], target: Option<&Career>) -> Vec<GapEntry> {
    skill_ratings
        .iter()
        .map(|rating| {
            let required_level = target
                .and_then(|career| {
                    career
                        .required_skills
                        .iter()
                        .find(|s| s.skill_name.eq_ignore_ascii_case(&rating.skill_name))
                })
                .map(|s| s.required_level)
                .unwrap_or(DEFAULT_REQUIRED_LEVEL);

            let gap = required_level as i32 - rating.user_rating as i32;

            GapEntry {
                skill_name: rating.skill_name.clone(),
                user_rating: rating.user_rating,
                required_level,
                gap,
                status: GapStatus::from_gap(gap),
            }
        })
        .collect()
}

/// Overall readiness as an integer percentage 0..100.
///
/// `round((1 - total_positive_gap / (5 * entries)) * 100)`. Bounded rating
/// inputs keep the ratio within [0, 1], so no explicit clamp is needed.
/// With no entries there is nothing to be behind on, so readiness is 100.
pub fn overall_readiness(entries: &[GapEntry]) -> u32 {
    if entries.is_empty() {
        return 100;
    }

    let total_gap: i32 = entries.iter().map(|e| e.gap.max(0)).sum();
    let max_possible_gap = MAX_SKILL_LEVEL * entries.len() as i32;

    ((1.0 - total_gap as f64 / max_possible_gap as f64) * 100.0).round() as u32
}

/// Pick the career the gap analysis compares against.
///
/// First career in the catalog whose id appears in the assessment's
/// top-careers list; if none matches, the first catalog entry; with an
/// empty catalog there is no target and the default-level policy applies.
pub fn select_target_career<'a>(
    careers: &'a [Career],
    assessment: &Assessment,
) -> Option<&'a Career> {
    careers
        .iter()
        .find(|c| assessment.top_careers.contains(&c.id))
        .or_else(|| careers.first())
}

/// Improvement advice per assessed skill, shown for skills behind target.
pub fn advice_for_skill(skill_name: &str) -> Option<&'static str> {
    match skill_name {
        "Communication" => Some(
            "Practice public speaking, join debate clubs, and work on written communication through blogs or essays.",
        ),
        "Coding" => Some(
            "Start with Python or JavaScript tutorials on freeCodeCamp or LeetCode. Build small projects daily.",
        ),
        "Analytical Thinking" => Some(
            "Solve puzzles, practice case studies, and take courses in statistics or logic.",
        ),
        "Creativity" => Some(
            "Explore design tools like Figma, take art classes, or start a creative side project.",
        ),
        "Leadership" => Some(
            "Volunteer for team lead roles, read leadership books, and mentor peers.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::Skill;

    fn rating(name: &str, level: u32) -> SkillRating {
        SkillRating {
            skill_name: name.to_string(),
            user_rating: level,
        }
    }

    fn career_with_skills(skills: Vec<(&str, u32)>) -> Career {
        Career {
            id: 1,
            title: "Software Engineer".to_string(),
            category: "Technical".to_string(),
            description: String::new(),
            salary_entry: String::new(),
            salary_mid: String::new(),
            salary_senior: String::new(),
            education_path: vec![],
            top_companies: vec![],
            required_skills: skills
                .into_iter()
                .map(|(name, level)| Skill {
                    skill_name: name.to_string(),
                    required_level: level,
                })
                .collect(),
            roadmap_years: vec![],
        }
    }

    #[test]
    fn test_gap_statuses() {
        let career = career_with_skills(vec![
            ("Communication", 3),
            ("Coding", 4),
            ("Leadership", 4),
        ]);
        let ratings = vec![
            rating("Communication", 5),
            rating("Coding", 2),
            rating("Leadership", 3),
        ];

        let entries = compute_gap(&ratings, Some(&career));

        assert_eq!(entries[0].gap, -2);
        assert_eq!(entries[0].status, GapStatus::OnTrack);
        assert_eq!(entries[1].gap, 2);
        assert_eq!(entries[1].status, GapStatus::NeedsImprovement);
        assert_eq!(entries[2].gap, 1);
        assert_eq!(entries[2].status, GapStatus::Close);
    }

    #[test]
    fn test_skill_lookup_is_case_insensitive() {
        let career = career_with_skills(vec![("coding", 5)]);
        let entries = compute_gap(&[rating("Coding", 2)], Some(&career));

        assert_eq!(entries[0].required_level, 5);
    }

    #[test]
    fn test_unlisted_skill_defaults_to_midpoint() {
        let career = career_with_skills(vec![("Coding", 5)]);
        let entries = compute_gap(&[rating("Creativity", 1)], Some(&career));

        assert_eq!(entries[0].required_level, DEFAULT_REQUIRED_LEVEL);
        assert_eq!(entries[0].gap, 2);
    }

    #[test]
    fn test_no_target_career_uses_defaults() {
        let entries = compute_gap(&[rating("Communication", 4)], None);

        assert_eq!(entries[0].required_level, DEFAULT_REQUIRED_LEVEL);
        assert_eq!(entries[0].status, GapStatus::OnTrack);
    }

    #[test]
    fn test_readiness_empty_is_100() {
        assert_eq!(overall_readiness(&[]), 100);
    }

    #[test]
    fn test_readiness_no_gap_is_100() {
        let career = career_with_skills(vec![("Coding", 3)]);
        let entries = compute_gap(&[rating("Coding", 3)], Some(&career));

        assert_eq!(overall_readiness(&entries), 100);
    }

    #[test]
    fn test_readiness_max_gap_entry() {
        // userRating=1 against required=5 is the largest possible gap (4);
        // with one entry the denominator is 5, so readiness is 20.
        let career = career_with_skills(vec![("Coding", 5)]);
        let entries = compute_gap(&[rating("Coding", 1)], Some(&career));

        assert_eq!(entries[0].gap, 4);
        assert_eq!(overall_readiness(&entries), 20);
    }

    #[test]
    fn test_negative_gaps_do_not_inflate_readiness_above_100() {
        let career = career_with_skills(vec![("Coding", 1), ("Leadership", 5)]);
        let entries = compute_gap(
            &[rating("Coding", 5), rating("Leadership", 1)],
            Some(&career),
        );

        // +4 and -4 gaps: only the positive one counts.
        assert_eq!(overall_readiness(&entries), 60);
    }

    #[test]
    fn test_target_selection_prefers_top_careers() {
        let careers = vec![
            career_with_skills(vec![]),
            Career {
                id: 42,
                ..career_with_skills(vec![])
            },
        ];
        let assessment = Assessment {
            timestamp: 0,
            technical_score: 0,
            medical_score: 0,
            creative_score: 0,
            business_score: 0,
            government_score: 0,
            research_score: 0,
            skill_ratings: vec![],
            top_careers: vec![42],
        };

        let target = select_target_career(&careers, &assessment).unwrap();
        assert_eq!(target.id, 42);
    }

    #[test]
    fn test_target_selection_falls_back_to_first() {
        let careers = vec![career_with_skills(vec![])];
        let assessment = Assessment {
            timestamp: 0,
            technical_score: 0,
            medical_score: 0,
            creative_score: 0,
            business_score: 0,
            government_score: 0,
            research_score: 0,
            skill_ratings: vec![],
            top_careers: vec![999],
        };

        assert!(select_target_career(&careers, &assessment).is_some());
        assert!(select_target_career(&[], &assessment).is_none());
    }
}
