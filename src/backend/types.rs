//! Data transfer types owned by the backend service
//!
//! These records are read-only from the client's perspective: the backend
//! owns and mutates them, the client only computes derived values from what
//! it is handed and sends back values for the backend to persist.

use serde::{Deserialize, Serialize};

/// A required skill on a career, level 1..5.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub required_level: u32,
}

/// A user's self-rated skill level, 1..5.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating {
    pub skill_name: String,
    pub user_rating: u32,
}

/// One year of a career roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapYear {
    pub year: u32,
    pub tasks: Vec<String>,
}

/// A career record from the backend catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub salary_entry: String,
    pub salary_mid: String,
    pub salary_senior: String,
    pub education_path: Vec<String>,
    pub top_companies: Vec<String>,
    pub required_skills: Vec<Skill>,
    pub roadmap_years: Vec<RoadmapYear>,
}

/// A persisted assessment snapshot. Never mutated; superseded by newer
/// snapshots, with "latest" being the most recent by timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub timestamp: i64,
    pub technical_score: u32,
    pub medical_score: u32,
    pub creative_score: u32,
    pub business_score: u32,
    pub government_score: u32,
    pub research_score: u32,
    pub skill_ratings: Vec<SkillRating>,
    pub top_careers: Vec<u64>,
}

/// A practice quiz question, whether remote or from the local bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

/// A persisted quiz attempt result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAttempt {
    pub timestamp: i64,
    pub category: String,
    pub score: u32,
    pub total: u32,
}
