//! CLI interface for career compass

use crate::assessment::questions::{
    AnswerSet, DEFAULT_SKILL_RATING, INTEREST_QUESTIONS, MAX_ANSWER_VALUE, SKILL_NAMES,
};
use crate::backend::types::SkillRating;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "career-compass")]
#[command(about = "Student career-guidance client")]
#[command(
    long_about = "Take the interest assessment, get career recommendations, analyse your skill gap, and practice category quizzes backed by the career guidance service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the interest questionnaire and answer scale
    Questions,

    /// Run the interest assessment and save the results
    Assess {
        /// All 10 answers as a comma-separated list (0=Disagree .. 3=Strongly Agree)
        #[arg(short, long)]
        answers: String,

        /// Skill self-rating as NAME=LEVEL (1..5), repeatable; unrated skills default to 3
        #[arg(short, long = "skill")]
        skills: Vec<String>,

        /// Show full career details in the results
        #[arg(short, long)]
        detailed: bool,
    },

    /// Run a practice quiz for a category
    Quiz {
        /// Quiz category (Technical, Medical, Creative, Business, Government, Research);
        /// defaults to your strongest assessed interest
        #[arg(short, long)]
        category: Option<String>,

        /// Number of questions (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Don't report the result to the backend
        #[arg(long)]
        no_save: bool,
    },

    /// Compare your rated skills against your top career match
    Gap,

    /// Browse the career catalog
    Careers {
        /// Only show careers in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show full career details
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show past quiz attempts
    History,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse the --answers list into a complete answer set.
///
/// Requires exactly one value per question, each on the 0..=3 scale; this
/// is the form-level validation the aggregator itself does not do.
pub fn parse_answers(input: &str) -> Result<AnswerSet, String> {
    let values: Vec<&str> = input.split(',').map(|v| v.trim()).collect();

    if values.len() != INTEREST_QUESTIONS.len() {
        return Err(format!(
            "expected {} answers, got {}",
            INTEREST_QUESTIONS.len(),
            values.len()
        ));
    }

    let mut answers = AnswerSet::new();
    for (i, value) in values.iter().enumerate() {
        let parsed: u32 = value
            .parse()
            .map_err(|_| format!("answer {} is not a number: '{}'", i + 1, value))?;
        if parsed > MAX_ANSWER_VALUE {
            return Err(format!(
                "answer {} must be between 0 and {}, got {}",
                i + 1,
                MAX_ANSWER_VALUE,
                parsed
            ));
        }
        answers.record(i, parsed);
    }
    Ok(answers)
}

/// Parse repeated --skill NAME=LEVEL flags into the full rating list.
///
/// Every known skill gets an entry; unspecified ones use the slider
/// default of 3. Unknown skill names are rejected.
pub fn parse_skill_ratings(flags: &[String]) -> Result<Vec<SkillRating>, String> {
    let mut ratings: Vec<SkillRating> = SKILL_NAMES
        .iter()
        .map(|name| SkillRating {
            skill_name: name.to_string(),
            user_rating: DEFAULT_SKILL_RATING,
        })
        .collect();

    for flag in flags {
        let (name, level) = flag
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=LEVEL, got '{}'", flag))?;
        let level: u32 = level
            .trim()
            .parse()
            .map_err(|_| format!("skill level is not a number: '{}'", flag))?;
        if !(1..=5).contains(&level) {
            return Err(format!("skill level must be 1..5, got {}", level));
        }

        let entry = ratings
            .iter_mut()
            .find(|r| r.skill_name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown skill '{}'; known skills: {}",
                    name.trim(),
                    SKILL_NAMES.join(", ")
                )
            })?;
        entry.user_rating = level;
    }
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers_happy_path() {
        let answers = parse_answers("3,2,1,0,3,2,1,0,3,2").unwrap();
        assert!(answers.is_complete());
        assert_eq!(answers.get(0), Some(3));
        assert_eq!(answers.get(9), Some(2));
    }

    #[test]
    fn test_parse_answers_rejects_wrong_count() {
        assert!(parse_answers("1,2,3").is_err());
    }

    #[test]
    fn test_parse_answers_rejects_out_of_range() {
        assert!(parse_answers("3,2,1,0,3,2,1,0,3,4").is_err());
        assert!(parse_answers("3,2,1,0,3,2,1,0,3,x").is_err());
    }

    #[test]
    fn test_parse_skill_ratings_defaults_and_overrides() {
        let ratings = parse_skill_ratings(&["Coding=5".to_string()]).unwrap();

        assert_eq!(ratings.len(), SKILL_NAMES.len());
        let coding = ratings.iter().find(|r| r.skill_name == "Coding").unwrap();
        assert_eq!(coding.user_rating, 5);
        let comms = ratings
            .iter()
            .find(|r| r.skill_name == "Communication")
            .unwrap();
        assert_eq!(comms.user_rating, 3);
    }

    #[test]
    fn test_parse_skill_ratings_rejects_bad_input() {
        assert!(parse_skill_ratings(&["Coding=0".to_string()]).is_err());
        assert!(parse_skill_ratings(&["Coding=6".to_string()]).is_err());
        assert!(parse_skill_ratings(&["Juggling=3".to_string()]).is_err());
        assert!(parse_skill_ratings(&["Coding".to_string()]).is_err());
    }
}
