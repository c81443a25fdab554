//! Console formatter with colors and rich presentation

use crate::assessment::gap::{advice_for_skill, GapEntry, GapStatus};
use crate::assessment::scoring::CategoryScores;
use crate::backend::types::{Career, QuestionAttempt};
use chrono::{TimeZone, Utc};
use colored::Colorize;
use std::fmt::Write as _;

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        // colored is toggled through a process-wide switch
        colored::control::set_override(use_colors);
        Self {
            use_colors,
            detailed,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render the six category scores as labelled bars, highest first kept
    /// in canonical order for ties.
    pub fn format_scores(&self, scores: &CategoryScores) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.heading("Your Interest Profile")).ok();

        let max = scores.entries().map(|(_, s)| s).max().unwrap_or(0).max(1);
        for (category, score) in scores.entries() {
            let width = (score * 20 / max) as usize;
            let bar: String = "#".repeat(width);
            let bar = if self.use_colors && score > 0 {
                bar.green().to_string()
            } else {
                bar
            };
            writeln!(out, "  {:<12} {:>2}  {}", category.display_name(), score, bar).ok();
        }
        out
    }

    pub fn format_recommendations(&self, careers: &[&Career]) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.heading("Recommended Careers")).ok();

        if careers.is_empty() {
            writeln!(out, "  No matching careers in the catalog yet.").ok();
            return out;
        }

        for (i, career) in careers.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} [{}]",
                i + 1,
                if self.use_colors {
                    career.title.bold().to_string()
                } else {
                    career.title.clone()
                },
                career.category
            )
            .ok();
            if self.detailed {
                if !career.description.is_empty() {
                    writeln!(out, "     {}", career.description).ok();
                }
                writeln!(
                    out,
                    "     Salary: {} entry / {} mid / {} senior",
                    career.salary_entry, career.salary_mid, career.salary_senior
                )
                .ok();
                if !career.education_path.is_empty() {
                    writeln!(out, "     Education: {}", career.education_path.join(" -> ")).ok();
                }
                if !career.top_companies.is_empty() {
                    writeln!(out, "     Top companies: {}", career.top_companies.join(", ")).ok();
                }
            }
        }
        out
    }

    pub fn format_gap_report(
        &self,
        target: Option<&Career>,
        entries: &[GapEntry],
        readiness: u32,
    ) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.heading("Skill Gap Analysis")).ok();

        match target {
            Some(career) => {
                writeln!(out, "  Comparing against: {} [{}]", career.title, career.category).ok()
            }
            None => writeln!(out, "  No target career loaded; using neutral required levels.").ok(),
        };

        if entries.is_empty() {
            writeln!(out, "  No skill ratings found. Take the assessment first.").ok();
            return out;
        }

        let readiness_label = format!("{}%", readiness);
        let readiness_label = if self.use_colors {
            match readiness {
                80..=100 => readiness_label.green().bold().to_string(),
                50..=79 => readiness_label.yellow().bold().to_string(),
                _ => readiness_label.red().bold().to_string(),
            }
        } else {
            readiness_label
        };
        writeln!(out, "  Overall readiness: {}", readiness_label).ok();
        writeln!(out).ok();

        for entry in entries {
            let status = entry.status.label();
            let status = if self.use_colors {
                match entry.status {
                    GapStatus::OnTrack => status.green().to_string(),
                    GapStatus::Close => status.yellow().to_string(),
                    GapStatus::NeedsImprovement => status.red().to_string(),
                }
            } else {
                status.to_string()
            };
            writeln!(
                out,
                "  {:<20} you: {}/5  required: {}/5  {}",
                entry.skill_name, entry.user_rating, entry.required_level, status
            )
            .ok();

            if entry.status != GapStatus::OnTrack {
                if let Some(advice) = advice_for_skill(&entry.skill_name) {
                    writeln!(out, "     {}", advice).ok();
                }
            }
        }
        out
    }

    pub fn format_history(&self, attempts: &[QuestionAttempt]) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.heading("Quiz History")).ok();

        if attempts.is_empty() {
            writeln!(out, "  No quiz attempts yet.").ok();
            return out;
        }

        for attempt in attempts {
            let when = Utc
                .timestamp_opt(attempt.timestamp, 0)
                .single()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "  {}  {:<12} {}/{}",
                when, attempt.category, attempt.score, attempt.total
            )
            .ok();
        }
        out
    }
}
