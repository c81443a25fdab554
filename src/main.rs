//! Career compass: student career-guidance client

mod assessment;
mod backend;
mod cli;
mod config;
mod error;
mod output;
mod quiz;

use assessment::gap::{compute_gap, overall_readiness, select_target_career};
use assessment::ranking::{match_careers, rank_top_categories, top_interest_category};
use assessment::scoring::{compute_scores, Category};
use backend::client::{CareerBackend, HttpBackend};
use backend::types::{Career, QuizQuestion};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{CareerCompassError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use output::formatter::ConsoleFormatter;
use quiz::merger::merge_questions;
use quiz::session::{outcome_message, QuizSession, QuizState};
use std::io::{BufRead, Write};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Fetch the career catalog, treating backend failure as an empty catalog.
/// Core computations stay usable before (or without) backend data.
async fn load_careers(backend: &dyn CareerBackend) -> Vec<Career> {
    let bar = spinner("Loading career catalog...");
    let careers = match backend.get_all_careers().await {
        Ok(careers) => careers,
        Err(e) => {
            warn!("Could not load career catalog: {}", e);
            Vec::new()
        }
    };
    bar.finish_and_clear();
    careers
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Questions => {
            println!("Interest questionnaire (answer each on the scale below):\n");
            for (i, question) in assessment::questions::INTEREST_QUESTIONS.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, question.text);
            }
            println!("\nAnswer scale:");
            for (label, value) in assessment::questions::ANSWER_OPTIONS {
                println!("  {} = {}", value, label);
            }
            println!("\nExample: career-compass assess --answers 3,2,1,0,3,2,1,0,3,2");
            Ok(())
        }

        Commands::Assess {
            answers,
            skills,
            detailed,
        } => {
            let answers = cli::parse_answers(&answers).map_err(CareerCompassError::InvalidInput)?;
            if !answers.is_complete() {
                return Err(CareerCompassError::IncompleteAssessment(
                    "all 10 questions must be answered".to_string(),
                ));
            }
            let skill_ratings =
                cli::parse_skill_ratings(&skills).map_err(CareerCompassError::InvalidInput)?;

            info!("Scoring assessment");
            let scores = compute_scores(&answers);
            let top_categories = rank_top_categories(&scores, config.assessment.top_categories);

            let backend = HttpBackend::new(&config.backend)?;
            let careers = load_careers(&backend).await;
            let recommended =
                match_careers(&careers, &top_categories, config.assessment.recommendation_limit);
            let top_career_ids: Vec<u64> = recommended.iter().map(|c| c.id).collect();

            let formatter =
                ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed);
            println!("{}", formatter.format_scores(&scores));
            println!("{}", formatter.format_recommendations(&recommended));

            // A failed save never invalidates the locally computed results.
            match backend
                .save_assessment(&scores, &skill_ratings, &top_career_ids)
                .await
            {
                Ok(()) => println!("Assessment saved."),
                Err(e) => {
                    warn!("Failed to save assessment: {}", e);
                    println!("Could not save your assessment; results above are still valid. Try again later.");
                }
            }
            Ok(())
        }

        Commands::Quiz {
            category,
            count,
            no_save,
        } => {
            let backend = HttpBackend::new(&config.backend)?;
            let count = count.unwrap_or(config.quiz.question_count);

            let category = match category {
                Some(name) => Category::parse(&name)
                    .ok_or_else(|| {
                        CareerCompassError::InvalidInput(format!("unknown category '{}'", name))
                    })?
                    .display_name()
                    .to_string(),
                None => {
                    // Suggest the user's strongest assessed interest.
                    let assessment = backend.get_latest_assessment().await.unwrap_or_else(|e| {
                        warn!("Could not load latest assessment: {}", e);
                        None
                    });
                    top_interest_category(assessment.as_ref())
                        .display_name()
                        .to_string()
                }
            };

            let bar = spinner("Fetching quiz questions...");
            let remote = match backend.get_random_questions(&category, count).await {
                Ok(questions) => questions,
                Err(e) => {
                    warn!("Backend questions unavailable, using local bank: {}", e);
                    Vec::new()
                }
            };
            bar.finish_and_clear();

            let questions = merge_questions(remote, &category, count);
            if questions.is_empty() {
                return Err(CareerCompassError::Quiz(format!(
                    "no questions available for {}",
                    category
                )));
            }

            println!("📚 {} quiz · {} questions\n", category, questions.len());
            let (score, total) = run_quiz(questions)?;

            println!("\nYou scored {}/{}", score, total);
            println!("{}", outcome_message(score, total));

            if !no_save {
                match backend.save_question_attempt(&category, score, total).await {
                    Ok(()) => info!("Attempt saved"),
                    Err(e) => {
                        warn!("Failed to save quiz attempt: {}", e);
                        println!("Could not save this attempt; your score above still counts.");
                    }
                }
            }
            Ok(())
        }

        Commands::Gap => {
            let backend = HttpBackend::new(&config.backend)?;

            let bar = spinner("Loading your assessment...");
            let assessment = backend.get_latest_assessment().await?;
            bar.finish_and_clear();

            let Some(assessment) = assessment else {
                println!("No assessment data found. Run `career-compass assess` first.");
                return Ok(());
            };

            let careers = load_careers(&backend).await;
            let target = select_target_career(&careers, &assessment);

            let entries = compute_gap(&assessment.skill_ratings, target);
            let readiness = overall_readiness(&entries);

            let formatter =
                ConsoleFormatter::new(config.output.color_output, config.output.detailed);
            println!("{}", formatter.format_gap_report(target, &entries, readiness));
            Ok(())
        }

        Commands::Careers { category, detailed } => {
            let backend = HttpBackend::new(&config.backend)?;

            let bar = spinner("Loading careers...");
            let careers = match &category {
                Some(name) => {
                    let category = Category::parse(name).ok_or_else(|| {
                        CareerCompassError::InvalidInput(format!("unknown category '{}'", name))
                    })?;
                    backend
                        .get_careers_by_category(category.display_name())
                        .await?
                }
                None => backend.get_all_careers().await?,
            };
            bar.finish_and_clear();

            let formatter =
                ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed);
            let refs: Vec<&Career> = careers.iter().collect();
            println!("{}", formatter.format_recommendations(&refs));
            Ok(())
        }

        Commands::History => {
            let backend = HttpBackend::new(&config.backend)?;

            let bar = spinner("Loading quiz history...");
            let attempts = backend.get_question_history().await?;
            bar.finish_and_clear();

            let formatter =
                ConsoleFormatter::new(config.output.color_output, config.output.detailed);
            println!("{}", formatter.format_history(&attempts));
            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        CareerCompassError::Configuration(format!("Failed to serialize: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("Configuration reset to defaults.");
                }
            }
            Ok(())
        }
    }
}

/// Interactive quiz loop over stdin. Answers lock the question; an empty
/// line moves on. Returns (score, total) once the session finishes.
fn run_quiz(questions: Vec<QuizQuestion>) -> Result<(u32, u32)> {
    let total = questions.len();
    let mut session = QuizSession::new(questions);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match *session.state() {
            QuizState::AwaitingAnswer { index } => {
                let question = session.current_question().ok_or_else(|| {
                    CareerCompassError::Quiz("no question at current position".to_string())
                })?;
                println!("Question {}/{}: {}", index + 1, total, question.text);
                for (i, option) in question.options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
                print!("Your answer (1-{}): ", question.options.len());
                std::io::stdout().flush()?;

                let line = match lines.next() {
                    Some(line) => line?,
                    None => {
                        return Err(CareerCompassError::Quiz("input closed mid-quiz".to_string()))
                    }
                };
                let choice: usize = match line.trim().parse::<usize>() {
                    Ok(n) if n >= 1 => n - 1,
                    _ => {
                        println!("Please enter a number between 1 and {}.", question.options.len());
                        continue;
                    }
                };

                let explanation = question.explanation.clone();
                match session.select(choice) {
                    Ok(true) => println!("✅ Correct! {}\n", explanation),
                    Ok(false) => println!("❌ Not quite. {}\n", explanation),
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                }
            }
            QuizState::Locked { .. } => {
                session.advance()?;
            }
            QuizState::Finished { score, total } => return Ok((score, total)),
        }
    }
}
