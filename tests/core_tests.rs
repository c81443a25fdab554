//! Integration tests for the assessment and quiz engines

use async_trait::async_trait;
use career_compass::assessment::gap::{compute_gap, overall_readiness, select_target_career};
use career_compass::assessment::questions::AnswerSet;
use career_compass::assessment::ranking::{match_careers, rank_top_categories};
use career_compass::assessment::scoring::{compute_scores, Category, CategoryScores};
use career_compass::backend::client::CareerBackend;
use career_compass::backend::types::{
    Assessment, Career, QuestionAttempt, QuizQuestion, Skill, SkillRating,
};
use career_compass::error::Result;
use career_compass::quiz::merger::merge_questions;
use career_compass::quiz::session::{QuizSession, QuizState};
use std::collections::HashSet;
use std::sync::Mutex;

fn career(id: u64, title: &str, category: &str, skills: Vec<(&str, u32)>) -> Career {
    Career {
        id,
        title: title.to_string(),
        category: category.to_string(),
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

fn remote_question(text: &str) -> QuizQuestion {
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

#[test]
fn all_agree_assessment_ranks_canonically() {
    // All 10 answers = 2 (Agree): technical/medical/creative/business tie
    // at 4, government/research at 2. The top 3 follow canonical order
    // among the tied categories.
    let answers: AnswerSet = (0..10).map(|i| (i, 2)).collect();
    let scores = compute_scores(&answers);

    assert_eq!(
        scores,
        CategoryScores {
            technical: 4,
            medical: 4,
            creative: 4,
            business: 4,
            government: 2,
            research: 2,
        }
    );
    assert_eq!(scores.total(), 20);

    let top = rank_top_categories(&scores, 3);
    assert_eq!(
        top,
        vec![Category::Technical, Category::Medical, Category::Creative]
    );
}

#[test]
fn assessment_to_recommendation_flow() {
    let answers: AnswerSet = [
        (0, 3),
        (1, 3), // technical = 6
        (2, 1),
        (3, 0), // medical = 1
        (4, 2),
        (5, 2), // creative = 4
        (6, 0),
        (7, 1), // business = 1
        (8, 3), // government = 3
        (9, 0), // research = 0
    ]
    .into_iter()
    .collect();

    let scores = compute_scores(&answers);
    let top = rank_top_categories(&scores, 3);
    assert_eq!(
        top,
        vec![Category::Technical, Category::Creative, Category::Government]
    );

    let catalog = vec![
        career(1, "Doctor", "Medical", vec![]),
        career(2, "Software Engineer", "Technical", vec![]),
        career(3, "UX Designer", "Creative", vec![]),
        career(4, "Civil Servant", "Government", vec![]),
        career(5, "Data Scientist", "Technical", vec![]),
    ];

    let recommended = match_careers(&catalog, &top, 3);
    let ids: Vec<u64> = recommended.iter().map(|c| c.id).collect();
    // Backend order preserved, Medical filtered out.
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn gap_analysis_against_top_career() {
    let catalog = vec![
        career(1, "Doctor", "Medical", vec![]),
        career(
            2,
            "Software Engineer",
            "Technical",
            vec![("Coding", 5), ("Communication", 3)],
        ),
    ];
    let assessment = Assessment {
        timestamp: 1_700_000_000,
        technical_score: 6,
        medical_score: 1,
        creative_score: 4,
        business_score: 1,
        government_score: 3,
        research_score: 0,
        skill_ratings: vec![
            SkillRating {
                skill_name: "Coding".to_string(),
                user_rating: 1,
            },
            SkillRating {
                skill_name: "Communication".to_string(),
                user_rating: 4,
            },
        ],
        top_careers: vec![2],
    };

    let target = select_target_career(&catalog, &assessment).unwrap();
    assert_eq!(target.id, 2);

    let entries = compute_gap(&assessment.skill_ratings, Some(target));
    assert_eq!(entries[0].gap, 4);
    assert_eq!(entries[1].gap, -1);

    // total positive gap 4 over denominator 10 -> 60%
    assert_eq!(overall_readiness(&entries), 60);
}

#[test]
fn medical_merge_scenario() {
    // 2 remote Medical questions, count 5: merged set has exactly 5, both
    // remote questions present, 3 filled from the local Medical bank.
    let remote = vec![
        remote_question("Remote medical question one?"),
        remote_question("Remote medical question two?"),
    ];

    let merged = merge_questions(remote, "Medical", 5);
    assert_eq!(merged.len(), 5);

    let texts: HashSet<String> = merged
        .iter()
        .map(|q| q.text.trim().to_lowercase())
        .collect();
    assert_eq!(texts.len(), 5, "merged quiz contains duplicate questions");
    assert!(texts.contains("remote medical question one?"));
    assert!(texts.contains("remote medical question two?"));
}

#[test]
fn merged_quiz_runs_to_completion() {
    let questions = merge_questions(vec![], "Business", 5);
    let total = questions.len();
    let correct_indices: Vec<usize> = questions.iter().map(|q| q.correct_index).collect();

    let mut session = QuizSession::new(questions);
    for correct in correct_indices {
        session.select(correct).unwrap();
        session.advance().unwrap();
    }

    assert_eq!(
        session.state(),
        &QuizState::Finished {
            score: total as u32,
            total: total as u32,
        }
    );
}

/// In-memory backend used to exercise the client seam without a server.
struct MockBackend {
    careers: Vec<Career>,
    saved_assessments: Mutex<Vec<(CategoryScores, Vec<u64>)>>,
    saved_attempts: Mutex<Vec<QuestionAttempt>>,
}

#[async_trait]
impl CareerBackend for MockBackend {
    async fn get_all_careers(&self) -> Result<Vec<Career>> {
        Ok(self.careers.clone())
    }

    async fn get_careers_by_category(&self, category: &str) -> Result<Vec<Career>> {
        Ok(self
            .careers
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    async fn get_latest_assessment(&self) -> Result<Option<Assessment>> {
        Ok(None)
    }

    async fn save_assessment(
        &self,
        scores: &CategoryScores,
        _skill_ratings: &[SkillRating],
        top_careers: &[u64],
    ) -> Result<()> {
        self.saved_assessments
            .lock()
            .unwrap()
            .push((*scores, top_careers.to_vec()));
        Ok(())
    }

    async fn get_random_questions(
        &self,
        _category: &str,
        _count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        Ok(vec![remote_question("Remote-only question?")])
    }

    async fn save_question_attempt(&self, category: &str, score: u32, total: u32) -> Result<()> {
        self.saved_attempts.lock().unwrap().push(QuestionAttempt {
            timestamp: 0,
            category: category.to_string(),
            score,
            total,
        });
        Ok(())
    }

    async fn get_question_history(&self) -> Result<Vec<QuestionAttempt>> {
        Ok(self.saved_attempts.lock().unwrap().clone())
    }
}

#[tokio::test]
async fn assessment_persists_through_backend_seam() {
    let backend = MockBackend {
        careers: vec![
            career(10, "Software Engineer", "Technical", vec![]),
            career(11, "Doctor", "Medical", vec![]),
        ],
        saved_assessments: Mutex::new(Vec::new()),
        saved_attempts: Mutex::new(Vec::new()),
    };

    let answers: AnswerSet = (0..10).map(|i| (i, if i < 2 { 3 } else { 0 })).collect();
    let scores = compute_scores(&answers);
    let top = rank_top_categories(&scores, 3);
    let careers = backend.get_all_careers().await.unwrap();
    let recommended = match_careers(&careers, &top, 3);
    let ids: Vec<u64> = recommended.iter().map(|c| c.id).collect();

    backend
        .save_assessment(&scores, &[], &ids)
        .await
        .unwrap();

    let saved = backend.saved_assessments.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0.technical, 6);
    assert!(saved[0].1.contains(&10));
}

#[tokio::test]
async fn quiz_attempt_round_trips_through_backend_seam() {
    let backend = MockBackend {
        careers: vec![],
        saved_assessments: Mutex::new(Vec::new()),
        saved_attempts: Mutex::new(Vec::new()),
    };

    let remote = backend.get_random_questions("Technical", 5).await.unwrap();
    let questions = merge_questions(remote, "Technical", 5);
    assert_eq!(questions.len(), 5);

    backend
        .save_question_attempt("Technical", 3, 5)
        .await
        .unwrap();

    let history = backend.get_question_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 3);
    assert_eq!(history[0].total, 5);
}
