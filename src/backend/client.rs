//! Typed client for the career guidance backend
//!
//! The backend owns all persistent state; this client only moves data.
//! The trait seam keeps the CLI and core testable against an in-memory
//! mock. Retry and backoff are deliberately not handled here: a failed
//! save surfaces to the caller while locally computed results stay valid.

use crate::assessment::scoring::CategoryScores;
use crate::backend::types::{Assessment, Career, QuestionAttempt, QuizQuestion, SkillRating};
use crate::config::BackendConfig;
use crate::error::{CareerCompassError, Result};
use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use std::time::Duration;

#[async_trait]
pub trait CareerBackend: Send + Sync {
    async fn get_all_careers(&self) -> Result<Vec<Career>>;

    async fn get_careers_by_category(&self, category: &str) -> Result<Vec<Career>>;

    async fn get_latest_assessment(&self) -> Result<Option<Assessment>>;

    async fn save_assessment(
        &self,
        scores: &CategoryScores,
        skill_ratings: &[SkillRating],
        top_careers: &[u64],
    ) -> Result<()>;

    async fn get_random_questions(&self, category: &str, count: usize)
        -> Result<Vec<QuizQuestion>>;

    async fn save_question_attempt(&self, category: &str, score: u32, total: u32) -> Result<()>;

    async fn get_question_history(&self) -> Result<Vec<QuestionAttempt>>;
}

/// HTTP implementation against the backend's JSON API.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveAssessmentRequest<'a> {
    technical_score: u32,
    creative_score: u32,
    business_score: u32,
    medical_score: u32,
    government_score: u32,
    research_score: u32,
    skill_ratings: &'a [SkillRating],
    top_careers: &'a [u64],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveAttemptRequest<'a> {
    category: &'a str,
    score: u32,
    total: u32,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CareerCompassError::Backend(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(CareerCompassError::Backend(format!(
                "POST {} returned {}",
                url,
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CareerBackend for HttpBackend {
    async fn get_all_careers(&self) -> Result<Vec<Career>> {
        self.get_json("/careers").await
    }

    async fn get_careers_by_category(&self, category: &str) -> Result<Vec<Career>> {
        self.get_json(&format!("/careers?category={}", category))
            .await
    }

    async fn get_latest_assessment(&self) -> Result<Option<Assessment>> {
        // The backend returns JSON null when no assessment exists yet.
        self.get_json("/assessments/latest").await
    }

    async fn save_assessment(
        &self,
        scores: &CategoryScores,
        skill_ratings: &[SkillRating],
        top_careers: &[u64],
    ) -> Result<()> {
        let request = SaveAssessmentRequest {
            technical_score: scores.technical,
            creative_score: scores.creative,
            business_score: scores.business,
            medical_score: scores.medical,
            government_score: scores.government,
            research_score: scores.research,
            skill_ratings,
            top_careers,
        };
        self.post_json("/assessments", &request).await
    }

    async fn get_random_questions(
        &self,
        category: &str,
        count: usize,
    ) -> Result<Vec<QuizQuestion>> {
        self.get_json(&format!(
            "/questions/random?category={}&count={}",
            category, count
        ))
        .await
    }

    async fn save_question_attempt(&self, category: &str, score: u32, total: u32) -> Result<()> {
        let request = SaveAttemptRequest {
            category,
            score,
            total,
        };
        self.post_json("/attempts", &request).await
    }

    async fn get_question_history(&self) -> Result<Vec<QuestionAttempt>> {
        self.get_json("/attempts").await
    }
}
