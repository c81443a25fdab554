//! Assessment engine: questionnaire, score aggregation, career matching, gap analysis

pub mod gap;
pub mod questions;
pub mod ranking;
pub mod scoring;
