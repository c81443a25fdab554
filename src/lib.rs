//! Career compass library

pub mod assessment;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod quiz;

pub use config::Config;
pub use error::{CareerCompassError, Result};
