//! Practice quiz engine: local question bank, remote/local merging, and the
//! single-session state machine

pub mod bank;
pub mod merger;
pub mod session;
