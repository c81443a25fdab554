//! Backend service integration
//! Typed client and data transfer types for the career guidance backend

pub mod client;
pub mod types;
