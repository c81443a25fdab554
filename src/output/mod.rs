//! Console output rendering

pub mod formatter;
