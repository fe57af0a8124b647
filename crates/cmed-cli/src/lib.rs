//! CLI library components for the CMED matcher.

pub mod config;
pub mod logging;
pub mod pipeline;
