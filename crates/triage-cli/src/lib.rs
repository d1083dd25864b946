//! CLI library components for the triage normalizer.

pub mod logging;
pub mod pipeline;
