//! CLI library components for the price table normalizer.

pub mod logging;
pub mod pipeline;
pub mod types;
