//! CLI library components for Quota Request Studio.

pub mod logging;
pub mod pipeline;
