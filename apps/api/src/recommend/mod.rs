//! Crop recommendation: feature vector, rule-based fallback, the opaque
//! classifier boundary, and the orchestrator that ties them together.

pub mod classifier;
pub mod crops;
pub mod fallback;
pub mod features;
pub mod handlers;
pub mod orchestrator;
pub mod report;
