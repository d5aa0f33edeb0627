//! Rule-based recommender — deterministic threshold ladders used whenever the
//! trained classifier is unavailable or fails.
//!
//! Only nitrogen and temperature participate; P, K, humidity, ph and rainfall
//! are intentionally unused here. That is a known limitation of the rule set,
//! preserved as-is (see DESIGN.md), not missing functionality.

use crate::recommend::features::FeatureVector;
use crate::recommend::report::{CropReport, Recommendation, Source};

/// Produces a ranked crop report from fixed thresholds. Pure and infallible:
/// no I/O, no external calls, total over all inputs.
pub fn recommend_fallback(features: &FeatureVector) -> CropReport {
    let mut candidates: Vec<Recommendation> = Vec::with_capacity(4);

    // Nitrogen ladder.
    if features.n > 80.0 {
        candidates.push(Recommendation::scored("maize", 85.0));
        candidates.push(Recommendation::scored("sugarcane", 80.0));
    } else if features.n > 40.0 {
        candidates.push(Recommendation::scored("rice", 75.0));
        candidates.push(Recommendation::scored("wheat", 70.0));
    } else {
        candidates.push(Recommendation::scored("chickpea", 65.0));
        candidates.push(Recommendation::scored("lentil", 60.0));
    }

    // Temperature ladder.
    if features.temperature > 30.0 {
        candidates.push(Recommendation::scored("cotton", 75.0));
        candidates.push(Recommendation::scored("muskmelon", 70.0));
    } else if features.temperature > 20.0 {
        candidates.push(Recommendation::scored("banana", 80.0));
        candidates.push(Recommendation::scored("mango", 75.0));
    } else {
        candidates.push(Recommendation::scored("apple", 85.0));
        candidates.push(Recommendation::scored("orange", 70.0));
    }

    CropReport::ranked(candidates, Source::RuleBased)
}
