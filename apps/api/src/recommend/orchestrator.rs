//! Recommendation orchestrator — classifier first, rule-based fallback on any
//! failure. Never returns an error: every classifier problem degrades to the
//! deterministic threshold rules and is reported only through tracing.

use std::sync::Arc;

use tracing::warn;

use crate::recommend::classifier::ClassifierProvider;
use crate::recommend::fallback::recommend_fallback;
use crate::recommend::features::FeatureVector;
use crate::recommend::report::{CropReport, Recommendation, Source, Suitability};

/// Wraps classifier invocation and normalizes its output into a `CropReport`.
/// The provider is injected so tests can substitute stubs.
#[derive(Clone)]
pub struct CropRecommender {
    provider: Arc<dyn ClassifierProvider>,
}

impl CropRecommender {
    pub fn new(provider: Arc<dyn ClassifierProvider>) -> Self {
        CropRecommender { provider }
    }

    /// Produces a recommendation report for the given features. Infallible:
    /// classifier load or invocation failures fall back to the rule-based
    /// recommender rather than propagating.
    pub fn get_recommendations(&self, features: &FeatureVector) -> CropReport {
        let classifier = match self.provider.load() {
            Ok(classifier) => classifier,
            Err(e) => {
                warn!("classifier unavailable, using rule-based fallback: {e}");
                return recommend_fallback(features);
            }
        };

        match classifier.predict_with_scores(features) {
            Ok(scores) if !scores.is_empty() => {
                let candidates = scores
                    .into_iter()
                    .map(|(label, probability)| {
                        Recommendation::scored(label, round2(probability * 100.0))
                    })
                    .collect();
                CropReport::ranked(candidates, Source::Model)
            }
            // No per-class scores: fall back to the bare top label.
            scores_result => {
                if let Err(e) = &scores_result {
                    warn!("per-class scores unavailable: {e}");
                }
                match classifier.predict(features) {
                    Ok(label) => CropReport {
                        success: true,
                        predicted_crop: label.clone(),
                        recommendations: vec![Recommendation {
                            name: label,
                            confidence: 100.0,
                            suitability: Suitability::Recommended,
                        }],
                        source: Source::Model,
                    },
                    Err(e) => {
                        warn!("classifier prediction failed, using rule-based fallback: {e}");
                        recommend_fallback(features)
                    }
                }
            }
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
