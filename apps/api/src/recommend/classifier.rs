//! Classifier boundary — the pre-trained crop classifier consumed as an
//! opaque capability.
//!
//! The orchestrator only sees the `Classifier` / `ClassifierProvider` traits,
//! so tests substitute stubs and the artifact format stays a private detail
//! of this module. The shipped provider reads a JSON centroid artifact
//! exported from the original training run: one feature centroid per crop
//! label plus per-feature scales.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::recommend::features::FeatureVector;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model artifact not found at {0}")]
    ArtifactMissing(PathBuf),

    #[error("model artifact is corrupt: {0}")]
    ArtifactCorrupt(String),

    #[error("classifier exposes no per-class scores")]
    ScoresUnavailable,

    #[error("prediction failed: {0}")]
    Prediction(String),
}

/// A previously-trained mapping from the seven-feature vector to a crop
/// label, optionally exposing per-label probabilities.
pub trait Classifier: Send + Sync {
    /// Returns the single most likely crop label.
    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError>;

    /// Returns every label with its probability in [0, 1]. Implementations
    /// without score support return `ScoresUnavailable`; callers must treat
    /// that as a soft failure, not a fatal one.
    fn predict_with_scores(
        &self,
        features: &FeatureVector,
    ) -> Result<Vec<(String, f64)>, ClassifierError>;
}

impl std::fmt::Debug for dyn Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Classifier")
    }
}

/// Obtains a classifier instance. Load failures (missing artifact, corrupt
/// file) surface as error values so callers can degrade to the rule-based
/// recommender.
pub trait ClassifierProvider: Send + Sync {
    fn load(&self) -> Result<Arc<dyn Classifier>, ClassifierError>;
}

// ────────────────────────────────────────────────────────────────────────────
// JSON centroid artifact
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassCentroid {
    label: String,
    /// Per-feature mean in training order (N, P, K, temperature, humidity,
    /// ph, rainfall).
    centroid: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CentroidArtifact {
    format_version: u32,
    feature_names: Vec<String>,
    /// Per-feature scale used to normalize distances.
    feature_scale: Vec<f64>,
    classes: Vec<ClassCentroid>,
}

/// Nearest-centroid classifier backed by a loaded artifact.
pub struct CentroidClassifier {
    artifact: CentroidArtifact,
}

impl CentroidClassifier {
    fn scaled_distances(&self, features: &FeatureVector) -> Vec<(String, f64)> {
        let input = features.as_array();
        self.artifact
            .classes
            .iter()
            .map(|class| {
                let d2: f64 = class
                    .centroid
                    .iter()
                    .zip(input.iter())
                    .zip(self.artifact.feature_scale.iter())
                    .map(|((c, x), s)| {
                        let scale = if *s > 0.0 { *s } else { 1.0 };
                        let d = (x - c) / scale;
                        d * d
                    })
                    .sum();
                (class.label.clone(), d2.sqrt())
            })
            .collect()
    }
}

impl Classifier for CentroidClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String, ClassifierError> {
        let distances = self.scaled_distances(features);
        distances
            .into_iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label)
            .ok_or_else(|| ClassifierError::Prediction("artifact has no classes".to_string()))
    }

    fn predict_with_scores(
        &self,
        features: &FeatureVector,
    ) -> Result<Vec<(String, f64)>, ClassifierError> {
        let distances = self.scaled_distances(features);
        if distances.is_empty() {
            return Err(ClassifierError::Prediction(
                "artifact has no classes".to_string(),
            ));
        }

        // Softmax over negative distances, shifted by the minimum so the
        // exponentials stay well-conditioned.
        let min_d = distances
            .iter()
            .map(|(_, d)| *d)
            .fold(f64::INFINITY, f64::min);
        let weights: Vec<f64> = distances.iter().map(|(_, d)| (-(d - min_d)).exp()).collect();
        let total: f64 = weights.iter().sum();

        Ok(distances
            .into_iter()
            .zip(weights)
            .map(|((label, _), w)| (label, w / total))
            .collect())
    }
}

/// Loads the centroid artifact from disk on each `load` call, mirroring the
/// original per-invocation model load. The artifact is small; re-reading it
/// keeps every invocation independent of prior state.
pub struct ArtifactProvider {
    path: PathBuf,
}

impl ArtifactProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ArtifactProvider { path: path.into() }
    }

    fn read_artifact(path: &Path) -> Result<CentroidArtifact, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactMissing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| ClassifierError::ArtifactCorrupt(e.to_string()))?;
        let artifact: CentroidArtifact =
            serde_json::from_str(&raw).map_err(|e| ClassifierError::ArtifactCorrupt(e.to_string()))?;

        let dims = artifact.feature_names.len();
        if artifact.feature_scale.len() != dims {
            return Err(ClassifierError::ArtifactCorrupt(format!(
                "feature_scale has {} entries, expected {dims}",
                artifact.feature_scale.len()
            )));
        }
        for class in &artifact.classes {
            if class.centroid.len() != dims {
                return Err(ClassifierError::ArtifactCorrupt(format!(
                    "class '{}' centroid has {} entries, expected {dims}",
                    class.label,
                    class.centroid.len()
                )));
            }
        }
        Ok(artifact)
    }
}

impl ClassifierProvider for ArtifactProvider {
    fn load(&self) -> Result<Arc<dyn Classifier>, ClassifierError> {
        let artifact = Self::read_artifact(&self.path)?;
        debug!(
            classes = artifact.classes.len(),
            path = %self.path.display(),
            "loaded crop model artifact"
        );
        Ok(Arc::new(CentroidClassifier { artifact }))
    }
}
