//! Recommendation result shapes shared by the HTTP handlers, the CLI helper,
//! and the orchestrator.

use serde::{Deserialize, Serialize};

/// Qualitative label derived from a recommendation's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    #[serde(rename = "Highly Suitable")]
    HighlySuitable,
    #[serde(rename = "Suitable")]
    Suitable,
    #[serde(rename = "Moderately Suitable")]
    ModeratelySuitable,
    #[serde(rename = "Low Suitability")]
    LowSuitability,
    /// Reserved for the single-recommendation path where the classifier
    /// exposes a bare label and no per-class scores.
    #[serde(rename = "Recommended")]
    Recommended,
}

impl Suitability {
    /// Maps a confidence in [0, 100] to its qualitative band.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 70.0 {
            Suitability::HighlySuitable
        } else if confidence >= 40.0 {
            Suitability::Suitable
        } else if confidence >= 20.0 {
            Suitability::ModeratelySuitable
        } else {
            Suitability::LowSuitability
        }
    }
}

/// A single ranked crop suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    /// 0–100.
    pub confidence: f64,
    pub suitability: Suitability,
}

impl Recommendation {
    /// Builds a recommendation with suitability derived from the confidence.
    pub fn scored(name: impl Into<String>, confidence: f64) -> Self {
        Recommendation {
            name: name.into(),
            confidence,
            suitability: Suitability::from_confidence(confidence),
        }
    }
}

/// Provenance of a report: the trained classifier or the threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "model")]
    Model,
    #[serde(rename = "rule-based")]
    RuleBased,
}

/// The full recommendation result.
///
/// Invariant: `recommendations` is sorted by descending confidence (stable),
/// holds at most 5 entries, and `predicted_crop` equals the first entry's
/// name whenever the list is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropReport {
    pub success: bool,
    #[serde(rename = "predictedCrop")]
    pub predicted_crop: String,
    pub recommendations: Vec<Recommendation>,
    pub source: Source,
}

impl CropReport {
    /// Assembles a report from an unordered candidate list: stable-sorts by
    /// descending confidence, truncates to the top 5, and takes the leader
    /// as the predicted crop.
    pub fn ranked(mut candidates: Vec<Recommendation>, source: Source) -> Self {
        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(5);
        let predicted_crop = candidates
            .first()
            .map(|r| r.name.clone())
            .unwrap_or_default();
        CropReport {
            success: true,
            predicted_crop,
            recommendations: candidates,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suitability_band_edges() {
        assert_eq!(Suitability::from_confidence(70.0), Suitability::HighlySuitable);
        assert_eq!(Suitability::from_confidence(69.9), Suitability::Suitable);
        assert_eq!(Suitability::from_confidence(40.0), Suitability::Suitable);
        assert_eq!(Suitability::from_confidence(20.0), Suitability::ModeratelySuitable);
        assert_eq!(Suitability::from_confidence(19.9), Suitability::LowSuitability);
    }

    #[test]
    fn test_suitability_wire_labels() {
        let json = serde_json::to_string(&Suitability::HighlySuitable).unwrap();
        assert_eq!(json, r#""Highly Suitable""#);
        let json = serde_json::to_string(&Suitability::Recommended).unwrap();
        assert_eq!(json, r#""Recommended""#);
    }

    #[test]
    fn test_source_wire_labels() {
        assert_eq!(serde_json::to_string(&Source::Model).unwrap(), r#""model""#);
        assert_eq!(
            serde_json::to_string(&Source::RuleBased).unwrap(),
            r#""rule-based""#
        );
    }

    #[test]
    fn test_ranked_sorts_and_truncates() {
        let candidates = (0..7)
            .map(|i| Recommendation::scored(format!("crop{i}"), i as f64 * 10.0))
            .collect();
        let report = CropReport::ranked(candidates, Source::Model);
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(report.predicted_crop, "crop6");
        assert!(report
            .recommendations
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_ranked_sort_is_stable_on_ties() {
        let candidates = vec![
            Recommendation::scored("first", 75.0),
            Recommendation::scored("second", 75.0),
        ];
        let report = CropReport::ranked(candidates, Source::RuleBased);
        assert_eq!(report.recommendations[0].name, "first");
        assert_eq!(report.recommendations[1].name, "second");
    }

    #[test]
    fn test_report_serializes_camel_case_predicted_crop() {
        let report = CropReport::ranked(vec![Recommendation::scored("rice", 80.0)], Source::Model);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["predictedCrop"], "rice");
        assert_eq!(json["source"], "model");
        assert_eq!(json["success"], true);
    }
}
