//! Axum route handlers for the crop recommendation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::recommend::crops::{details_for, CropDetails, SUPPORTED_CROPS};
use crate::recommend::features::FeatureVector;
use crate::recommend::report::{Recommendation, Source};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub features: FeatureVector,
    pub location: Option<String>,
}

/// A recommendation enriched with the agronomy details table.
#[derive(Debug, Serialize)]
pub struct EnrichedRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub details: CropDetails,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub location: String,
    #[serde(rename = "inputParameters")]
    pub input_parameters: FeatureVector,
    #[serde(rename = "topRecommendation")]
    pub top_recommendation: String,
    pub recommendations: Vec<EnrichedRecommendation>,
    pub source: Source,
}

#[derive(Debug, Serialize)]
pub struct SupportedCropsResponse {
    pub crops: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CropDetailsResponse {
    pub name: String,
    pub details: CropDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/crops/recommend
///
/// Missing or non-numeric soil/climate fields default to 0 rather than
/// erroring; the orchestrator itself never fails, so this handler only
/// rejects bodies that are not JSON objects at all.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let location = request.location.unwrap_or_else(|| "Unknown".to_string());
    info!(?location, features = ?request.features, "crop recommendation request");

    let report = state.recommender.get_recommendations(&request.features);

    let recommendations = report
        .recommendations
        .into_iter()
        .map(|recommendation| {
            let details = details_for(&recommendation.name);
            EnrichedRecommendation {
                recommendation,
                details,
            }
        })
        .collect();

    Ok(Json(RecommendResponse {
        success: report.success,
        location,
        input_parameters: request.features,
        top_recommendation: report.predicted_crop,
        recommendations,
        source: report.source,
    }))
}

/// GET /api/v1/crops
pub async fn handle_supported_crops() -> Json<SupportedCropsResponse> {
    Json(SupportedCropsResponse {
        crops: SUPPORTED_CROPS.to_vec(),
    })
}

/// GET /api/v1/crops/:name
pub async fn handle_crop_details(Path(name): Path<String>) -> Json<CropDetailsResponse> {
    let details = details_for(&name);
    Json(CropDetailsResponse { name, details })
}
