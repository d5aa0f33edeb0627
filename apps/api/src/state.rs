use std::sync::Arc;

use crate::config::Config;
use crate::recommend::orchestrator::CropRecommender;
use crate::schemes::repository::SchemeRepository;
use crate::vision_client::VisionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub vision: VisionClient,
    /// Scheme list loaded once at startup; read-only thereafter.
    pub schemes: Arc<SchemeRepository>,
    /// Recommendation orchestrator with its injected classifier provider.
    pub recommender: CropRecommender,
    pub config: Config,
}
