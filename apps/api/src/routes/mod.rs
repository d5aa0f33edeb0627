pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::identity;
use crate::recommend;
use crate::schemes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity extraction
        .route("/api/v1/signup", post(identity::handlers::handle_signup))
        // Scheme listings
        .route(
            "/api/v1/schemes",
            get(schemes::handlers::handle_list_schemes),
        )
        // Crop recommendation
        .route(
            "/api/v1/crops/recommend",
            post(recommend::handlers::handle_recommend),
        )
        .route(
            "/api/v1/crops",
            get(recommend::handlers::handle_supported_crops),
        )
        .route(
            "/api/v1/crops/:name",
            get(recommend::handlers::handle_crop_details),
        )
        .with_state(state)
}
