use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agroboost_api::config::Config;
use agroboost_api::recommend::classifier::{ArtifactProvider, ClassifierProvider};
use agroboost_api::recommend::orchestrator::CropRecommender;
use agroboost_api::routes::build_router;
use agroboost_api::schemes::repository::SchemeRepository;
use agroboost_api::state::AppState;
use agroboost_api::vision_client::{self, VisionClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("agroboost_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AgroBoost API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize vision client
    let vision = VisionClient::new(config.gemini_api_key.clone());
    info!("Vision client initialized (model: {})", vision_client::MODEL);

    // Scheme repository: static file loaded once; degrades to the built-in
    // list if the file is unusable.
    let schemes = Arc::new(SchemeRepository::load_or_fallback(&config.schemes_path));
    info!(count = schemes.all().len(), "scheme repository ready");

    // Crop recommender with the on-disk model artifact. A missing artifact is
    // not fatal: the orchestrator degrades to the rule-based recommender.
    let provider = Arc::new(ArtifactProvider::new(&config.crop_model_path));
    if let Err(e) = provider.load() {
        tracing::warn!("crop model artifact unavailable at startup: {e}");
    }
    let recommender = CropRecommender::new(provider);

    // Build app state
    let state = AppState {
        vision,
        schemes,
        recommender,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
