//! Standalone crop recommendation helper.
//!
//! Takes a JSON object of soil/climate parameters, runs the same
//! classifier-then-fallback pipeline as the HTTP API, and prints the result
//! JSON to stdout. Diagnostics go to stderr only, so the stdout stream stays
//! machine-readable for callers that shell out to this binary.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use agroboost_api::recommend::classifier::ArtifactProvider;
use agroboost_api::recommend::features::FeatureVector;
use agroboost_api::recommend::orchestrator::CropRecommender;

#[derive(Debug, Parser)]
#[command(
    name = "crop-recommend",
    about = "Recommend crops from soil/climate parameters"
)]
struct Cli {
    /// JSON object with optional numeric fields N, P, K, temperature,
    /// humidity, ph, rainfall. Read from stdin when omitted.
    input: Option<String>,

    /// Path to the trained model artifact.
    #[arg(long, default_value = "data/crop_model.json")]
    model_path: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = match cli.input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                return fail(&format!("failed to read stdin: {e}"));
            }
            buf
        }
    };

    // Individual fields are lenient (missing/non-numeric coerce to zero);
    // only an input that is not a JSON object at all is an error.
    let features: FeatureVector = match serde_json::from_str(&raw) {
        Ok(features) => features,
        Err(e) => return fail(&format!("invalid input JSON: {e}")),
    };

    let recommender = CropRecommender::new(Arc::new(ArtifactProvider::new(cli.model_path)));
    let report = recommender.get_recommendations(&features);

    match serde_json::to_string(&report) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&format!("failed to serialize result: {e}")),
    }
}

/// Emits the error envelope on stdout (the contract for callers capturing
/// output) and exits non-zero.
fn fail(message: &str) -> ExitCode {
    eprintln!("crop-recommend error: {message}");
    println!("{}", json!({ "success": false, "error": message }));
    ExitCode::FAILURE
}
