//! Axum route handlers for the identity document extraction API.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::identity::models::IdentityDetails;
use crate::state::AppState;
use crate::vision_client::prompts::AADHAAR_EXTRACT_PROMPT;

/// The multipart field the frontend uploads the card image under.
const IMAGE_FIELD: &str = "aadhaarImage";
const DEFAULT_MIME: &str = "image/jpeg";

/// POST /api/v1/signup (multipart)
///
/// Forwards the uploaded Aadhaar image to the vision provider and returns the
/// extracted details. 400 when no image field is present; provider failures
/// surface as a 500 extraction error.
pub async fn handle_signup(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IdentityDetails>, AppError> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let is_image_field = field.name() == Some(IMAGE_FIELD);
        let mime = field
            .content_type()
            .unwrap_or(DEFAULT_MIME)
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        if data.is_empty() {
            continue;
        }
        // Prefer the named field; keep the first non-empty one as a fallback.
        if is_image_field {
            image = Some((data.to_vec(), mime));
            break;
        }
        if image.is_none() {
            image = Some((data.to_vec(), mime));
        }
    }

    let (data, mime) =
        image.ok_or_else(|| AppError::Validation("No image provided".to_string()))?;

    info!(bytes = data.len(), mime = %mime, "extracting identity document");

    // The extraction schema wraps results in a single-element array.
    let mut extracted: Vec<IdentityDetails> = state
        .vision
        .extract_json(AADHAAR_EXTRACT_PROMPT, &data, &mime)
        .await
        .map_err(|e| AppError::Extraction(format!("Failed to analyze image: {e}")))?;

    if extracted.is_empty() {
        return Err(AppError::Extraction(
            "Failed to analyze image: provider returned no records".to_string(),
        ));
    }
    let details = extracted.remove(0);
    info!(location = %details.location, "identity document extracted");

    Ok(Json(details))
}
