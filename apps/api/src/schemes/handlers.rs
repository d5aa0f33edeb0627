//! Axum route handlers for the government schemes API.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::schemes::models::Scheme;
use crate::schemes::repository::SchemeQuery;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SchemeQueryParams {
    pub state: Option<String>,
    pub category: Option<String>,
    pub income: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SchemesResponse {
    pub count: usize,
    pub schemes: Vec<Scheme>,
}

/// GET /api/v1/schemes?state=&category=&income=&gender=
///
/// Serves the cleaned scheme list with optional case-insensitive filters.
pub async fn handle_list_schemes(
    State(state): State<AppState>,
    Query(params): Query<SchemeQueryParams>,
) -> Json<SchemesResponse> {
    let query = SchemeQuery {
        state: params.state,
        category: params.category,
        income: params.income,
        gender: params.gender,
    };
    let schemes = state.schemes.filter(&query);
    Json(SchemesResponse {
        count: schemes.len(),
        schemes,
    })
}
