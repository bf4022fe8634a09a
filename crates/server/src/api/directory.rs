//! # Directory API
//!
//! Read-only email lookup of the mock directory service.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use onboarding_core::models::DirectoryEntry;
use onboarding_core::state::DirectoryStore;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::error::{ApiError, ErrorResponse};
use super::HealthResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DirectoryEntryResponse {
    pub email: String,
    pub department: String,
    /// Manager's email
    pub manager: String,
}

impl From<DirectoryEntry> for DirectoryEntryResponse {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            email: entry.email,
            department: entry.department,
            manager: entry.manager,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Directory API",
        version = "1.0.0",
        description = "Email to department and manager lookup"
    ),
    paths(get_directory_entry),
    components(schemas(DirectoryEntryResponse, ErrorResponse)),
    tags((name = "directory", description = "Organization directory"))
)]
struct DirectoryApiDoc;

pub fn directory_router(store: DirectoryStore) -> Router {
    Router::new()
        .route("/directory/:email", get(get_directory_entry))
        .route("/health", get(health))
        .route("/openapi.json", get(serve_openapi))
        .with_state(store)
}

/// Look up an employee by exact email
#[utoipa::path(
    get,
    path = "/directory/{email}",
    tag = "directory",
    params(("email" = String, Path, description = "Employee email")),
    responses(
        (status = 200, description = "Directory entry", body = DirectoryEntryResponse),
        (status = 404, description = "No entry for this email", body = ErrorResponse)
    )
)]
async fn get_directory_entry(
    State(store): State<DirectoryStore>,
    Path(email): Path<String>,
) -> Result<Json<DirectoryEntryResponse>, ApiError> {
    match store.get(&email) {
        Ok(entry) => Ok(Json(entry.into())),
        Err(e) => {
            tracing::debug!(email = %email, "Directory miss");
            Err(e.into())
        }
    }
}

async fn health(State(store): State<DirectoryStore>) -> Json<HealthResponse> {
    tracing::debug!(entries = store.len(), "Health check");
    Json(HealthResponse::ok("directory"))
}

async fn serve_openapi() -> impl IntoResponse {
    let spec = DirectoryApiDoc::openapi().to_json().unwrap_or_default();
    ([(header::CONTENT_TYPE, "application/json")], spec)
}
