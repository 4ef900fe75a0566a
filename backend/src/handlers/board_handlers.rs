use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::manifest::{self, ResourceEntry};
use crate::AppState;

pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ResourceEntry>>, (StatusCode, Json<serde_json::Value>)> {
    match manifest::list_resources(&state.upload_dir).await {
        Ok(entries) => {
            tracing::debug!("Listed {} resources from {}", entries.len(), state.upload_dir.display());
            Ok(Json(entries))
        }
        Err(e) => {
            tracing::error!("Failed to list resources: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to list resources"})),
            ))
        }
    }
}
