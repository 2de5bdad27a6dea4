//! Template source endpoints: the `main.tex` file the session loads from.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SaveTemplateRequest {
    pub content: String,
}

#[derive(Serialize)]
pub struct TemplateResponse {
    pub content: String,
}

pub async fn read_template(state: &AppState) -> Result<String, AppError> {
    tokio::fs::read_to_string(&state.config.template_path)
        .await
        .map_err(|_| {
            AppError::NotFound(format!(
                "{} not found",
                state.config.template_path.display()
            ))
        })
}

/// GET /api/v1/template
pub async fn handle_get_template(
    State(state): State<AppState>,
) -> Result<Json<TemplateResponse>, AppError> {
    let content = read_template(&state).await?;
    Ok(Json(TemplateResponse { content }))
}

/// GET /main.tex, the raw file for direct inspection.
pub async fn handle_get_template_raw(State(state): State<AppState>) -> Result<String, AppError> {
    read_template(&state).await
}

/// PUT /api/v1/template
pub async fn handle_save_template(
    State(state): State<AppState>,
    Json(req): Json<SaveTemplateRequest>,
) -> Result<Json<Value>, AppError> {
    if req.content.is_empty() {
        return Err(AppError::Validation(
            "No LaTeX content provided".to_string(),
        ));
    }

    tokio::fs::write(&state.config.template_path, &req.content)
        .await
        .map_err(|e| AppError::Persistence(format!("Failed to save template: {e}")))?;

    Ok(Json(json!({
        "success": true,
        "message": "LaTeX content saved successfully"
    })))
}
