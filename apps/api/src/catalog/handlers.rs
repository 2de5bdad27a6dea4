use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PointRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct CatalogSaveResponse {
    pub success: bool,
    pub count: usize,
}

/// GET /api/v1/catalog
///
/// Never fails: an unavailable backend falls back to the built-in defaults.
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.load_points().await)
}

/// PUT /api/v1/catalog
pub async fn handle_set_catalog(
    State(state): State<AppState>,
    Json(points): Json<Vec<String>>,
) -> Result<Json<CatalogSaveResponse>, AppError> {
    save(&state, &points).await?;
    Ok(Json(CatalogSaveResponse {
        success: true,
        count: points.len(),
    }))
}

/// POST /api/v1/catalog/points
pub async fn handle_add_point(
    State(state): State<AppState>,
    Json(req): Json<PointRequest>,
) -> Result<Json<CatalogSaveResponse>, AppError> {
    let text = validated(&req.text)?;
    let mut points = state.catalog.load_points().await;
    points.push(text);
    save(&state, &points).await?;
    Ok(Json(CatalogSaveResponse {
        success: true,
        count: points.len(),
    }))
}

/// PUT /api/v1/catalog/points/:index
pub async fn handle_edit_point(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<PointRequest>,
) -> Result<Json<CatalogSaveResponse>, AppError> {
    let text = validated(&req.text)?;
    let mut points = state.catalog.load_points().await;
    let slot = points
        .get_mut(index)
        .ok_or_else(|| AppError::NotFound(format!("Replacement point {index} not found")))?;
    *slot = text;
    save(&state, &points).await?;
    Ok(Json(CatalogSaveResponse {
        success: true,
        count: points.len(),
    }))
}

/// DELETE /api/v1/catalog/points/:index
pub async fn handle_delete_point(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<CatalogSaveResponse>, AppError> {
    let mut points = state.catalog.load_points().await;
    if index >= points.len() {
        return Err(AppError::NotFound(format!(
            "Replacement point {index} not found"
        )));
    }
    points.remove(index);
    save(&state, &points).await?;
    Ok(Json(CatalogSaveResponse {
        success: true,
        count: points.len(),
    }))
}

fn validated(text: &str) -> Result<String, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Replacement point cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

async fn save(state: &AppState, points: &[String]) -> Result<(), AppError> {
    state
        .catalog
        .save_points(points)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_trims_surrounding_whitespace() {
        assert_eq!(validated("  keep me  ").unwrap(), "keep me");
    }

    #[test]
    fn test_validated_rejects_blank_text() {
        assert!(matches!(validated("   "), Err(AppError::Validation(_))));
    }
}
