use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::editor::grouping::{group_by_company, CompanyGroup};
use crate::editor::session::NEW_BULLET_PLACEHOLDER;
use crate::errors::AppError;
use crate::state::AppState;
use crate::template::read_template;

#[derive(Deserialize, Default)]
pub struct LoadSessionRequest {
    /// LaTeX source to load. When absent, the template file is used.
    pub content: Option<String>,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub loaded: bool,
    pub bullet_count: usize,
    pub groups: Vec<CompanyGroup>,
}

#[derive(Deserialize)]
pub struct CreateBulletRequest {
    pub company: String,
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBulletRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ReplaceBulletRequest {
    /// Position of the chosen entry in the replacement catalog.
    pub catalog_index: usize,
}

#[derive(Deserialize, Default)]
pub struct RenderRequest {
    /// Current editor text, when it has diverged from the loaded snapshot.
    pub editor_text: Option<String>,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub content: String,
}

fn grouped(state: &AppState, session: &crate::editor::session::EditorSession) -> SessionResponse {
    SessionResponse {
        loaded: session.document().is_some(),
        bullet_count: session.store().len(),
        groups: group_by_company(session.store().all(), &state.config.company_order),
    }
}

/// POST /api/v1/session
///
/// Loads a document (request body or the template file) and rebuilds the
/// bullet store. A missing Experience section is a blocking 422 and leaves
/// the previous session state untouched.
pub async fn handle_load_session(
    State(state): State<AppState>,
    body: Option<Json<LoadSessionRequest>>,
) -> Result<Json<SessionResponse>, AppError> {
    let source = match body.and_then(|Json(req)| req.content) {
        Some(content) => content,
        None => read_template(&state).await?,
    };

    let mut session = state.session.write().await;
    session.load(source)?;
    if session.store().is_empty() {
        tracing::warn!("Experience section contains no \\resumeItem entries");
    }
    tracing::info!("Session loaded: {} bullets extracted", session.store().len());
    Ok(Json(grouped(&state, &session)))
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(grouped(&state, &session))
}

/// POST /api/v1/session/bullets
pub async fn handle_create_bullet(
    State(state): State<AppState>,
    Json(req): Json<CreateBulletRequest>,
) -> Result<(StatusCode, Json<crate::editor::store::BulletRecord>), AppError> {
    if req.company.trim().is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()));
    }
    let text = req
        .text
        .unwrap_or_else(|| NEW_BULLET_PLACEHOLDER.to_string());

    let mut session = state.session.write().await;
    let id = session.create_bullet(&req.company, &text);
    let record = session
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("created bullet {id} vanished")))?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/v1/session/bullets/:id
pub async fn handle_update_bullet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateBulletRequest>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.write().await;
    if !session.store_mut().update(id, &req.text) {
        return Err(AppError::NotFound(format!("Bullet {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/session/bullets/:id
pub async fn handle_remove_bullet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut session = state.session.write().await;
    if !session.store_mut().remove(id) {
        return Err(AppError::NotFound(format!("Bullet {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/session/bullets/:id/replace
///
/// Sets the bullet's text from a replacement-catalog entry. The catalog is
/// read-only here; a load failure falls back to defaults rather than
/// blocking the edit.
pub async fn handle_replace_bullet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<ReplaceBulletRequest>,
) -> Result<StatusCode, AppError> {
    let points = state.catalog.load_points().await;
    let text = points.get(req.catalog_index).ok_or_else(|| {
        AppError::NotFound(format!(
            "Replacement point {} not found",
            req.catalog_index
        ))
    })?;

    let mut session = state.session.write().await;
    if !session.store_mut().update(id, text) {
        return Err(AppError::NotFound(format!("Bullet {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn render_session(
    session: &crate::editor::session::EditorSession,
    editor_text: Option<&str>,
) -> Result<String, AppError> {
    session
        .render(editor_text)
        .ok_or_else(|| AppError::Validation("No document loaded".to_string()))
}

/// POST /api/v1/session/render
pub async fn handle_render(
    State(state): State<AppState>,
    body: Option<Json<RenderRequest>>,
) -> Result<Json<RenderResponse>, AppError> {
    let editor_text = body.and_then(|Json(req)| req.editor_text);
    let session = state.session.read().await;
    let content = render_session(&session, editor_text.as_deref())?;
    Ok(Json(RenderResponse { content }))
}

/// GET /api/v1/session/render/download
///
/// The same rendered text, served as a file attachment.
pub async fn handle_render_download(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.read().await;
    let content = render_session(&session, None)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/x-tex"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.tex\"",
            ),
        ],
        content,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::RwLock;

    use super::*;
    use crate::catalog::store::{CatalogStore, FileCatalog};
    use crate::compile::LatexCompiler;
    use crate::config::Config;
    use crate::editor::session::EditorSession;

    const SOURCE: &str = "\\section{Experience}\n\\resumeItem{Did X}\n\\end{document}";

    fn test_state() -> AppState {
        AppState {
            session: Arc::new(RwLock::new(EditorSession::new())),
            catalog: Arc::new(CatalogStore::new(
                None,
                Arc::new(FileCatalog::new("missing-catalog.json".into())),
            )),
            compiler: Arc::new(LatexCompiler::new("pdflatex", 30)),
            config: Config {
                port: 0,
                template_path: "main.tex".into(),
                catalog_path: "replacement-points.json".into(),
                static_dir: "public".into(),
                redis_url: None,
                pdflatex_bin: "pdflatex".into(),
                compile_timeout_secs: 30,
                company_order: Vec::new(),
                rust_log: "info".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_download_serves_tex_source_as_attachment() {
        let state = test_state();
        state
            .session
            .write()
            .await
            .load(SOURCE.to_string())
            .unwrap();

        let response = handle_render_download(State(state)).await.unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/x-tex"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"resume.tex\""
        );
    }
}
