use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::editor::handlers::RenderRequest;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/session/compile
///
/// Renders the current session and compiles it. On success the response is
/// the raw PDF; failures are structured JSON with the compiler log and
/// remediation suggestions. Editor state is never touched either way.
pub async fn handle_compile(
    State(state): State<AppState>,
    body: Option<Json<RenderRequest>>,
) -> Result<Response, AppError> {
    let editor_text = body.and_then(|Json(req)| req.editor_text);

    let latex = {
        let session = state.session.read().await;
        session
            .render(editor_text.as_deref())
            .ok_or_else(|| AppError::Validation("No document loaded".to_string()))?
    };

    let compiled = state.compiler.compile(&latex).await?;
    if let Some(log) = &compiled.log {
        tracing::debug!("pdflatex log captured ({} bytes)", log.len());
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        compiled.pdf,
    )
        .into_response())
}
