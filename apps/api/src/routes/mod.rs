pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::compile::handlers as compile;
use crate::editor::handlers as editor;
use crate::state::AppState;
use crate::template;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template source
        .route("/main.tex", get(template::handle_get_template_raw))
        .route(
            "/api/v1/template",
            get(template::handle_get_template).put(template::handle_save_template),
        )
        // Editing session
        .route(
            "/api/v1/session",
            post(editor::handle_load_session).get(editor::handle_get_session),
        )
        .route("/api/v1/session/bullets", post(editor::handle_create_bullet))
        .route(
            "/api/v1/session/bullets/:id",
            patch(editor::handle_update_bullet).delete(editor::handle_remove_bullet),
        )
        .route(
            "/api/v1/session/bullets/:id/replace",
            post(editor::handle_replace_bullet),
        )
        .route("/api/v1/session/render", post(editor::handle_render))
        .route(
            "/api/v1/session/render/download",
            get(editor::handle_render_download),
        )
        .route("/api/v1/session/compile", post(compile::handle_compile))
        // Replacement catalog
        .route(
            "/api/v1/catalog",
            get(catalog::handle_get_catalog).put(catalog::handle_set_catalog),
        )
        .route("/api/v1/catalog/points", post(catalog::handle_add_point))
        .route(
            "/api/v1/catalog/points/:index",
            put(catalog::handle_edit_point).delete(catalog::handle_delete_point),
        )
        .with_state(state)
}
