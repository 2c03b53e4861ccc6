use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::backend::error::AppError;
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;
use crate::backend::templates::{render, render_page, views::{NotFoundView, PageView}};

/// `GET /`
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Html<String>, AppError> {
    render_page(&state.templates, &session, "index.html", PageView::new)
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let view = NotFoundView {
        path: uri.path().to_string(),
    };
    match render(&state.templates, "not_found.html", &view) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(e) => e.into_response(),
    }
}
