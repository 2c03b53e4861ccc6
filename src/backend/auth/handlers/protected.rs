/**
 * Protected Page
 *
 * `GET /test/` is only reachable through the `CurrentUser` guard; the
 * handler itself just greets the user.
 */

use axum::{extract::State, response::Html};

use crate::backend::error::AppError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;
use crate::backend::templates::{render_page, views::ProtectedView};

pub async fn protected_page(
    State(state): State<AppState>,
    session: Session,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    tracing::debug!("Protected page for {}", user.username);
    render_page(&state.templates, &session, "test.html", |flashed_messages| ProtectedView {
        flashed_messages,
        username: user.username,
    })
}
