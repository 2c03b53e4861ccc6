/**
 * Registration Handlers
 *
 * `GET /create_account/` renders the form. `POST /create_account/` checks
 * the form, hashes the password and inserts the user. Every outcome is a
 * flash message plus a 303 redirect:
 *
 * - success: "Account created successfully", back to `/`
 * - anything else: the error's user message, back to the form
 *
 * The password hash is never logged.
 */

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use validator::Validate;

use crate::backend::auth::handlers::types::{first_error_message, SignupForm};
use crate::backend::auth::users::{create_user, User};
use crate::backend::error::AppError;
use crate::backend::flash;
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;
use crate::backend::templates::{render_page, views::PageView};

pub const CREATE_ACCOUNT_PATH: &str = "/create_account/";

pub async fn create_account_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    render_page(&state.templates, &session, "create_account.html", PageView::new)
}

pub async fn create_account(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Redirect {
    match register(&state, form).await {
        Ok(user) => {
            tracing::info!("Account created: {} (id {})", user.username, user.id);
            flash::push_success(&session, "Account created successfully");
            Redirect::to("/")
        }
        Err(e) => e.into_flash_redirect(&session, CREATE_ACCOUNT_PATH),
    }
}

async fn register(
    state: &AppState,
    form: Result<Form<SignupForm>, FormRejection>,
) -> Result<User, AppError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Rejected registration body: {}", e);
        AppError::validation("Invalid form data")
    })?;

    form.validate()
        .map_err(|e| AppError::validation(first_error_message(&e)))?;

    if form.password != form.password_repeat {
        return Err(AppError::validation("Passwords must match"));
    }

    let password_hash = state.hasher.hash_async(form.password).await?;
    create_user(&state.db, &form.username, &password_hash).await
}
