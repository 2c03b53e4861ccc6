/**
 * Login Handlers
 *
 * `GET /login/` renders the form. `POST /login/` checks the credentials
 * and, on success, stores a freshly issued access token in the
 * `access_token` cookie and redirects to the protected page.
 *
 * An unknown username and a wrong password produce the same message.
 */

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::time::Duration;

use crate::backend::auth::handlers::types::LoginForm;
use crate::backend::auth::users::{get_user_by_username, User};
use crate::backend::error::AppError;
use crate::backend::flash;
use crate::backend::middleware::auth::{ACCESS_TOKEN_COOKIE, LOGIN_PATH};
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;
use crate::backend::templates::{render_page, views::PageView};

/// Landing page after a successful login
pub const AFTER_LOGIN_PATH: &str = "/test/";

pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    render_page(&state.templates, &session, "login.html", PageView::new)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let result = match check_credentials(&state, form).await {
        Ok(user) => state
            .tokens
            .issue(&user.username)
            .map(|token| (user, token))
            .map_err(AppError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok((user, token)) => {
            tracing::info!("User logged in: {}", user.username);
            flash::push_success(&session, "Login successful");
            let cookie = access_token_cookie(token, state.tokens.ttl(), state.cookie_secure);
            (jar.add(cookie), Redirect::to(AFTER_LOGIN_PATH)).into_response()
        }
        Err(e) => e.into_flash_redirect(&session, LOGIN_PATH).into_response(),
    }
}

async fn check_credentials(
    state: &AppState,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<User, AppError> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Rejected login body: {}", e);
        AppError::InvalidCredentials
    })?;

    let user = get_user_by_username(&state.db, &form.username).await?;

    // Unknown users are checked against the dummy hash so both paths cost
    // one bcrypt verification.
    let stored_hash = match &user {
        Some(user) => user.password_hash.clone(),
        None => state.dummy_hash.to_string(),
    };
    let valid = state.hasher.verify_async(form.password, stored_hash).await?;

    match user {
        Some(user) if valid => Ok(user),
        _ => Err(AppError::InvalidCredentials),
    }
}

/// Build the `access_token` cookie; its lifetime matches the token's
pub fn access_token_cookie(token: String, ttl: Duration, secure: bool) -> Cookie<'static> {
    let max_age = cookie::time::Duration::seconds(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX));

    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .build()
}
