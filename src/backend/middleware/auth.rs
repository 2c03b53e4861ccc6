/**
 * Authentication Guard
 *
 * `CurrentUser` is an extractor for pages that require a logged-in user.
 * It reads the `access_token` cookie, verifies the token and looks up the
 * user named in its `sub` claim.
 *
 * A request that fails the guard never reaches the handler and never sees a
 * bare 401. Instead a critical flash message is queued and the browser is
 * redirected (303) to the login page:
 *
 * - no cookie: "Invalid login credentials"
 * - bad signature, expired token, missing subject, unknown user or a
 *   database failure during lookup: "Access denied"
 */

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::users::{get_user_by_username, User};
use crate::backend::error::AppError;
use crate::backend::flash;
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;

/// Cookie carrying the signed access token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Where rejected requests are sent
pub const LOGIN_PATH: &str = "/login/";

/// The authenticated user behind the current request
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let jar = CookieJar::from_headers(&parts.headers);
        let Some(token) = jar.get(ACCESS_TOKEN_COOKIE).map(|cookie| cookie.value().to_owned()) else {
            tracing::debug!("No access token cookie on {}", parts.uri.path());
            flash::push_critical(&session, "Invalid login credentials");
            return Err(Redirect::to(LOGIN_PATH).into_response());
        };

        match authenticate(state, &token).await {
            Ok(user) => Ok(CurrentUser(user)),
            Err(e) => Err(e.into_flash_redirect(&session, LOGIN_PATH).into_response()),
        }
    }
}

/// Resolve a token to a stored user
///
/// Every failure is reported as `AppError::Authentication` so the user sees
/// the same message whichever check failed; the cause is only logged.
async fn authenticate(state: &AppState, token: &str) -> Result<User, AppError> {
    let username = state.tokens.subject(token).map_err(|e| {
        tracing::warn!("Rejected access token: {}", e);
        AppError::Authentication
    })?;

    match get_user_by_username(&state.db, &username).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            tracing::warn!("Access token for unknown user: {}", username);
            Err(AppError::Authentication)
        }
        Err(e) => {
            tracing::error!("User lookup failed during authentication: {:?}", e);
            Err(AppError::Authentication)
        }
    }
}
