/**
 * Error Conversion
 *
 * Two ways an `AppError` leaves a handler:
 *
 * - `into_flash_redirect` queues the user message as a critical flash and
 *   redirects (303) to a page that will show it. Form handlers use this.
 * - `IntoResponse` renders a bare HTML error page. Only used where there is
 *   no page to go back to, such as a template that fails to render.
 */

use axum::response::{Html, IntoResponse, Redirect, Response};
use crate::backend::error::types::AppError;
use crate::backend::flash;
use crate::backend::middleware::session::Session;

impl AppError {
    /// Report the error to the user on the page at `to`
    pub fn into_flash_redirect(self, session: &Session, to: &str) -> Redirect {
        if self.is_client_error() {
            tracing::warn!("{}", self);
        } else {
            tracing::error!("{}", self);
        }
        flash::push_critical(session, self.user_message());
        Redirect::to(to)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html><html><head><title>{code} {reason}</title></head>\
             <body><h1>{code} {reason}</h1><p>{message}</p><a href=\"/\">Home</a></body></html>",
            code = status.as_u16(),
            message = self.user_message(),
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_server_error_response_hides_details() {
        let response = AppError::unexpected("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_flash_redirect_queues_message() {
        let session = Session::default();
        let redirect = AppError::validation("Passwords must match")
            .into_flash_redirect(&session, "/create_account/");

        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/create_account/");

        let messages = flash::drain(&session);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].msg, "Passwords must match");
        assert!(messages[0].is_critical());
    }
}
