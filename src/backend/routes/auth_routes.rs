/**
 * Authentication Routes
 *
 * - `GET|POST /login/` - Login form and submission
 * - `GET|POST /create_account/` - Registration form and submission
 * - `GET /test/` - Protected page (requires the `access_token` cookie)
 */

use axum::{routing::get, Router};

use crate::backend::auth::{create_account, create_account_page, login, login_page, protected_page};
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/login/", get(login_page).post(login))
        .route("/create_account/", get(create_account_page).post(create_account))
        .route("/test/", get(protected_page))
}
