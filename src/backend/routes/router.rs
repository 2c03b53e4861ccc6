/**
 * Router Configuration
 *
 * Combines all route groups into one router and wraps it in the shared
 * layers.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. Session middleware - loads the signed `session` cookie and writes it
 *    back when a handler queued or drained flash messages
 *
 * Static assets are served from `public/` under `/static`. Anything else
 * that does not match falls through to the 404 page.
 */

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::middleware::session::session_middleware;
use crate::backend::pages::home::not_found;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes and layers configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_page_routes(router);
    let router = configure_auth_routes(router);

    let router = router
        .nest_service("/static", ServeDir::new("public"))
        .fallback(not_found);

    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(app_state.clone(), session_middleware));

    router.layer(layers).with_state(app_state)
}
