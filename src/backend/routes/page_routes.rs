/**
 * Page Routes
 *
 * - `GET /` - Home page
 * - `GET|POST /flash/` - Flash message demo
 * - `GET /lessons/...` - Template lessons
 */

use axum::{routing::get, Router};

use crate::backend::lessons::handlers as lessons;
use crate::backend::pages::{flash_demo, home};
use crate::backend::server::state::AppState;

pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home::index))
        .route("/flash/", get(flash_demo::flash_page).post(flash_demo::submit_name))
        .route("/lessons/", get(lessons::lessons_index))
        .route("/lessons/raw/", get(lessons::raw_html))
        .route("/lessons/ex1/", get(lessons::ex1))
        .route("/lessons/ex2/", get(lessons::ex2))
        .route("/lessons/ex3/", get(lessons::ex3))
        .route("/lessons/ex4/", get(lessons::ex4))
        .route("/lessons/ex5/", get(lessons::ex5))
        .route("/lessons/ex6/", get(lessons::ex6))
        .route("/lessons/ex7/", get(lessons::ex7))
        .route("/lessons/ex8/", get(lessons::ex8))
        .route("/lessons/ex9/", get(lessons::ex9))
        .route("/lessons/ex10/", get(lessons::ex10))
}
