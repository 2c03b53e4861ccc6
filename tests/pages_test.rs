//! Lesson pages, static assets and the 404 fallback

mod common;

use axum::http::StatusCode;

use common::TestApp;

async fn page(app: &TestApp, path: &str) -> String {
    let response = app.server.get(path).await;
    assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
    response.text()
}

fn assert_contains(body: &str, needles: &[&str]) {
    for needle in needles {
        assert!(body.contains(needle), "missing {needle:?} in:\n{body}");
    }
}

#[tokio::test]
async fn test_lesson_index_links_every_lesson() {
    let app = TestApp::new().await;
    let body = page(&app, "/lessons/").await;

    assert_contains(&body, &["/lessons/raw/", "/lessons/ex1/", "/lessons/ex10/"]);
}

#[tokio::test]
async fn test_raw_html() {
    let app = TestApp::new().await;
    assert_contains(&page(&app, "/lessons/raw/").await, &["no template involved"]);
}

#[tokio::test]
async fn test_variables_and_iteration() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex1/").await,
        &["1. Rust", "4. C", "First: Rust, last: C", "Ivan, 30 years old, lives in Kazan", "Same field by key: Kazan"],
    );
}

#[tokio::test]
async fn test_conditions() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex2/").await,
        &["The flag is set, the label is primary", "Mode two", "User is inactive"],
    );
}

#[tokio::test]
async fn test_type_tests() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex3/").await,
        &["boolean", "mapping", "sequence", "missing is undefined", "42 is divisible by three", "empty is empty", "1 (odd)", "4 (even)"],
    );
}

#[tokio::test]
async fn test_functions() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex4/").await,
        &["test text", "Hello, Ivan", "Hello, Oleg", "Counting: 1, 2, 3"],
    );
}

#[tokio::test]
async fn test_filters() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex5/").await,
        &[
            "2 is even",
            "3 is odd",
            "banana has 6 letters",
            "Upper: APPLE",
            "Title: Template Lessons Are Fun",
            "Joined: apple, banana, cherry",
            "Rounded: 1.23",
            "Count: 3",
            "Fallback: anonymous",
        ],
    );
}

#[tokio::test]
async fn test_template_variables() {
    let app = TestApp::new().await;
    assert_contains(&page(&app, "/lessons/ex6/").await, &["Hi there", "Total: 10", "[a][b][c]"]);
}

#[tokio::test]
async fn test_macros() {
    let app = TestApp::new().await;
    assert_contains(&page(&app, "/lessons/ex7/").await, &["Login field", "Password field", "password"]);
}

#[tokio::test]
async fn test_inheritance() {
    let app = TestApp::new().await;
    let body = page(&app, "/lessons/ex8/").await;
    assert_contains(&body, &["Header from the layout", "Header added by the child", "Body replaced by the child"]);
    assert!(!body.contains("Body from the layout"));
}

#[tokio::test]
async fn test_include_and_import() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex9/").await,
        &["This notice was included from a partial", "Imported macro", "This card comes from the macro file"],
    );
}

#[tokio::test]
async fn test_scopes() {
    let app = TestApp::new().await;
    assert_contains(
        &page(&app, "/lessons/ex10/").await,
        &["Counter after the loop: 0", "Last seen item: third"],
    );
}

#[tokio::test]
async fn test_auth_forms_render() {
    let app = TestApp::new().await;
    assert_contains(&page(&app, "/login/").await, &["name=\"username\"", "name=\"password\""]);
    assert_contains(&page(&app, "/create_account/").await, &["name=\"password_repeat\""]);
}

#[tokio::test]
async fn test_static_stylesheet() {
    let app = TestApp::new().await;
    let response = app.server.get("/static/style.css").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains(".flash-critical"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = TestApp::new().await;
    let response = app.server.get("/does-not-exist").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.text().contains("Nothing lives at"));
}
