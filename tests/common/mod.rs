//! Common test utilities
//!
//! Every test gets its own application on a fresh in-memory database.
//! Cookies are passed explicitly from one response to the next request, the
//! way a browser would.

#![allow(dead_code)]

use axum_test::{TestResponse, TestServer};
use cookie::Cookie;
use lessonweb::backend::server::{config::connect_database, create_app_with_pool};
use lessonweb::shared::AppConfig;
use sqlx::SqlitePool;

pub const SECRET: &str = "integration-test-secret-at-least-32-bytes";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .secret_key(SECRET)
        .database_url("sqlite::memory:")
        .cookie_secure(false)
        .bcrypt_cost(4)
        .build()
        .expect("valid test configuration")
}

pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let pool = connect_database(&config.database_url).await.unwrap();
        let app = create_app_with_pool(&config, pool.clone()).unwrap();
        Self {
            server: TestServer::new(app).unwrap(),
            pool,
        }
    }

    pub async fn register(&self, username: &str, password: &str, password_repeat: &str) -> TestResponse {
        self.server
            .post("/create_account/")
            .form(&[
                ("username", username),
                ("password", password),
                ("password_repeat", password_repeat),
            ])
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/login/")
            .form(&[("username", username), ("password", password)])
            .await
    }

    /// GET the redirect target of `response`, carrying its session cookie
    pub async fn follow(&self, response: &TestResponse) -> TestResponse {
        let location = location(response);
        let mut request = self.server.get(&location);
        if let Some(session) = session_cookie(response) {
            request = request.add_cookie(session);
        }
        request.await
    }
}

pub fn location(response: &TestResponse) -> String {
    response.header("location").to_str().unwrap().to_string()
}

pub fn session_cookie(response: &TestResponse) -> Option<Cookie<'static>> {
    response.cookies().get("session").cloned()
}

pub fn access_token_cookie(response: &TestResponse) -> Option<Cookie<'static>> {
    response.cookies().get("access_token").cloned()
}
