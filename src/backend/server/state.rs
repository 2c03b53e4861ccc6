/**
 * Application State
 *
 * `AppState` holds everything handlers share: the database pool, the
 * template engine, the token manager, the password hasher and the key that
 * signs the session cookie. All of it is immutable after startup, so
 * cloning the state per request is just reference counting.
 *
 * The `FromRef` impls let handlers and extractors take only what they need,
 * e.g. `State<SqlitePool>`, and let `SignedCookieJar` find its key.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::SqlitePool;
use tera::Tera;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::tokens::TokenManager;
use crate::backend::error::StartupError;
use crate::backend::templates;
use crate::shared::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub templates: Arc<Tera>,
    pub tokens: Arc<TokenManager>,
    pub hasher: PasswordHasher,
    /// Verified against when a login names an unknown user
    pub dummy_hash: Arc<str>,
    /// Signs the `session` cookie
    pub cookie_key: Key,
    /// `Secure` attribute of the `access_token` cookie
    pub cookie_secure: bool,
}

impl AppState {
    /// Build the state from validated configuration and an open pool
    pub fn new(config: &AppConfig, db: SqlitePool) -> Result<Self, StartupError> {
        config.validate()?;

        let secret = config.secret_key.as_bytes();
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        Ok(Self {
            db,
            templates: Arc::new(templates::build_engine()?),
            tokens: Arc::new(TokenManager::new(secret, config.token_ttl)),
            dummy_hash: Arc::from(hasher.dummy_hash()?),
            hasher,
            cookie_key: Key::derive_from(secret),
            cookie_secure: config.cookie_secure,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;

    fn config(secret: &str) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            database_url: "sqlite::memory:".into(),
            secret_key: secret.into(),
            token_ttl: std::time::Duration::from_secs(60),
            cookie_secure: false,
            bcrypt_cost: 4,
        }
    }

    #[tokio::test]
    async fn test_state_from_config() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let state = AppState::new(&config("0123456789abcdef0123456789abcdef"), pool).unwrap();

        assert!(!state.cookie_secure);
        assert_eq!(state.tokens.ttl(), std::time::Duration::from_secs(60));
        assert_eq!(Key::from_ref(&state).master(), state.cookie_key.master());
    }

    #[tokio::test]
    async fn test_short_secret_rejected() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let result = AppState::new(&config("short"), pool);
        assert!(matches!(result, Err(StartupError::Config(_))));
    }
}
