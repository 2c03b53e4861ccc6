/**
 * Server Initialization
 *
 * 1. Open the database and apply migrations
 * 2. Build the shared state (templates, token manager, cookie key)
 * 3. Create the router
 * 4. Bind the listening socket
 *
 * Any failure here is a startup error; the binary exits non-zero.
 */

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;

use crate::backend::error::StartupError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing lessonweb server");
    config.validate()?;

    let pool = connect_database(&config.database_url).await?;
    create_app_with_pool(config, pool)
}

/// Create the application on an already opened pool
pub fn create_app_with_pool(config: &AppConfig, pool: SqlitePool) -> Result<Router<()>, StartupError> {
    let app_state = AppState::new(config, pool)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

/// Bind the configured `host:port`
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(port: u16) -> AppConfig {
        AppConfig::builder()
            .host("127.0.0.1")
            .port(port)
            .secret_key("init-test-secret-init-test-secret-!!")
            .database_url("sqlite::memory:")
            .bcrypt_cost(4)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_bind_listener() {
        let listener = bind_listener(&config(0)).await.unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[tokio::test]
    async fn test_port_in_use_is_io_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let result = bind_listener(&config(port)).await;
        assert!(matches!(result, Err(StartupError::Io(_))));
    }

    #[tokio::test]
    async fn test_create_app_rejects_short_secret() {
        let mut config = config(0);
        config.secret_key = "short".into();
        let result = create_app(&config).await;
        assert!(matches!(result, Err(StartupError::Config(_))));
    }
}
