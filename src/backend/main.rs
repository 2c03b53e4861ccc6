/**
 * lessonweb Server Entry Point
 *
 * Loads configuration from the environment (and `.env`), builds the
 * application and serves it until the process is stopped.
 */

use lessonweb::backend::error::StartupError;
use lessonweb::backend::server::{bind_listener, create_app};
use lessonweb::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let app = create_app(&config).await?;

    let listener = bind_listener(&config).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
