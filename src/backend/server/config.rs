/**
 * Server Configuration
 *
 * Database connection setup. Unlike the rest of the configuration (see
 * `shared::config`), this part needs the async runtime, so it lives with the
 * server.
 *
 * # Error Handling
 *
 * Failing to open the database or to apply migrations is a startup error;
 * the server does not run without its users table.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open the SQLite pool and apply embedded migrations
///
/// In-memory databases exist per connection, so they get a single connection
/// that is never recycled.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_database_has_users_table() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = connect_database("sqlite::memory:").await.unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    }
}
