/**
 * User Model and Database Operations
 *
 * One `users` table: an auto-assigned id, a unique username and the bcrypt
 * hash of the password. Rows are created on registration and only read
 * afterwards.
 */

use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::AppError;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Create a new user
///
/// # Errors
///
/// * `AppError::DuplicateUsername` - the username is already taken
/// * `AppError::Database` - any other database failure
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, AppError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES (?, ?)
        RETURNING id, username, password_hash
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
            Err(AppError::DuplicateUsername(username.to_string()))
        }
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::connect_database;

    async fn pool() -> SqlitePool {
        connect_database("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let pool = pool().await;

        let user = create_user(&pool, "alice", "$2b$04$hash").await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.username, "alice");

        let fetched = get_user_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(fetched.id, user.id);
        assert_eq!(fetched.password_hash, "$2b$04$hash");
    }

    #[tokio::test]
    async fn test_missing_user() {
        let pool = pool().await;
        assert!(get_user_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let pool = pool().await;
        create_user(&pool, "bob", "h1").await.unwrap();

        let err = create_user(&pool, "bob", "h2").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateUsername(ref name) if name == "bob"));
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let pool = pool().await;
        let a = create_user(&pool, "a", "h").await.unwrap();
        let b = create_user(&pool, "b", "h").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".into(),
            password_hash: "secret".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }
}
