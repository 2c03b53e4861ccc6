/**
 * Backend Error Types
 *
 * Handler failures fall into four user-facing groups:
 *
 * - Validation errors (malformed form input) redirect back with a flash
 * - Duplicate usernames redirect back with a flash
 * - Authentication errors redirect to the login page with a generic flash
 * - Everything else is logged and reported with a generic flash
 *
 * The remaining variants wrap library errors so `?` works inside handlers;
 * they all count as unexpected.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::auth::tokens::TokenError;
use crate::shared::config::ConfigError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Form input failed shape validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Username unique constraint violated on insert
    #[error("User with login {0} already exists")]
    DuplicateUsername(String),

    /// Unknown username or wrong password on login
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// Bad or expired token, or unknown token subject
    #[error("Authentication failed")]
    Authentication,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Any other runtime failure (e.g. a panicked blocking task)
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Binding the listener or serving failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Whether this error is caused by the user rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::DuplicateUsername(_)
                | Self::InvalidCredentials
                | Self::Authentication
        )
    }

    /// Status code used when the error is rendered directly
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateUsername(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Database(_)
            | Self::Template(_)
            | Self::Token(_)
            | Self::Hashing(_)
            | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to the user
    ///
    /// Server-side failures never leak their details.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::DuplicateUsername(_) | Self::InvalidCredentials => self.to_string(),
            Self::Authentication => "Access denied".to_string(),
            _ => "Unexpected error, please try again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(AppError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::DuplicateUsername("bob".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(AppError::Authentication.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::unexpected("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_message_names_user() {
        let error = AppError::DuplicateUsername("alice".into());
        assert_eq!(error.user_message(), "User with login alice already exists");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_credentials_message_does_not_say_which_part_failed() {
        let error = AppError::InvalidCredentials;
        assert_eq!(error.user_message(), "Invalid login or password");
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unexpected_message_is_generic() {
        let error = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(error.user_message(), "Unexpected error, please try again");
        assert!(!error.is_client_error());
    }
}
