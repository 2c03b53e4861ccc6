//! Lessonweb - Main Library
//!
//! Lessonweb is a small teaching site built on Axum. It serves a series of
//! template lessons rendered with Tera, a flash-message form demo, and a
//! username/password authentication demo backed by SQLite.
//!
//! # Module Structure
//!
//! - **`shared`** - Plain data types used across the crate
//!   - Flash message and severity types
//!   - Application configuration and its errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware and handlers
//!   - Template engine setup and view models
//!   - Authentication (bcrypt hashes, JWT cookie, user table)
//!   - Signed-cookie session with a flash queue
//!
//! # Usage
//!
//! ```rust,no_run
//! use lessonweb::backend::server::init::create_app;
//! use lessonweb::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handler failures never surface as bare status codes to the browser. They
//! degrade to a redirect plus a flash message; see `backend::error`.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
