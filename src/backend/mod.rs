//! Backend Module
//!
//! All server-side code: an Axum application that serves the template
//! lessons, a flash-message demo and a small username/password
//! authentication flow backed by SQLite.
//!
//! # Architecture
//!
//! - **`server`** - State, database setup and application assembly
//! - **`routes`** - Route configuration and shared layers
//! - **`auth`** - Users, password hashing, access tokens and auth handlers
//! - **`middleware`** - Cookie session and the `CurrentUser` guard
//! - **`flash`** - Flash message queue on top of the session
//! - **`templates`** - Tera engine, custom filters and view models
//! - **`lessons`** - Template lesson pages
//! - **`pages`** - Home page, flash demo and 404 page
//! - **`error`** - `AppError` and its conversions
//!
//! # Request Flow
//!
//! Every request passes through the session middleware, which decodes the
//! signed `session` cookie into a [`middleware::Session`]. Handlers queue
//! flash messages on it and redirect with 303; the page rendered next
//! drains the queue. Pages that need a user take a
//! [`middleware::CurrentUser`], which redirects to `/login/` when the
//! `access_token` cookie is missing or invalid.
//!
//! # Example
//!
//! ```rust,no_run
//! use lessonweb::backend::server::create_app;
//! use lessonweb::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod server;
pub mod routes;
pub mod auth;
pub mod middleware;
pub mod flash;
pub mod templates;
pub mod lessons;
pub mod pages;
pub mod error;

pub use error::{AppError, StartupError};
pub use server::create_app;
