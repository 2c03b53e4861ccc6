//! Middleware Module
//!
//! - **`session`** - Signed-cookie session layer that carries flash messages
//! - **`auth`** - `CurrentUser` extractor guarding protected pages

pub mod auth;
pub mod session;

pub use auth::{CurrentUser, ACCESS_TOKEN_COOKIE};
pub use session::{session_middleware, Session};
