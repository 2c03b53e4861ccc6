//! Route Configuration Module
//!
//! - **`router`** - Main router creation and shared layers
//! - **`page_routes`** - Home page, flash demo and template lessons
//! - **`auth_routes`** - Login, registration and the protected page

pub mod router;
pub mod page_routes;
pub mod auth_routes;

pub use router::create_router;
