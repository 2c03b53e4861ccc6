//! Backend Error Module
//!
//! - **`types`** - `AppError` for request handling, `StartupError` for boot
//! - **`conversion`** - Turning an `AppError` into a flash redirect or a page

pub mod types;
pub mod conversion;

pub use types::{AppError, StartupError};
