//! Server Module
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Database connection and migrations
//! - **`init`** - Application assembly
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── state.rs    - AppState and FromRef implementations
//! ├── config.rs   - Database pool and migrations
//! └── init.rs     - create_app
//! ```

/// Application state management
pub mod state;

/// Database connection setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::{bind_listener, create_app, create_app_with_pool};
pub use state::AppState;
