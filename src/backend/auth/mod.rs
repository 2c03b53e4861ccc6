//! Authentication Module
//!
//! Username/password accounts with bcrypt hashes, and JWT access tokens
//! carried in a cookie.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing
//! ├── tokens.rs       - JWT creation and verification
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Form types
//!     ├── signup.rs   - Registration
//!     ├── login.rs    - Login
//!     └── protected.rs - Page behind the auth guard
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: form checked → password hashed → user inserted → flash → redirect home
//! 2. **Login**: credentials checked → token issued → `access_token` cookie set → redirect to `/test/`
//! 3. **Protected page**: cookie read → token verified → user looked up (see `middleware::auth`)

pub mod users;
pub mod password;
pub mod tokens;
pub mod handlers;

pub use handlers::{create_account, create_account_page, login, login_page, protected_page};
