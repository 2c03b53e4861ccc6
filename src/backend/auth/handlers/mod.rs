//! Authentication Handlers
//!
//! - **`types`** - Form types and validation
//! - **`signup`** - `GET|POST /create_account/`
//! - **`login`** - `GET|POST /login/`
//! - **`protected`** - `GET /test/`

pub mod types;
pub mod signup;
pub mod login;
pub mod protected;

pub use login::{login, login_page};
pub use protected::protected_page;
pub use signup::{create_account, create_account_page};
