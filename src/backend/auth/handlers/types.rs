/**
 * Authentication Form Types
 *
 * Both forms are posted as `application/x-www-form-urlencoded`. Missing
 * fields deserialize as empty strings so that they fail validation with a
 * readable message instead of a body rejection.
 */

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Registration form
#[derive(Deserialize, Debug, Default, Validate)]
#[serde(default)]
pub struct SignupForm {
    #[validate(length(min = 1, max = 50, message = "Login must be between 1 and 50 characters"))]
    pub username: String,
    #[validate(length(min = 4, max = 50, message = "Password must be between 4 and 50 characters"))]
    pub password: String,
    #[validate(length(
        min = 4,
        max = 50,
        message = "Repeated password must be between 4 and 50 characters"
    ))]
    pub password_repeat: String,
}

/// Login form
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Pick one message to show for a failed validation
///
/// Fields are checked in name order so the choice is stable.
pub fn first_error_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "Invalid form data".to_string())
}
