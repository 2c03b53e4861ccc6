/**
 * Flash Form Demo
 *
 * A one-field form. Submitting it queues a flash message and redirects
 * back to the form, where the message is shown once.
 */

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::backend::error::AppError;
use crate::backend::flash;
use crate::backend::middleware::session::Session;
use crate::backend::server::state::AppState;
use crate::backend::templates::{render_page, views::PageView};

pub const FLASH_DEMO_PATH: &str = "/flash/";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NameForm {
    pub name: String,
}

pub async fn flash_page(State(state): State<AppState>, session: Session) -> Result<Html<String>, AppError> {
    render_page(&state.templates, &session, "flash_demo.html", PageView::new)
}

pub async fn submit_name(session: Session, form: Result<Form<NameForm>, FormRejection>) -> Redirect {
    let name = form.map(|Form(form)| form.name).unwrap_or_default();

    if name.trim().is_empty() {
        flash::push_critical(&session, "Name must not be empty");
    } else {
        flash::push_success(&session, format!("Hello, {name}! Your data was submitted."));
    }
    Redirect::to(FLASH_DEMO_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_blank_name_is_critical() {
        let session = Session::default();
        let form = Ok(Form(NameForm { name: "   ".into() }));

        let response = submit_name(session.clone(), form).await.into_response();
        assert_eq!(response.headers()["location"], FLASH_DEMO_PATH);

        let messages = flash::drain(&session);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].msg, "Name must not be empty");
        assert!(messages[0].is_critical());
    }

    #[tokio::test]
    async fn test_name_is_greeted() {
        let session = Session::default();
        let form = Ok(Form(NameForm { name: "Anna".into() }));

        submit_name(session.clone(), form).await;

        let messages = flash::drain(&session);
        assert_eq!(messages[0].msg, "Hello, Anna! Your data was submitted.");
        assert!(!messages[0].is_critical());
    }
}
