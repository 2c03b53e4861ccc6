//! Template Engine
//!
//! Templates are compiled into the binary and loaded into one [`Tera`]
//! instance at startup, together with the custom filters, functions and
//! testers from [`filters`]. Handlers render through [`render`] with a typed
//! view model from [`views`]; pages that show flash messages go through
//! [`render_page`].
//!
//! # Module Structure
//!
//! ```text
//! templates/
//! ├── mod.rs      - Engine construction and rendering
//! ├── filters.rs  - Custom filters, functions and testers
//! └── views.rs    - One view model per template
//! ```

pub mod filters;
pub mod views;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::backend::error::AppError;
use crate::backend::flash;
use crate::backend::middleware::session::Session;
use crate::shared::flash::FlashMessage;

/// (name, source) of every template, parents before children
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("partials/flashes.html", include_str!("../../../templates/partials/flashes.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("login.html", include_str!("../../../templates/login.html")),
    ("create_account.html", include_str!("../../../templates/create_account.html")),
    ("test.html", include_str!("../../../templates/test.html")),
    ("flash_demo.html", include_str!("../../../templates/flash_demo.html")),
    ("not_found.html", include_str!("../../../templates/not_found.html")),
    ("lessons/index.html", include_str!("../../../templates/lessons/index.html")),
    ("lessons/macros.html", include_str!("../../../templates/lessons/macros.html")),
    ("lessons/partials/notice.html", include_str!("../../../templates/lessons/partials/notice.html")),
    ("lessons/ex1.html", include_str!("../../../templates/lessons/ex1.html")),
    ("lessons/ex2.html", include_str!("../../../templates/lessons/ex2.html")),
    ("lessons/ex3.html", include_str!("../../../templates/lessons/ex3.html")),
    ("lessons/ex4.html", include_str!("../../../templates/lessons/ex4.html")),
    ("lessons/ex5.html", include_str!("../../../templates/lessons/ex5.html")),
    ("lessons/ex6.html", include_str!("../../../templates/lessons/ex6.html")),
    ("lessons/ex7.html", include_str!("../../../templates/lessons/ex7.html")),
    ("lessons/ex8_layout.html", include_str!("../../../templates/lessons/ex8_layout.html")),
    ("lessons/ex8.html", include_str!("../../../templates/lessons/ex8.html")),
    ("lessons/ex9.html", include_str!("../../../templates/lessons/ex9.html")),
    ("lessons/ex10.html", include_str!("../../../templates/lessons/ex10.html")),
];

/// Build the template engine with every template and extension registered
///
/// Filters, functions and testers are registered before the templates are
/// added, since adding templates checks inheritance and macro imports.
pub fn build_engine() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    filters::register(&mut tera);
    tera.add_raw_templates(TEMPLATES.iter().copied())?;

    tracing::info!("Loaded {} templates", TEMPLATES.len());
    Ok(tera)
}

/// Render `name` with `view` as its context
pub fn render<T: Serialize>(tera: &Tera, name: &str, view: &T) -> Result<Html<String>, AppError> {
    let context = Context::from_serialize(view)?;
    Ok(Html(tera.render(name, &context)?))
}

/// Render a page that displays the session's flash messages
///
/// The queue is only drained once rendering succeeded, so a failed render
/// leaves the messages for the next page.
pub fn render_page<T, F>(tera: &Tera, session: &Session, name: &str, view: F) -> Result<Html<String>, AppError>
where
    T: Serialize,
    F: FnOnce(Vec<FlashMessage>) -> T,
{
    let html = render(tera, name, &view(flash::peek(session)))?;
    flash::drain(session);
    Ok(html)
}
