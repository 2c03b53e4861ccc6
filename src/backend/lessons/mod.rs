//! Template Lessons
//!
//! A series of small pages, each demonstrating one template-engine feature.
//! Every page is rendered from its own view model in
//! [`crate::backend::templates::views`]; `/lessons/raw/` skips templating
//! altogether.

pub mod handlers;

use crate::backend::templates::views::LessonLink;

/// Table of contents shown at `/lessons/`
pub fn catalog() -> Vec<LessonLink> {
    vec![
        LessonLink { path: "/lessons/raw/", title: "Raw HTML", summary: "a response built without any template" },
        LessonLink { path: "/lessons/ex1/", title: "Variables", summary: "values, lists and mappings passed to a template" },
        LessonLink { path: "/lessons/ex2/", title: "Conditions", summary: "if, elif, else and inline conditions" },
        LessonLink { path: "/lessons/ex3/", title: "Type tests", summary: "testing values and iterating nested data" },
        LessonLink { path: "/lessons/ex4/", title: "Functions", summary: "functions registered on the engine" },
        LessonLink { path: "/lessons/ex5/", title: "Filters", summary: "custom and built-in filters" },
        LessonLink { path: "/lessons/ex6/", title: "Variables in templates", summary: "set inside a template" },
        LessonLink { path: "/lessons/ex7/", title: "Macros", summary: "reusable fragments with default arguments" },
        LessonLink { path: "/lessons/ex8/", title: "Inheritance", summary: "blocks, overrides and super()" },
        LessonLink { path: "/lessons/ex9/", title: "Include and import", summary: "partials and imported macros" },
        LessonLink { path: "/lessons/ex10/", title: "Scopes", summary: "loop-scoped set versus set_global" },
    ]
}
