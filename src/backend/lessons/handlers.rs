/**
 * Lesson Handlers
 *
 * One handler per lesson page. The data is fixed; what varies is the
 * template feature each page exercises.
 */

use std::collections::BTreeMap;

use axum::{extract::State, response::Html};

use crate::backend::error::AppError;
use crate::backend::lessons::catalog;
use crate::backend::server::state::AppState;
use crate::backend::templates::render;
use crate::backend::templates::views::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub async fn lessons_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, "lessons/index.html", &LessonIndexView { lessons: catalog() })
}

/// HTML returned as a literal string
pub async fn raw_html() -> Html<&'static str> {
    Html(
        "<!doctype html><html><head><title>Raw HTML</title></head>\
         <body><h1>Raw HTML</h1><p>This page was written by hand, no template involved.</p>\
         <a href=\"/lessons/\">Back to lessons</a></body></html>",
    )
}

pub async fn ex1(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex1View {
        title: "Variables".to_string(),
        header: "Passing data to a template".to_string(),
        text: "Every value below comes from the handler.".to_string(),
        languages: strings(&["Rust", "Python", "Go", "C"]),
        user: UserCard {
            name: "Ivan".to_string(),
            age: 30,
            city: "Kazan".to_string(),
        },
    };
    render(&state.templates, "lessons/ex1.html", &view)
}

pub async fn ex2(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex2View {
        parameter: (true, "primary".to_string()),
        mode: 2,
        user: ActiveFlag { is_active: false },
    };
    render(&state.templates, "lessons/ex2.html", &view)
}

pub async fn ex3(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let samples = TypeSamples {
        flag: true,
        word: "text".to_string(),
        number: 42,
        list: vec![1, 2, 3],
        mapping: BTreeMap::from([("one".to_string(), 1), ("two".to_string(), 2)]),
    };
    let nested = BTreeMap::from([
        ("answer".to_string(), NestedValue::Number(42)),
        ("empty".to_string(), NestedValue::List(Vec::new())),
        ("greeting".to_string(), NestedValue::Text("hello".to_string())),
        ("numbers".to_string(), NestedValue::List(vec![1, 2, 3, 4])),
    ]);
    render(&state.templates, "lessons/ex3.html", &Ex3View { samples, nested })
}

pub async fn ex4(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex4View {
        names: strings(&["Ivan", "Maria", "Oleg"]),
    };
    render(&state.templates, "lessons/ex4.html", &view)
}

pub async fn ex5(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex5View {
        numbers: vec![1, 2, 3, 4],
        words: strings(&["apple", "banana", "cherry"]),
        sentence: "template lessons are fun".to_string(),
        ratio: 1.23456,
    };
    render(&state.templates, "lessons/ex5.html", &view)
}

pub async fn ex6(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex6View {
        base: 7,
        alphabet: "a,b,c".to_string(),
    };
    render(&state.templates, "lessons/ex6.html", &view)
}

pub async fn ex7(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex7View {
        fields: strings(&["login", "password"]),
    };
    render(&state.templates, "lessons/ex7.html", &view)
}

pub async fn ex8(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, "lessons/ex8.html", &Ex8View::default())
}

pub async fn ex9(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex9View {
        notice: "This notice was included from a partial".to_string(),
    };
    render(&state.templates, "lessons/ex9.html", &view)
}

pub async fn ex10(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let view = Ex10View {
        items: strings(&["first", "second", "third"]),
    };
    render(&state.templates, "lessons/ex10.html", &view)
}
