//! View models
//!
//! One serializable struct per template. Handlers build these instead of
//! assembling untyped contexts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::shared::flash::FlashMessage;

/// Context for plain pages that only show flash messages
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    pub flashed_messages: Vec<FlashMessage>,
}

impl PageView {
    pub fn new(flashed_messages: Vec<FlashMessage>) -> Self {
        Self { flashed_messages }
    }
}

/// Protected page
#[derive(Debug, Serialize)]
pub struct ProtectedView {
    pub flashed_messages: Vec<FlashMessage>,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct NotFoundView {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct LessonLink {
    pub path: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LessonIndexView {
    pub lessons: Vec<LessonLink>,
}

#[derive(Debug, Serialize)]
pub struct UserCard {
    pub name: String,
    pub age: u32,
    pub city: String,
}

/// Variables, list iteration and mapping access
#[derive(Debug, Serialize)]
pub struct Ex1View {
    pub title: String,
    pub header: String,
    pub text: String,
    pub languages: Vec<String>,
    pub user: UserCard,
}

#[derive(Debug, Serialize)]
pub struct ActiveFlag {
    pub is_active: bool,
}

/// Conditionals
#[derive(Debug, Serialize)]
pub struct Ex2View {
    /// Serialized as a two-element array, indexed from the template
    pub parameter: (bool, String),
    pub mode: u8,
    pub user: ActiveFlag,
}

/// One value of every JSON shape, for the type-test lesson
#[derive(Debug, Serialize)]
pub struct TypeSamples {
    pub flag: bool,
    pub word: String,
    pub number: i64,
    pub list: Vec<i64>,
    pub mapping: BTreeMap<String, i64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NestedValue {
    Text(String),
    Number(i64),
    List(Vec<i64>),
}

#[derive(Debug, Serialize)]
pub struct Ex3View {
    pub samples: TypeSamples,
    pub nested: BTreeMap<String, NestedValue>,
}

#[derive(Debug, Serialize)]
pub struct Ex4View {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Ex5View {
    pub numbers: Vec<i64>,
    pub words: Vec<String>,
    pub sentence: String,
    pub ratio: f64,
}

#[derive(Debug, Serialize)]
pub struct Ex6View {
    pub base: i64,
    pub alphabet: String,
}

#[derive(Debug, Serialize)]
pub struct Ex7View {
    pub fields: Vec<String>,
}

/// Inheritance lesson; the page content lives entirely in the templates
#[derive(Debug, Default, Serialize)]
pub struct Ex8View {}

#[derive(Debug, Serialize)]
pub struct Ex9View {
    pub notice: String,
}

#[derive(Debug, Serialize)]
pub struct Ex10View {
    pub items: Vec<String>,
}
