/**
 * Template Filters, Functions and Testers
 *
 * Everything registered here is available to every template:
 *
 * - `is_even_num` filter: integer -> bool
 * - `str_len` filter: string -> number of characters
 * - `test()` function: the constant string `"test text"`
 * - `greet(name)` function: `"Hello, {name}"`
 * - `boolean` tester: true only for JSON booleans (tera has no built-in one)
 */

use std::collections::HashMap;

use tera::{Tera, Value};

pub fn is_even_num(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg(format!("is_even_num expects an integer, got {value}")))?;
    Ok(Value::Bool(number % 2 == 0))
}

pub fn str_len(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("str_len expects a string, got {value}")))?;
    Ok(Value::from(text.chars().count()))
}

pub fn test_text(_args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::from("test text"))
}

pub fn greet(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = args
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg("greet requires a string `name` argument"))?;
    Ok(Value::from(format!("Hello, {name}")))
}

pub fn is_boolean(value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
    Ok(matches!(value, Some(Value::Bool(_))))
}

/// Register all of the above on `tera`
pub fn register(tera: &mut Tera) {
    tera.register_filter("is_even_num", is_even_num);
    tera.register_filter("str_len", str_len);
    tera.register_function("test", test_text);
    tera.register_function("greet", greet);
    tera.register_tester("boolean", is_boolean);
}
