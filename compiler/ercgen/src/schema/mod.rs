//! Specification loading and structural validation.
//!
//! The specification is walked as an untyped JSON tree so every problem can
//! be reported with the exact path of the offending field:
//!
//! ```text
//! { "facilities": [
//!     { "code": 1, "name": "...", "doc_string": "...",
//!       "components": [
//!         { "code": 2, "name": "...", "doc_string": "...",
//!           "results": [ { "value": 5, "name": "..." } ] } ] } ] }
//! ```
//!
//! Only shape and JSON types are checked here. Uniqueness and numeric ranges
//! belong to the hierarchy model.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Expected, InputError, SchemaError};
use crate::GenerateError;

/// Parsed specification, one level per record type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawSpec {
    pub facilities: Vec<RawFacility>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawFacility {
    pub code: i64,
    pub name: String,
    pub doc_string: String,
    pub components: Vec<RawComponent>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawComponent {
    pub code: i64,
    pub name: String,
    pub doc_string: String,
    pub results: Vec<RawResult>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RawResult {
    /// Any JSON integer; packing keeps only the low 20 bits.
    pub value: i128,
    pub name: String,
}

/// Read, parse and validate the specification at `path`.
pub fn load_spec(path: &Path) -> Result<RawSpec, GenerateError> {
    let document = load_document(path)?;
    Ok(parse_spec(&document)?)
}

/// Read the file at `path` and parse it as JSON.
pub fn load_document(path: &Path) -> Result<Value, InputError> {
    if !path.exists() {
        return Err(InputError::Missing {
            path: path.to_owned(),
        });
    }
    if !path.is_file() {
        return Err(InputError::NotAFile {
            path: path.to_owned(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_document(&text, &format!("`{}`", path.display()))
}

/// Parse JSON text. `origin` names the source in error messages.
pub fn parse_document(text: &str, origin: &str) -> Result<Value, InputError> {
    serde_json::from_str(text).map_err(|source| InputError::Json {
        origin: origin.to_owned(),
        source,
    })
}

/// Check the document's shape and extract its records.
pub fn parse_spec(document: &Value) -> Result<RawSpec, SchemaError> {
    let root = Node::root(document);
    root.expect_object()?;
    let facilities = root
        .field("facilities")
        .array()?
        .into_iter()
        .map(parse_facility)
        .collect::<Result<_, _>>()?;
    Ok(RawSpec { facilities })
}

fn parse_facility(node: Node<'_>) -> Result<RawFacility, SchemaError> {
    node.expect_object()?;
    Ok(RawFacility {
        code: node.field("code").integer()?,
        name: node.field("name").string()?,
        doc_string: node.field("doc_string").string()?,
        components: node
            .field("components")
            .array()?
            .into_iter()
            .map(parse_component)
            .collect::<Result<_, _>>()?,
    })
}

fn parse_component(node: Node<'_>) -> Result<RawComponent, SchemaError> {
    node.expect_object()?;
    Ok(RawComponent {
        code: node.field("code").integer()?,
        name: node.field("name").string()?,
        doc_string: node.field("doc_string").string()?,
        results: node
            .field("results")
            .array()?
            .into_iter()
            .map(parse_result)
            .collect::<Result<_, _>>()?,
    })
}

fn parse_result(node: Node<'_>) -> Result<RawResult, SchemaError> {
    node.expect_object()?;
    Ok(RawResult {
        value: node.field("value").wide_integer()?,
        name: node.field("name").string()?,
    })
}

/// A position in the document, possibly absent.
#[derive(Clone, Debug)]
struct Node<'a> {
    value: Option<&'a Value>,
    path: String,
}

impl<'a> Node<'a> {
    fn root(value: &'a Value) -> Self {
        Node {
            value: Some(value),
            path: String::new(),
        }
    }

    fn field(&self, key: &str) -> Node<'a> {
        let path = if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{key}", self.path)
        };
        Node {
            value: self.value.and_then(|v| v.get(key)),
            path,
        }
    }

    fn expect_object(&self) -> Result<(), SchemaError> {
        match self.value {
            Some(Value::Object(_)) => Ok(()),
            _ => Err(self.mismatch(Expected::Object)),
        }
    }

    /// Elements of an array field, each as a node.
    fn array(&self) -> Result<Vec<Node<'a>>, SchemaError> {
        match self.value {
            Some(Value::Array(items)) => Ok(items
                .iter()
                .enumerate()
                .map(|(index, item)| Node {
                    value: Some(item),
                    path: format!("{}[{index}]", self.path),
                })
                .collect()),
            _ => Err(self.mismatch(Expected::Array)),
        }
    }

    fn integer(&self) -> Result<i64, SchemaError> {
        self.value
            .and_then(Value::as_i64)
            .ok_or_else(|| self.mismatch(Expected::Integer))
    }

    /// Like [`integer`](Self::integer), but also accepts integers up to
    /// `u64::MAX`.
    fn wide_integer(&self) -> Result<i128, SchemaError> {
        self.value
            .and_then(|v| {
                v.as_i64()
                    .map(i128::from)
                    .or_else(|| v.as_u64().map(i128::from))
            })
            .ok_or_else(|| self.mismatch(Expected::Integer))
    }

    fn string(&self) -> Result<String, SchemaError> {
        self.value
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| self.mismatch(Expected::String))
    }

    fn mismatch(&self, expected: Expected) -> SchemaError {
        SchemaError {
            path: if self.path.is_empty() {
                "<document>".to_owned()
            } else {
                self.path.clone()
            },
            expected,
            found: describe(self.value),
        }
    }
}

fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(n)) if n.is_i64() => "an integer",
        Some(Value::Number(n)) if n.is_u64() => "an integer beyond the signed 64-bit range",
        Some(Value::Number(_)) => "a fractional number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

#[cfg(test)]
mod tests;
