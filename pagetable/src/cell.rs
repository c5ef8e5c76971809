//! Cell data model for table rows.
//!
//! A table receives a 2-D grid of heterogeneous values: bare strings and
//! numbers mixed with tagged objects for status switches, row actions and
//! images. [`Cell`] makes that union a proper sum type, and
//! [`Cell::classify`] is the total mapping from dynamic JSON values into it:
//! every possible value lands on exactly one variant, with unrecognized
//! shapes degrading to plain text rather than erroring.

use serde_json::Value;
use thiserror::Error;

/// One rendered unit of a table row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Plain text content.
    Text(String),
    /// Numeric content, right-aligned when rendered.
    Number(f64),
    /// A status switch bound to an entity id.
    Status { id: i64, active: bool },
    /// Row actions carrying an opaque payload for the embedding page.
    ///
    /// The payload is delegated, never introspected: whatever object the
    /// caller put here comes back unchanged in the action event.
    Action { payload: Value },
    /// An image reference, rendered as its alt text.
    Image { src: String, alt: String },
}

/// An ordered sequence of cells, one per table header.
///
/// Row length is expected to match the header count but is not enforced:
/// short rows render blank trailing cells, long rows are cut off at the
/// last column.
pub type Row = Vec<Cell>;

impl Cell {
    /// Classify a dynamic value into a cell variant.
    ///
    /// Tagged objects use the `type` discriminator (`"status"`,
    /// `"actions"`, `"image"`); bare strings and numbers become text and
    /// number cells. Anything else, including tagged objects with missing
    /// or mistyped fields, falls back to plain text display.
    pub fn classify(value: &Value) -> Cell {
        match value {
            Value::String(s) => Cell::Text(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Cell::Number(f),
                None => Cell::Text(n.to_string()),
            },
            Value::Object(map) => match map.get("type").and_then(Value::as_str) {
                Some("status") => {
                    let id = map.get("id").and_then(Value::as_i64);
                    let active = map.get("status").and_then(Value::as_bool);
                    match (id, active) {
                        (Some(id), Some(active)) => Cell::Status { id, active },
                        _ => Cell::Text(fallback_text(value)),
                    }
                }
                Some("actions") => Cell::Action {
                    payload: map.get("data").cloned().unwrap_or(Value::Null),
                },
                Some("image") => Cell::Image {
                    src: string_field(map, "src"),
                    alt: string_field(map, "alt"),
                },
                _ => Cell::Text(fallback_text(value)),
            },
            other => Cell::Text(fallback_text(other)),
        }
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Plain display for values with no dedicated variant.
fn fallback_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Errors from decoding a rows grid.
#[derive(Debug, Error)]
pub enum CellError {
    /// The grid itself was not a JSON array.
    #[error("expected an array of rows, got {0}")]
    NotAGrid(&'static str),
    /// One of the rows was not a JSON array.
    #[error("row {index} is not an array, got {kind}")]
    NotARow { index: usize, kind: &'static str },
}

/// Decode a JSON 2-D array into rows of classified cells.
///
/// This is the shape the REST envelope's `data` field carries for list
/// endpoints. Individual cell values never fail to decode; only a
/// non-array at the grid or row level is an error.
pub fn rows_from_json(value: &Value) -> Result<Vec<Row>, CellError> {
    let grid = value.as_array().ok_or(CellError::NotAGrid(kind_of(value)))?;
    grid.iter()
        .enumerate()
        .map(|(index, row)| {
            let cells = row.as_array().ok_or(CellError::NotARow {
                index,
                kind: kind_of(row),
            })?;
            Ok(cells.iter().map(Cell::classify).collect())
        })
        .collect()
}
