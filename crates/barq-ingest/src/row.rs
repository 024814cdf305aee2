//! Raw, untyped import rows.

use std::collections::BTreeMap;

use barq_core::util::text::is_blank;
use barq_core::{Error, Result};
use serde_json::{Map, Value};

use crate::field::Field;

/// One row from an import source.
///
/// Keys are whatever the source used (column headers, JSON keys); values
/// are untyped. Nothing about presence or type is guaranteed; use
/// [`ImportRow::text`] to read a logical field through its synonyms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportRow {
    cells: BTreeMap<String, Value>,
}

impl ImportRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a row from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Contract`] if `value` is not a JSON object. That is
    /// a bug in the import collaborator, not a data-quality problem.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(Error::contract(format!(
                "import row must be a key-value object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Builds a row from a JSON object map.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            cells: map.into_iter().collect(),
        }
    }

    /// Builds a row from string pairs, as produced by a spreadsheet reader.
    ///
    /// When the same key appears twice, a later non-blank value replaces
    /// an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            if is_blank(&value) && row.cells.contains_key(&key) {
                continue;
            }
            row.cells.insert(key, Value::String(value));
        }
        row
    }

    /// Sets a cell, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(key.into(), value.into());
    }

    /// Builder form of [`ImportRow::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw cell value under an exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.get(key)
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads a logical field, trying each accepted key in priority order.
    ///
    /// Returns the trimmed text of the first present value. Strings count
    /// as present when non-blank; numbers and booleans are stringified.
    /// `null`, arrays, and objects count as absent.
    pub fn text(&self, field: Field) -> Option<String> {
        field
            .synonyms()
            .iter()
            .filter_map(|key| self.cells.get(*key))
            .find_map(cell_text)
    }

    /// Returns `true` if [`ImportRow::text`] would find a value.
    pub fn has(&self, field: Field) -> bool {
        self.text(field).is_some()
    }
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !is_blank(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
