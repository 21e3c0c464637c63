// file: src/models/result_set.rs
// description: query result rows and their table presentation
// reference: Used for rendering query endpoint responses

use crate::error::{QueryError, Result};
use crate::parser::format_label;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One record, keys in the order the backend emitted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow(Map<String, Value>);

impl ResultRow {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Cell texts in this row's own key order.
    pub fn cells(&self) -> Vec<String> {
        self.0.values().map(cell_text).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rows: Vec<ResultRow>,
}

impl ResultSet {
    /// Accepts only a JSON array of objects.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(QueryError::unexpected_format());
        };

        let rows = items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(ResultRow(map)),
                _ => Err(QueryError::unexpected_format()),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Display-ready table: formatted headers from the first row's keys and one
/// line of cell texts per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// `None` for an empty result set.
    pub fn from_result_set(results: &ResultSet) -> Option<Self> {
        let first = results.rows().first()?;
        let headers = first.keys().map(format_label).collect();
        let rows = results.rows().iter().map(ResultRow::cells).collect();

        Some(Self { headers, rows })
    }
}

/// Text shown for a single value. Null renders empty, strings render raw,
/// integral floats drop their `.0` (`37.0` shows as `37`).
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() => format!("{}", f),
        _ => n.to_string(),
    }
}
