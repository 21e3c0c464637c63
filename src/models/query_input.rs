// file: src/models/query_input.rs
// description: user-supplied form values and the forms that produce them
// reference: internal data structures

use crate::config::EndpointConfig;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field values sent to a backend endpoint, serialized as a flat JSON
/// object in insertion order. Values are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryInput {
    fields: Map<String, Value>,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(name.into(), Value::String(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// The two input forms: a free-form SQL query, or a nearby-schools search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryForm {
    Sql,
    Nearby,
}

impl QueryForm {
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            QueryForm::Sql => &["query"],
            QueryForm::Nearby => &["lat", "long", "max_distance"],
        }
    }

    pub fn results_endpoint(self, endpoints: &EndpointConfig) -> &str {
        match self {
            QueryForm::Sql => &endpoints.query,
            QueryForm::Nearby => &endpoints.find_schools,
        }
    }

    pub fn export_endpoint(self, endpoints: &EndpointConfig) -> &str {
        match self {
            QueryForm::Sql => &endpoints.export,
            QueryForm::Nearby => &endpoints.export_schools,
        }
    }
}
