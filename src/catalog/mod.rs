//! Tool catalog: the immutable list of records a view works from.
//!
//! A catalog is parsed once from the source document and never mutated.
//! Every derived view (categories, filtered pages, slug lookups) is computed
//! from it by the pure functions in [`crate::query`].

mod integrity;
mod record;
mod slug;

pub use integrity::CatalogIssue;
pub use record::{ToolId, ToolRecord};
pub use slug::slugify;

use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::query::{self, CategoryCount, Listing, QueryState};

/// Immutable, ordered collection of tool records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ToolRecord>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from records, enforcing the non-empty name invariant
    pub fn from_records(records: Vec<ToolRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    index,
                    reason: "name is empty".to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse a catalog document: a JSON array of tool records
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(items) = value else {
            return Err(CatalogError::InvalidData(format!(
                "expected an array of tools, found {}",
                json_kind(&value)
            )));
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if let Some(reason) = id_problem(&item) {
                return Err(CatalogError::InvalidRecord { index, reason });
            }
            let name = item.get("name").and_then(Value::as_str).map(str::to_string);
            let record: ToolRecord = serde_json::from_value(item).map_err(|e| CatalogError::InvalidRecord {
                index,
                reason: match name {
                    Some(name) => format!("'{}': {}", name, e),
                    None => e.to_string(),
                },
            })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// All records in source order
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// "All" followed by each distinct category, with counts
    pub fn categories(&self) -> Vec<CategoryCount> {
        query::categories(&self.records)
    }

    /// Records passing the search and category filter
    pub fn filter(&self, state: &QueryState) -> Vec<&ToolRecord> {
        query::filter(&self.records, state)
    }

    /// Categories plus the current page of filtered records
    pub fn listing(&self, state: &QueryState, page_size: usize) -> Listing<'_> {
        query::listing(&self.records, state, page_size)
    }

    /// Find a record by slug, explicit slugs first
    pub fn find_by_slug(&self, slug: &str) -> Option<&ToolRecord> {
        query::lookup(&self.records, slug)
    }

    /// Report integrity problems without rejecting the catalog
    pub fn check(&self) -> Vec<CatalogIssue> {
        integrity::check(&self.records)
    }
}

/// Ids must be present and be a string or an integer.
fn id_problem(item: &Value) -> Option<String> {
    let label = match item.get("name").and_then(Value::as_str) {
        Some(name) => format!("'{}'", name),
        None => "record".to_string(),
    };
    match item.get("id") {
        None | Some(Value::Null) => Some(format!("{} has no id", label)),
        Some(Value::String(_)) => None,
        Some(Value::Number(n)) if n.is_i64() => None,
        Some(other) => Some(format!(
            "{} has id {}; expected a string or an integer",
            label, other
        )),
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
