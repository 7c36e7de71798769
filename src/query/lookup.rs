//! Detail-view lookup by slug.

use crate::catalog::ToolRecord;

/// Find the record a slug points at.
///
/// Explicit `slug` fields are matched first across the whole catalog; only if
/// none matches are slugs derived from names. First match wins.
pub fn lookup<'a>(records: &'a [ToolRecord], slug: &str) -> Option<&'a ToolRecord> {
    lookup_index(records, slug).map(|i| &records[i])
}

/// Same as [`lookup`] but returns the record's position.
pub fn lookup_index(records: &[ToolRecord], slug: &str) -> Option<usize> {
    records
        .iter()
        .position(|r| r.slug.as_deref() == Some(slug))
        .or_else(|| records.iter().position(|r| r.derived_slug() == slug))
}
