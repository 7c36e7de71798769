//! Catalog integrity checks.
//!
//! Lookups stay first-match-wins; these checks only surface the records that
//! a lookup can never reach, and ids that are not unique.

use std::collections::HashMap;
use std::fmt;

use super::record::{ToolId, ToolRecord};
use crate::query;

/// A problem found in an otherwise loadable catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two records share an id
    DuplicateId { id: ToolId, first: usize, duplicate: usize },
    /// A record's route slug resolves to an earlier record
    ShadowedSlug { slug: String, winner: usize, shadowed: usize },
    /// A record's name normalizes to an empty slug and it has no explicit slug
    EmptySlug { index: usize, name: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId { id, first, duplicate } => {
                write!(f, "duplicate id '{}' at records {} and {}", id, first, duplicate)
            }
            CatalogIssue::ShadowedSlug { slug, winner, shadowed } => write!(
                f,
                "slug '{}' of record {} resolves to record {}; record {} is unreachable",
                slug, shadowed, winner, shadowed
            ),
            CatalogIssue::EmptySlug { index, name } => {
                write!(f, "record {} ('{}') has no usable slug", index, name)
            }
        }
    }
}

/// Check a list of records for duplicate ids and unreachable slugs.
pub fn check(records: &[ToolRecord]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let mut seen_ids: HashMap<&ToolId, usize> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        match seen_ids.get(&record.id) {
            Some(&first) => issues.push(CatalogIssue::DuplicateId {
                id: record.id.clone(),
                first,
                duplicate: index,
            }),
            None => {
                seen_ids.insert(&record.id, index);
            }
        }
    }

    for (index, record) in records.iter().enumerate() {
        let slug = record.route_slug();
        if slug.is_empty() {
            issues.push(CatalogIssue::EmptySlug {
                index,
                name: record.name.clone(),
            });
            continue;
        }

        match query::lookup_index(records, &slug) {
            Some(winner) if winner != index => issues.push(CatalogIssue::ShadowedSlug {
                slug,
                winner,
                shadowed: index,
            }),
            _ => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_catalog_has_no_issues() {
        let records = vec![ToolRecord::new(1, "Midjourney"), ToolRecord::new(2, "Copilot")];
        assert!(check(&records).is_empty());
    }

    #[test]
    fn test_duplicate_id() {
        let records = vec![ToolRecord::new(1, "A"), ToolRecord::new(1, "B")];
        let issues = check(&records);
        assert_eq!(
            issues,
            vec![CatalogIssue::DuplicateId {
                id: ToolId::Number(1),
                first: 0,
                duplicate: 1
            }]
        );
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct() {
        let records = vec![ToolRecord::new(1, "A"), ToolRecord::new("1", "B")];
        assert!(check(&records).is_empty());
    }

    #[test]
    fn test_derived_slug_collision() {
        let records = vec![ToolRecord::new(1, "Notion AI"), ToolRecord::new(2, "Notion  AI!")];
        let issues = check(&records);
        assert_eq!(
            issues,
            vec![CatalogIssue::ShadowedSlug {
                slug: "notion-ai".to_string(),
                winner: 0,
                shadowed: 1
            }]
        );
    }

    #[test]
    fn test_explicit_slug_shadows_later_derived_slug() {
        // Explicit slugs are matched before derived ones, wherever they sit
        let records = vec![ToolRecord::new(1, "Runway"), ToolRecord::new(2, "Other").with_slug("runway")];
        let issues = check(&records);
        assert_eq!(
            issues,
            vec![CatalogIssue::ShadowedSlug {
                slug: "runway".to_string(),
                winner: 1,
                shadowed: 0
            }]
        );
    }

    #[test]
    fn test_empty_slug() {
        let records = vec![ToolRecord::new(1, "???")];
        let issues = check(&records);
        assert!(matches!(issues[0], CatalogIssue::EmptySlug { index: 0, .. }));
        assert!(issues[0].to_string().contains("no usable slug"));
    }

    #[test]
    fn test_issue_display() {
        let issue = CatalogIssue::ShadowedSlug {
            slug: "x".to_string(),
            winner: 0,
            shadowed: 2,
        };
        assert_eq!(
            issue.to_string(),
            "slug 'x' of record 2 resolves to record 0; record 2 is unreachable"
        );
    }
}
