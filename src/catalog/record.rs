//! Tool record types as they appear in the catalog document.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::slug::slugify;

/// Identifier of a tool record. Catalogs use both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Number(n) => write!(f, "{}", n),
            ToolId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ToolId {
    fn from(n: i64) -> Self {
        ToolId::Number(n)
    }
}

impl From<i32> for ToolId {
    fn from(n: i32) -> Self {
        ToolId::Number(n.into())
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        ToolId::Text(s.to_string())
    }
}

/// One entry in the tool catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: ToolId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "stats_map")]
    pub stats: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub founded: Option<String>,
}

impl ToolRecord {
    /// Create a record with only the required fields set
    pub fn new(id: impl Into<ToolId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            category: None,
            description: None,
            tagline: None,
            tags: Vec::new(),
            link: None,
            affiliate: None,
            website: None,
            featured: false,
            stats: BTreeMap::new(),
            features: Vec::new(),
            pricing: None,
            company: None,
            founded: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Explicit slug, if the record carries a non-empty one
    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    /// Slug derived from the display name
    pub fn derived_slug(&self) -> String {
        slugify(&self.name)
    }

    /// Slug used to open this record's detail view.
    ///
    /// Explicit slug when present, derived slug otherwise.
    pub fn route_slug(&self) -> String {
        match self.explicit_slug() {
            Some(slug) => slug.to_string(),
            None => self.derived_slug(),
        }
    }

    /// Category, treating an empty string as absent
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Link shown on a listing card: affiliate, then link
    pub fn card_link(&self) -> Option<&str> {
        self.affiliate.as_deref().or(self.link.as_deref())
    }

    /// Link shown on the detail page: link, then website
    pub fn page_link(&self) -> Option<&str> {
        self.link.as_deref().or(self.website.as_deref())
    }

    /// Best outbound link: affiliate, then link, then website
    pub fn outbound_link(&self) -> Option<&str> {
        self.affiliate
            .as_deref()
            .or(self.link.as_deref())
            .or(self.website.as_deref())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A display value that catalogs write as either a JSON string or number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(raw: Scalar) -> Self {
        match raw {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

fn stats_map<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<Scalar>>>::deserialize(deserializer)?.unwrap_or_default();
    // null values carry nothing to display
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, String::from(v))))
        .collect())
}
