//! Headless listing for `--list`: run the filter once and print the result
//! as plain text or JSON instead of starting the TUI.

use crate::catalog::{derive_categories, Catalog, ALL_CATEGORY};
use crate::search::{filter, highlight, normalize_query, Segment};
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// Message shown when nothing matches.
pub const EMPTY_STATE: &str = "❌ No topics found";

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Unknown category '{name}' (available: {})", .available.join(", "))]
    UnknownCategory {
        name: String,
        available: Vec<String>,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One filtered topic with its highlighted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedTopic<'a> {
    pub id: u32,
    pub name: &'a str,
    pub category: &'a str,
    pub icon: &'a str,
    pub segments: Vec<Segment<'a>>,
}

/// Filter the catalog and highlight every result.
///
/// `category` defaults to "All". Unlike the interactive filter, an unknown
/// category is rejected so typos on the command line are reported.
pub fn list<'a>(
    catalog: &'a Catalog,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<ListedTopic<'a>>, ListingError> {
    let category = category.unwrap_or(ALL_CATEGORY);
    let available = derive_categories(catalog.topics());
    if !available.iter().any(|c| c == category) {
        return Err(ListingError::UnknownCategory {
            name: category.to_string(),
            available,
        });
    }

    let query = normalize_query(query);
    let listed: Vec<_> = filter(catalog.topics(), query, category)
        .into_iter()
        .map(|topic| ListedTopic {
            id: topic.id,
            name: &topic.name,
            category: &topic.category,
            icon: &topic.icon,
            segments: highlight(&topic.name, query),
        })
        .collect();

    tracing::debug!(query, category, results = listed.len(), "Listed topics");
    Ok(listed)
}

/// One line per topic: icon, name with matches in `[` `]`, category.
pub fn render_text(items: &[ListedTopic<'_>]) -> String {
    if items.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut out = String::new();
    for item in items {
        let mut name = String::with_capacity(item.name.len() + 4);
        for seg in &item.segments {
            if seg.matched {
                let _ = write!(name, "[{}]", seg.text);
            } else {
                name.push_str(seg.text);
            }
        }
        let _ = writeln!(out, "{} {}  ({})", item.icon, name, item.category);
    }
    out
}

/// Pretty-printed JSON array.
pub fn render_json(items: &[ListedTopic<'_>]) -> Result<String, ListingError> {
    Ok(serde_json::to_string_pretty(items)?)
}
