//! BreadcrumbList construction.

use crate::schema::{StructuredData, SCHEMA_CONTEXT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One crumb in a trail, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Build a BreadcrumbList block. Positions are 1-indexed in input order.
/// An empty trail is valid and produces an empty list, not an error.
pub fn breadcrumb(items: &[BreadcrumbItem]) -> StructuredData {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    StructuredData::new(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    }))
}
