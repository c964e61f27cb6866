//! Structured Data Builders
//!
//! Pure constructors for the schema.org vocabularies the site embeds:
//! Organization, WebSite, Product and BreadcrumbList. Output is opaque to
//! the rest of the crate; the head synchronizer serializes each block into
//! its own JSON-LD script tag. Nothing here is cached, callers build once
//! per render.

mod breadcrumb;
mod organization;
mod product;
mod website;

pub use breadcrumb::{breadcrumb, BreadcrumbItem};
pub use organization::organization;
pub use product::{product, MetafieldValue, Product};
pub use website::website;

use serde_json::Value;

/// The linked-data vocabulary every block declares as `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// An opaque, schema-typed JSON-LD object.
///
/// The core does not validate vocabulary conformance beyond the required
/// fields checked at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredData {
    value: Value,
}

impl StructuredData {
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    /// The block's `@type`, when present.
    pub fn schema_type(&self) -> Option<&str> {
        self.value.get("@type").and_then(Value::as_str)
    }

    /// The underlying JSON value.
    pub fn as_json(&self) -> &Value {
        &self.value
    }

    /// Serialized form embedded in a JSON-LD script block.
    pub fn to_script_json(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_type_is_exposed() {
        let block = StructuredData::new(json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "WebSite",
        }));
        assert_eq!(block.schema_type(), Some("WebSite"));
    }

    #[test]
    fn test_script_json_is_compact() {
        let block = StructuredData::new(json!({"@type": "Organization"}));
        assert_eq!(block.to_script_json(), r#"{"@type":"Organization"}"#);
    }
}
