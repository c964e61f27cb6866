//! WebSite block with the site-wide search capability.

use crate::config::SiteConfig;
use crate::schema::{StructuredData, SCHEMA_CONTEXT};
use serde_json::json;

/// Build the WebSite block. When a search template is configured the block
/// declares a `SearchAction` with that target.
pub fn website(site: &SiteConfig) -> StructuredData {
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": site.base_url,
    });
    if let Some(template) = &site.search_template {
        value["potentialAction"] = json!({
            "@type": "SearchAction",
            "target": template,
            "query-input": "required name=search_term_string",
        });
    }
    StructuredData::new(value)
}
