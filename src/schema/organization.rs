//! Organization identity block.

use crate::config::SiteConfig;
use crate::schema::{StructuredData, SCHEMA_CONTEXT};
use serde_json::json;

/// Build the site-wide Organization block from the configured identity.
/// Deterministic given the configuration; takes no per-page input.
pub fn organization(site: &SiteConfig) -> StructuredData {
    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url,
    });
    if let Some(logo) = &site.logo {
        value["logo"] = json!(site.absolute_url(logo));
    }
    if !site.social_profiles.is_empty() {
        value["sameAs"] = json!(site.social_profiles);
    }
    StructuredData::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_carries_identity() {
        let site = SiteConfig {
            name: "Collant Shop".to_string(),
            base_url: "https://www.collant.example".to_string(),
            logo: Some("/assets/logo.webp".to_string()),
            social_profiles: vec![
                "https://www.instagram.com/collantshop".to_string(),
                "https://www.facebook.com/collantshop".to_string(),
            ],
            ..Default::default()
        };
        let block = organization(&site);
        let value = block.as_json();
        assert_eq!(block.schema_type(), Some("Organization"));
        assert_eq!(value["name"], "Collant Shop");
        assert_eq!(value["logo"], "https://www.collant.example/assets/logo.webp");
        assert_eq!(value["sameAs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_optional_identity_fields_are_omitted() {
        let site = SiteConfig::default();
        let value = organization(&site).as_json().clone();
        assert!(value.get("logo").is_none());
        assert!(value.get("sameAs").is_none());
    }
}
