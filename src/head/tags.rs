//! Tag derivation: resolved metadata record -> head snapshot.
//!
//! Title, description, keywords, robots, canonical, Open Graph and Twitter
//! card tags all derive from the same record, so they can never disagree
//! with each other. The robots tag is always emitted, which is what keeps a
//! stale directive from an earlier navigation from surviving.

use crate::config::SiteConfig;
use crate::head::document::{HeadSnapshot, LinkTag, MetaTag};
use crate::metadata::MetadataRecord;
use crate::schema::StructuredData;

const ROBOTS_ALLOW: &str = "index, follow";
const ROBOTS_DENY: &str = "noindex, nofollow";

/// Derive the full head snapshot for one apply call.
pub(crate) fn snapshot_for(
    record: &MetadataRecord,
    site: &SiteConfig,
    structured: &[StructuredData],
) -> HeadSnapshot {
    let mut meta = Vec::new();
    let mut links = Vec::new();

    meta.push(MetaTag::named("description", record.description.as_str()));
    if !record.keywords.is_empty() {
        meta.push(MetaTag::named("keywords", record.keywords.join(", ")));
    }
    meta.push(MetaTag::named(
        "robots",
        if record.noindex {
            ROBOTS_DENY
        } else {
            ROBOTS_ALLOW
        },
    ));

    let canonical = record
        .canonical
        .as_deref()
        .map(|path| site.absolute_url(path));
    if let Some(href) = &canonical {
        links.push(LinkTag {
            rel: "canonical".to_string(),
            href: href.clone(),
        });
    }

    let image = record.image.as_deref().map(|path| site.absolute_url(path));

    // Open Graph
    meta.push(MetaTag::property("og:title", record.title.as_str()));
    meta.push(MetaTag::property("og:description", record.description.as_str()));
    meta.push(MetaTag::property("og:type", record.og_type.as_str()));
    if let Some(url) = &canonical {
        meta.push(MetaTag::property("og:url", url.clone()));
    }
    if let Some(image) = &image {
        meta.push(MetaTag::property("og:image", image.clone()));
    }
    if !site.name.is_empty() {
        meta.push(MetaTag::property("og:site_name", site.name.as_str()));
    }

    // Twitter card
    meta.push(MetaTag::named(
        "twitter:card",
        if image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        },
    ));
    meta.push(MetaTag::named("twitter:title", record.title.as_str()));
    meta.push(MetaTag::named("twitter:description", record.description.as_str()));
    if let Some(image) = &image {
        meta.push(MetaTag::named("twitter:image", image.clone()));
    }

    HeadSnapshot {
        title: record.title.clone(),
        meta,
        links,
        scripts: structured
            .iter()
            .map(StructuredData::to_script_json)
            .collect(),
    }
}
