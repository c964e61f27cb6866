//! SEO Metadata
//!
//! The resolved metadata record applied to the document head, its partial
//! (patch) form used by store entries and page overrides, and the
//! three-tier resolver that combines them.

pub mod resolver;
pub mod store;

pub use resolver::resolve;
pub use store::RouteMetadataMap;

use serde::{Deserialize, Serialize};

/// Open Graph object type for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
    Product,
}

impl OgType {
    /// The `og:type` meta value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::Product => "product",
        }
    }
}

/// Fully resolved metadata for one page.
///
/// Instances are derived per navigation by [`resolver::resolve`] and never
/// mutated in place; each navigation produces a fresh record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataRecord {
    /// Page title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Keywords, in order. Empty means no keywords tag is emitted.
    pub keywords: Vec<String>,
    /// Open Graph / Twitter card image, absolute URL or site-relative path.
    pub image: Option<String>,
    /// Canonical URL path. Resolution fills this with the route path when
    /// neither the store nor the overrides set it.
    pub canonical: Option<String>,
    /// Open Graph object type.
    #[serde(rename = "type")]
    pub og_type: OgType,
    /// When true the robots directive denies indexing.
    pub noindex: bool,
}

impl Default for MetadataRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            image: None,
            canonical: None,
            og_type: OgType::Website,
            noindex: false,
        }
    }
}

/// Partial metadata: the shape of store entries and page overrides.
///
/// Every field is optional so that an explicitly provided value, including
/// `false` or an empty string, is distinguishable from "not provided".
/// `noindex: Some(false)` un-sets an inherited `true`; `None` falls through
/// to the lower tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub image: Option<String>,
    /// Accepts both `canonical` and `url` in serialized form.
    #[serde(alias = "url")]
    pub canonical: Option<String>,
    #[serde(rename = "type")]
    pub og_type: Option<OgType>,
    pub noindex: Option<bool>,
}

impl MetaPatch {
    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.keywords.is_none()
            && self.image.is_none()
            && self.canonical.is_none()
            && self.og_type.is_none()
            && self.noindex.is_none()
    }

    /// Overlay this patch onto `record`, field by field. Provided fields
    /// win; absent fields leave the record untouched.
    pub(crate) fn apply_to(&self, record: &mut MetadataRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(keywords) = &self.keywords {
            record.keywords = keywords.clone();
        }
        if let Some(image) = &self.image {
            record.image = Some(image.clone());
        }
        if let Some(canonical) = &self.canonical {
            record.canonical = Some(canonical.clone());
        }
        if let Some(og_type) = self.og_type {
            record.og_type = og_type;
        }
        if let Some(noindex) = self.noindex {
            record.noindex = noindex;
        }
    }
}
