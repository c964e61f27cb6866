//! Product block construction.
//!
//! Maps the catalog's Product entity onto the schema.org Product
//! vocabulary. The entity is consumed, not owned: the catalog defines what
//! a product is, this module only checks the fields the vocabulary
//! requires and emits the optional ones when present.

use crate::error::SchemaError;
use crate::schema::{StructuredData, SCHEMA_CONTEXT};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Offer currency for the catalog.
const PRICE_CURRENCY: &str = "EUR";

/// Scalar or structured metafield value attached to a product.
///
/// Metafields are an open mapping; consumers that require a specific key
/// document it at their own boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetafieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Json(Value),
}

/// Product entity consumed by the schema builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Absent price makes the entity invalid for schema purposes.
    pub price: Option<f64>,
    /// Canonical product URL.
    pub link: String,
    pub image_link: Option<String>,
    /// Feed-style ("in stock") or schema.org URL form, normalized on build.
    pub availability: Option<String>,
    pub sku: Option<String>,
    /// URL-friendly slug.
    pub handle: Option<String>,
    /// Overrides `title` in the emitted block when present.
    pub seo_title: Option<String>,
    /// Overrides `description` in the emitted block when present.
    pub seo_description: Option<String>,
    /// Additional product images, preferred over `image_link` when set.
    pub images: Vec<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    /// Open mapping emitted as `additionalProperty` entries.
    pub metafields: BTreeMap<String, MetafieldValue>,
}

/// Build the Product block.
///
/// Requires `id`, `title`, `price` and `link` to be present and non-empty;
/// a missing one fails with [`SchemaError::InvalidEntity`] naming the
/// field. Optional fields (sku, brand, rating, images, metafields) are
/// included when present and omitted otherwise.
pub fn product(product: &Product) -> Result<StructuredData, SchemaError> {
    let invalid = |field: &'static str| SchemaError::InvalidEntity {
        entity: "product",
        field,
    };

    if product.id.trim().is_empty() {
        return Err(invalid("id"));
    }
    if product.title.trim().is_empty() {
        return Err(invalid("title"));
    }
    let price = product.price.ok_or_else(|| invalid("price"))?;
    if product.link.trim().is_empty() {
        return Err(invalid("link"));
    }

    let name = product
        .seo_title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&product.title);
    let description = product
        .seo_description
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&product.description);

    let mut offer = json!({
        "@type": "Offer",
        "url": product.link,
        "price": format!("{price:.2}"),
        "priceCurrency": PRICE_CURRENCY,
    });
    if let Some(availability) = &product.availability {
        offer["availability"] = json!(availability_url(availability));
    }

    let mut value = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "productID": product.id,
        "name": name,
        "description": description,
        "offers": offer,
    });

    if !product.images.is_empty() {
        value["image"] = json!(product.images);
    } else if let Some(image) = &product.image_link {
        value["image"] = json!(image);
    }
    if let Some(sku) = &product.sku {
        value["sku"] = json!(sku);
    }
    if let Some(brand) = &product.brand {
        value["brand"] = json!({ "@type": "Brand", "name": brand });
    }
    if let (Some(rating), Some(review_count)) = (product.rating, product.review_count) {
        value["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": rating,
            "reviewCount": review_count,
        });
    }
    if !product.metafields.is_empty() {
        let properties: Vec<Value> = product
            .metafields
            .iter()
            .map(|(key, field)| {
                json!({
                    "@type": "PropertyValue",
                    "name": key,
                    "value": metafield_json(field),
                })
            })
            .collect();
        value["additionalProperty"] = json!(properties);
    }

    Ok(StructuredData::new(value))
}

fn metafield_json(value: &MetafieldValue) -> Value {
    match value {
        MetafieldValue::Text(text) => json!(text),
        MetafieldValue::Number(number) => json!(number),
        MetafieldValue::Flag(flag) => json!(flag),
        MetafieldValue::Json(json) => json.clone(),
    }
}

/// Normalize an availability value to its schema.org URL form.
/// Already-normalized URLs pass through unchanged; so does an
/// unrecognized value, with a warning, rather than misstating stock
/// status.
fn availability_url(value: &str) -> String {
    if value.starts_with("https://schema.org/") {
        return value.to_string();
    }
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    let suffix = match normalized.as_str() {
        "instock" => "InStock",
        "outofstock" => "OutOfStock",
        "preorder" => "PreOrder",
        "discontinued" => "Discontinued",
        _ => {
            warn!(value, "unrecognized availability value, passing through");
            return value.to_string();
        }
    };
    format!("https://schema.org/{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit() -> Product {
        Product {
            id: "kit-6".to_string(),
            title: "Kit 6 Trattamenti".to_string(),
            description: "Sei trattamenti drenanti".to_string(),
            price: Some(49.9),
            link: "https://www.collant.example/ordine".to_string(),
            availability: Some("in stock".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_mapped() {
        let block = product(&kit()).unwrap();
        let value = block.as_json();
        assert_eq!(block.schema_type(), Some("Product"));
        assert_eq!(value["productID"], "kit-6");
        assert_eq!(value["offers"]["price"], "49.90");
        assert_eq!(value["offers"]["priceCurrency"], "EUR");
        assert_eq!(value["offers"]["availability"], "https://schema.org/InStock");
    }

    #[test]
    fn test_missing_price_is_invalid() {
        let entity = Product {
            price: None,
            ..kit()
        };
        assert_eq!(
            product(&entity).unwrap_err(),
            SchemaError::InvalidEntity {
                entity: "product",
                field: "price"
            }
        );
    }

    #[test]
    fn test_empty_link_is_invalid() {
        let entity = Product {
            link: String::new(),
            ..kit()
        };
        assert_eq!(
            product(&entity).unwrap_err(),
            SchemaError::InvalidEntity {
                entity: "product",
                field: "link"
            }
        );
    }

    #[test]
    fn test_sku_included_when_present_omitted_when_absent() {
        let without = product(&kit()).unwrap();
        assert!(without.as_json().get("sku").is_none());

        let with = product(&Product {
            sku: Some("CLT-6".to_string()),
            ..kit()
        })
        .unwrap();
        assert_eq!(with.as_json()["sku"], "CLT-6");
    }

    #[test]
    fn test_seo_overrides_replace_title_and_description() {
        let entity = Product {
            seo_title: Some("Collant Drenante - Kit Convenienza".to_string()),
            seo_description: Some("Il kit piu venduto".to_string()),
            ..kit()
        };
        let value = product(&entity).unwrap().as_json().clone();
        assert_eq!(value["name"], "Collant Drenante - Kit Convenienza");
        assert_eq!(value["description"], "Il kit piu venduto");
    }

    #[test]
    fn test_images_preferred_over_image_link() {
        let entity = Product {
            image_link: Some("/img/main.webp".to_string()),
            images: vec!["/img/a.webp".to_string(), "/img/b.webp".to_string()],
            ..kit()
        };
        let value = product(&entity).unwrap().as_json().clone();
        assert_eq!(value["image"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_aggregate_rating_requires_both_fields() {
        let rating_only = Product {
            rating: Some(4.8),
            ..kit()
        };
        assert!(product(&rating_only)
            .unwrap()
            .as_json()
            .get("aggregateRating")
            .is_none());

        let both = Product {
            rating: Some(4.8),
            review_count: Some(212),
            ..kit()
        };
        let value = product(&both).unwrap().as_json().clone();
        assert_eq!(value["aggregateRating"]["reviewCount"], 212);
    }

    #[test]
    fn test_metafields_become_additional_properties() {
        let mut metafields = BTreeMap::new();
        metafields.insert(
            "denier".to_string(),
            MetafieldValue::Number(70.0),
        );
        metafields.insert(
            "washable".to_string(),
            MetafieldValue::Flag(true),
        );
        let entity = Product {
            metafields,
            ..kit()
        };
        let value = product(&entity).unwrap().as_json().clone();
        let properties = value["additionalProperty"].as_array().unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0]["@type"], "PropertyValue");
        assert_eq!(properties[0]["name"], "denier");
    }

    #[test]
    fn test_availability_normalization() {
        assert_eq!(availability_url("in stock"), "https://schema.org/InStock");
        assert_eq!(
            availability_url("OUT_OF_STOCK"),
            "https://schema.org/OutOfStock"
        );
        assert_eq!(
            availability_url("https://schema.org/PreOrder"),
            "https://schema.org/PreOrder"
        );
    }

    #[test]
    fn test_unrecognized_availability_passes_through() {
        assert_eq!(availability_url("limited"), "limited");

        let entity = Product {
            availability: Some("limited".to_string()),
            ..kit()
        };
        let value = product(&entity).unwrap().as_json().clone();
        assert_eq!(value["offers"]["availability"], "limited");
    }
}
