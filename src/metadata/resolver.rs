//! Metadata Resolver
//!
//! Three-tier precedence merge: process-wide defaults, overlaid by the
//! store entry for the route, overlaid by page-supplied overrides.
//! Each tier applies field by field, so a page can opt out of any
//! auto-loaded value without the store having to anticipate it.

use crate::metadata::{MetaPatch, MetadataRecord, RouteMetadataMap};
use tracing::debug;

/// Resolve the metadata record for `route`.
///
/// Precedence, lowest to highest: `defaults`, the store entry for `route`
/// (if any), `overrides` (if any). A field absent from a tier falls through
/// to the tier below; an explicitly provided value, including `false` or an
/// empty string, wins. When no tier set a canonical URL it defaults to the
/// route path itself.
///
/// Pure and synchronous; repeated calls with identical inputs return
/// identical records.
pub fn resolve(
    defaults: &MetadataRecord,
    store: &RouteMetadataMap,
    route: &str,
    overrides: Option<&MetaPatch>,
) -> MetadataRecord {
    let mut record = defaults.clone();

    match store.lookup(route) {
        Some(entry) => entry.apply_to(&mut record),
        None => debug!(route, "no store entry for route, using defaults"),
    }

    if let Some(patch) = overrides {
        patch.apply_to(&mut record);
    }

    if record.canonical.is_none() {
        record.canonical = Some(route.to_string());
    }

    record
}
