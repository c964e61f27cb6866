//! Route Metadata Store
//!
//! Exact-match lookup from route path to a metadata patch. The map is
//! read-only after construction; there is no mutation API. An unmatched
//! route is not an error, resolution degrades to the configured defaults.

use crate::error::StoreError;
use crate::metadata::MetaPatch;
use std::collections::HashMap;

/// Static mapping from route path to its metadata patch.
///
/// Routes are static absolute paths matched exactly; no pattern or
/// parameter matching is performed.
#[derive(Debug, Clone, Default)]
pub struct RouteMetadataMap {
    entries: HashMap<String, MetaPatch>,
}

impl RouteMetadataMap {
    /// A map with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(route, patch)` pairs.
    ///
    /// Routes must be unique and start with `/`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (S, MetaPatch)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (route, patch) in entries {
            let route = route.into();
            if !route.starts_with('/') {
                return Err(StoreError::InvalidRoute(route));
            }
            if map.insert(route.clone(), patch).is_some() {
                return Err(StoreError::DuplicateRoute(route));
            }
        }
        Ok(Self { entries: map })
    }

    /// Parse a JSON document of the form `{"/route": { ...patch }}`.
    ///
    /// This is the on-disk shape of the site's `seo-metadata.json`.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let parsed: HashMap<String, MetaPatch> = serde_json::from_str(json)?;
        Self::from_entries(parsed)
    }

    /// Exact-match lookup. `None` is a miss, not an error.
    pub fn lookup(&self, route: &str) -> Option<&MetaPatch> {
        self.entries.get(route)
    }

    /// All routes with an entry, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MetaPatch)> {
        self.entries
            .iter()
            .map(|(route, patch)| (route.as_str(), patch))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
