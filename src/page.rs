//! Page Wrapper
//!
//! The composition point between router, metadata store and head
//! synchronizer. One wrapper drives one mounted page instance: it resolves
//! metadata on mount, again on every route change, and again when the
//! page's overrides or structured data change on the same route (e.g. a
//! product fetched after the initial render).
//!
//! There is no terminal state and no cleanup of head state on drop; the
//! next wrapper's apply supersedes whatever this one wrote.

use crate::config::SiteConfig;
use crate::head::HeadSynchronizer;
use crate::metadata::{resolve, MetaPatch, RouteMetadataMap};
use crate::router::{RouteEvents, Subscription};
use crate::schema::{self, BreadcrumbItem, Product, StructuredData};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

/// Structured-data inputs a page hands to the wrapper.
///
/// Pre-built blocks pass through untouched. Raw entities are run through
/// the schema builders at apply time, so a malformed entity drops that one
/// block with a warning instead of failing the page.
#[derive(Default)]
pub struct PageSchemas {
    /// Pre-built blocks, appended after the generated ones.
    pub blocks: Vec<StructuredData>,
    /// Product to emit a Product block for.
    pub product: Option<Product>,
    /// Breadcrumb trail to emit a BreadcrumbList block for.
    pub breadcrumbs: Option<Vec<BreadcrumbItem>>,
}

/// Wraps one page instance and keeps the document head in sync with it.
pub struct PageWrapper {
    site: Arc<SiteConfig>,
    store: Arc<RouteMetadataMap>,
    sync: Arc<HeadSynchronizer>,
    route: String,
    overrides: Option<MetaPatch>,
    schemas: PageSchemas,
    include_organization_schema: bool,
    include_website_schema: bool,
}

impl PageWrapper {
    pub fn new(
        site: Arc<SiteConfig>,
        store: Arc<RouteMetadataMap>,
        sync: Arc<HeadSynchronizer>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            site,
            store,
            sync,
            route: route.into(),
            overrides: None,
            schemas: PageSchemas::default(),
            include_organization_schema: false,
            include_website_schema: false,
        }
    }

    /// Page-supplied partial metadata; wins over the store entry.
    pub fn with_overrides(mut self, overrides: MetaPatch) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Append a pre-built structured-data block.
    pub fn with_structured_data(mut self, block: StructuredData) -> Self {
        self.schemas.blocks.push(block);
        self
    }

    /// Emit a Product block for `product`.
    pub fn with_product(mut self, product: Product) -> Self {
        self.schemas.product = Some(product);
        self
    }

    /// Emit a BreadcrumbList block for `items`.
    pub fn with_breadcrumbs(mut self, items: Vec<BreadcrumbItem>) -> Self {
        self.schemas.breadcrumbs = Some(items);
        self
    }

    /// Include the site-wide Organization identity block.
    pub fn with_organization_schema(mut self, include: bool) -> Self {
        self.include_organization_schema = include;
        self
    }

    /// Include the WebSite search-capability block.
    pub fn with_website_schema(mut self, include: bool) -> Self {
        self.include_website_schema = include;
        self
    }

    /// Route this instance currently renders.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// First render: resolve and apply.
    pub fn mount(&self) {
        self.refresh();
    }

    /// The router moved this instance to a new route.
    pub fn route_changed(&mut self, route: &str) {
        self.route = route.to_string();
        self.refresh();
    }

    /// Same route, new overrides or structured data.
    pub fn overrides_changed(&mut self, overrides: Option<MetaPatch>, schemas: PageSchemas) {
        self.overrides = overrides;
        self.schemas = schemas;
        self.refresh();
    }

    /// Wire a shared wrapper to the router's navigation events. Dropping
    /// the returned guard detaches it again.
    pub fn attach(page: &Arc<Mutex<PageWrapper>>, events: &RouteEvents) -> Subscription {
        let weak = Arc::downgrade(page);
        events.subscribe(move |path| {
            if let Some(page) = weak.upgrade() {
                page.lock().route_changed(path);
            }
        })
    }

    fn refresh(&self) {
        // Reserve the generation before any work so a trigger sequenced
        // earlier can never overwrite a later one.
        let generation = self.sync.next_generation();
        let record = resolve(
            &self.site.defaults,
            &self.store,
            &self.route,
            self.overrides.as_ref(),
        );
        let blocks = self.collect_blocks();
        self.sync.apply_at(generation, &record, &blocks);
    }

    fn collect_blocks(&self) -> Vec<StructuredData> {
        let mut blocks = Vec::new();
        if self.include_organization_schema {
            blocks.push(schema::organization(&self.site));
        }
        if self.include_website_schema {
            blocks.push(schema::website(&self.site));
        }
        if let Some(product) = &self.schemas.product {
            match schema::product(product) {
                Ok(block) => blocks.push(block),
                Err(err) => warn!(route = %self.route, error = %err, "dropping product block"),
            }
        }
        if let Some(items) = &self.schemas.breadcrumbs {
            blocks.push(schema::breadcrumb(items));
        }
        blocks.extend(self.schemas.blocks.iter().cloned());
        blocks
    }
}
