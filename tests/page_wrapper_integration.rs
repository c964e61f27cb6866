//! Page wrapper integration tests: the full mount / route-changed /
//! overrides-changed lifecycle against an in-memory head, and the router
//! subscription contract.

use headsync::config::SiteConfig;
use headsync::head::{HeadSynchronizer, MemoryHead};
use headsync::metadata::{MetaPatch, RouteMetadataMap};
use headsync::page::{PageSchemas, PageWrapper};
use headsync::router::RouteEvents;
use headsync::schema::{BreadcrumbItem, Product};
use parking_lot::Mutex;
use std::sync::Arc;

struct Fixture {
    site: Arc<SiteConfig>,
    store: Arc<RouteMetadataMap>,
    head: Arc<MemoryHead>,
    sync: Arc<HeadSynchronizer>,
}

fn fixture() -> Fixture {
    let site = Arc::new(SiteConfig {
        name: "Collant Shop".to_string(),
        base_url: "https://www.collant.example".to_string(),
        defaults: headsync::metadata::MetadataRecord {
            title: "Liscia Snella Leggera".to_string(),
            description: "Il collant drenante anticellulite".to_string(),
            ..Default::default()
        },
        ..Default::default()
    });
    let store = Arc::new(
        RouteMetadataMap::from_json(
            r#"{
                "/": { "title": "Home" },
                "/collant": { "title": "Collant Drenante", "type": "product" },
                "/faq": { "title": "FAQ" }
            }"#,
        )
        .unwrap(),
    );
    let head = Arc::new(MemoryHead::new());
    let sync = Arc::new(HeadSynchronizer::new(head.clone(), site.clone()));
    Fixture {
        site,
        store,
        head,
        sync,
    }
}

fn kit() -> Product {
    Product {
        id: "kit-6".to_string(),
        title: "Kit 6 Trattamenti".to_string(),
        description: "Sei trattamenti".to_string(),
        price: Some(49.9),
        link: "https://www.collant.example/ordine".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_mount_applies_resolved_metadata() {
    let f = fixture();
    let wrapper = PageWrapper::new(f.site, f.store, f.sync, "/collant");
    wrapper.mount();

    let state = f.head.snapshot();
    assert_eq!(state.title, "Collant Drenante");
    assert_eq!(state.meta_property("og:type"), Some("product"));
    assert_eq!(state.meta_named("robots"), Some("index, follow"));
}

#[test]
fn test_route_change_reresolves_and_reapplies() {
    let f = fixture();
    let mut wrapper = PageWrapper::new(f.site, f.store, f.sync, "/");
    wrapper.mount();
    assert_eq!(f.head.snapshot().title, "Home");

    wrapper.route_changed("/faq");
    assert_eq!(wrapper.route(), "/faq");
    let state = f.head.snapshot();
    assert_eq!(state.title, "FAQ");
    assert_eq!(state.links[0].href, "https://www.collant.example/faq");
}

#[test]
fn test_overrides_changed_after_async_data_load() {
    let f = fixture();
    let mut wrapper = PageWrapper::new(f.site, f.store, f.sync, "/collant");
    wrapper.mount();
    assert!(f.head.snapshot().scripts.is_empty());

    // Product arrives after the initial render; same route, new inputs.
    wrapper.overrides_changed(
        Some(MetaPatch {
            description: Some("Kit convenienza 6 trattamenti".to_string()),
            ..Default::default()
        }),
        PageSchemas {
            product: Some(kit()),
            ..Default::default()
        },
    );

    let state = f.head.snapshot();
    assert_eq!(state.title, "Collant Drenante");
    assert_eq!(
        state.meta_named("description"),
        Some("Kit convenienza 6 trattamenti")
    );
    assert_eq!(state.scripts.len(), 1);
    assert!(state.scripts[0].contains("\"@type\":\"Product\""));
}

#[test]
fn test_invalid_product_drops_block_but_applies_metadata() {
    let f = fixture();
    let invalid = Product {
        price: None,
        ..kit()
    };
    let wrapper = PageWrapper::new(f.site, f.store, f.sync, "/collant")
        .with_product(invalid)
        .with_breadcrumbs(vec![
            BreadcrumbItem::new("Prodotti", "/prodotti"),
            BreadcrumbItem::new("Collant Drenante", "/collant"),
        ]);
    wrapper.mount();

    let state = f.head.snapshot();
    // Metadata portion still applied.
    assert_eq!(state.title, "Collant Drenante");
    // The malformed Product block is gone; the breadcrumb survived.
    assert_eq!(state.scripts.len(), 1);
    assert!(state.scripts[0].contains("\"@type\":\"BreadcrumbList\""));
}

#[test]
fn test_homepage_schema_flags() {
    let f = fixture();
    let wrapper = PageWrapper::new(f.site, f.store, f.sync, "/")
        .with_organization_schema(true)
        .with_website_schema(true);
    wrapper.mount();

    let state = f.head.snapshot();
    assert_eq!(state.scripts.len(), 2);
    assert!(state.scripts[0].contains("\"@type\":\"Organization\""));
    assert!(state.scripts[1].contains("\"@type\":\"WebSite\""));
}

#[test]
fn test_noindex_override_on_unmapped_route() {
    let f = fixture();
    let wrapper = PageWrapper::new(f.site, f.store, f.sync, "/grazie").with_overrides(MetaPatch {
        noindex: Some(true),
        ..Default::default()
    });
    wrapper.mount();

    let state = f.head.snapshot();
    assert_eq!(state.title, "Liscia Snella Leggera");
    assert_eq!(state.meta_named("robots"), Some("noindex, nofollow"));
}

#[test]
fn test_attached_wrapper_follows_navigation_until_detached() {
    let f = fixture();
    let events = RouteEvents::new();
    let wrapper = Arc::new(Mutex::new(PageWrapper::new(
        f.site, f.store, f.sync, "/",
    )));
    wrapper.lock().mount();

    let subscription = PageWrapper::attach(&wrapper, &events);
    events.navigated("/faq");
    assert_eq!(f.head.snapshot().title, "FAQ");

    drop(subscription);
    events.navigated("/collant");
    // Detached: the head keeps the last applied state.
    assert_eq!(f.head.snapshot().title, "FAQ");
    assert_eq!(events.listener_count(), 0);
}
