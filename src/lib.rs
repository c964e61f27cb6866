//! Headsync: SEO metadata resolution and document-head synchronization.
//!
//! Resolves per-route metadata through a three-tier precedence merge
//! (defaults < store entry < page overrides) and keeps the document head
//! in sync with the resolved record plus schema.org structured-data
//! blocks. SEO injection is best-effort throughout: no failure in this
//! crate prevents a page from rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod head;
pub mod logging;
pub mod metadata;
pub mod page;
pub mod router;
pub mod schema;
