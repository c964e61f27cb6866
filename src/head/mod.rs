//! Head Synchronization
//!
//! Serializes writes to the injected [`DocumentHead`] and orders them with
//! a monotonically increasing generation counter so a late-arriving stale
//! apply never overwrites a newer one.

pub mod document;
mod tags;

pub use document::{
    DetachedHead, DocumentHead, HeadSnapshot, LinkTag, MemoryHead, MetaKey, MetaTag,
};

use crate::config::SiteConfig;
use crate::metadata::MetadataRecord;
use crate::schema::StructuredData;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Applies resolved metadata and structured-data blocks to the document
/// head, once per completed navigation or per change on the same route.
///
/// Guarantees:
/// - idempotent: applying identical inputs twice leaves the head unchanged;
/// - replacing: each apply fully supersedes the previous one;
/// - ordered: of two applies for the same instance, the later-reserved
///   generation wins regardless of arrival order;
/// - soft-failing: an unavailable head turns the apply into a logged no-op.
pub struct HeadSynchronizer {
    head: Arc<dyn DocumentHead>,
    site: Arc<SiteConfig>,
    state: Mutex<SyncState>,
}

#[derive(Default)]
struct SyncState {
    next_generation: u64,
    applied_generation: u64,
}

impl HeadSynchronizer {
    pub fn new(head: Arc<dyn DocumentHead>, site: Arc<SiteConfig>) -> Self {
        Self {
            head,
            site,
            state: Mutex::new(SyncState::default()),
        }
    }

    /// Reserve the generation for an apply triggered now. Callers that may
    /// be re-entered out of order (async data arriving late) reserve at
    /// trigger time and pass the value to [`apply_at`](Self::apply_at).
    pub fn next_generation(&self) -> u64 {
        let mut state = self.state.lock();
        state.next_generation += 1;
        state.next_generation
    }

    /// Apply with a freshly reserved generation.
    pub fn apply(&self, record: &MetadataRecord, structured: &[StructuredData]) {
        let generation = self.next_generation();
        self.apply_at(generation, record, structured);
    }

    /// Apply as `generation`. A generation older than the newest applied
    /// one is discarded; the head keeps the newer state.
    pub fn apply_at(
        &self,
        generation: u64,
        record: &MetadataRecord,
        structured: &[StructuredData],
    ) {
        let mut state = self.state.lock();
        if generation < state.applied_generation {
            debug!(
                generation,
                applied = state.applied_generation,
                "discarding stale head apply"
            );
            return;
        }

        let snapshot = tags::snapshot_for(record, &self.site, structured);
        match self.head.replace(&snapshot) {
            Ok(()) => state.applied_generation = generation,
            Err(err) => warn!(error = %err, "head unavailable, apply skipped"),
        }
    }
}
