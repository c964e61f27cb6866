//! Document-Head Boundary
//!
//! The document head is a process-wide singleton. Modeling it as an
//! injected handle keeps the synchronizer unit-testable against an
//! in-memory fake and lets non-browser contexts fail softly instead of
//! crashing.

use crate::error::HeadError;
use parking_lot::RwLock;

/// Identifying attribute of a meta tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKey {
    /// `<meta name="..." content="...">`
    Name(String),
    /// `<meta property="..." content="...">` (Open Graph)
    Property(String),
}

/// One meta tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property.into()),
            content: content.into(),
        }
    }
}

/// `<link rel="..." href="...">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

/// The complete set of head tags contributed by one apply call.
///
/// The head is always written as a whole snapshot. Replacing everything at
/// once is what makes apply idempotent and keeps tags from a previous
/// navigation from accumulating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadSnapshot {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
    /// Serialized JSON-LD blocks, one script tag each.
    pub scripts: Vec<String>,
}

impl HeadSnapshot {
    /// Content of the meta tag with `name="..."`, if present.
    pub fn meta_named(&self, name: &str) -> Option<&str> {
        let key = MetaKey::Name(name.to_string());
        self.meta
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.content.as_str())
    }

    /// Content of the meta tag with `property="..."`, if present.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        let key = MetaKey::Property(property.to_string());
        self.meta
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.content.as_str())
    }

    /// Number of meta tags carrying `key`.
    pub fn meta_count(&self, key: &MetaKey) -> usize {
        self.meta.iter().filter(|tag| &tag.key == key).count()
    }

    /// Render the snapshot as head HTML, one tag per line.
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        for tag in &self.meta {
            match &tag.key {
                MetaKey::Name(name) => out.push_str(&format!(
                    "<meta name=\"{}\" content=\"{}\">\n",
                    escape(name),
                    escape(&tag.content)
                )),
                MetaKey::Property(property) => out.push_str(&format!(
                    "<meta property=\"{}\" content=\"{}\">\n",
                    escape(property),
                    escape(&tag.content)
                )),
            }
        }
        for link in &self.links {
            out.push_str(&format!(
                "<link rel=\"{}\" href=\"{}\">\n",
                escape(&link.rel),
                escape(&link.href)
            ));
        }
        for script in &self.scripts {
            // Guard against an embedded </script> terminating the block.
            let body = script.replace("</", "<\\/");
            out.push_str(&format!(
                "<script type=\"application/ld+json\">{body}</script>\n"
            ));
        }
        out
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Injected handle to the document head.
pub trait DocumentHead: Send + Sync {
    /// Replace all previously contributed tags with `snapshot`.
    fn replace(&self, snapshot: &HeadSnapshot) -> Result<(), HeadError>;
}

/// In-memory head, used by tests and the CLI renderer.
#[derive(Debug, Default)]
pub struct MemoryHead {
    state: RwLock<HeadSnapshot>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently applied snapshot.
    pub fn snapshot(&self) -> HeadSnapshot {
        self.state.read().clone()
    }
}

impl DocumentHead for MemoryHead {
    fn replace(&self, snapshot: &HeadSnapshot) -> Result<(), HeadError> {
        *self.state.write() = snapshot.clone();
        Ok(())
    }
}

/// A head handle for contexts with no document at all; every write fails
/// with [`HeadError::Unavailable`].
#[derive(Debug, Default)]
pub struct DetachedHead;

impl DocumentHead for DetachedHead {
    fn replace(&self, _snapshot: &HeadSnapshot) -> Result<(), HeadError> {
        Err(HeadError::Unavailable(
            "no document in this context".to_string(),
        ))
    }
}
