//! Node types exchanged with the host's content store.
//!
//! The host owns all of these except [`DocsPage`]: [`HostNode`] and
//! [`FileNode`] arrive through hook contexts, and [`DocsPage`] is the one
//! node this crate hands back. All types are serde-serializable because the
//! host persists and re-hydrates its node store between builds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Frontmatter extracted by the host's document parser.
///
/// Only `title` matters to this crate; everything else the user wrote is
/// carried opaquely so a round-trip through us loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A node as delivered by the host's node-creation hook.
///
/// The transformer sees every node the host creates, of every type;
/// `internal_type` is the discriminator it filters on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostNode {
    pub id: NodeId,
    /// Host-assigned type discriminator, e.g. `"Mdx"` for parsed documents.
    pub internal_type: String,
    /// Id of the node this one was derived from (for parsed documents, the
    /// file node). Absent for root nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub frontmatter: Frontmatter,
}

/// A file node, resolved from a document node's `parent` reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    pub id: NodeId,
    /// Which configured content source this file came from.
    pub source_instance_name: String,
    /// File name without extension, e.g. `"setup"` or `"index"`.
    pub name: String,
    /// Directory path relative to the content source root, `""` at the root.
    pub relative_directory: String,
    /// Last-modified timestamp, date-formatted by the host. Passed through
    /// to derived pages verbatim.
    pub modified_time: String,
}

/// The page-metadata node this crate derives from an eligible document.
///
/// `body` is deliberately absent: the schema declares it, but the host's
/// resolver layer supplies it from the source document at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsPage {
    /// Deterministic id, a pure function of the source node's id.
    pub id: NodeId,
    pub title: String,
    /// Clean URL path, e.g. `/docs/guides/setup`.
    pub path: String,
    /// Parent file's `modified_time`, verbatim.
    pub updated: String,
}
