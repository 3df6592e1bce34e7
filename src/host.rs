//! The host-facing seam: hook contexts and service traits.
//!
//! The host framework injects its services into each hook call. This module
//! makes that contract explicit: one context struct per hook, holding borrowed
//! handles that live only for the duration of the call, and one trait per
//! service the host provides. Nothing here is retained across invocations —
//! the host's node store stays the host's.
//!
//! [`StableNodeIds`] is the stock [`NodeIdGenerator`]: a SHA-256 digest of
//! the seed string. Hosts with their own id scheme substitute their own
//! implementation; determinism (same seed, same id) is the only requirement,
//! since derived-node identity must survive re-processing.

use crate::node::{DocsPage, FileNode, HostNode, NodeId};
use crate::schema::TypeDef;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Source-instance label for file nodes owned by this plugin's content
/// directory. The transformer only derives pages from files carrying it.
pub const SOURCE_INSTANCE_NAME: &str = "docs-pages";

/// Read access to the host's node store.
pub trait NodeStore {
    /// Look up a file node by id. `None` if the id doesn't resolve or the
    /// node isn't a file.
    fn file_node(&self, id: &NodeId) -> Option<FileNode>;
}

/// Mutating actions the host exposes to plugins.
pub trait HostActions {
    /// Register a derived page node with the host's node store.
    fn create_node(&mut self, page: DocsPage);

    /// Declare a node type to the host's schema layer.
    fn create_types(&mut self, type_def: &TypeDef);
}

/// Deterministic node-id generation.
pub trait NodeIdGenerator {
    /// Derive a node id from a seed string. Must be a pure function of the
    /// seed: repeated calls with the same seed return the same id.
    fn node_id(&self, seed: &str) -> NodeId;
}

/// SHA-256 based [`NodeIdGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StableNodeIds;

impl NodeIdGenerator for StableNodeIds {
    fn node_id(&self, seed: &str) -> NodeId {
        let digest = Sha256::digest(seed.as_bytes());
        NodeId::new(format!("{digest:x}"))
    }
}

/// Context for the pre-bootstrap hook, invoked before content scanning.
pub struct PreBootstrap<'a> {
    /// The host project's root working directory.
    pub project_dir: &'a Path,
}

/// Context for the schema-customization hook.
pub struct SchemaCustomization<'a> {
    pub actions: &'a mut dyn HostActions,
}

/// Context for the node-creation hook, invoked once per node the host
/// creates, for every node type.
pub struct CreateNode<'a> {
    /// The node just created by the host.
    pub node: &'a HostNode,
    pub store: &'a dyn NodeStore,
    pub ids: &'a dyn NodeIdGenerator,
    pub actions: &'a mut dyn HostActions,
}
