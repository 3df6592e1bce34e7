//! Shared test utilities for the docs-pages test suite.
//!
//! Provides an in-memory fake of the host's services plus node builders,
//! so hook tests read as: build nodes, run hook, assert on what the fake
//! host captured.

use std::collections::HashMap;

use crate::host::{CreateNode, HostActions, NodeStore, SOURCE_INSTANCE_NAME, StableNodeIds};
use crate::node::{DocsPage, FileNode, Frontmatter, HostNode, NodeId};
use crate::schema::TypeDef;

// =========================================================================
// Fake host services
// =========================================================================

/// In-memory file-node store.
#[derive(Default)]
pub struct FakeStore {
    nodes: HashMap<NodeId, FileNode>,
}

impl FakeStore {
    pub fn insert(&mut self, node: FileNode) {
        self.nodes.insert(node.id.clone(), node);
    }
}

impl NodeStore for FakeStore {
    fn file_node(&self, id: &NodeId) -> Option<FileNode> {
        self.nodes.get(id).cloned()
    }
}

/// Captures every action a hook takes.
#[derive(Default)]
pub struct FakeActions {
    pub created: Vec<DocsPage>,
    pub declared_types: Vec<TypeDef>,
}

impl HostActions for FakeActions {
    fn create_node(&mut self, page: DocsPage) {
        self.created.push(page);
    }

    fn create_types(&mut self, type_def: &TypeDef) {
        self.declared_types.push(type_def.clone());
    }
}

/// The full fake host: store, actions, and deterministic ids.
#[derive(Default)]
pub struct FakeHost {
    pub store: FakeStore,
    pub actions: FakeActions,
    pub ids: StableNodeIds,
}

impl FakeHost {
    /// Build a node-creation context for one hook invocation.
    pub fn ctx<'a>(&'a mut self, node: &'a HostNode) -> CreateNode<'a> {
        CreateNode {
            node,
            store: &self.store,
            ids: &self.ids,
            actions: &mut self.actions,
        }
    }
}

// =========================================================================
// Node builders
// =========================================================================

/// A parsed MDX document node with the given parent and frontmatter title.
pub fn mdx_node(id: &str, parent: &str, title: Option<&str>) -> HostNode {
    HostNode {
        id: NodeId::new(id),
        internal_type: "Mdx".to_string(),
        parent: Some(NodeId::new(parent)),
        frontmatter: Frontmatter {
            title: title.map(String::from),
            extra: serde_json::Map::new(),
        },
    }
}

/// A parentless node of an arbitrary type.
pub fn plain_node(id: &str, internal_type: &str) -> HostNode {
    HostNode {
        id: NodeId::new(id),
        internal_type: internal_type.to_string(),
        parent: None,
        frontmatter: Frontmatter::default(),
    }
}

/// A file node sourced from this plugin's content directory.
pub fn file_node(id: &str, name: &str, relative_dir: &str, modified: &str) -> FileNode {
    FileNode {
        id: NodeId::new(id),
        source_instance_name: SOURCE_INSTANCE_NAME.to_string(),
        name: name.to_string(),
        relative_directory: relative_dir.to_string(),
        modified_time: modified.to_string(),
    }
}

/// Builder-style overrides for [`file_node`].
pub trait FileNodeExt {
    fn with_source_instance(self, name: &str) -> FileNode;
}

impl FileNodeExt for FileNode {
    fn with_source_instance(mut self, name: &str) -> FileNode {
        self.source_instance_name = name.to_string();
        self
    }
}
