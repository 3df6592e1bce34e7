//! The node transformer: parsed document in, `DocsPage` node out.
//!
//! The host invokes the node-creation hook for every node it creates, of
//! every type. The transformer ignores everything except parsed MDX documents
//! whose backing file came from this plugin's content source, and derives
//! exactly one `DocsPage` per eligible document:
//!
//! - **id** — deterministic digest of `DocsPage-<source id>`, so re-running
//!   the pipeline over an unchanged document re-creates the same node and the
//!   host's store upserts instead of duplicating.
//! - **title** — frontmatter title when present and non-empty, else the
//!   file name.
//! - **updated** — the file's modification timestamp, verbatim.
//! - **path** — composed by [`route::page_path`]; `index` files collapse to
//!   their directory's path.
//!
//! An MDX node with no parent, or a parent id the store can't resolve, is a
//! content-graph corruption the host must surface, not something to paper
//! over: the hook returns a typed error rather than silently skipping.

use crate::config::PluginOptions;
use crate::host::{CreateNode, SOURCE_INSTANCE_NAME};
use crate::node::{DocsPage, NodeId};
use crate::route;
use thiserror::Error;

/// Host type discriminator for parsed MDX documents.
pub const MDX_NODE_TYPE: &str = "Mdx";

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("document node {node} has no parent file node")]
    MissingParent { node: NodeId },
    #[error("document node {node} references parent {parent}, which is not in the node store")]
    UnresolvedParent { node: NodeId, parent: NodeId },
}

/// Node-creation hook: derive a `DocsPage` from an eligible document node.
///
/// No-op for nodes that aren't MDX documents or whose backing file belongs
/// to a different content source.
pub fn on_create_node(
    ctx: CreateNode<'_>,
    options: &PluginOptions,
) -> Result<(), TransformError> {
    // Type filter first: only document nodes are required to have a parent.
    if ctx.node.internal_type != MDX_NODE_TYPE {
        return Ok(());
    }

    let parent_id = ctx.node.parent.as_ref().ok_or(TransformError::MissingParent {
        node: ctx.node.id.clone(),
    })?;
    let parent =
        ctx.store
            .file_node(parent_id)
            .ok_or_else(|| TransformError::UnresolvedParent {
                node: ctx.node.id.clone(),
                parent: parent_id.clone(),
            })?;

    if parent.source_instance_name != SOURCE_INSTANCE_NAME {
        tracing::debug!(
            node = %ctx.node.id,
            source = %parent.source_instance_name,
            "skipping document from foreign content source"
        );
        return Ok(());
    }

    let config = options.resolve();
    let page_name = route::page_name(&parent.name);
    let title = ctx
        .node
        .frontmatter
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| parent.name.clone());

    let page = DocsPage {
        id: ctx.ids.node_id(&format!("DocsPage-{}", ctx.node.id)),
        title,
        path: route::page_path(&config.base_path, &parent.relative_directory, page_name),
        updated: parent.modified_time,
    };
    tracing::debug!(id = %page.id, path = %page.path, "derived docs page");
    ctx.actions.create_node(page);
    Ok(())
}
