//! # docs-pages
//!
//! A content plugin for static-site hosts: registers a docs content
//! directory, declares a `DocsPage` node type, and derives one page-metadata
//! node per source document for the host's query layer.
//!
//! # Architecture: Three Host-Driven Hooks
//!
//! The crate owns no loop, queue, or persistent state. The host framework
//! calls each hook at a fixed point in its own pipeline; the plugin reacts
//! once per invocation and holds no handles afterwards:
//!
//! ```text
//! 1. Pre-bootstrap     ensure the content directory exists
//! 2. Schema            declare the DocsPage node type (no field inference)
//! 3. Node creation     MDX document node → DocsPage metadata node
//! ```
//!
//! Everything the host provides — node lookup, node creation, type
//! declaration, id generation — arrives as borrowed handles inside a
//! per-hook context struct ([`host`]). That keeps the seam explicit and
//! makes every hook testable against in-memory fakes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`bootstrap`] | Pre-bootstrap hook — creates the content directory if absent |
//! | [`schema`] | Schema hook — explicit `DocsPage` type declaration and SDL rendering |
//! | [`transform`] | Node-creation hook — filters document nodes and derives pages |
//! | [`config`] | Partial options → resolved config, plus `docs.toml` loading |
//! | [`host`] | Hook contexts and host-service traits (the plugin contract) |
//! | [`node`] | Node types exchanged with the host's store |
//! | [`route`] | URL path composition (`index` files collapse to their directory) |
//!
//! # Design Decisions
//!
//! ## Deterministic Node Identity
//!
//! A derived page's id is a pure function of its source node's id
//! (`DocsPage-<source id>`, digested through [`host::StableNodeIds`] or the
//! host's own generator). Re-processing an unchanged document re-creates the
//! identical node, so the host's store upserts instead of accumulating
//! duplicates across incremental builds.
//!
//! ## Fail on Broken Parents
//!
//! An MDX document whose `parent` file node is missing or unresolvable is a
//! corrupted content graph. The transformer returns a typed error
//! ([`transform::TransformError`]) instead of skipping, so the host surfaces
//! the fault at the node that caused it rather than shipping a site with a
//! silently absent page.
//!
//! ## Explicit Schema, No Inference
//!
//! The `DocsPage` type opts out of the host's field-type inference. Inference
//! works from sample data, and docs sites legitimately have sparse data (no
//! frontmatter titles anywhere, say); declaring every field keeps the query
//! schema stable regardless of content.

pub mod bootstrap;
pub mod config;
pub mod host;
pub mod node;
pub mod route;
pub mod schema;
pub mod transform;

#[cfg(test)]
pub(crate) mod test_helpers;
