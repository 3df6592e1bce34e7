//! Declarative node-type registration.
//!
//! The host infers GraphQL field types from sample node data unless a plugin
//! declares them explicitly. Inference misfires on sparse data (a site whose
//! every page lacks a frontmatter title would infer nothing for `title`), so
//! the `DocsPage` type is declared field by field and opted out of inference.
//!
//! The declaration is data ([`TypeDef`]) rather than schema text so tests can
//! assert on structure; [`TypeDef::to_sdl`] renders the host's SDL form for
//! hosts that ingest type definitions as text.

use crate::host::SchemaCustomization;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Scalar type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Id,
    String,
    Date,
}

impl FieldType {
    fn sdl_name(self) -> &'static str {
        match self {
            FieldType::Id => "ID",
            FieldType::String => "String",
            FieldType::Date => "Date",
        }
    }
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub ty: FieldType,
    pub required: bool,
    /// Whether the host should attach its date-formatting arguments to the
    /// field (only meaningful for [`FieldType::Date`]).
    pub date_formatted: bool,
}

impl FieldDef {
    fn required(name: &str, ty: FieldType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            required: true,
            date_formatted: false,
        }
    }
}

/// An explicitly-typed node type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    /// Host interfaces the type implements (`Node` for queryable nodes).
    pub implements: Vec<String>,
    /// When false, the host must not infer additional fields from data.
    pub infer: bool,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    /// Render the declaration in the host's SDL form.
    pub fn to_sdl(&self) -> String {
        let mut sdl = format!("type {}", self.name);
        if !self.implements.is_empty() {
            write!(sdl, " implements {}", self.implements.join(" & ")).unwrap();
        }
        if !self.infer {
            sdl.push_str(" @dontInfer");
        }
        sdl.push_str(" {\n");
        for field in &self.fields {
            write!(sdl, "  {}: {}", field.name, field.ty.sdl_name()).unwrap();
            if field.required {
                sdl.push('!');
            }
            if field.date_formatted {
                sdl.push_str(" @dateformat");
            }
            sdl.push('\n');
        }
        sdl.push('}');
        sdl
    }
}

/// The `DocsPage` type declaration.
///
/// `body` is declared but never set on created nodes; the host's resolver
/// layer supplies it from the source document at query time.
pub fn docs_page_type() -> TypeDef {
    TypeDef {
        name: "DocsPage".to_string(),
        implements: vec!["Node".to_string()],
        infer: false,
        fields: vec![
            FieldDef::required("id", FieldType::Id),
            FieldDef::required("title", FieldType::String),
            FieldDef::required("path", FieldType::String),
            FieldDef {
                date_formatted: true,
                ..FieldDef::required("updated", FieldType::Date)
            },
            FieldDef::required("body", FieldType::String),
        ],
    }
}

/// Schema-customization hook: declare the `DocsPage` type to the host.
pub fn create_schema_customization(ctx: &mut SchemaCustomization<'_>) {
    let type_def = docs_page_type();
    tracing::debug!(type_name = %type_def.name, "registering node type");
    ctx.actions.create_types(&type_def);
}
