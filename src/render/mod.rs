//! Schema-to-HCL template rendering.
//!
//! Rendering is a pure tree-to-text transform: a [`TemplateRenderer`] borrows
//! an immutable [`ProviderSchema`] and every call takes its [`RenderOptions`]
//! explicitly, so one renderer can serve concurrent callers.
//!
//! # Layout
//!
//! - [`types`] resolves raw type expressions to canonical signatures
//! - [`placeholder`] synthesizes right-hand-side values
//! - `attribute` and `block` render members line by line
//! - `template` assembles the complete `resource`/`data` template

mod attribute;
mod block;
pub mod placeholder;
mod template;
pub mod types;


pub use attribute::Requirement;

use crate::schema::ProviderSchema;

/// Spaces per nesting level.
const INDENT: &str = "  ";

/// Per-call rendering switches, threaded through every recursive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit schema descriptions as leading comment lines.
    pub with_descriptions: bool,
    /// Keep only required attributes and blocks with `min_items > 0`.
    pub required_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            with_descriptions: true,
            required_only: false,
        }
    }
}

impl RenderOptions {
    /// The same options with `required_only` set.
    pub fn required_only(self) -> Self {
        Self {
            required_only: true,
            ..self
        }
    }
}

/// Renders templates for the entries of one provider schema.
#[derive(Debug, Clone)]
pub struct TemplateRenderer<'a> {
    schema: &'a ProviderSchema,
    provider: String,
    instance_label: String,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a renderer.
    ///
    /// `provider` prefixes synthesized cross-references (`azurerm_x.example.id`)
    /// and `instance_label` is the second label of the template header.
    pub fn new(
        schema: &'a ProviderSchema,
        provider: impl Into<String>,
        instance_label: impl Into<String>,
    ) -> Self {
        Self {
            schema,
            provider: provider.into(),
            instance_label: instance_label.into(),
        }
    }
}

/// Leading whitespace for a nesting depth.
fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Non-blank lines of a description as `# ...` comment lines.
///
/// Returns an empty vector when descriptions are disabled or the text is blank.
fn description_comments(description: Option<&str>, enabled: bool, pad: &str) -> Vec<String> {
    if !enabled {
        return Vec::new();
    }
    description
        .map(str::trim)
        .unwrap_or_default()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{}# {}", pad, line))
        .collect()
}
