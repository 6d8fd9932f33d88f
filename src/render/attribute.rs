//! Leaf attribute rendering.

use super::placeholder::placeholder;
use super::types::resolve_type;
use super::{RenderOptions, TemplateRenderer, description_comments, indent};
use crate::schema::Attribute;
use std::fmt;

/// Requirement tier of an attribute.
///
/// Schemas may set several of `required`/`optional`/`computed` at once; the
/// first set flag in that order wins, and an attribute with none set is
/// treated as computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    Computed,
}

impl Requirement {
    pub fn of(attr: &Attribute) -> Self {
        match (attr.required, attr.optional, attr.computed) {
            (true, _, _) => Requirement::Required,
            (false, true, _) => Requirement::Optional,
            (false, false, true) => Requirement::Computed,
            // No flag set.
            (false, false, false) => Requirement::Computed,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Required => write!(f, "required"),
            Requirement::Optional => write!(f, "optional"),
            Requirement::Computed => write!(f, "computed"),
        }
    }
}

impl TemplateRenderer<'_> {
    /// Render one attribute at `depth`.
    ///
    /// Deprecated attributes, and non-required ones under `required_only`,
    /// produce no lines.
    pub(super) fn render_attribute(
        &self,
        name: &str,
        attr: &Attribute,
        options: RenderOptions,
        depth: usize,
    ) -> Vec<String> {
        if attr.deprecated {
            return Vec::new();
        }

        let requirement = Requirement::of(attr);
        if options.required_only && requirement != Requirement::Required {
            return Vec::new();
        }

        let pad = indent(depth);
        let signature = resolve_type(attr.type_expr.as_ref());
        let annotation = annotation(requirement, &signature, attr);
        let value = placeholder(&signature, name, attr.default.as_ref(), &self.provider);
        let assignment = format!("{}{} = {}", pad, name, value);

        let mut lines = description_comments(
            attr.description.as_deref(),
            options.with_descriptions,
            &pad,
        );
        if lines.is_empty() {
            return vec![format!("{}  {}", assignment, annotation)];
        }

        lines.push(format!("{}{}", pad, annotation));
        lines.push(assignment);
        lines
    }
}

/// `# <tier>, type: <sig>[, sensitive][, default: <json>]`
fn annotation(requirement: Requirement, signature: &str, attr: &Attribute) -> String {
    let mut comment = format!("# {}, type: {}", requirement, signature);
    if attr.sensitive {
        comment.push_str(", sensitive");
    }
    if let Some(default) = &attr.default {
        comment.push_str(&format!(", default: {}", default));
    }
    comment
}
