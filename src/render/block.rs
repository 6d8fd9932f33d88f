//! Nested block rendering.
//!
//! Each nesting mode gets a different shape:
//!
//! - `single`/`group`: one block instance
//! - `list`/`set`: `min_items` instances, or one commented-out placeholder
//!   when the block is optional
//! - `map`: a keyed map with one example key

use super::{RenderOptions, TemplateRenderer, description_comments, indent};
use crate::schema::{Block, BlockType, NestingMode};

/// Key used for the single example entry of a `map` block.
const EXAMPLE_MAP_KEY: &str = "example_key";

impl TemplateRenderer<'_> {
    /// Render the attributes, then the block types, of `block` at `depth`,
    /// each group in ascending name order.
    pub(super) fn render_members(
        &self,
        block: &Block,
        options: RenderOptions,
        depth: usize,
    ) -> Vec<String> {
        let mut lines = Vec::new();
        for (name, attr) in &block.attributes {
            lines.extend(self.render_attribute(name, attr, options, depth));
        }
        for (name, block_type) in &block.block_types {
            lines.extend(self.render_block_type(name, block_type, options, depth));
        }
        lines
    }

    /// Render one nested block type at `depth`.
    ///
    /// Under `required_only`, blocks with `min_items == 0` produce no lines.
    pub(super) fn render_block_type(
        &self,
        name: &str,
        block_type: &BlockType,
        options: RenderOptions,
        depth: usize,
    ) -> Vec<String> {
        if options.required_only && block_type.min_items == 0 {
            return Vec::new();
        }

        let pad = indent(depth);
        let mut lines = description_comments(
            block_type.description.as_deref(),
            options.with_descriptions,
            &pad,
        );
        lines.push(format!("{}{}", pad, nesting_comment(block_type)));

        match block_type.nesting_mode {
            NestingMode::Single | NestingMode::Group => {
                lines.extend(self.render_instance(name, &block_type.block, options, depth));
            }
            NestingMode::List | NestingMode::Set => {
                lines.push(format!("{}{}", pad, repeat_comment(block_type)));
                if block_type.min_items > 0 {
                    for _ in 0..block_type.min_items {
                        lines.extend(self.render_instance(name, &block_type.block, options, depth));
                    }
                } else {
                    lines.push(format!(
                        "{}# {} {{  # optional, uncomment and fill if needed",
                        pad, name
                    ));
                    lines.push(format!("{}#   ...", pad));
                    lines.push(format!("{}# }}", pad));
                }
            }
            NestingMode::Map => {
                lines.push(format!(
                    "{}{} = {{  # key = value syntax, repeat as needed",
                    pad, name
                ));
                lines.push(format!("{}{}{} {{", pad, super::INDENT, EXAMPLE_MAP_KEY));
                lines.extend(self.render_members(&block_type.block, options, depth + 2));
                lines.push(format!("{}{}}}", pad, super::INDENT));
                lines.push(format!("{}}}", pad));
            }
        }

        lines
    }

    /// `name { ... }` with members one level deeper.
    fn render_instance(
        &self,
        name: &str,
        block: &Block,
        options: RenderOptions,
        depth: usize,
    ) -> Vec<String> {
        let pad = indent(depth);
        let mut lines = vec![format!("{}{} {{", pad, name)];
        lines.extend(self.render_members(block, options, depth + 1));
        lines.push(format!("{}}}", pad));
        lines
    }
}

/// `# nesting: <mode>, min: <n>[, max: <m>]`
fn nesting_comment(block_type: &BlockType) -> String {
    let mut comment = format!(
        "# nesting: {}, min: {}",
        block_type.nesting_mode, block_type.min_items
    );
    if let Some(max) = block_type.max_items {
        comment.push_str(&format!(", max: {}", max));
    }
    comment
}

/// `# Repeat this block as needed (min: <n>[, max: <m>])`
fn repeat_comment(block_type: &BlockType) -> String {
    let mut comment = format!("# Repeat this block as needed (min: {}", block_type.min_items);
    if let Some(max) = block_type.max_items {
        comment.push_str(&format!(", max: {}", max));
    }
    comment.push(')');
    comment
}
