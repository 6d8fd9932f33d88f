//! Complete templates for one schema entry.

use super::{RenderOptions, TemplateRenderer};
use crate::error::{Result, ScaffoldError};

impl TemplateRenderer<'_> {
    /// Render the full template for the entry called `name`.
    ///
    /// The output starts with `resource "<name>" "<label>" {` (or `data ...`
    /// for data sources), contains the root members at depth 1, and ends with
    /// `}`. Lines are joined with `\n` and there is no trailing newline.
    ///
    /// # Returns
    ///
    /// * `Err(ScaffoldError::NotFound)` - No resource or data source is called `name`
    /// * `Err(ScaffoldError::MalformedSchema)` - The entry has no root block
    pub fn render(&self, name: &str, options: RenderOptions) -> Result<String> {
        let (kind, entry) = self
            .schema
            .lookup(name)
            .ok_or_else(|| ScaffoldError::NotFound(format!("no schema found for '{}'", name)))?;

        let block = entry.block.as_ref().ok_or_else(|| {
            ScaffoldError::MalformedSchema(format!("{} '{}' has no block definition", kind, name))
        })?;

        let mut lines = vec![format!(
            r#"{} "{}" "{}" {{"#,
            kind.keyword(),
            name,
            self.instance_label
        )];
        lines.extend(self.render_members(block, options, 1));
        lines.push("}".to_string());

        Ok(lines.join("\n"))
    }
}
