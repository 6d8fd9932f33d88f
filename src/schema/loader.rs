//! Loading a provider schema from a `terraform providers schema -json` dump.

use super::model::ProviderSchema;
use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level shape of the schema dump. Only `provider_schemas` is read.
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    provider_schemas: BTreeMap<String, ProviderSchema>,
}

/// Build the `provider_schemas` key for a provider, e.g.
/// `registry.terraform.io/hashicorp/azurerm`.
pub fn provider_key(source: &str, provider: &str) -> String {
    format!("{}/{}", source.trim_end_matches('/'), provider)
}

impl ProviderSchema {
    /// Load the schema for `key` from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Err(ScaffoldError::Io)` - The file is missing or unreadable
    /// * `Err(ScaffoldError::MalformedSchema)` - The JSON does not parse, or the
    ///   provider has neither resources nor data sources
    /// * `Err(ScaffoldError::NotFound)` - The provider key is absent
    pub fn load<P: AsRef<Path>>(path: P, key: &str) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScaffoldError::Io(format!(
                "schema file not found at '{}'.\n\n\
                 Generate it with `terraform providers schema -json > {}`.",
                path.display(),
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Io(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read schema file");
        Self::from_json(&content, key)
    }

    /// Parse a schema dump and extract the provider stored under `key`.
    pub fn from_json(json: &str, key: &str) -> Result<Self> {
        let mut document: SchemaDocument = serde_json::from_str(json)
            .map_err(|e| ScaffoldError::MalformedSchema(format!("invalid schema JSON: {}", e)))?;

        let schema = document.provider_schemas.remove(key).ok_or_else(|| {
            ScaffoldError::NotFound(format!(
                "no schema found for provider '{}' in the JSON file",
                key
            ))
        })?;

        if schema.is_empty() {
            return Err(ScaffoldError::MalformedSchema(format!(
                "provider '{}' has no resources or data sources",
                key
            )));
        }

        tracing::info!(
            provider = key,
            resources = schema.resources.len(),
            data_sources = schema.data_sources.len(),
            "loaded provider schema"
        );
        Ok(schema)
    }
}
