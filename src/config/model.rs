//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for tfscaffold.
///
/// This struct represents the contents of `tfscaffold.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Schema settings
    // =========================================================================
    /// Provider name (default: "azurerm"). Also prefixes synthesized references.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Registry namespace of the provider (default: "registry.terraform.io/hashicorp").
    #[serde(default = "default_provider_source")]
    pub provider_source: String,

    /// Path to the `terraform providers schema -json` dump.
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    // =========================================================================
    // Rendering settings
    // =========================================================================
    /// Second label of generated templates (default: "example").
    #[serde(default = "default_instance_label")]
    pub instance_label: String,

    /// Whether templates include schema descriptions as comments.
    #[serde(default = "default_true")]
    pub with_descriptions: bool,

    /// Whether the explorer starts with data sources included in searches.
    #[serde(default)]
    pub include_data_sources: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            provider_source: default_provider_source(),
            schema_path: default_schema_path(),
            instance_label: default_instance_label(),
            with_descriptions: default_true(),
            include_data_sources: false,
        }
    }
}
