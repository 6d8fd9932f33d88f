//! Configuration constants and default value functions.

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "tfscaffold.yaml";

/// Default provider name.
pub fn default_provider() -> String {
    "azurerm".to_string()
}

/// Default registry namespace that prefixes the provider name in the schema dump.
pub fn default_provider_source() -> String {
    "registry.terraform.io/hashicorp".to_string()
}

/// Default schema dump location.
pub fn default_schema_path() -> String {
    "schema/azurerm_schema.json".to_string()
}

/// Default second label of generated templates.
pub fn default_instance_label() -> String {
    "example".to_string()
}

/// Default value for boolean fields that default to true.
pub fn default_true() -> bool {
    true
}
