use crate::schema::{ProviderSchema, provider_key};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even if a
        // #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) const TEST_PROVIDER_KEY: &str = "registry.terraform.io/hashicorp/azurerm";

/// A small provider schema covering every nesting mode, compound types,
/// defaults, deprecated and sensitive attributes, and a data source.
pub(crate) const TEST_SCHEMA_JSON: &str = r#"{
  "format_version": "1.0",
  "provider_schemas": {
    "registry.terraform.io/hashicorp/azurerm": {
      "provider": { "version": 0, "block": {} },
      "resource_schemas": {
        "azurerm_storage_account": {
          "version": 4,
          "block": {
            "attributes": {
              "name": { "type": "string", "required": true, "description": "The name of the storage account." },
              "resource_group_name": { "type": "string", "required": true },
              "location": { "type": "string", "required": true },
              "account_tier": { "type": "string", "optional": true, "default": "Standard" },
              "enable_https_traffic_only": { "type": "bool", "optional": true, "deprecated": true },
              "tags": { "type": ["map", "string"], "optional": true },
              "primary_access_key": { "type": "string", "computed": true, "sensitive": true },
              "id": { "type": "string", "optional": true, "computed": true }
            },
            "block_types": {
              "network_rules": {
                "nesting_mode": "list",
                "min_items": 0,
                "max_items": 1,
                "block": {
                  "attributes": {
                    "default_action": { "type": "string", "required": true },
                    "ip_rules": { "type": ["set", "string"], "optional": true }
                  }
                }
              },
              "identity": {
                "nesting_mode": "single",
                "description": "Managed identity settings.",
                "block": {
                  "attributes": {
                    "type": { "type": "string", "required": true },
                    "principal_id": { "type": "string", "computed": true }
                  }
                }
              }
            }
          }
        },
        "azurerm_resource_group": {
          "block": {
            "attributes": {
              "name": { "type": "string", "required": true },
              "location": { "type": "string", "required": true }
            }
          }
        },
        "azurerm_broken": { "version": 0 }
      },
      "data_source_schemas": {
        "azurerm_storage_account": {
          "block": {
            "attributes": {
              "name": { "type": "string", "required": true }
            }
          }
        },
        "azurerm_client_config": {
          "block": {
            "attributes": {
              "tenant_id": { "type": "string", "computed": true }
            }
          }
        }
      }
    }
  }
}"#;

pub(crate) fn test_schema() -> ProviderSchema {
    let key = provider_key("registry.terraform.io/hashicorp", "azurerm");
    assert_eq!(key, TEST_PROVIDER_KEY);
    ProviderSchema::from_json(TEST_SCHEMA_JSON, &key).unwrap()
}
