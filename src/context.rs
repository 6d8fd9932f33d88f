//! Run context resolution for tfscaffold.
//!
//! Every command starts by resolving the effective configuration (config file
//! plus command-line overrides) and loading the provider schema it points at.
//! Relative paths are resolved against the working directory.

use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::render::{RenderOptions, TemplateRenderer};
use crate::schema::ProviderSchema;
use std::env;
use std::path::{Path, PathBuf};

/// Effective configuration and the loaded provider schema.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: Config,

    /// Absolute path of the schema file that was loaded.
    pub schema_path: PathBuf,

    pub schema: ProviderSchema,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ScaffoldError::Io(format!("failed to get current working directory: {}", e))
        })?;
        Self::resolve_in(global, &cwd)
    }

    /// Resolve the context relative to `dir`.
    pub fn resolve_in(global: &GlobalArgs, dir: &Path) -> Result<Self> {
        let config = effective_config(global, dir)?;

        let schema_path = global
            .schema_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.schema_path));
        let schema_path = if schema_path.is_absolute() {
            schema_path
        } else {
            dir.join(schema_path)
        };

        let schema = ProviderSchema::load(&schema_path, &config.provider_key())?;

        Ok(Self {
            config,
            schema_path,
            schema,
        })
    }

    /// A renderer for the loaded schema using the configured provider and label.
    pub fn renderer(&self) -> TemplateRenderer<'_> {
        TemplateRenderer::new(
            &self.schema,
            self.config.provider.as_str(),
            self.config.instance_label.as_str(),
        )
    }

    /// Baseline render options from the config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            with_descriptions: self.config.with_descriptions,
            required_only: false,
        }
    }
}

/// Config file values with command-line overrides applied and re-validated.
fn effective_config(global: &GlobalArgs, dir: &Path) -> Result<Config> {
    let mut config = Config::discover(global.config.as_deref(), dir)?;
    if let Some(provider) = &global.provider {
        config.provider = provider.clone();
    }
    config.validate()?;
    Ok(config)
}
