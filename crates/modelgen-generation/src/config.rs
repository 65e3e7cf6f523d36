//! Generation configuration
//!
//! Layered from an optional TOML file and `MODELGEN_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerationError, Result};
use crate::models::EmptyFieldsPolicy;
use crate::templates::TemplateRoot;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MODELGEN";

/// Settings shared by every model built from them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Template root override; the bundled templates are used when unset
    pub template_dir: Option<PathBuf>,
    /// What to render for a model without fields
    pub empty_fields: EmptyFieldsPolicy,
    /// Fail on template variables the bindings do not provide
    pub strict_mode: bool,
}

impl GenerationConfig {
    /// Template root selected by this configuration
    pub fn template_root(&self) -> TemplateRoot {
        match &self.template_dir {
            Some(dir) => TemplateRoot::new(dir),
            None => TemplateRoot::bundled(),
        }
    }

    /// Check that the configuration can be used
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.template_dir {
            if !dir.is_dir() {
                return Err(GenerationError::ConfigurationError(format!(
                    "Template directory does not exist: {}",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

/// Loads and saves [`GenerationConfig`]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader reading `modelgen.toml` from the user config directory
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Loader reading a specific file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Path the loader reads from
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modelgen")
            .join("modelgen.toml")
    }

    /// Load and validate the configuration
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(&self) -> Result<GenerationConfig> {
        debug!("Loading generation config from {}", self.config_path.display());

        let config = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix))
            .build()?;

        let generation_config: GenerationConfig = config.try_deserialize()?;
        generation_config.validate()?;
        Ok(generation_config)
    }

    /// Write the configuration as TOML
    pub fn save(&self, config: &GenerationConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
