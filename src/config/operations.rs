//! Preset loading and merging.

use super::model::Preset;
use crate::error::{DeployError, Result};
use std::path::Path;

impl Preset {
    /// Load a preset from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DeployError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let preset = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), fields = preset.filled_count(), "loaded preset");
        Ok(preset)
    }

    /// Parse a preset from a YAML string. An empty document is an empty preset.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| DeployError::ConfigError(format!("failed to parse config YAML: {}", e)))
    }

    /// Layer `overrides` on top of `self`; any field set in `overrides` wins.
    pub fn overlay(self, overrides: Preset) -> Preset {
        Preset {
            region: overrides.region.or(self.region),
            account_id: overrides.account_id.or(self.account_id),
            function_name: overrides.function_name.or(self.function_name),
            repo_name: overrides.repo_name.or(self.repo_name),
            image_tag: overrides.image_tag.or(self.image_tag),
            dockerfile_path: overrides.dockerfile_path.or(self.dockerfile_path),
            role_name: overrides.role_name.or(self.role_name),
        }
    }

    /// Number of fields that will not be prompted for.
    pub fn filled_count(&self) -> usize {
        [
            &self.region,
            &self.account_id,
            &self.function_name,
            &self.repo_name,
            &self.image_tag,
            &self.dockerfile_path,
            &self.role_name,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}
