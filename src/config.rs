//! Configuration file support for sbom-ci.
//!
//! Provides YAML-based configuration through `sbom-ci.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags always take precedence over values loaded here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::sbom_processing::services::{FilePattern, SERVICE_PLACEHOLDER};
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-ci.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub merge: Option<MergeConfig>,
    pub submit: Option<SubmitConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for `sbom-ci merge`.
#[derive(Debug, Deserialize, Default)]
pub struct MergeConfig {
    pub input_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
    pub document_name: Option<String>,
    pub namespace_base: Option<String>,
    pub creators: Option<Vec<String>>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for `sbom-ci submit`.
#[derive(Debug, Deserialize, Default)]
pub struct SubmitConfig {
    pub source_location_template: Option<String>,
    pub detector_url: Option<String>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    for warning in unknown_field_warnings(&config) {
        eprintln!("{}", warning);
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(merge) = &config.merge {
        if let Some(pattern) = &merge.pattern {
            FilePattern::new(pattern).context(
                "Invalid config: merge.pattern is not a valid file name pattern.\n\n\
                 💡 Hint: Use a file name pattern such as \"*.spdx.json\".",
            )?;
        }

        if let Some(creators) = &merge.creators {
            for (i, creator) in creators.iter().enumerate() {
                if creator.trim().is_empty() {
                    bail!(
                        "Invalid config: merge.creators[{}] must not be empty.\n\n\
                         💡 Hint: Use SPDX creator syntax, e.g. \"Organization: ACME\".",
                        i
                    );
                }
            }
        }

        if matches!(&merge.document_name, Some(name) if name.trim().is_empty()) {
            bail!("Invalid config: merge.document_name must not be empty.");
        }
    }

    if let Some(template) = config
        .submit
        .as_ref()
        .and_then(|s| s.source_location_template.as_ref())
    {
        if !template.contains(SERVICE_PLACEHOLDER) {
            bail!(
                "Invalid config: submit.source_location_template must contain {}.\n\n\
                 💡 Hint: e.g. \"services/{}/Dockerfile\".",
                SERVICE_PLACEHOLDER,
                SERVICE_PLACEHOLDER
            );
        }
    }

    Ok(())
}

/// Warnings for unknown fields at the top level and inside each section.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let top_level = config.unknown_fields.keys().map(|k| k.to_string());
    let merge = config
        .merge
        .iter()
        .flat_map(|m| m.unknown_fields.keys().map(|k| format!("merge.{}", k)));
    let submit = config
        .submit
        .iter()
        .flat_map(|s| s.unknown_fields.keys().map(|k| format!("submit.{}", k)));

    let mut keys: Vec<String> = top_level.chain(merge).chain(submit).collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
        .collect()
}
