//! Project style config (`.asset-style.json`) parsing.
//!
//! The project config carries an optional API key, an output root, a base
//! style prompt and per-asset-type presets. JSON by default; files ending in
//! `.yaml` or `.yml` are read as YAML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetGenError, Result};
use crate::types::{AssetType, StyleTemplate};

/// Default project config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = ".asset-style.json";

/// Project style config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// API key for the generation service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Root directory for generated assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Project-wide style section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleSection>,

    /// Per-asset-type presets keyed by asset type name ("icon", ...).
    /// Keys that are not asset type names are ignored.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub type_presets: BTreeMap<String, TypePreset>,
}

/// The `style` section of a project config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Prompt fragment appended to every generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_prompt: Option<String>,
}

/// Overrides for one asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypePreset {
    /// Extra prompt fragment for this asset type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_suffix: Option<String>,

    /// Target size as a `WxH` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ProjectConfig {
    /// Load a project config if the file exists.
    ///
    /// Returns `Ok(None)` when there is no file. A file that exists but does
    /// not parse is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| AssetGenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read project config: {}", e),
        })?;

        Self::parse(&content, path).map(Some)
    }

    /// Parse config content. The path selects the format and labels errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parsed = if is_yaml(path) {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| AssetGenError::Config {
            path: path.to_path_buf(),
            message,
            help: Some(format!("Check {} syntax", display_name(path))),
        })
    }

    /// Config holding only the style section of a built-in template.
    pub fn from_template(template: StyleTemplate) -> Self {
        Self {
            style: Some(StyleSection {
                name: Some(template.display_name().to_string()),
                base_prompt: Some(template.base_prompt().to_string()),
            }),
            ..Default::default()
        }
    }

    /// Base style prompt, if a style section provides one.
    pub fn base_prompt(&self) -> Option<&str> {
        self.style.as_ref()?.base_prompt.as_deref()
    }

    /// Preset for an asset type, if configured.
    pub fn preset(&self, asset_type: AssetType) -> Option<&TypePreset> {
        self.type_presets.get(asset_type.name())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
