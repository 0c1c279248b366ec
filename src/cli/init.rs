//! Init command implementation.
//!
//! Writes a starter project style config from a built-in template.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{ProjectConfig, TypePreset, DEFAULT_CONFIG_FILENAME};
use crate::error::{AssetGenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::resolve::{ensure_dir, DEFAULT_OUTPUT_ROOT};
use crate::types::{StyleTemplate, ASSET_TYPES};

/// Initialize a project style config
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Config file to create (.yaml/.yml writes YAML)
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Style template to start from
    #[arg(long, short, value_enum, default_value_t = StyleTemplate::Modern)]
    pub style: StyleTemplate,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    if args.config.exists() && !args.force {
        return Err(AssetGenError::Init {
            message: format!("{} already exists", display_path(&args.config)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = starter_config(args.style);
    let content = serialize(&config, &args.config)?;

    if let Some(parent) = args.config.parent() {
        ensure_dir(parent)?;
    }
    fs::write(&args.config, content).map_err(|e| AssetGenError::Io {
        path: args.config.clone(),
        message: format!("Failed to write project config: {}", e),
    })?;

    printer.info("Style", args.style.display_name());
    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&args.config),
            plural(config.type_presets.len(), "type preset", "type presets")
        ),
    );

    Ok(())
}

/// Starter config: default output root, the template's style and a size
/// preset for every asset type. Never carries an API key.
pub fn starter_config(template: StyleTemplate) -> ProjectConfig {
    let type_presets = ASSET_TYPES
        .iter()
        .map(|spec| {
            (
                spec.asset_type.name().to_string(),
                TypePreset {
                    prompt_suffix: None,
                    size: Some(spec.default_size.to_string()),
                },
            )
        })
        .collect();

    ProjectConfig {
        output_dir: Some(PathBuf::from(DEFAULT_OUTPUT_ROOT)),
        type_presets,
        ..ProjectConfig::from_template(template)
    }
}

fn serialize(config: &ProjectConfig, path: &Path) -> Result<String> {
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let content = if yaml {
        serde_yaml::to_string(config).map_err(|e| e.to_string())
    } else {
        serde_json::to_string_pretty(config)
            .map(|s| s + "\n")
            .map_err(|e| e.to_string())
    };

    content.map_err(|message| AssetGenError::Init {
        message: format!("Failed to serialize project config: {}", message),
        help: None,
    })
}
