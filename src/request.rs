//! Assembly of a fully resolved generation request.
//!
//! Combines command-line options, the project config, the env file, the
//! process environment and built-in defaults into one [`GenerationRequest`].

use std::path::PathBuf;

use crate::config::ProjectConfig;
use crate::error::{AssetGenError, Result};
use crate::output::{display_path, preview, Printer};
use crate::resolve::{
    compose_prompt, ensure_dir, numbered_path, resolve_credential_with, resolve_output_path,
    resolve_size, API_KEY_VAR,
};
use crate::types::{AssetType, Model, Size, StyleTemplate};

/// Characters of the composed prompt shown in status output.
const PROMPT_PREVIEW_CHARS: usize = 100;

/// Raw inputs for request resolution, as given on the command line.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub prompt: String,
    pub asset_type: Option<AssetType>,
    pub size: Option<String>,
    pub output: Option<PathBuf>,
    pub config: PathBuf,
    pub env_file: PathBuf,
    pub api_key: Option<String>,
    pub model: Model,
    pub style: Option<StyleTemplate>,
}

/// Where generated images are written.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// An explicit output path.
    Override(PathBuf),
    /// A path derived from the prompt, asset type and project output root.
    Derived {
        prompt: String,
        asset_type: AssetType,
        project: Option<ProjectConfig>,
    },
}

impl Destination {
    /// Output path for attempt `index` (1-based) of a batch of `count`.
    ///
    /// Single images use the resolved path unchanged. In a batch, an override
    /// gets `_<index>` spliced before its extension and a derived path is
    /// recomputed from the prompt suffixed with `_<index>`. Directories on
    /// the returned path exist.
    pub fn path_for(&self, index: u32, count: u32) -> Result<PathBuf> {
        match self {
            Destination::Override(path) => {
                let path = if count > 1 {
                    numbered_path(path, index)
                } else {
                    path.clone()
                };
                if let Some(parent) = path.parent() {
                    ensure_dir(parent)?;
                }
                Ok(path)
            }
            Destination::Derived {
                prompt,
                asset_type,
                project,
            } => {
                let prompt = if count > 1 {
                    format!("{}_{}", prompt, index)
                } else {
                    prompt.clone()
                };
                resolve_output_path(&prompt, *asset_type, project.as_ref(), None)
            }
        }
    }
}

/// A fully resolved generation request. Shared read-only by every attempt
/// of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub asset_type: AssetType,
    /// Composed prompt sent to the model.
    pub prompt: String,
    pub credential: String,
    pub model: Model,
    pub size: Size,
    pub destination: Destination,
}

impl GenerationRequest {
    /// Resolve a request, reporting each decision on `printer`.
    ///
    /// Fails before any output is written if the project config is malformed
    /// or no API key is found.
    pub fn resolve(options: &RequestOptions, printer: &Printer) -> Result<Self> {
        Self::resolve_with(options, printer, || std::env::var(API_KEY_VAR).ok())
    }

    /// Like [`GenerationRequest::resolve`], with an explicit process-environment lookup.
    pub fn resolve_with<'a>(
        options: &'a RequestOptions,
        printer: &'a Printer,
        process_env: impl FnOnce() -> Option<String> + 'a,
    ) -> Result<Self> {
        let project = ProjectConfig::load(&options.config)?;
        if project.is_some() {
            printer.info("Config", &display_path(&options.config));
        }

        let credential = resolve_credential_with(
            options.api_key.as_deref(),
            project.as_ref(),
            &options.env_file,
            printer,
            process_env,
        )
        .ok_or(AssetGenError::CredentialMissing)?;
        printer.info("API key", &format!("from {}", credential.source));

        let project = match (project, options.style) {
            (None, Some(template)) => {
                printer.info("Style", template.display_name());
                Some(ProjectConfig::from_template(template))
            }
            (project, _) => project,
        };

        let asset_type = match options.asset_type {
            Some(asset_type) => asset_type,
            None => {
                let detected = AssetType::classify(&options.prompt);
                printer.info("Detected", &format!("{} asset", detected));
                detected
            }
        };

        let prompt = compose_prompt(&options.prompt, asset_type, project.as_ref());
        printer.info("Prompt", &printer.dim(&preview(&prompt, PROMPT_PREVIEW_CHARS)));

        let size = resolve_size(asset_type, project.as_ref(), options.size.as_deref());
        printer.info("Size", &format!("{} ({})", size.value, size.source));

        let destination = match &options.output {
            Some(path) => Destination::Override(path.clone()),
            None => Destination::Derived {
                prompt: options.prompt.clone(),
                asset_type,
                project,
            },
        };

        Ok(Self {
            asset_type,
            prompt,
            credential: credential.value,
            model: options.model,
            size: size.value,
            destination,
        })
    }
}
