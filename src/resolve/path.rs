//! Output path resolution.
//!
//! An explicit override is used as given. Otherwise the path is
//! `<root>/<subdir>/<type>_<slug>_<YYYYMMDD_HHMMSS>.png`, where the root is
//! the project `outputDir` or `assets`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::config::ProjectConfig;
use crate::error::{AssetGenError, Result};
use crate::types::AssetType;

/// Output root when the project config does not set one.
pub const DEFAULT_OUTPUT_ROOT: &str = "assets";

/// Number of prompt characters that feed the slug.
const SLUG_SOURCE_CHARS: usize = 30;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Derive a filesystem-safe slug from the start of a prompt.
///
/// ASCII letters, digits and CJK ideographs (U+4E00..=U+9FA5) are kept;
/// everything else becomes `_`. Runs of `_` collapse to one and leading or
/// trailing `_` are trimmed.
pub fn slugify(prompt: &str) -> String {
    let mut slug = String::new();
    for c in prompt.chars().take(SLUG_SOURCE_CHARS) {
        let c = if is_slug_char(c) { c } else { '_' };
        if c == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('_').to_string()
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Output root for generated assets.
pub fn output_root(project: Option<&ProjectConfig>) -> PathBuf {
    project
        .and_then(|p| p.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT))
}

/// File name for a generated asset at a given time.
pub fn asset_filename(asset_type: AssetType, prompt: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.png",
        asset_type.name(),
        slugify(prompt),
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Resolve the destination for a generated asset, creating its directory.
pub fn resolve_output_path(
    prompt: &str,
    asset_type: AssetType,
    project: Option<&ProjectConfig>,
    cli_override: Option<&Path>,
) -> Result<PathBuf> {
    resolve_output_path_at(
        prompt,
        asset_type,
        project,
        cli_override,
        Local::now().naive_local(),
    )
}

/// Like [`resolve_output_path`], with an explicit timestamp.
pub fn resolve_output_path_at(
    prompt: &str,
    asset_type: AssetType,
    project: Option<&ProjectConfig>,
    cli_override: Option<&Path>,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(path.to_path_buf());
    }

    let dir = output_root(project).join(asset_type.subdir());
    ensure_dir(&dir)?;

    Ok(dir.join(asset_filename(asset_type, prompt, at)))
}

/// Insert `_<index>` before a path's extension: `out.png` → `out_2.png`.
pub fn numbered_path(path: &Path, index: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    path.with_file_name(name)
}

/// Create a directory and its parents. Safe to repeat.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| AssetGenError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
