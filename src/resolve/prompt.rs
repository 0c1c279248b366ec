//! Generation prompt composition.

use crate::config::ProjectConfig;
use crate::types::AssetType;

/// Always the last fragment of a composed prompt.
pub const QUALITY_SUFFIX: &str =
    "high quality, professional design, PNG format with transparency where appropriate";

const SEPARATOR: &str = ", ";

/// Compose the full generation prompt.
///
/// Fragments, in order: the user prompt, the asset type's built-in suffix,
/// the project base style prompt, the project preset suffix for this asset
/// type, and [`QUALITY_SUFFIX`]. Empty fragments are dropped; the rest are
/// joined with ", ".
///
/// Project fragments are only used when the config has a `style` section;
/// a preset suffix alone is ignored.
pub fn compose_prompt(
    user_prompt: &str,
    asset_type: AssetType,
    project: Option<&ProjectConfig>,
) -> String {
    let styled = project.filter(|p| p.style.is_some());
    let base_prompt = styled.and_then(ProjectConfig::base_prompt);
    let preset_suffix = styled
        .and_then(|p| p.preset(asset_type))
        .and_then(|preset| preset.prompt_suffix.as_deref());

    [
        Some(user_prompt),
        Some(asset_type.prompt_suffix()),
        base_prompt,
        preset_suffix,
        Some(QUALITY_SUFFIX),
    ]
    .into_iter()
    .flatten()
    .filter(|fragment| !fragment.is_empty())
    .collect::<Vec<_>>()
    .join(SEPARATOR)
}
