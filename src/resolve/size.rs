//! Target size resolution.
//!
//! Tiers: command-line `WxH`, project preset `WxH`, built-in default.
//! Malformed `WxH` strings fall through to the next tier.

use std::fmt;

use crate::config::ProjectConfig;
use crate::types::{AssetType, Size};

use super::chain::{Resolved, TierChain};

/// Where a target size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    CommandLine,
    Preset,
    BuiltinDefault,
}

impl fmt::Display for SizeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSource::CommandLine => write!(f, "--size"),
            SizeSource::Preset => write!(f, "project preset"),
            SizeSource::BuiltinDefault => write!(f, "default"),
        }
    }
}

/// Resolve the target size for an asset type.
pub fn resolve_size(
    asset_type: AssetType,
    project: Option<&ProjectConfig>,
    cli_override: Option<&str>,
) -> Resolved<SizeSource, Size> {
    let builtin = Resolved {
        source: SizeSource::BuiltinDefault,
        value: asset_type.default_size(),
    };

    TierChain::new()
        .tier(SizeSource::CommandLine, || {
            cli_override.and_then(|s| Size::parse(s).ok())
        })
        .tier(SizeSource::Preset, || {
            project
                .and_then(|p| p.preset(asset_type))
                .and_then(|preset| preset.size.as_deref())
                .and_then(|s| Size::parse(s).ok())
        })
        .resolve()
        .unwrap_or(builtin)
}
