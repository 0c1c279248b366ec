//! Asset categories and their built-in defaults.
//!
//! Every category is described by one row of [`ASSET_TYPES`]: trigger
//! keywords, default size, prompt suffix and output subdirectory.
//! Classification, size defaulting and path layout all read the same row.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::Size;

/// Closed set of asset categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Icon,
    Background,
    Component,
    Illustration,
}

/// Built-in data for one asset category.
#[derive(Debug)]
pub struct AssetTypeSpec {
    pub asset_type: AssetType,
    /// Lower-case substrings that select this category.
    pub keywords: &'static [&'static str],
    pub default_size: Size,
    pub prompt_suffix: &'static str,
    pub subdir: &'static str,
}

/// Category table in classification order. The first row with a matching
/// keyword wins.
pub const ASSET_TYPES: [AssetTypeSpec; 4] = [
    AssetTypeSpec {
        asset_type: AssetType::Icon,
        keywords: &["icon", "图标", "logo"],
        default_size: Size::new(64, 64),
        prompt_suffix: "minimal icon, clean vector style, simple shapes, centered",
        subdir: "icons",
    },
    AssetTypeSpec {
        asset_type: AssetType::Background,
        keywords: &["bg", "background", "背景", "wallpaper"],
        default_size: Size::new(1920, 1080),
        prompt_suffix: "seamless pattern, high resolution, 4K quality",
        subdir: "backgrounds",
    },
    AssetTypeSpec {
        asset_type: AssetType::Component,
        keywords: &["button", "card", "panel", "按钮", "卡片", "面板", "组件"],
        default_size: Size::new(400, 200),
        prompt_suffix: "UI element, clean design, web component",
        subdir: "components",
    },
    AssetTypeSpec {
        asset_type: AssetType::Illustration,
        keywords: &["illustration", "插图", "装饰", "decoration"],
        default_size: Size::new(800, 600),
        prompt_suffix: "illustration style, decorative element",
        subdir: "illustrations",
    },
];

impl AssetType {
    /// Category used when no keyword matches.
    pub const FALLBACK: AssetType = AssetType::Component;

    /// Classify a free-text prompt by keyword.
    ///
    /// Matching is a case-insensitive substring test against each row of
    /// [`ASSET_TYPES`] in order, so a prompt mentioning both an icon and a
    /// background is an icon.
    pub fn classify(prompt: &str) -> AssetType {
        let lowered = prompt.to_lowercase();
        ASSET_TYPES
            .iter()
            .find(|spec| spec.keywords.iter().any(|k| lowered.contains(k)))
            .map(|spec| spec.asset_type)
            .unwrap_or(Self::FALLBACK)
    }

    /// The built-in table row for this category.
    pub fn spec(self) -> &'static AssetTypeSpec {
        match self {
            AssetType::Icon => &ASSET_TYPES[0],
            AssetType::Background => &ASSET_TYPES[1],
            AssetType::Component => &ASSET_TYPES[2],
            AssetType::Illustration => &ASSET_TYPES[3],
        }
    }

    /// Lower-case name, as used in config keys and file names.
    pub fn name(self) -> &'static str {
        match self {
            AssetType::Icon => "icon",
            AssetType::Background => "background",
            AssetType::Component => "component",
            AssetType::Illustration => "illustration",
        }
    }

    pub fn default_size(self) -> Size {
        self.spec().default_size
    }

    pub fn prompt_suffix(self) -> &'static str {
        self.spec().prompt_suffix
    }

    pub fn subdir(self) -> &'static str {
        self.spec().subdir
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
