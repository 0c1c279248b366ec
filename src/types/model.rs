//! Image generation models.

use std::fmt;

use clap::ValueEnum;

/// Supported Gemini image models. The first variant is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Model {
    #[default]
    #[value(name = "gemini-2.5-flash-image")]
    Gemini25FlashImage,
    #[value(name = "gemini-3-pro-image-preview")]
    Gemini3ProImagePreview,
}

impl Model {
    /// Model identifier as used in the API path.
    pub fn id(self) -> &'static str {
        match self {
            Model::Gemini25FlashImage => "gemini-2.5-flash-image",
            Model::Gemini3ProImagePreview => "gemini-3-pro-image-preview",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
