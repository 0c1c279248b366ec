//! Built-in named style templates.
//!
//! A template fills in the project style section when no project config
//! file exists.

use std::fmt;

use clap::ValueEnum;

/// Named style template selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleTemplate {
    Modern,
    Flat,
    Glass,
    Neon,
    Handdrawn,
}

impl StyleTemplate {
    /// Template key, as accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            StyleTemplate::Modern => "modern",
            StyleTemplate::Flat => "flat",
            StyleTemplate::Glass => "glass",
            StyleTemplate::Neon => "neon",
            StyleTemplate::Handdrawn => "handdrawn",
        }
    }

    /// Human-readable template name.
    pub fn display_name(self) -> &'static str {
        match self {
            StyleTemplate::Modern => "Modern Minimal",
            StyleTemplate::Flat => "Flat Design",
            StyleTemplate::Glass => "Glassmorphism",
            StyleTemplate::Neon => "Neon Cyber",
            StyleTemplate::Handdrawn => "Hand-drawn",
        }
    }

    pub fn base_prompt(self) -> &'static str {
        match self {
            StyleTemplate::Modern => {
                "clean modern design, minimal style, professional, solid colors, simple shapes, no gradients, white or light background"
            }
            StyleTemplate::Flat => {
                "flat design, solid colors, no shadows, geometric shapes, bold colors, transparent background"
            }
            StyleTemplate::Glass => {
                "glassmorphism, frosted glass effect, blur background, subtle shadows, transparency, modern UI"
            }
            StyleTemplate::Neon => {
                "cyberpunk neon style, glowing edges, dark background, vibrant gradients, futuristic, holographic"
            }
            StyleTemplate::Handdrawn => {
                "hand-drawn style, organic shapes, sketch-like, warm colors, friendly appearance, paper texture"
            }
        }
    }

    /// All templates in listing order.
    pub fn all() -> &'static [StyleTemplate] {
        Self::value_variants()
    }
}

impl fmt::Display for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
