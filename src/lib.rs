//! assetgen - AI image asset generator for web projects
//!
//! Turns a short text prompt into a resized PNG asset by composing a
//! style-aware prompt, calling the Gemini image API and writing the result
//! into a per-type output directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod request;
pub mod resolve;
pub mod types;

pub use config::{load_env_file, EnvMap, ProjectConfig, StyleSection, TypePreset};
pub use error::{AssetGenError, Result};
pub use generate::{
    AttemptOutcome, BatchResult, BatchRunner, GeminiClient, GenerateError, ImageGenerator,
    ImageResizer, PngResizer,
};
pub use request::{Destination, GenerationRequest, RequestOptions};
pub use resolve::{compose_prompt, resolve_credential, resolve_size, slugify, Resolved, TierChain};
pub use types::{AssetType, Model, Size, StyleTemplate};
