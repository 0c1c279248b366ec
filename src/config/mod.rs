//! Configuration sources: the project style config and the env file.

mod env_file;
mod project;

pub use env_file::{load_env_file, EnvMap, DEFAULT_ENV_FILENAME};
pub use project::{ProjectConfig, StyleSection, TypePreset, DEFAULT_CONFIG_FILENAME};
