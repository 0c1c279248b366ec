//! API key resolution.
//!
//! Sources in priority order: command line, env file, project config,
//! process environment. Empty values count as absent, so an empty
//! `GEMINI_API_KEY=` line in the env file falls through to the next source.

use std::fmt;
use std::path::Path;

use crate::config::{load_env_file, ProjectConfig};
use crate::output::{display_path, Printer};

use super::chain::{Resolved, TierChain};

/// Name of the credential key in env files and the process environment.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Where an API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    CommandLine,
    /// The env file at this path.
    EnvFile(String),
    ProjectConfig,
    Environment,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::CommandLine => write!(f, "command line argument"),
            CredentialSource::EnvFile(path) => write!(f, "{}", path),
            CredentialSource::ProjectConfig => write!(f, "project config"),
            CredentialSource::Environment => write!(f, "environment variable {}", API_KEY_VAR),
        }
    }
}

pub type Credential = Resolved<CredentialSource, String>;

/// Resolve the API key, reading the process environment as the last tier.
pub fn resolve_credential(
    cli_value: Option<&str>,
    project: Option<&ProjectConfig>,
    env_file: &Path,
    printer: &Printer,
) -> Option<Credential> {
    resolve_credential_with(cli_value, project, env_file, printer, || {
        std::env::var(API_KEY_VAR).ok()
    })
}

/// Resolve the API key with an explicit process-environment lookup.
pub fn resolve_credential_with<'a>(
    cli_value: Option<&'a str>,
    project: Option<&'a ProjectConfig>,
    env_file: &'a Path,
    printer: &'a Printer,
    process_env: impl FnOnce() -> Option<String> + 'a,
) -> Option<Credential> {
    TierChain::new()
        .tier(CredentialSource::CommandLine, || {
            non_empty(cli_value.map(str::to_string))
        })
        .tier(CredentialSource::EnvFile(display_path(env_file)), || {
            let env = load_env_file(env_file, printer);
            non_empty(env.get(API_KEY_VAR).map(str::to_string))
        })
        .tier(CredentialSource::ProjectConfig, || {
            non_empty(project.and_then(|p| p.api_key.clone()))
        })
        .tier(CredentialSource::Environment, || non_empty(process_env()))
        .resolve()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
