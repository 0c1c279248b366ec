//! Resolution of a generation request from layered sources.
//!
//! Each concern (credential, size, output path) is resolved by trying its
//! sources in a fixed priority order; see [`TierChain`].

mod chain;
mod credential;
mod path;
mod prompt;
mod size;

pub use chain::{Resolved, TierChain};
pub use credential::{
    resolve_credential, resolve_credential_with, Credential, CredentialSource, API_KEY_VAR,
};
pub use path::{
    asset_filename, ensure_dir, numbered_path, output_root, resolve_output_path,
    resolve_output_path_at, slugify, DEFAULT_OUTPUT_ROOT,
};
pub use prompt::{compose_prompt, QUALITY_SUFFIX};
pub use size::{resolve_size, SizeSource};
