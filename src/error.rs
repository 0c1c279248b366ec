use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetGenError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(assetgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid project config {path}: {message}")]
    #[diagnostic(code(assetgen::config))]
    Config {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    /// No credential tier produced a key.
    #[error("GEMINI_API_KEY not found")]
    #[diagnostic(
        code(assetgen::credential),
        help(
            "Set it using one of (highest priority first):
  1. Command line: --api-key YOUR_KEY
  2. Project env file (.env): GEMINI_API_KEY=YOUR_KEY
  3. Project config (.asset-style.json): \"apiKey\": \"YOUR_KEY\"
  4. Environment variable: export GEMINI_API_KEY=YOUR_KEY"
        )
    )]
    CredentialMissing,

    #[error("Generation error: {message}")]
    #[diagnostic(code(assetgen::generate))]
    Generation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Image error: {message}")]
    #[diagnostic(code(assetgen::image))]
    Image { message: String },

    #[error("{message}")]
    #[diagnostic(code(assetgen::init))]
    Init {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AssetGenError>;
