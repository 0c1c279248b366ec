//! Image generation and the batch loop around it.
//!
//! The generator and resizer are traits so the batch runner can be driven
//! by closures in tests and by [`GeminiClient`] and [`PngResizer`] in the CLI.

mod batch;
mod gemini;
mod resize;

use thiserror::Error;

use crate::error::Result;
use crate::types::{Model, Size};

pub use batch::{AttemptOutcome, BatchResult, BatchRunner};
pub use gemini::{GeminiClient, DEFAULT_GEMINI_URL};
pub use resize::PngResizer;

/// Why a single generation call produced no image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The request failed or the service returned an error.
    #[error("API call failed: {0}")]
    Request(String),

    /// The service answered without image data. Carries any text the model
    /// returned instead.
    #[error("no image generated")]
    NoImage { text: Option<String> },

    /// Image data was present but could not be decoded.
    #[error("invalid image data: {0}")]
    Decode(String),
}

/// Produces raw image bytes from a prompt.
pub trait ImageGenerator {
    fn generate(
        &self,
        prompt: &str,
        credential: &str,
        model: Model,
    ) -> std::result::Result<Vec<u8>, GenerateError>;
}

impl<F> ImageGenerator for F
where
    F: Fn(&str, &str, Model) -> std::result::Result<Vec<u8>, GenerateError>,
{
    fn generate(
        &self,
        prompt: &str,
        credential: &str,
        model: Model,
    ) -> std::result::Result<Vec<u8>, GenerateError> {
        self(prompt, credential, model)
    }
}

/// Scales encoded image bytes to a target size and re-encodes them.
pub trait ImageResizer {
    fn resize(&self, bytes: &[u8], size: Size) -> Result<Vec<u8>>;
}

impl<F> ImageResizer for F
where
    F: Fn(&[u8], Size) -> Result<Vec<u8>>,
{
    fn resize(&self, bytes: &[u8], size: Size) -> Result<Vec<u8>> {
        self(bytes, size)
    }
}
