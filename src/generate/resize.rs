//! Resize and PNG re-encoding of generated images.

use std::io::Cursor;

use image::imageops::FilterType;
use image::ImageFormat;

use crate::error::{AssetGenError, Result};
use crate::types::Size;

use super::ImageResizer;

/// Resizes with Lanczos3 and always encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngResizer;

impl ImageResizer for PngResizer {
    /// Images already at the target size are re-encoded without resampling.
    fn resize(&self, bytes: &[u8], size: Size) -> Result<Vec<u8>> {
        let img = image::load_from_memory(bytes).map_err(|e| AssetGenError::Image {
            message: format!("Failed to decode generated image: {}", e),
        })?;

        let img = if img.width() == size.width && img.height() == size.height {
            img
        } else {
            img.resize_exact(size.width, size.height, FilterType::Lanczos3)
        };

        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .map_err(|e| AssetGenError::Image {
                message: format!("Failed to encode PNG: {}", e),
            })?;

        Ok(out.into_inner())
    }
}
