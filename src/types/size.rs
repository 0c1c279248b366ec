//! Pixel dimensions and the `WxH` string format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Why a `WxH` string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("expected 'WxH', got '{0}'")]
    Format(String),
    #[error("invalid {axis} '{value}': expected a positive integer")]
    Dimension { axis: &'static str, value: String },
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WxH` string such as "64x64" or "1920X1080".
    ///
    /// The separator is case-insensitive and must appear exactly once. Both
    /// parts must be positive integers; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, SizeParseError> {
        let lowered = s.to_lowercase();
        let parts: Vec<&str> = lowered.split('x').collect();
        if parts.len() != 2 {
            return Err(SizeParseError::Format(s.to_string()));
        }

        let width = parse_dimension("width", parts[0])?;
        let height = parse_dimension("height", parts[1])?;
        Ok(Self { width, height })
    }
}

fn parse_dimension(axis: &'static str, part: &str) -> Result<u32, SizeParseError> {
    match part.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SizeParseError::Dimension {
            axis,
            value: part.trim().to_string(),
        }),
    }
}

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
