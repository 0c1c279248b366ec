//! `.env` file parsing.
//!
//! Line-oriented `KEY=value` documents. Blank lines and `#` comments are
//! skipped, lines without `=` are ignored, and one layer of matching
//! single or double quotes is stripped from values.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::output::{display_path, Printer};

/// Default env file, relative to the working directory.
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Key/value pairs parsed from an env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: HashMap<String, String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse env file content. Never fails; malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut map = Self::new();
        for line in content.lines() {
            map.parse_line(line);
        }
        map
    }

    /// Parse one line into the map. Later keys replace earlier ones.
    fn parse_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let Some((key, value)) = line.split_once('=') else {
            return;
        };

        self.vars
            .insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Strip one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Load an env file.
///
/// A missing file is an empty map. A read error part-way through prints a
/// warning and keeps the lines parsed so far.
pub fn load_env_file(path: &Path, printer: &Printer) -> EnvMap {
    let mut map = EnvMap::new();
    if !path.exists() {
        return map;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            printer.warning(
                "Warning",
                &format!("Failed to load {}: {}", display_path(path), e),
            );
            return map;
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => map.parse_line(&line),
            Err(e) => {
                printer.warning(
                    "Warning",
                    &format!("Failed to load {}: {}", display_path(path), e),
                );
                break;
            }
        }
    }

    map
}
