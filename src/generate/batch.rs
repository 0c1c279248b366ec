//! Sequential batch generation with partial-failure tolerance.
//!
//! Attempts run one after another. A failed attempt is recorded and the
//! batch continues; nothing is retried.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetGenError, Result};
use crate::output::{display_path, Printer};
use crate::request::GenerationRequest;

use super::{GenerateError, ImageGenerator, ImageResizer};

/// Outcome of one attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Generated { index: u32, path: PathBuf },
    Failed { index: u32, reason: String },
}

impl AttemptOutcome {
    pub fn index(&self) -> u32 {
        match self {
            AttemptOutcome::Generated { index, .. } | AttemptOutcome::Failed { index, .. } => {
                *index
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            AttemptOutcome::Generated { path, .. } => Some(path),
            AttemptOutcome::Failed { .. } => None,
        }
    }
}

/// Ordered outcomes of every attempt in a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub outcomes: Vec<AttemptOutcome>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn success_count(&self) -> usize {
        self.paths().count()
    }

    /// Paths of generated images, in attempt order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(AttemptOutcome::path)
    }

    /// A batch succeeds when at least one image was written.
    pub fn is_success(&self) -> bool {
        self.success_count() > 0
    }
}

/// Runs generate → resize → write for each attempt of a batch.
pub struct BatchRunner<'a, G, R> {
    generator: &'a G,
    resizer: &'a R,
    printer: &'a Printer,
}

impl<'a, G: ImageGenerator, R: ImageResizer> BatchRunner<'a, G, R> {
    pub fn new(generator: &'a G, resizer: &'a R, printer: &'a Printer) -> Self {
        Self {
            generator,
            resizer,
            printer,
        }
    }

    /// Run `count` attempts of `request`.
    pub fn run(&self, request: &GenerationRequest, count: u32) -> BatchResult {
        let mut result = BatchResult::default();

        for index in 1..=count {
            self.printer
                .status("Generating", &format!("image {}/{}", index, count));

            let outcome = match self.attempt(request, index, count) {
                Ok(path) => {
                    self.printer
                        .success("Generated", &self.printer.cyan(&display_path(&path)));
                    AttemptOutcome::Generated { index, path }
                }
                Err(reason) => {
                    self.printer
                        .error("Failed", &format!("image {}: {}", index, reason));
                    AttemptOutcome::Failed { index, reason }
                }
            };
            result.outcomes.push(outcome);
        }

        result
    }

    fn attempt(
        &self,
        request: &GenerationRequest,
        index: u32,
        count: u32,
    ) -> std::result::Result<PathBuf, String> {
        let bytes = self
            .generator
            .generate(&request.prompt, &request.credential, request.model)
            .map_err(|e| {
                self.report_generate_error(&e);
                e.to_string()
            })?;

        let bytes = self
            .resizer
            .resize(&bytes, request.size)
            .map_err(|e| e.to_string())?;

        let path = request
            .destination
            .path_for(index, count)
            .map_err(|e| e.to_string())?;

        write_image(&path, &bytes).map_err(|e| e.to_string())?;
        Ok(path)
    }

    fn report_generate_error(&self, error: &GenerateError) {
        match error {
            GenerateError::NoImage { text: Some(text) } => {
                self.printer
                    .warning("Warning", &format!("No image generated. Response: {}", text));
            }
            GenerateError::NoImage { text: None } => {
                self.printer.warning("Warning", "No image generated");
            }
            GenerateError::Request(_) | GenerateError::Decode(_) => {}
        }
    }
}

fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| AssetGenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::request::Destination;
    use crate::types::{AssetType, Model, Size};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use tempfile::tempdir;

    fn request(destination: Destination) -> GenerationRequest {
        GenerationRequest {
            asset_type: AssetType::Icon,
            prompt: "settings icon".to_string(),
            credential: "key".to_string(),
            model: Model::default(),
            size: Size::new(4, 4),
            destination,
        }
    }

    /// Generator that fails on the listed attempts.
    fn flaky(fail_on: &'static [u32]) -> impl Fn(&str, &str, Model) -> std::result::Result<Vec<u8>, GenerateError> {
        let calls = Cell::new(0u32);
        move |_: &str, _: &str, _: Model| {
            calls.set(calls.get() + 1);
            if fail_on.contains(&calls.get()) {
                Err(GenerateError::Request("HTTP 500".to_string()))
            } else {
                Ok(format!("image-{}", calls.get()).into_bytes())
            }
        }
    }

    fn passthrough(bytes: &[u8], _: Size) -> Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }

    #[test]
    fn test_partial_failure_continues() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[2]);
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            3,
        );

        assert_eq!(result.total(), 3);
        assert_eq!(result.success_count(), 2);
        assert!(result.is_success());
        assert!(matches!(result.outcomes[1], AttemptOutcome::Failed { index: 2, .. }));

        let paths: Vec<&Path> = result.paths().collect();
        assert_eq!(
            paths,
            vec![
                dir.path().join("out_1.png").as_path(),
                dir.path().join("out_3.png").as_path()
            ]
        );
        assert_eq!(fs::read(dir.path().join("out_3.png")).unwrap(), b"image-3");
        assert!(!dir.path().join("out_2.png").exists());
    }

    #[test]
    fn test_override_numbered_in_batch() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[]);
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            2,
        );

        assert_eq!(result.success_count(), 2);
        assert!(dir.path().join("out_1.png").exists());
        assert!(dir.path().join("out_2.png").exists());
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_single_image_uses_override_verbatim() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[]);
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            1,
        );

        assert_eq!(result.paths().next(), Some(dir.path().join("out.png").as_path()));
    }

    #[test]
    fn test_all_failed_is_not_success() {
        let dir = tempdir().unwrap();
        let generator = |_: &str, _: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            Err(GenerateError::NoImage {
                text: Some("refused".to_string()),
            })
        };
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            2,
        );

        assert_eq!(result.success_count(), 0);
        assert!(!result.is_success());
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn test_failed_attempt_creates_no_directories() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[1]);
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("nested").join("out.png"))),
            1,
        );

        assert!(!result.is_success());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_resize_failure_recorded_as_failed_attempt() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[]);
        let resizer = |_: &[u8], _: Size| -> Result<Vec<u8>> {
            Err(AssetGenError::Image {
                message: "bad data".to_string(),
            })
        };
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &resizer, &printer);

        let result = runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            1,
        );

        assert_eq!(
            result.outcomes,
            vec![AttemptOutcome::Failed {
                index: 1,
                reason: "Image error: bad data".to_string()
            }]
        );
    }

    #[test]
    fn test_resizer_receives_target_size() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[]);
        let seen = Cell::new(None);
        let resizer = |bytes: &[u8], size: Size| -> Result<Vec<u8>> {
            seen.set(Some(size));
            Ok(bytes.to_vec())
        };
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &resizer, &printer);

        runner.run(
            &request(Destination::Override(dir.path().join("out.png"))),
            1,
        );

        assert_eq!(seen.get(), Some(Size::new(4, 4)));
    }

    #[test]
    fn test_derived_paths_land_in_type_subdir() {
        let dir = tempdir().unwrap();
        let generator = flaky(&[]);
        let printer = Printer::new();
        let runner = BatchRunner::new(&generator, &passthrough, &printer);
        let destination = Destination::Derived {
            prompt: "settings icon".to_string(),
            asset_type: AssetType::Icon,
            project: Some(ProjectConfig {
                output_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            }),
        };

        let result = runner.run(&request(destination), 2);

        assert_eq!(result.success_count(), 2);
        let names: Vec<String> = result
            .paths()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names[0].starts_with("icon_settings_icon_1_"));
        assert!(names[1].starts_with("icon_settings_icon_2_"));
        for path in result.paths() {
            assert_eq!(path.parent().unwrap(), dir.path().join("icons"));
            assert!(path.exists());
        }
    }
}
