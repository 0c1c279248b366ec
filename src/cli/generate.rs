//! Generate command implementation.
//!
//! Resolves one generation request from flags, project config and
//! environment, then runs the batch against Gemini.

use std::path::PathBuf;

use clap::Args;

use crate::config::{DEFAULT_CONFIG_FILENAME, DEFAULT_ENV_FILENAME};
use crate::error::{AssetGenError, Result};
use crate::generate::{BatchResult, BatchRunner, GeminiClient, ImageGenerator, ImageResizer, PngResizer};
use crate::output::{display_path, Printer};
use crate::request::{GenerationRequest, RequestOptions};
use crate::resolve::API_KEY_VAR;
use crate::types::{AssetType, Model, StyleTemplate};

/// Generate image assets from a text description
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image description
    #[arg(long, short)]
    pub prompt: String,

    /// Asset type (auto-detected from the prompt if not given)
    #[arg(long = "type", short = 't', value_enum)]
    pub asset_type: Option<AssetType>,

    /// Output size as WxH, e.g. 64x64
    #[arg(long, short = 'z')]
    pub size: Option<String>,

    /// Output file path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Project style config file
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Env file holding GEMINI_API_KEY
    #[arg(long, short, default_value = DEFAULT_ENV_FILENAME)]
    pub env: PathBuf,

    /// Gemini API key (overrides every other source)
    #[arg(long, short = 'k')]
    pub api_key: Option<String>,

    /// Number of variants to generate
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub batch: u32,

    /// Gemini model
    #[arg(long, short, value_enum, default_value_t = Model::default())]
    pub model: Model,

    /// Built-in style template, used when no project config exists
    #[arg(long, short, value_enum)]
    pub style: Option<StyleTemplate>,
}

impl GenerateArgs {
    fn request_options(&self) -> RequestOptions {
        RequestOptions {
            prompt: self.prompt.clone(),
            asset_type: self.asset_type,
            size: self.size.clone(),
            output: self.output.clone(),
            config: self.config.clone(),
            env_file: self.env.clone(),
            api_key: self.api_key.clone(),
            model: self.model,
            style: self.style,
        }
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let process_env = || std::env::var(API_KEY_VAR).ok();
    run_with(&args, &GeminiClient::new(), &PngResizer, process_env, printer).map(|_| ())
}

/// Run the command with explicit collaborators and process-environment lookup.
///
/// Errors if resolution fails or no image was written.
pub fn run_with<G: ImageGenerator, R: ImageResizer>(
    args: &GenerateArgs,
    generator: &G,
    resizer: &R,
    process_env: impl FnOnce() -> Option<String>,
    printer: &Printer,
) -> Result<BatchResult> {
    let options = args.request_options();
    let request = GenerationRequest::resolve_with(&options, printer, process_env)?;
    printer.info("Model", request.model.id());

    let result = BatchRunner::new(generator, resizer, printer).run(&request, args.batch);
    print_summary(&result, printer);

    if !result.is_success() {
        return Err(AssetGenError::Generation {
            message: format!("no images generated ({} attempted)", result.total()),
            help: Some("Check the API key and prompt, or try another --model".to_string()),
        });
    }

    Ok(result)
}

fn print_summary(result: &BatchResult, printer: &Printer) {
    let message = format!("{}/{} images", result.success_count(), result.total());
    if result.is_success() {
        printer.success("Generated", &message);
    } else {
        printer.error("Generated", &message);
    }

    for path in result.paths() {
        println!("{}", display_path(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GenerateError;
    use crate::types::Size;
    use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
    use std::cell::Cell;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn args(dir: &Path, prompt: &str) -> GenerateArgs {
        GenerateArgs {
            prompt: prompt.to_string(),
            asset_type: None,
            size: None,
            output: None,
            config: dir.join(DEFAULT_CONFIG_FILENAME),
            env: dir.join(DEFAULT_ENV_FILENAME),
            api_key: None,
            batch: 1,
            model: Model::default(),
            style: None,
        }
    }

    #[test]
    fn test_generate_writes_resized_png() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_ENV_FILENAME), "GEMINI_API_KEY=file-key\n").unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILENAME),
            format!(r#"{{ "outputDir": {:?} }}"#, dir.path().join("out").to_string_lossy()),
        )
        .unwrap();

        let generator = |_: &str, key: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            assert_eq!(key, "file-key");
            Ok(png(256, 256))
        };

        let result = run_with(
            &args(dir.path(), "settings icon"),
            &generator,
            &PngResizer,
            || Some("process-key".to_string()),
            &Printer::new(),
        )
        .unwrap();

        let path = result.paths().next().unwrap().to_path_buf();
        assert_eq!(path.parent().unwrap(), dir.path().join("out").join("icons"));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn test_generate_batch_with_output_override() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path(), "hero banner");
        args.api_key = Some("cli-key".to_string());
        args.output = Some(dir.path().join("banner.png"));
        args.size = Some("32x16".to_string());
        args.batch = 2;

        let generator = |_: &str, _: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            Ok(png(10, 10))
        };

        let result = run_with(&args, &generator, &PngResizer, || None, &Printer::new()).unwrap();

        assert_eq!(result.success_count(), 2);
        let img = image::open(dir.path().join("banner_2.png")).unwrap();
        assert_eq!((img.width(), img.height()), (32, 16));
    }

    #[test]
    fn test_generate_fails_without_credential() {
        let dir = tempdir().unwrap();
        let calls = Cell::new(0);
        let generator = |_: &str, _: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            calls.set(calls.get() + 1);
            Ok(png(1, 1))
        };
        let mut args = args(dir.path(), "icon");
        args.output = Some(dir.path().join("never.png"));

        let err = run_with(&args, &generator, &PngResizer, || None, &Printer::new()).unwrap_err();
        assert!(matches!(err, AssetGenError::CredentialMissing));
        assert_eq!(calls.get(), 0);
        assert!(!dir.path().join("never.png").exists());
    }

    #[test]
    fn test_generate_uses_process_env_as_last_tier() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path(), "icon");
        args.output = Some(dir.path().join("env.png"));

        let generator = |_: &str, key: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            assert_eq!(key, "process-key");
            Ok(png(2, 2))
        };

        let result = run_with(
            &args,
            &generator,
            &PngResizer,
            || Some("process-key".to_string()),
            &Printer::new(),
        )
        .unwrap();
        assert_eq!(result.success_count(), 1);
    }

    #[test]
    fn test_generate_all_failed_is_error() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path(), "icon");
        args.api_key = Some("cli-key".to_string());
        args.output = Some(dir.path().join("out.png"));
        args.batch = 3;

        let generator = |_: &str, _: &str, _: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            Err(GenerateError::Request("HTTP 429".to_string()))
        };

        let err = run_with(&args, &generator, &PngResizer, || None, &Printer::new()).unwrap_err();
        assert!(matches!(err, AssetGenError::Generation { .. }));
    }

    #[test]
    fn test_generate_prompt_reaches_generator() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path(), "login button");
        args.api_key = Some("cli-key".to_string());
        args.output = Some(dir.path().join("button.png"));
        args.style = Some(StyleTemplate::Glass);

        let generator = |prompt: &str, _: &str, model: Model| -> std::result::Result<Vec<u8>, GenerateError> {
            assert!(prompt.starts_with("login button, UI element"));
            assert!(prompt.contains("glassmorphism"));
            assert_eq!(model, Model::Gemini25FlashImage);
            Ok(png(4, 2))
        };
        let resizer = |bytes: &[u8], size: Size| -> Result<Vec<u8>> {
            assert_eq!(size, Size::new(400, 200));
            Ok(bytes.to_vec())
        };

        let result = run_with(&args, &generator, &resizer, || None, &Printer::new()).unwrap();
        assert_eq!(result.success_count(), 1);
    }
}
