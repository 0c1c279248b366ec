pub mod completions;
pub mod generate;
pub mod init;
pub mod styles;

use clap::{Parser, Subcommand};

pub const BIN_NAME: &str = "assetgen";

/// assetgen - AI image asset generator for web projects
#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate image assets from a text prompt
    Generate(generate::GenerateArgs),

    /// Create a project style config (.asset-style.json)
    Init(init::InitArgs),

    /// List built-in style templates
    Styles(styles::StylesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
