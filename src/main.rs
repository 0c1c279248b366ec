use assetgen::cli::{Cli, Commands};
use assetgen::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => assetgen::cli::generate::run(args, &printer)?,
        Commands::Init(args) => assetgen::cli::init::run(args, &printer)?,
        Commands::Styles(args) => assetgen::cli::styles::run(args, &printer)?,
        Commands::Completions(args) => assetgen::cli::completions::run(args)?,
    }

    Ok(())
}
