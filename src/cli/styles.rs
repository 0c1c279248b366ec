//! Styles command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::StyleTemplate;

/// List built-in style templates
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Print only template keys
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run(args: StylesArgs, printer: &Printer) -> Result<()> {
    for template in StyleTemplate::all() {
        println!("{}", format_template(template, args.quiet, printer));
    }
    Ok(())
}

fn format_template(template: &StyleTemplate, quiet: bool, printer: &Printer) -> String {
    if quiet {
        return template.key().to_string();
    }
    format!(
        "{:<10} {}\n           {}",
        template.key(),
        template.display_name(),
        printer.dim(template.base_prompt())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_lists_keys_only() {
        let printer = Printer::new();
        let lines: Vec<String> = StyleTemplate::all()
            .iter()
            .map(|t| format_template(t, true, &printer))
            .collect();
        assert_eq!(lines, vec!["modern", "flat", "glass", "neon", "handdrawn"]);
    }

    #[test]
    fn test_full_listing_includes_name_and_prompt() {
        let line = format_template(&StyleTemplate::Neon, false, &Printer::new());
        assert!(line.starts_with("neon       Neon Cyber"));
        assert!(line.contains(StyleTemplate::Neon.base_prompt()));
    }
}
