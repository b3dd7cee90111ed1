//! Generate command implementation
//!
//! Resolves settings from the optional manifest and the command line, runs
//! the generator and writes the target module.

use console::Style;

use embundle::Result;
use embundle::config::GeneratorConfig;
use embundle::generator::{self, Generated};

use crate::cli::GenerateArgs;

/// Run generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let options = config.into_options()?;
    tracing::debug!(?options, "resolved generator options");

    let generated = generator::generate(&options)?;
    for file in &generated.files {
        println!("{}", file.bundle_path);
    }

    let written = generator::write_target(&options.target, &generated.source)?;
    print_summary(&generated, &options.target.display().to_string(), written);

    Ok(())
}

/// Manifest settings (if any) with command-line flags layered on top
fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let cli = args.to_config();
    match &args.config {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading manifest");
            Ok(GeneratorConfig::load(path)?.merge(cli))
        }
        None => Ok(cli),
    }
}

fn print_summary(generated: &Generated, target: &str, written: bool) {
    let status = if written {
        Style::new().green().apply_to("written")
    } else {
        Style::new().dim().apply_to("up to date")
    };

    println!();
    println!(
        "{} {} -> {} ({})",
        Style::new().bold().apply_to("Bundle"),
        Style::new().bold().yellow().apply_to(&generated.bundle),
        Style::new().cyan().apply_to(target),
        status
    );
    println!(
        "  {} files, {} bytes, {} bytes stored",
        generated.files.len(),
        generated.original_len(),
        generated.stored_len()
    );
    println!("  {}", Style::new().dim().apply_to(&generated.digest));
}
