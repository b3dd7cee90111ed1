//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// embundle - embed static files into Rust binaries
#[derive(Parser, Debug)]
#[command(
    name = "embundle",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Embed static files into Rust binaries",
    long_about = "embundle compiles static files into a Rust module. The generated module \
                  rebuilds a named bundle at runtime, optionally zlib-compressed, which \
                  the program reads by path instead of touching the filesystem.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  embundle generate -t src/entries.rs /etc/passwd /etc/hosts   \x1b[90m# Bundle a few files\x1b[0m\n   \
                  embundle generate -r -t src/etc.rs /etc                      \x1b[90m# Bundle a directory\x1b[0m\n   \
                  embundle generate -r -c -i -u -t src/etc.rs /etc             \x1b[90m# Compressed, inflated at startup\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Rust module embedding the given files
    Generate(GenerateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
