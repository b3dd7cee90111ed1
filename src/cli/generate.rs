use std::path::PathBuf;

use clap::Parser;

use embundle::config::GeneratorConfig;
use embundle::generator::Encoding;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle a set of files:\n    embundle generate --target src/entries.rs /etc/passwd /etc/hosts\n\n\
                  Bundle a whole directory:\n    embundle generate --recursive --target src/etc.rs /etc\n\n\
                  Compress, inflate once at startup and keep plaintext:\n    \
                  embundle generate -r -c -i -u --target src/etc.rs /etc\n\n\
                  Leave out scratch files:\n    embundle generate -r -x '**/*.tmp,**/.git' -t src/site.rs site\n\n\
                  Read settings from a manifest:\n    embundle generate --config embundle.yaml")]
pub struct GenerateArgs {
    /// Files or directories to embed
    pub paths: Vec<PathBuf>,

    /// Target Rust file to generate
    #[arg(long, short = 't')]
    pub target: Option<PathBuf>,

    /// Module name (inferred from --target if not provided)
    #[arg(long, short = 'p')]
    pub package: Option<String>,

    /// Bundle name (inferred from --package if not provided)
    #[arg(long, short = 'n')]
    pub bundle: Option<String>,

    /// Recursively add files from directories
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Globs to exclude (comma separated, repeatable)
    #[arg(long, short = 'x', value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Compress files before encoding
    #[arg(long, short = 'c')]
    pub compress: bool,

    /// Retain the uncompressed copy on first access
    #[arg(long, short = 'u')]
    pub retain_uncompressed: bool,

    /// Uncompress all files once, when the bundle is built
    #[arg(long, short = 'i')]
    pub uncompress_on_init: bool,

    /// Encode contents as byte arrays instead of escaped byte strings
    #[arg(long, short = 'b')]
    pub encode_as_bytes: bool,

    /// zlib compression level (0-9)
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<u32>,

    /// Path of the embundle crate as seen from the generated module
    #[arg(long, value_name = "PATH")]
    pub crate_path: Option<String>,

    /// Read settings from a YAML manifest; flags given here take precedence
    #[arg(long, value_name = "FILE", env = "EMBUNDLE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Settings given on the command line, ready to layer over a manifest
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            target: self.target.clone(),
            package: self.package.clone(),
            bundle: self.bundle.clone(),
            paths: self.paths.clone(),
            recursive: self.recursive,
            exclude: self.exclude.clone(),
            compress: self.compress,
            retain_uncompressed: self.retain_uncompressed,
            uncompress_on_init: self.uncompress_on_init,
            encoding: self.encode_as_bytes.then_some(Encoding::Bytes),
            level: self.level,
            crate_path: self.crate_path.clone(),
        }
    }
}
