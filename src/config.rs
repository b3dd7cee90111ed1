//! Generator configuration file (embundle.yaml)
//!
//! A manifest carries the same settings as the `generate` command line so a
//! project can check in how its bundle is produced:
//!
//! ```yaml
//! target: src/assets.rs
//! bundle: assets
//! paths: [static]
//! recursive: true
//! exclude: ["**/*.map"]
//! compress: true
//! retain-uncompressed: true
//! ```
//!
//! Paths are taken relative to the working directory, like command-line
//! arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::Result;
use crate::error::config::{parse_failed, read_failed};
use crate::generator::{DEFAULT_CRATE_PATH, Encoding, GeneratorOptions};

/// Conventional manifest file name
pub const CONFIG_FILE: &str = "embundle.yaml";

/// Generator settings as read from a manifest or collected from the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    pub target: Option<PathBuf>,
    pub package: Option<String>,
    pub bundle: Option<String>,
    pub paths: Vec<PathBuf>,
    pub recursive: bool,
    pub exclude: Vec<String>,
    pub compress: bool,
    pub retain_uncompressed: bool,
    pub uncompress_on_init: bool,
    pub encoding: Option<Encoding>,
    pub level: Option<u32>,
    pub crate_path: Option<String>,
}

impl GeneratorConfig {
    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e))?;
        Self::from_yaml(path, &content)
    }

    /// Parse manifest content; `path` only labels errors
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| parse_failed(path.display().to_string(), e))
    }

    /// Layer `overrides` on top of `self`
    ///
    /// Scalars from `overrides` win when set, switches are OR-ed, and lists
    /// are concatenated (file entries first).
    #[must_use]
    pub fn merge(self, overrides: GeneratorConfig) -> GeneratorConfig {
        let mut paths = self.paths;
        paths.extend(overrides.paths);
        let mut exclude = self.exclude;
        exclude.extend(overrides.exclude);

        GeneratorConfig {
            target: overrides.target.or(self.target),
            package: overrides.package.or(self.package),
            bundle: overrides.bundle.or(self.bundle),
            paths,
            recursive: self.recursive || overrides.recursive,
            exclude,
            compress: self.compress || overrides.compress,
            retain_uncompressed: self.retain_uncompressed || overrides.retain_uncompressed,
            uncompress_on_init: self.uncompress_on_init || overrides.uncompress_on_init,
            encoding: overrides.encoding.or(self.encoding),
            level: overrides.level.or(self.level),
            crate_path: overrides.crate_path.or(self.crate_path),
        }
    }

    /// Resolve defaults and validate
    pub fn into_options(self) -> Result<GeneratorOptions> {
        let options = GeneratorOptions {
            target: self.target.unwrap_or_default(),
            package: self.package,
            bundle: self.bundle,
            roots: self.paths,
            recursive: self.recursive,
            exclude: self.exclude,
            compress: self.compress,
            retain_uncompressed: self.retain_uncompressed,
            uncompress_on_init: self.uncompress_on_init,
            encoding: self.encoding.unwrap_or_default(),
            crate_path: self
                .crate_path
                .unwrap_or_else(|| DEFAULT_CRATE_PATH.to_string()),
            level: self.level.unwrap_or(codec::DEFAULT_LEVEL),
        };
        options.validate()?;
        Ok(options)
    }
}
