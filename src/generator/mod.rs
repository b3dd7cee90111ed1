//! Bundle source generation
//!
//! This module handles:
//! - Expanding input paths into the files to embed ([`walker`])
//! - Reading and optionally compressing each file
//! - Rendering the Rust construction source ([`emit`])
//! - Writing the target file atomically, skipping unchanged output
//!
//! The same pipeline backs the `embundle generate` command and can be driven
//! from a `build.rs`:
//!
//! ```no_run
//! use embundle::generator::{self, GeneratorOptions};
//!
//! # fn main() -> embundle::Result<()> {
//! let options = GeneratorOptions {
//!     target: "src/assets.rs".into(),
//!     roots: vec!["static".into()],
//!     recursive: true,
//!     compress: true,
//!     ..GeneratorOptions::default()
//! };
//! let generated = generator::generate(&options)?;
//! generator::write_target(&options.target, &generated.source)?;
//! # Ok(())
//! # }
//! ```

pub mod emit;
pub mod walker;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use blake3::Hasher;

use crate::codec;
use crate::error::Result;
use crate::error::config::invalid;
use crate::error::fs::{read_failed, write_failed};

pub use emit::Encoding;
pub use walker::{Excludes, SourceFile};

/// Hash prefix used in the generated header
pub const HASH_PREFIX: &str = "blake3:";

/// Runtime crate path used by generated code unless overridden
pub const DEFAULT_CRATE_PATH: &str = "embundle";

/// Inputs to one generator run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Output `.rs` file
    pub target: PathBuf,
    /// Module name recorded in the header; inferred from `target`
    pub package: Option<String>,
    /// Bundle name; defaults to the module name
    pub bundle: Option<String>,
    /// Files or directories to embed
    pub roots: Vec<PathBuf>,
    pub recursive: bool,
    /// Glob patterns of paths to leave out
    pub exclude: Vec<String>,
    /// Store files zlib-compressed
    pub compress: bool,
    pub retain_uncompressed: bool,
    /// Inflate everything once when the bundle is built
    pub uncompress_on_init: bool,
    pub encoding: Encoding,
    /// Path of the runtime crate as seen from the generated module
    pub crate_path: String,
    /// zlib level, 0-9
    pub level: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            target: PathBuf::new(),
            package: None,
            bundle: None,
            roots: Vec::new(),
            recursive: false,
            exclude: Vec::new(),
            compress: false,
            retain_uncompressed: false,
            uncompress_on_init: false,
            encoding: Encoding::default(),
            crate_path: DEFAULT_CRATE_PATH.to_string(),
            level: codec::DEFAULT_LEVEL,
        }
    }
}

impl GeneratorOptions {
    /// Module name: explicit, else the target's file stem
    /// (the parent directory for `mod.rs`)
    pub fn package_name(&self) -> Result<String> {
        if let Some(package) = self.package.as_deref().filter(|p| !p.is_empty()) {
            return checked_name("module", package);
        }

        let stem = self.target.file_stem().and_then(|s| s.to_str());
        let inferred = match stem {
            Some("mod") => self
                .target
                .parent()
                .and_then(Path::file_name)
                .and_then(|s| s.to_str()),
            other => other,
        };

        let inferred = inferred.filter(|name| !name.is_empty()).ok_or_else(|| {
            invalid(format!(
                "cannot infer a module name from '{}'; pass --package",
                self.target.display()
            ))
        })?;
        checked_name("module", inferred)
    }

    /// Bundle name: explicit, else the module name
    pub fn bundle_name(&self) -> Result<String> {
        match self.bundle.as_deref().filter(|b| !b.is_empty()) {
            Some(bundle) => checked_name("bundle", bundle),
            None => self.package_name(),
        }
    }

    /// Reject option sets that cannot produce a usable bundle
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(invalid("no target file given; pass --target"));
        }
        if self.roots.is_empty() {
            return Err(invalid("no input paths given"));
        }
        if self.level > codec::MAX_LEVEL {
            return Err(invalid(format!(
                "compression level {} is out of range 0-{}",
                self.level,
                codec::MAX_LEVEL
            )));
        }
        if self.crate_path.trim().is_empty() {
            return Err(invalid("crate path must not be empty"));
        }
        self.package_name()?;
        self.bundle_name()?;
        Ok(())
    }
}

/// Names end up in comments of the generated source, which must stay one line each
fn checked_name(kind: &str, name: &str) -> Result<String> {
    if name.chars().any(char::is_control) {
        return Err(invalid(format!(
            "{kind} name {name:?} must not contain control characters"
        )));
    }
    Ok(name.to_string())
}

/// One embedded file, as reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledFile {
    pub bundle_path: String,
    pub source: PathBuf,
    /// Size on disk
    pub original_len: usize,
    /// Size as embedded
    pub stored_len: usize,
}

/// Output of [`generate`]
#[derive(Debug, Clone)]
pub struct Generated {
    pub package: String,
    pub bundle: String,
    /// Rendered Rust source
    pub source: String,
    /// Embedded files in bundle order
    pub files: Vec<BundledFile>,
    /// Digest of all bundle paths and their original contents
    pub digest: String,
}

impl Generated {
    pub fn original_len(&self) -> usize {
        self.files.iter().map(|f| f.original_len).sum()
    }

    pub fn stored_len(&self) -> usize {
        self.files.iter().map(|f| f.stored_len).sum()
    }
}

/// Run the pipeline up to the rendered source, without writing anything
pub fn generate(options: &GeneratorOptions) -> Result<Generated> {
    options.validate()?;
    let package = options.package_name()?;
    let bundle = options.bundle_name()?;

    let excludes = Excludes::new(&options.exclude)?;
    let sources = walker::collect_files(&options.roots, options.recursive, &excludes)?;

    // Keyed by bundle path so duplicates resolve the way the builder does
    let mut entries: BTreeMap<String, (SourceFile, Vec<u8>)> = BTreeMap::new();
    for source in sources {
        let content = std::fs::read(&source.source).map_err(|e| read_failed(&source.source, e))?;
        tracing::debug!(path = %source.bundle_path, bytes = content.len(), "read input file");
        entries.insert(source.bundle_path.clone(), (source, content));
    }

    let mut hasher = Hasher::new();
    let mut files = Vec::with_capacity(entries.len());
    let mut stored = Vec::with_capacity(entries.len());

    for (bundle_path, (source, content)) in entries {
        hasher.update(bundle_path.as_bytes());
        hasher.update(b"\0");
        hasher.update(&content);
        hasher.update(b"\0");

        let original_len = content.len();
        let bytes = if options.compress {
            codec::compress(&bundle_path, &content, options.level)?
        } else {
            content
        };

        files.push(BundledFile {
            bundle_path: bundle_path.clone(),
            source: source.source,
            original_len,
            stored_len: bytes.len(),
        });
        stored.push((bundle_path, bytes));
    }

    let digest = format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex());
    let ctx = emit::BundleContext {
        package: &package,
        bundle: &bundle,
        crate_path: options.crate_path.trim(),
        compressed: options.compress,
        retain_uncompressed: options.retain_uncompressed,
        uncompress_on_init: options.uncompress_on_init,
        encoding: options.encoding,
        digest: &digest,
    };
    let source = emit::render(&ctx, &stored);

    tracing::info!(
        bundle = %bundle,
        files = files.len(),
        digest = %digest,
        "rendered bundle source"
    );

    Ok(Generated {
        package,
        bundle,
        source,
        files,
        digest,
    })
}

/// Write `source` to `target` atomically
///
/// Returns `false` without touching the file when it already holds
/// exactly `source`, so build scripts do not trigger needless rebuilds.
pub fn write_target(target: &Path, source: &str) -> Result<bool> {
    if let Ok(existing) = std::fs::read(target) {
        if existing == source.as_bytes() {
            tracing::debug!(target = %target.display(), "target is up to date");
            return Ok(false);
        }
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| write_failed(target, e))?;

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_failed(target, e))?;
    temp.write_all(source.as_bytes())
        .map_err(|e| write_failed(target, e))?;
    temp.persist(target)
        .map_err(|e| write_failed(target, e.error))?;

    tracing::info!(target = %target.display(), bytes = source.len(), "wrote bundle source");
    Ok(true)
}

#[cfg(test)]
mod tests;
