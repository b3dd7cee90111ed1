//! Expands input roots into the files to embed

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::Result;
use crate::error::fs::{invalid_glob, not_a_file, read_failed};

/// A file selected for embedding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Location on disk
    pub source: PathBuf,
    /// Key inside the bundle
    pub bundle_path: String,
}

/// Compiled exclude globs, matched against walked paths
#[derive(Debug, Default)]
pub struct Excludes {
    globs: Vec<Glob<'static>>,
}

impl Excludes {
    /// Compile patterns; empty entries are ignored
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let globs = patterns
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !p.is_empty())
            .map(|p| {
                Glob::new(p)
                    .map(Glob::into_owned)
                    .map_err(|e| invalid_glob(p, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { globs })
    }

    /// Whether `path` is excluded
    ///
    /// Globs see the path as walked, normalized the same way as bundle keys.
    pub fn matches(&self, path: &Path) -> bool {
        if self.globs.is_empty() {
            return false;
        }

        let normalized = bundle_path(path);
        let candidate = CandidatePath::from(normalized.as_str());
        self.globs
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

/// Collect files under `roots`
///
/// Without `recursive`, every root must be a file. With it, directories are
/// walked in file-name order and excluded directories are pruned whole.
pub fn collect_files(
    roots: &[PathBuf],
    recursive: bool,
    excludes: &Excludes,
) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for root in roots {
        if excludes.matches(root) {
            tracing::debug!(root = %root.display(), "skipping excluded root");
            continue;
        }

        if !recursive {
            if root.is_dir() {
                return Err(not_a_file(root));
            }
            files.push(source_file(root));
            continue;
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !excludes.matches(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                read_failed(&path, e)
            })?;
            if entry.file_type().is_file() {
                files.push(source_file(entry.path()));
            }
        }
    }

    Ok(files)
}

fn source_file(path: &Path) -> SourceFile {
    SourceFile {
        source: path.to_path_buf(),
        bundle_path: bundle_path(path),
    }
}

/// Bundle key for a walked path: forward slashes, no root or `.` segments
pub fn bundle_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
