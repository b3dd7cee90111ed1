//! Name to bundle lookup
//!
//! Every finished [`BundleBuilder`](crate::BundleBuilder) registers its
//! bundle. Generated code builds into [`Registry::global`]; tests and
//! embedders that want isolation create their own [`Registry`].

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::bundle::Bundle;
use crate::error::Result;
use crate::error::bundle::not_found;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Keyed store of built bundles
///
/// Registering a name that already exists replaces the earlier bundle.
/// Entries are never removed.
#[derive(Default)]
pub struct Registry {
    bundles: RwLock<HashMap<String, Arc<Bundle>>>,
}

impl Registry {
    /// Create an empty, isolated registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by [`BundleBuilder::build`](crate::BundleBuilder::build)
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub(crate) fn register(&self, bundle: Arc<Bundle>) {
        let name = bundle.name().to_string();
        if self.bundles.write().insert(name, bundle).is_some() {
            tracing::debug!("replaced previously registered bundle");
        }
    }

    /// Find a bundle by name
    pub fn lookup(&self, name: &str) -> Result<Arc<Bundle>> {
        self.bundles
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    /// All registered bundles, in no particular order
    pub fn list_all(&self) -> Vec<Arc<Bundle>> {
        self.bundles.read().values().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bundles.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bundles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.read().is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bundles = self.bundles.read();
        let mut names: Vec<&String> = bundles.keys().collect();
        names.sort();
        f.debug_struct("Registry").field("bundles", &names).finish()
    }
}
