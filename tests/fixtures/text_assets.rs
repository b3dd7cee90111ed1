// Code generated by embundle 0.1.0. DO NOT EDIT.
//
// module: text_assets
// bundle: fixture_text
// files: 2
// digest: blake3:fixture

use std::sync::{Arc, LazyLock};

use embundle::{Bundle, BundleBuilder};

/// Builds the `fixture_text` bundle and registers it in the global registry.
pub fn build_fixture_text_bundle() -> embundle::Result<Arc<Bundle>> {
    BundleBuilder::new("fixture_text")
        .add_file(
            "greeting.txt",
            b"hello" as &[u8],
        )?
        .add_file(
            "nested/data.bin",
            b"\0\xff\n\"" as &[u8],
        )?
        .build()
}

/// The `fixture_text` bundle, built and registered on first access.
pub static FIXTURE_TEXT_BUNDLE: LazyLock<Arc<Bundle>> = LazyLock::new(|| {
    build_fixture_text_bundle().expect("embedded bundle `fixture_text` is corrupt")
});
