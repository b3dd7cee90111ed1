// Code generated by embundle 0.1.0. DO NOT EDIT.
//
// module: packed_assets
// bundle: fixture_packed
// files: 2
// digest: blake3:fixture

use std::sync::{Arc, LazyLock};

use embundle::{Bundle, BundleBuilder};

/// Builds the `fixture_packed` bundle and registers it in the global registry.
pub fn build_fixture_packed_bundle() -> embundle::Result<Arc<Bundle>> {
    BundleBuilder::new("fixture_packed")
        .compressed()
        .retain_uncompressed()
        .add_file(
            "empty.bin",
            &[0_u8; 0] as &[u8],
        )?
        .add_file(
            "greeting.txt",
            &[
                0x78_u8, 0xda_u8, 0xcb_u8, 0x48_u8, 0xcd_u8, 0xc9_u8, 0xc9_u8, 0xd7_u8, 0x51_u8, 0x28_u8, 0xcf_u8, 0x2f_u8, 0xca_u8, 0x49_u8, 0x01_u8, 0x00_u8,
                0x1d_u8, 0x54_u8, 0x04_u8, 0x89_u8,
            ] as &[u8],
        )?
        .build()
}

/// The `fixture_packed` bundle, built and registered on first access.
pub static FIXTURE_PACKED_BUNDLE: LazyLock<Arc<Bundle>> = LazyLock::new(|| {
    build_fixture_packed_bundle().expect("embedded bundle `fixture_packed` is corrupt")
});
