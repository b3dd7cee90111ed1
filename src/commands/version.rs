//! Version command implementation

use embundle::Result;
use embundle::codec;
use embundle::generator::{DEFAULT_CRATE_PATH, HASH_PREFIX};

/// Run version command
pub fn run() -> Result<()> {
    println!("embundle {}", env!("CARGO_PKG_VERSION"));
    println!();
    for (label, value) in generator_defaults() {
        println!("  {label}: {value}");
    }

    Ok(())
}

/// Settings baked into generated modules unless overridden
fn generator_defaults() -> [(&'static str, String); 4] {
    [
        ("Runtime crate path", DEFAULT_CRATE_PATH.to_string()),
        (
            "zlib level",
            format!("{} (max {})", codec::DEFAULT_LEVEL, codec::MAX_LEVEL),
        ),
        ("Input digest", HASH_PREFIX.trim_end_matches(':').to_string()),
        ("Minimum Rust", env!("CARGO_PKG_RUST_VERSION").to_string()),
    ]
}
