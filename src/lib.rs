//! embundle - embed static files into Rust binaries
//!
//! The runtime half of this crate stores files as named [`Bundle`]s built
//! through a [`BundleBuilder`] and discoverable through a [`Registry`]. The
//! [`generator`] half walks a source tree and emits a Rust module whose
//! construction function replays the builder calls with the file contents
//! inlined as static byte literals.
//!
//! ```
//! use embundle::{BundleBuilder, Registry};
//!
//! # fn main() -> embundle::Result<()> {
//! let registry = Registry::new();
//! BundleBuilder::new("assets")
//!     .add_file("greeting.txt", b"hello" as &[u8])?
//!     .build_into(&registry)?;
//!
//! let assets = registry.lookup("assets")?;
//! assert_eq!(assets.read_bytes("greeting.txt")?.as_ref(), b"hello");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod bundle;
pub mod codec;
pub mod config;
pub mod error;
pub mod generator;
pub mod registry;

pub use builder::BundleBuilder;
pub use bundle::{Bundle, BundleReader};
pub use error::{EmbundleError, Result};
pub use registry::Registry;
