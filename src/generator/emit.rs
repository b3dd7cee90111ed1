//! Renders the Rust source that rebuilds a bundle at runtime
//!
//! The emitted file calls the same builder chain a hand-written program
//! would: `BundleBuilder::new`, the policy toggles, one `add_file` per entry
//! and `build`. Contents are embedded as `&'static [u8]` literals.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// How file contents are written into the generated source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Escaped byte-string literal, `b"..."`
    #[default]
    String,
    /// Byte array literal, `&[0x.._u8, ...]`
    Bytes,
}

/// Everything the template needs besides the file contents
#[derive(Debug, Clone)]
pub struct BundleContext<'a> {
    pub package: &'a str,
    pub bundle: &'a str,
    pub crate_path: &'a str,
    pub compressed: bool,
    pub retain_uncompressed: bool,
    pub uncompress_on_init: bool,
    pub encoding: Encoding,
    pub digest: &'a str,
}

const BYTES_PER_LINE: usize = 16;

/// Render the construction source for `files` (bundle path, stored bytes)
pub fn render(ctx: &BundleContext<'_>, files: &[(String, Vec<u8>)]) -> String {
    let mut out = String::new();
    // Formatting into a String only fails if a Display impl does
    write_module(&mut out, ctx, files).map_or_else(|_| String::new(), |()| out)
}

fn write_module<W: Write>(
    out: &mut W,
    ctx: &BundleContext<'_>,
    files: &[(String, Vec<u8>)],
) -> std::fmt::Result {
    let ident = rust_ident(ctx.bundle);
    let krate = ctx.crate_path;

    writeln!(
        out,
        "// Code generated by embundle {}. DO NOT EDIT.",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(out, "//")?;
    writeln!(out, "// module: {}", ctx.package)?;
    writeln!(out, "// bundle: {}", ctx.bundle)?;
    writeln!(out, "// files: {}", files.len())?;
    writeln!(out, "// digest: {}", ctx.digest)?;
    writeln!(out)?;
    writeln!(out, "use std::sync::{{Arc, LazyLock}};")?;
    writeln!(out)?;
    writeln!(out, "use {krate}::{{Bundle, BundleBuilder}};")?;
    writeln!(out)?;

    writeln!(
        out,
        "/// Builds the `{}` bundle and registers it in the global registry.",
        ctx.bundle
    )?;
    writeln!(
        out,
        "pub fn build_{ident}_bundle() -> {krate}::Result<Arc<Bundle>> {{"
    )?;
    writeln!(out, "    BundleBuilder::new({:?})", ctx.bundle)?;
    if ctx.compressed {
        writeln!(out, "        .compressed()")?;
        if ctx.retain_uncompressed {
            writeln!(out, "        .retain_uncompressed()")?;
        }
        if ctx.uncompress_on_init {
            writeln!(out, "        .decompress_on_finalize()")?;
        }
    }
    for (path, bytes) in files {
        let literal = match ctx.encoding {
            Encoding::String => byte_string_literal(bytes),
            Encoding::Bytes => byte_array_literal(bytes, "            "),
        };
        writeln!(out, "        .add_file(")?;
        writeln!(out, "            {path:?},")?;
        writeln!(out, "            {literal} as &[u8],")?;
        writeln!(out, "        )?")?;
    }
    writeln!(out, "        .build()")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(
        out,
        "/// The `{}` bundle, built and registered on first access.",
        ctx.bundle
    )?;
    writeln!(
        out,
        "pub static {}_BUNDLE: LazyLock<Arc<Bundle>> = LazyLock::new(|| {{",
        ident.to_uppercase()
    )?;
    writeln!(
        out,
        "    build_{ident}_bundle().expect({:?})",
        format!("embedded bundle `{}` is corrupt", ctx.bundle)
    )?;
    writeln!(out, "}});")
}

/// Escaped byte-string literal that decodes to exactly `bytes`
pub fn byte_string_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push_str("b\"");
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'\0' => out.push_str("\\0"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out.push('"');
    out
}

/// Byte array literal with `u8`-typed elements, wrapped at a fixed width
/// and indented by `indent`
pub fn byte_array_literal(bytes: &[u8], indent: &str) -> String {
    if bytes.is_empty() {
        return "&[0_u8; 0]".to_string();
    }

    let mut out = String::from("&[\n");
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        out.push_str(indent);
        out.push_str("    ");
        let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}_u8")).collect();
        out.push_str(&line.join(", "));
        out.push_str(",\n");
    }
    out.push_str(indent);
    out.push(']');
    out
}

/// Lowercase identifier fragment derived from a bundle name
///
/// `my-assets` becomes `my_assets`; names starting with a digit get a
/// leading underscore.
pub fn rust_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
