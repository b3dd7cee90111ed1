//! Generator pipeline tests

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::emit::decode::{decode_byte_array, decode_byte_string};
use super::*;
use crate::error::EmbundleError;

struct Fixture {
    temp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn write(&self, path: &str, content: &[u8]) -> PathBuf {
        let full = self.temp.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(&full, content).unwrap();
        full
    }

    fn path(&self, path: &str) -> PathBuf {
        self.temp.path().join(path)
    }

    fn options(&self, roots: Vec<PathBuf>) -> GeneratorOptions {
        GeneratorOptions {
            target: self.path("out/assets.rs"),
            roots,
            ..GeneratorOptions::default()
        }
    }
}

/// The literal passed to `add_file` for `path` in the rendered source
fn literal_for<'a>(source: &'a str, path: &str) -> &'a str {
    let marker = format!("{path:?},\n            ");
    let start = source.find(&marker).expect("path missing from source") + marker.len();
    let rest = &source[start..];
    let end = rest.find(" as &[u8],").expect("unterminated literal");
    &rest[..end]
}

fn bundle_key(fixture: &Fixture, rel: &str) -> String {
    walker::bundle_path(&fixture.path(rel))
}

#[test]
fn test_package_name_inference() {
    let mut options = GeneratorOptions {
        target: PathBuf::from("src/assets.rs"),
        ..GeneratorOptions::default()
    };
    assert_eq!(options.package_name().unwrap(), "assets");
    assert_eq!(options.bundle_name().unwrap(), "assets");

    options.target = PathBuf::from("src/embedded/mod.rs");
    assert_eq!(options.package_name().unwrap(), "embedded");

    options.package = Some("web".to_string());
    assert_eq!(options.package_name().unwrap(), "web");
    assert_eq!(options.bundle_name().unwrap(), "web");

    options.bundle = Some("site".to_string());
    assert_eq!(options.bundle_name().unwrap(), "site");
}

#[test]
fn test_validate_rejects_incomplete_options() {
    let missing_target = GeneratorOptions {
        roots: vec![PathBuf::from("static")],
        ..GeneratorOptions::default()
    };
    assert!(matches!(
        missing_target.validate().unwrap_err(),
        EmbundleError::ConfigInvalid { .. }
    ));

    let missing_roots = GeneratorOptions {
        target: PathBuf::from("assets.rs"),
        ..GeneratorOptions::default()
    };
    assert!(missing_roots.validate().is_err());

    let bad_level = GeneratorOptions {
        target: PathBuf::from("assets.rs"),
        roots: vec![PathBuf::from("static")],
        level: 12,
        ..GeneratorOptions::default()
    };
    let err = bad_level.validate().unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_validate_rejects_multiline_names() {
    let fixture = Fixture::new();
    let file = fixture.write("greeting.txt", b"hello");

    let options = GeneratorOptions {
        bundle: Some("a\nb".to_string()),
        ..fixture.options(vec![file.clone()])
    };
    let err = options.validate().unwrap_err();
    assert!(matches!(err, EmbundleError::ConfigInvalid { .. }));
    assert!(err.to_string().contains("control characters"));
    assert!(generate(&options).is_err());

    let options = GeneratorOptions {
        package: Some("web\r".to_string()),
        ..fixture.options(vec![file])
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_generate_raw_string_encoding() {
    let fixture = Fixture::new();
    let greeting = fixture.write("static/greeting.txt", b"hello\n");
    let data = fixture.write("static/data.bin", &[0, 1, 2, 255, b'"', b'\\']);

    let generated = generate(&fixture.options(vec![greeting, data])).unwrap();

    let greeting_key = bundle_key(&fixture, "static/greeting.txt");
    let data_key = bundle_key(&fixture, "static/data.bin");
    assert_eq!(
        generated
            .files
            .iter()
            .map(|f| f.bundle_path.as_str())
            .collect::<Vec<_>>(),
        [data_key.as_str(), greeting_key.as_str()]
    );
    assert_eq!(
        decode_byte_string(literal_for(&generated.source, &greeting_key)),
        b"hello\n"
    );
    assert_eq!(
        decode_byte_string(literal_for(&generated.source, &data_key)),
        [0, 1, 2, 255, b'"', b'\\']
    );
    assert!(!generated.source.contains(".compressed()"));
    assert_eq!(generated.original_len(), generated.stored_len());
}

#[test]
fn test_generate_compressed_bytes_encoding() {
    let fixture = Fixture::new();
    let content = b"compress me ".repeat(100);
    let file = fixture.write("static/big.txt", &content);

    let options = GeneratorOptions {
        compress: true,
        retain_uncompressed: true,
        encoding: Encoding::Bytes,
        ..fixture.options(vec![file])
    };
    let generated = generate(&options).unwrap();

    let key = bundle_key(&fixture, "static/big.txt");
    let stored = decode_byte_array(literal_for(&generated.source, &key));
    assert_eq!(codec::decompress(&key, &stored).unwrap(), content);
    assert!(generated.stored_len() < generated.original_len());
    assert!(generated.source.contains(".compressed()\n        .retain_uncompressed()\n"));
}

#[test]
fn test_generated_literals_rebuild_identical_bundle() {
    let fixture = Fixture::new();
    let file = fixture.write("static/greeting.txt", b"hello");

    for encoding in [Encoding::String, Encoding::Bytes] {
        let options = GeneratorOptions {
            compress: true,
            uncompress_on_init: true,
            encoding,
            ..fixture.options(vec![file.clone()])
        };
        let generated = generate(&options).unwrap();
        let key = bundle_key(&fixture, "static/greeting.txt");
        let literal = literal_for(&generated.source, &key);
        let stored = match encoding {
            Encoding::String => decode_byte_string(literal),
            Encoding::Bytes => decode_byte_array(literal),
        };

        // Replay the emitted chain against an isolated registry
        let registry = crate::Registry::new();
        let bundle = crate::BundleBuilder::new(generated.bundle.clone())
            .compressed()
            .decompress_on_finalize()
            .add_file(key.clone(), stored)
            .unwrap()
            .build_into(&registry)
            .unwrap();
        assert!(!bundle.is_compressed());
        assert_eq!(bundle.read_bytes(&key).unwrap().as_ref(), b"hello");
    }
}

#[test]
fn test_generate_recursive_with_excludes() {
    let fixture = Fixture::new();
    fixture.write("site/index.html", b"<html>");
    fixture.write("site/js/app.js", b"app()");
    fixture.write("site/js/app.js.map", b"{}");
    fixture.write("site/drafts/wip.html", b"wip");

    let options = GeneratorOptions {
        recursive: true,
        exclude: vec!["**/*.map".to_string(), "**/drafts".to_string()],
        ..fixture.options(vec![fixture.path("site")])
    };
    let generated = generate(&options).unwrap();

    let paths: Vec<&str> = generated
        .files
        .iter()
        .map(|f| f.bundle_path.as_str())
        .collect();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("site/index.html"));
    assert!(paths[1].ends_with("site/js/app.js"));
    assert!(generated.source.contains("// files: 2"));
}

#[test]
fn test_generate_duplicate_roots_collapse() {
    let fixture = Fixture::new();
    let file = fixture.write("a.txt", b"a");
    let generated = generate(&fixture.options(vec![file.clone(), file])).unwrap();
    assert_eq!(generated.files.len(), 1);
}

#[test]
fn test_generate_missing_input_fails() {
    let fixture = Fixture::new();
    let err = generate(&fixture.options(vec![fixture.path("nope.txt")])).unwrap_err();
    assert!(matches!(err, EmbundleError::FileReadFailed { .. }));
}

#[test]
fn test_digest_tracks_content() {
    let fixture = Fixture::new();
    let file = fixture.write("a.txt", b"one");
    let first = generate(&fixture.options(vec![file.clone()])).unwrap();
    let again = generate(&fixture.options(vec![file.clone()])).unwrap();
    fixture.write("a.txt", b"two");
    let changed = generate(&fixture.options(vec![file])).unwrap();

    assert!(first.digest.starts_with(HASH_PREFIX));
    assert_eq!(first.digest, again.digest);
    assert_ne!(first.digest, changed.digest);
    assert_eq!(first.source, again.source);
}

#[test]
fn test_write_target_skips_identical_content() {
    let fixture = Fixture::new();
    let target = fixture.path("out/nested/assets.rs");

    assert!(write_target(&target, "// one\n").unwrap());
    assert_eq!(fs::read_to_string(&target).unwrap(), "// one\n");

    assert!(!write_target(&target, "// one\n").unwrap());

    assert!(write_target(&target, "// two\n").unwrap());
    assert_eq!(fs::read_to_string(&target).unwrap(), "// two\n");
}

#[test]
fn test_write_target_relative_file_name() {
    // A bare file name has an empty parent; it must resolve to the cwd
    let target = Path::new("embundle-write-target-test.rs");
    let _ = fs::remove_file(target);
    assert!(write_target(target, "// cwd\n").unwrap());
    fs::remove_file(target).unwrap();
}
