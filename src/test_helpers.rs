//! Shared test utilities for the pitchgen test suite.
//!
//! Provides fixture setup and mapping lookups that work with scan-phase data
//! structures (`PresentationMapping`, `SourceItem`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let result = scan(tmp.path(), false).unwrap();
//!
//! let item = find_item(&result.presentations, "intro-to-rust");
//! assert_eq!(item.raw_name, "Intro to Rust");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::{PresentationMapping, SourceItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/talks/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/talks");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Create a temp directory holding the given `(relative path, contents)` files.
pub fn write_tree(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, contents) in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Mapping lookups (panic with a clear message on miss)
// =========================================================================

/// Find an item by canonical name. Panics if not found.
pub fn find_item<'a>(mapping: &'a PresentationMapping, name: &str) -> &'a SourceItem {
    mapping.get(name).unwrap_or_else(|| {
        let names = canonical_names(mapping);
        panic!("presentation '{name}' not found. Available: {names:?}")
    })
}

/// All canonical names in mapping order.
pub fn canonical_names(mapping: &PresentationMapping) -> Vec<&str> {
    mapping.names().collect()
}

/// A mapping of `n` bodies named `talk-00`, `talk-01`, ... with no metadata.
pub fn mapping_of(n: usize) -> PresentationMapping {
    let mut mapping = PresentationMapping::new();
    for i in 0..n {
        let name = format!("talk-{i:02}");
        mapping.insert(
            name.clone(),
            SourceItem {
                raw_name: name.clone(),
                body_path: format!("{name}.md").into(),
                metadata_path: None,
            },
        );
    }
    mapping
}
