//! Source discovery and metadata pairing.
//!
//! Stage 1 of the pitchgen pipeline. Walks the source directory, finds every
//! Markdown body, pairs it with its YAML metadata and files it under its
//! canonical name.
//!
//! ## Source Layout
//!
//! ```text
//! assets/src/                      # Source root
//! ├── config.toml                  # Tool configuration (optional)
//! ├── common.yaml                  # Shared metadata fallback (optional)
//! ├── index.yaml                   # Metadata for the index slide (optional)
//! ├── Intro to Rust.md             # Body → intro-to-rust/
//! ├── Intro to Rust.yaml           # Sidecar metadata, beats common.yaml
//! └── advanced/
//!     ├── Async Rust.md            # Nested bodies land at the top level too
//!     └── Async Rust.yaml
//! ```
//!
//! ## Metadata Resolution (first available wins)
//!
//! 1. `<name>.yaml` next to the body, in the body's own directory
//! 2. `common.yaml` in the **source root** (never a subdirectory's)
//! 3. none
//!
//! ## Collisions
//!
//! Two bodies whose names slug to the same canonical name share one output
//! directory. The one discovered last wins. Directory entries are visited in
//! file-name order so the winner is the same on every run; every overwritten
//! item is recorded in [`ScanResult::collisions`].

use crate::naming::slugify;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extension (with dot) that marks a presentation body.
pub const BODY_SUFFIX: &str = ".md";
/// Root-level metadata used when a body has no sidecar of its own.
pub const COMMON_METADATA: &str = "common.yaml";
/// Root-level metadata for the generated index slide.
pub const INDEX_METADATA: &str = "index.yaml";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),
}

/// One discovered presentation body and its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceItem {
    /// Body file stem before slugging (`Intro to Rust` for `Intro to Rust.md`)
    pub raw_name: String,
    pub body_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_path: Option<PathBuf>,
}

/// Canonical name → source item, iterated in lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresentationMapping {
    items: BTreeMap<String, SourceItem>,
}

impl PresentationMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, returning whatever previously held `name`.
    pub fn insert(&mut self, name: String, item: SourceItem) -> Option<SourceItem> {
        self.items.insert(name, item)
    }

    pub fn get(&self, name: &str) -> Option<&SourceItem> {
        self.items.get(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Canonical names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceItem)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A canonical name claimed by more than one body.
#[derive(Debug, Clone, Serialize)]
pub struct Collision {
    pub name: String,
    pub replaced: SourceItem,
    pub by: SourceItem,
}

/// Everything the scan stage discovered.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    pub presentations: PresentationMapping,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub collisions: Vec<Collision>,
    /// Root-level `index.yaml`, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_metadata: Option<PathBuf>,
}

/// Walk `root` and build the presentation mapping.
pub fn scan(root: &Path, allow_unicode: bool) -> Result<ScanResult, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingSource(root.to_path_buf()));
    }

    let common = Some(root.join(COMMON_METADATA)).filter(|p| p.is_file());
    let mut presentations = PresentationMapping::new();
    let mut collisions = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        // Compare raw bytes so non-UTF-8 names are not skipped.
        let is_body = entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(BODY_SUFFIX.as_bytes());
        if !is_body || !path.is_file() {
            continue;
        }

        let item = pair_metadata(path, common.as_deref());
        let name = slugify(&item.raw_name, allow_unicode);
        if let Some(replaced) = presentations.insert(name.clone(), item.clone()) {
            collisions.push(Collision {
                name,
                replaced,
                by: item,
            });
        }
    }

    let index_metadata = Some(root.join(INDEX_METADATA)).filter(|p| p.is_file());

    Ok(ScanResult {
        presentations,
        collisions,
        index_metadata,
    })
}

/// Build the [`SourceItem`] for one body, resolving its metadata.
fn pair_metadata(body: &Path, common: Option<&Path>) -> SourceItem {
    let raw_name = body
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let sidecar = body.with_extension("yaml");
    let metadata_path = if sidecar.is_file() {
        Some(sidecar)
    } else {
        common.map(Path::to_path_buf)
    };

    SourceItem {
        raw_name,
        body_path: body.to_path_buf(),
        metadata_path,
    }
}
