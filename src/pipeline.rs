//! The full build: scan → materialize → index.
//!
//! Each stage is its own module and can be driven on its own; this module
//! runs them in order against one source and one output directory and
//! collects what happened for the CLI to print. Publishing with git is not
//! part of the build, see [`crate::git`].

use crate::config::{Layout, ToolConfig};
use crate::index::{INDEX_FILE, column_count, generate_index};
use crate::materialize::{self, MaterializeError, MaterializedItem};
use crate::scan::{self, ScanError, ScanResult};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Materialize(#[from] MaterializeError),
    #[error("Failed to write index {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Summary of the generated index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub path: PathBuf,
    pub layout: Layout,
    pub entries: usize,
    /// Table columns; 1 for the list layout
    pub columns: usize,
    /// Copy of `index.yaml`, if the source had one
    pub metadata: Option<PathBuf>,
}

/// Everything a build produced.
#[derive(Debug)]
pub struct BuildReport {
    pub scan: ScanResult,
    pub materialized: Vec<MaterializedItem>,
    pub index: IndexSummary,
}

/// Run the build for `source` into `out_dir`.
pub fn build(source: &Path, out_dir: &Path, config: &ToolConfig) -> Result<BuildReport, BuildError> {
    let scan = scan::scan(source, config.slug.allow_unicode)?;

    let materialized = materialize::materialize(&scan.presentations, out_dir)?;

    let index_metadata = match &scan.index_metadata {
        Some(path) => Some(materialize::copy_index_metadata(path, out_dir)?),
        None => None,
    };

    let body = generate_index(&scan.presentations, &config.index);
    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, body).map_err(|source| BuildError::WriteIndex {
        path: index_path.clone(),
        source,
    })?;

    let entries = scan.presentations.len();
    let columns = match config.index.layout {
        Layout::Table => column_count(entries, &config.index),
        Layout::List => 1,
    };

    Ok(BuildReport {
        scan,
        materialized,
        index: IndexSummary {
            path: index_path,
            layout: config.index.layout,
            entries,
            columns,
            metadata: index_metadata,
        },
    })
}
