//! Output tree materialization.
//!
//! Stage 2 of the pitchgen pipeline. GitPitch serves one presentation per
//! directory, each holding a `PITCHME.md` and an optional `PITCHME.yaml`, so
//! every mapping entry becomes a directory named after its canonical name:
//!
//! ```text
//! out/
//! ├── PITCHME.md                   # Index (written by the index stage)
//! ├── PITCHME.yaml                 # Copy of index.yaml, if present
//! ├── intro-to-rust/
//! │   ├── PITCHME.md               # Copy of Intro to Rust.md
//! │   └── PITCHME.yaml             # Copy of Intro to Rust.yaml
//! └── cafe-talk/
//!     ├── PITCHME.md
//!     └── PITCHME.yaml             # Copy of common.yaml
//! ```
//!
//! Copies keep the source's permissions and timestamps. Existing directories
//! are reused and existing files overwritten; directories for presentations
//! that no longer exist are left alone.

use crate::index::INDEX_FILE;
use crate::scan::PresentationMapping;
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of per-presentation and index metadata in the output tree.
pub const METADATA_FILE: &str = "PITCHME.yaml";

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// One presentation directory written to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedItem {
    pub name: String,
    pub body: PathBuf,
    pub metadata: Option<PathBuf>,
}

/// Write one directory per mapping entry under `out_dir`.
pub fn materialize(
    mapping: &PresentationMapping,
    out_dir: &Path,
) -> Result<Vec<MaterializedItem>, MaterializeError> {
    create_dir(out_dir)?;

    let mut written = Vec::with_capacity(mapping.len());
    for (name, item) in mapping.iter() {
        let dir = out_dir.join(name);
        create_dir(&dir)?;

        let body = dir.join(INDEX_FILE);
        copy_preserving(&item.body_path, &body)?;

        let metadata = match &item.metadata_path {
            Some(source) => {
                let target = dir.join(METADATA_FILE);
                copy_preserving(source, &target)?;
                Some(target)
            }
            None => None,
        };

        written.push(MaterializedItem {
            name: name.to_string(),
            body,
            metadata,
        });
    }
    Ok(written)
}

/// Copy the index metadata to `<out_dir>/PITCHME.yaml`.
pub fn copy_index_metadata(source: &Path, out_dir: &Path) -> Result<PathBuf, MaterializeError> {
    create_dir(out_dir)?;
    let target = out_dir.join(METADATA_FILE);
    copy_preserving(source, &target)?;
    Ok(target)
}

fn create_dir(path: &Path) -> Result<(), MaterializeError> {
    fs::create_dir_all(path).map_err(|source| MaterializeError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy contents and permissions, then carry over access and modification times.
fn copy_preserving(from: &Path, to: &Path) -> Result<(), MaterializeError> {
    copy_with_times(from, to).map_err(|source| MaterializeError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn copy_with_times(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;

    let meta = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    open_for_times(to)?.set_times(times)
}

/// Setting times needs write access on Windows. Read-only sources copy their
/// permissions, so a denied write open falls back to a read-only handle.
fn open_for_times(path: &Path) -> io::Result<File> {
    match File::options().write(true).open(path) {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => File::open(path),
        result => result,
    }
}
