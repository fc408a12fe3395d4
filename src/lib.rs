//! # pitchgen
//!
//! Turns a directory of Markdown talks into the layout GitPitch expects: one
//! directory per presentation holding a `PITCHME.md` (and optionally a
//! `PITCHME.yaml`), plus a top-level `PITCHME.md` index that links to each
//! presentation.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan         assets/src/  →  PresentationMapping   (bodies + metadata, by slug)
//! 2. Materialize  mapping      →  out/<slug>/PITCHME.*  (copies)
//! 3. Index        mapping      →  out/PITCHME.md        (link table)
//! 4. Publish      out/         →  git add / commit / push (optional)
//! ```
//!
//! Scan produces the only shared data structure; the later stages read it and
//! never change it. Publishing runs after the build is complete and its
//! outcome never changes the build's result.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source tree, pairs bodies with metadata, builds the mapping |
//! | [`naming`] | Slug rule that turns a file stem into a canonical name |
//! | [`materialize`] | Writes one directory per presentation into the output root |
//! | [`index`] | Column-balanced (or list) index document generation |
//! | [`pipeline`] | Runs scan → materialize → index and reports what it wrote |
//! | [`config`] | `config.toml` loading and validation |
//! | [`git`] | Staging, committing and pushing the output tree |
//! | [`output`] | CLI output formatting for every stage |
//!
//! # Design Decisions
//!
//! ## Deterministic Walk Order
//!
//! Directory entries are visited sorted by file name. Two sources that slug to
//! the same name overwrite each other with the later one winning, and sorting
//! makes "later" the same on every machine. Collisions are reported, not
//! rejected.
//!
//! ## Metadata Is Opaque
//!
//! YAML files are copied byte for byte. GitPitch is the only consumer of
//! their content, so pitchgen never parses them.

pub mod config;
pub mod git;
pub mod index;
pub mod materialize;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
