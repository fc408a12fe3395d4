//! CLI output formatting for all pipeline stages.
//!
//! Output leads with the canonical name of each presentation, its positional
//! index in name order, and shows source files as indented context lines so a
//! user can trace every output directory back to the file it came from.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Presentations
//! 001 async-rust
//!     Source: advanced/Async Rust.md
//!     Metadata: advanced/Async Rust.yaml
//! 002 cafe-talk
//!     Source: Café Talk.md
//!     Metadata: common.yaml
//!
//! Index metadata: index.yaml
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 async-rust → async-rust/PITCHME.md (+ PITCHME.yaml)
//! 002 cafe-talk → cafe-talk/PITCHME.md (+ PITCHME.yaml)
//! Index → PITCHME.md (2 presentations, 1 column)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::config::Layout;
use crate::git::PublishOutcome;
use crate::pipeline::BuildReport;
use crate::scan::ScanResult;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Display `path` relative to `root` when it lives under it.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the discovered presentations with their source and metadata files.
pub fn format_scan_output(result: &ScanResult, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Presentations".to_string()];

    if result.presentations.is_empty() {
        lines.push("    (none found)".to_string());
    }
    for (i, (name, item)) in result.presentations.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), name));
        lines.push(format!("    Source: {}", relative(&item.body_path, source_root)));
        if let Some(metadata) = &item.metadata_path {
            lines.push(format!("    Metadata: {}", relative(metadata, source_root)));
        }
    }

    if let Some(index_metadata) = &result.index_metadata {
        lines.push(String::new());
        lines.push(format!(
            "Index metadata: {}",
            relative(index_metadata, source_root)
        ));
    }

    for collision in &result.collisions {
        lines.push(format!(
            "Warning: {} and {} both map to '{}'; keeping {}",
            relative(&collision.replaced.body_path, source_root),
            relative(&collision.by.body_path, source_root),
            collision.name,
            relative(&collision.by.body_path, source_root),
        ));
    }

    lines
}

pub fn print_scan_output(result: &ScanResult, source_root: &Path) {
    for line in format_scan_output(result, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the written presentation directories and the index line.
///
/// Output paths show relative to `out_dir`, collision sources relative to
/// `source_root`.
pub fn format_build_output(
    report: &BuildReport,
    source_root: &Path,
    out_dir: &Path,
) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, item) in report.materialized.iter().enumerate() {
        let extra = if item.metadata.is_some() {
            " (+ PITCHME.yaml)"
        } else {
            ""
        };
        lines.push(format!(
            "{} {} → {}{}",
            format_index(i + 1),
            item.name,
            relative(&item.body, out_dir),
            extra
        ));
    }

    let index = &report.index;
    let shape = match index.layout {
        Layout::Table => plural(index.columns, "column", "columns"),
        Layout::List => "list".to_string(),
    };
    let extra = if index.metadata.is_some() {
        " (+ PITCHME.yaml)"
    } else {
        ""
    };
    lines.push(format!(
        "Index → {} ({}, {}){}",
        relative(&index.path, out_dir),
        plural(index.entries, "presentation", "presentations"),
        shape,
        extra
    ));

    for collision in &report.scan.collisions {
        lines.push(format!(
            "Warning: '{}' was overwritten by {}",
            collision.name,
            relative(&collision.by.body_path, source_root)
        ));
    }

    lines
}

pub fn print_build_output(report: &BuildReport, source_root: &Path, out_dir: &Path) {
    for line in format_build_output(report, source_root, out_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Publish output
// ============================================================================

/// Format the result of the git step.
pub fn format_publish_outcome(outcome: &PublishOutcome) -> Vec<String> {
    match outcome {
        PublishOutcome::StageFailed(e) => vec![
            format!("Adding changes to the git repo failed: {e}"),
            "You will need to commit your changes manually.".to_string(),
        ],
        PublishOutcome::CommitFailed(e) => vec![format!("Commit not made: {e}")],
        PublishOutcome::Committed => vec!["Committed changes.".to_string()],
        PublishOutcome::Pushed => vec!["Committed and pushed changes.".to_string()],
        PublishOutcome::PushFailed(e) => vec![
            "Committed changes.".to_string(),
            format!("Push failed: {e}"),
        ],
    }
}

pub fn print_publish_outcome(outcome: &PublishOutcome) {
    for line in format_publish_outcome(outcome) {
        println!("{}", line);
    }
}

/// Closing reminders after a build.
///
/// `publish` is `None` when git was skipped. A push reminder follows any
/// commit that did not reach the remote.
pub fn format_finish(publish: Option<&PublishOutcome>) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Finished generating your GitPitch presentations.".to_string(),
        "Remember: you must manually remove directories for any presentations that are no longer current."
            .to_string(),
    ];
    if publish.is_some_and(|o| o.committed() && !matches!(o, PublishOutcome::Pushed)) {
        lines.push(String::new());
        lines.push("To publish, perform a `git push` next.".to_string());
    }
    lines
}

pub fn print_finish(publish: Option<&PublishOutcome>) {
    for line in format_finish(publish) {
        println!("{}", line);
    }
}
