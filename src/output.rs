//! CLI output formatting for build runs.
//!
//! Output is information-centric: the primary line for each page is its
//! positional index, display identity (declared title, or the file name when
//! none), and destination, with the source path as indented context:
//!
//! ```text
//! Pages
//! 001 Silver Blaze → silverblaze.html
//!     Source: content/silverblaze.txt
//!
//! Skipped
//!     content/raw.docx (unsupported file type)
//!
//! Generated 1 page, 1 skipped
//! ```
//!
//! Format functions are pure (`Vec<String>`, no I/O) so they are testable;
//! `print_*` wrappers write to stdout.

use crate::generate::BuildSummary;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Singular/plural unit for summary lines.
fn count(n: usize, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Format the result of one build run.
pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();

    if !summary.pages.is_empty() {
        lines.push("Pages".to_string());
        for (idx, page) in summary.pages.iter().enumerate() {
            let identity = page.title.clone().unwrap_or_else(|| {
                page.source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
            let dest = page
                .dest
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(format!("{} {} → {}", format_index(idx + 1), identity, dest));
            lines.push(format!("    Source: {}", display_path(&page.source)));
        }
    }

    if !summary.skipped.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Skipped".to_string());
        for path in &summary.skipped {
            lines.push(format!(
                "    {} (unsupported file type)",
                display_path(path)
            ));
        }
    }

    if !summary.failed.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Failed".to_string());
        for failed in &summary.failed {
            lines.push(format!(
                "    {}: {}",
                display_path(&failed.source),
                failed.reason
            ));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let mut totals = vec![count(summary.pages.len(), "page")];
    if !summary.skipped.is_empty() {
        totals.push(format!("{} skipped", summary.skipped.len()));
    }
    if !summary.failed.is_empty() {
        totals.push(format!("{} failed", summary.failed.len()));
    }
    lines.push(format!("Generated {}", totals.join(", ")));

    lines
}

/// Print the build output to stdout.
pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}
