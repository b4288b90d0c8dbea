//! Shared types for the per-file pipeline.
//!
//! A [`SourceDocument`] is one input file held in memory: path, detected
//! [`FileKind`], and raw text. Documents are created by [`SourceDocument::read`],
//! transformed once, and discarded — nothing is cached across runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The two accepted input dialects, derived from the file extension.
///
/// Acceptance lives here rather than in a process-wide extension list:
/// a path either maps to a kind or the file is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.txt` — paragraphs only, with the strict three-line title rule.
    Plain,
    /// `.md` — paragraphs plus inline markup and headers.
    Markup,
}

impl FileKind {
    /// Map an extension to a kind. Case-insensitive. `None` means the file
    /// is not accepted and should be reported as skipped, not as an error.
    pub fn from_path(path: &Path) -> Option<FileKind> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("txt") {
            Some(FileKind::Plain)
        } else if ext.eq_ignore_ascii_case("md") {
            Some(FileKind::Markup)
        } else {
            None
        }
    }
}

/// One input file read into memory.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub kind: FileKind,
    pub text: String,
}

impl SourceDocument {
    /// Read a file into a document. Returns `Ok(None)` when the extension is
    /// not accepted — the caller skips the file and the batch continues.
    ///
    /// Line endings are normalized here, once: the composer splits paragraphs
    /// on `"\n\n"`, so `\r\n` must never reach the pipeline.
    pub fn read(path: &Path) -> io::Result<Option<SourceDocument>> {
        let Some(kind) = FileKind::from_path(path) else {
            return Ok(None);
        };
        let text = fs::read_to_string(path)?.replace("\r\n", "\n");
        Ok(Some(SourceDocument {
            path: path.to_path_buf(),
            kind,
            text,
        }))
    }

    /// The source file name including extension, used as the display-title
    /// fallback and to derive the output file name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
