//! Fragment assembly: paragraphs plus per-kind orchestration.
//!
//! [`wrap_paragraphs`] is the shared composing step: blocks separated by a
//! single blank line each become a `<p>` element. [`assemble`] drives the
//! whole per-document transformation — title handling for plain text,
//! compose-then-translate for markup — and yields the body fragment that the
//! page renderer embeds.
//!
//! Ordering note: markup documents are paragraph-wrapped *before* translation.
//! The header pass in [`crate::markup`] relies on the paragraph markers being
//! present so it can re-balance them around headings. The plain-text
//! three-line title rule is never applied to markup documents; their title
//! comes from a leading header, if any.

use crate::markup;
use crate::title;
use crate::types::{FileKind, SourceDocument};

/// The assembled body of one page: the HTML fragment plus the title the
/// document declared, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub title: Option<String>,
    pub html: String,
}

/// Split on exactly two consecutive line breaks and wrap each block in a
/// paragraph element, rejoining with the same blank-line separator.
pub fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|block| format!("<p>{block}</p>"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the content fragment for one document. Deterministic: the same text
/// and kind always produce byte-identical output.
pub fn assemble(doc: &SourceDocument) -> Fragment {
    match doc.kind {
        FileKind::Plain => {
            let title = title::detect_title(&doc.text);
            let body = match title {
                Some(_) => strip_title_lines(&doc.text),
                None => doc.text.as_str(),
            };
            let wrapped = wrap_paragraphs(body);
            let html = match &title {
                Some(t) => format!("<h1>{t}</h1>\n\n\n{wrapped}"),
                None => wrapped,
            };
            Fragment { title, html }
        }
        FileKind::Markup => {
            let wrapped = wrap_paragraphs(&doc.text);
            let (title, html) = markup::translate(&wrapped);
            Fragment { title, html }
        }
    }
}

/// Drop the title line and its two blank separator lines: everything after
/// the third line break.
fn strip_title_lines(text: &str) -> &str {
    text.splitn(4, '\n').nth(3).unwrap_or("")
}
