//! Markup-to-tag translation for `.md` documents.
//!
//! Rewrites a small inline dialect — bold, italic, inline code, and `#`
//! headers — into HTML tags. Translation is pure text-to-text: the input is
//! the paragraph-wrapped body produced by [`crate::content::wrap_paragraphs`]
//! and the output is the finished fragment.
//!
//! The passes run in a fixed order (bold before italic, so `**` pairs are
//! never misread as two italic stars; headers last, over the tag-substituted
//! text). Delimiter runs may not start with whitespace, the delimiter
//! character itself, or `.` — this is what keeps `** bold**` and
//! punctuation-adjacent stars from matching.
//!
//! The header pass is paragraph-aware: a `# ` line swallows the `<p>`/`</p>`
//! markers it sits between and re-balances them, so a heading never ends up
//! inside a paragraph and no paragraph tag is left unopened or unclosed.
//! A header on the very first line also supplies the document title.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `**bold**` or `__bold__`; content may span lines.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*([^\s*.].*?)\*\*|__([^\s_.].*?)__").unwrap());

/// `*italic*` or `_italic_`; content may span lines.
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*([^\s*.].*?)\*|_([^\s_.].*?)_").unwrap());

/// `` `code` ``; content may not contain backticks or raw line breaks.
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\r\n]+)`").unwrap());

/// One to five `#` then a space then the header text, as a full line
/// (paragraph markers are stripped before this is applied).
static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,5}) (.*)$").unwrap());

/// Translate the paragraph-wrapped body of a markup document.
///
/// Returns the title derived from a first-line header (if any) and the
/// translated HTML. The title supersedes any externally detected title; the
/// heading element itself stays in the fragment.
pub fn translate(text: &str) -> (Option<String>, String) {
    let text = BOLD.replace_all(text, |caps: &Captures| paired_tag(caps, "strong"));
    let text = ITALIC.replace_all(&text, |caps: &Captures| paired_tag(caps, "em"));
    let text = CODE.replace_all(&text, "<code>$1</code>");
    rewrite_headers(&text)
}

/// Wrap whichever alternation group matched (`**`-style is group 1,
/// `__`-style is group 2) in the given tag.
fn paired_tag(caps: &Captures, tag: &str) -> String {
    let inner = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map_or("", |m| m.as_str());
    format!("<{tag}>{inner}</{tag}>")
}

/// Replace `# ` lines with heading elements, re-balancing the surrounding
/// paragraph tags.
///
/// The scan tracks two pieces of state: whether an emitted `<p>` is still
/// open, and whether a heading just interrupted a paragraph that continues
/// (in which case the re-opening `<p>` is owed to the next body line). A
/// heading directly following another heading cancels the owed `<p>` instead
/// of emitting an empty paragraph.
fn rewrite_headers(text: &str) -> (Option<String>, String) {
    let mut title = None;
    let mut out: Vec<String> = Vec::new();
    let mut in_paragraph = false;
    let mut pending_open = false;

    for (idx, line) in text.split('\n').enumerate() {
        let (opened, rest) = match line.strip_prefix("<p>") {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let (closed, core) = match rest.strip_suffix("</p>") {
            Some(core) => (true, core),
            None => (false, rest),
        };

        if let Some(caps) = HEADER.captures(core) {
            let level = caps[1].len();
            let header_text = caps[2].to_string();
            if idx == 0 {
                title = Some(header_text.clone());
            }
            if pending_open {
                pending_open = false;
            } else if in_paragraph && !opened {
                out.push("</p>".to_string());
                in_paragraph = false;
            }
            out.push(format!("<h{level}>{header_text}</h{level}>"));
            pending_open = !closed;
        } else {
            let mut rebuilt = String::new();
            if pending_open || opened {
                rebuilt.push_str("<p>");
                in_paragraph = true;
                pending_open = false;
            }
            rebuilt.push_str(core);
            if closed {
                rebuilt.push_str("</p>");
                in_paragraph = false;
            }
            out.push(rebuilt);
        }
    }

    (title, out.join("\n"))
}
