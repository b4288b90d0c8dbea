//! # Simple Site
//!
//! A minimal static site generator for plain-text and markdown notes. Point
//! it at a `.txt`/`.md` file or a folder of them and it writes one standalone
//! HTML page per input into a fresh output directory.
//!
//! # Architecture: One Pass Per File
//!
//! Every accepted file goes through the same pure pipeline:
//!
//! ```text
//! read → detect title → compose paragraphs / translate markup → render shell → write
//! ```
//!
//! The transformation of one file is a deterministic function of its text —
//! no caching, no state shared between files — so the batch loop runs the
//! files in parallel without changing the output.
//!
//! Two input dialects are accepted:
//!
//! - **Plain text** (`.txt`): blank-line-separated paragraphs. A first line
//!   followed by exactly two blank lines is promoted to the page title and an
//!   `<h1>` heading (see [`title`] for the strict rule).
//! - **Markup** (`.md`): paragraphs plus a small inline dialect — bold,
//!   italic, inline code, and `#` headers — translated by pattern
//!   substitution (see [`markup`]). A header on the first line becomes the
//!   page title.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `FileKind` and `SourceDocument` — what counts as an input |
//! | [`title`] | Plain-text title detection (first-three-lines rule) |
//! | [`markup`] | Inline/header markup → HTML tag translation |
//! | [`content`] | Paragraph composing and per-document fragment assembly |
//! | [`render`] | The fixed HTML5 page shell, built with Maud |
//! | [`config`] | CLI flags + JSON config file → one resolved `SiteConfig` |
//! | [`generate`] | Batch glue: listing, fresh output root, parallel build |
//! | [`output`] | CLI reporting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Trusted Input, No Escaping
//!
//! Titles and body text are inserted into the page verbatim. The tool exists
//! to publish your own notes; if a note contains an angle bracket, that is
//! what ends up on the page. The shell markup around the content is generated
//! with [Maud](https://maud.lambda.xyz/), so the skeleton itself is always
//! well-formed.
//!
//! ## Pattern Substitution Over a Markdown Engine
//!
//! The markup dialect is deliberately tiny and its matching rules (delimiter
//! adjacency, five header levels, paragraph-aware header placement) are part
//! of the tool's contract. A CommonMark engine would accept far more and
//! produce different output, so translation is a handful of compiled
//! patterns behind a pure text-in/text-out function.
//!
//! ## Fresh Output Every Run
//!
//! The output root is deleted and recreated on each run. Pages are cheap to
//! regenerate and stale output is worse than a rebuild.

pub mod config;
pub mod content;
pub mod generate;
pub mod markup;
pub mod output;
pub mod render;
pub mod title;
pub mod types;
