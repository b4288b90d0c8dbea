//! Batch site generation.
//!
//! Drives the per-file pipeline over one input file or a folder of inputs:
//!
//! ```text
//! read → assemble (title + fragment) → render → write {name}.html
//! ```
//!
//! The output root is deleted and recreated before the first write, so every
//! run starts from a clean slate. A stylesheet configured as a local file is
//! copied into `assets/` under the output root and pages link to it there;
//! anything else (a URL) is linked verbatim.
//!
//! Files are independent, so the loop runs in parallel with rayon. Each file
//! writes to its own destination path and failures are isolated: one
//! unreadable file lands in [`BuildSummary::failed`] and the rest of the
//! batch still builds.

use crate::config::SiteConfig;
use crate::content;
use crate::render::{self, PageContext};
use crate::types::{FileKind, SourceDocument};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input path does not exist: {0}")]
    InputNotFound(PathBuf),
}

/// One successfully generated page.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Title the document declared, if any (display fell back to the file
    /// name otherwise).
    pub title: Option<String>,
}

/// A file that could not be transformed. The batch continues past it.
#[derive(Debug, Clone)]
pub struct FailedPage {
    pub source: PathBuf,
    pub reason: String,
}

/// Outcome of one run: what was written, what was skipped as unsupported,
/// and what failed.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub pages: Vec<GeneratedPage>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedPage>,
}

enum PageOutcome {
    Written(GeneratedPage),
    Skipped(PathBuf),
}

/// Run the full batch. Fails outright only for run-level problems (missing
/// input path, unusable output root); per-file problems are collected in the
/// summary instead.
pub fn build(config: &SiteConfig) -> Result<BuildSummary, GenerateError> {
    let input = &config.input;
    if !input.exists() {
        return Err(GenerateError::InputNotFound(input.clone()));
    }

    let sources = if input.is_dir() {
        list_accepted_files(input)?
    } else {
        // Single file: acceptance is checked per file, so an unsupported
        // extension is reported as skipped rather than failing the run.
        vec![input.clone()]
    };

    // a.txt and a.md both map to a.html; only one writer per destination may
    // enter the parallel loop, so losers are failed up front.
    let (sources, collisions) = split_colliding_destinations(sources);

    reset_output_root(&config.out_dir)?;
    let stylesheet_href = stage_stylesheet(config)?;

    let results: Vec<Result<PageOutcome, FailedPage>> = sources
        .par_iter()
        .map(|source| {
            build_page(source, config, stylesheet_href.as_deref()).map_err(|err| FailedPage {
                source: source.clone(),
                reason: err.to_string(),
            })
        })
        .collect();

    let mut summary = BuildSummary::default();
    for result in results {
        match result {
            Ok(PageOutcome::Written(page)) => summary.pages.push(page),
            Ok(PageOutcome::Skipped(path)) => summary.skipped.push(path),
            Err(failed) => summary.failed.push(failed),
        }
    }
    for (source, winner) in collisions {
        summary.failed.push(FailedPage {
            reason: format!(
                "output path collides with {}",
                winner.display()
            ),
            source,
        });
    }
    Ok(summary)
}

/// Split out sources whose output file name is already claimed by an earlier
/// source in listing order. The first claimant keeps the destination; later
/// ones are returned paired with the winning source.
fn split_colliding_destinations(sources: Vec<PathBuf>) -> (Vec<PathBuf>, Vec<(PathBuf, PathBuf)>) {
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut unique = Vec::new();
    let mut collisions = Vec::new();
    for source in sources {
        let dest = source
            .file_name()
            .map(|name| Path::new(name).with_extension("html"))
            .unwrap_or_default();
        match claimed.get(&dest) {
            Some(winner) => collisions.push((source, winner.clone())),
            None => {
                claimed.insert(dest, source.clone());
                unique.push(source);
            }
        }
    }
    (unique, collisions)
}

/// Non-recursive listing of the accepted files in a folder, sorted so
/// reporting is deterministic (processing order carries no meaning).
fn list_accepted_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && FileKind::from_path(path).is_some())
        .collect();
    files.sort();
    Ok(files)
}

/// Discard any previous output and start fresh.
fn reset_output_root(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)
}

/// Resolve the stylesheet reference pages should link to. A local file is
/// copied into `assets/` under the output root; URLs pass through untouched.
fn stage_stylesheet(config: &SiteConfig) -> io::Result<Option<String>> {
    let Some(stylesheet) = &config.stylesheet else {
        return Ok(None);
    };
    let source = Path::new(stylesheet);
    let Some(name) = source.file_name().filter(|_| source.is_file()) else {
        return Ok(Some(stylesheet.clone()));
    };
    let assets = config.out_dir.join("assets");
    fs::create_dir_all(&assets)?;
    fs::copy(source, assets.join(name))?;
    Ok(Some(format!("assets/{}", name.to_string_lossy())))
}

/// Transform one source file into one written page.
fn build_page(
    source: &Path,
    config: &SiteConfig,
    stylesheet: Option<&str>,
) -> io::Result<PageOutcome> {
    let Some(doc) = SourceDocument::read(source)? else {
        return Ok(PageOutcome::Skipped(source.to_path_buf()));
    };

    let fragment = content::assemble(&doc);
    let file_name = doc.file_name();
    let ctx = PageContext::new(
        &config.lang,
        &file_name,
        fragment.title.as_deref(),
        stylesheet,
        &fragment.html,
    );
    let html = render::render(&ctx);

    let dest = config
        .out_dir
        .join(Path::new(&file_name).with_extension("html"));
    fs::write(&dest, html)?;

    Ok(PageOutcome::Written(GeneratedPage {
        source: source.to_path_buf(),
        dest,
        title: fragment.title,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(input: PathBuf, out_dir: PathBuf) -> SiteConfig {
        SiteConfig {
            input,
            lang: "en".to_string(),
            stylesheet: None,
            out_dir,
        }
    }

    #[test]
    fn folder_input_builds_accepted_files() {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("a.txt"), "Title\n\n\nbody").unwrap();
        fs::write(content_dir.join("b.md"), "# B\n\n**bold**").unwrap();
        fs::write(content_dir.join("ignored.docx"), "nope").unwrap();

        let config = test_config(content_dir, tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        assert_eq!(summary.pages.len(), 2);
        assert!(summary.failed.is_empty());
        assert!(config.out_dir.join("a.html").is_file());
        assert!(config.out_dir.join("b.html").is_file());
        assert!(!config.out_dir.join("ignored.html").exists());
    }

    #[test]
    fn single_file_input() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("page.txt");
        fs::write(&file, "My Title\n\n\nsome text").unwrap();

        let config = test_config(file, tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        assert_eq!(summary.pages.len(), 1);
        assert_eq!(summary.pages[0].title.as_deref(), Some("My Title"));
        let html = fs::read_to_string(config.out_dir.join("page.html")).unwrap();
        assert!(html.contains("<title>My Title</title>"));
        assert!(html.contains("<h1>My Title</h1>"));
    }

    #[test]
    fn single_unsupported_file_is_skipped_not_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("page.docx");
        fs::write(&file, "text").unwrap();

        let config = test_config(file.clone(), tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        assert!(summary.pages.is_empty());
        assert!(summary.failed.is_empty());
        assert_eq!(summary.skipped, vec![file]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path().join("nope"), tmp.path().join("dist"));
        assert!(matches!(
            build(&config),
            Err(GenerateError::InputNotFound(_))
        ));
    }

    #[test]
    fn output_root_recreated_fresh() {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("a.txt"), "text").unwrap();

        let out = tmp.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.html"), "old run").unwrap();

        let config = test_config(content_dir, out.clone());
        build(&config).unwrap();

        assert!(!out.join("stale.html").exists());
        assert!(out.join("a.html").is_file());
    }

    #[test]
    fn one_bad_file_does_not_abort_the_batch() {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("good.txt"), "fine").unwrap();
        // Invalid UTF-8 makes read_to_string fail for this file only.
        fs::write(content_dir.join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let config = test_config(content_dir, tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        assert_eq!(summary.pages.len(), 1);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].source.ends_with("bad.txt"));
        assert!(config.out_dir.join("good.html").is_file());
    }

    #[test]
    fn stylesheet_url_linked_verbatim() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "text").unwrap();

        let mut config = test_config(file, tmp.path().join("dist"));
        config.stylesheet = Some("https://example.com/main.css".to_string());
        build(&config).unwrap();

        let html = fs::read_to_string(config.out_dir.join("a.html")).unwrap();
        assert!(html.contains(r#"href="https://example.com/main.css""#));
    }

    #[test]
    fn local_stylesheet_copied_into_assets() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "text").unwrap();
        let css = tmp.path().join("main.css");
        fs::write(&css, "body { margin: 0 }").unwrap();

        let mut config = test_config(file, tmp.path().join("dist"));
        config.stylesheet = Some(css.to_string_lossy().into_owned());
        build(&config).unwrap();

        assert!(config.out_dir.join("assets/main.css").is_file());
        let html = fs::read_to_string(config.out_dir.join("a.html")).unwrap();
        assert!(html.contains(r#"href="assets/main.css""#));
    }

    #[test]
    fn untitled_page_uses_file_name_in_title() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "just one line").unwrap();

        let config = test_config(file, tmp.path().join("dist"));
        build(&config).unwrap();

        let html = fs::read_to_string(config.out_dir.join("notes.html")).unwrap();
        assert!(html.contains("<title>notes.txt</title>"));
    }

    #[test]
    fn crlf_file_builds_like_lf() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("windows.txt");
        fs::write(&file, "Title\r\n\r\n\r\none\r\n\r\ntwo").unwrap();

        let config = test_config(file, tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        assert_eq!(summary.pages[0].title.as_deref(), Some("Title"));
        let html = fs::read_to_string(config.out_dir.join("windows.html")).unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>one</p>\n\n<p>two</p>"));
    }

    #[test]
    fn colliding_destinations_build_only_one_page() {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("a.md"), "# From Markdown").unwrap();
        fs::write(content_dir.join("a.txt"), "plain text").unwrap();

        let config = test_config(content_dir, tmp.path().join("dist"));
        let summary = build(&config).unwrap();

        // a.md wins (first in listing order); a.txt is failed, not raced.
        assert_eq!(summary.pages.len(), 1);
        assert!(summary.pages[0].source.ends_with("a.md"));
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].source.ends_with("a.txt"));
        assert!(summary.failed[0].reason.contains("collides"));

        let html = fs::read_to_string(config.out_dir.join("a.html")).unwrap();
        assert!(html.contains("<h1>From Markdown</h1>"));
    }

    #[test]
    fn listing_ignores_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let content_dir = tmp.path().join("content");
        fs::create_dir_all(content_dir.join("nested.txt")).unwrap();
        fs::write(content_dir.join("a.txt"), "text").unwrap();

        let files = list_accepted_files(&content_dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }
}
