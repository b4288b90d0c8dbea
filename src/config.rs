//! Run configuration: CLI flags merged with an optional JSON config file.
//!
//! The config file is a flat JSON object; each key also accepts the short
//! CLI alias:
//!
//! ```json
//! {
//!     "input": "writing/",
//!     "lang": "fr",
//!     "stylesheet": "https://example.com/main.css"
//! }
//! ```
//!
//! Values set in the file override the command-line flags. An empty config
//! file and a missing input are both fatal before any file is processed.
//! Unknown keys are rejected to catch typos early.
//!
//! The resolved [`SiteConfig`] is threaded through the pipeline explicitly —
//! there are no process-wide output-directory or extension globals.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default language code for the `<html lang>` attribute.
pub const DEFAULT_LANG: &str = "en";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config file is empty")]
    EmptyConfig,
    #[error("no input file or folder specified")]
    MissingInput,
}

/// The JSON config file. Every field is optional; set fields override the
/// corresponding CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "i")]
    pub input: Option<String>,
    #[serde(alias = "l")]
    pub lang: Option<String>,
    #[serde(alias = "s")]
    pub stylesheet: Option<String>,
}

/// The fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// A single accepted file, or a folder of them.
    pub input: PathBuf,
    /// Language code for every generated page.
    pub lang: String,
    /// Stylesheet URL or local file path; omitted from pages when `None`.
    pub stylesheet: Option<String>,
    /// Output root, recreated fresh on every run.
    pub out_dir: PathBuf,
}

/// Merge CLI flags with an optional config file and validate the result.
///
/// Precedence: config-file values override flags; flags override defaults.
/// Fails when no input remains after merging.
pub fn resolve(
    input: Option<PathBuf>,
    lang: Option<String>,
    stylesheet: Option<String>,
    config_path: Option<&Path>,
    out_dir: PathBuf,
) -> Result<SiteConfig, ConfigError> {
    let mut input = input;
    let mut lang = lang;
    let mut stylesheet = stylesheet;

    if let Some(path) = config_path {
        let file = load_config_file(path)?;
        if let Some(value) = file.input {
            input = Some(PathBuf::from(value));
        }
        if let Some(value) = file.lang {
            lang = Some(value);
        }
        if let Some(value) = file.stylesheet {
            stylesheet = Some(value);
        }
    }

    let input = match input {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Err(ConfigError::MissingInput),
    };

    Ok(SiteConfig {
        input,
        lang: lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
        stylesheet: stylesheet.filter(|s| !s.is_empty()),
        out_dir,
    })
}

/// Load and parse the JSON config file. An empty object is an error — a
/// config file that configures nothing is a mistake, not a default run. A
/// non-object top level (array, string, ...) fails deserialization and is
/// reported as a parse error.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    if value.as_object().is_some_and(|object| object.is_empty()) {
        return Err(ConfigError::EmptyConfig);
    }
    Ok(serde_json::from_value(value)?)
}
