use clap::Parser;
use simple_site::{config, generate, output};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "simple-site")]
#[command(about = "Static site generator for plain-text and markdown notes")]
#[command(long_about = "\
Static site generator for plain-text and markdown notes

Give it a .txt or .md file, or a folder of them, and it writes one standalone
HTML page per input into the output directory (recreated fresh on every run).

Plain text (.txt):
  Paragraphs are separated by blank lines. A first line followed by exactly
  two blank lines becomes the page title and an <h1> heading.

Markup (.md):
  **bold** / __bold__, *italic* / _italic_, `code`, and # through ##### header
  lines. A header on the first line becomes the page title.

Flags may also come from a JSON config file (-c); values set in the file
override the flags. Keys: input/i, lang/l, stylesheet/s.")]
#[command(version)]
struct Cli {
    /// A .txt/.md file, or a folder of them
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Stylesheet URL, or a local file copied into the output's assets/
    #[arg(short, long)]
    stylesheet: Option<String>,

    /// Language code for the html lang attribute [default: en]
    #[arg(short, long)]
    lang: Option<String>,

    /// JSON config file; its values override the other flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory, recreated fresh on every run
    #[arg(short, long, default_value = "dist")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration problems are fatal before any file is touched, with an
    // exit status distinct from build failures.
    let site = match config::resolve(
        cli.input,
        cli.lang,
        cli.stylesheet,
        cli.config.as_deref(),
        cli.output,
    ) {
        Ok(site) => site,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            return ExitCode::from(2);
        }
    };

    match generate::build(&site) {
        Ok(summary) => {
            output::print_build_output(&summary);
            if summary.failed.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
