//! Page rendering: embed a content fragment in the fixed HTML5 shell.
//!
//! The shell has five slots — language code, display title, optional
//! stylesheet link, and the body fragment — and is generated with
//! [maud](https://maud.lambda.xyz/) so malformed shell markup is a compile
//! error. Title and fragment are inserted **unescaped** (`PreEscaped`): the
//! assembler produces well-formed HTML and plain titles are trusted input,
//! matching the tool's trusted-content model. The shell itself is well-formed
//! for any string inputs.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Everything the page shell needs, resolved once per file and consumed once.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub lang: &'a str,
    pub display_title: &'a str,
    pub stylesheet: Option<&'a str>,
    pub fragment: &'a str,
}

impl<'a> PageContext<'a> {
    /// Build a context, falling back to the source file name (including
    /// extension) as the display title when the document declared none.
    pub fn new(
        lang: &'a str,
        file_name: &'a str,
        title: Option<&'a str>,
        stylesheet: Option<&'a str>,
        fragment: &'a str,
    ) -> Self {
        PageContext {
            lang,
            display_title: title.unwrap_or(file_name),
            stylesheet,
            fragment,
        }
    }
}

/// Render the full standalone page. Pure: same context, same string.
pub fn render(ctx: &PageContext) -> String {
    page(ctx).into_string()
}

fn page(ctx: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PreEscaped(ctx.display_title)) }
                @if let Some(href) = ctx.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (PreEscaped(ctx.fragment))
            }
        }
    }
}
