//! Syntax highlighting for fenced code blocks.
//!
//! Produces inline-styled HTML spans so the output carries no stylesheet
//! dependency. Unknown languages fall back to plain-text highlighting; a
//! per-line highlight failure falls back to the escaped raw line.

use std::fmt::Write;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::state::escape_html;

/// Theme used for inline-styled highlighting.
const THEME: &str = "InspiredGitHub";

/// Highlights fenced code blocks as inline-styled HTML.
pub(crate) struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl CodeHighlighter {
    /// Create a highlighter with the default syntax set and theme.
    pub(crate) fn new() -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults().themes[THEME].clone();
        Self { syntax_set, theme }
    }

    /// Render a language-tagged code block into `out`.
    pub(crate) fn code_block(&self, lang: &str, code: &str, out: &mut String) {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let background = self.theme.settings.background.unwrap_or(Color::WHITE);
        write!(
            out,
            r#"<pre style="background-color:#{:02x}{:02x}{:02x}"><code>"#,
            background.r, background.g, background.b
        )
        .unwrap();

        for line in LinesWithEndings::from(code) {
            let highlighted = highlighter
                .highlight_line(line, &self.syntax_set)
                .ok()
                .and_then(|ranges| {
                    styled_line_to_highlighted_html(&ranges, IncludeBackground::No).ok()
                });
            match highlighted {
                Some(html) => out.push_str(&html),
                None => out.push_str(&escape_html(line)),
            }
        }

        out.push_str("</code></pre>");
    }
}
