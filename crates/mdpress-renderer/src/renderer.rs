//! Markdown to HTML event-loop renderer.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::highlight::CodeHighlighter;
use crate::state::{CodeBlockState, ImageState, escape_html};

/// Markdown to HTML renderer.
///
/// Produces an HTML fragment from CommonMark input. No GFM extensions are
/// enabled; fenced code blocks with a language tag are syntax-highlighted
/// with inline styles, untagged blocks become plain `<pre><code>`.
pub struct HtmlRenderer {
    output: String,
    code: CodeBlockState,
    image: ImageState,
    list_stack: Vec<bool>,
    pending_image: Option<(String, String)>,
    highlighter: CodeHighlighter,
}

impl HtmlRenderer {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            image: ImageState::default(),
            list_stack: Vec::new(),
            pending_image: None,
            highlighter: CodeHighlighter::new(),
        }
    }

    /// Render markdown text to an HTML fragment.
    pub fn render(&mut self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::empty());
        for event in parser {
            self.process_event(event);
        }
        std::mem::take(&mut self.output).trim().to_owned()
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.output.push('\n'),
            Event::HardBreak => self.output.push_str("<br />"),
            Event::Rule => self.output.push_str("<hr />\n"),
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                write!(self.output, "<h{}>", heading_level_to_num(*level)).unwrap();
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>\n"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => {
                        fence_language(info).map(str::to_owned)
                    }
                    _ => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => {
                self.list_stack.push(start.is_some());
                match start {
                    Some(1) => self.output.push_str("<ol>\n"),
                    Some(n) => writeln!(self.output, r#"<ol start="{n}">"#).unwrap(),
                    None => self.output.push_str("<ul>\n"),
                }
            }
            Tag::Item => self.output.push_str("<li>"),
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Link { dest_url, .. } => {
                write!(self.output, r#"<a href="{}">"#, escape_html(dest_url)).unwrap();
            }
            Tag::Image { dest_url, title, .. } => {
                // Start collecting alt text; image is rendered in end_tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                writeln!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>\n"),
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                match lang {
                    Some(lang) => self.highlighter.code_block(&lang, &content, &mut self.output),
                    None => {
                        write!(
                            self.output,
                            "<pre><code>{}</code></pre>",
                            escape_html(&content)
                        )
                        .unwrap();
                    }
                }
                self.output.push('\n');
            }
            TagEnd::List(_) => {
                let ordered = self.list_stack.pop().unwrap_or(false);
                self.output
                    .push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
            }
            TagEnd::Item => self.output.push_str("</li>\n"),
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Link => self.output.push_str("</a>"),
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, escape_html(&title))
                    };
                    write!(
                        self.output,
                        r#"<img src="{}"{title_attr} alt="{}">"#,
                        escape_html(&src),
                        escape_html(&alt)
                    )
                    .unwrap();
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            // Alt text collects raw; it is escaped once at emission.
            self.image.push_str(text);
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// First token of a fence info string (e.g., "rust" from "rust,no_run").
fn fence_language(info: &str) -> Option<&str> {
    info.split([',', ' ']).next().filter(|l| !l.is_empty())
}

/// Convert a pulldown-cmark heading level to its numeric value.
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str) -> String {
        HtmlRenderer::new().render(markdown)
    }

    #[test]
    fn paragraph() {
        assert_eq!(render("Body text\n"), "<p>Body text</p>");
    }

    #[test]
    fn headings() {
        assert_eq!(render("## Section\n"), "<h2>Section</h2>");
    }

    #[test]
    fn emphasis_and_strong() {
        assert_eq!(
            render("*em* and **strong**\n"),
            "<p><em>em</em> and <strong>strong</strong></p>"
        );
    }

    #[test]
    fn inline_code_escaped() {
        assert_eq!(
            render("Use `a < b` here\n"),
            "<p>Use <code>a &lt; b</code> here</p>"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            render("[site](https://example.com)\n"),
            r#"<p><a href="https://example.com">site</a></p>"#
        );
    }

    #[test]
    fn image_with_alt() {
        assert_eq!(
            render("![alt text](img.png)\n"),
            r#"<p><img src="img.png" alt="alt text"></p>"#
        );
    }

    #[test]
    fn image_alt_is_escaped_exactly_once() {
        assert_eq!(
            render("![a & b](img.png)\n"),
            r#"<p><img src="img.png" alt="a &amp; b"></p>"#
        );
    }

    #[test]
    fn image_alt_with_angle_brackets() {
        assert_eq!(
            render("![a < b](img.png)\n"),
            r#"<p><img src="img.png" alt="a &lt; b"></p>"#
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            render("- one\n- two\n"),
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn blockquote() {
        assert_eq!(render("> quoted\n"), "<blockquote>\n<p>quoted</p></blockquote>");
    }

    #[test]
    fn untagged_fence_preserves_literal_code() {
        let html = render("```\ncode\n```\n");
        assert_eq!(html, "<pre><code>code\n</code></pre>");
    }

    #[test]
    fn untagged_fence_escapes_content() {
        let html = render("```\na < b\n```\n");
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn tagged_fence_is_inline_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.starts_with(r#"<pre style="background-color:#"#));
        assert!(html.contains("fn"));
        assert!(html.contains("main"));
        assert!(!html.contains("class="));
    }

    #[test]
    fn fence_info_with_attributes_uses_first_token() {
        assert_eq!(fence_language("rust,no_run"), Some("rust"));
        assert_eq!(fence_language("python title"), Some("python"));
        assert_eq!(fence_language(""), None);
    }

    #[test]
    fn text_outside_code_is_escaped() {
        assert_eq!(render("a & b\n"), "<p>a &amp; b</p>");
    }

    #[test]
    fn gfm_tables_are_not_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(!html.contains("<table>"));
    }
}
