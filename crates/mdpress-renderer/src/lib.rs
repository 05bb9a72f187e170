//! Markdown to HTML rendering for mdpress.
//!
//! Converts post body markdown into an HTML fragment suitable as a WordPress
//! post body. Fenced code blocks with a language tag are syntax-highlighted
//! with all styles inlined, so the output has no stylesheet dependency.
//!
//! ```
//! use mdpress_renderer::HtmlRenderer;
//!
//! let mut renderer = HtmlRenderer::new();
//! let html = renderer.render("Body text\n");
//! assert_eq!(html, "<p>Body text</p>");
//! ```

mod highlight;
mod renderer;
mod state;

pub use renderer::HtmlRenderer;
