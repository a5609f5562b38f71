//! Presentation layer for snippets
//!
//! Rendering is a capability behind the [`Renderer`] trait. The plain
//! renderer is always available and returns the stored text verbatim; the
//! ANSI syntax highlighter is compiled in only with the `color` feature.
//! Displaying a snippet therefore never fails: without the feature the
//! output is byte-identical to [`Snippet::source`].

use crate::snippet::Snippet;

#[cfg(feature = "color")]
pub mod highlight;

#[cfg(feature = "color")]
pub use highlight::AnsiRenderer;

/// Renders a source listing for presentation
pub trait Renderer {
    fn render(&self, source: &str) -> String;
}

/// The fallback renderer: output equals input
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, source: &str) -> String {
        source.to_string()
    }
}

/// The best renderer available in this build
pub fn default_renderer() -> Box<dyn Renderer> {
    #[cfg(feature = "color")]
    return Box::new(AnsiRenderer::new());
    #[cfg(not(feature = "color"))]
    Box::new(PlainRenderer)
}

/// Render a snippet's text with the best renderer available
pub fn display(snippet: &Snippet) -> String {
    default_renderer().render(snippet.source())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer_is_verbatim() {
        let text = "fn dfs() {}\n  // inner\n";
        assert_eq!(PlainRenderer.render(text), text);
    }

    #[cfg(not(feature = "color"))]
    #[test]
    fn test_display_falls_back_to_source() {
        let s = Snippet::with_description("let x = 1;\n", "One");
        assert_eq!(display(&s), s.source());
    }

    #[test]
    fn test_display_never_drops_content() {
        let s = Snippet::new("alpha beta gamma");
        let rendered = display(&s);
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("gamma"));
    }
}
