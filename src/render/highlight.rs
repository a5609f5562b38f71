//! ANSI syntax highlighting (optional `color` feature)

use owo_colors::OwoColorize;
use regex::Regex;

use crate::render::Renderer;

/// Line-oriented highlighter for the bundled listings.
///
/// Comment lines (`//`, `#`, `%`, `--`) are colored whole; elsewhere string
/// literals and a small cross-language keyword set are styled. Unknown
/// syntax passes through untouched, so any payload is safe to render.
pub struct AnsiRenderer {
    keyword: Regex,
    string_lit: Regex,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self {
            keyword: Regex::new(
                r"\b(fn|let|mut|pub|use|struct|enum|impl|match|if|else|while|for|in|loop|return|def|class|import|lambda|not)\b",
            )
            .expect("static pattern"),
            string_lit: Regex::new(r#""[^"\n]*""#).expect("static pattern"),
        }
    }

    fn render_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//")
            || trimmed.starts_with('#')
            || trimmed.starts_with('%')
            || trimmed.starts_with("--")
        {
            return line.green().to_string();
        }

        let mut out = String::new();
        let mut last = 0;
        for m in self.string_lit.find_iter(line) {
            out.push_str(&self.color_keywords(&line[last..m.start()]));
            out.push_str(&m.as_str().yellow().to_string());
            last = m.end();
        }
        out.push_str(&self.color_keywords(&line[last..]));
        out
    }

    fn color_keywords(&self, text: &str) -> String {
        self.keyword
            .replace_all(text, |caps: &regex::Captures| caps[0].blue().to_string())
            .into_owned()
    }
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for AnsiRenderer {
    fn render(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        for (i, line) in source.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.render_line(line));
        }
        if source.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines_are_styled() {
        let r = AnsiRenderer::new();
        let rendered = r.render("// a comment\n");
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("a comment"));
    }

    #[test]
    fn test_keywords_are_styled() {
        let r = AnsiRenderer::new();
        let rendered = r.render("fn main() {}");
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("main"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        let r = AnsiRenderer::new();
        assert_eq!(r.render("just words"), "just words");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let r = AnsiRenderer::new();
        assert!(r.render("a\nb\n").ends_with('\n'));
        assert!(!r.render("a\nb").ends_with('\n'));
    }
}
