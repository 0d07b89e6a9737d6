//! Document — the text editor's single Markdown buffer.

use pulldown_cmark::{Event, Options, Parser, html};
use serde::Serialize;

pub const DEFAULT_DOCUMENT: &str = "# New Document\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    text: String,
}

impl Default for Document {
    fn default() -> Self {
        Self { text: DEFAULT_DOCUMENT.to_owned() }
    }
}

impl Document {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole buffer with edited text.
    #[must_use]
    pub fn replace(&self, text: String) -> Self {
        Self { text }
    }

    /// Concatenate generated text onto the buffer, with no separator.
    #[must_use]
    pub fn append(&self, generated: &str) -> Self {
        let mut text = String::with_capacity(self.text.len() + generated.len());
        text.push_str(&self.text);
        text.push_str(generated);
        Self { text }
    }

    /// Markdown export: the buffer, verbatim.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        self.text.clone()
    }

    /// Render the buffer for the preview pane.
    #[must_use]
    pub fn preview_html(&self) -> String {
        render_markdown_html(&self.text)
    }
}

/// Render Markdown to HTML, dropping any raw HTML from the source.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "document_test.rs"]
mod tests;
