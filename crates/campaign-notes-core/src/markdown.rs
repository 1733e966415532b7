//! Markdown to HTML conversion
//!
//! The renderer treats conversion as an opaque `parse(text) -> html`
//! collaborator. Output is trusted and inserted without sanitisation.

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};

/// Converts markdown text into an HTML string
pub trait MarkdownConverter {
    fn parse(&self, text: &str) -> String;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> String,
{
    fn parse(&self, text: &str) -> String {
        self(text)
    }
}

/// Markdown extensions to enable on top of CommonMark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub footnotes: bool,
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: false,
            smart_punctuation: false,
        }
    }
}

impl MarkdownOptions {
    fn to_cmark(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.smart_punctuation {
            options.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        options
    }
}

/// pulldown-cmark backed converter
#[derive(Debug, Clone, Default)]
pub struct CmarkConverter {
    options: MarkdownOptions,
}

impl CmarkConverter {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl MarkdownConverter for CmarkConverter {
    fn parse(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options.to_cmark());
        let mut html_output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}
