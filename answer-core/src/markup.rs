//! Rich-text markup dialects understood by the channel, and verbatim (code-style) rendering.

use crate::error::AnswerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Markup dialect of an outbound reply body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Markup {
    #[default]
    MarkdownV2,
    Html,
}

impl Markup {
    /// Wraps `text` so the channel displays it verbatim in monospace.
    /// Literal markup characters are escaped for this dialect.
    pub fn verbatim(&self, text: &str) -> String {
        match self {
            Markup::MarkdownV2 => format!("`{}`", escape_markdown_v2_code(text)),
            Markup::Html => format!("<code>{}</code>", escape_html(text)),
        }
    }
}

/// Inside MarkdownV2 code entities only '`' and '\' need a preceding backslash.
fn escape_markdown_v2_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '`' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::MarkdownV2 => f.write_str("markdownv2"),
            Markup::Html => f.write_str("html"),
        }
    }
}

impl FromStr for Markup {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdownv2" | "markdown_v2" | "markdown" => Ok(Markup::MarkdownV2),
            "html" => Ok(Markup::Html),
            other => Err(AnswerError::Config(format!(
                "unknown reply markup '{}', expected markdownv2 or html",
                other
            ))),
        }
    }
}
