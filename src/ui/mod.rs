//! Server-rendered views.
//!
//! Every view is a plain function from its inputs to an HTML string. Global
//! UI state (theme, active mode) arrives through [`ViewContext`]; menus are
//! rendered from the enumerated option lists they display.
//!
//! # Structure
//!
//! - [`components`]: ShadCN-style building blocks (button, card, badge, icons)
//! - [`chat`]: the chat page: header, sidebar, chat area
//! - [`landing`]: marketing page sections
//! - [`dashboard`]: dashboard shell
//! - [`pages`]: full documents assembled from the above

pub mod chat;
pub mod components;
pub mod dashboard;
mod document;
pub mod landing;
pub mod pages;
mod theme;

pub use document::document;
pub use theme::Theme;

use crate::chat::Mode;

/// State every view may read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub theme: Theme,
    pub mode: Mode,
}

impl ViewContext {
    #[must_use]
    pub fn new(theme: Theme, mode: Mode) -> Self {
        Self { theme, mode }
    }
}

/// Escape text for use in HTML content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("As-salamu alaykum"), "As-salamu alaykum");
    }
}
