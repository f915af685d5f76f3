//! Plain-text renderer — the preformatted content without markup.

use crate::model::Page;
use crate::render::{page_body, Renderer};

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, page: &Page) -> String {
        let mut out = format!("{}\n\n", page.title);
        out.push_str(&page_body(page));
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
