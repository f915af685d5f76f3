//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod markup;
pub mod text;

use crate::model::Page;
use anyhow::{anyhow, Result};

/// Trait for rendering a Page into a specific output format.
pub trait Renderer {
    fn render(&self, page: &Page) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer::default())),
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or text", format)),
    }
}

/// Preformatted page content: the text, then numbered class and function
/// listings. Empty listings are left out.
pub fn page_body(page: &Page) -> String {
    let mut out = page.text.clone();
    push_listing(&mut out, "Classes", &page.classes);
    push_listing(&mut out, "Functions", &page.functions);
    out
}

fn push_listing(out: &mut String, heading: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", i + 1, entry));
    }
}
