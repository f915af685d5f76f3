//! HTML renderer — minimal standalone page with one preformatted block.

use crate::model::Page;
use crate::render::markup::Markup;
use crate::render::{page_body, Renderer};

pub struct HtmlRenderer {
    pub lang: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        HtmlPage::new(&self.lang).render(&page.title, &page_body(page))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

/// A page owns its root markup builder and drives it.
pub struct HtmlPage {
    root: Markup,
    lang: String,
}

impl HtmlPage {
    pub fn new(lang: &str) -> Self {
        Self {
            root: Markup::new(),
            lang: lang.to_string(),
        }
    }

    pub fn render(mut self, title: &str, content: &str) -> String {
        self.root.doctype("html");
        {
            let mut html = self.root.open("html", &[("lang", self.lang.as_str())]);
            {
                let mut head = html.open("head", &[]);
                head.void("meta", &[("charset", "utf-8")]);
                head.open_inline("title", &[]).text(title);
            }
            let mut body = html.open("body", &[]);
            body.open_inline("pre", &[]).text(content);
        }
        self.root.finish()
    }
}
