//! Scoped markup builder.
//!
//! Opening a tag hands back an [`Element`] guard that mutably borrows its
//! parent; the closing tag is written when the guard is closed or dropped.
//! Because a child holds the only borrow of its parent, tags always close
//! innermost-first.

/// Output buffer for one document.
#[derive(Debug, Default)]
pub struct Markup {
    out: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doctype(&mut self, name: &str) {
        self.out.push_str(&format!("<!DOCTYPE {}>\n", name));
    }

    /// Open a block element: open and close tags sit on their own lines.
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Element<'_> {
        self.start(tag, attrs, false)
    }

    /// Open an element whose content stays on the same line as its tags.
    pub fn open_inline(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Element<'_> {
        self.start(tag, attrs, true)
    }

    /// Write a tag with no content and no closing tag.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.write_open_tag(tag, attrs);
        self.out.push('\n');
    }

    pub fn text(&mut self, text: &str) {
        self.out.push_str(&escape(text));
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn start(&mut self, tag: &str, attrs: &[(&str, &str)], inline: bool) -> Element<'_> {
        self.write_open_tag(tag, attrs);
        if !inline {
            self.out.push('\n');
        }
        Element {
            markup: self,
            tag: tag.to_string(),
        }
    }

    fn write_open_tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out
                .push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        self.out.push('>');
    }
}

/// An open tag. Closes itself when dropped.
#[derive(Debug)]
pub struct Element<'a> {
    markup: &'a mut Markup,
    tag: String,
}

impl Element<'_> {
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Element<'_> {
        self.markup.open(tag, attrs)
    }

    pub fn open_inline(&mut self, tag: &str, attrs: &[(&str, &str)]) -> Element<'_> {
        self.markup.open_inline(tag, attrs)
    }

    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.markup.void(tag, attrs);
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.markup.text(text);
        self
    }

    /// Close explicitly; same as letting the guard go out of scope.
    pub fn close(self) {}
}

impl Drop for Element<'_> {
    fn drop(&mut self) {
        self.markup.out.push_str(&format!("</{}>\n", self.tag));
    }
}

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
