//! Header parser — filter candidate paths and run the extraction pipeline.
//!
//! shield → doc-comment capture → brace folding → classification

pub mod classify;
pub mod doc_comment;
pub mod fold;
pub mod resolve;
pub mod shield;

pub use crate::model::HeaderDocument;
use crate::model::{Display, Page};
use thiserror::Error;

/// Why a candidate file produced no [`HeaderDocument`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("not a .{extension} header: {path}")]
    WrongExtension { path: String, extension: String },
    #[error("implementation file (matches {pattern:?}): {path}")]
    ImplementationFile { path: String, pattern: String },
}

/// Decides which candidate paths are headers worth documenting.
#[derive(Debug, Clone)]
pub struct HeaderFilter {
    /// Header extension without the leading dot.
    pub extension: String,
    /// Substring marking implementation files.
    pub impl_pattern: String,
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self {
            extension: "hh".to_string(),
            impl_pattern: "_impl".to_string(),
        }
    }
}

impl HeaderFilter {
    /// Accept `path` or say why not. The extension is checked first.
    pub fn check(&self, path: &str) -> Result<(), Rejection> {
        let suffix = format!(".{}", self.extension);
        if !path.ends_with(&suffix) {
            return Err(Rejection::WrongExtension {
                path: path.to_string(),
                extension: self.extension.clone(),
            });
        }
        if !self.impl_pattern.is_empty() && path.contains(&self.impl_pattern) {
            return Err(Rejection::ImplementationFile {
                path: path.to_string(),
                pattern: self.impl_pattern.clone(),
            });
        }
        Ok(())
    }
}

/// Filter `path`, then extract its documentation.
pub fn parse_header(
    path: &str,
    content: &str,
    filter: &HeaderFilter,
) -> Result<HeaderDocument, Rejection> {
    filter.check(path)?;
    Ok(HeaderDocument::build(path, content))
}

impl HeaderDocument {
    /// Run the full pipeline over `content`. Never fails: anything the
    /// passes cannot match is left in the folded text.
    pub fn build(path: &str, content: &str) -> Self {
        let mut shielder = shield::Shielder::new();
        let shielded = shielder.shield(content);
        let (captured, docs) = doc_comment::capture(&shielded);
        let (folded, blocks) = fold::fold(&captured);
        let (classes, functions) = classify::classify(&folded);

        HeaderDocument {
            path: path.to_string(),
            folded,
            generic: shielder.into_table(),
            docs,
            blocks,
            classes,
            functions,
        }
    }

    /// Renderer view of this document.
    pub fn page(&self, display: Display) -> Page {
        let show = |text: &str| match display {
            Display::Folded => text.to_string(),
            Display::Resolved => self.resolve(text),
        };
        Page {
            title: self.path.clone(),
            text: show(&self.folded),
            classes: self.classes.iter().map(|d| show(&d.text)).collect(),
            functions: self.functions.iter().map(|d| show(&d.text)).collect(),
        }
    }
}
