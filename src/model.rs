//! Data model for extracted header documentation — format-agnostic.

use crate::table::PlaceholderTable;

/// Everything extracted from a single header file.
#[derive(Debug)]
pub struct HeaderDocument {
    /// Path relative to the source root, `/`-separated.
    pub path: String,
    /// Working text after shielding, doc capture and folding.
    pub folded: String,
    /// `&N.` fragments: the `&` escape, literals, block comments
    pub generic: PlaceholderTable,
    /// `&DOCN:` fragments
    pub docs: PlaceholderTable,
    /// `&BLOCKN;` fragments
    pub blocks: PlaceholderTable,
    pub classes: Vec<Declaration>,
    pub functions: Vec<Declaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `class` or `struct`, possibly behind a `template<...>` prefix
    Class,
    /// Anything else with a doc comment: functions, typedefs, variables
    Function,
}

/// A documented top-level statement as it appears in the folded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Index of the preceding doc run in [`HeaderDocument::docs`]
    pub doc: usize,
    /// Doc marker through the terminating `;`
    pub text: String,
}

/// How marker-bearing text is shown on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Display {
    /// Folded text with markers left visible
    #[default]
    Folded,
    /// Markers replaced by the fragments they stand for
    Resolved,
}

/// Renderer input: one page worth of text and declaration listings.
#[derive(Debug, Default)]
pub struct Page {
    pub title: String,
    pub text: String,
    pub classes: Vec<String>,
    pub functions: Vec<String>,
}

impl Page {
    /// Page for a plain-text overview document; no declarations.
    pub fn overview(title: &str, text: &str) -> Self {
        Page {
            title: title.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }
}
