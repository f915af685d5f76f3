//! Placeholder tables — append-only fragment stores addressed by markers.
//!
//! Every fragment pulled out of the working text is appended to one of three
//! tables and replaced by a marker naming the table and the index:
//!
//! - generic (`&N.`): the `&` escape, string/char literals, block comments
//! - doc comment (`&DOCN:`): runs of `//` lines
//! - folded block (`&BLOCKN;`): `{...}` bodies

/// Which table a marker points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Generic,
    Doc,
    Block,
}

impl MarkerKind {
    /// Format the marker for `index` in this table.
    pub fn marker(self, index: usize) -> String {
        match self {
            MarkerKind::Generic => format!("&{}.", index),
            MarkerKind::Doc => format!("&DOC{}:", index),
            MarkerKind::Block => format!("&BLOCK{};", index),
        }
    }
}

/// Ordered, append-only store of captured fragments.
///
/// Indices are dense and stable: a fragment keeps the index it was appended
/// at for the lifetime of the table.
#[derive(Debug, Clone)]
pub struct PlaceholderTable {
    kind: MarkerKind,
    fragments: Vec<String>,
}

/// Value of the reserved generic entry 0.
pub const AMPERSAND: &str = "&";

impl PlaceholderTable {
    pub fn new(kind: MarkerKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
        }
    }

    /// Generic table with entry 0 reserved for the literal `&`.
    pub fn generic() -> Self {
        let mut table = Self::new(MarkerKind::Generic);
        table.capture(AMPERSAND);
        table
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Append `fragment` and return its index.
    pub fn capture(&mut self, fragment: &str) -> usize {
        self.fragments.push(fragment.to_string());
        self.fragments.len() - 1
    }

    /// Append `fragment` and return the marker that stands in for it.
    pub fn capture_marker(&mut self, fragment: &str) -> String {
        let index = self.capture(fragment);
        self.marker(index)
    }

    pub fn resolve(&self, index: usize) -> Option<&str> {
        self.fragments.get(index).map(String::as_str)
    }

    pub fn marker(&self, index: usize) -> String {
        self.kind.marker(index)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_table_reserves_ampersand() {
        let mut table = PlaceholderTable::generic();
        assert_eq!(table.resolve(0), Some("&"));
        assert_eq!(table.capture("\"hi\""), 1);
        assert_eq!(table.resolve(1), Some("\"hi\""));
    }

    #[test]
    fn indices_are_dense_from_zero() {
        let mut table = PlaceholderTable::new(MarkerKind::Doc);
        assert!(table.is_empty());
        assert_eq!(table.capture("// a\n"), 0);
        assert_eq!(table.capture("// b\n"), 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["// a\n", "// b\n"]);
    }

    #[test]
    fn resolve_out_of_range() {
        let table = PlaceholderTable::new(MarkerKind::Block);
        assert_eq!(table.resolve(0), None);
    }

    #[test]
    fn marker_formats() {
        assert_eq!(MarkerKind::Generic.marker(3), "&3.");
        assert_eq!(MarkerKind::Doc.marker(0), "&DOC0:");
        assert_eq!(MarkerKind::Block.marker(12), "&BLOCK12;");
    }

    #[test]
    fn capture_marker_uses_table_kind() {
        let mut table = PlaceholderTable::new(MarkerKind::Block);
        assert_eq!(table.capture_marker("{ x; }"), "&BLOCK0;");
        assert_eq!(table.kind(), MarkerKind::Block);
    }
}
