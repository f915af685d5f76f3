//! Doc-comment capture — collapse runs of `//` lines into one marker each.

use crate::table::{MarkerKind, PlaceholderTable};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// One or more `//` lines. Each line takes its line break and the next line's
/// indentation with it, so consecutive comment lines chain into a single run
/// and the marker lands right before the documented code.
static RE_DOC_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?://[^\n]*(?:\n[ \t]*|$))+").expect("doc run pattern")
});

/// Replace every doc-comment run in `text` with a `&DOCN:` marker.
pub fn capture(text: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::new(MarkerKind::Doc);
    let out = RE_DOC_RUN
        .replace_all(text, |caps: &Captures| table.capture_marker(&caps[0]))
        .into_owned();
    (out, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let (out, table) = capture("// Does X\nclass Foo;");
        assert_eq!(out, "&DOC0:class Foo;");
        assert_eq!(table.resolve(0), Some("// Does X\n"));
    }

    #[test]
    fn consecutive_lines_form_one_run() {
        let (out, table) = capture("// A\n// B\n  // C\n  void f();");
        assert_eq!(out, "&DOC0:void f();");
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(0), Some("// A\n// B\n  // C\n  "));
    }

    #[test]
    fn blank_line_splits_runs() {
        let (out, table) = capture("// one\n\n// two\nint x;");
        assert_eq!(out, "&DOC0:\n&DOC1:int x;");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn comment_at_end_without_newline() {
        let (out, table) = capture("int x;\n// tail");
        assert_eq!(out, "int x;\n&DOC0:");
        assert_eq!(table.resolve(0), Some("// tail"));
    }

    #[test]
    fn trailing_comment_after_code() {
        let (out, _) = capture("int x; // note\nint y;");
        assert_eq!(out, "int x; &DOC0:int y;");
    }

    #[test]
    fn no_comments() {
        let (out, table) = capture("int x;\n");
        assert_eq!(out, "int x;\n");
        assert!(table.is_empty());
    }
}
