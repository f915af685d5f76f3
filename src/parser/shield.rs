//! Shielding — move literals and block comments out of the working text.
//!
//! Runs three substitutions in a fixed order:
//!
//! 1. every `&` becomes `&0.` so the marker sentinel is unambiguous
//! 2. `"..."` then `'...'` literals become generic markers
//! 3. `/* ... */` comments become generic markers
//!
//! Literals go before comments so a `/*` inside a string is not a comment.

use crate::table::PlaceholderTable;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A bare `&`, or one that already begins a marker.
static RE_AMPERSAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:(\d+)\.|DOC\d+:|BLOCK\d+;)?").expect("ampersand pattern")
});

/// Double-quoted literal. Escape pairs are consumed whole; an unescaped line
/// break ends the search.
static RE_DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\(?s:.))*""#).expect("double quote pattern")
});

static RE_SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'(?:[^'\\\n]|\\(?s:.))*'").expect("single quote pattern")
});

static RE_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));

/// Stateful shielding pass owning the generic table.
///
/// After the first pass the shielder recognizes its own markers, so running
/// it again over its output is a no-op.
#[derive(Debug)]
pub struct Shielder {
    table: PlaceholderTable,
    passes: usize,
}

impl Default for Shielder {
    fn default() -> Self {
        Self::new()
    }
}

impl Shielder {
    pub fn new() -> Self {
        Self {
            table: PlaceholderTable::generic(),
            passes: 0,
        }
    }

    pub fn table(&self) -> &PlaceholderTable {
        &self.table
    }

    pub fn into_table(self) -> PlaceholderTable {
        self.table
    }

    /// Run all three substitutions over `text`.
    ///
    /// Removing a multi-line block comment can bring two quotes onto one
    /// line, so the literal and comment passes repeat until a round
    /// captures nothing.
    pub fn shield(&mut self, text: &str) -> String {
        let mut text = self.shield_ampersands(text);
        loop {
            let before = self.table.len();
            text = self.capture_all(&RE_DOUBLE_QUOTED, &text);
            text = self.capture_all(&RE_SINGLE_QUOTED, &text);
            text = self.capture_all(&RE_BLOCK_COMMENT, &text);
            if self.table.len() == before {
                break;
            }
        }
        self.passes += 1;
        text
    }

    fn shield_ampersands(&self, text: &str) -> String {
        let escape = self.table.marker(0);
        RE_AMPERSAND
            .replace_all(text, |caps: &Captures| {
                if self.is_own_marker(caps) {
                    caps[0].to_string()
                } else {
                    format!("{}{}", escape, &caps[0][1..])
                }
            })
            .into_owned()
    }

    /// A marker this shielder emitted on an earlier pass. Generic markers
    /// must name an existing entry; doc and block markers always qualify.
    fn is_own_marker(&self, caps: &Captures) -> bool {
        if self.passes == 0 || caps[0].len() == 1 {
            return false;
        }
        match caps.get(1) {
            Some(index) => index
                .as_str()
                .parse::<usize>()
                .is_ok_and(|i| i < self.table.len()),
            None => true,
        }
    }

    fn capture_all(&mut self, re: &Regex, text: &str) -> String {
        let table = &mut self.table;
        re.replace_all(text, |caps: &Captures| table.capture_marker(&caps[0]))
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shield(text: &str) -> (String, PlaceholderTable) {
        let mut shielder = Shielder::new();
        let out = shielder.shield(text);
        (out, shielder.into_table())
    }

    #[test]
    fn ampersand_goes_first() {
        let (out, table) = shield("int& r = a && b;");
        assert_eq!(out, "int&0. r = a &0.&0. b;");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn marker_lookalike_in_source_is_escaped() {
        let (out, _) = shield("x = y &1. z; &DOC0: &BLOCK2;");
        assert_eq!(out, "x = y &0.1. z; &0.DOC0: &0.BLOCK2;");
    }

    #[test]
    fn string_literal_captured_whole() {
        let (out, table) = shield(r#"const char* s = "a;b{c}";"#);
        assert_eq!(out, "const char* s = &1.;");
        assert_eq!(table.resolve(1), Some(r#""a;b{c}""#));
    }

    #[test]
    fn escaped_quote_does_not_close() {
        let (out, table) = shield(r#"s = "say \"hi\""; t;"#);
        assert_eq!(out, "s = &1.; t;");
        assert_eq!(table.resolve(1), Some(r#""say \"hi\"""#));
    }

    #[test]
    fn escaped_backslash_before_quote_closes() {
        let (out, table) = shield(r#"p = "c:\\"; q = 'x';"#);
        assert_eq!(out, "p = &1.; q = &2.;");
        assert_eq!(table.resolve(1), Some(r#""c:\\""#));
        assert_eq!(table.resolve(2), Some("'x'"));
    }

    #[test]
    fn char_literal_brace() {
        let (out, _) = shield("char c = '{';");
        assert_eq!(out, "char c = &1.;");
    }

    #[test]
    fn comment_opener_inside_string_is_not_a_comment() {
        let (out, table) = shield(r#"s = "/*"; int x; /* real */"#);
        assert_eq!(out, "s = &1.; int x; &2.");
        assert_eq!(table.resolve(2), Some("/* real */"));
    }

    #[test]
    fn block_comment_spans_lines() {
        let (out, table) = shield("a; /* one\n two { */ b;");
        assert_eq!(out, "a; &1. b;");
        assert_eq!(table.resolve(1), Some("/* one\n two { */"));
    }

    #[test]
    fn apostrophe_in_line_comment_stays_on_its_line() {
        let (out, table) = shield("// it's a box\nclass Box;\n// it's 'x'\n");
        assert_eq!(out, "// it's a box\nclass Box;\n// it&1.x'\n");
        assert_eq!(table.resolve(1), Some("'s '"));
    }

    #[test]
    fn unterminated_literal_left_in_place() {
        let (out, table) = shield("s = \"open\nnext;");
        assert_eq!(out, "s = \"open\nnext;");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn second_pass_is_noop() {
        let mut shielder = Shielder::new();
        let once = shielder.shield(r#"a & "x" /* c */ 'y' &DOC0:"#);
        let len = shielder.table().len();
        let twice = shielder.shield(&once);
        assert_eq!(once, twice);
        assert_eq!(shielder.table().len(), len);
    }

    #[test]
    fn comment_removal_joining_quotes_is_shielded_in_one_call() {
        let mut shielder = Shielder::new();
        let once = shielder.shield("// it's /* not\n   a comment */ isn't it\n");
        assert_eq!(once, "// it&2.t it\n");
        assert_eq!(shielder.table().resolve(1), Some("/* not\n   a comment */"));
        assert_eq!(shielder.table().resolve(2), Some("'s &1. isn'"));

        let twice = shielder.shield(&once);
        assert_eq!(once, twice);
        assert_eq!(shielder.table().len(), 3);
    }

    #[test]
    fn double_quotes_joined_by_comment_removal() {
        let mut shielder = Shielder::new();
        let once = shielder.shield("a \" /* x\n */ \" b\n");
        assert_eq!(once, "a &2. b\n");
        assert_eq!(shielder.shield(&once), once);
    }

    #[test]
    fn second_pass_still_escapes_unknown_generic_index() {
        let mut shielder = Shielder::new();
        let once = shielder.shield("a;");
        assert_eq!(once, "a;");
        assert_eq!(shielder.shield("b &7. c"), "b &0.7. c");
    }

    /// Lexical pieces that interact across shielding rounds.
    fn piece() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "'", "\"", "/*", "*/", "\n", "\\", "//", "&", "a", " ", "{", ";",
        ])
    }

    proptest! {
        #[test]
        fn shielding_own_output_is_noop(pieces in prop::collection::vec(piece(), 0..60)) {
            let src: String = pieces.concat();
            let mut shielder = Shielder::new();
            let once = shielder.shield(&src);
            let len = shielder.table().len();
            let twice = shielder.shield(&once);
            prop_assert_eq!(once, twice);
            prop_assert_eq!(shielder.table().len(), len);
        }
    }
}
