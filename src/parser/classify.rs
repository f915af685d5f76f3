//! Declaration classifier — pick documented top-level statements out of
//! fully folded text.

use crate::model::{Declaration, DeclarationKind};
use regex::Regex;
use std::sync::LazyLock;

/// Doc marker, then an optional class-like lead: `template<...>` with no
/// `;` inside, followed by `class`/`struct`. The template group is lazy, so
/// it stretches to whichever `>` is followed by the keyword, whatever the
/// nesting depth. Then the head up to a `;` or a folded block marker. The
/// head may hold literal markers but never another doc marker, which pairs
/// each declaration with the doc run right before it.
static RE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"&DOC(?P<doc>\d+):(?P<kind>(?:\s*template\s*<(?:[^;&]|&\d+\.)*?>)?\s*(?:class|struct)\b)?(?:[^;&]|&\d+\.)*(?:;|&BLOCK\d+;)",
    )
    .expect("declaration pattern")
});

/// Split the documented declarations of `folded` into class-like and
/// function-like lists, each in order of appearance.
pub fn classify(folded: &str) -> (Vec<Declaration>, Vec<Declaration>) {
    let mut classes = Vec::new();
    let mut functions = Vec::new();

    for caps in RE_DECLARATION.captures_iter(folded) {
        let Ok(doc) = caps["doc"].parse::<usize>() else {
            continue;
        };
        let kind = if caps.name("kind").is_some() {
            DeclarationKind::Class
        } else {
            DeclarationKind::Function
        };
        let decl = Declaration {
            kind,
            doc,
            text: caps[0].to_string(),
        };
        match kind {
            DeclarationKind::Class => classes.push(decl),
            DeclarationKind::Function => functions.push(decl),
        }
    }

    (classes, functions)
}
