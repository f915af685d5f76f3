//! Marker resolution — put captured fragments back into working text.
//!
//! Fragments only ever reference entries captured before them, so the
//! recursion always bottoms out.

use crate::model::HeaderDocument;
use crate::table::PlaceholderTable;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:(?P<generic>\d+)\.|DOC(?P<doc>\d+):|BLOCK(?P<block>\d+);)")
        .expect("marker pattern")
});

impl HeaderDocument {
    /// Replace every marker in `text` with its original fragment.
    /// Markers naming a missing entry are left as they are.
    pub fn resolve(&self, text: &str) -> String {
        RE_MARKER
            .replace_all(text, |caps: &Captures| {
                let (table, index) = self.lookup(caps);
                match index.and_then(|i| table.resolve(i)) {
                    Some(fragment) => self.resolve(fragment),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn lookup(&self, caps: &Captures) -> (&PlaceholderTable, Option<usize>) {
        let parse = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<usize>().ok());
        if caps.name("doc").is_some() {
            (&self.docs, parse("doc"))
        } else if caps.name("block").is_some() {
            (&self.blocks, parse("block"))
        } else {
            (&self.generic, parse("generic"))
        }
    }
}
