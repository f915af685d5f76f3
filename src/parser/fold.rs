//! Brace folding — collapse every `{...}` body into a `&BLOCKN;` marker.
//!
//! A single left-to-right pass with an explicit frame stack. Blocks are
//! captured in the order they close, so inner blocks always get smaller
//! indices than the blocks containing them. The result is the same text the
//! repeated "fold innermost `{[^{}]*}`" rewrite would reach at its fixed point.

use crate::table::{MarkerKind, PlaceholderTable};

/// Fold all balanced brace spans in `text`.
///
/// A `}` with no open frame is kept as plain text. Frames still open at the
/// end are flushed back unfolded.
pub fn fold(text: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::new(MarkerKind::Block);
    let mut root = String::with_capacity(text.len());
    let mut frames: Vec<String> = Vec::new();

    for ch in text.chars() {
        match ch {
            '{' => frames.push(String::from('{')),
            '}' => match frames.pop() {
                Some(mut body) => {
                    body.push('}');
                    let marker = table.capture_marker(&body);
                    frames.last_mut().unwrap_or(&mut root).push_str(&marker);
                }
                None => root.push('}'),
            },
            _ => frames.last_mut().unwrap_or(&mut root).push(ch),
        }
    }

    // Unclosed frames: each one is a prefix of its parent's remaining text.
    for frame in frames {
        root.push_str(&frame);
    }

    (root, table)
}
