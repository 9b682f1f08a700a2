//! Markdown renderer for the configuration doc tree.
//!
//! Produces an ordered sequence of output lines: a pre-order walk where each
//! section contributes a heading and a blank line before its children.

use crate::docs::model::{ConfigNode, NodeKind, Section};

/// Heading level used when rendering the root section.
pub const ROOT_DEPTH: usize = 4;

/// Render a section's children at the given heading depth.
///
/// Section children get a `#`-heading (underscores in the key become spaces,
/// then title case) followed by a blank line and their own children at
/// `depth + 1`. String children render as `` - `key`: value `` bullets, and
/// list children pass through line by line, unmodified.
///
/// A blank separator line is emitted before a section heading only when the
/// previous sibling at the same level was also a section. The tracker is
/// local to each call, so sibling groups in different subsections never
/// influence each other.
pub fn render(section: &Section, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut prev: Option<NodeKind> = None;

    for (key, node) in section.entries() {
        match node {
            ConfigNode::Section(child) => {
                if prev == Some(NodeKind::Section) {
                    lines.push(String::new());
                }
                lines.push(format!("{} {}", "#".repeat(depth), heading_text(key)));
                lines.push(String::new());
                lines.extend(render(child, depth + 1));
            }
            ConfigNode::Description(text) => {
                lines.push(format!("- `{key}`: {text}"));
            }
            ConfigNode::Verbatim(block) => {
                lines.extend(block.iter().cloned());
            }
        }
        prev = Some(node.kind());
    }

    lines
}

fn heading_text(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

/// Title-case a phrase: uppercase each letter that starts a word, lowercase
/// the rest. Word starts are letters following a non-letter character.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
