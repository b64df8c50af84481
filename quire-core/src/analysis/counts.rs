//! Counting and lookup queries

use super::render::{render_html, render_text};
use crate::node::Node;
use crate::unit::Unit;

/// Number of word nodes under `node`.
pub fn word_count(node: &Node) -> usize {
    node.nodes().filter(|n| n.unit == Unit::Word).count()
}

/// Occurrences of `phrase` under `node`.
///
/// A single-token phrase counts exact (trimmed) word matches. A multi-token
/// phrase counts literal substring occurrences inside each paragraph's
/// reconstructed text, so a phrase spanning a paragraph boundary is never
/// counted.
pub fn phrase_count(node: &Node, phrase: &str) -> usize {
    if phrase.contains(' ') {
        return node
            .nodes()
            .filter(|n| n.unit == Unit::Paragraph)
            .map(|paragraph| render_text(paragraph).matches(phrase).count())
            .sum();
    }
    let wanted = phrase.trim();
    node.nodes()
        .filter(|n| n.unit == Unit::Word && n.text.trim() == wanted)
        .count()
}

/// Reconstructed text of the first sentence under `node`, or empty.
pub fn first_sentence(node: &Node) -> String {
    node.nodes()
        .find(|n| n.unit == Unit::Sentence)
        .map(render_text)
        .unwrap_or_default()
}

/// Reconstructed text of the `n`th sentence (1-based) under `node`, or
/// empty when out of range.
pub fn nth_sentence(node: &Node, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    node.nodes()
        .filter(|candidate| candidate.unit == Unit::Sentence)
        .nth(n - 1)
        .map(render_text)
        .unwrap_or_default()
}

/// The `n`th chapter node (1-based) under `node`, if present.
pub fn nth_chapter(node: &Node, n: usize) -> Option<&Node> {
    if n == 0 {
        return None;
    }
    node.nodes()
        .filter(|candidate| candidate.unit == Unit::Chapter)
        .nth(n - 1)
}

/// Reconstructed plain text of the `n`th chapter (1-based), or empty when
/// out of range.
pub fn chapter_text(node: &Node, n: usize) -> String {
    nth_chapter(node, n).map(render_text).unwrap_or_default()
}

/// Reconstructed HTML of the `n`th chapter (1-based), or empty when out of
/// range.
pub fn chapter_html(node: &Node, n: usize) -> String {
    nth_chapter(node, n).map(render_html).unwrap_or_default()
}
