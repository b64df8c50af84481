//! Text reconstruction
//!
//! Words are concatenated with single spaces; paragraph, section, and
//! chapter boundaries become fixed separator literals. The HTML flavor
//! wraps paragraphs in `<p>` elements instead.

use crate::node::Node;
use crate::unit::Unit;

const PARAGRAPH_SEP: &str = "\n\n";
const SECTION_SEP: &str = "\n\n----\n\n";
const CHAPTER_SEP: &str = "\nChapter :\n";

const HTML_PARAGRAPH_SEP: &str = "\n</p><p>\n";
const HTML_SECTION_SEP: &str = "\n</p><p>\n----\n</p><p>\n";
const HTML_CHAPTER_SEP: &str = "\n</br>Chapter :\n</br>";

/// Reconstruct the plain text of a subtree.
pub fn render_text(node: &Node) -> String {
    if node.unit == Unit::Word {
        return node.text.clone();
    }
    let mut out = String::new();
    for visited in node.nodes() {
        match visited.unit {
            Unit::Word => {
                out.push_str(&visited.text);
                out.push(' ');
            }
            Unit::Sentence => out.push(' '),
            Unit::Paragraph => out.push_str(PARAGRAPH_SEP),
            Unit::Section => out.push_str(SECTION_SEP),
            Unit::Chapter => out.push_str(CHAPTER_SEP),
            Unit::Work => {}
        }
    }
    out
}

/// Reconstruct a subtree as an HTML fragment.
pub fn render_html(node: &Node) -> String {
    if node.unit == Unit::Word {
        return node.text.clone();
    }
    let mut out = String::from("<p>");
    for visited in node.nodes() {
        match visited.unit {
            Unit::Word => {
                out.push_str(&visited.text);
                out.push(' ');
            }
            Unit::Sentence => out.push(' '),
            Unit::Paragraph => out.push_str(HTML_PARAGRAPH_SEP),
            Unit::Section => out.push_str(HTML_SECTION_SEP),
            Unit::Chapter => out.push_str(HTML_CHAPTER_SEP),
            Unit::Work => {}
        }
    }
    out.push_str("</p>");
    out
}

/// Render an indented outline of the structure down to `max_depth` levels
/// below the root, optionally inlining each sentence's text.
pub fn render_outline(node: &Node, include_sentences: bool, max_depth: usize) -> String {
    let mut out = String::new();
    let mut cursor = node.cursor();
    while let Some(visited) = cursor.next_node() {
        if matches!(visited.unit, Unit::Word | Unit::Work) {
            continue;
        }
        let level = cursor.depth().saturating_sub(1);
        if level >= max_depth {
            continue;
        }
        for _ in 0..level {
            out.push_str("    ");
        }
        out.push('[');
        out.push_str(visited.unit.name());
        out.push(']');
        if include_sentences && visited.unit == Unit::Sentence {
            out.push_str(&render_text(visited));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::WorkProcessor;

    fn parse(text: &str) -> Node {
        WorkProcessor::new().process_text(text).unwrap()
    }

    #[test]
    fn word_node_renders_its_token() {
        let word = Node::word(0, 4, "rook");
        assert_eq!(render_text(&word), "rook");
        assert_eq!(render_html(&word), "rook");
    }

    #[test]
    fn words_joined_by_single_spaces() {
        let root = parse("Some short words here.\n\n");
        let text = render_text(&root);
        assert!(text.contains("Some short words here. "));
    }

    #[test]
    fn paragraph_separator_appears_between_paragraphs() {
        let root = parse("First paragraph.\n\nSecond paragraph.\n\n");
        let text = render_text(&root);
        assert!(text.contains("\n\n"));
        // Ignore the chapter/section separator literals around the content
        let normalized: Vec<&str> = text
            .split_whitespace()
            .filter(|t| *t != "Chapter" && *t != ":" && *t != "----")
            .collect();
        assert_eq!(
            normalized,
            vec!["First", "paragraph.", "Second", "paragraph."]
        );
    }

    #[test]
    fn html_wraps_paragraphs() {
        let root = parse("One.\n\nTwo.\n\n");
        let html = render_html(&root);
        assert!(html.starts_with("<p>"));
        assert!(html.ends_with("</p>"));
        assert!(html.contains("</p><p>"));
    }

    #[test]
    fn outline_indents_by_depth_and_caps_at_max() {
        let root = parse("A sentence here.\n\n");
        let outline = render_outline(&root, false, 99);
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(lines[0], "[Chapter]");
        assert_eq!(lines[1], "    [Section]");
        assert_eq!(lines[2], "        [Paragraph]");
        assert_eq!(lines[3], "            [Sentence]");

        let shallow = render_outline(&root, false, 2);
        assert!(shallow.contains("[Section]"));
        assert!(!shallow.contains("[Paragraph]"));
    }

    #[test]
    fn outline_can_inline_sentence_text() {
        let root = parse("Only line.\n\n");
        let outline = render_outline(&root, true, 99);
        assert!(outline.contains("Only line."));
    }
}
