//! Tree assembly
//!
//! Folds the ordered boundary-event stream into a single nested tree. One
//! open list is kept per rank below `Work`; each incoming event of a higher
//! rank adopts the entire list one rank down as its children. Exactly one
//! pass, no reordering.

use crate::boundary::Boundary;
use crate::node::Node;
use crate::unit::Unit;
use std::mem;

/// Single-pass fold from boundary events to a [`Node`] tree.
#[derive(Debug, Default)]
pub struct TreeAssembler {
    words: Vec<Node>,
    sentences: Vec<Node>,
    paragraphs: Vec<Node>,
    sections: Vec<Node>,
    chapters: Vec<Node>,
}

impl TreeAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one boundary event into the open lists.
    ///
    /// An event whose immediately-lower list is empty marks a boundary with
    /// no content (an immediately repeated marker) and is dropped. A `Work`
    /// event is never produced by the detector and is ignored.
    pub fn accept(&mut self, boundary: Boundary) {
        let position = boundary.position as i64;
        let length = boundary.length as i64;
        match boundary.unit {
            Unit::Word => {
                self.words.push(Node::word(
                    position,
                    length,
                    boundary.text.unwrap_or_default(),
                ));
            }
            Unit::Sentence => {
                if !self.words.is_empty() {
                    let children = mem::take(&mut self.words);
                    self.sentences
                        .push(Node::interior(Unit::Sentence, position, length, children));
                }
            }
            Unit::Paragraph => {
                if !self.sentences.is_empty() {
                    let children = mem::take(&mut self.sentences);
                    self.paragraphs
                        .push(Node::interior(Unit::Paragraph, position, length, children));
                }
            }
            Unit::Section => {
                if !self.paragraphs.is_empty() {
                    let children = mem::take(&mut self.paragraphs);
                    self.sections
                        .push(Node::interior(Unit::Section, position, length, children));
                }
            }
            Unit::Chapter => {
                if !self.sections.is_empty() {
                    let children = mem::take(&mut self.sections);
                    self.chapters
                        .push(Node::interior(Unit::Chapter, position, length, children));
                }
            }
            Unit::Work => {}
        }
    }

    /// Close the stream: fold any still-open lists upward through synthetic
    /// nodes so trailing content is not lost, and return the `Work` root.
    pub fn finish(mut self) -> Node {
        if !self.words.is_empty() {
            let children = mem::take(&mut self.words);
            self.sentences.push(Node::synthetic(Unit::Sentence, children));
        }
        if !self.sentences.is_empty() {
            let children = mem::take(&mut self.sentences);
            self.paragraphs
                .push(Node::synthetic(Unit::Paragraph, children));
        }
        if !self.paragraphs.is_empty() {
            let children = mem::take(&mut self.paragraphs);
            self.sections.push(Node::synthetic(Unit::Section, children));
        }
        if !self.sections.is_empty() {
            let children = mem::take(&mut self.sections);
            self.chapters.push(Node::synthetic(Unit::Chapter, children));
        }
        Node::root(mem::take(&mut self.chapters))
    }

    /// Fold an in-memory event sequence in one call.
    pub fn assemble<I>(events: I) -> Node
    where
        I: IntoIterator<Item = Boundary>,
    {
        let mut assembler = Self::new();
        for event in events {
            assembler.accept(event);
        }
        assembler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_fold_into_sentences() {
        let root = TreeAssembler::assemble(vec![
            Boundary::word(0, 4, "Yes."),
            Boundary::new(0, 4, Unit::Sentence),
            Boundary::word(4, 4, "No."),
            Boundary::new(4, 4, Unit::Sentence),
        ]);
        assert_eq!(root.unit, Unit::Work);
        // Synthetic chapter -> section -> paragraph wraps the two sentences
        let chapter = &root.children[0];
        assert!(chapter.is_synthetic());
        let paragraph = &chapter.children[0].children[0];
        assert_eq!(paragraph.children.len(), 2);
        assert_eq!(paragraph.children[0].children[0].text, "Yes.");
    }

    #[test]
    fn contentless_boundary_is_dropped() {
        let root = TreeAssembler::assemble(vec![
            Boundary::new(0, 0, Unit::Sentence),
            Boundary::new(0, 0, Unit::Section),
            Boundary::word(0, 3, "ok"),
        ]);
        // Neither the empty sentence nor the empty section appears
        let chapter = &root.children[0];
        assert_eq!(chapter.children.len(), 1);
        let sentence = &chapter.children[0].children[0].children[0];
        assert_eq!(sentence.unit, Unit::Sentence);
        assert!(sentence.is_synthetic());
    }

    #[test]
    fn explicit_chapters_become_root_children() {
        let root = TreeAssembler::assemble(vec![
            Boundary::word(0, 5, "First"),
            Boundary::new(0, 5, Unit::Sentence),
            Boundary::new(0, 5, Unit::Paragraph),
            Boundary::new(0, 5, Unit::Section),
            Boundary::new(0, 5, Unit::Chapter),
            Boundary::word(5, 6, "Second"),
            Boundary::new(5, 6, Unit::Sentence),
            Boundary::new(5, 6, Unit::Paragraph),
            Boundary::new(5, 6, Unit::Section),
            Boundary::new(5, 6, Unit::Chapter),
        ]);
        assert_eq!(root.children.len(), 2);
        assert!(root.children.iter().all(|c| c.unit == Unit::Chapter));
        assert!(root.children.iter().all(|c| !c.is_synthetic()));
    }

    #[test]
    fn children_sit_exactly_one_rank_below() {
        let root = TreeAssembler::assemble(vec![
            Boundary::word(0, 4, "Deep"),
            Boundary::new(0, 4, Unit::Sentence),
            Boundary::new(0, 4, Unit::Paragraph),
        ]);
        for node in root.nodes() {
            for child in &node.children {
                assert_eq!(Some(child.unit), node.unit.child());
            }
        }
    }

    #[test]
    fn empty_stream_yields_childless_root() {
        let root = TreeAssembler::assemble(Vec::new());
        assert_eq!(root.unit, Unit::Work);
        assert!(root.children.is_empty());
    }

    #[test]
    fn work_events_are_ignored() {
        let root = TreeAssembler::assemble(vec![
            Boundary::new(0, 0, Unit::Work),
            Boundary::word(0, 2, "hm"),
        ]);
        assert_eq!(root.children.len(), 1);
    }
}
