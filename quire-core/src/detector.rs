//! Streaming boundary detection
//!
//! The detector consumes a byte stream, decodes it incrementally as UTF-8,
//! and emits [`Boundary`] events in strictly increasing position order as
//! each unit of text closes. It keeps a current-word accumulator, a rolling
//! current-sentence buffer, and the last rune seen; whitespace triggers the
//! boundary decision for the word just completed.

use crate::boundary::{Boundary, BoundarySink};
use crate::config::DetectorConfig;
use crate::error::{CoreError, Result};
use crate::unit::Unit;
use std::io::Read;

const READ_CHUNK: usize = 8 * 1024;

// Initial last-rune value: anything that is neither sentence-final
// punctuation nor a line terminator.
const NEUTRAL_RUNE: char = '\u{0}';

/// Incremental rune-by-rune boundary detector.
///
/// Emission is idempotent per unit at a given position, and each higher
/// emission first flushes the lower-rank pending unit so boundaries nest:
/// sentences flush the pending word, paragraphs flush the pending sentence,
/// chapters flush the section when one has not already closed at the same
/// position. The `Work` unit is never emitted.
pub struct BoundaryDetector<'c, S: BoundarySink> {
    config: &'c DetectorConfig,
    sink: S,

    position: u64,
    cur_word: String,
    cur_sentence: String,
    last_rune: char,
    last_word: u64,
    last_sentence: u64,
    last_paragraph: u64,
    last_section: u64,
    last_chapter: u64,
}

impl<'c, S: BoundarySink> BoundaryDetector<'c, S> {
    /// Create a detector writing into `sink`.
    pub fn new(config: &'c DetectorConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            position: 0,
            cur_word: String::new(),
            cur_sentence: String::new(),
            last_rune: NEUTRAL_RUNE,
            last_word: 0,
            last_sentence: 0,
            last_paragraph: 0,
            last_section: 0,
            last_chapter: 0,
        }
    }

    /// Drain `reader` to the end, then flush and return the sink.
    ///
    /// Read failures and invalid UTF-8 are fatal: the detector stops, the
    /// sink is dropped (closing a channel-backed pipeline), and the error
    /// surfaces to the caller.
    pub fn run<R: Read>(mut self, mut reader: R) -> Result<S> {
        let mut buf = [0u8; READ_CHUNK];
        let mut pending: Vec<u8> = Vec::new();
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            pending.extend_from_slice(&buf[..n]);
            let consumed = self.feed_bytes(&pending)?;
            pending.drain(..consumed);
        }
        if !pending.is_empty() {
            // Truncated code point at end of stream
            return Err(CoreError::Encoding {
                position: self.position,
            });
        }
        self.finish()
    }

    /// Feed an already-decoded text fragment.
    pub fn feed_str(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            self.step(ch)?;
        }
        Ok(())
    }

    /// Feed raw bytes, decoding the longest valid UTF-8 prefix and returning
    /// how many bytes were consumed. A code point split across reads is left
    /// unconsumed; an invalid sequence is a fatal encoding error.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                self.feed_str(text)?;
                Ok(bytes.len())
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                if err.error_len().is_some() {
                    return Err(CoreError::Encoding {
                        position: self.position + valid_up_to as u64,
                    });
                }
                if let Ok(text) = std::str::from_utf8(&bytes[..valid_up_to]) {
                    self.feed_str(text)?;
                }
                Ok(valid_up_to)
            }
        }
    }

    /// End of stream: flush the still-pending word, then hand back the sink.
    ///
    /// Higher pending units are left unclosed; the assembler's synthetic
    /// fold adopts them.
    pub fn finish(mut self) -> Result<S> {
        self.word()?;
        Ok(self.sink)
    }

    /// Current byte position in the stream.
    pub fn position(&self) -> u64 {
        self.position
    }

    fn step(&mut self, ch: char) -> Result<()> {
        self.position += ch.len_utf8() as u64;
        match ch {
            ' ' | '\t' | '\r' | '\n' => {
                if self.cur_word == self.config.section_marker {
                    self.section()?;
                } else if self.cur_word == self.config.chapter_marker {
                    self.chapter()?;
                } else {
                    match self.last_rune {
                        '.' | '!' | '?' => self.sentence()?,
                        '\r' | '\n' => self.paragraph()?,
                        _ => {
                            if !self.cur_word.is_empty() {
                                self.cur_sentence.push(' ');
                                self.cur_sentence.push_str(&self.cur_word);
                                self.word()?;
                            }
                        }
                    }
                }
                self.cur_word.clear();
            }
            _ => self.cur_word.push(ch),
        }
        self.last_rune = ch;
        Ok(())
    }

    fn word(&mut self) -> Result<()> {
        if self.last_word == self.position || self.cur_word.is_empty() {
            return Ok(());
        }
        self.sink.accept(Boundary::word(
            self.last_word,
            self.position - self.last_word,
            self.cur_word.clone(),
        ))?;
        self.last_word = self.position;
        Ok(())
    }

    fn sentence(&mut self) -> Result<()> {
        if self.last_sentence == self.position {
            return Ok(());
        }
        // The externally steerable decision point: the rule sees the pending
        // sentence text and may open a chapter before the sentence closes.
        if self.config.chapter_rule.matches(&self.cur_sentence) {
            self.chapter()?;
        }
        self.word()?;
        self.sink.accept(Boundary::new(
            self.last_sentence,
            self.position - self.last_sentence,
            Unit::Sentence,
        ))?;
        self.last_sentence = self.position;
        self.cur_sentence.clear();
        Ok(())
    }

    fn paragraph(&mut self) -> Result<()> {
        if self.last_paragraph == self.position {
            return Ok(());
        }
        self.sentence()?;
        self.sink.accept(Boundary::new(
            self.last_paragraph,
            self.position - self.last_paragraph,
            Unit::Paragraph,
        ))?;
        self.last_paragraph = self.position;
        Ok(())
    }

    fn section(&mut self) -> Result<()> {
        if self.last_section == self.position {
            return Ok(());
        }
        self.sink.accept(Boundary::new(
            self.last_section,
            self.position - self.last_section,
            Unit::Section,
        ))?;
        self.last_section = self.position;
        Ok(())
    }

    fn chapter(&mut self) -> Result<()> {
        if self.last_chapter == self.position {
            return Ok(());
        }
        if self.last_section != self.position {
            self.section()?;
        }
        self.sink.accept(Boundary::new(
            self.last_chapter,
            self.position - self.last_chapter,
            Unit::Chapter,
        ))?;
        self.last_chapter = self.position;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter_rule::ChapterRule;
    use std::io::Cursor;

    fn detect(config: &DetectorConfig, text: &str) -> Vec<Boundary> {
        let detector = BoundaryDetector::new(config, Vec::new());
        detector.run(Cursor::new(text.as_bytes().to_vec())).unwrap()
    }

    fn units(events: &[Boundary]) -> Vec<Unit> {
        events.iter().map(|b| b.unit).collect()
    }

    fn words(events: &[Boundary]) -> Vec<&str> {
        events
            .iter()
            .filter(|b| b.unit == Unit::Word)
            .filter_map(|b| b.text.as_deref())
            .collect()
    }

    #[test]
    fn words_split_on_whitespace() {
        let config = DetectorConfig::default();
        let events = detect(&config, "one two three\n");
        assert_eq!(words(&events), vec!["one", "two", "three"]);
    }

    #[test]
    fn sentence_final_punctuation_closes_sentence_and_flushes_word() {
        let config = DetectorConfig::default();
        let events = detect(&config, "It rained. It stopped.\n");
        assert_eq!(
            units(&events),
            vec![
                Unit::Word,
                Unit::Word,
                Unit::Sentence,
                Unit::Word,
                Unit::Word,
                Unit::Sentence,
            ]
        );
        assert_eq!(words(&events), vec!["It", "rained.", "It", "stopped."]);
    }

    #[test]
    fn blank_line_closes_paragraph() {
        let config = DetectorConfig::default();
        let events = detect(&config, "First line.\n\nSecond line.\n\n");
        let kinds = units(&events);
        assert_eq!(kinds.iter().filter(|u| **u == Unit::Paragraph).count(), 2);
        // Paragraph follows its sentence
        let para_at = kinds.iter().position(|u| *u == Unit::Paragraph).unwrap();
        assert_eq!(kinds[para_at - 1], Unit::Sentence);
    }

    #[test]
    fn section_marker_word_emits_section() {
        let config = DetectorConfig::default();
        let events = detect(&config, "Before.\n\n---\n\nAfter.\n\n");
        assert_eq!(units(&events).iter().filter(|u| **u == Unit::Section).count(), 1);
        // The marker word itself is consumed, not emitted as a word
        assert!(!words(&events).contains(&"---"));
    }

    #[test]
    fn chapter_marker_word_emits_section_then_chapter() {
        let config = DetectorConfig::default();
        let events = detect(&config, "Before.\n\n===\n\nAfter.\n\n");
        let kinds = units(&events);
        let chapter_at = kinds.iter().position(|u| *u == Unit::Chapter).unwrap();
        assert_eq!(kinds[chapter_at - 1], Unit::Section);
    }

    #[test]
    fn chapter_rule_forces_chapter_before_the_sentence() {
        let config = DetectorConfig {
            chapter_rule: ChapterRule::headings(),
            ..DetectorConfig::default()
        };
        let events = detect(&config, "An opening line.\n\nChapter One begins here.\n\n");
        let kinds = units(&events);
        let chapter_at = kinds.iter().position(|u| *u == Unit::Chapter).unwrap();
        // Chapter (with its section flush) lands before the words of the
        // sentence that triggered it are closed.
        assert!(kinds[chapter_at + 1..].contains(&Unit::Sentence));
        assert_eq!(kinds[chapter_at - 1], Unit::Section);
    }

    #[test]
    fn positions_are_strictly_increasing_per_unit() {
        let config = DetectorConfig::default();
        let events = detect(&config, "One. Two. Three.\n\nFour five six.\n\n---\n\n");
        for unit in [Unit::Word, Unit::Sentence, Unit::Paragraph] {
            let positions: Vec<u64> = events
                .iter()
                .filter(|b| b.unit == unit)
                .map(|b| b.position)
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(positions, sorted, "{unit} positions must strictly increase");
        }
    }

    #[test]
    fn repeated_markers_are_idempotent() {
        let config = DetectorConfig::default();
        let events = detect(&config, "Text.\n\n--- ---\n\n");
        // The second marker closes a new (non-empty) span, so two sections
        // appear, but never two at the same position.
        let positions: Vec<u64> = events
            .iter()
            .filter(|b| b.unit == Unit::Section)
            .map(|b| b.position)
            .collect();
        let mut deduped = positions.clone();
        deduped.dedup();
        assert_eq!(positions, deduped);
    }

    #[test]
    fn trailing_word_is_flushed_at_end_of_stream() {
        let config = DetectorConfig::default();
        let events = detect(&config, "no trailing newline");
        assert_eq!(words(&events), vec!["no", "trailing", "newline"]);
    }

    #[test]
    fn multibyte_runes_advance_byte_positions() {
        let config = DetectorConfig::default();
        let events = detect(&config, "héllo wörld\n");
        assert_eq!(words(&events), vec!["héllo", "wörld"]);
        let second = events
            .iter()
            .find(|b| b.text.as_deref() == Some("wörld"))
            .unwrap();
        assert_eq!(second.position, "héllo ".len() as u64);
    }

    #[test]
    fn split_code_point_across_reads_is_reassembled() {
        let config = DetectorConfig::default();
        let mut detector = BoundaryDetector::new(&config, Vec::new());
        let bytes = "é\n".as_bytes();
        let consumed = detector.feed_bytes(&bytes[..1]).unwrap();
        assert_eq!(consumed, 0);
        let consumed = detector.feed_bytes(bytes).unwrap();
        assert_eq!(consumed, bytes.len());
        let events = detector.finish().unwrap();
        assert_eq!(words(&events), vec!["é"]);
    }

    #[test]
    fn invalid_utf8_is_fatal_with_position() {
        let config = DetectorConfig::default();
        let detector = BoundaryDetector::new(&config, Vec::new());
        let err = detector
            .run(Cursor::new(vec![b'o', b'k', b' ', 0xFF, b'x']))
            .unwrap_err();
        match err {
            CoreError::Encoding { position } => assert_eq!(position, 3),
            other => panic!("expected encoding error, got {other:?}"),
        }
    }
}
