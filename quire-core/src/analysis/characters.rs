//! Capitalization-based character identification and frequency ranking
//!
//! A word-order scan counts how often each cleaned, capitalized token (and
//! each run of consecutive capitalized tokens) appears, and separately how
//! often it appears somewhere other than sentence-initial position. Tokens
//! that clear both thresholds are confirmed characters; words capitalized
//! only because they start sentences never clear the non-first threshold.

use super::counts::{first_sentence, nth_sentence, word_count};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contraction suffixes stripped before the capitalization check.
const CONTRACTION_SUFFIXES: [&str; 5] = ["'ve", "'re", "'d", "'ll", "'s"];

/// Minimum-count thresholds for confirming a character.
///
/// Both comparisons are strict: a token is confirmed only when its total
/// incidence exceeds `min_appearance` AND its non-sentence-initial incidence
/// exceeds `min_non_first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Total appearances a name must exceed
    pub min_appearance: u64,
    /// Non-sentence-initial appearances a name must exceed
    pub min_non_first: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        // A name seen a handful of times, at least once mid-sentence, is
        // worth reporting.
        Self {
            min_appearance: 3,
            min_non_first: 1,
        }
    }
}

/// One name with its appearance count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedName {
    /// The confirmed single- or multi-word name
    pub name: String,
    /// Total appearances
    pub count: u64,
}

/// Strip quote marks, sentence punctuation, and common contraction
/// suffixes from a raw token.
fn clean_token(raw: &str) -> String {
    let mut token: String = raw.chars().filter(|c| *c != '"').collect();
    for suffix in CONTRACTION_SUFFIXES {
        if let Some(stripped) = token.strip_suffix(suffix) {
            token = stripped.to_string();
        }
    }
    token.retain(|c| !matches!(c, '\'' | ',' | '?' | '!' | '.'));
    token
}

/// Raw census: incidence and non-first-word counts for every capitalized
/// token and accumulated multi-word run.
#[derive(Debug, Default)]
struct Census {
    incidence: HashMap<String, u64>,
    non_first: HashMap<String, u64>,
}

fn census(root: &Node) -> Census {
    let mut counts = Census::default();
    let mut running_name = String::new();
    // Whether the current capitalized run began at sentence-initial
    // position; the accumulated form inherits that position.
    let mut run_sentence_initial = false;

    let mut cursor = root.cursor();
    while let Some(word) = cursor.next_word() {
        let token = clean_token(&word.text);
        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if !capitalized {
            running_name.clear();
            continue;
        }

        *counts.incidence.entry(token.clone()).or_default() += 1;
        if !cursor.first_word_in_sentence() {
            *counts.non_first.entry(token.clone()).or_default() += 1;
        }

        if running_name.is_empty() {
            running_name = token;
            run_sentence_initial = cursor.first_word_in_sentence();
        } else {
            running_name.push(' ');
            running_name.push_str(&token);
            // Count the accumulated multi-word form as well
            *counts.incidence.entry(running_name.clone()).or_default() += 1;
            if !run_sentence_initial {
                *counts.non_first.entry(running_name.clone()).or_default() += 1;
            }
        }
    }
    counts
}

impl Census {
    fn confirmed(&self, thresholds: Thresholds) -> impl Iterator<Item = (&String, u64)> + '_ {
        self.incidence.iter().filter_map(move |(name, &count)| {
            let non_first = self.non_first.get(name).copied().unwrap_or(0);
            (count > thresholds.min_appearance && non_first > thresholds.min_non_first)
                .then_some((name, count))
        })
    }
}

/// Names confirmed by the capitalization census, sorted lexicographically.
pub fn identify_characters(root: &Node, thresholds: Thresholds) -> Vec<String> {
    let counts = census(root);
    let mut names: Vec<String> = counts
        .confirmed(thresholds)
        .map(|(name, _)| name.clone())
        .collect();
    names.sort_unstable();
    names
}

/// Confirmed names mapped to their total appearance counts.
pub fn character_frequencies(root: &Node, thresholds: Thresholds) -> HashMap<String, u64> {
    let counts = census(root);
    counts
        .confirmed(thresholds)
        .map(|(name, count)| (name.clone(), count))
        .collect()
}

/// Order a name-to-count mapping by count descending; equal counts order
/// lexicographically by name so the ranking is deterministic.
pub fn rank_by_frequency(frequencies: &HashMap<String, u64>) -> Vec<RankedName> {
    let mut ranked: Vec<RankedName> = frequencies
        .iter()
        .map(|(name, &count)| RankedName {
            name: name.clone(),
            count,
        })
        .collect();
    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked
}

/// What to include in a per-chapter profile.
#[derive(Debug, Clone, Copy)]
pub struct ProfileOptions {
    /// How many top-ranked characters to keep per chapter
    pub top: usize,
    /// Include the chapter's first sentence
    pub include_first_sentence: bool,
    /// Include the chapter's nth sentence (1-based)
    pub nth_sentence: Option<usize>,
    /// Include the chapter's word count
    pub include_word_count: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            top: 3,
            include_first_sentence: false,
            nth_sentence: None,
            include_word_count: false,
        }
    }
}

/// Per-chapter summary: index, optional sentences and word count, and the
/// chapter's top-ranked characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterProfile {
    /// 1-based chapter index
    pub index: usize,
    /// Word count, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// First sentence, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_sentence: Option<String>,
    /// The requested nth sentence, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nth_sentence: Option<String>,
    /// Top characters by in-chapter frequency
    pub top_characters: Vec<RankedName>,
}

/// Profile every chapter of the work in document order.
///
/// Character ranking inside a chapter uses permissive thresholds (more than
/// one appearance, any position) since single chapters are short.
pub fn chapter_profiles(root: &Node, options: &ProfileOptions) -> Vec<ChapterProfile> {
    let chapter_thresholds = Thresholds {
        min_appearance: 1,
        min_non_first: 0,
    };
    root.nodes()
        .filter(|n| n.unit == crate::unit::Unit::Chapter)
        .enumerate()
        .map(|(i, chapter)| {
            let frequencies = character_frequencies(chapter, chapter_thresholds);
            let mut top_characters = rank_by_frequency(&frequencies);
            top_characters.truncate(options.top);
            ChapterProfile {
                index: i + 1,
                word_count: options.include_word_count.then(|| word_count(chapter)),
                first_sentence: options
                    .include_first_sentence
                    .then(|| first_sentence(chapter)),
                nth_sentence: options.nth_sentence.map(|n| nth_sentence(chapter, n)),
                top_characters,
            }
        })
        .collect()
}
