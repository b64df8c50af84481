//! Query and analysis layer
//!
//! Every operation here opens a fresh cursor over the target node and
//! consumes it in a single pass. Nothing mutates the tree, so all queries
//! are idempotent and may run concurrently.

mod characters;
mod counts;
mod render;

pub use characters::{
    character_frequencies, chapter_profiles, identify_characters, rank_by_frequency,
    ChapterProfile, ProfileOptions, RankedName, Thresholds,
};
pub use counts::{
    chapter_html, chapter_text, first_sentence, nth_chapter, nth_sentence, phrase_count,
    word_count,
};
pub use render::{render_html, render_outline, render_text};
