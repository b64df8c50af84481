//! Output formatting
//!
//! Each query has a small set of output shapes; everything writes through a
//! generic writer so the integration tests can capture it.

use crate::error::CliResult;
use quire_core::{ChapterProfile, RankedName};
use std::io::Write;

/// Output shape for list-valued queries.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ListFormat {
    /// One entry per line
    Text,
    /// JSON array
    Json,
}

/// Output shape for per-chapter profiles.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProfileFormat {
    /// Aligned human-readable lines
    Text,
    /// JSON array of profile objects
    Json,
    /// Tab-delimited rows
    Tsv,
}

/// Write confirmed character names.
pub fn write_characters<W: Write>(out: &mut W, names: &[String], format: ListFormat) -> CliResult<()> {
    match format {
        ListFormat::Text => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, names)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write a ranked frequency table.
pub fn write_frequencies<W: Write>(
    out: &mut W,
    ranked: &[RankedName],
    format: ListFormat,
) -> CliResult<()> {
    match format {
        ListFormat::Text => {
            for entry in ranked {
                writeln!(out, "{}: {}", entry.name, entry.count)?;
            }
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, ranked)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write per-chapter profiles.
pub fn write_profiles<W: Write>(
    out: &mut W,
    profiles: &[ChapterProfile],
    format: ProfileFormat,
) -> CliResult<()> {
    match format {
        ProfileFormat::Text => {
            for profile in profiles {
                write!(out, "{:03}:", profile.index)?;
                if let Some(words) = profile.word_count {
                    write!(out, " [{words:03}]")?;
                }
                if let Some(sentence) = &profile.first_sentence {
                    write!(out, " [{}]", sentence.trim())?;
                }
                if let Some(sentence) = &profile.nth_sentence {
                    write!(out, " [{}]", sentence.trim())?;
                }
                writeln!(out, " {}", join_names(&profile.top_characters))?;
            }
        }
        ProfileFormat::Tsv => {
            for profile in profiles {
                write!(out, "{:03}", profile.index)?;
                if let Some(words) = profile.word_count {
                    write!(out, "\t{words:03}")?;
                }
                if let Some(sentence) = &profile.first_sentence {
                    write!(out, "\t{}", sentence.trim())?;
                }
                if let Some(sentence) = &profile.nth_sentence {
                    write!(out, "\t{}", sentence.trim())?;
                }
                writeln!(out, "\t{}", join_names(&profile.top_characters))?;
            }
        }
        ProfileFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, profiles)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn join_names(ranked: &[RankedName]) -> String {
    ranked
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(pairs: &[(&str, u64)]) -> Vec<RankedName> {
        pairs
            .iter()
            .map(|(name, count)| RankedName {
                name: name.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn characters_text_is_one_per_line() {
        let mut out = Vec::new();
        let names = vec!["Alice".to_string(), "Bob".to_string()];
        write_characters(&mut out, &names, ListFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Alice\nBob\n");
    }

    #[test]
    fn characters_json_is_an_array() {
        let mut out = Vec::new();
        let names = vec!["Alice".to_string()];
        write_characters(&mut out, &names, ListFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, names);
    }

    #[test]
    fn frequencies_text_shows_counts() {
        let mut out = Vec::new();
        write_frequencies(&mut out, &ranked(&[("Alice", 3), ("Bob", 2)]), ListFormat::Text)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Alice: 3\nBob: 2\n");
    }

    #[test]
    fn profiles_text_includes_optional_fields() {
        let profiles = vec![ChapterProfile {
            index: 1,
            word_count: Some(42),
            first_sentence: Some("It begins.".to_string()),
            nth_sentence: None,
            top_characters: ranked(&[("Alice", 3), ("Bob", 2)]),
        }];
        let mut out = Vec::new();
        write_profiles(&mut out, &profiles, ProfileFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "001: [042] [It begins.] Alice,Bob\n"
        );
    }

    #[test]
    fn profiles_tsv_is_tab_delimited() {
        let profiles = vec![ChapterProfile {
            index: 2,
            word_count: Some(7),
            first_sentence: None,
            nth_sentence: None,
            top_characters: ranked(&[("Ivan", 4)]),
        }];
        let mut out = Vec::new();
        write_profiles(&mut out, &profiles, ProfileFormat::Tsv).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "002\t007\tIvan\n");
    }
}
