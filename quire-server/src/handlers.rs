//! Request handlers
//!
//! HTML pages for browsing, JSON for the query endpoints. Every handler
//! opens a fresh cursor over the shared tree; results are recomputed per
//! request.

use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use quire_core::{analysis, ChapterProfile, ProfileOptions, RankedName, Unit};
use std::sync::Arc;

const STYLESHEET: &str = "\
body { font-family: Georgia, serif; margin: 2em auto; max-width: 42em; }
h1 { font-size: 1.4em; border-bottom: 1px solid #999; }
p { line-height: 1.5; }
a { color: #246; }
";

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <link rel=\"stylesheet\" href=\"/quire.css\">\
         <title>{title}</title></head>\
         <body><h1>{title}</h1>{body}</body></html>"
    ))
}

/// Index page: the work's first sentence as a title, plus links.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let title = analysis::first_sentence(&state.root);
    page(
        title.trim(),
        "<p><a href=\"/structure\">Display structure</a></p>\
         <p><a href=\"/characters\">Characters</a></p>\
         <p><a href=\"/frequencies\">Character frequencies</a></p>\
         <p><a href=\"/chapters\">Chapter profiles</a></p>\
         <p><a href=\"/chapter/1\">Chapter 1</a></p>",
    )
}

/// Structure outline rendered as indented HTML paragraphs.
pub async fn structure(State(state): State<Arc<AppState>>) -> Html<String> {
    let title = analysis::first_sentence(&state.root);
    let mut body = String::new();
    let mut cursor = state.root.cursor();
    while let Some(node) = cursor.next_node() {
        if matches!(node.unit, Unit::Word | Unit::Work) {
            continue;
        }
        let level = cursor.depth().saturating_sub(1);
        body.push_str(&format!(
            "<p style=\"margin-left: {}px\">[{}]",
            level * 50,
            node.unit.name()
        ));
        if node.unit == Unit::Sentence {
            body.push_str(analysis::render_text(node).trim());
        }
        body.push_str("</p>\n");
    }
    page(title.trim(), &body)
}

/// One chapter rendered as HTML; out of range gives an empty body.
pub async fn chapter(
    State(state): State<Arc<AppState>>,
    Path(number): Path<usize>,
) -> Html<String> {
    tracing::debug!(number, "rendering chapter");
    let title = analysis::first_sentence(&state.root);
    let body = analysis::chapter_html(&state.root, number);
    page(title.trim(), &body)
}

/// Confirmed character names as a JSON array.
pub async fn characters(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(analysis::identify_characters(&state.root, state.thresholds))
}

/// Ranked (name, count) pairs as JSON.
pub async fn frequencies(State(state): State<Arc<AppState>>) -> Json<Vec<RankedName>> {
    let counts = analysis::character_frequencies(&state.root, state.thresholds);
    Json(analysis::rank_by_frequency(&counts))
}

/// Per-chapter profiles as JSON.
pub async fn chapter_profiles(State(state): State<Arc<AppState>>) -> Json<Vec<ChapterProfile>> {
    let options = ProfileOptions {
        top: state.top_characters,
        include_first_sentence: true,
        nth_sentence: None,
        include_word_count: true,
    };
    Json(analysis::chapter_profiles(&state.root, &options))
}

/// The static stylesheet referenced by the HTML pages.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
