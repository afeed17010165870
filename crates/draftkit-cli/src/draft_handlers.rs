//! Handler functions for `draftkit draft` commands.

use draftkit_core::{Result, ThemeId};
use draftkit_draft::{
    DraftLoader, Source, SubmissionPayload, parse_sources, sanitize_json_newlines,
    split_json_objects,
};
use serde::Serialize;

/// One loaded draft, as listed by `draftkit draft parse`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub index: usize,
    pub theme: ThemeId,
    pub title: String,
    pub date: String,
    pub category: String,
    pub subcategory: String,
    pub key_points: usize,
    pub sources: usize,
}

/// The top-level objects of pasted text, with raw line breaks in strings
/// removed.
pub fn split(text: &str) -> Result<Vec<String>> {
    split_json_objects(&sanitize_json_newlines(text))
}

/// Summaries of every draft in pasted text.
pub fn parse(loader: &DraftLoader, text: &str) -> Result<Vec<DraftSummary>> {
    let drafts = loader.parse_all(text)?;
    tracing::info!("loaded {} draft(s)", drafts.len());
    Ok(drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| DraftSummary {
            index: index + 1,
            theme: draft.theme(),
            title: draft.title.clone(),
            date: draft.date.clone(),
            category: draft.category.clone(),
            subcategory: draft.subcategory.clone(),
            key_points: draft.key_points.len(),
            sources: draft.sources.len(),
        })
        .collect())
}

/// Submission payloads for every draft in pasted text.
pub fn payloads(loader: &DraftLoader, text: &str) -> Result<Vec<SubmissionPayload>> {
    Ok(loader
        .parse_all(text)?
        .iter()
        .map(|draft| loader.submission_payload(draft))
        .collect())
}

/// The payload of an empty draft for `theme`.
pub fn new_draft(loader: &DraftLoader, theme: ThemeId) -> SubmissionPayload {
    loader.submission_payload(&loader.new_draft(theme))
}

pub fn sources(text: &str) -> Vec<Source> {
    parse_sources(text)
}
