use crate::error::{ProgressError, Result};
use crate::playlist::snapshot::{PageSnapshot, PlaylistSnapshot};
use headless_chrome::Tab;
use serde::Deserialize;
use std::sync::Arc;

/// Everything the in-page script can answer with: either the page view or
/// a caught fault description, never both
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExtractReply {
    Failure { error: String },
    Page(PageSnapshot),
}

/// Run the extraction script in the tab and decode the page view
///
/// The script is wrapped in its own try/catch, so any in-page fault comes
/// back as a structured `{error}` reply instead of an evaluation failure.
pub fn extract_page(tab: &Arc<Tab>) -> Result<PageSnapshot> {
    // JavaScript source that scans the playlist pane; returns a JSON string
    let js_code = include_str!("extract_playlist.js");

    let result = tab
        .evaluate(js_code, false)
        .map_err(|e| ProgressError::EvaluationFailed(format!("Failed to run extraction script: {}", e)))?;

    let json_value = result
        .value
        .ok_or_else(|| ProgressError::InvalidReply("No value returned from extraction".to_string()))?;

    // The script returns a JSON string, so unwrap the string layer first
    let json_str: String = serde_json::from_value(json_value)
        .map_err(|e| ProgressError::InvalidReply(format!("Reply is not a JSON string: {}", e)))?;

    decode_reply(&json_str)
}

/// Extract and aggregate in one step
pub fn extract_snapshot(tab: &Arc<Tab>) -> Result<PlaylistSnapshot> {
    let page = extract_page(tab)?;
    let snapshot = PlaylistSnapshot::aggregate(&page);
    log::debug!(
        "Extracted {} items, total {}s, watched {}s",
        snapshot.items.len(),
        snapshot.total,
        snapshot.watched
    );
    Ok(snapshot)
}

/// Decode a raw reply string into a page view or a structured error
///
/// A reply matching neither shape (e.g. missing the `items` field) is a
/// malformed-result error; the caller must not touch its numeric state.
fn decode_reply(json_str: &str) -> Result<PageSnapshot> {
    let reply: ExtractReply = serde_json::from_str(json_str)
        .map_err(|_| ProgressError::InvalidReply("Reply missing both items and error fields".to_string()))?;

    match reply {
        ExtractReply::Page(page) => Ok(page),
        ExtractReply::Failure { error } => Err(ProgressError::ExtractionFailed(error)),
    }
}
