//! Playlist extraction and aggregation
//!
//! This module owns the numeric core: parsing duration labels, reading the
//! playlist pane out of a live tab, and folding the per-item durations into
//! a watched/remaining/total summary. It includes:
//! - parse_duration / format_hms: duration label arithmetic
//! - PageSnapshot: the raw page view reported by the in-page script
//! - PlaylistSnapshot: the aggregated watch-progress summary

pub mod duration;
pub mod extract;
pub mod snapshot;

pub use duration::{format_hms, parse_duration};
pub use extract::{extract_page, extract_snapshot};
pub use snapshot::{ItemDuration, PageItem, PageSnapshot, PlaylistSnapshot};
