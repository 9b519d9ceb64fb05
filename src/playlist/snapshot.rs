use crate::playlist::duration::parse_duration;
use serde::{Deserialize, Serialize};

/// One playlist entry as seen on the page: its active flag and the raw
/// duration label text, before any parsing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageItem {
    /// Whether the page marks this entry as currently playing
    #[serde(default)]
    pub active: bool,

    /// Raw duration label, e.g. "04:30" or "1:05:30"; absent when the
    /// parallel label list is shorter than the item list
    #[serde(default)]
    pub duration: Option<String>,
}

/// Read-only view over the playlist pane of one page, as reported by the
/// in-page extraction script
///
/// Items appear in document order. Aggregation works on this view alone,
/// so the numeric core never needs a live browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageSnapshot {
    pub items: Vec<PageItem>,
}

/// Parsed duration of a single playlist entry, in seconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDuration {
    pub duration: u64,
}

/// Aggregated watch progress for one playlist at one point in time
///
/// Created fresh on every extraction and consumed immediately; snapshots
/// are never cached or compared across refreshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistSnapshot {
    /// Sum of all item durations, in seconds
    pub total: u64,

    /// Sum of durations of items strictly before the active one
    pub watched: u64,

    /// Zero-based index of the active item, None when nothing is marked
    /// as playing
    pub current_index: Option<usize>,

    /// Per-item durations in document order
    pub items: Vec<ItemDuration>,
}

impl PlaylistSnapshot {
    /// Aggregate a page view into watch-progress totals
    ///
    /// The first item flagged active wins. Items before it count as
    /// watched; with no active item nothing does.
    pub fn aggregate(page: &PageSnapshot) -> Self {
        let current_index = page.items.iter().position(|item| item.active);

        let mut total = 0u64;
        let mut watched = 0u64;
        let items = page
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let duration = parse_duration(item.duration.as_deref());
                total = total.saturating_add(duration);
                if current_index.is_some_and(|active| index < active) {
                    watched = watched.saturating_add(duration);
                }
                ItemDuration { duration }
            })
            .collect();

        Self { total, watched, current_index, items }
    }

    /// Watched share as an integer percentage, 0..=100
    ///
    /// Round half up; an empty or zero-length playlist reads as 0%.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.watched as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// Seconds of playlist left, including the active item itself
    pub fn remaining(&self) -> u64 {
        self.total - self.watched
    }
}
