//! Turning a snapshot (or a failure) into visible terminal state
//!
//! The presenter owns the last rendered numbers and a single status line.
//! Failures only ever touch the status line; the numeric fields keep
//! whatever the last successful refresh produced.

pub mod ring;

use crate::error::ProgressError;
use crate::playlist::{PlaylistSnapshot, format_hms};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Formatted numbers for one successful refresh
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// Watched share, 0..=100
    pub percentage: u8,

    /// Formatted total playlist duration
    pub total: String,

    /// Formatted watched duration
    pub watched: String,

    /// Formatted remaining duration
    pub remaining: String,
}

impl ProgressView {
    pub fn from_snapshot(snapshot: &PlaylistSnapshot) -> Self {
        Self {
            percentage: snapshot.percentage(),
            total: format_hms(snapshot.total),
            watched: format_hms(snapshot.watched),
            remaining: format_hms(snapshot.remaining()),
        }
    }
}

/// The one-line status shown under the ring, reflecting the latest action
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    /// A request is in flight
    Fetching,
    /// Last refresh succeeded at the given wall-clock time
    UpdatedAt(String),
    /// The extraction raced the timeout and lost
    TimedOut,
    /// The in-page script or the browser reported a fault
    Error(String),
    /// The reply matched neither expected shape
    InvalidData,
    /// No eligible tab; tells the user where to go
    WrongPage(String),
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Fetching => write!(f, "fetching data..."),
            StatusLine::UpdatedAt(time) => write!(f, "updated at {}", time),
            StatusLine::TimedOut => write!(f, "request timed out, refresh to retry"),
            StatusLine::Error(msg) => write!(f, "error: {}", msg),
            StatusLine::InvalidData => write!(f, "invalid data format"),
            StatusLine::WrongPage(msg) => write!(f, "{}", msg),
        }
    }
}

/// Presenter state: last good numbers plus the current status line
#[derive(Debug, Clone)]
pub struct Presenter {
    view: Option<ProgressView>,
    status: StatusLine,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    pub fn new() -> Self {
        Self { view: None, status: StatusLine::Fetching }
    }

    /// Mark a request as in flight
    pub fn begin_fetch(&mut self) {
        self.status = StatusLine::Fetching;
    }

    /// Fold one request outcome into the display state
    ///
    /// Success replaces the numbers and stamps the status; every failure
    /// leaves the numbers untouched and only rewrites the status line.
    pub fn apply(&mut self, outcome: crate::error::Result<PlaylistSnapshot>) {
        match outcome {
            Ok(snapshot) => {
                self.view = Some(ProgressView::from_snapshot(&snapshot));
                self.status = StatusLine::UpdatedAt(clock_time());
            }
            Err(error) => self.status = Self::status_for(error),
        }
    }

    fn status_for(error: ProgressError) -> StatusLine {
        match error {
            ProgressError::WrongPage(msg) => StatusLine::WrongPage(msg),
            ProgressError::TimedOut(_) => StatusLine::TimedOut,
            ProgressError::ExtractionFailed(msg) => StatusLine::Error(msg),
            ProgressError::InvalidReply(_) => StatusLine::InvalidData,
            other => StatusLine::Error(other.to_string()),
        }
    }

    /// Last good numbers, if any refresh has succeeded yet
    pub fn view(&self) -> Option<&ProgressView> {
        self.view.as_ref()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Render the ring, the duration labels, and the status line
    pub fn render(&self) -> String {
        let mut out = String::new();

        match &self.view {
            Some(view) => {
                out.push_str(&ring::render(view.percentage));
                out.push('\n');
                out.push_str(&format!("  total      {}\n", view.total));
                out.push_str(&format!("  watched    {}\n", view.watched));
                out.push_str(&format!("  remaining  {}\n", view.remaining));
            }
            None => {
                out.push_str(&ring::render(0));
                out.push('\n');
            }
        }

        out.push('\n');
        out.push_str(&format!("  {}\n", self.status));
        out
    }
}

/// Wall-clock time of day as HH:MM:SS (UTC)
fn clock_time() -> String {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format_hms(since_epoch.as_secs() % 86_400)
}
