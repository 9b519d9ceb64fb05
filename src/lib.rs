//! # pod-progress
//!
//! Track how far through a bilibili playlist you are, straight from a live
//! browser tab, via the Chrome DevTools Protocol (CDP).
//!
//! ## How it works
//!
//! The crate attaches to a running Chrome/Chromium instance (or launches
//! one), finds the first tab on a bilibili video page, and runs a small
//! extraction script inside it. The script reports every playlist entry
//! with its duration label and active flag; aggregation into a
//! watched/remaining/total summary happens in Rust, so the numeric core is
//! testable without a browser. The result is rendered as a circular
//! progress ring in the terminal.
//!
//! ## CLI
//!
//! The usual entry point is the `pod-progress` binary:
//!
//! ```bash
//! # Attach to a browser started with --remote-debugging-port=9222
//! pod-progress --ws-url ws://127.0.0.1:9222/devtools/browser/<id>
//!
//! # Or let it launch its own (headed) browser and open a page
//! pod-progress --launch --headed --url https://www.bilibili.com/video/BV...
//! ```
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use pod_progress::{BrowserSession, ConnectionOptions, fetch};
//!
//! # fn main() -> pod_progress::Result<()> {
//! let session = BrowserSession::connect(ConnectionOptions::new(
//!     "ws://127.0.0.1:9222/devtools/browser/abc",
//! ))?;
//!
//! let snapshot = fetch::fetch_snapshot(&session, fetch::EXTRACT_TIMEOUT)?;
//! println!("{}% watched", snapshot.percentage());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module overview
//!
//! - [`browser`]: session management and playlist-tab discovery
//! - [`playlist`]: duration parsing, extraction, and aggregation
//! - [`fetch`]: one request cycle with the timeout race
//! - [`presenter`]: terminal ring rendering and status handling
//! - [`error`]: error types and result alias

pub mod browser;
pub mod error;
pub mod fetch;
pub mod playlist;
pub mod presenter;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, is_playlist_url};
pub use error::{ProgressError, Result};
pub use playlist::{ItemDuration, PageItem, PageSnapshot, PlaylistSnapshot, format_hms, parse_duration};
pub use presenter::{Presenter, ProgressView, StatusLine};
