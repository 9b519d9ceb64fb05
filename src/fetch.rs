//! One extraction request cycle: tab validation, then the extraction
//! racing a fixed wall-clock timeout.

use crate::browser::BrowserSession;
use crate::error::{ProgressError, Result};
use crate::playlist::{PlaylistSnapshot, extract_snapshot};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long one extraction may take before the cycle gives up
pub const EXTRACT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Pause before the first automatic load, giving the attached browser a
/// moment to settle
pub const STARTUP_DELAY: Duration = Duration::from_millis(300);

/// Race a unit of work against a wall-clock timeout
///
/// First completion wins. The work itself is not aborted when the timeout
/// fires; it keeps running on its thread, and its eventual result is
/// dropped because nobody holds the receiving end any more. A late success
/// therefore never overwrites a timeout already reported to the caller.
pub fn race<T, F>(timeout: Duration, work: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        // Send fails when the receiver timed out and was dropped; the
        // late result is discarded by design
        let _ = tx.send(work());
    });

    rx.recv_timeout(timeout).ok()
}

/// Run one full request cycle against the session
///
/// Validates that a playlist tab exists before anything else; extraction
/// is never attempted against an ineligible browser. Every failure mode
/// resolves into a single error for the presenter, no retries.
pub fn fetch_snapshot(session: &BrowserSession, timeout: Duration) -> Result<PlaylistSnapshot> {
    let tab = session.find_playlist_tab()?;

    log::info!("Requesting playlist extraction (timeout {} ms)", timeout.as_millis());

    match race(timeout, move || extract_snapshot(&tab)) {
        Some(result) => result,
        None => Err(ProgressError::TimedOut(timeout.as_millis() as u64)),
    }
}
