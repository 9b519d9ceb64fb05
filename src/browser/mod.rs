//! Browser session management
//!
//! Launching or attaching to a Chrome/Chromium instance over the DevTools
//! protocol, and locating the tab that holds the playlist page.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::{BrowserSession, PLAYLIST_HOST, is_playlist_url};
