use crate::{browser::config::{ConnectionOptions, LaunchOptions},
            error::{ProgressError, Result}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Host substring a tab URL must contain to be considered a playlist page
pub const PLAYLIST_HOST: &str = "bilibili.com";

/// Check whether a tab URL points at the video platform
///
/// Substring match, so every subdomain (www, m, live) qualifies.
pub fn is_playlist_url(url: &str) -> bool {
    url.contains(PLAYLIST_HOST)
}

/// Browser session that manages a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        // Ignore default arguments to prevent detection by anti-bot services
        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Keep the browser alive between manual refreshes (default idle timeout is 30 seconds)
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        launch_opts.sandbox = options.sandbox;

        let browser = Browser::new(launch_opts).map_err(|e| ProgressError::LaunchFailed(e.to_string()))?;

        browser.new_tab().map_err(|e| ProgressError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser })
    }

    /// Connect to an existing browser instance via its DevTools WebSocket
    pub fn connect(options: ConnectionOptions) -> Result<Self> {
        let browser =
            Browser::connect(options.ws_url).map_err(|e| ProgressError::ConnectionFailed(e.to_string()))?;

        Ok(Self { browser })
    }

    /// Get all tabs
    pub fn get_tabs(&self) -> Result<Vec<Arc<Tab>>> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| ProgressError::TabOperationFailed(format!("Failed to get tabs: {}", e)))?
            .clone();

        Ok(tabs)
    }

    /// Find the first open tab whose URL belongs to the video platform
    ///
    /// Validation happens before any extraction is attempted; when no tab
    /// qualifies the caller gets a wrong-page error with user guidance.
    pub fn find_playlist_tab(&self) -> Result<Arc<Tab>> {
        let tabs = self.get_tabs()?;

        for tab in &tabs {
            let url = tab.get_url();
            if is_playlist_url(&url) {
                log::debug!("Using playlist tab: {}", url);
                return Ok(tab.clone());
            }
        }

        Err(ProgressError::WrongPage(format!(
            "open a {} video page and try again",
            PLAYLIST_HOST
        )))
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate the first tab to a URL and wait for the load to settle
    ///
    /// Only used in launch mode; in connect mode the user's existing tabs
    /// are left untouched.
    pub fn open(&self, url: &str) -> Result<Arc<Tab>> {
        let tab = self
            .get_tabs()?
            .first()
            .cloned()
            .ok_or_else(|| ProgressError::TabOperationFailed("No tab available".to_string()))?;

        tab.navigate_to(url)
            .map_err(|e| ProgressError::TabOperationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        tab.wait_until_navigated()
            .map_err(|e| ProgressError::TabOperationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(tab)
    }

    /// Close the browser by closing all of its tabs
    pub fn close(&self) -> Result<()> {
        let tabs = self.get_tabs()?;
        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }
        Ok(())
    }
}
