//! pod-progress CLI
//!
//! Attaches to a running Chrome/Chromium instance (or launches one), pulls
//! the playlist watch progress out of the active bilibili tab, and draws it
//! as a progress ring. Refreshing is manual: Enter re-runs the extraction,
//! `q` quits.

use anyhow::{Context, Result, bail};
use clap::Parser;
use pod_progress::browser::{BrowserSession, ConnectionOptions, LaunchOptions};
use pod_progress::fetch::{self, STARTUP_DELAY};
use pod_progress::presenter::Presenter;
use std::io::{BufRead, Write, stdin, stdout};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pod-progress", version, about = "Playlist watch progress from a live browser tab")]
struct Cli {
    /// DevTools WebSocket URL of a running browser
    /// (start it with --remote-debugging-port and copy the ws:// URL)
    #[arg(long, conflicts_with = "launch")]
    ws_url: Option<String>,

    /// Launch a browser instead of attaching to one
    #[arg(long)]
    launch: bool,

    /// Launch with a visible window
    #[arg(long, requires = "launch")]
    headed: bool,

    /// URL to open after launching
    #[arg(long, requires = "launch")]
    url: Option<String>,

    /// Extraction timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    /// Run a single refresh and exit
    #[arg(long)]
    once: bool,

    /// Print the raw snapshot as JSON instead of drawing the ring
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let timeout = Duration::from_millis(cli.timeout_ms);

    let session = if let Some(ws_url) = &cli.ws_url {
        BrowserSession::connect(ConnectionOptions::new(ws_url)).context("Could not attach to browser")?
    } else if cli.launch {
        let session = BrowserSession::launch(LaunchOptions::new().headless(!cli.headed))
            .context("Could not launch browser")?;
        if let Some(url) = &cli.url {
            session.open(url).context("Could not open start page")?;
        }
        session
    } else {
        bail!("pass --ws-url to attach to a running browser, or --launch to start one");
    };

    // Let the attached browser settle before the first automatic load
    std::thread::sleep(STARTUP_DELAY);

    if cli.json {
        let snapshot = fetch::fetch_snapshot(&session, timeout)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let mut presenter = Presenter::new();
    refresh(&session, timeout, &mut presenter);

    if cli.once {
        return Ok(());
    }

    let input = stdin();
    loop {
        print!("Enter to refresh, q to quit > ");
        stdout().flush()?;

        let mut line = String::new();
        if input.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        refresh(&session, timeout, &mut presenter);
    }

    Ok(())
}

/// One manual request cycle: announce, fetch, redraw
fn refresh(session: &BrowserSession, timeout: Duration, presenter: &mut Presenter) {
    presenter.begin_fetch();
    println!("  {}", presenter.status());

    presenter.apply(fetch::fetch_snapshot(session, timeout));
    println!("{}", presenter.render());
}
