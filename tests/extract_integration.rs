use pod_progress::browser::{BrowserSession, LaunchOptions};
use pod_progress::playlist::{PlaylistSnapshot, extract_page, extract_snapshot};

fn launch() -> BrowserSession {
    BrowserSession::launch(LaunchOptions::new().headless(true)).expect("Failed to launch browser")
}

fn playlist_html(entries: &[(&str, bool)]) -> String {
    let items: String = entries
        .iter()
        .map(|(duration, active)| {
            let class = if *active { "simple-base-item active" } else { "simple-base-item" };
            format!(
                "<div class='{}'><span class='stat-item duration'>{}</span></div>",
                class, duration
            )
        })
        .collect();

    format!("data:text/html,<html><body><div class='video-pod__list'>{}</div></body></html>", items)
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_extract_page_reads_playlist_pane() {
    let session = launch();
    let tab = session.open(&playlist_html(&[("01:00", false), ("02:00", true), ("03:00", false)]))
        .expect("Failed to open test page");

    std::thread::sleep(std::time::Duration::from_millis(500));

    let page = extract_page(&tab).expect("Failed to extract page");

    assert_eq!(page.items.len(), 3);
    assert!(!page.items[0].active);
    assert!(page.items[1].active);
    assert_eq!(page.items[0].duration.as_deref(), Some("01:00"));
    assert_eq!(page.items[2].duration.as_deref(), Some("03:00"));
}

#[test]
#[ignore]
fn test_extract_snapshot_aggregates() {
    let session = launch();
    let tab = session.open(&playlist_html(&[("01:00", false), ("02:00", true), ("03:00", false)]))
        .expect("Failed to open test page");

    std::thread::sleep(std::time::Duration::from_millis(500));

    let snapshot = extract_snapshot(&tab).expect("Failed to extract snapshot");

    assert_eq!(snapshot.total, 360);
    assert_eq!(snapshot.watched, 60);
    assert_eq!(snapshot.current_index, Some(1));
    assert_eq!(snapshot.percentage(), 17);
}

#[test]
#[ignore]
fn test_extract_page_without_playlist_pane() {
    let session = launch();
    let tab = session.open("data:text/html,<html><body><p>No playlist here</p></body></html>")
        .expect("Failed to open test page");

    std::thread::sleep(std::time::Duration::from_millis(500));

    // A page without the pane is an empty playlist, not an error
    let page = extract_page(&tab).expect("Failed to extract page");
    assert!(page.items.is_empty());

    let snapshot = PlaylistSnapshot::aggregate(&page);
    assert_eq!(snapshot.total, 0);
    assert_eq!(snapshot.percentage(), 0);
}

#[test]
#[ignore]
fn test_extract_page_with_missing_duration_labels() {
    // Two items but only one duration label; the second item counts as 0
    let html = "data:text/html,<html><body><div class='video-pod__list'>\
        <div class='simple-base-item active'><span class='stat-item duration'>05:00</span></div>\
        <div class='simple-base-item'></div>\
        </div></body></html>";

    let session = launch();
    let tab = session.open(html).expect("Failed to open test page");

    std::thread::sleep(std::time::Duration::from_millis(500));

    let snapshot = extract_snapshot(&tab).expect("Failed to extract snapshot");
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.total, 300);
    assert_eq!(snapshot.watched, 0);
}
