//! Full-screen render tests over TestBackend

use super::view;
use crate::test_utils::TestTerminal;

use lanscope_app::config::Settings;
use lanscope_app::state::{AppState, CategoryFilter, SLIDE_STEPS};
use lanscope_core::{Category, Device, ScanResult, UsageStats};

fn device(ip: &str, hostname: &str, category: Category) -> Device {
    Device {
        ip: ip.to_string(),
        mac: "aa:bb:cc:dd:ee:ff".to_string(),
        hostname: hostname.to_string(),
        category,
    }
}

fn sample_result() -> ScanResult {
    ScanResult {
        devices: vec![
            device("192.168.1.1", "gateway", Category::Router),
            device("192.168.1.23", "laptop", Category::Device),
            device("192.168.1.40", "mystery", Category::Other),
            device("192.168.1.77", "doorcam", Category::Unknown("Camera".into())),
        ],
        usage: UsageStats {
            bytes_sent: 1024,
            bytes_recv: 1_048_576,
        },
        scan_time: 4.27,
    }
}

fn state_with_result() -> AppState {
    let mut state = AppState::new(Settings::default());
    state.begin_scan();
    state.apply_scan_result(sample_result());
    state
}

#[test]
fn test_startup_screen_shows_title_and_hint() {
    let state = AppState::new(Settings::default());
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("lanscope"));
    assert!(term.buffer_contains("http://127.0.0.1:5050"));
    assert!(term.buffer_contains("Press [s] to scan"));
    assert!(term.buffer_contains("Devices (0)"));
    // No scan yet: summary fields show placeholders
    assert!(term.buffer_contains("Scan time: —"));
}

#[test]
fn test_all_filter_renders_every_device_in_order() {
    let state = state_with_result();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Devices (4)"));
    let first = term.find("192.168.1.1").unwrap();
    let second = term.find("192.168.1.23").unwrap();
    let third = term.find("192.168.1.40").unwrap();
    let fourth = term.find("192.168.1.77").unwrap();
    assert!(first < second && second < third && third < fourth);
}

#[test]
fn test_category_icons() {
    let state = state_with_result();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("🌐")); // Router
    assert!(term.buffer_contains("📱")); // Device
    assert!(term.buffer_contains("🔧")); // Other
    assert!(term.buffer_contains("❓")); // Unrecognized category
}

#[test]
fn test_category_filter_renders_exact_subset() {
    let mut state = state_with_result();
    state.filter = CategoryFilter::Category(Category::Device);
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Devices (1)"));
    assert!(term.buffer_contains("192.168.1.23"));
    assert!(!term.buffer_contains("192.168.1.1 "));
    assert!(!term.buffer_contains("192.168.1.40"));
}

#[test]
fn test_rendering_is_idempotent() {
    let state = state_with_result();

    let mut first = TestTerminal::new();
    first.draw_with(|frame| view(frame, &state));
    let mut second = TestTerminal::new();
    second.draw_with(|frame| view(frame, &state));

    assert_eq!(first.content(), second.content());
}

#[test]
fn test_summary_formats_bytes_and_duration() {
    let state = state_with_result();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Scan time: 4.27 s"));
    assert!(term.buffer_contains("Sent: 1.0 KB"));
    assert!(term.buffer_contains("Received: 1.0 MB"));
    assert!(term.buffer_contains("Devices: 4"));
}

#[test]
fn test_filter_bar_shows_counts() {
    let state = state_with_result();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("All (4)"));
    assert!(term.buffer_contains("Device (1)"));
    assert!(term.buffer_contains("Router (1)"));
    assert!(term.buffer_contains("Camera (1)"));
}

#[test]
fn test_scanning_placeholder_replaces_list() {
    let mut state = state_with_result();
    state.begin_scan();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Scanning..."));
    // Cards are hidden while the placeholder is up
    assert!(!term.buffer_contains("192.168.1.23"));
    // Summary keeps its prior values
    assert!(term.buffer_contains("Sent: 1.0 KB"));
}

#[test]
fn test_failed_scan_shows_error_and_keeps_summary() {
    let mut state = state_with_result();
    state.begin_scan();
    state.apply_scan_failure("connection refused".to_string());
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Scan failed!"));
    assert!(term.buffer_contains("connection refused"));
    // Error replaces the card list but leaves the summary untouched
    assert!(!term.buffer_contains("192.168.1.23"));
    assert!(term.buffer_contains("Scan time: 4.27 s"));
    // Control is re-armed: header shows the scan hint again
    assert!(term.buffer_contains("[s] Scan"));
}

#[test]
fn test_detail_panel_shows_all_four_fields() {
    let mut state = state_with_result();
    state.select_next(); // laptop
    state.open_detail();
    for _ in 0..SLIDE_STEPS {
        state.on_tick();
    }
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Device Details"));
    assert!(term.buffer_contains("IP Address"));
    assert!(term.buffer_contains("MAC Address"));
    assert!(term.buffer_contains("Hostname"));
    assert!(term.buffer_contains("Category"));
    assert!(term.buffer_contains("laptop"));
    assert!(term.buffer_contains("[Esc] Close"));
}

#[test]
fn test_detail_panel_slides_out_on_close() {
    let mut state = state_with_result();
    state.open_detail();
    for _ in 0..SLIDE_STEPS {
        state.on_tick();
    }
    state.detail.close();
    for _ in 0..SLIDE_STEPS {
        state.on_tick();
    }

    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));
    assert!(!term.buffer_contains("Device Details"));
    // Content is retained for the next open, it just is not drawn
    assert!(state.detail.device().is_some());
}

#[test]
fn test_selection_marker_follows_cursor() {
    let mut state = state_with_result();
    state.select_next();
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &state));

    let content = term.content();
    let marker_line = content
        .lines()
        .find(|line| line.contains('❯'))
        .expect("selection marker rendered");
    assert!(marker_line.contains("192.168.1.23"));
}
