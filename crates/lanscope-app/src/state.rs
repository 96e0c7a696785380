//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use lanscope_core::{Category, Device, ScanResult};

use crate::config::Settings;

/// Active category filter over the stored device list.
///
/// Filtering is a pure re-render over cached state -- changing the filter
/// never triggers a network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every device from the last scan
    All,
    /// Show only devices whose category matches exactly
    Category(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => wanted == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(category) => category.label(),
        }
    }
}

/// Summary fields from the last successful scan.
///
/// A failed scan never touches this; the summary keeps showing the values
/// from the last scan that worked.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSummary {
    /// Scan duration in seconds, as reported by the service
    pub scan_time: f64,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    /// Local wall-clock time the result arrived
    pub completed_at: DateTime<Local>,
}

impl ScanSummary {
    fn from_result(result: &ScanResult) -> Self {
        Self {
            scan_time: result.scan_time,
            bytes_sent: result.usage.bytes_sent,
            bytes_recv: result.usage.bytes_recv,
            completed_at: Local::now(),
        }
    }
}

/// Number of ticks a full panel slide takes (ticks arrive every ~50ms).
pub const SLIDE_STEPS: u8 = 4;

/// Detail side panel state: `Closed ⇄ Open(device)`, independent of scan state.
///
/// The panel slides in and out over a few ticks. Closing hides the panel but
/// keeps the last device; the next open simply overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPanelState {
    device: Option<Device>,
    open: bool,
    slide: u8,
}

impl DetailPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the panel for a device, replacing any previous content.
    pub fn open(&mut self, device: Device) {
        self.device = Some(device);
        self.open = true;
        // Make the panel visible on the very next draw, not one tick later
        if self.slide == 0 {
            self.slide = 1;
        }
    }

    /// Start sliding the panel out. Content is retained, not cleared.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance the slide animation one step toward the target position.
    pub fn on_tick(&mut self) {
        if self.open {
            self.slide = (self.slide + 1).min(SLIDE_STEPS);
        } else {
            self.slide = self.slide.saturating_sub(1);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while any part of the panel should be drawn (includes slide-out).
    pub fn is_visible(&self) -> bool {
        self.slide > 0
    }

    /// Current slide position, `0..=SLIDE_STEPS`.
    pub fn slide(&self) -> u8 {
        self.slide
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }
}

/// Application state (Model in TEA pattern)
///
/// Owns the last successful scan's device list for the lifetime of the
/// process. Render functions read this state and never mutate it; all
/// mutation happens in [`crate::handler::update`].
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Devices from the most recent successful scan, in service order
    pub devices: Vec<Device>,
    /// Summary fields from the most recent successful scan
    pub summary: Option<ScanSummary>,
    /// True while a scan request is in flight (the explicit guard: a second
    /// trigger from any path is a no-op until the first completes)
    pub scanning: bool,
    /// Error from the most recent scan attempt, cleared by the next success
    pub scan_error: Option<String>,
    /// Whether any scan has ever completed (distinguishes the startup hint
    /// from a legitimately empty result)
    pub has_scanned: bool,

    /// Active category filter
    pub filter: CategoryFilter,
    /// Selection index into the *filtered* device list
    pub selected: usize,

    /// Detail side panel
    pub detail: DetailPanelState,

    /// Tick counter driving the scanning spinner
    pub tick: u64,

    should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            devices: Vec::new(),
            summary: None,
            scanning: false,
            scan_error: None,
            has_scanned: false,
            filter: CategoryFilter::All,
            selected: 0,
            detail: DetailPanelState::new(),
            tick: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────────
    // Scan lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Mark a scan as started. Returns `false` (and does nothing) if one is
    /// already in flight.
    pub fn begin_scan(&mut self) -> bool {
        if self.scanning {
            return false;
        }
        self.scanning = true;
        true
    }

    /// Store a successful scan, replacing the previous result in full.
    ///
    /// The filter resets to All and the selection returns to the first card.
    pub fn apply_scan_result(&mut self, result: ScanResult) {
        self.summary = Some(ScanSummary::from_result(&result));
        self.devices = result.devices;
        self.scanning = false;
        self.scan_error = None;
        self.has_scanned = true;
        self.filter = CategoryFilter::All;
        self.selected = 0;
    }

    /// Record a failed scan. Devices and summary from the last successful
    /// scan stay untouched; only the list area shows the error.
    pub fn apply_scan_failure(&mut self, error: String) {
        self.scanning = false;
        self.scan_error = Some(error);
    }

    // ─────────────────────────────────────────────────────────────
    // Filtering & selection
    // ─────────────────────────────────────────────────────────────

    /// Devices passing the active filter, in stored (service) order.
    pub fn visible_devices(&self) -> Vec<&Device> {
        self.devices
            .iter()
            .filter(|d| self.filter.matches(&d.category))
            .collect()
    }

    /// The device under the cursor, if any.
    pub fn selected_device(&self) -> Option<&Device> {
        self.visible_devices().get(self.selected).copied()
    }

    /// Filter choices in display order: All, the known categories, then any
    /// unrecognized categories present in the current result (deduplicated,
    /// first-seen order).
    pub fn filter_options(&self) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(Category::known().into_iter().map(CategoryFilter::Category));
        for device in &self.devices {
            if matches!(device.category, Category::Unknown(_)) {
                let option = CategoryFilter::Category(device.category.clone());
                if !options.contains(&option) {
                    options.push(option);
                }
            }
        }
        options
    }

    /// Filter options paired with how many stored devices each one matches.
    pub fn filter_counts(&self) -> Vec<(CategoryFilter, usize)> {
        self.filter_options()
            .into_iter()
            .map(|option| {
                let count = self
                    .devices
                    .iter()
                    .filter(|d| option.matches(&d.category))
                    .count();
                (option, count)
            })
            .collect()
    }

    pub fn cycle_filter_next(&mut self) {
        self.cycle_filter(1);
    }

    pub fn cycle_filter_prev(&mut self) {
        self.cycle_filter(-1);
    }

    fn cycle_filter(&mut self, direction: isize) {
        let options = self.filter_options();
        let current = options
            .iter()
            .position(|o| *o == self.filter)
            .unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = (current + direction).rem_euclid(len) as usize;
        self.filter = options[next].clone();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.visible_devices().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.visible_devices().len();
        self.selected = len.saturating_sub(1);
    }

    // ─────────────────────────────────────────────────────────────
    // Detail panel
    // ─────────────────────────────────────────────────────────────

    /// Open the detail panel for the device under the cursor.
    pub fn open_detail(&mut self) {
        if let Some(device) = self.selected_device().cloned() {
            self.detail.open(device);
        }
    }

    /// Advance tick-driven animation state.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.detail.on_tick();
    }
}
