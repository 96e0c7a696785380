//! Human-readable formatting for summary fields

/// Format a byte count using base-1024 units with one decimal place.
///
/// Units run B through GB; anything above a gigabyte stays in GB rather
/// than indexing past the unit table.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);

    format!("{:.1} {}", value, UNITS[exp])
}

/// Format a scan duration in seconds for the summary bar.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2} s", seconds)
}
