//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Emoji` — the category icons the scan UI has always used
//! - `IconMode::Ascii` — plain characters for terminals without emoji fonts

use lanscope_app::config::IconMode;
use lanscope_core::Category;

/// Spinner frames for the scan-in-flight indicator
const SPINNER_BRAILLE: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Category icon shown on each device card.
    ///
    /// Fixed mapping: Device→📱, Router→🌐, Other→🔧, anything
    /// unrecognized→❓.
    pub fn category(&self, category: &Category) -> &'static str {
        match self.mode {
            IconMode::Emoji => match category {
                Category::Device => "📱",
                Category::Router => "🌐",
                Category::Other => "🔧",
                Category::Unknown(_) => "❓",
            },
            IconMode::Ascii => match category {
                Category::Device => "[D]",
                Category::Router => "[R]",
                Category::Other => "[O]",
                Category::Unknown(_) => "[?]",
            },
        }
    }

    /// Marker on the detail panel title
    pub fn pin(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📍",
            IconMode::Ascii => ">",
        }
    }

    /// Failed-scan marker in the device area
    pub fn error(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "❌",
            IconMode::Ascii => "x",
        }
    }

    /// Animated scan-in-flight indicator
    pub fn spinner(&self, tick: u64) -> &'static str {
        match self.mode {
            IconMode::Emoji => SPINNER_BRAILLE[(tick as usize) % SPINNER_BRAILLE.len()],
            IconMode::Ascii => SPINNER_ASCII[(tick as usize) % SPINNER_ASCII.len()],
        }
    }

    /// Status dot for the header and status bar
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "●",
            IconMode::Ascii => "*",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_category_mapping() {
        let icons = IconSet::new(IconMode::Emoji);
        assert_eq!(icons.category(&Category::Device), "📱");
        assert_eq!(icons.category(&Category::Router), "🌐");
        assert_eq!(icons.category(&Category::Other), "🔧");
        assert_eq!(icons.category(&Category::Unknown("Camera".into())), "❓");
    }

    #[test]
    fn test_every_unknown_label_gets_the_same_icon() {
        let icons = IconSet::new(IconMode::Emoji);
        assert_eq!(icons.category(&Category::Unknown("NAS".into())), "❓");
        assert_eq!(icons.category(&Category::Unknown("".into())), "❓");
    }

    #[test]
    fn test_ascii_icons_are_plain() {
        let icons = IconSet::new(IconMode::Ascii);
        for category in Category::known() {
            assert!(icons.category(&category).is_ascii());
        }
        assert!(icons.error().is_ascii());
        assert!(icons.pin().is_ascii());
    }

    #[test]
    fn test_emoji_and_ascii_differ() {
        let emoji = IconSet::new(IconMode::Emoji);
        let ascii = IconSet::new(IconMode::Ascii);
        assert_ne!(
            emoji.category(&Category::Device),
            ascii.category(&Category::Device)
        );
        assert_ne!(
            emoji.category(&Category::Router),
            ascii.category(&Category::Router)
        );
    }

    #[test]
    fn test_spinner_cycles() {
        let icons = IconSet::new(IconMode::Emoji);
        assert_eq!(icons.spinner(0), icons.spinner(8));
        assert_ne!(icons.spinner(0), icons.spinner(1));
    }
}
