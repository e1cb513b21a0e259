//! 24-bit ANSI colors and the fixed level-to-color table used by console output.

/// RGB triple rendered as a true-color SGR escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `\x1b[38;2;R;G;Bm`
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }
}

/// Color for a level name, case-insensitive. `None` means the neutral reset style.
#[must_use]
pub fn level_color(level: &str) -> Option<Color> {
    match level.to_ascii_uppercase().as_str() {
        "INFO" => Some(Color::cyan()),
        "WARNING" | "WARN" => Some(Color::yellow()),
        "ERROR" | "CRITICAL" => Some(Color::red()),
        "DEBUG" => Some(Color::purple()),
        "SUCCESS" => Some(Color::green()),
        _ => None,
    }
}

/// Wraps `text` in the level's color; unknown levels get the reset sequence instead of a color.
#[must_use]
pub fn colorize_level(text: &str, level: &str) -> String {
    let start = level_color(level).map_or_else(|| Color::RESET.to_string(), Color::fg_ansi);
    let reset = Color::RESET;
    format!("{start}{text}{reset}")
}
