use log::Level;

/// Hosted form relay that forwards contact submissions by email.
pub const RELAY_ENDPOINT: &str = "https://formspree.io/f/xwpejjyb";

/// localStorage slot holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Height of the fixed header, subtracted from scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Distance from the viewport top a section must straddle to count as active.
pub const ACTIVE_PROBE_PX: f64 = 100.0;

pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
