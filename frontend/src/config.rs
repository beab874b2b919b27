use log::Level;

/// Site content, edited in `content.json` and baked into the bundle.
pub const CONTENT_JSON: &str = include_str!("../content.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn style_probe_enabled() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn style_probe_enabled() -> bool {
    false
}
