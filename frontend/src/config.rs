use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const ASSET_BASE: &str = "/assets";

// Counter animation
pub const COUNTER_DURATION_MS: f64 = 2500.0;
pub const FRAME_INTERVAL_MS: u32 = 16;

// Reveal-on-view
pub const REVEAL_DURATION_S: f64 = 0.6;
pub const REVEAL_OFFSET_PX: f64 = 20.0;
pub const REVEAL_AMOUNT: f64 = 1.0;

// Hero collage section is this many viewport heights tall
pub const HERO_SCROLL_VH: u32 = 350;

pub const NAV_SOLID_BACKGROUND: &str = "rgb(13,10,9)";

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSET_BASE, file)
}
