use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Stand-in latency for form submissions, since nothing is sent anywhere.
#[cfg(debug_assertions)]
pub fn simulated_submit_ms() -> u32 {
    600
}

#[cfg(not(debug_assertions))]
pub fn simulated_submit_ms() -> u32 {
    1500
}

/// How long the studio pretends to render an image.
#[cfg(debug_assertions)]
pub fn simulated_generation_ms() -> u32 {
    1200
}

#[cfg(not(debug_assertions))]
pub fn simulated_generation_ms() -> u32 {
    3000
}

pub const FEEDBACK_RESET_MS: u32 = 2000;

/// The custom cursor is a desktop nicety; keep it off while debugging
/// layouts so the native pointer is visible.
pub fn cursor_follower_enabled() -> bool {
    !cfg!(debug_assertions)
}
