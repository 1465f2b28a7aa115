use log::Level;

pub const BACKGROUND_VIDEO: &str = "/yacht-animation.mp4";
pub const AMBIENT_AUDIO: &str = "/morning-ambience.mp3";
pub const BROKEN_MEDIA_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=600&text=unavailable";

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_STAGGER_SECS: f64 = 0.2;

// Matches the overlay exit keyframes in the page stylesheet.
pub const OVERLAY_EXIT_MS: u32 = 200;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 12;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
