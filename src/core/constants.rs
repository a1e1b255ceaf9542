use std::time::Duration;

// Tuning values for the interactive pieces of the page.

// Scroll thresholds (CSS pixels, strict `offset > threshold`)
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// Extra gap left above a section when jumping to it from the nav
pub const NAV_SCROLL_PADDING_PX: f64 = 20.0;

// Tilt cards
pub const TILT_MAX_ANGLE_DEG: f32 = 20.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_HOVER_SCALE: f32 = 1.05;
pub const TILT_RESET_DURATION: Duration = Duration::from_millis(500);
pub const GLOSS_HOVER_OPACITY: f32 = 0.4;

// Hero title typing
pub const TYPING_INITIAL_DELAY: Duration = Duration::from_millis(500);
pub const TYPING_TICK: Duration = Duration::from_millis(100);

// Contact form
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(1500);
pub const SUCCESS_MESSAGE_TTL: Duration = Duration::from_millis(5000);
pub const SEND_SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I will get back to you soon.";

// Skill levels are rated 1..=5
pub const SKILL_LEVEL_MAX: u8 = 5;
