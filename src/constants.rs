use std::time::Duration;

pub const FPS: u32 = 60;                                      // Simulation steps per second
pub const FRAME_TIME: Duration = Duration::from_micros(1_000_000 / FPS as u64);

pub const SETTLE_DURATION: Duration = Duration::from_millis(700); // Navigation lock after a step
pub const DEFAULT_INTERVAL_MS: u32 = 3000;                    // Autoplay hold per slide

// --- Fade ---
pub const FADE_DURATION: f64 = 0.7;                           // Opacity crossfade (seconds)
pub const FADE_Z_CURRENT: i32 = 10;
pub const FADE_Z_OTHER: i32 = 0;

// --- Carousel, standard translation ---
pub const SLIDE_DURATION: f64 = 0.7;                          // Lateral translation (seconds)
pub const SLIDE_Z_CURRENT: i32 = 10;
pub const SLIDE_Z_OTHER: i32 = 5;
pub const SLIDE_EASING: [f64; 4] = [0.23, 1.0, 0.32, 1.0];

// --- Carousel, 3D wheel ---
pub const WHEEL_MIN_SLOTS: usize = 4;                         // Ring never divides into fewer slots
pub const WHEEL_FEW_SLIDES_ANGLE: f64 = 45.0;                 // Degrees per step on small rings
pub const WHEEL_RADIUS: f64 = 400.0;                          // Depth push (px)
pub const WHEEL_PERSPECTIVE: f64 = 1200.0;                    // Stage perspective (px)
pub const WHEEL_INACTIVE_SCALE: f64 = 0.85;
pub const WHEEL_OPACITY_FALLOFF: f64 = 0.6;                   // Opacity lost per slide of distance
pub const WHEEL_HIDE_DISTANCE: i64 = 2;                       // Hidden beyond this many slides
pub const WHEEL_Z_CURRENT: i32 = 20;
pub const WHEEL_Z_BASE: i32 = 10;
pub const WHEEL_DURATION: f64 = 0.8;
pub const WHEEL_OPACITY_DURATION: f64 = 0.6;
pub const WHEEL_EASING: [f64; 4] = [0.34, 1.56, 0.64, 1.0];

// --- Linear strip ---
pub const STRIP_ITEM_WIDTH_PERCENT: f64 = 85.0;               // Share of the viewport per item
