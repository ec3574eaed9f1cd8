// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.000001;

// Image encoding
pub const PPM_MAX_LINE_WIDTH: usize = 70;
pub const MAX_COLOR_VALUE: u8 = 255;

// Output
pub const OUTPUT_DIR: &'static str = "output/";

// Demo canvas sizes
pub const PROJECTILE_CANVAS_WIDTH: usize = 900;
pub const PROJECTILE_CANVAS_HEIGHT: usize = 550;
pub const CLOCK_CANVAS_SIZE: usize = 150;

// Demo limits
pub const MAX_PROJECTILE_TICKS: usize = 10_000;
