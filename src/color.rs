use crate::consts::MAX_COLOR_VALUE;
use crate::tuple::Tuple;

/// A color.
///
/// Colors are tuples whose `x`, `y` and `z` components are read as red,
/// green and blue, each nominally between 0.0 and 1.0 inclusive. The `w`
/// component is alpha; it rides along through the arithmetic but is never
/// written to an image.
///
/// # Examples
///
/// Construct the color red:
///
/// ```
/// # use ray_tracer_core::color::Color;
/// let red = Color::red();
/// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
/// ```
///
/// Blend two colors:
///
/// ```
/// # use ray_tracer_core::color::Color;
/// let yellow = Color::rgb(1.0, 1.0, 0.0);
/// let purple = Color::rgb(1.0, 0.0, 1.0);
/// assert_eq!(yellow.hadamard(&purple), Color::red());
/// ```
pub type Color = Tuple;

/// Maps a color channel to a byte.
///
/// The channel is scaled to `0..=255`, rounded up, and clamped, so anything
/// at or below 0.0 becomes `0` and anything at or above 1.0 becomes `255`.
///
/// ```
/// # use ray_tracer_core::color::channel_to_byte;
/// assert_eq!(channel_to_byte(0.5), 128);
/// assert_eq!(channel_to_byte(1.5), 255);
/// assert_eq!(channel_to_byte(-0.5), 0);
/// ```
pub fn channel_to_byte(channel: f64) -> u8 {
    let max = MAX_COLOR_VALUE as f64;
    (channel * max).ceil().clamp(0.0, max) as u8
}

impl Tuple {
    /// Creates an opaque color from red, green and blue values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Tuple::tuple(r, g, b, 1.0)
    }

    /// Creates a color with an explicit alpha.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Tuple::tuple(r, g, b, a)
    }

    pub fn r(&self) -> f64 {
        self.x
    }

    pub fn g(&self) -> f64 {
        self.y
    }

    pub fn b(&self) -> f64 {
        self.z
    }

    pub fn a(&self) -> f64 {
        self.w
    }

    /// The color black.
    pub fn black() -> Color {
        Color::rgb(0.0, 0.0, 0.0)
    }

    /// The color white.
    pub fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }

    /// The color red.
    pub fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    /// The color green.
    pub fn green() -> Color {
        Color::rgb(0.0, 1.0, 0.0)
    }

    /// The color blue.
    pub fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }

    /// The red, green and blue channels of the color as bytes.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_byte(self.r()),
            channel_to_byte(self.g()),
            channel_to_byte(self.b()),
        ]
    }
}

#[test]
fn color_channels() {
    let c = Color::rgb(-0.5, 0.4, 1.7);

    assert_eq!(c.r(), -0.5);
    assert_eq!(c.g(), 0.4);
    assert_eq!(c.b(), 1.7);
    assert_eq!(c.a(), 1.0);
}

#[test]
fn add_colors() {
    let c1 = Color::rgb(0.9, 0.6, 0.75);
    let c2 = Color::rgb(0.7, 0.1, 0.25);

    assert_eq!(c1 + c2, Color::rgb(1.6, 0.7, 1.0));
}

#[test]
fn subtract_colors() {
    let c1 = Color::rgb(0.9, 0.6, 0.75);
    let c2 = Color::rgb(0.7, 0.1, 0.25);

    // Both alphas are 1.0, so the difference carries an alpha of 0.0.
    assert_eq!(c1 - c2, Color::rgba(0.2, 0.5, 0.5, 0.0));
}

#[test]
fn multiply_colors() {
    let c = Color::rgb(0.2, 0.3, 0.4);

    assert_eq!(c * 2.0, Color::rgba(0.4, 0.6, 0.8, 2.0));
}

#[test]
fn hadamard_colors() {
    let c1 = Color::rgb(1.0, 0.2, 0.4);
    let c2 = Color::rgb(0.9, 1.0, 0.1);

    assert_eq!(c1.hadamard(&c2), Color::rgb(0.9, 0.2, 0.04));
}

#[test]
fn color_to_bytes() {
    assert_eq!(Color::rgb(1.0, 0.5, 0.0).to_rgb8(), [255, 128, 0]);
    assert_eq!(Color::rgb(1.5, -1.5, 0.8).to_rgb8(), [255, 0, 204]);
}
