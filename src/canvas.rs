use std::fmt;
use std::io::Cursor;
use std::path::{ Path, PathBuf };
use std::str::FromStr;

use crate::color::Color;
use crate::consts::{ PPM_MAX_LINE_WIDTH, MAX_COLOR_VALUE };
use crate::error::{ Error, Result };
use crate::output::write_output;

/// The image formats a `Canvas` can be saved as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Plain-text PPM (`P3`).
    Ppm,
    Png,
}

impl ImageFormat {
    /// Picks the format from a file name's extension.
    pub fn from_path(path: &Path) -> Result<ImageFormat> {
        let ext = path.extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        ext.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<ImageFormat> {
        match s.to_ascii_lowercase().as_str() {
            "ppm" => Ok(ImageFormat::Ppm),
            "png" => Ok(ImageFormat::Png),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A canvas for drawing pixels.
///
/// The canvas is a grid of colors, initially black. Once drawing is done it
/// can be encoded as a PPM or PNG image and saved.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Canvas {
    /// The width of the canvas, in pixels.
    pub width: usize,

    /// The height of the canvas, in pixels.
    pub height: usize,

    /// The pixels of the canvas, stored as a flattened vector.
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a new, all black canvas with specified width and height.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Color::black(); width * height]
        }
    }

    /// Writes a color to a location on the `Canvas`.
    ///
    /// Out-of-bounds pixels are ignored. `x` is the column of the pixel and
    /// `y` the row, both zero-indexed from the top left.
    ///
    /// # Examples
    ///
    /// Writing a pixel to the fourth column, second row on an 8-by-8 canvas:
    ///
    /// ```
    /// # use ray_tracer_core::color::Color;
    /// # use ray_tracer_core::canvas::Canvas;
    /// let purple = Color::rgb(1.0, 0.0, 1.0);
    /// let mut canvas = Canvas::new(8, 8);
    /// canvas.write_pixel(4, 2, &purple);
    /// assert_eq!(canvas.read_pixel(4, 2).unwrap(), purple);
    /// ```
    pub fn write_pixel(&mut self, x: usize, y: usize, pixel: &Color) {
        // Silently ignore out-of-bounds pixels
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[(y * self.width) + x] = *pixel;
    }

    /// Reads a color from a location on the `Canvas`.
    ///
    /// Returns `None` if the location is out-of-bounds. See `write_pixel`.
    pub fn read_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None
        }

        Some(self.pixels[(y * self.width) + x])
    }

    /// Encodes the canvas as a plain-text PPM image.
    ///
    /// Every canvas row starts on a new line. Lines are kept within 70
    /// columns; a value that would cross the limit moves to the next line.
    /// The output always ends with a newline.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n{}\n", self.width, self.height, MAX_COLOR_VALUE);
        if self.width == 0 {
            return out;
        }

        for row in self.pixels.chunks(self.width) {
            let mut col = 0;
            for channel in row.iter().flat_map(|pixel| pixel.to_rgb8().to_vec()) {
                let value = channel.to_string();

                if col == 0 {
                    // First value on the line, no separator
                } else if col + 1 + value.len() > PPM_MAX_LINE_WIDTH {
                    out.push('\n');
                    col = 0;
                } else {
                    out.push(' ');
                    col += 1;
                }

                out.push_str(&value);
                col += value.len();
            }

            out.push('\n');
        }

        out
    }

    /// Encodes the canvas as a PNG image, fully opaque.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let [r, g, b] = self.pixels[(y as usize * self.width) + x as usize].to_rgb8();
            image::Rgba([r, g, b, MAX_COLOR_VALUE])
        });

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png)?;

        Ok(buf.into_inner())
    }

    /// Encodes the canvas in the given format.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        match format {
            ImageFormat::Ppm => Ok(self.to_ppm().into_bytes()),
            ImageFormat::Png => self.to_png(),
        }
    }

    /// Saves the canvas as `dir/name`, picking the format from the extension
    /// of `name` (`.ppm` or `.png`).
    ///
    /// See `output::write_output` for how directories and name collisions are
    /// handled. Returns the path that was written.
    pub fn save(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let format = ImageFormat::from_path(Path::new(name))?;
        log::debug!("Encoding {}x{} canvas as {}", self.width, self.height, format);

        write_output(dir, name, &self.encode(format)?)
    }
}

#[test]
fn new_canvas_is_black() {
    let c = Canvas::new(10, 20);

    assert_eq!(c.width, 10);
    assert_eq!(c.height, 20);
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(c.read_pixel(x, y).unwrap(), Color::black());
        }
    }
}

#[test]
fn write_and_read_pixel() {
    let mut c = Canvas::new(10, 20);
    let red = Color::red();

    c.write_pixel(2, 3, &red);
    assert_eq!(c.read_pixel(2, 3).unwrap(), red);
}

#[test]
fn out_of_bounds_pixels() {
    let mut c = Canvas::new(4, 4);

    c.write_pixel(4, 0, &Color::red());
    c.write_pixel(0, 4, &Color::red());
    assert_eq!(c.read_pixel(4, 0), None);
    assert_eq!(c, Canvas::new(4, 4));
}

#[test]
fn ppm_header() {
    let c = Canvas::new(5, 3);
    let ppm = c.to_ppm();
    let lines: Vec<&str> = ppm.lines().take(3).collect();

    assert_eq!(lines, vec!["P3", "5 3", "255"]);
}

#[test]
fn ppm_pixel_data() {
    let mut c = Canvas::new(5, 3);
    c.write_pixel(0, 0, &Color::rgb(1.5, 0.0, 0.0));
    c.write_pixel(2, 1, &Color::rgb(0.0, 0.5, 0.0));
    c.write_pixel(4, 2, &Color::rgb(-0.5, 0.0, 1.0));

    let ppm = c.to_ppm();
    let lines: Vec<&str> = ppm.lines().skip(3).collect();

    assert_eq!(lines, vec![
        "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0",
        "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0",
        "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255",
    ]);
}

#[test]
fn ppm_splits_long_lines() {
    let mut c = Canvas::new(10, 2);
    for y in 0..2 {
        for x in 0..10 {
            c.write_pixel(x, y, &Color::rgb(1.0, 0.8, 0.6));
        }
    }

    let ppm = c.to_ppm();
    let lines: Vec<&str> = ppm.lines().skip(3).collect();

    assert_eq!(lines, vec![
        "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
        "153 255 204 153 255 204 153 255 204 153 255 204 153",
        "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
        "153 255 204 153 255 204 153 255 204 153 255 204 153",
    ]);
    assert!(ppm.lines().all(|l| l.len() <= PPM_MAX_LINE_WIDTH));
}

#[test]
fn ppm_ends_with_newline() {
    let c = Canvas::new(5, 3);

    assert!(c.to_ppm().ends_with('\n'));
}

#[test]
fn png_signature() {
    let mut c = Canvas::new(3, 2);
    c.write_pixel(1, 1, &Color::blue());

    let png = c.to_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn format_from_name() {
    assert_eq!(ImageFormat::from_path(Path::new("a.ppm")).unwrap(), ImageFormat::Ppm);
    assert_eq!(ImageFormat::from_path(Path::new("a.PNG")).unwrap(), ImageFormat::Png);
    assert!(matches!(
        ImageFormat::from_path(Path::new("a.bmp")),
        Err(Error::UnsupportedFormat(_))
    ));
    assert!(ImageFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn save_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let c = Canvas::new(2, 2);

    let path = c.save(dir.path(), "out.ppm").unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, c.to_ppm());
}
