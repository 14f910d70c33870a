use std::io::Cursor;

use egui::{Color32, ColorImage, Pos2};
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PadError, PadResult};
use crate::tool::StrokeStyle;

/// The immediate-mode 2D drawing contract the pad draws through.
pub trait DrawingSurface {
    /// Buffer size in surface pixels
    fn size(&self) -> [u32; 2];

    /// Stroke a straight segment with round caps, so consecutive segments
    /// join into a continuous path.
    fn stroke_segment(&mut self, from: Pos2, to: Pos2, style: StrokeStyle);

    /// Paint every pixel with `color`
    fn fill(&mut self, color: Color32);

    /// Capture the full pixel buffer
    fn snapshot(&self) -> Snapshot;

    /// Overwrite the pixel buffer with a snapshot, anchored at the origin
    fn restore(&mut self, snapshot: &Snapshot);

    /// Encode the current contents as PNG
    fn encode_png(&self) -> PadResult<Vec<u8>>;

    /// Incremented on every pixel mutation
    fn version(&self) -> u64;
}

/// A full copy of a surface's pixels at one instant
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// CPU raster surface backed by an RGBA buffer
#[derive(Clone)]
pub struct PixelSurface {
    image: RgbaImage,
    version: u64,
}

impl PixelSurface {
    /// Creates a surface of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: Color32) -> PadResult<Self> {
        if width == 0 || height == 0 {
            return Err(PadError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color of a single pixel, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Copy of the buffer in the form egui uploads as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

impl DrawingSurface for PixelSurface {
    fn size(&self) -> [u32; 2] {
        [self.image.width(), self.image.height()]
    }

    fn stroke_segment(&mut self, from: Pos2, to: Pos2, style: StrokeStyle) {
        if !(style.width.is_finite() && style.width > 0.0) {
            return;
        }
        let radius = style.width / 2.0;
        let color = to_rgba(style.color);

        let max_x = self.image.width() as i64 - 1;
        let max_y = self.image.height() as i64 - 1;
        let x0 = ((from.x.min(to.x) - radius).floor() as i64).max(0);
        let x1 = ((from.x.max(to.x) + radius).ceil() as i64).min(max_x);
        let y0 = ((from.y.min(to.y) - radius).floor() as i64).max(0);
        let y1 = ((from.y.max(to.y) + radius).ceil() as i64).min(max_y);

        if x0 > x1 || y0 > y1 {
            return;
        }

        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
        self.touch();
    }

    fn fill(&mut self, color: Color32) {
        let color = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
        self.touch();
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.image.width(),
            height: self.image.height(),
            rgba: self.image.as_raw().clone(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        let Some(source) = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
            snapshot.width,
            snapshot.height,
            snapshot.rgba.as_slice(),
        ) else {
            log::warn!("Ignoring malformed snapshot {:?}", snapshot);
            return;
        };
        // Only the overlapping region is written, like putImageData at (0, 0)
        image::imageops::replace(&mut self.image, &source, 0, 0);
        self.touch();
    }

    fn encode_png(&self) -> PadResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    fn version(&self) -> u64 {
        self.version
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
