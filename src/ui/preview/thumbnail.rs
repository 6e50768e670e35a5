use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use std::collections::HashMap;

use crate::media::decode_data_uri;
use crate::story::{SlideId, SlideItem, SlideKind};

/// Longest edge kept per decoded image; rendering only downsizes from here.
const MAX_THUMB_EDGE: u32 = 240;

/// Decoded, downscaled images for one preview session.
#[derive(Default)]
pub struct ThumbnailCache {
    images: HashMap<SlideId, DynamicImage>,
}

impl ThumbnailCache {
    /// Decode every image slide once. Undecodable slides are skipped.
    pub fn build(slides: &[SlideItem]) -> Self {
        let mut images = HashMap::new();
        for slide in slides.iter().filter(|slide| slide.kind == SlideKind::Image) {
            match decode_data_uri(&slide.content) {
                Ok(image) => {
                    images.insert(slide.id, image.thumbnail(MAX_THUMB_EDGE, MAX_THUMB_EDGE));
                }
                Err(err) => {
                    tracing::warn!(slide = %slide.id, error = %err, "Cannot decode image slide");
                }
            }
        }
        Self { images }
    }

    pub fn get(&self, id: SlideId) -> Option<&DynamicImage> {
        self.images.get(&id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Draws an image with `▀` cells: foreground is the upper pixel,
/// background the lower one, so each cell shows two pixel rows.
pub struct HalfBlockImage<'a> {
    image: &'a DynamicImage,
    dimmed: bool,
}

impl<'a> HalfBlockImage<'a> {
    pub fn new(image: &'a DynamicImage) -> Self {
        Self {
            image,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let fitted = self.image.resize(
            u32::from(area.width),
            u32::from(area.height) * 2,
            FilterType::Nearest,
        );
        let (width, height) = fitted.dimensions();
        let cols = width.min(u32::from(area.width)) as u16;
        let rows = height.div_ceil(2).min(u32::from(area.height)) as u16;
        let x0 = area.x + (area.width - cols) / 2;
        let y0 = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let px = u32::from(col);
                let top_y = u32::from(row) * 2;
                let top = pixel_color(&fitted, px, top_y, self.dimmed);
                let bottom = if top_y + 1 < height {
                    pixel_color(&fitted, px, top_y + 1, self.dimmed)
                } else {
                    Color::Reset
                };
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

fn pixel_color(image: &DynamicImage, x: u32, y: u32, dimmed: bool) -> Color {
    let [r, g, b, _] = image.get_pixel(x, y).0;
    if dimmed {
        Color::Rgb(r / 2, g / 2, b / 2)
    } else {
        Color::Rgb(r, g, b)
    }
}
