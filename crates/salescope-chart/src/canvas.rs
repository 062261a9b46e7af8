//! RGBA pixel canvas with primitive drawing operations.
//!
//! Filled rectangles, outlines, Bresenham lines, alpha blending, bitmap
//! text, and in-memory PNG encoding. The buffer lives for one render call;
//! nothing is shared across calls.

use crate::error::ChartError;
use crate::glyphs::{glyph, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// Parse a `#RRGGBB` hex color string.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// An in-memory RGBA drawing surface.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with the given background color.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut pixels = vec![255u8; (width as usize) * (height as usize) * 4];
        for chunk in pixels.chunks_mut(4) {
            chunk[0] = background.0;
            chunk[1] = background.1;
            chunk[2] = background.2;
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Blend a single pixel over the existing surface.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let a = alpha as f32 / 255.0;
        let inv = 1.0 - a;
        self.pixels[idx] = (color.0 as f32 * a + self.pixels[idx] as f32 * inv) as u8;
        self.pixels[idx + 1] = (color.1 as f32 * a + self.pixels[idx + 1] as f32 * inv) as u8;
        self.pixels[idx + 2] = (color.2 as f32 * a + self.pixels[idx + 2] as f32 * inv) as u8;
        self.pixels[idx + 3] = 255;
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, alpha: u8) {
        let x_start = x.max(0);
        let y_start = y.max(0);
        let x_end = (x + w).min(self.width as i32);
        let y_end = (y + h).min(self.height as i32);
        for py in y_start..y_end {
            for px in x_start..x_end {
                self.blend_pixel(px, py, color, alpha);
            }
        }
    }

    /// Draw a one-pixel rectangle outline.
    pub fn draw_rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb, alpha: u8) {
        self.draw_line(x, y, x + w, y, color, alpha);
        self.draw_line(x + w, y, x + w, y + h, color, alpha);
        self.draw_line(x + w, y + h, x, y + h, color, alpha);
        self.draw_line(x, y + h, x, y, color, alpha);
    }

    /// Draw a line with Bresenham's algorithm.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb, alpha: u8) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.blend_pixel(x, y, color, alpha);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rasterize text from the built-in glyph set.
    ///
    /// `scale` multiplies the 5x7 base size. Characters without a glyph
    /// advance the cursor but draw nothing.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: u32, color: Rgb) {
        let scale = scale.max(1) as i32;
        let mut cursor = x;
        for c in text.chars() {
            if let Some(rows) = glyph(c) {
                for (row_idx, row) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if (*row as u32) & (1u32 << (GLYPH_WIDTH - 1 - col)) != 0 {
                            self.fill_rect(
                                cursor + col as i32 * scale,
                                y + row_idx as i32 * scale,
                                scale,
                                scale,
                                color,
                                255,
                            );
                        }
                    }
                }
            }
            cursor += GLYPH_ADVANCE as i32 * scale;
        }
    }

    /// Pixel width of a rendered string at the given scale.
    pub fn text_width(text: &str, scale: u32) -> i32 {
        let scale = scale.max(1);
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return 0;
        }
        ((chars * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_WIDTH)) * scale) as i32
    }

    /// Pixel height of rendered text at the given scale.
    pub fn text_height(scale: u32) -> i32 {
        (GLYPH_HEIGHT * scale.max(1)) as i32
    }

    /// Encode the canvas as an in-memory PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, ChartError> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| ChartError::Render(e.to_string()))?;
            writer
                .write_image_data(&self.pixels)
                .map_err(|e| ChartError::Render(e.to_string()))?;
        }
        Ok(out)
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = ((y * self.width + x) * 4) as usize;
        (self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}
