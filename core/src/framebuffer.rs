//! Byte packed monochrome framebuffer
//!
//! Pixels are stored row-major, eight to a byte, with the most significant bit being the
//! leftmost pixel. Every row starts on a byte boundary.

use crate::config::{HEIGHT, WIDTH};
use crate::display::Color;
use crate::font;
use crate::glyph::Bitmap;

const STRIDE: usize = WIDTH / 8;

/// The in-memory copy of the 128x32 panel
pub struct Framebuffer {
    buf: [u8; STRIDE * HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; STRIDE * HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// Raw buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        let byte = match color {
            Color::On => 0xFF,
            Color::Off => 0x00,
        };
        self.buf.fill(byte);
    }

    /// Read a pixel. Out of bounds reads as off.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        match offset(x, y) {
            Some((i, mask)) if self.buf[i] & mask != 0 => Color::On,
            _ => Color::Off,
        }
    }

    /// Write a pixel. Out of bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some((i, mask)) = offset(x, y) {
            match color {
                Color::On => self.buf[i] |= mask,
                Color::Off => self.buf[i] &= !mask,
            }
        }
    }

    /// Draw `text` in the base 8x8 font with its top left corner at (x, y)
    ///
    /// Only the set pixels of each glyph are drawn, the background is left alone.
    pub fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        let mut cx = x;
        for c in text.chars() {
            let glyph = font::glyph(c);
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (0x80 >> col) != 0 {
                        self.set_pixel(cx + col as i32, y + row as i32, color);
                    }
                }
            }
            cx += font::GLYPH_WIDTH as i32;
        }
    }

    /// Copy `bitmap` with its top left corner at (x, y), clipping at the edges
    ///
    /// The copy is opaque: clear bitmap pixels clear the framebuffer.
    pub fn blit(&mut self, bitmap: &Bitmap<'_>, x: i32, y: i32) {
        for by in 0..bitmap.height() {
            let py = y + by as i32;
            if py < 0 || py >= HEIGHT as i32 {
                continue;
            }
            for bx in 0..bitmap.width() {
                let px = x + bx as i32;
                if px < 0 || px >= WIDTH as i32 {
                    continue;
                }
                self.set_pixel(px, py, bitmap.pixel(bx, by));
            }
        }
    }
}

fn offset(x: i32, y: i32) -> Option<(usize, u8)> {
    if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    Some((y * STRIDE + x / 8, 0x80 >> (x % 8)))
}
