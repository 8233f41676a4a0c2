//! # Scaled glyphs
//!
//! The big clock digits are the 8x8 font blown up by an integer factor per axis. Upscaling is
//! nearest neighbour: every font pixel becomes a solid `x_scale` by `y_scale` block.
//!
//! Building a scaled glyph touches every output pixel, which is far too slow to do every frame on
//! a low power MCU, so [`GlyphCache`] builds each (character, x scale, y scale) combination once
//! and hands out the stored bitmap afterwards.
//!
//! The cache has a fixed capacity and never evicts. Entries are grouped by scale pair first and
//! character second. Should it ever fill up, glyphs are still built correctly, just into a scratch
//! buffer that is overwritten by the next miss.

use heapless::Vec;

use crate::config::{GLYPH_ARENA, GLYPH_SLOTS, MAX_SCALE};
use crate::error::{Axis, Error};
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::display::Color;

/// Bytes needed for the largest glyph, 32x32
const SCRATCH: usize = GLYPH_WIDTH * GLYPH_HEIGHT * (MAX_SCALE as usize) * (MAX_SCALE as usize) / 8;

/// A borrowed monochrome bitmap, rows packed MSB first and padded to whole bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wrap `data` as a `width` x `height` bitmap
    ///
    /// # Panics
    ///
    /// If `data` is shorter than the bitmap needs.
    pub const fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        assert!(data.len() >= stride(width) * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Read the pixel at (x, y), which must be inside the bitmap
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let byte = self.data[y * stride(self.width) + x / 8];
        if byte & (0x80 >> (x % 8)) != 0 {
            Color::On
        } else {
            Color::Off
        }
    }
}

const fn stride(width: usize) -> usize {
    (width + 7) / 8
}

/// A validated text scale factor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale {
    x: u8,
    y: u8,
}

impl Scale {
    /// Both factors must be within `1..=4`
    pub fn new(x: u8, y: u8) -> Result<Self, Error> {
        check(Axis::X, x)?;
        check(Axis::Y, y)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Whether this is the native 1x1 size of the font
    pub fn is_unit(&self) -> bool {
        self.x == 1 && self.y == 1
    }

    /// Width of one scaled character cell
    pub fn advance(&self) -> usize {
        GLYPH_WIDTH * self.x as usize
    }

    fn glyph_len(&self) -> usize {
        GLYPH_WIDTH * GLYPH_HEIGHT * self.x as usize * self.y as usize / 8
    }
}

fn check(axis: Axis, value: u8) -> Result<(), Error> {
    if (1..=MAX_SCALE).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidScale { axis, value })
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    scale: Scale,
    index: u8,
    offset: u16,
}

/// Fixed capacity store of upscaled glyphs
pub struct GlyphCache {
    entries: Vec<Entry, GLYPH_SLOTS>,
    arena: Vec<u8, GLYPH_ARENA>,
    scratch: [u8; SCRATCH],
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphCache {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            arena: Vec::new(),
            scratch: [0; SCRATCH],
        }
    }

    /// Number of glyphs currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the bitmap of `c` scaled by `x_scale` horizontally and `y_scale` vertically
    ///
    /// At 1x1 this is the font glyph itself and the cache isn't involved.
    pub fn render(&mut self, c: char, x_scale: u8, y_scale: u8) -> Result<Bitmap<'_>, Error> {
        let scale = Scale::new(x_scale, y_scale)?;
        Ok(self.render_scaled(c, scale))
    }

    /// Same as [`render()`](Self::render) with an already validated scale
    pub fn render_scaled(&mut self, c: char, scale: Scale) -> Bitmap<'_> {
        let width = GLYPH_WIDTH * scale.x as usize;
        let height = GLYPH_HEIGHT * scale.y as usize;

        if scale.is_unit() {
            return Bitmap::new(width, height, font::glyph(c));
        }

        let len = scale.glyph_len();

        let Some(index) = font::index(c) else {
            // Not in the font, so blank. Nothing worth caching.
            self.scratch[..len].fill(0);
            return Bitmap::new(width, height, &self.scratch[..len]);
        };
        let index = index as u8;

        if let Some(offset) = self.lookup(scale, index) {
            return Bitmap::new(width, height, &self.arena[offset..offset + len]);
        }

        let offset = self.arena.len();
        let entry = Entry {
            scale,
            index,
            offset: offset as u16,
        };

        if self.arena.resize(offset + len, 0).is_err() || self.entries.push(entry).is_err() {
            self.arena.truncate(offset);
            warn!("glyph cache full, building {} uncached", c as u32);
            upscale(font::glyph(c), scale, &mut self.scratch[..len]);
            return Bitmap::new(width, height, &self.scratch[..len]);
        }

        upscale(font::glyph(c), scale, &mut self.arena[offset..offset + len]);
        debug!(
            "cached glyph {} at {}x{}, {} bytes",
            c as u32, scale.x, scale.y, len
        );

        Bitmap::new(width, height, &self.arena[offset..offset + len])
    }

    fn lookup(&self, scale: Scale, index: u8) -> Option<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.scale == scale)
            .find(|entry| entry.index == index)
            .map(|entry| entry.offset as usize)
    }
}

/// Replicate every pixel of `glyph` into a `scale.x` by `scale.y` block of `out`
fn upscale(glyph: &font::Glyph, scale: Scale, out: &mut [u8]) {
    let (sx, sy) = (scale.x as usize, scale.y as usize);
    let out_stride = stride(GLYPH_WIDTH * sx);
    out.fill(0);

    for (by, bits) in glyph.iter().enumerate() {
        for bx in 0..GLYPH_WIDTH {
            if bits & (0x80 >> bx) == 0 {
                continue;
            }
            for dy in 0..sy {
                let row = (by * sy + dy) * out_stride;
                for dx in 0..sx {
                    let x = bx * sx + dx;
                    out[row + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
    }
}
