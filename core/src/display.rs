//! # Display
//!
//! The panel is a 128x32 monochrome OLED. The renderer doesn't care which controller drives it as
//! long as the driver can do four things, captured by [`MonoDisplay`]:
//!
//! - fill the whole framebuffer with one colour
//! - draw text in the base 8x8 font
//! - blit a bitmap
//! - commit the framebuffer to the panel
//!
//! [`DisplayRenderer`] adds scaled text (through the [`GlyphCache`]) and icons on top.

use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::glyph::{Bitmap, GlyphCache, Scale};

/// Pixel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    #[default]
    Off,
    On,
}

/// Capabilities the renderer needs from a display driver
pub trait MonoDisplay {
    type Error;

    /// Set every pixel of the framebuffer to `color`
    fn fill(&mut self, color: Color);

    /// Draw `text` in the base 8x8 font, set pixels only
    fn text(&mut self, text: &str, x: i32, y: i32, color: Color);

    /// Copy `bitmap` into the framebuffer, clipping at the edges
    fn blit(&mut self, bitmap: &Bitmap<'_>, x: i32, y: i32);

    /// Push the framebuffer to the panel
    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// A display that is only a framebuffer. Committing does nothing.
///
/// Handy for drawing off-screen and for inspecting what would have been shown.
impl MonoDisplay for Framebuffer {
    type Error = core::convert::Infallible;

    fn fill(&mut self, color: Color) {
        Framebuffer::fill(self, color)
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        Framebuffer::text(self, text, x, y, color)
    }

    fn blit(&mut self, bitmap: &Bitmap<'_>, x: i32, y: i32) {
        Framebuffer::blit(self, bitmap, x, y)
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Draws clock screens onto a [`MonoDisplay`]
pub struct DisplayRenderer<D> {
    display: D,
    glyphs: GlyphCache,
}

impl<D: MonoDisplay> DisplayRenderer<D> {
    pub fn new(display: D) -> Self {
        Self {
            display,
            glyphs: GlyphCache::new(),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn glyphs(&self) -> &GlyphCache {
        &self.glyphs
    }

    /// Blank the framebuffer
    pub fn clear(&mut self) {
        self.display.fill(Color::Off);
    }

    /// Draw a single line of text, each character scaled by `x_scale` by `y_scale`
    ///
    /// Characters advance by `8 * x_scale` pixels and are not wrapped. At 1x1 the text is drawn
    /// with the driver's own font in `color`; scaled glyphs are blitted opaquely.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        x_scale: u8,
        y_scale: u8,
    ) -> Result<(), Error> {
        let scale = Scale::new(x_scale, y_scale)?;

        if scale.is_unit() {
            self.display.text(text, x, y, color);
            return Ok(());
        }

        let mut cursor = x;
        for c in text.chars() {
            let glyph = self.glyphs.render_scaled(c, scale);
            self.display.blit(&glyph, cursor, y);
            cursor += scale.advance() as i32;
        }

        Ok(())
    }

    /// Blit a fixed bitmap
    pub fn draw_icon(&mut self, icon: &Bitmap<'_>, x: i32, y: i32) {
        self.display.blit(icon, x, y);
    }

    /// Push the framebuffer to the panel
    pub fn commit(&mut self) -> Result<(), Error> {
        self.display.commit().map_err(|_| Error::Display)
    }
}
