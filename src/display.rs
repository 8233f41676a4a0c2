use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use alarm_clock_core::config::{HEIGHT, WIDTH};
use alarm_clock_core::{Bitmap, Color, Framebuffer, MonoDisplay};

type Panel<DI> = Ssd1306<DI, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

/// SSD1306 OLED panel
///
/// Screens are composed in a [`Framebuffer`] and copied into the driver's own buffer on commit,
/// which then only sends the rows that changed.
pub struct Oled<DI> {
    panel: Panel<DI>,
    frame: Framebuffer,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    /// Initialise the panel and blank it
    pub fn new(interface: DI) -> Self {
        let mut panel = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        if panel.init().is_err() {
            defmt::panic!("display init failed");
        }

        Self {
            panel,
            frame: Framebuffer::new(),
        }
    }
}

impl<DI: WriteOnlyDataCommand> MonoDisplay for Oled<DI> {
    type Error = ();

    fn fill(&mut self, color: Color) {
        self.frame.fill(color)
    }

    fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
        self.frame.text(text, x, y, color)
    }

    fn blit(&mut self, bitmap: &Bitmap<'_>, x: i32, y: i32) {
        self.frame.blit(bitmap, x, y)
    }

    fn commit(&mut self) -> Result<(), ()> {
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                let on = self.frame.pixel(x, y) == Color::On;
                self.panel.set_pixel(x as u32, y as u32, on);
            }
        }

        self.panel.flush().map_err(|_| ())
    }
}
