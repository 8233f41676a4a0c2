//! Fixed configuration of the clock.
//!
//! The clock has no settings storage; everything the firmware needs to know about the wiring,
//! geometry and timing is a constant.

use crate::Millis;
use embedded_time::duration::Milliseconds;

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 32;
/// I2C address of the display controller
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Minimum time between two accepted transitions on the same button
pub const DEBOUNCE: Millis = Milliseconds(250);

/// Length of one blink cycle. Things are shown during the first half and hidden during the second.
pub const BLINK_PERIOD: u32 = 1000;
/// Portion of [`BLINK_PERIOD`] during which blinking things are shown
pub const BLINK_ON: u32 = 500;

/// Buzzer tone (Hz)
pub const BUZZER_FREQ: u32 = 1000;
/// Buzzer duty while the alarm sounds. Full scale.
pub const ALARM_DUTY: u16 = u16::MAX;

/// Largest supported text scale factor on either axis
pub const MAX_SCALE: u8 = 4;

/// Number of glyphs the cache keeps before falling back to rendering uncached
pub const GLYPH_SLOTS: usize = 48;
/// Bytes of bitmap storage shared by all cached glyphs
///
/// The clock face needs 12 glyphs at 2x4 (64 bytes each), the menus about 22 glyphs at 2x2 (32
/// bytes each) and 10 glyphs at 1x2 (16 bytes each).
pub const GLYPH_ARENA: usize = 2048;

/// Capacity of the button hand-off queue. One slot of a heapless queue is always kept free.
pub const EVENT_QUEUE: usize = 4;
