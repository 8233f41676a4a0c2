//! # Alarm clock core
//!
//! Board-agnostic logic for a bedside alarm clock with a 128x32 monochrome display, two buttons
//! and a buzzer.
//!
//! ---
//!
//! Nothing in here touches a register. The hardware is reached through a handful of small traits
//! which the firmware implements for the real peripherals and the tests implement with mocks.
//!
//! - [`button`] debounces the menu and select buttons and hands presses from interrupt context to
//!   the main loop
//! - [`glyph`] upscales the 8x8 font to the large clock digits and caches the results
//! - [`display`] composes text and icons into a [`Framebuffer`] and commits it to the panel
//! - [`clock`] is the menu state machine, the alarm and the per-tick screen rendering
//! - [`app`] ties all of the above together into the object the main loop ticks
//!
//! The main loop is the only place where the clock state is mutated. Interrupt handlers only ever
//! push a [`ButtonEvent`] into a bounded queue.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod app;
pub mod button;
pub mod buzzer;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod glyph;
pub mod rtc;

pub use app::App;
pub use button::{ButtonChannel, ButtonEvent, EventSink};
pub use buzzer::Buzzer;
pub use clock::{Clock, Mode, TimeFormat};
pub use display::{Color, DisplayRenderer, MonoDisplay};
pub use error::Error;
pub use framebuffer::Framebuffer;
pub use glyph::{Bitmap, GlyphCache};
pub use rtc::{DateTime, TimeSource, TimeValue};

/// Milliseconds since boot. Wraps after ~49 days; always compare with wrapping arithmetic.
pub type Millis = embedded_time::duration::Milliseconds<u32>;

/// Milliseconds elapsed from `earlier` to `now`, tolerating a counter wrap in between
pub(crate) fn elapsed(now: Millis, earlier: Millis) -> u32 {
    now.0.wrapping_sub(earlier.0)
}
