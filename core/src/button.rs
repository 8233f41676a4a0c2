//! # Buttons
//!
//! The clock has two push buttons, menu and select. Both idle low (pull down) and raise a rising
//! edge interrupt when pressed.
//!
//! Mechanical switches bounce, so every channel keeps two timestamps and suppresses anything that
//! happens within [`DEBOUNCE`] of the previous accepted transition:
//!
//! - [`ButtonChannel::on_rising_edge`] is called from the interrupt handler. An accepted edge
//!   posts the channel's [`ButtonEvent`] to an [`EventSink`], normally the producer half of the
//!   hand-off queue.
//! - [`ButtonChannel::sample`] is a polled read of the pin with its own debounce window.
//!
//! Nothing in this module touches the clock state. Presses are handed to the main loop, which is
//! the only place the menu state machine runs.

use embedded_hal::digital::v2::InputPin;
use heapless::spsc::Producer;

use crate::config::DEBOUNCE;
use crate::{elapsed, Millis};

/// A debounced button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Menu,
    Select,
}

/// Somewhere to deliver accepted button presses
pub trait EventSink {
    /// Deliver an event. Must not block.
    fn post(&mut self, event: ButtonEvent);
}

impl<const N: usize> EventSink for Producer<'_, ButtonEvent, N> {
    fn post(&mut self, event: ButtonEvent) {
        if self.enqueue(event).is_err() {
            warn!("event queue full, dropping {}", event);
        }
    }
}

impl<const N: usize> EventSink for heapless::Vec<ButtonEvent, N> {
    fn post(&mut self, event: ButtonEvent) {
        if self.push(event).is_err() {
            warn!("event buffer full, dropping {}", event);
        }
    }
}

/// One debounced button
pub struct ButtonChannel<P> {
    pin: P,
    event: ButtonEvent,
    pressed_at: Option<Millis>,
    checked_at: Option<Millis>,
}

impl<P: InputPin> ButtonChannel<P> {
    /// Bind `event` to the rising edges of `pin`
    pub fn new(pin: P, event: ButtonEvent) -> Self {
        Self {
            pin,
            event,
            pressed_at: None,
            checked_at: None,
        }
    }

    /// Handle a rising edge interrupt at `now`
    ///
    /// Posts the bound event and returns `true` if the edge was accepted, returns `false` if it
    /// fell within the debounce window of the previously accepted edge.
    pub fn on_rising_edge<S: EventSink>(&mut self, now: Millis, sink: &mut S) -> bool {
        if !window_passed(now, self.pressed_at) {
            return false;
        }

        self.pressed_at = Some(now);
        debug!("{} pressed at {} ms", self.event, now.0);
        sink.post(self.event);
        true
    }

    /// Polled, debounced read of the pin
    ///
    /// Returns the pin level if the debounce window since the previous sample has passed. Within
    /// the window the pin isn't read, nothing is updated and `false` is returned.
    pub fn sample(&mut self, now: Millis) -> bool {
        if !window_passed(now, self.checked_at) {
            return false;
        }

        self.checked_at = Some(now);
        self.pin.is_high().unwrap_or(false)
    }
}

fn window_passed(now: Millis, last: Option<Millis>) -> bool {
    match last {
        None => true,
        Some(last) => elapsed(now, last) >= DEBOUNCE.0,
    }
}
