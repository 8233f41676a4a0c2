//! # Real time clock
//!
//! The real time clock is the single source of truth for the time of day. The core never keeps
//! its own copy of the live time; it reads the clock every tick and writes it back when the user
//! finishes setting the time.
//!
//! Note that the clock uses 24 hour notation. The 12 hour display is purely a rendering concern.

/// The date and time as exchanged with the real time clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-6, Monday is 0
    pub weekday: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
    /// Sub-second counter, units are up to the clock
    pub subsecond: u16,
}

impl DateTime {
    /// Hours and minutes of this instant
    pub fn time(&self) -> TimeValue {
        TimeValue {
            hours: self.hour,
            minutes: self.minute,
        }
    }
}

/// An hour and minute, used both for the live time and for values being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
}

impl TimeValue {
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    /// Advance the hour, wrapping 23 -> 0
    pub fn increment_hours(&mut self) {
        self.hours = (self.hours + 1) % 24;
    }

    /// Advance the minute, wrapping 59 -> 0 without carrying into the hour
    pub fn increment_minutes(&mut self) {
        self.minutes = (self.minutes + 1) % 60;
    }
}

/// A readable and writable real time clock
pub trait TimeSource {
    type Error;

    /// Get the current date and time
    fn read(&mut self) -> Result<DateTime, Self::Error>;

    /// Set the clock to the given date and time
    fn write(&mut self, datetime: DateTime) -> Result<(), Self::Error>;
}

impl<T: TimeSource> TimeSource for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<DateTime, Self::Error> {
        (**self).read()
    }

    fn write(&mut self, datetime: DateTime) -> Result<(), Self::Error> {
        (**self).write(datetime)
    }
}
