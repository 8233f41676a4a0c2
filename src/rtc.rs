use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use stm32l0xx_hal::rtc::Rtc;

use alarm_clock_core::rtc::{DateTime, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum RtcError {
    /// The date doesn't exist on the calendar
    InvalidDate,
    /// The peripheral refused the date, it only counts 2001 to 2099
    Rejected,
}

/// The on-chip RTC, clocked from the LSE
pub struct HardwareRtc {
    rtc: Rtc,
}

impl HardwareRtc {
    pub fn new(rtc: Rtc) -> Self {
        Self { rtc }
    }
}

impl TimeSource for HardwareRtc {
    type Error = RtcError;

    fn read(&mut self) -> Result<DateTime, RtcError> {
        Ok(from_naive(self.rtc.now()))
    }

    fn write(&mut self, datetime: DateTime) -> Result<(), RtcError> {
        let instant = to_naive(&datetime).ok_or(RtcError::InvalidDate)?;
        self.rtc.set(instant).map_err(|_| RtcError::Rejected)
    }
}

fn from_naive(instant: NaiveDateTime) -> DateTime {
    DateTime {
        year: instant.year() as u16,
        month: instant.month() as u8,
        day: instant.day() as u8,
        weekday: instant.weekday().num_days_from_monday() as u8,
        hour: instant.hour() as u8,
        minute: instant.minute() as u8,
        second: instant.second() as u8,
        subsecond: (instant.nanosecond() / 1_000_000) as u16,
    }
}

fn to_naive(datetime: &DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        datetime.year as i32,
        datetime.month as u32,
        datetime.day as u32,
    )?
    .and_hms_milli_opt(
        datetime.hour as u32,
        datetime.minute as u32,
        datetime.second as u32,
        datetime.subsecond as u32,
    )
}
