use core::fmt::Write;

use heapless::String;

use super::{Clock, EditField, Mode, TimeFormat};
use crate::buzzer::Buzzer;
use crate::config::{ALARM_DUTY, BLINK_ON, BLINK_PERIOD};
use crate::display::{Color, DisplayRenderer, MonoDisplay};
use crate::error::Error;
use crate::glyph::Bitmap;
use crate::rtc::{TimeSource, TimeValue};
use crate::{elapsed, Millis};

/// 16x12 bell shown while the alarm is enabled
pub const BELL: Bitmap<'static> = Bitmap::new(
    16,
    12,
    &[
        0x01, 0x80, 0x03, 0xC0, 0x07, 0xE0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x0F, 0xF0, 0x1F,
        0xF8, 0x1F, 0xF8, 0x3F, 0xFC, 0x01, 0x80, 0x01, 0x80,
    ],
);

/// A line of text at a fixed place and size
struct Label {
    text: &'static str,
    x: i32,
    y: i32,
    x_scale: u8,
    y_scale: u8,
}

const fn label(text: &'static str, x: i32, y: i32, x_scale: u8, y_scale: u8) -> Label {
    Label {
        text,
        x,
        y,
        x_scale,
        y_scale,
    }
}

const SET: Label = label("Set", 40, 0, 2, 2);
const TIME: Label = label("Time", 32, 16, 2, 2);
const ALARM: Label = label("Alarm", 24, 16, 2, 2);
const ENABLE: Label = label("Enable", 16, 0, 2, 2);
const FORMAT: Label = label("AM-PM/24 Hr", 20, 16, 1, 2);

const ALARM_TITLE: Label = label("Alarm", 24, 0, 2, 2);
const ALARM_ON: Label = label("On", 48, 16, 2, 2);
const ALARM_OFF: Label = label("Off", 40, 16, 2, 2);

const FORMAT_TITLE: Label = label("AM-PM/24 Hr", 20, 0, 1, 2);
const FORMAT_12: Label = label("AM/PM", 24, 16, 2, 2);
const FORMAT_24: Label = label("24 Hr", 24, 16, 2, 2);

/// Clock digits, `HH:MM`
const DIGITS: (i32, i32, u8, u8) = (0, 0, 2, 4);
/// AM, PM or 24 hr
const INDICATOR: (i32, i32) = (80, 24);
const BELL_AT: (i32, i32) = (96, 4);

/// The number shown for `hours` in the given format, as two digits
///
/// In 12 hour mode hours up to and including 12 are shown as they are, so midnight reads `00` and
/// noon reads `12`; 13 and later have 12 taken off.
pub fn hour_digits(hours: u8, format: TimeFormat) -> String<2> {
    let shown = match format {
        TimeFormat::TwentyFourHour => hours,
        TimeFormat::TwelveHour if hours < 13 => hours,
        TimeFormat::TwelveHour => hours - 12,
    };

    let mut s = String::new();
    // Two digits always fit
    let _ = write!(s, "{:02}", shown);
    s
}

/// The `HH:MM` text for the clock face, with hidden parts replaced by spaces
pub fn time_text(
    time: TimeValue,
    format: TimeFormat,
    show_hours: bool,
    show_colon: bool,
    show_minutes: bool,
) -> String<5> {
    let mut s = String::new();

    let _ = if show_hours {
        s.push_str(&hour_digits(time.hours, format))
    } else {
        s.push_str("  ")
    };
    let _ = s.push(if show_colon { ':' } else { ' ' });
    let _ = if show_minutes {
        write!(s, "{:02}", time.minutes).map_err(|_| ())
    } else {
        s.push_str("  ")
    };

    s
}

/// Whether something blinking at 1 Hz is in its visible half at `phase` milliseconds
fn blink_on(phase: u32) -> bool {
    phase % BLINK_PERIOD < BLINK_ON
}

impl Clock {
    /// Draw the current mode and drive the buzzer. Called once per main loop iteration.
    ///
    /// In [`Mode::ShowTime`] this also reads the real time clock and runs the alarm check.
    pub fn step<T, B, D>(
        &mut self,
        now: Millis,
        rtc: &mut T,
        buzzer: &mut B,
        renderer: &mut DisplayRenderer<D>,
    ) -> Result<(), Error>
    where
        T: TimeSource,
        B: Buzzer,
        D: MonoDisplay,
    {
        let phase = elapsed(now, self.entered_at);

        if self.mode != Mode::ShowTime {
            buzzer.set_duty(0);
        }

        renderer.clear();

        match self.mode {
            Mode::ShowTime => {
                let time = match rtc.read() {
                    Ok(datetime) => datetime.time(),
                    Err(_) => {
                        buzzer.set_duty(0);
                        return Err(Error::TimeSource);
                    }
                };
                self.alarm.check(time);

                let duty = if self.alarm.playing && blink_on(now.0) {
                    ALARM_DUTY
                } else {
                    0
                };
                buzzer.set_duty(duty);

                self.draw_time(renderer, time, true, blink_on(now.0), true)?;
                if self.alarm.enabled {
                    renderer.draw_icon(&BELL, BELL_AT.0, BELL_AT.1);
                }
            }
            Mode::SetTimePrompt => draw_labels(renderer, &[SET, TIME])?,
            Mode::SetAlarmPrompt => draw_labels(renderer, &[SET, ALARM])?,
            Mode::AlarmEnablePrompt => draw_labels(renderer, &[ENABLE, ALARM])?,
            Mode::SetFormatPrompt => draw_labels(renderer, &[SET, FORMAT])?,
            Mode::SettingTime | Mode::SettingAlarm => {
                let time = match self.mode {
                    Mode::SettingTime => self.draft().unwrap_or_default(),
                    _ => self.alarm.time,
                };

                if blink_on(phase) {
                    self.draw_time(renderer, time, true, true, true)?;
                } else {
                    let hide_hours = self.edit == EditField::Hours;
                    let hide_minutes = self.edit == EditField::Minutes;
                    self.draw_time(renderer, time, !hide_hours, true, !hide_minutes)?;
                }
            }
            Mode::AlarmEnabling => {
                draw_label(renderer, &ALARM_TITLE)?;
                if blink_on(phase) {
                    let value = if self.alarm.enabled {
                        &ALARM_ON
                    } else {
                        &ALARM_OFF
                    };
                    draw_label(renderer, value)?;
                }
            }
            Mode::SettingFormat => {
                draw_label(renderer, &FORMAT_TITLE)?;
                if blink_on(phase) {
                    let value = match self.format {
                        TimeFormat::TwelveHour => &FORMAT_12,
                        TimeFormat::TwentyFourHour => &FORMAT_24,
                    };
                    draw_label(renderer, value)?;
                }
            }
        }

        renderer.commit()
    }

    fn draw_time<D: MonoDisplay>(
        &self,
        renderer: &mut DisplayRenderer<D>,
        time: TimeValue,
        show_hours: bool,
        show_colon: bool,
        show_minutes: bool,
    ) -> Result<(), Error> {
        let text = time_text(time, self.format, show_hours, show_colon, show_minutes);
        let (x, y, x_scale, y_scale) = DIGITS;
        renderer.draw_text(&text, x, y, Color::On, x_scale, y_scale)?;

        let indicator = match self.format {
            TimeFormat::TwentyFourHour => "24 hr",
            TimeFormat::TwelveHour if time.hours >= 12 => "PM",
            TimeFormat::TwelveHour => "AM",
        };
        renderer.draw_text(indicator, INDICATOR.0, INDICATOR.1, Color::On, 1, 1)
    }
}

fn draw_label<D: MonoDisplay>(renderer: &mut DisplayRenderer<D>, label: &Label) -> Result<(), Error> {
    renderer.draw_text(
        label.text,
        label.x,
        label.y,
        Color::On,
        label.x_scale,
        label.y_scale,
    )
}

fn draw_labels<D: MonoDisplay>(
    renderer: &mut DisplayRenderer<D>,
    labels: &[Label],
) -> Result<(), Error> {
    labels.iter().try_for_each(|label| draw_label(renderer, label))
}
