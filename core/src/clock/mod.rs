//! # Clock
//!
//! The menu state machine. The menu button walks through the prompts, the select button enters
//! whatever the prompt offers:
//!
//! ```txt
//! ShowTime -> SetTimePrompt -> SetAlarmPrompt -> AlarmEnablePrompt -> SetFormatPrompt -> ShowTime
//!                  |                 |                  |                   |
//!             SettingTime       SettingAlarm       AlarmEnabling       SettingFormat
//! ```
//!
//! Inside the setting modes menu changes the value and select confirms. Setting the time or the
//! alarm is done a field at a time, hours first, then minutes.
//!
//! [`Clock::handle()`] applies a button press and [`Clock::step()`] draws the current mode. Both
//! are called from the main loop only.

mod render;

pub use render::{hour_digits, time_text, BELL};

use crate::error::Error;
use crate::rtc::{DateTime, TimeSource, TimeValue};
use crate::{ButtonEvent, Millis};

/// What the display is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    ShowTime,
    SetTimePrompt,
    SettingTime,
    SetAlarmPrompt,
    SettingAlarm,
    AlarmEnablePrompt,
    AlarmEnabling,
    SetFormatPrompt,
    SettingFormat,
}

/// Which field of the time being set is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditField {
    None,
    Hours,
    Minutes,
}

impl EditField {
    fn next(self) -> Self {
        match self {
            EditField::None => EditField::Hours,
            EditField::Hours => EditField::Minutes,
            EditField::Minutes => EditField::None,
        }
    }
}

/// How hours are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    fn toggled(self) -> Self {
        match self {
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
        }
    }
}

/// The single alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    pub enabled: bool,
    pub time: TimeValue,
    /// The live time equalled the alarm time on the last check
    pub matched: bool,
    /// The buzzer should be sounding
    pub playing: bool,
}

impl Alarm {
    /// Run the minute edge detector against the live time
    ///
    /// The alarm starts playing on the tick the live time reaches the alarm time and stops once
    /// the minute has passed. Silencing it in between leaves `matched` set, so it doesn't start
    /// again until the alarm time comes around the next day.
    pub fn check(&mut self, now: TimeValue) {
        let at_alarm = now == self.time;

        if self.enabled && !self.matched && at_alarm {
            info!("alarm {}:{} triggered", self.time.hours, self.time.minutes);
            self.matched = true;
            self.playing = true;
        } else if self.matched && !at_alarm {
            self.matched = false;
            self.playing = false;
        }

        if !self.enabled {
            self.playing = false;
        }
    }

    /// Stop the buzzer without re-arming the alarm
    pub fn silence(&mut self) {
        if self.playing {
            info!("alarm silenced");
            self.playing = false;
        }
    }
}

/// The clock state, owned by the main loop
pub struct Clock {
    mode: Mode,
    entered_at: Millis,
    /// Snapshot of the date and time while the time is being set
    draft: Option<DateTime>,
    edit: EditField,
    format: TimeFormat,
    alarm: Alarm,
}

impl Clock {
    /// A clock showing the time in 12 hour format with the alarm off
    pub fn new(now: Millis) -> Self {
        Self {
            mode: Mode::ShowTime,
            entered_at: now,
            draft: None,
            edit: EditField::None,
            format: TimeFormat::TwelveHour,
            alarm: Alarm::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// When the current mode was entered
    pub fn entered_at(&self) -> Millis {
        self.entered_at
    }

    pub fn edit(&self) -> EditField {
        self.edit
    }

    /// The time being set, if the time is being set
    pub fn draft(&self) -> Option<TimeValue> {
        self.draft.as_ref().map(DateTime::time)
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn alarm_mut(&mut self) -> &mut Alarm {
        &mut self.alarm
    }

    /// Apply a button press
    ///
    /// The only press that touches the real time clock is select in [`Mode::SetTimePrompt`],
    /// which reads it, and the final select in [`Mode::SettingTime`], which writes it.
    pub fn handle<T: TimeSource>(
        &mut self,
        event: ButtonEvent,
        now: Millis,
        rtc: &mut T,
    ) -> Result<(), Error> {
        match event {
            ButtonEvent::Menu => {
                self.menu(now);
                Ok(())
            }
            ButtonEvent::Select => self.select(now, rtc),
        }
    }

    fn menu(&mut self, now: Millis) {
        match self.mode {
            Mode::ShowTime => self.enter(Mode::SetTimePrompt, now),
            Mode::SetTimePrompt => self.enter(Mode::SetAlarmPrompt, now),
            Mode::SettingTime => match (self.draft.as_mut(), self.edit) {
                (Some(draft), EditField::Hours) => draft.hour = (draft.hour + 1) % 24,
                (Some(draft), EditField::Minutes) => draft.minute = (draft.minute + 1) % 60,
                _ => self.fall_back(now),
            },
            Mode::SetAlarmPrompt => self.enter(Mode::AlarmEnablePrompt, now),
            Mode::SettingAlarm => match self.edit {
                EditField::Hours => self.alarm.time.increment_hours(),
                EditField::Minutes => self.alarm.time.increment_minutes(),
                EditField::None => self.fall_back(now),
            },
            Mode::AlarmEnablePrompt => self.enter(Mode::SetFormatPrompt, now),
            Mode::AlarmEnabling => self.alarm.enabled = !self.alarm.enabled,
            Mode::SetFormatPrompt => self.enter(Mode::ShowTime, now),
            Mode::SettingFormat => self.format = self.format.toggled(),
        }
    }

    fn select<T: TimeSource>(&mut self, now: Millis, rtc: &mut T) -> Result<(), Error> {
        match self.mode {
            Mode::ShowTime => self.alarm.silence(),
            Mode::SetTimePrompt => {
                let snapshot = rtc.read().map_err(|_| Error::TimeSource)?;
                self.draft = Some(snapshot);
                self.edit = EditField::None.next();
                self.enter(Mode::SettingTime, now);
            }
            Mode::SettingTime => {
                if self.draft.is_none() || self.edit == EditField::None {
                    self.fall_back(now);
                    return Ok(());
                }

                self.edit = self.edit.next();
                if self.edit == EditField::None {
                    self.enter(Mode::ShowTime, now);
                    if let Some(mut draft) = self.draft.take() {
                        draft.second = 0;
                        draft.subsecond = 0;
                        info!("setting time to {}:{}", draft.hour, draft.minute);
                        rtc.write(draft).map_err(|_| Error::TimeSource)?;
                    }
                }
            }
            Mode::SetAlarmPrompt => {
                self.edit = EditField::None.next();
                self.enter(Mode::SettingAlarm, now);
            }
            Mode::SettingAlarm => {
                if self.edit == EditField::None {
                    self.fall_back(now);
                    return Ok(());
                }

                self.edit = self.edit.next();
                if self.edit == EditField::None {
                    info!(
                        "alarm set to {}:{}",
                        self.alarm.time.hours, self.alarm.time.minutes
                    );
                    self.enter(Mode::ShowTime, now);
                }
            }
            Mode::AlarmEnablePrompt => self.enter(Mode::AlarmEnabling, now),
            Mode::AlarmEnabling => {
                info!("alarm enabled: {}", self.alarm.enabled);
                self.enter(Mode::ShowTime, now);
            }
            Mode::SetFormatPrompt => self.enter(Mode::SettingFormat, now),
            Mode::SettingFormat => {
                info!("time format: {}", self.format);
                self.enter(Mode::ShowTime, now);
            }
        }

        Ok(())
    }

    fn enter(&mut self, mode: Mode, now: Millis) {
        info!("{} -> {}", self.mode, mode);
        self.mode = mode;
        self.entered_at = now;
    }

    /// Recover from an edit mode whose state doesn't line up
    fn fall_back(&mut self, now: Millis) {
        warn!("inconsistent {} state, returning to time", self.mode);
        self.draft = None;
        self.edit = EditField::None;
        self.enter(Mode::ShowTime, now);
    }
}
