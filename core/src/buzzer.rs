/// Piezo buzzer driven by a PWM channel
///
/// The tone frequency is fixed when the buzzer is configured (see
/// [`crate::config::BUZZER_FREQ`]); at run time only the duty cycle changes.
pub trait Buzzer {
    /// Set the duty cycle, `0` is silent and `u16::MAX` is full scale
    fn set_duty(&mut self, duty: u16);
}

impl<B: Buzzer> Buzzer for &mut B {
    fn set_duty(&mut self, duty: u16) {
        (**self).set_duty(duty)
    }
}

/// Scale a 16 bit duty cycle onto a PWM channel whose compare register tops out at `max`
///
/// ```rust
/// use alarm_clock_core::buzzer::compare_from_duty;
///
/// assert_eq!(compare_from_duty(u16::MAX, 15), 15);
/// assert_eq!(compare_from_duty(0, 15), 0);
/// ```
pub const fn compare_from_duty(duty: u16, max: u16) -> u16 {
    (duty as u32 * max as u32 / u16::MAX as u32) as u16
}
