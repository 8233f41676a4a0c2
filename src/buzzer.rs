use stm32l0xx_hal::gpio::{gpioa::PA0, Analog};
use stm32l0xx_hal::pac::TIM2;
use stm32l0xx_hal::pwm::{Assigned, Pwm, Timer, C1};
use stm32l0xx_hal::rcc::Rcc;

use cortex_m::prelude::_embedded_hal_PwmPin as _;
use embedded_time::rate::Hertz;

use alarm_clock_core::buzzer::{compare_from_duty, Buzzer};

/// Piezo on TIM2 channel 1
pub struct Piezo {
    pwm: Pwm<TIM2, C1, Assigned<PA0<Analog>>>,
}

impl Piezo {
    /// Configure the PWM channel at a fixed tone frequency, starting silent
    pub fn new(tim2: TIM2, pa0: PA0<Analog>, freq: Hertz, rcc: &mut Rcc) -> Self {
        let timer = Timer::new(tim2, freq, rcc);
        let mut pwm = timer.channel1.assign(pa0);

        pwm.set_duty(0);
        pwm.enable();

        Self { pwm }
    }
}

impl Buzzer for Piezo {
    fn set_duty(&mut self, duty: u16) {
        let compare = compare_from_duty(duty, self.pwm.get_max_duty());
        self.pwm.set_duty(compare);
    }
}
