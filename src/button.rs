use stm32l0xx_hal::exti::{Exti, ExtiLine, GpioLine, TriggerEdge};
use stm32l0xx_hal::gpio::{gpioa::PA2, gpiob::PB9, Input, PullDown};
use stm32l0xx_hal::syscfg::SYSCFG;

pub type SelectBtn = PA2<Input<PullDown>>;
pub type MenuBtn = PB9<Input<PullDown>>;

pub trait Button {
    /// EXTI line the button is wired to, same as its pin number
    const LINE: u8;

    fn gpio_line(&self) -> GpioLine;

    /// Enable the rising edge interrupt for the button
    ///
    /// The select button is on interrupt `EXTI2_3` and the menu button is on interrupt `EXTI4_15`
    fn enable_interrupt(&self, exti: &mut Exti, syscfg: &mut SYSCFG);

    /// Clear the pending interrupt so the handler isn't entered again for the same edge
    fn unpend();
}

macro_rules! buttons {
    ( $( $Btn:ident => $line:literal ),* ) => {
        $(
            impl Button for $Btn {
                const LINE: u8 = $line;

                fn gpio_line(&self) -> GpioLine {
                    GpioLine::from_raw_line(self.pin_number()).unwrap()
                }

                fn enable_interrupt(&self, exti: &mut Exti, syscfg: &mut SYSCFG) {
                    exti.listen_gpio(syscfg, self.port(), self.gpio_line(), TriggerEdge::Rising);
                }

                fn unpend() {
                    if let Some(line) = GpioLine::from_raw_line(Self::LINE) {
                        Exti::unpend(line);
                    }
                }
            }
        )*
    }
}

buttons! {SelectBtn => 2, MenuBtn => 9}
