#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _; // panic handler

mod button;
mod buzzer;
mod display;
mod rtc;

#[rtic::app(
    device = stm32l0xx_hal::pac,
    dispatchers = []
)]
mod app {
    use alarm_clock_core::config::{BUZZER_FREQ, DISPLAY_ADDRESS, EVENT_QUEUE};
    use alarm_clock_core::{App, ButtonChannel, ButtonEvent, Millis};
    use embedded_time::duration::Milliseconds;
    use embedded_time::rate::Hertz;
    use heapless::spsc::{Consumer, Producer, Queue};
    use rtic_monotonics::systick::*;
    use rtic_monotonics::Monotonic;
    use ssd1306::prelude::*;
    use ssd1306::I2CDisplayInterface;
    use stm32l0xx_hal::gpio::gpiob::{PB6, PB7};
    use stm32l0xx_hal::gpio::{OpenDrain, Output};
    use stm32l0xx_hal::i2c::I2c;
    use stm32l0xx_hal::pac::I2C1;
    use stm32l0xx_hal::prelude::*;
    use stm32l0xx_hal::syscfg::SYSCFG;
    use stm32l0xx_hal::{exti, pwr, rcc, rtc as hal_rtc};

    use crate::button::{Button, MenuBtn, SelectBtn};
    use crate::buzzer::Piezo;
    use crate::display::Oled;
    use crate::rtc::HardwareRtc;

    type Bus = I2CInterface<I2c<I2C1, PB7<Output<OpenDrain>>, PB6<Output<OpenDrain>>>>;
    type ClockApp = App<HardwareRtc, Piezo, Oled<Bus>>;

    const SYSCLK: u32 = 16_000_000;

    #[shared]
    struct Shared {
        events: Producer<'static, ButtonEvent, EVENT_QUEUE>,
    }

    #[local]
    struct Local {
        menu: ButtonChannel<MenuBtn>,
        select: ButtonChannel<SelectBtn>,
        pending: Consumer<'static, ButtonEvent, EVENT_QUEUE>,
        clock: ClockApp,
    }

    /// Milliseconds since the systick was started
    fn now() -> Millis {
        Milliseconds(Systick::now().duration_since_epoch().to_millis())
    }

    #[init(local = [queue: Queue<ButtonEvent, EVENT_QUEUE> = Queue::new()])]
    fn init(cx: init::Context) -> (Shared, Local) {
        defmt::info!("init");

        let dp = cx.device;

        let mut rcc = dp.RCC.freeze(rcc::Config::hsi16());

        let token = rtic_monotonics::create_systick_token!();
        Systick::start(cx.core.SYST, SYSCLK, token);

        let pwr = pwr::PWR::new(dp.PWR, &mut rcc);
        let mut exti = exti::Exti::new(dp.EXTI);
        let mut syscfg = SYSCFG::new(dp.SYSCFG, &mut rcc);

        let gpioa = dp.GPIOA.split(&mut rcc);
        let gpiob = dp.GPIOB.split(&mut rcc);

        let menu: MenuBtn = gpiob.pb9.into_pull_down_input();
        let select: SelectBtn = gpioa.pa2.into_pull_down_input();
        menu.enable_interrupt(&mut exti, &mut syscfg);
        select.enable_interrupt(&mut exti, &mut syscfg);

        let Ok(rtc) = hal_rtc::Rtc::new(dp.RTC, &mut rcc, &pwr, None) else {
            defmt::panic!("RTC init failed");
        };

        let piezo = Piezo::new(dp.TIM2, gpioa.pa0, Hertz(BUZZER_FREQ), &mut rcc);

        let sda = gpiob.pb7.into_open_drain_output();
        let scl = gpiob.pb6.into_open_drain_output();
        let i2c = dp.I2C1.i2c(sda, scl, Hertz(100_000), &mut rcc);
        let oled = Oled::new(I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDRESS));

        let (events, pending) = cx.local.queue.split();

        let clock = App::new(HardwareRtc::new(rtc), piezo, oled, now());

        (
            Shared { events },
            Local {
                menu: ButtonChannel::new(menu, ButtonEvent::Menu),
                select: ButtonChannel::new(select, ButtonEvent::Select),
                pending,
                clock,
            },
        )
    }

    #[idle(local = [clock, pending])]
    fn idle(cx: idle::Context) -> ! {
        defmt::info!("idle");

        let clock = cx.local.clock;
        let pending = cx.local.pending;

        loop {
            let presses = core::iter::from_fn(|| pending.dequeue());
            if let Err(e) = clock.tick(now(), presses) {
                defmt::warn!("tick failed: {}", e);
            }
        }
    }

    #[task(binds = EXTI2_3, shared = [events], local = [select])]
    fn select_pressed(mut cx: select_pressed::Context) {
        let at = now();
        let select = cx.local.select;
        cx.shared.events.lock(|events| select.on_rising_edge(at, events));
        SelectBtn::unpend();
    }

    #[task(binds = EXTI4_15, shared = [events], local = [menu])]
    fn menu_pressed(mut cx: menu_pressed::Context) {
        let at = now();
        let menu = cx.local.menu;
        cx.shared.events.lock(|events| menu.on_rising_edge(at, events));
        MenuBtn::unpend();
    }
}
