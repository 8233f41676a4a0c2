use crate::buzzer::Buzzer;
use crate::clock::Clock;
use crate::display::{DisplayRenderer, MonoDisplay};
use crate::error::Error;
use crate::rtc::TimeSource;
use crate::{ButtonEvent, Millis};

/// Everything the main loop owns
///
/// Created once at startup and ticked forever. The button interrupts never see this; they only
/// feed the queue whose events are passed to [`App::tick()`].
pub struct App<T, B, D> {
    clock: Clock,
    renderer: DisplayRenderer<D>,
    rtc: T,
    buzzer: B,
}

impl<T, B, D> App<T, B, D>
where
    T: TimeSource,
    B: Buzzer,
    D: MonoDisplay,
{
    pub fn new(rtc: T, mut buzzer: B, display: D, now: Millis) -> Self {
        buzzer.set_duty(0);

        Self {
            clock: Clock::new(now),
            renderer: DisplayRenderer::new(display),
            rtc,
            buzzer,
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn renderer(&self) -> &DisplayRenderer<D> {
        &self.renderer
    }

    pub fn rtc(&self) -> &T {
        &self.rtc
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    /// One main loop iteration: apply pending button presses, then draw
    ///
    /// Every event is applied and the screen is drawn even if something fails along the way; the
    /// first error is returned afterwards.
    pub fn tick<I>(&mut self, now: Millis, events: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = ButtonEvent>,
    {
        let mut result = Ok(());

        for event in events {
            if let Err(e) = self.clock.handle(event, now, &mut self.rtc) {
                warn!("{} press failed: {}", event, e);
                result = result.and(Err(e));
            }
        }

        let step = self
            .clock
            .step(now, &mut self.rtc, &mut self.buzzer, &mut self.renderer);

        result.and(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Mode;
    use crate::display::Color;
    use crate::framebuffer::Framebuffer;
    use crate::rtc::{DateTime, TimeValue};
    use core::convert::Infallible;
    use embedded_time::duration::Milliseconds;
    use heapless::spsc::Queue;

    struct FixedRtc(DateTime);

    impl TimeSource for FixedRtc {
        type Error = Infallible;

        fn read(&mut self) -> Result<DateTime, Infallible> {
            Ok(self.0)
        }

        fn write(&mut self, datetime: DateTime) -> Result<(), Infallible> {
            self.0 = datetime;
            Ok(())
        }
    }

    struct Silent(u16);

    impl Buzzer for Silent {
        fn set_duty(&mut self, duty: u16) {
            self.0 = duty;
        }
    }

    struct CountingDisplay {
        fb: Framebuffer,
        commits: usize,
    }

    impl MonoDisplay for CountingDisplay {
        type Error = Infallible;

        fn fill(&mut self, color: Color) {
            self.fb.fill(color)
        }

        fn text(&mut self, text: &str, x: i32, y: i32, color: Color) {
            self.fb.text(text, x, y, color)
        }

        fn blit(&mut self, bitmap: &crate::Bitmap<'_>, x: i32, y: i32) {
            self.fb.blit(bitmap, x, y)
        }

        fn commit(&mut self) -> Result<(), Infallible> {
            self.commits += 1;
            Ok(())
        }
    }

    fn app() -> App<FixedRtc, Silent, CountingDisplay> {
        let now = DateTime {
            hour: 12,
            minute: 0,
            ..DateTime::default()
        };
        App::new(
            FixedRtc(now),
            Silent(u16::MAX),
            CountingDisplay {
                fb: Framebuffer::new(),
                commits: 0,
            },
            Milliseconds(0),
        )
    }

    #[test]
    fn buzzer_starts_silent() {
        assert_eq!(app().buzzer().0, 0);
    }

    #[test]
    fn every_tick_commits_once() {
        let mut app = app();
        app.tick(Milliseconds(0), core::iter::empty()).unwrap();
        app.tick(Milliseconds(16), core::iter::empty()).unwrap();
        assert_eq!(app.renderer().display().commits, 2);
    }

    #[test]
    fn tick_drains_the_queue_before_drawing() {
        let mut app = app();
        let mut queue: Queue<ButtonEvent, 4> = Queue::new();
        let (mut tx, mut rx) = queue.split();
        tx.enqueue(ButtonEvent::Menu).unwrap();
        tx.enqueue(ButtonEvent::Select).unwrap();
        tx.enqueue(ButtonEvent::Menu).unwrap();

        app.tick(Milliseconds(100), core::iter::from_fn(|| rx.dequeue()))
            .unwrap();

        assert!(rx.dequeue().is_none());
        assert_eq!(app.clock().mode(), Mode::SettingTime);
        assert_eq!(app.clock().draft(), Some(TimeValue::new(13, 0)));
        // The screen drawn this tick already shows the setting mode
        assert_eq!(app.renderer().display().commits, 1);
        assert!(app.renderer().display().fb.as_bytes().iter().any(|&b| b != 0));
    }

    #[test]
    fn confirmed_time_reaches_the_rtc() {
        let mut app = app();
        let events = [
            ButtonEvent::Menu,
            ButtonEvent::Select,
            ButtonEvent::Select,
            ButtonEvent::Menu,
            ButtonEvent::Select,
        ];
        app.tick(Milliseconds(0), events).unwrap();

        assert_eq!(app.clock().mode(), Mode::ShowTime);
        assert_eq!(app.rtc().0.time(), TimeValue::new(12, 1));
    }
}
