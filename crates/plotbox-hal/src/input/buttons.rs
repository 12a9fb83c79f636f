use embedded_hal::digital::InputPin;
use log::trace;

use plotbox_core::input::{ButtonLatch, InputEvent};

#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

impl ButtonConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }
}

#[derive(Debug)]
pub enum ButtonInputError<ConfirmErr, IncErr, DecErr> {
    Confirm(ConfirmErr),
    Increment(IncErr),
    Decrement(DecErr),
}

type ButtonResult<ConfirmErr, IncErr, DecErr, T> =
    Result<T, ButtonInputError<ConfirmErr, IncErr, DecErr>>;

/// Press-edge detector for the three panel buttons.
///
/// Levels are sampled once per [`ButtonEdges::poll`]; a released-to-pressed transition
/// is reported to the shared [`ButtonLatch`]. Timing-based debounce happens in the app.
#[derive(Debug)]
pub struct ButtonEdges<CONFIRM, INC, DEC> {
    confirm: CONFIRM,
    increment: INC,
    decrement: DEC,
    config: ButtonConfig,
    pressed: [bool; 3],
}

impl<CONFIRM, INC, DEC> ButtonEdges<CONFIRM, INC, DEC>
where
    CONFIRM: InputPin,
    INC: InputPin,
    DEC: InputPin,
{
    /// Buttons already held at start-up do not fire until released and pressed again.
    pub fn new(
        confirm: CONFIRM,
        increment: INC,
        decrement: DEC,
        config: ButtonConfig,
    ) -> ButtonResult<CONFIRM::Error, INC::Error, DEC::Error, Self> {
        let mut edges = Self {
            confirm,
            increment,
            decrement,
            config,
            pressed: [false; 3],
        };
        edges.pressed = edges.sample()?;
        Ok(edges)
    }

    /// Samples all three pins and latches new presses; returns how many fired.
    pub fn poll(
        &mut self,
        latch: &ButtonLatch,
    ) -> ButtonResult<CONFIRM::Error, INC::Error, DEC::Error, usize> {
        let levels = self.sample()?;
        let mut fired = 0;

        for (index, event) in InputEvent::ALL.into_iter().enumerate() {
            if levels[index] && !self.pressed[index] {
                latch.notify(event);
                fired += 1;
                trace!("input: press button={}", event.label());
            }
        }

        self.pressed = levels;
        Ok(fired)
    }

    pub fn release(self) -> (CONFIRM, INC, DEC) {
        (self.confirm, self.increment, self.decrement)
    }

    fn sample(&mut self) -> ButtonResult<CONFIRM::Error, INC::Error, DEC::Error, [bool; 3]> {
        let active_low = self.config.active_low;
        let confirm = self
            .confirm
            .is_high()
            .map_err(ButtonInputError::Confirm)?;
        let increment = self
            .increment
            .is_high()
            .map_err(ButtonInputError::Increment)?;
        let decrement = self
            .decrement
            .is_high()
            .map_err(ButtonInputError::Decrement)?;

        Ok([
            pressed_from_level(confirm, active_low),
            pressed_from_level(increment, active_low),
            pressed_from_level(decrement, active_low),
        ])
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}
