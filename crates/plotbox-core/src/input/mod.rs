//! Input abstraction layer.

mod latch;
mod mock;

pub use latch::ButtonLatch;
pub use mock::MockInput;

/// Midpoint of a 12-bit analog stick reading.
pub const AXIS_CENTER: u16 = 2048;

/// Logical button actions consumed by the plotter app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Confirm,
    Increment,
    Decrement,
}

impl InputEvent {
    /// Order in which simultaneous presses are drained.
    pub const ALL: [Self; 3] = [Self::Confirm, Self::Increment, Self::Decrement];

    pub const fn mask(self) -> u8 {
        match self {
            Self::Confirm => 1 << 0,
            Self::Increment => 1 << 1,
            Self::Decrement => 1 << 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

/// Polled input provider: button events plus one analog axis.
pub trait InputProvider {
    type Error;

    /// Next pending button press, oldest first.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;

    /// Raw axis reading, `AXIS_CENTER` when the stick is at rest.
    fn sample_axis(&mut self) -> Result<u16, Self::Error>;
}

/// Direction the stick is pushed once past the dead zone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AxisIntent {
    Up,
    Down,
}

/// Classifies a raw axis sample.
///
/// Readings strictly farther than `dead_zone` from `center` count as an intent.
/// `inverted` swaps the two directions for sticks mounted upside down.
pub fn axis_intent(sample: u16, center: u16, dead_zone: u16, inverted: bool) -> Option<AxisIntent> {
    let offset = i32::from(sample) - i32::from(center);
    let intent = if offset > i32::from(dead_zone) {
        AxisIntent::Up
    } else if offset < -i32::from(dead_zone) {
        AxisIntent::Down
    } else {
        return None;
    };

    Some(match (intent, inverted) {
        (AxisIntent::Up, true) => AxisIntent::Down,
        (AxisIntent::Down, true) => AxisIntent::Up,
        (intent, false) => intent,
    })
}
