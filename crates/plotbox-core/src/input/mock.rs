use super::{AXIS_CENTER, InputEvent, InputProvider};

/// No-hardware input source: no presses, stick at rest.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }

    fn sample_axis(&mut self) -> Result<u16, Self::Error> {
        Ok(AXIS_CENTER)
    }
}
