use plotbox_core::input::{ButtonLatch, InputEvent, InputProvider};

/// One analog stick axis, already converted to a raw 12-bit reading.
pub trait AxisSampler {
    type Error;

    fn sample(&mut self) -> Result<u16, Self::Error>;
}

/// Board input: presses drained from a shared latch plus one stick axis.
pub struct PanelInput<'a, AX> {
    latch: &'a ButtonLatch,
    axis: AX,
}

impl<'a, AX> PanelInput<'a, AX>
where
    AX: AxisSampler,
{
    pub const fn new(latch: &'a ButtonLatch, axis: AX) -> Self {
        Self { latch, axis }
    }

    pub fn latch(&self) -> &'a ButtonLatch {
        self.latch
    }
}

impl<AX> InputProvider for PanelInput<'_, AX>
where
    AX: AxisSampler,
{
    type Error = AX::Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.latch.take())
    }

    fn sample_axis(&mut self) -> Result<u16, Self::Error> {
        self.axis.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAxis(u16);

    impl AxisSampler for FixedAxis {
        type Error = ();

        fn sample(&mut self) -> Result<u16, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn drains_latch_and_forwards_axis() {
        let latch = ButtonLatch::new();
        let mut panel = PanelInput::new(&latch, FixedAxis(3_000));

        latch.notify(InputEvent::Decrement);
        latch.notify(InputEvent::Increment);

        assert_eq!(panel.poll_event(), Ok(Some(InputEvent::Increment)));
        assert_eq!(panel.poll_event(), Ok(Some(InputEvent::Decrement)));
        assert_eq!(panel.poll_event(), Ok(None));
        assert_eq!(panel.sample_axis(), Ok(3_000));
    }
}
