use core::sync::atomic::{AtomicU8, Ordering};

use super::InputEvent;

/// Lock-free set of pending button presses.
///
/// Edge detectors (or interrupt handlers) call [`ButtonLatch::notify`]; the UI loop
/// drains with [`ButtonLatch::take`]. Repeated presses of the same button before a
/// drain collapse into one.
#[derive(Debug, Default)]
pub struct ButtonLatch {
    pending: AtomicU8,
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicU8::new(0),
        }
    }

    pub fn notify(&self, event: InputEvent) {
        self.pending.fetch_or(event.mask(), Ordering::AcqRel);
    }

    pub fn is_pending(&self, event: InputEvent) -> bool {
        self.pending.load(Ordering::Acquire) & event.mask() != 0
    }

    /// Clears and returns the oldest-priority pending press.
    ///
    /// Drain order is Confirm, Increment, Decrement.
    pub fn take(&self) -> Option<InputEvent> {
        for event in InputEvent::ALL {
            let previous = self.pending.fetch_and(!event.mask(), Ordering::AcqRel);
            if previous & event.mask() != 0 {
                return Some(event);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_fixed_order_and_collapses_repeats() {
        let latch = ButtonLatch::new();
        latch.notify(InputEvent::Decrement);
        latch.notify(InputEvent::Confirm);
        latch.notify(InputEvent::Confirm);

        assert!(latch.is_pending(InputEvent::Decrement));
        assert_eq!(latch.take(), Some(InputEvent::Confirm));
        assert_eq!(latch.take(), Some(InputEvent::Decrement));
        assert_eq!(latch.take(), None);
    }
}
