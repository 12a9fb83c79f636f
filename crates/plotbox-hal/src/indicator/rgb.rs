use embedded_hal::pwm::SetDutyCycle;

use plotbox_core::indicator::RgbIndicator;

#[derive(Debug)]
pub enum RgbError<RedErr, GreenErr, BlueErr> {
    Red(RedErr),
    Green(GreenErr),
    Blue(BlueErr),
}

/// Common-cathode RGB LED on three PWM channels; levels map linearly onto duty.
#[derive(Debug)]
pub struct PwmRgb<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> RgbIndicator for PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    type Error = RgbError<R::Error, G::Error, B::Error>;

    fn set_levels(&mut self, levels: [u8; 3]) -> Result<(), Self::Error> {
        let [red, green, blue] = levels.map(u16::from);
        self.red
            .set_duty_cycle_fraction(red, u16::from(u8::MAX))
            .map_err(RgbError::Red)?;
        self.green
            .set_duty_cycle_fraction(green, u16::from(u8::MAX))
            .map_err(RgbError::Green)?;
        self.blue
            .set_duty_cycle_fraction(blue, u16::from(u8::MAX))
            .map_err(RgbError::Blue)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    use super::*;

    struct FakeChannel {
        max: u16,
        duty: u16,
    }

    impl FakeChannel {
        fn new(max: u16) -> Self {
            Self { max, duty: 0 }
        }
    }

    impl ErrorType for FakeChannel {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn levels_scale_onto_each_channel_range() {
        let mut rgb = PwmRgb::new(
            FakeChannel::new(255),
            FakeChannel::new(1_000),
            FakeChannel::new(255),
        );

        rgb.set_levels([255, 51, 0]).unwrap();
        let (red, green, blue) = rgb.release();
        assert_eq!(red.duty, 255);
        assert_eq!(green.duty, 200);
        assert_eq!(blue.duty, 0);
    }
}
