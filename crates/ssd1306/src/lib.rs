#![cfg_attr(not(test), no_std)]

//! SSD1306 (128x64 monochrome OLED, two-wire bus) driver primitives.

mod framebuffer;
pub mod protocol;

pub use framebuffer::FrameBuffer;

use embedded_hal::i2c::{I2c, Operation};

/// Framebuffer matching the common 128x64 module.
pub type FrameBuffer128x64 = FrameBuffer<128, 8>;

/// Driver configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// 7-bit bus address.
    pub address: u8,
    /// Panel powered from an external VCC rail instead of the charge pump.
    pub external_vcc: bool,
    /// Contrast level sent during init.
    pub contrast: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: protocol::DEFAULT_ADDRESS,
            external_vcc: false,
            contrast: 0xFF,
        }
    }
}

/// Driver errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<I2cErr> {
    /// Bus transaction failed.
    Bus(I2cErr),
    /// Panel geometry is outside supported bounds.
    InvalidInput,
}

pub type DriverResult<I2cErr> = Result<(), Error<I2cErr>>;

/// SSD1306 driver.
#[derive(Debug)]
pub struct Ssd1306<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Creates a new driver instance.
    pub fn new(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Releases owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Sends one command byte.
    pub fn command(&mut self, command: u8) -> DriverResult<I2C::Error> {
        let packet = protocol::build_command_packet(command);
        self.i2c
            .write(self.config.address, &packet)
            .map_err(Error::Bus)
    }

    /// Runs the power-up configuration for a `WIDTH x PAGES*8` panel.
    pub fn init<const WIDTH: usize, const PAGES: usize>(&mut self) -> DriverResult<I2C::Error> {
        let sequence = protocol::init_sequence(
            FrameBuffer::<WIDTH, PAGES>::HEIGHT,
            self.config.contrast,
            self.config.external_vcc,
        )
        .ok_or(Error::InvalidInput)?;

        for command in sequence {
            self.command(command)?;
        }

        Ok(())
    }

    /// Turns the panel on or off without touching GDDRAM.
    pub fn set_display_on(&mut self, on: bool) -> DriverResult<I2C::Error> {
        self.command(protocol::SET_DISP | on as u8)
    }

    /// Flushes a full framebuffer.
    ///
    /// The pixel bytes go out as one data write prefixed by the data control byte, so the
    /// bus sees `pages * width + 1` bytes.
    pub fn flush<const WIDTH: usize, const PAGES: usize>(
        &mut self,
        frame: &FrameBuffer<WIDTH, PAGES>,
    ) -> DriverResult<I2C::Error> {
        let window = protocol::full_window(WIDTH, PAGES).ok_or(Error::InvalidInput)?;
        for command in window {
            self.command(command)?;
        }

        let control = [protocol::CONTROL_DATA];
        let mut ops = [Operation::Write(&control), Operation::Write(frame.bytes())];
        self.i2c
            .transaction(self.config.address, &mut ops)
            .map_err(Error::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal::i2c::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for RecordingBus {
        type Error = ErrorKind;
    }

    impl I2c for RecordingBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }

            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.writes.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn init_sends_each_command_as_control_pair() {
        let mut display = Ssd1306::new(RecordingBus::default(), Config::default());
        display.init::<128, 8>().unwrap();

        let bus = display.release();
        assert_eq!(bus.writes.len(), protocol::INIT_SEQUENCE_LEN);
        assert!(bus.writes.iter().all(|(addr, bytes)| *addr == 0x3C && bytes.len() == 2));
        assert_eq!(bus.writes[0].1, vec![0x80, 0xAE]);
        assert_eq!(bus.writes.last().unwrap().1, vec![0x80, 0xAF]);
    }

    #[test]
    fn flush_sets_window_then_writes_marker_and_pixels() {
        let mut frame = FrameBuffer128x64::new();
        frame.set_pixel(0, 0, true);
        frame.set_pixel(127, 63, true);

        let mut display = Ssd1306::new(RecordingBus::default(), Config::default());
        display.flush(&frame).unwrap();

        let bus = display.release();
        assert_eq!(bus.writes.len(), 7);
        let window: Vec<u8> = bus.writes[..6].iter().map(|(_, b)| b[1]).collect();
        assert_eq!(window, vec![0x21, 0, 127, 0x22, 0, 7]);

        let (_, data) = &bus.writes[6];
        assert_eq!(data.len(), 8 * 128 + 1);
        assert_eq!(data[0], 0x40);
        assert_eq!(data[1], 0x01);
        assert_eq!(data[data.len() - 1], 0x80);
        assert_eq!(&data[1..], frame.bytes());
    }

    #[test]
    fn display_power_toggles_with_single_commands() {
        let mut display = Ssd1306::new(RecordingBus::default(), Config::default());
        display.set_display_on(false).unwrap();
        display.set_display_on(true).unwrap();

        let bus = display.release();
        assert_eq!(bus.writes[0].1, vec![0x80, 0xAE]);
        assert_eq!(bus.writes[1].1, vec![0x80, 0xAF]);
    }

    #[test]
    fn bus_failure_is_reported() {
        let bus = RecordingBus {
            fail: true,
            ..RecordingBus::default()
        };
        let mut display = Ssd1306::new(bus, Config::default());

        assert_eq!(
            display.flush(&FrameBuffer128x64::new()),
            Err(Error::Bus(ErrorKind::Other))
        );
    }

    #[test]
    fn oversized_geometry_is_rejected_before_touching_the_bus() {
        let mut display = Ssd1306::new(RecordingBus::default(), Config::default());

        assert_eq!(display.init::<128, 9>(), Err(Error::InvalidInput));
        assert!(display.release().writes.is_empty());
    }
}
