//! Host stand-ins for the board peripherals.

use std::{cell::Cell, convert::Infallible, rc::Rc};

use embedded_hal::{
    i2c::{self, I2c, Operation},
    pwm::{self, SetDutyCycle},
};
use log::{debug, trace};
use plotbox_core::input::AXIS_CENTER;
use plotbox_hal::{indicator::matrix::WordSink, input::panel::AxisSampler};
use ssd1306::protocol;

/// Two-wire bus that only reports what the panel would receive.
#[derive(Debug, Default)]
pub struct SimBus {
    frames: usize,
}

impl i2c::ErrorType for SimBus {
    type Error = Infallible;
}

impl I2c for SimBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bytes = Vec::new();
        for op in operations.iter() {
            if let Operation::Write(chunk) = op {
                bytes.extend_from_slice(chunk);
            }
        }

        match bytes.split_first() {
            Some((&protocol::CONTROL_COMMAND, command)) => {
                trace!("sim-bus: addr={address:#04x} command={command:02x?}");
            }
            Some((&protocol::CONTROL_DATA, pixels)) => {
                self.frames += 1;
                debug!(
                    "sim-bus: addr={address:#04x} frame={} data_bytes={}",
                    self.frames,
                    pixels.len()
                );
            }
            _ => debug!("sim-bus: addr={address:#04x} unexpected packet len={}", bytes.len()),
        }
        Ok(())
    }
}

/// Stick axis set by the script; a deflection is consumed by the next read.
#[derive(Clone, Debug, Default)]
pub struct SimAxis {
    pending: Rc<Cell<Option<u16>>>,
}

impl SimAxis {
    pub const FULL_UP: u16 = 4_095;
    pub const FULL_DOWN: u16 = 0;

    pub fn deflect(&self, sample: u16) {
        self.pending.set(Some(sample));
    }

    pub fn center(&self) {
        self.pending.set(None);
    }
}

impl AxisSampler for SimAxis {
    type Error = Infallible;

    fn sample(&mut self) -> Result<u16, Self::Error> {
        Ok(self.pending.take().unwrap_or(AXIS_CENTER))
    }
}

/// One PWM channel that only reports duty changes.
#[derive(Debug)]
pub struct SimChannel {
    name: &'static str,
    duty: u16,
}

impl SimChannel {
    pub const fn new(name: &'static str) -> Self {
        Self { name, duty: 0 }
    }
}

impl pwm::ErrorType for SimChannel {
    type Error = Infallible;
}

impl SetDutyCycle for SimChannel {
    fn max_duty_cycle(&self) -> u16 {
        u16::from(u8::MAX)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if duty != self.duty {
            debug!("sim-rgb: channel={} duty={}", self.name, duty);
            self.duty = duty;
        }
        Ok(())
    }
}

/// LED chain that counts lit cells per refresh.
#[derive(Debug, Default)]
pub struct SimChain {
    words: usize,
    lit: usize,
}

impl WordSink for SimChain {
    type Error = Infallible;

    fn write_word(&mut self, word: u32) -> Result<(), Self::Error> {
        self.words += 1;
        if word != 0 {
            self.lit += 1;
        }
        if self.words % plotbox_core::indicator::MATRIX_CELLS == 0 {
            debug!("sim-matrix: refresh lit={}", self.lit);
            self.lit = 0;
        }
        Ok(())
    }
}
