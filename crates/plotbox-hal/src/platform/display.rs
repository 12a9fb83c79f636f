use embedded_hal::i2c::I2c;
use ssd1306::{FrameBuffer, Ssd1306};

/// Destination for finished frames.
pub trait FrameSink<const W: usize, const P: usize> {
    type Error;

    fn present(&mut self, frame: &FrameBuffer<W, P>) -> Result<(), Self::Error>;
}

impl<I2C, const W: usize, const P: usize> FrameSink<W, P> for Ssd1306<I2C>
where
    I2C: I2c,
{
    type Error = ssd1306::Error<I2C::Error>;

    fn present(&mut self, frame: &FrameBuffer<W, P>) -> Result<(), Self::Error> {
        self.flush(frame)
    }
}

/// Brings the panel up and shows a blank frame.
pub fn bring_up<I2C, const W: usize, const P: usize>(
    display: &mut Ssd1306<I2C>,
    frame: &mut FrameBuffer<W, P>,
) -> Result<(), ssd1306::Error<I2C::Error>>
where
    I2C: I2c,
{
    display.init::<W, P>()?;
    frame.fill(false);
    display.flush(frame)
}
