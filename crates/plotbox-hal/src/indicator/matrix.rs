use plotbox_core::indicator::{LedMatrix, MATRIX_SIDE, MatrixCells, Rgb8};

/// Serial sink for addressable-LED words, e.g. a PIO or SPI-encoded strip driver.
pub trait WordSink {
    type Error;

    fn write_word(&mut self, word: u32) -> Result<(), Self::Error>;
}

/// Which physical row the LED chain starts on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChainOrder {
    TopRowFirst,
    #[default]
    BottomRowFirst,
}

/// GRB word left-aligned in 32 bits, the layout WS2812-style chains shift out.
pub const fn pack_grb(color: Rgb8) -> u32 {
    (((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32) << 8
}

/// 5×5 addressable matrix driven one word per cell.
#[derive(Debug)]
pub struct AddressableMatrix<S> {
    sink: S,
    order: ChainOrder,
}

impl<S> AddressableMatrix<S>
where
    S: WordSink,
{
    pub const fn new(sink: S, order: ChainOrder) -> Self {
        Self { sink, order }
    }

    pub fn release(self) -> S {
        self.sink
    }
}

impl<S> LedMatrix for AddressableMatrix<S>
where
    S: WordSink,
{
    type Error = S::Error;

    fn write_cells(&mut self, cells: &MatrixCells) -> Result<(), Self::Error> {
        for chain_row in 0..MATRIX_SIDE {
            let row = match self.order {
                ChainOrder::TopRowFirst => chain_row,
                ChainOrder::BottomRowFirst => MATRIX_SIDE - 1 - chain_row,
            };
            for col in 0..MATRIX_SIDE {
                self.sink.write_word(pack_grb(cells[row * MATRIX_SIDE + col]))?;
            }
        }
        Ok(())
    }
}
