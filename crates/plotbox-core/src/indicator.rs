//! LED matrix and RGB indicator collaborators.

use crate::plot::FunctionKind;

pub const MATRIX_SIDE: usize = 5;
pub const MATRIX_CELLS: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Colour used for the arrow cells.
pub const ARROW_COLOR: Rgb8 = Rgb8::new(0, 50, 0);

/// Zoom-to-duty multiplier for the plot-view brightness.
pub const ZOOM_BRIGHTNESS_SCALE: f32 = 25.5;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Row-major cell colours, row 0 at the top.
pub type MatrixCells = [Rgb8; MATRIX_CELLS];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arrow {
    Up,
    Down,
}

const UP_ARROW_ROWS: [u8; MATRIX_SIDE] = [
    0b00100, //
    0b01110, //
    0b10101, //
    0b00100, //
    0b00100,
];

/// Whether cell (`row`, `col`) is part of the arrow glyph.
pub fn arrow_lit(arrow: Arrow, row: usize, col: usize) -> bool {
    if row >= MATRIX_SIDE || col >= MATRIX_SIDE {
        return false;
    }

    let source_row = match arrow {
        Arrow::Up => row,
        Arrow::Down => MATRIX_SIDE - 1 - row,
    };
    UP_ARROW_ROWS[source_row] & (1 << (MATRIX_SIDE - 1 - col)) != 0
}

/// Full matrix frame showing `arrow` in `color`.
pub fn arrow_cells(arrow: Arrow, color: Rgb8) -> MatrixCells {
    let mut cells = [Rgb8::OFF; MATRIX_CELLS];
    for (index, cell) in cells.iter_mut().enumerate() {
        if arrow_lit(arrow, index / MATRIX_SIDE, index % MATRIX_SIDE) {
            *cell = color;
        }
    }
    cells
}

/// 5×5 addressable LED matrix.
pub trait LedMatrix {
    type Error;

    fn write_cells(&mut self, cells: &MatrixCells) -> Result<(), Self::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.write_cells(&[Rgb8::OFF; MATRIX_CELLS])
    }
}

/// Three-channel PWM indicator, levels are duty cycles out of 255.
pub trait RgbIndicator {
    type Error;

    fn set_levels(&mut self, levels: [u8; 3]) -> Result<(), Self::Error>;
}

/// Full-level colour shown while `kind` is highlighted in the menu.
pub fn selection_levels(kind: FunctionKind) -> [u8; 3] {
    kind.indicator_channels()
        .map(|lit| if lit { u8::MAX } else { 0 })
}

/// Plot-view brightness: the family's channels dimmed proportionally to `zoom`.
pub fn zoom_levels(kind: FunctionKind, zoom: f32) -> [u8; 3] {
    let scaled = ZOOM_BRIGHTNESS_SCALE * zoom;
    let level = if scaled.is_nan() || scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        u8::MAX
    } else {
        scaled as u8
    };

    kind.indicator_channels()
        .map(|lit| if lit { level } else { 0 })
}

/// Indicator stand-in for boards without LEDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIndicators;

impl LedMatrix for NoIndicators {
    type Error = core::convert::Infallible;

    fn write_cells(&mut self, _cells: &MatrixCells) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl RgbIndicator for NoIndicators {
    type Error = core::convert::Infallible;

    fn set_levels(&mut self, _levels: [u8; 3]) -> Result<(), Self::Error> {
        Ok(())
    }
}
