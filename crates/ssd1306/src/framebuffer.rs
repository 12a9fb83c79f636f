//! In-memory framebuffer in SSD1306 GDDRAM order.

/// Paged 1bpp framebuffer.
///
/// The panel is split into `PAGES` horizontal bands of 8 rows. Each byte holds one column of
/// a page, bit 0 being the topmost row of that page, so pixel `(x, y)` lives at byte
/// `(y / 8) * WIDTH + x`, bit `y % 8`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameBuffer<const WIDTH: usize, const PAGES: usize> {
    pages: [[u8; WIDTH]; PAGES],
}

impl<const WIDTH: usize, const PAGES: usize> Default for FrameBuffer<WIDTH, PAGES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const PAGES: usize> FrameBuffer<WIDTH, PAGES> {
    /// Panel width in pixels.
    pub const WIDTH: usize = WIDTH;
    /// Panel height in pixels.
    pub const HEIGHT: usize = PAGES * 8;
    /// Total framebuffer size in bytes.
    pub const BUFFER_SIZE: usize = WIDTH * PAGES;

    /// Creates a new framebuffer with every pixel off.
    pub const fn new() -> Self {
        Self {
            pages: [[0u8; WIDTH]; PAGES],
        }
    }

    pub const fn width(&self) -> usize {
        WIDTH
    }

    pub const fn height(&self) -> usize {
        PAGES * 8
    }

    /// Returns the framebuffer bytes in transmit order (page by page, column by column).
    pub fn bytes(&self) -> &[u8] {
        self.pages.as_flattened()
    }

    /// Returns mutable framebuffer bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        self.pages.as_flattened_mut()
    }

    /// Sets every pixel on or off.
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(value);
        }
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= Self::HEIGHT {
            return false;
        }

        let bit_mask = 1u8 << (y % 8);
        let byte = &mut self.pages[y / 8][x];

        if on {
            *byte |= bit_mask;
        } else {
            *byte &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= Self::HEIGHT {
            return None;
        }

        Some((self.pages[y / 8][x] & (1u8 << (y % 8))) != 0)
    }

    /// Number of pixels currently on.
    pub fn count_on(&self) -> usize {
        self.bytes().iter().map(|b| b.count_ones() as usize).sum()
    }
}
