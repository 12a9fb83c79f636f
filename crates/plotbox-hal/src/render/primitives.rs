//! Pixel-level drawing on the paged framebuffer. Out-of-bounds pixels are dropped.

use ssd1306::FrameBuffer;

use super::font::{self, COMPACT_SIZE, GLYPH_SIZE};

/// Horizontal advance of a full-size character cell.
pub const CHAR_ADVANCE: i32 = GLYPH_SIZE as i32;
/// Horizontal advance of a compact digit.
pub const COMPACT_ADVANCE: i32 = COMPACT_SIZE as i32;
/// Vertical advance when a string wraps.
pub const LINE_ADVANCE: i32 = GLYPH_SIZE as i32;

pub fn set_pixel<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    x: i32,
    y: i32,
    on: bool,
) {
    if x < 0 || y < 0 {
        return;
    }

    let _ = frame.set_pixel(x as usize, y as usize, on);
}

/// Inclusive span `x0..=x1` on row `y`, endpoints in any order.
pub fn draw_hline<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    x0: i32,
    x1: i32,
    y: i32,
    on: bool,
) {
    for x in x0.min(x1)..=x0.max(x1) {
        set_pixel(frame, x, y, on);
    }
}

/// Inclusive span `y0..=y1` on column `x`, endpoints in any order.
pub fn draw_vline<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    x: i32,
    y0: i32,
    y1: i32,
    on: bool,
) {
    for y in y0.min(y1)..=y0.max(y1) {
        set_pixel(frame, x, y, on);
    }
}

/// Bresenham line including both endpoints.
///
/// Endpoints are put in a canonical order first, so swapping them yields the same pixels.
pub fn draw_line<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    on: bool,
) {
    let ((mut x, mut y), (x_end, y_end)) = if (x0, y0) <= (x1, y1) {
        ((x0, y0), (x1, y1))
    } else {
        ((x1, y1), (x0, y0))
    };

    let dx = (x_end - x).abs();
    let dy = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(frame, x, y, on);
        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Rectangle with its top-left corner at (`left`, `top`).
///
/// The perimeter is always drawn; `filled` also covers the interior.
pub fn draw_rect<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    top: i32,
    left: i32,
    width: i32,
    height: i32,
    on: bool,
    filled: bool,
) {
    if width <= 0 || height <= 0 {
        return;
    }

    let right = left + width - 1;
    let bottom = top + height - 1;

    draw_hline(frame, left, right, top, on);
    draw_hline(frame, left, right, bottom, on);
    draw_vline(frame, left, top, bottom, on);
    draw_vline(frame, right, top, bottom, on);

    if filled {
        for y in (top + 1)..bottom {
            for x in (left + 1)..right {
                set_pixel(frame, x, y, on);
            }
        }
    }
}

/// Draws one character cell at (`x`, `y`) and returns its advance.
///
/// The whole cell is written, so glyphs clear what lies under them. With `compact`,
/// digits use the 5×5 table; every other character keeps its full cell.
pub fn draw_char<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    c: char,
    x: i32,
    y: i32,
    compact: bool,
) -> i32 {
    if compact {
        if let Some(rows) = font::compact_digit(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..COMPACT_SIZE {
                    let on = (bits >> (COMPACT_SIZE - 1 - col)) & 1 != 0;
                    set_pixel(frame, x + col as i32, y + row as i32, on);
                }
            }
            return COMPACT_ADVANCE;
        }
    }

    let glyph = font::glyph(c);
    for (i, line) in glyph.bytes.iter().enumerate() {
        for j in 0..GLYPH_SIZE {
            let on = (line >> j) & 1 != 0;
            if glyph.rotated {
                set_pixel(frame, x + (7 - j as i32), y + i as i32, on);
            } else {
                set_pixel(frame, x + i as i32, y + j as i32, on);
            }
        }
    }

    CHAR_ADVANCE
}

fn advance_for(c: char, compact: bool) -> i32 {
    if compact && c.is_ascii_digit() {
        COMPACT_ADVANCE
    } else {
        CHAR_ADVANCE
    }
}

/// Draws `text` left to right from (`x`, `y`).
///
/// A character that would cross the right edge wraps to column 0 of the next text row;
/// drawing stops once a row would cross the bottom edge. Compact rows are 5 pixels tall
/// for that check, so digit labels fit down to the last five rows; any full-size cell in
/// such a row is clipped at the edge.
pub fn draw_string<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    text: &str,
    x: i32,
    y: i32,
    compact: bool,
) {
    let width = W as i32;
    let height = (P * 8) as i32;
    let row_height = if compact { COMPACT_SIZE as i32 } else { LINE_ADVANCE };
    let mut cursor_x = x;
    let mut cursor_y = y;

    for c in text.chars() {
        let advance = advance_for(c, compact);
        if cursor_x + advance > width {
            cursor_x = 0;
            cursor_y += LINE_ADVANCE;
        }
        if cursor_y + row_height > height {
            break;
        }

        cursor_x += draw_char(frame, c, cursor_x, cursor_y, compact);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use ssd1306::FrameBuffer128x64;

    use super::*;

    fn lit(frame: &FrameBuffer128x64) -> BTreeSet<(usize, usize)> {
        let mut set = BTreeSet::new();
        for y in 0..64 {
            for x in 0..128 {
                if frame.pixel(x, y) == Some(true) {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn lines_are_symmetric() {
        let segments = [
            (0, 0, 127, 63),
            (5, 40, 90, 3),
            (10, 10, 10, 50),
            (3, 7, 60, 7),
            (100, 2, 20, 61),
            (-10, -4, 140, 70),
            (64, 32, 65, 60),
        ];

        for (x0, y0, x1, y1) in segments {
            let mut forward = FrameBuffer128x64::new();
            let mut backward = FrameBuffer128x64::new();
            draw_line(&mut forward, x0, y0, x1, y1, true);
            draw_line(&mut backward, x1, y1, x0, y0, true);
            assert_eq!(lit(&forward), lit(&backward), "({x0},{y0})-({x1},{y1})");
        }
    }

    #[test]
    fn line_steps_only_past_the_half_pixel() {
        let mut shallow = FrameBuffer128x64::new();
        draw_line(&mut shallow, 0, 0, 2, 1, true);
        assert_eq!(
            lit(&shallow),
            BTreeSet::from([(0, 0), (1, 0), (2, 1)])
        );

        let mut steep = FrameBuffer128x64::new();
        draw_line(&mut steep, 0, 0, 1, 2, true);
        assert_eq!(lit(&steep), BTreeSet::from([(0, 0), (0, 1), (1, 2)]));

        let mut reversed = FrameBuffer128x64::new();
        draw_line(&mut reversed, 2, 1, 0, 0, true);
        assert_eq!(lit(&reversed), lit(&shallow));
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut frame = FrameBuffer128x64::new();
        draw_line(&mut frame, 2, 3, 40, 20, true);
        assert_eq!(frame.pixel(2, 3), Some(true));
        assert_eq!(frame.pixel(40, 20), Some(true));

        let mut diagonal = FrameBuffer128x64::new();
        draw_line(&mut diagonal, 0, 0, 9, 9, true);
        assert_eq!(diagonal.count_on(), 10);
    }

    #[test]
    fn outline_rect_leaves_interior_clear() {
        let mut frame = FrameBuffer128x64::new();
        draw_rect(&mut frame, 10, 20, 8, 6, true, false);

        for y in 11..15 {
            for x in 21..27 {
                assert_eq!(frame.pixel(x, y), Some(false));
            }
        }
        assert_eq!(frame.count_on(), 2 * 8 + 2 * 4);
    }

    #[test]
    fn filled_rect_covers_every_cell() {
        for (w, h) in [(2, 2), (3, 5), (9, 4)] {
            let mut frame = FrameBuffer128x64::new();
            draw_rect(&mut frame, 4, 6, w, h, true, true);
            assert_eq!(frame.count_on(), (w * h) as usize);
            for y in 4..4 + h as usize {
                for x in 6..6 + w as usize {
                    assert_eq!(frame.pixel(x, y), Some(true));
                }
            }
        }
    }

    #[test]
    fn letters_render_column_major() {
        let mut frame = FrameBuffer128x64::new();
        draw_char(&mut frame, 'I', 0, 0, false);

        // 'I' carries its 0x7F stem in column 3.
        for row in 0..7 {
            assert_eq!(frame.pixel(3, row), Some(true));
        }
        assert_eq!(frame.pixel(3, 7), Some(false));
        assert_eq!(frame.pixel(0, 0), Some(false));
    }

    #[test]
    fn punctuation_renders_rotated() {
        let mut frame = FrameBuffer128x64::new();
        draw_char(&mut frame, '-', 8, 16, false);

        // Row 3 holds 0x3C: bits 2..=5 map to columns 5..=2.
        let expected: BTreeSet<(usize, usize)> = (10..=13).map(|x| (x, 19)).collect();
        assert_eq!(lit(&frame), expected);
    }

    #[test]
    fn glyph_cell_overwrites_background() {
        let mut frame = FrameBuffer128x64::new();
        frame.fill(true);
        draw_char(&mut frame, ' ', 0, 0, false);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(frame.pixel(x, y), Some(false));
            }
        }
        assert_eq!(frame.pixel(8, 0), Some(true));
    }

    #[test]
    fn compact_digits_use_five_by_five_cells() {
        let mut frame = FrameBuffer128x64::new();
        let advance = draw_char(&mut frame, '1', 0, 0, true);
        assert_eq!(advance, COMPACT_ADVANCE);

        let expected: BTreeSet<(usize, usize)> =
            [(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)]
                .into_iter()
                .collect();
        assert_eq!(lit(&frame), expected);

        let mut minus = FrameBuffer128x64::new();
        assert_eq!(draw_char(&mut minus, '-', 0, 0, true), CHAR_ADVANCE);
    }

    #[test]
    fn strings_wrap_at_the_right_edge() {
        let mut frame = FrameBuffer128x64::new();
        draw_string(&mut frame, "IIIII", 96, 0, false);

        // Four cells fit on the first row (x = 96..128), the fifth wraps to (0, 8).
        assert_eq!(frame.pixel(99, 0), Some(true));
        assert_eq!(frame.pixel(123, 0), Some(true));
        assert_eq!(frame.pixel(3, 8), Some(true));
        assert_eq!(frame.pixel(3, 0), Some(false));
    }

    #[test]
    fn strings_stop_at_the_bottom_edge() {
        let mut frame = FrameBuffer128x64::new();
        draw_string(&mut frame, "II", 120, 56, false);
        assert_eq!(frame.pixel(123, 56), Some(true));
        assert_eq!(frame.count_on(), 11);
    }

    #[test]
    fn compact_labels_fit_down_to_the_last_five_rows() {
        let mut frame = FrameBuffer128x64::new();
        draw_string(&mut frame, "30", 60, 59, true);

        let ink = (59..64)
            .flat_map(|y| (60..70).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y) == Some(true))
            .count();
        assert!(ink > 0);

        let mut too_low = FrameBuffer128x64::new();
        draw_string(&mut too_low, "30", 60, 60, true);
        assert_eq!(too_low.count_on(), 0);
    }

    #[test]
    fn compact_strings_advance_five_per_digit() {
        let mut frame = FrameBuffer128x64::new();
        draw_string(&mut frame, "11", 0, 0, true);
        assert_eq!(frame.pixel(1, 0), Some(true));
        assert_eq!(frame.pixel(6, 0), Some(true));
    }

    #[test]
    fn drawing_off_screen_is_ignored() {
        let mut frame = FrameBuffer128x64::new();
        draw_char(&mut frame, 'A', -20, -20, false);
        draw_string(&mut frame, "ABC", 0, 70, false);
        draw_rect(&mut frame, 100, 200, 5, 5, true, true);
        assert_eq!(frame.count_on(), 0);
    }
}
