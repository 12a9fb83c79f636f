use std::fmt::Write;

use ssd1306::FrameBuffer;

/// Renders a frame as text, one character per pixel.
pub fn frame_to_ascii<const W: usize, const P: usize>(frame: &FrameBuffer<W, P>) -> String {
    let mut out = String::with_capacity((W + 3) * (P * 8 + 2));
    let border: String = "-".repeat(W);

    let _ = writeln!(out, "+{border}+");
    for y in 0..P * 8 {
        out.push('|');
        for x in 0..W {
            out.push(if frame.pixel(x, y) == Some(true) { '#' } else { ' ' });
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "+{border}+");
    out
}

#[cfg(test)]
mod tests {
    use ssd1306::FrameBuffer;

    use super::*;

    #[test]
    fn draws_one_character_per_pixel() {
        let mut frame = FrameBuffer::<4, 1>::new();
        frame.set_pixel(1, 0, true);
        let text = frame_to_ascii(&frame);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "+----+");
        assert_eq!(lines[1], "| #  |");
        assert_eq!(lines[2], "|    |");
    }
}
