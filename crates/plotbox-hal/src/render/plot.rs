//! Axes, ticks, curve and zoom label for the plot screen.

use plotbox_core::{
    plot::{PlotFunction, Viewport, tick_has_label, tick_values},
    text::Line,
};
use ssd1306::FrameBuffer;

use super::primitives::{draw_hline, draw_string, draw_vline, set_pixel};

const TICK_HALF_LENGTH: i32 = 2;
const X_LABEL_OFFSET: (i32, i32) = (-4, 4);
const Y_LABEL_OFFSET: (i32, i32) = (4, -2);
const ZOOM_LABEL_ORIGIN: (i32, i32) = (0, 55);

pub fn draw_plot<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    function: &PlotFunction,
    zoom: f32,
    pan_x: f32,
) {
    let view = Viewport::new(W, P * 8, zoom, pan_x);

    frame.fill(false);
    draw_axes(frame, &view);
    draw_ticks(frame, &view);
    draw_curve(frame, &view, function);

    let label = Line::from_fmt(format_args!("Zoom: {:.1}x", zoom));
    draw_string(
        frame,
        label.as_str(),
        ZOOM_LABEL_ORIGIN.0,
        ZOOM_LABEL_ORIGIN.1,
        true,
    );
}

fn draw_axes<const W: usize, const P: usize>(frame: &mut FrameBuffer<W, P>, view: &Viewport) {
    let (cx, cy) = view.center();
    draw_vline(frame, cx, 0, view.height() - 1, true);
    draw_hline(frame, 0, view.width() - 1, cy, true);
}

fn draw_ticks<const W: usize, const P: usize>(frame: &mut FrameBuffer<W, P>, view: &Viewport) {
    let (cx, cy) = view.center();

    for value in tick_values() {
        let x_pos = view.math_x_to_pixel(value as f32);
        if view.contains_column(x_pos) {
            draw_vline(frame, x_pos, cy - TICK_HALF_LENGTH, cy + TICK_HALF_LENGTH, true);
            if tick_has_label(value) {
                draw_tick_label(frame, value, x_pos + X_LABEL_OFFSET.0, cy + X_LABEL_OFFSET.1);
            }
        }
    }

    for value in tick_values() {
        let y_pos = view.math_y_to_pixel(value as f32);
        if view.contains_row(y_pos) {
            draw_hline(frame, cx - TICK_HALF_LENGTH, cx + TICK_HALF_LENGTH, y_pos, true);
            if tick_has_label(value) {
                draw_tick_label(frame, value, cx + Y_LABEL_OFFSET.0, y_pos + Y_LABEL_OFFSET.1);
            }
        }
    }
}

fn draw_tick_label<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    value: i32,
    x: i32,
    y: i32,
) {
    let label = Line::from_fmt(format_args!("{}", value));
    draw_string(frame, label.as_str(), x, y, true);
}

/// One sample per column; steep segments are joined by filling the previous column.
fn draw_curve<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    view: &Viewport,
    function: &PlotFunction,
) {
    let mut last_row: Option<i32> = None;

    for px in 0..view.width() {
        let y_val = function.evaluate(view.pixel_to_math_x(px));
        if !y_val.is_finite() {
            continue;
        }

        let y_pos = view.math_y_to_pixel(y_val);
        if !view.contains_row(y_pos) {
            continue;
        }

        set_pixel(frame, px, y_pos, true);
        if let Some(previous) = last_row {
            if (y_pos - previous).abs() > 1 {
                draw_vline(frame, px - 1, previous, y_pos, true);
            }
        }
        last_row = Some(y_pos);
    }
}

#[cfg(test)]
mod tests {
    use ssd1306::FrameBuffer128x64;

    use super::*;

    fn curve_only(function: PlotFunction, zoom: f32) -> FrameBuffer128x64 {
        let mut frame = FrameBuffer128x64::new();
        let view = Viewport::new(128, 64, zoom, 0.0);
        draw_curve(&mut frame, &view, &function);
        frame
    }

    #[test]
    fn unit_slope_line_passes_through_origin() {
        let frame = curve_only(PlotFunction::Affine { a: 1.0, b: 0.0 }, 1.0);

        for px in 0..128i32 {
            let expected = 32 - ((px - 64) as f32 * 0.5) as i32;
            if !(0..64).contains(&expected) {
                continue;
            }
            assert_eq!(frame.pixel(px as usize, expected as usize), Some(true), "px={px}");
        }
        assert_eq!(frame.pixel(64, 32), Some(true));
    }

    #[test]
    fn steep_segments_are_filled_at_the_previous_column() {
        let frame = curve_only(PlotFunction::Affine { a: 10.0, b: 0.0 }, 1.0);

        // x = 0 at px 64 sits on row 32; px 65 maps to row 27.
        assert_eq!(frame.pixel(65, 27), Some(true));
        for row in 27..=32 {
            assert_eq!(frame.pixel(64, row), Some(true));
        }
        assert_eq!(frame.pixel(65, 30), Some(false));
    }

    #[test]
    fn flat_curve_off_screen_draws_nothing() {
        let frame = curve_only(PlotFunction::Affine { a: 0.0, b: 500.0 }, 1.0);
        assert_eq!(frame.count_on(), 0);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let frame = curve_only(
            PlotFunction::Quadratic {
                a: f32::MAX,
                b: f32::MAX,
                c: 0.0,
            },
            1.0,
        );
        assert!(frame.count_on() <= 1);
    }

    #[test]
    fn off_scale_samples_are_clipped() {
        let mut frame = FrameBuffer128x64::new();
        draw_plot(
            &mut frame,
            &PlotFunction::Affine { a: -1.0e12, b: 0.0 },
            1.0,
            0.0,
        );
        assert_eq!(frame.pixel(64, 32), Some(true));

        let steep = curve_only(PlotFunction::Affine { a: 1.0e12, b: 0.0 }, 1.0);
        assert!(steep.count_on() <= 1);
    }

    #[test]
    fn axes_and_ticks_are_drawn() {
        let mut frame = FrameBuffer128x64::new();
        draw_plot(&mut frame, &PlotFunction::Affine { a: 0.0, b: 0.0 }, 1.0, 0.0);

        assert_eq!(frame.pixel(64, 0), Some(true));
        assert_eq!(frame.pixel(64, 63), Some(true));
        assert_eq!(frame.pixel(0, 32), Some(true));

        // x tick at value 20 lands on column 84.
        assert_eq!(frame.pixel(84, 30), Some(true));
        assert_eq!(frame.pixel(84, 34), Some(true));

        // y tick at value 20 lands on row 22.
        assert_eq!(frame.pixel(62, 22), Some(true));
        assert_eq!(frame.pixel(66, 22), Some(true));
    }

    #[test]
    fn zoom_label_sits_in_the_bottom_left_corner() {
        let mut frame = FrameBuffer128x64::new();
        draw_plot(&mut frame, &PlotFunction::Affine { a: 0.0, b: 0.0 }, 10.0, 0.0);

        let mut ink = 0;
        for y in 55..63 {
            for x in 0..40 {
                if frame.pixel(x, y) == Some(true) {
                    ink += 1;
                }
            }
        }
        assert!(ink > 0);
    }

    #[test]
    fn pan_shifts_the_ticks() {
        let mut frame = FrameBuffer128x64::new();
        let view = Viewport::new(128, 64, 1.0, 5.0);
        draw_ticks(&mut frame, &view);

        // Value 5 now sits on the y axis column, value 15 ten pixels right.
        assert_eq!(frame.pixel(64, 30), Some(true));
        assert_eq!(frame.pixel(74, 30), Some(true));
        assert_eq!(frame.pixel(77, 30), Some(false));
    }
}
