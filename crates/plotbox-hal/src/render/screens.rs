use core::fmt::Write;

use plotbox_core::{
    plot::{COEFFICIENT_NAMES, FunctionKind, QuadraticSummary, normalize_zero},
    render::Screen,
    text::Line,
};
use ssd1306::FrameBuffer;

use super::{
    FrameRenderer,
    plot::draw_plot,
    primitives::draw_string,
};

const MENU_TITLE_Y: i32 = 0;
const MENU_LIST_TOP: i32 = 16;
const MENU_ROW_HEIGHT: i32 = 12;
const MENU_MARKER_X: i32 = 4;
const MENU_SELECTED_X: i32 = 16;
const MENU_TEXT_X: i32 = 12;

const ENTRY_TITLE_Y: i32 = 0;
const ENTRY_VALUE_Y: i32 = 20;
const ENTRY_FIRST_PAIR_Y: i32 = 30;
const ENTRY_SECOND_PAIR_Y: i32 = 40;
const HINT_Y: i32 = 50;

const SUMMARY_VERTEX_X_Y: i32 = 0;
const SUMMARY_VERTEX_Y_Y: i32 = 10;
const SUMMARY_DELTA_Y: i32 = 20;

/// Draws every app screen into the panel framebuffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlotterRenderer;

impl PlotterRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl<const W: usize, const P: usize> FrameRenderer<W, P> for PlotterRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer<W, P>) {
        match screen {
            Screen::Menu {
                title,
                items,
                cursor,
            } => draw_menu(frame, title, items, cursor),
            Screen::ParameterEntry {
                kind,
                active_index,
                coefficients,
            } => draw_parameter_entry(frame, kind, active_index, coefficients),
            Screen::Plot {
                function,
                zoom,
                pan_x,
            } => draw_plot(frame, &function, zoom, pan_x),
            Screen::QuadraticSummary { summary } => draw_quadratic_summary(frame, &summary),
        }
    }
}

fn draw_menu<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    title: &str,
    items: &[&str],
    cursor: usize,
) {
    frame.fill(false);
    draw_string(frame, title, 0, MENU_TITLE_Y, false);

    for (index, item) in items.iter().enumerate() {
        let y = MENU_LIST_TOP + index as i32 * MENU_ROW_HEIGHT;
        if index == cursor {
            draw_string(frame, ">", MENU_MARKER_X, y, false);
            draw_string(frame, item, MENU_SELECTED_X, y, false);
        } else {
            draw_string(frame, item, MENU_TEXT_X, y, false);
        }
    }
}

fn draw_parameter_entry<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    kind: FunctionKind,
    active_index: usize,
    coefficients: &[f32],
) {
    frame.fill(false);

    let name = COEFFICIENT_NAMES.get(active_index).copied().unwrap_or("?");
    let title = Line::from_fmt(format_args!("SET {}:", name));
    draw_string(frame, title.as_str(), 0, ENTRY_TITLE_Y, false);

    let value = coefficients.get(active_index).copied().unwrap_or_default();
    let value_line = Line::from_fmt(format_args!("Value: {:.2}", normalize_zero(value)));
    draw_string(frame, value_line.as_str(), 0, ENTRY_VALUE_Y, false);

    let shown = coefficients.len().min(kind.arity());
    let pairs = [(0usize, ENTRY_FIRST_PAIR_Y), (2usize, ENTRY_SECOND_PAIR_Y)];
    for (start, y) in pairs {
        if start >= shown {
            break;
        }

        let line = coefficient_pair(coefficients, start, shown);
        draw_string(frame, line.as_str(), 0, y, false);
    }

    draw_string(frame, "BTN: Confirm", 0, HINT_Y, false);
}

/// `A:1.00 B:2.00`, leaving out slots past `shown`.
fn coefficient_pair(coefficients: &[f32], start: usize, shown: usize) -> Line {
    let mut line = Line::new();
    for index in start..(start + 2).min(shown) {
        if index > start {
            let _ = line.write_str(" ");
        }
        let _ = write!(
            line,
            "{}:{:.2}",
            COEFFICIENT_NAMES[index],
            normalize_zero(coefficients[index])
        );
    }
    line
}

fn draw_quadratic_summary<const W: usize, const P: usize>(
    frame: &mut FrameBuffer<W, P>,
    summary: &QuadraticSummary,
) {
    frame.fill(false);

    let (x_line, y_line) = match summary.vertex {
        Some((x_v, y_v)) => (
            Line::from_fmt(format_args!("Xv: {:.2}", normalize_zero(x_v))),
            Line::from_fmt(format_args!("Yv: {:.2}", normalize_zero(y_v))),
        ),
        None => (
            Line::from_fmt(format_args!("Xv: undef")),
            Line::from_fmt(format_args!("Yv: undef")),
        ),
    };
    let delta = Line::from_fmt(format_args!(
        "Delta: {:.2}",
        normalize_zero(summary.discriminant)
    ));

    draw_string(frame, x_line.as_str(), 0, SUMMARY_VERTEX_X_Y, false);
    draw_string(frame, y_line.as_str(), 0, SUMMARY_VERTEX_Y_Y, false);
    draw_string(frame, delta.as_str(), 0, SUMMARY_DELTA_Y, false);
    draw_string(frame, "BTN: Back", 0, HINT_Y, false);
}

#[cfg(test)]
mod tests {
    use plotbox_core::{
        plot::PlotFunction,
        render::{MENU_ITEMS, MENU_TITLE},
    };
    use ssd1306::FrameBuffer128x64;

    use super::*;

    fn render(screen: Screen<'_>) -> FrameBuffer128x64 {
        let mut frame = FrameBuffer128x64::new();
        frame.fill(true);
        PlotterRenderer::new().render(screen, &mut frame);
        frame
    }

    fn text_at(lines: &[(&str, i32, i32)]) -> FrameBuffer128x64 {
        let mut frame = FrameBuffer128x64::new();
        for (text, x, y) in lines {
            draw_string(&mut frame, text, *x, *y, false);
        }
        frame
    }

    fn rows_blank(frame: &FrameBuffer128x64, rows: core::ops::Range<usize>) -> bool {
        rows.into_iter()
            .all(|y| (0..128).all(|x| frame.pixel(x, y) == Some(false)))
    }

    #[test]
    fn menu_marks_the_selected_entry() {
        let frame = render(Screen::Menu {
            title: MENU_TITLE,
            items: &MENU_ITEMS,
            cursor: 1,
        });

        let expected = text_at(&[
            ("SELECT:", 0, 0),
            ("1. AFFINE", 12, 16),
            (">", 4, 28),
            ("2. QUADRATIC", 16, 28),
            ("3. SINE", 12, 40),
            ("4. COSINE", 12, 52),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
    }

    #[test]
    fn affine_entry_hides_the_second_pair() {
        let frame = render(Screen::ParameterEntry {
            kind: FunctionKind::Affine,
            active_index: 1,
            coefficients: &[1.5, -0.5],
        });

        let expected = text_at(&[
            ("SET B:", 0, 0),
            ("Value: -0.50", 0, 20),
            ("A:1.50 B:-0.50", 0, 30),
            ("BTN: Confirm", 0, 50),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
        assert!(rows_blank(&frame, 40..48));
    }

    #[test]
    fn quadratic_entry_shows_only_c_on_the_second_line() {
        let frame = render(Screen::ParameterEntry {
            kind: FunctionKind::Quadratic,
            active_index: 2,
            coefficients: &[1.0, 0.0, -4.0],
        });

        let expected = text_at(&[
            ("SET C:", 0, 0),
            ("Value: -4.00", 0, 20),
            ("A:1.00 B:0.00", 0, 30),
            ("C:-4.00", 0, 40),
            ("BTN: Confirm", 0, 50),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
    }

    #[test]
    fn negative_zero_is_shown_as_zero() {
        let frame = render(Screen::ParameterEntry {
            kind: FunctionKind::Affine,
            active_index: 0,
            coefficients: &[-0.0, 0.0],
        });

        let expected = text_at(&[
            ("SET A:", 0, 0),
            ("Value: 0.00", 0, 20),
            ("A:0.00 B:0.00", 0, 30),
            ("BTN: Confirm", 0, 50),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
    }

    #[test]
    fn summary_lists_vertex_and_discriminant() {
        let summary = PlotFunction::Quadratic {
            a: 1.0,
            b: 0.0,
            c: -4.0,
        }
        .quadratic_summary()
        .unwrap();
        let frame = render(Screen::QuadraticSummary { summary });

        let expected = text_at(&[
            ("Xv: 0.00", 0, 0),
            ("Yv: -4.00", 0, 10),
            ("Delta: 16.00", 0, 20),
            ("BTN: Back", 0, 50),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
    }

    #[test]
    fn degenerate_summary_reports_undefined_vertex() {
        let summary = QuadraticSummary::new(0.0, 2.0, 1.0);
        let frame = render(Screen::QuadraticSummary { summary });

        let expected = text_at(&[
            ("Xv: undef", 0, 0),
            ("Yv: undef", 0, 10),
            ("Delta: 4.00", 0, 20),
            ("BTN: Back", 0, 50),
        ]);
        assert_eq!(frame.bytes(), expected.bytes());
    }

    #[test]
    fn plot_screen_clears_previous_content() {
        let frame = render(Screen::Plot {
            function: PlotFunction::Affine { a: 0.0, b: 100.0 },
            zoom: 1.0,
            pan_x: 0.0,
        });
        assert_eq!(frame.pixel(0, 0), Some(false));
        assert_eq!(frame.pixel(64, 0), Some(true));
    }
}
