pub mod font;
pub mod plot;
pub mod primitives;
mod screens;

pub use screens::PlotterRenderer;

use plotbox_core::render::Screen;
use ssd1306::FrameBuffer;

pub trait FrameRenderer<const W: usize, const P: usize> {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer<W, P>);
}
