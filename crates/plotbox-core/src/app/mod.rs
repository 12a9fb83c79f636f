//! Interaction state machine: function menu, coefficient entry, plot and summary.

use log::{debug, info, trace, warn};

use crate::{
    indicator::{
        ARROW_COLOR, Arrow, LedMatrix, RgbIndicator, arrow_cells, selection_levels, zoom_levels,
    },
    input::{AXIS_CENTER, AxisIntent, InputEvent, InputProvider, axis_intent},
    plot::{COEFFICIENT_NAMES, FunctionKind, PlotState},
    render::{MENU_ITEMS, MENU_TITLE, Screen, ScreenKind},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotterConfig {
    /// Raw axis reading with the stick at rest.
    pub axis_center: u16,
    /// Deviation from `axis_center` ignored as noise.
    pub dead_zone: u16,
    /// Minimum spacing between two accepted button presses, any button.
    pub debounce_ms: u16,
    /// Axis is ignored for this long after an accepted deflection.
    pub axis_cooldown_ms: u16,
    pub zoom_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub initial_zoom: f32,
    pub coefficient_step: f32,
    pub axis_inverted: bool,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            axis_center: AXIS_CENTER,
            dead_zone: 300,
            debounce_ms: 300,
            axis_cooldown_ms: 200,
            zoom_factor: 1.1,
            min_zoom: 0.1,
            max_zoom: 10.0,
            initial_zoom: 1.0,
            coefficient_step: 0.5,
            axis_inverted: false,
        }
    }
}

impl PlotterConfig {
    pub const fn with_dead_zone(mut self, dead_zone: u16) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u16) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_axis_cooldown_ms(mut self, axis_cooldown_ms: u16) -> Self {
        self.axis_cooldown_ms = axis_cooldown_ms;
        self
    }

    pub const fn with_zoom_limits(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub const fn with_initial_zoom(mut self, initial_zoom: f32) -> Self {
        self.initial_zoom = initial_zoom;
        self
    }

    pub const fn with_axis_inverted(mut self, axis_inverted: bool) -> Self {
        self.axis_inverted = axis_inverted;
        self
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            self.min_zoom = defaults.min_zoom;
        }
        if !(self.max_zoom.is_finite() && self.max_zoom > 0.0) {
            self.max_zoom = defaults.max_zoom;
        }
        if self.max_zoom < self.min_zoom {
            core::mem::swap(&mut self.max_zoom, &mut self.min_zoom);
        }
        if !self.initial_zoom.is_finite() {
            self.initial_zoom = defaults.initial_zoom;
        }
        self.initial_zoom = self.initial_zoom.clamp(self.min_zoom, self.max_zoom);

        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            self.zoom_factor = defaults.zoom_factor;
        } else if self.zoom_factor < 1.0 {
            self.zoom_factor = 1.0 / self.zoom_factor;
        }
        if !self.coefficient_step.is_finite() {
            self.coefficient_step = defaults.coefficient_step;
        }

        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Menu,
    ParameterEntry { index: u8 },
    PlotView,
    QuadraticSummary,
}

pub struct PlotterApp<IN, LM, RG>
where
    IN: InputProvider,
    LM: LedMatrix,
    RG: RgbIndicator,
{
    input: IN,
    matrix: LM,
    rgb: RG,
    config: PlotterConfig,
    plot: PlotState,
    ui: UiState,
    pending_redraw: bool,
    last_press_ms: Option<u64>,
    axis_ready_at_ms: u64,
    matrix_lit: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
