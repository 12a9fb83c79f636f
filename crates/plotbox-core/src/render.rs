//! App-level view models consumed by the board renderer.

use crate::plot::{FunctionKind, PlotFunction, QuadraticSummary};

/// Menu title drawn above the function list.
pub const MENU_TITLE: &str = "SELECT:";

/// Menu entries, one per function family.
pub const MENU_ITEMS: [&str; FunctionKind::COUNT] = [
    FunctionKind::Affine.menu_label(),
    FunctionKind::Quadratic.menu_label(),
    FunctionKind::Sinusoidal.menu_label(),
    FunctionKind::Cosinusoidal.menu_label(),
];

/// What the display should show for the current interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Menu {
        title: &'a str,
        items: &'a [&'a str],
        cursor: usize,
    },
    ParameterEntry {
        kind: FunctionKind,
        active_index: usize,
        /// One entry per coefficient of `kind`.
        coefficients: &'a [f32],
    },
    Plot {
        function: PlotFunction,
        zoom: f32,
        pan_x: f32,
    },
    QuadraticSummary {
        summary: QuadraticSummary,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScreenKind {
    Menu,
    ParameterEntry,
    Plot,
    QuadraticSummary,
}

impl ScreenKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::ParameterEntry => "parameter-entry",
            Self::Plot => "plot",
            Self::QuadraticSummary => "quadratic-summary",
        }
    }
}
