//! Function families, plot state and the mapping between math and pixel coordinates.

use libm::{cosf, sinf};

pub const MAX_COEFFICIENTS: usize = 4;
pub const COEFFICIENT_NAMES: [&str; MAX_COEFFICIENTS] = ["A", "B", "C", "D"];

/// Axis ticks are laid out every `TICK_STEP` units over `-TICK_SPAN..=TICK_SPAN`.
pub const TICK_SPAN: i32 = 30;
pub const TICK_STEP: i32 = 5;

/// Vertical scale is always half the horizontal one.
pub const VERTICAL_SCALE_RATIO: f32 = 0.5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FunctionKind {
    Affine,
    Quadratic,
    Sinusoidal,
    Cosinusoidal,
}

impl FunctionKind {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Affine,
        Self::Quadratic,
        Self::Sinusoidal,
        Self::Cosinusoidal,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::Affine => 0,
            Self::Quadratic => 1,
            Self::Sinusoidal => 2,
            Self::Cosinusoidal => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Entry one row up in the menu, `None` at the top.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Entry one row down in the menu, `None` at the bottom.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Number of coefficients the family is parameterised by.
    pub const fn arity(self) -> usize {
        match self {
            Self::Affine => 2,
            Self::Quadratic => 3,
            Self::Sinusoidal | Self::Cosinusoidal => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Affine => "Affine",
            Self::Quadratic => "Quadratic",
            Self::Sinusoidal => "Sinusoidal",
            Self::Cosinusoidal => "Cosinusoidal",
        }
    }

    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Affine => "1. AFFINE",
            Self::Quadratic => "2. QUADRATIC",
            Self::Sinusoidal => "3. SINE",
            Self::Cosinusoidal => "4. COSINE",
        }
    }

    /// RGB channels lit while this family is selected.
    pub const fn indicator_channels(self) -> [bool; 3] {
        match self {
            Self::Affine => [true, false, false],
            Self::Quadratic => [false, true, false],
            Self::Sinusoidal => [false, false, true],
            Self::Cosinusoidal => [true, true, true],
        }
    }
}

/// A function family together with its own coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlotFunction {
    /// `y = a*x + b`
    Affine { a: f32, b: f32 },
    /// `y = a*x^2 + b*x + c`
    Quadratic { a: f32, b: f32, c: f32 },
    /// `y = a + b*sin(c*x + d)`
    Sinusoidal { a: f32, b: f32, c: f32, d: f32 },
    /// `y = a + b*cos(c*x + d)`
    Cosinusoidal { a: f32, b: f32, c: f32, d: f32 },
}

impl PlotFunction {
    pub fn from_coefficients(kind: FunctionKind, coefficients: &[f32; MAX_COEFFICIENTS]) -> Self {
        let [a, b, c, d] = *coefficients;
        match kind {
            FunctionKind::Affine => Self::Affine { a, b },
            FunctionKind::Quadratic => Self::Quadratic { a, b, c },
            FunctionKind::Sinusoidal => Self::Sinusoidal { a, b, c, d },
            FunctionKind::Cosinusoidal => Self::Cosinusoidal { a, b, c, d },
        }
    }

    pub fn kind(&self) -> FunctionKind {
        match self {
            Self::Affine { .. } => FunctionKind::Affine,
            Self::Quadratic { .. } => FunctionKind::Quadratic,
            Self::Sinusoidal { .. } => FunctionKind::Sinusoidal,
            Self::Cosinusoidal { .. } => FunctionKind::Cosinusoidal,
        }
    }

    pub fn evaluate(&self, x: f32) -> f32 {
        match *self {
            Self::Affine { a, b } => a * x + b,
            Self::Quadratic { a, b, c } => a * x * x + b * x + c,
            Self::Sinusoidal { a, b, c, d } => a + b * sinf(c * x + d),
            Self::Cosinusoidal { a, b, c, d } => a + b * cosf(c * x + d),
        }
    }

    /// Vertex and discriminant, only meaningful for quadratics.
    pub fn quadratic_summary(&self) -> Option<QuadraticSummary> {
        match *self {
            Self::Quadratic { a, b, c } => Some(QuadraticSummary::new(a, b, c)),
            _ => None,
        }
    }
}

/// Discriminant and vertex of `a*x^2 + b*x + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticSummary {
    pub discriminant: f32,
    /// `None` when `a == 0` (the curve is a line and has no vertex).
    pub vertex: Option<(f32, f32)>,
}

impl QuadraticSummary {
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        let discriminant = b * b - 4.0 * a * c;
        let vertex = if a == 0.0 {
            None
        } else {
            Some((
                normalize_zero(-b / (2.0 * a)),
                normalize_zero(-discriminant / (4.0 * a)),
            ))
        };

        Self {
            discriminant: normalize_zero(discriminant),
            vertex,
        }
    }
}

/// Function selection, coefficients and view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotState {
    kind: FunctionKind,
    coefficients: [f32; MAX_COEFFICIENTS],
    zoom: f32,
    pan_x: f32,
}

impl PlotState {
    pub const fn new(kind: FunctionKind, zoom: f32) -> Self {
        Self {
            kind,
            coefficients: [0.0; MAX_COEFFICIENTS],
            zoom,
            pan_x: 0.0,
        }
    }

    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FunctionKind) {
        self.kind = kind;
    }

    /// Coefficients in use by the current family.
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients[..self.kind.arity()]
    }

    pub fn coefficient(&self, index: usize) -> Option<f32> {
        self.coefficients().get(index).copied()
    }

    /// Adds `delta` to coefficient `index`.
    ///
    /// Returns `false` when `index` is not used by the current family.
    pub fn adjust_coefficient(&mut self, index: usize, delta: f32) -> bool {
        if index >= self.kind.arity() {
            return false;
        }

        self.coefficients[index] = normalize_zero(self.coefficients[index] + delta);
        true
    }

    /// Zeroes every slot, used or not.
    pub fn reset_coefficients(&mut self) {
        self.coefficients = [0.0; MAX_COEFFICIENTS];
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    pub const fn pan_x(&self) -> f32 {
        self.pan_x
    }

    /// Multiplies the zoom by `factor`, clamped to `[min, max]`.
    ///
    /// Returns `true` when the zoom actually changed.
    pub fn scale_zoom(&mut self, factor: f32, min: f32, max: f32) -> bool {
        let next = (self.zoom * factor).clamp(min, max);
        if next != self.zoom {
            self.zoom = next;
            true
        } else {
            false
        }
    }

    pub fn function(&self) -> PlotFunction {
        PlotFunction::from_coefficients(self.kind, &self.coefficients)
    }
}

/// Pixel canvas centred on the math origin shifted by `pan_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: i32,
    height: i32,
    center_x: i32,
    center_y: i32,
    zoom: f32,
    pan_x: f32,
}

impl Viewport {
    pub fn new(width: usize, height: usize, zoom: f32, pan_x: f32) -> Self {
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            center_x: width / 2,
            center_y: height / 2,
            zoom,
            pan_x,
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    pub const fn scale_x(&self) -> f32 {
        self.zoom
    }

    pub fn scale_y(&self) -> f32 {
        VERTICAL_SCALE_RATIO * self.zoom
    }

    /// Math abscissa sampled by pixel column `px`.
    pub fn pixel_to_math_x(&self, px: i32) -> f32 {
        (px - self.center_x) as f32 / self.scale_x() + self.pan_x
    }

    /// Pixel column of math abscissa `x`, truncated toward zero.
    pub fn math_x_to_pixel(&self, x: f32) -> i32 {
        self.center_x
            .saturating_add(((x - self.pan_x) * self.scale_x()) as i32)
    }

    /// Pixel row of math ordinate `y`, truncated toward zero.
    pub fn math_y_to_pixel(&self, y: f32) -> i32 {
        self.center_y.saturating_sub((y * self.scale_y()) as i32)
    }

    pub const fn contains_column(&self, px: i32) -> bool {
        px >= 0 && px < self.width
    }

    pub const fn contains_row(&self, py: i32) -> bool {
        py >= 0 && py < self.height
    }
}

/// Tick positions along both axes, in math units.
pub fn tick_values() -> impl Iterator<Item = i32> {
    (-TICK_SPAN..=TICK_SPAN).step_by(TICK_STEP as usize)
}

/// Whether tick `value` carries a numeric label.
///
/// Every tick up to 10 except the origin, then every 10 units, so labels never collide.
pub const fn tick_has_label(value: i32) -> bool {
    (value % TICK_STEP == 0 && value <= 10 && value != 0) || (value % 10 == 0 && value > 10)
}

/// Maps `-0.0` to `0.0` so it never shows up as `-0.00` on screen.
pub fn normalize_zero(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value }
}
