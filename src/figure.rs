//! Figure model: named traces plus shared layout.
//!
//! A [`Figure`] is created empty, populated with [`Trace`]s, given a layout
//! and optionally a [`Theme`], then handed to a renderer. Figures are never
//! persisted.

use trueno::Vector;

use crate::theme::{MarkerSymbol, Theme};

/// Default figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 900;
/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// How a scatter trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterMode {
    /// Connected line only.
    Lines,
    /// Markers only.
    Markers,
    /// Connected line with a marker at each point.
    LinesAndMarkers,
}

impl ScatterMode {
    /// Whether the mode draws a connecting line.
    #[must_use]
    pub const fn has_lines(self) -> bool {
        matches!(self, Self::Lines | Self::LinesAndMarkers)
    }

    /// Whether the mode draws markers.
    #[must_use]
    pub const fn has_markers(self) -> bool {
        matches!(self, Self::Markers | Self::LinesAndMarkers)
    }
}

/// Trace geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// Points and/or lines.
    Scatter(ScatterMode),
    /// Vertical bars from zero.
    Bar,
}

/// One renderable series within a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Legend name.
    pub name: String,
    /// X values.
    pub x: Vec<f32>,
    /// Y values.
    pub y: Vec<f32>,
    /// Geometry.
    pub kind: TraceKind,
    /// Marker symbol override; `None` takes the theme's cycle.
    pub marker_symbol: Option<MarkerSymbol>,
    /// Per-point marker diameters in pixels; `None` takes the theme's size.
    pub marker_sizes: Option<Vec<f32>>,
}

impl Trace {
    /// Create a trace over `y`, with x set to the sample indices.
    #[must_use]
    pub fn new(name: impl Into<String>, y: &[f32], kind: TraceKind) -> Self {
        Self {
            name: name.into(),
            x: (0..y.len()).map(|i| i as f32).collect(),
            y: y.to_vec(),
            kind,
            marker_symbol: None,
            marker_sizes: None,
        }
    }

    /// Force a marker symbol.
    #[must_use]
    pub fn marker_symbol(mut self, symbol: MarkerSymbol) -> Self {
        self.marker_symbol = Some(symbol);
        self
    }

    /// Set per-point marker sizes.
    #[must_use]
    pub fn marker_sizes(mut self, sizes: &[f32]) -> Self {
        self.marker_sizes = Some(sizes.to_vec());
        self
    }
}

/// Data extent across all traces, after padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// (min, max) on the x axis.
    pub x: (f32, f32),
    /// (min, max) on the y axis.
    pub y: (f32, f32),
}

/// A collection of traces with a title and axis titles.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    traces: Vec<Trace>,
    title: String,
    x_label: String,
    y_label: String,
    theme: Option<Theme>,
    width: u32,
    height: u32,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create an empty figure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            traces: Vec::new(),
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            theme: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Append a trace.
    pub fn add_trace(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    /// Set the title and axis titles.
    pub fn update_layout(
        &mut self,
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) {
        self.title = title.into();
        self.x_label = x_label.into();
        self.y_label = y_label.into();
    }

    /// Apply a theme, replacing any previous one.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    /// Builder form of [`Figure::apply_theme`].
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.apply_theme(theme);
        self
    }

    /// All traces in insertion order.
    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Trace names in insertion order.
    #[must_use]
    pub fn trace_names(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.name.as_str()).collect()
    }

    /// Figure title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// X-axis title.
    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Y-axis title.
    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// The applied theme, if any.
    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// The applied theme or [`Theme::plain`].
    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        self.theme.clone().unwrap_or_else(Theme::plain)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of bar traces (bars are grouped side by side).
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.traces
            .iter()
            .filter(|t| t.kind == TraceKind::Bar)
            .count()
    }

    /// Data extent across all traces.
    ///
    /// Bar figures always include zero on the y axis. Degenerate ranges (a
    /// single point, a flat signal, no data) are padded so that a linear
    /// scale can always be built.
    #[must_use]
    pub fn data_extent(&self) -> Extent {
        let xs: Vec<f32> = self.traces.iter().flat_map(|t| t.x.iter().copied()).collect();
        let ys: Vec<f32> = self.traces.iter().flat_map(|t| t.y.iter().copied()).collect();

        let mut x = reduce_extent(xs);
        let mut y = reduce_extent(ys);

        if self.bar_count() > 0 {
            // Bars are centred on integer positions.
            x = (x.0 - 0.5, x.1 + 0.5);
            y = (y.0.min(0.0), y.1.max(0.0));
        }

        Extent {
            x: pad_degenerate(x),
            y: pad_degenerate(y),
        }
    }
}

impl batuta_common::display::WithDimensions for Figure {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

/// SIMD min/max over finite values; `(0, 1)` when there are none.
fn reduce_extent(mut values: Vec<f32>) -> (f32, f32) {
    values.retain(|v| v.is_finite());
    if values.is_empty() {
        return (0.0, 1.0);
    }

    let vec = Vector::from_vec(values);
    let min = vec.min().unwrap_or(0.0);
    let max = vec.max().unwrap_or(1.0);
    (min, max)
}

fn pad_degenerate((min, max): (f32, f32)) -> (f32, f32) {
    if (max - min).abs() < f32::EPSILON * min.abs().max(1.0) {
        let pad = (min.abs() * 0.1).max(0.5);
        (min - pad, max + pad)
    } else {
        (min, max)
    }
}
