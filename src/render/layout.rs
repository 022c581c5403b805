//! Figure layout shared by the vector and raster backends.
//!
//! Computes the plot area, data-to-pixel scales, axis ticks, legend position
//! and per-trace styling, so both backends draw identical geometry.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::figure::{Figure, Trace, TraceKind};
use crate::geometry::{Point, Rect};
use crate::scale::{nice_ticks, LinearScale, Scale};
use crate::theme::{MarkerSymbol, Theme};

/// Width of a bar group in x units.
const BAR_GROUP_WIDTH: f32 = 0.8;
/// Approximate glyph advance as a fraction of the font size.
const GLYPH_ASPECT: f32 = 0.6;
/// Stroke width of series lines, in pixels.
pub const LINE_WIDTH: f32 = 2.0;
/// Opacity applied to size-mapped markers.
pub const BUBBLE_ALPHA: u8 = 178;

/// Resolved geometry of a figure.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Canvas size in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Region holding the data.
    pub plot_area: Rect,
    /// Data x to pixel x.
    pub x_scale: LinearScale,
    /// Data y to pixel y (inverted).
    pub y_scale: LinearScale,
    /// X tick values.
    pub x_ticks: Vec<f32>,
    /// Y tick values.
    pub y_ticks: Vec<f32>,
    /// Top-left corner of the legend.
    pub legend_origin: Point,
    /// Vertical distance between legend entries.
    pub legend_row_height: f32,
    /// Theme in effect.
    pub theme: Theme,
    bar_total: usize,
}

/// Resolved drawing style of one trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    /// Series color.
    pub color: Rgba,
    /// Marker shape.
    pub symbol: MarkerSymbol,
    /// Default marker diameter.
    pub marker_size: f32,
}

impl Layout {
    /// Compute the layout of a figure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the canvas is too small to
    /// hold the margins.
    pub fn compute(fig: &Figure) -> Result<Self> {
        let theme = fig.effective_theme();
        let width = fig.width() as f32;
        let height = fig.height() as f32;

        let body = theme.font.size;
        let top = if fig.title().is_empty() {
            body
        } else {
            theme.title_font.size * 2.2
        };
        let bottom = body * 3.2;
        let left = body * 5.0;
        let right = if fig.traces().is_empty() {
            body
        } else {
            let longest = fig
                .traces()
                .iter()
                .map(|t| t.name.chars().count())
                .max()
                .unwrap_or(0) as f32;
            longest * body * GLYPH_ASPECT + body * 3.5
        };

        let plot_area = Rect::new(left, top, width - left - right, height - top - bottom);
        if plot_area.width < 1.0 || plot_area.height < 1.0 {
            return Err(Error::InvalidDimensions {
                width: fig.width(),
                height: fig.height(),
            });
        }

        let extent = fig.data_extent();
        let x_scale = LinearScale::new(extent.x, (plot_area.x, plot_area.right()))?;
        let y_scale = LinearScale::new(extent.y, (plot_area.bottom(), plot_area.y))?;

        let x_target = ((plot_area.width / (body * 6.0)) as usize).clamp(2, 10);
        let y_target = ((plot_area.height / (body * 3.0)) as usize).clamp(2, 10);

        Ok(Self {
            width,
            height,
            plot_area,
            x_scale,
            y_scale,
            x_ticks: nice_ticks(extent.x.0, extent.x.1, x_target),
            y_ticks: nice_ticks(extent.y.0, extent.y.1, y_target),
            legend_origin: Point::new(plot_area.right() + body, plot_area.y),
            legend_row_height: body * 1.5,
            bar_total: fig.bar_count(),
            theme,
        })
    }

    /// Style of the `index`-th trace.
    #[must_use]
    pub fn style(&self, index: usize, trace: &Trace) -> TraceStyle {
        TraceStyle {
            color: self.theme.color_for(index),
            symbol: trace
                .marker_symbol
                .unwrap_or_else(|| self.theme.marker_for(index)),
            marker_size: self.theme.marker_size,
        }
    }

    /// Pixel positions of a trace's points.
    #[must_use]
    pub fn points(&self, trace: &Trace) -> Vec<Point> {
        trace
            .x
            .iter()
            .zip(&trace.y)
            .map(|(&x, &y)| Point::new(self.x_scale.scale(x), self.y_scale.scale(y)))
            .collect()
    }

    /// Marker diameter of point `j`: the per-point size when present,
    /// clamped to `[0, 2 * canvas diagonal]`.
    #[must_use]
    pub fn marker_size(&self, trace: &Trace, j: usize) -> f32 {
        let limit = 2.0 * self.width.hypot(self.height);
        trace
            .marker_sizes
            .as_ref()
            .and_then(|sizes| sizes.get(j).copied())
            .unwrap_or(self.theme.marker_size)
            .max(0.0)
            .min(limit)
    }

    /// Bar rectangles of a bar trace; `slot` is the trace's position among
    /// the figure's bar traces.
    #[must_use]
    pub fn bars(&self, trace: &Trace, slot: usize) -> Vec<Rect> {
        if trace.kind != TraceKind::Bar || self.bar_total == 0 {
            return Vec::new();
        }

        let unit = self.x_scale.unit_length();
        let bar_width = BAR_GROUP_WIDTH / self.bar_total as f32;
        let offset = -BAR_GROUP_WIDTH / 2.0 + bar_width * slot as f32;
        let baseline = self.y_scale.scale(0.0);

        trace
            .x
            .iter()
            .zip(&trace.y)
            .map(|(&x, &y)| {
                let left = self.x_scale.scale(x + offset);
                let top = self.y_scale.scale(y);
                Rect::new(
                    left,
                    top.min(baseline),
                    bar_width * unit,
                    (top - baseline).abs(),
                )
            })
            .collect()
    }

    /// Pixel x of a tick value.
    #[must_use]
    pub fn tick_x(&self, value: f32) -> f32 {
        self.x_scale.scale(value)
    }

    /// Pixel y of a tick value.
    #[must_use]
    pub fn tick_y(&self, value: f32) -> f32 {
        self.y_scale.scale(value)
    }

    /// Centre of the legend swatch for entry `index`.
    #[must_use]
    pub fn legend_swatch(&self, index: usize) -> Point {
        let body = self.theme.font.size;
        Point::new(
            self.legend_origin.x + body * 0.75,
            self.legend_origin.y + self.legend_row_height * (index as f32 + 0.5),
        )
    }
}

/// Marker outline translated to `center`; empty for circles.
#[must_use]
pub fn marker_polygon(symbol: MarkerSymbol, center: Point, size: f32) -> Vec<Point> {
    symbol
        .outline(size)
        .into_iter()
        .map(|(dx, dy)| center.offset(dx, dy))
        .collect()
}
