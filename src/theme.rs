//! Visual themes for figures.
//!
//! A [`Theme`] carries only presentation parameters (fonts, marker symbols,
//! colorway). It never depends on the data and can be applied to any figure.

use std::fmt;

use crate::color::Rgba;

/// Marker size used by the TMx light theme, in pixels.
pub const TMX_MARKER_SIZE: f32 = 8.0;

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// CSS/SVG keyword for this weight.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font description used for titles and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Font size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Rgba,
    /// Font weight.
    pub weight: FontWeight,
}

impl FontSpec {
    /// Create a font with normal weight.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32, color: Rgba) -> Self {
        Self {
            family: family.into(),
            size,
            color,
            weight: FontWeight::Normal,
        }
    }

    /// Set the font weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Marker symbol shapes, named after the plotly vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerSymbol {
    /// Filled circle.
    #[default]
    Circle,
    /// Axis-aligned square.
    Square,
    /// Square rotated 45 degrees.
    Diamond,
    /// Plus-shaped cross.
    Cross,
    /// Regular pentagon, point up.
    Pentagon,
    /// Five-pointed star.
    Star,
}

impl MarkerSymbol {
    /// All symbols, in theme cycle order.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Square,
        Self::Diamond,
        Self::Cross,
        Self::Pentagon,
        Self::Star,
    ];

    /// Symbol name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Cross => "cross",
            Self::Pentagon => "pentagon",
            Self::Star => "star",
        }
    }

    /// Outline vertices of the symbol centred on the origin, for a marker of
    /// the given size (diameter in pixels). Circles return an empty list.
    #[must_use]
    pub fn outline(self, size: f32) -> Vec<(f32, f32)> {
        let r = size / 2.0;
        match self {
            Self::Circle => Vec::new(),
            Self::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
            Self::Diamond => {
                let d = r * 1.3;
                vec![(0.0, -d), (d, 0.0), (0.0, d), (-d, 0.0)]
            }
            Self::Cross => {
                let t = r / 3.0;
                vec![
                    (-t, -r),
                    (t, -r),
                    (t, -t),
                    (r, -t),
                    (r, t),
                    (t, t),
                    (t, r),
                    (-t, r),
                    (-t, t),
                    (-r, t),
                    (-r, -t),
                    (-t, -t),
                ]
            }
            Self::Pentagon => regular_star(5, r * 1.1, r * 1.1),
            Self::Star => regular_star(5, r * 1.3, r * 0.55),
        }
    }
}

impl fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertices of a star (or regular polygon when both radii are equal), point up.
fn regular_star(points: usize, outer: f32, inner: f32) -> Vec<(f32, f32)> {
    let step = std::f32::consts::PI / points as f32;
    let uniform = (outer - inner).abs() < f32::EPSILON;
    let count = if uniform { points } else { points * 2 };

    (0..count)
        .map(|i| {
            let (radius, angle) = if uniform {
                (outer, 2.0 * step * i as f32)
            } else {
                (if i % 2 == 0 { outer } else { inner }, step * i as f32)
            };
            let angle = angle - std::f32::consts::FRAC_PI_2;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Theme specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Font for the figure title.
    pub title_font: FontSpec,
    /// Font for axis titles, tick labels, and the legend.
    pub font: FontSpec,
    /// Marker size in pixels.
    pub marker_size: f32,
    /// Marker symbol cycle (one per series).
    pub marker_symbols: Vec<MarkerSymbol>,
    /// Color cycle assigned to series in order.
    pub colorway: Vec<Rgba>,
    /// Figure background color.
    pub background: Rgba,
    /// Plot area background color.
    pub plot_background: Rgba,
    /// Grid line color.
    pub grid_color: Rgba,
    /// Axis line color.
    pub axis_color: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}

impl Theme {
    /// The TMx light theme: bold Nexa titles, six marker shapes and the
    /// four-color TMx palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            title_font: FontSpec::new("Nexa", 26.0, Rgba::rgb(0x00, 0x00, 0x00))
                .weight(FontWeight::Bold),
            font: FontSpec::new("Nexa", 18.0, Rgba::rgb(0x00, 0x00, 0x00)),
            marker_size: TMX_MARKER_SIZE,
            marker_symbols: MarkerSymbol::ALL.to_vec(),
            colorway: vec![
                Rgba::rgb(0x00, 0xBD, 0xF2),
                Rgba::rgb(0x57, 0xC1, 0xA6),
                Rgba::rgb(0x4F, 0x8D, 0x85),
                Rgba::rgb(0x32, 0x62, 0x6E),
            ],
            background: Rgba::WHITE,
            plot_background: Rgba::rgb(0xE5, 0xEC, 0xF6),
            grid_color: Rgba::WHITE,
            axis_color: Rgba::rgb(0x44, 0x44, 0x44),
        }
    }

    /// Theme used for figures that never had a theme applied.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            title_font: FontSpec::new("sans-serif", 17.0, Rgba::rgb(0x2A, 0x3F, 0x5F)),
            font: FontSpec::new("sans-serif", 12.0, Rgba::rgb(0x2A, 0x3F, 0x5F)),
            marker_size: 6.0,
            marker_symbols: vec![MarkerSymbol::Circle],
            colorway: vec![
                Rgba::rgb(0x63, 0x6E, 0xFA),
                Rgba::rgb(0xEF, 0x55, 0x3B),
                Rgba::rgb(0x00, 0xCC, 0x96),
                Rgba::rgb(0xAB, 0x63, 0xFA),
                Rgba::rgb(0xFF, 0xA1, 0x5A),
                Rgba::rgb(0x19, 0xD3, 0xF3),
                Rgba::rgb(0xFF, 0x66, 0x92),
                Rgba::rgb(0xB6, 0xE8, 0x80),
                Rgba::rgb(0xFF, 0x97, 0xFF),
                Rgba::rgb(0xFE, 0xCB, 0x52),
            ],
            background: Rgba::WHITE,
            plot_background: Rgba::rgb(0xE5, 0xEC, 0xF6),
            grid_color: Rgba::WHITE,
            axis_color: Rgba::rgb(0x44, 0x44, 0x44),
        }
    }

    /// Marker symbol for the `index`-th series (cycles).
    #[must_use]
    pub fn marker_for(&self, index: usize) -> MarkerSymbol {
        if self.marker_symbols.is_empty() {
            return MarkerSymbol::Circle;
        }
        self.marker_symbols[index % self.marker_symbols.len()]
    }

    /// Color for the `index`-th series (cycles).
    #[must_use]
    pub fn color_for(&self, index: usize) -> Rgba {
        if self.colorway.is_empty() {
            return Rgba::BLACK;
        }
        self.colorway[index % self.colorway.len()]
    }
}

/// Build the TMx light theme.
#[must_use]
pub fn light_template() -> Theme {
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_fonts() {
        let theme = light_template();
        assert_eq!(theme.title_font.family, "Nexa");
        assert!((theme.title_font.size - 26.0).abs() < f32::EPSILON);
        assert_eq!(theme.title_font.color, Rgba::BLACK);
        assert_eq!(theme.title_font.weight, FontWeight::Bold);
        assert_eq!(theme.font.family, "Nexa");
        assert!((theme.font.size - 18.0).abs() < f32::EPSILON);
        assert_eq!(theme.font.weight, FontWeight::Normal);
    }

    #[test]
    fn test_light_markers_and_colorway() {
        let theme = Theme::light();
        assert_eq!(theme.marker_symbols.len(), 6);
        assert_eq!(theme.colorway.len(), 4);
        assert!((theme.marker_size - 8.0).abs() < f32::EPSILON);
        assert_eq!(theme.colorway[0].to_hex(), "#00BDF2");
        assert_eq!(theme.colorway[3].to_hex(), "#32626E");
    }

    #[test]
    fn test_light_is_deterministic() {
        assert_eq!(Theme::light(), Theme::light());
    }

    #[test]
    fn test_cycles_wrap() {
        let theme = Theme::light();
        assert_eq!(theme.marker_for(0), MarkerSymbol::Circle);
        assert_eq!(theme.marker_for(5), MarkerSymbol::Star);
        assert_eq!(theme.marker_for(6), MarkerSymbol::Circle);
        assert_eq!(theme.color_for(4), theme.color_for(0));
        assert_eq!(theme.color_for(5), theme.colorway[1]);
    }

    #[test]
    fn test_empty_cycles_fall_back() {
        let theme = Theme {
            marker_symbols: Vec::new(),
            colorway: Vec::new(),
            ..Theme::plain()
        };
        assert_eq!(theme.marker_for(3), MarkerSymbol::Circle);
        assert_eq!(theme.color_for(3), Rgba::BLACK);
    }

    #[test]
    fn test_symbol_outlines() {
        assert!(MarkerSymbol::Circle.outline(8.0).is_empty());
        assert_eq!(MarkerSymbol::Square.outline(8.0).len(), 4);
        assert_eq!(MarkerSymbol::Cross.outline(8.0).len(), 12);
        assert_eq!(MarkerSymbol::Pentagon.outline(8.0).len(), 5);
        assert_eq!(MarkerSymbol::Star.outline(8.0).len(), 10);

        // Star tip points straight up.
        let tip = MarkerSymbol::Star.outline(10.0)[0];
        assert!(tip.0.abs() < 1e-4);
        assert!(tip.1 < 0.0);
    }

    #[test]
    fn test_symbol_names() {
        let names: Vec<&str> = MarkerSymbol::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["circle", "square", "diamond", "cross", "pentagon", "star"]
        );
    }
}
