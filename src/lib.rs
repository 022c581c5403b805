//! # TMx Plots
//!
//! Synthetic signal generation and themed charting.
//!
//! Signals come from [`signal::generate_data`] (uniform noise, sums of random
//! sinusoids, or square waves). The [`plots`] builders turn them into a
//! [`figure::Figure`] with one named trace per signal, which the TMx light
//! theme ([`theme::light_template`]) styles with Nexa fonts, a six-shape
//! marker cycle and the four-color TMx palette. Figures render to SVG, PNG,
//! HTML or a terminal preview, or open in the default browser via
//! [`output::show`].
//!
//! ## Quick Start
//!
//! ```rust
//! use tmx_plots::prelude::*;
//!
//! let config = GeneratorConfig::new(SignalKind::Sinusoidal)
//!     .length(100)
//!     .num_signals(3)
//!     .max_amplitude(10.0)
//!     .offset(30.0);
//! let data = generate_data(&config);
//!
//! let fig = plot_lines_and_dots(&data, "Sinusoidal Plot", "Time", "Amplitude")
//!     .with_theme(light_template());
//! let svg = render_svg(&fig)?.render();
//! assert!(svg.contains("Data 2"));
//! # Ok::<(), tmx_plots::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// RGBA colors and hex parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Data and Figures
// ============================================================================

/// Signal generators: noise, sinusoids and square waves.
pub mod signal;

/// Figure and trace model.
pub mod figure;

/// Fonts, marker symbols and color themes.
pub mod theme;

/// Line, bar and bubble chart builders.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Layout and rasterization of figures to SVG or pixels.
pub mod render;

/// Output encoders and figure display.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tmx-plots operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use tmx_plots::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::figure::{Figure, ScatterMode, Trace, TraceKind};
    pub use crate::output::{show, write_figure, OutputFormat};
    pub use crate::plots::{plot_bars, plot_bubbles, plot_lines, plot_lines_and_dots, PlotKind};
    pub use crate::render::{render_raster, render_svg};
    pub use crate::signal::{generate_data, GeneratorConfig, Signal, SignalKind};
    pub use crate::theme::{light_template, MarkerSymbol, Theme};
    pub use batuta_common::display::WithDimensions;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
