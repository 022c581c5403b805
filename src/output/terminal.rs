//! Terminal preview of rendered figures.
//!
//! Downsamples a framebuffer to character cells, either as an ASCII
//! grayscale ramp or as 24-bit colored half blocks.

use crate::color::Rgba;
use crate::error::Result;
use crate::figure::Figure;
use crate::framebuffer::Framebuffer;
use crate::render::render_raster;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters with ANSI 24-bit color (2x vertical resolution)
    #[default]
    HalfBlock,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Grayscale ramp from dark to light.
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Monospace cell height over width.
    const CELL_ASPECT: f32 = 2.0;

    /// Create an encoder: half blocks, at most 80 columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: TerminalMode::default(),
            width: None,
        }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in columns.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width.max(1));
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let cols = self.width.unwrap_or(80).min(fb.width());
        let aspect = fb.width() as f32 / fb.height() as f32;
        let rows = ((cols as f32 / aspect / Self::CELL_ASPECT).round() as u32).max(1);

        match self.mode {
            TerminalMode::Ascii => Self::render_ascii(fb, cols, rows),
            TerminalMode::HalfBlock => Self::render_half_block(fb, cols, rows),
        }
    }

    /// Rasterize a figure and render it.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure cannot be rasterized.
    pub fn render_figure(&self, fig: &Figure) -> Result<String> {
        Ok(self.render(&render_raster(fig)?))
    }

    fn render_ascii(fb: &Framebuffer, cols: u32, rows: u32) -> String {
        let mut output = String::with_capacity((cols as usize + 1) * rows as usize);
        let last = Self::ASCII_RAMP.len() - 1;

        for row in 0..rows {
            for col in 0..cols {
                let luma = sample(fb, col, row, cols, rows)
                    .map_or(0.0, Rgba::luminance);
                let idx = ((luma * last as f32).round() as usize).min(last);
                output.push(Self::ASCII_RAMP[idx]);
            }
            output.push('\n');
        }
        output
    }

    /// Each cell shows two vertical samples: `▀` in the top color over the
    /// bottom color as background.
    fn render_half_block(fb: &Framebuffer, cols: u32, rows: u32) -> String {
        let samples = rows * 2;
        let mut output = String::with_capacity((cols as usize * 40 + 8) * rows as usize);

        for row in (0..samples).step_by(2) {
            for col in 0..cols {
                let top = sample(fb, col, row, cols, samples).unwrap_or_default();
                let bottom = sample(fb, col, row + 1, cols, samples).unwrap_or_default();
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                );
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }
}

/// Nearest-neighbour sample of cell (`col`, `row`) on a `cols` x `rows` grid.
fn sample(fb: &Framebuffer, col: u32, row: u32, cols: u32, rows: u32) -> Option<Rgba> {
    let x = (col as f32 * fb.width() as f32 / cols as f32) as u32;
    let y = (row as f32 * fb.height() as f32 / rows as f32) as u32;
    fb.get_pixel(x.min(fb.width() - 1), y.min(fb.height() - 1))
}
