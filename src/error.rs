//! Error types for tmx-plots operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, building, or rendering figures.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or figure.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Fewer bubble size lists than signals.
    #[error("Bubble sizes missing: {signals} signals but only {sizes} size lists")]
    BubbleSizeMismatch {
        /// Number of signals.
        signals: usize,
        /// Number of size lists supplied.
        sizes: usize,
    },

    /// A bubble size list whose length differs from its signal.
    #[error("Bubble sizes for signal {signal}: {sizes} sizes for {points} points")]
    BubbleSizeLengthMismatch {
        /// Index of the signal.
        signal: usize,
        /// Samples in the signal.
        points: usize,
        /// Entries in its size list.
        sizes: usize,
    },

    /// Scale domain error.
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unrecognized signal generation mode.
    #[error("Unknown signal kind: {0} (expected random, sinusoidal or squared)")]
    UnknownSignalKind(String),

    /// Unrecognized plot kind.
    #[error("Unknown plot kind: {0} (expected lines-and-dots, lines, bars or bubbles)")]
    UnknownPlotKind(String),

    /// Unrecognized output format.
    #[error("Unknown output format: {0} (expected svg, png, html or terminal)")]
    UnknownFormat(String),
}
