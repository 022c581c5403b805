//! Output encoders (SVG, PNG, HTML, terminal) and figure display.

mod html;
mod png_encoder;
mod svg;
mod terminal;

pub use html::HtmlPage;
pub use png_encoder::PngEncoder;
pub use svg::{SvgEncoder, TextAnchor};
pub use terminal::{TerminalEncoder, TerminalMode};

use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::render::render_svg;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// File format written by [`write_figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Scalable vector graphics.
    Svg,
    /// Raster PNG (no text).
    Png,
    /// Standalone HTML page with inline SVG.
    #[default]
    Html,
    /// ANSI half-block text preview.
    Terminal,
}

impl OutputFormat {
    /// Every format.
    pub const ALL: [Self; 4] = [Self::Svg, Self::Png, Self::Html, Self::Terminal];

    /// Canonical name, also the file extension.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Html => "html",
            Self::Terminal => "txt",
        }
    }

    /// Guess the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            other => other.extension(),
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "html" | "htm" => Ok(Self::Html),
            "terminal" | "term" | "txt" => Ok(Self::Terminal),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Render a figure and write it to `path` in the given format.
///
/// # Errors
///
/// Returns an error if rendering or file writing fails.
pub fn write_figure<P: AsRef<Path>>(fig: &Figure, format: OutputFormat, path: P) -> Result<()> {
    let path = path.as_ref();
    match format {
        OutputFormat::Svg => render_svg(fig)?.write_to_file(path)?,
        OutputFormat::Png => PngEncoder::write_figure(fig, path)?,
        OutputFormat::Html => HtmlPage::from_figure(fig)?.write_to_file(path)?,
        OutputFormat::Terminal => fs::write(path, TerminalEncoder::new().render_figure(fig)?)?,
    }
    info!(path = %path.display(), %format, "wrote figure");
    Ok(())
}

/// Display a figure in the default browser.
///
/// Writes an HTML page into the system temp directory and asks the OS to
/// open it. A failure to launch the browser is logged, not returned; the
/// page path is returned either way.
///
/// # Errors
///
/// Returns an error if the page cannot be rendered or written.
pub fn show(fig: &Figure) -> Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = std::env::temp_dir().join(format!("tmx-plot-{}-{stamp}.html", std::process::id()));

    write_figure(fig, OutputFormat::Html, &path)?;
    debug!(path = %path.display(), "opening figure");
    if let Err(err) = open::that(&path) {
        warn!(path = %path.display(), error = %err, "could not open figure in a browser");
    }
    Ok(path)
}
