//! tmx-plots: generate synthetic signals and chart them in the TMx theme.
//!
//! Run with no arguments to plot three sinusoidal signals and open the
//! themed figure in the default browser.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmx_plots::output::{show, write_figure, OutputFormat, TerminalEncoder};
use tmx_plots::plots::PlotKind;
use tmx_plots::signal::{generate_data, random_bubble_sizes, GeneratorConfig, SignalKind};
use tmx_plots::theme::light_template;

/// Generate synthetic signals and plot them.
#[derive(Parser, Debug)]
#[command(name = "tmx-plots")]
#[command(version)]
#[command(about = "Synthetic signal generation and TMx-themed charts", long_about = None)]
struct Args {
    /// Signal generator: random, sinusoidal or squared
    #[arg(long, default_value_t = SignalKind::Sinusoidal)]
    kind: SignalKind,

    /// Samples per signal
    #[arg(long, default_value_t = 100)]
    length: usize,

    /// Number of signals
    #[arg(long, default_value_t = 3)]
    signals: usize,

    /// Sinusoids summed per sinusoidal signal
    #[arg(long, default_value_t = 10)]
    sin_components: usize,

    /// Peak amplitude
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    max_amplitude: f32,

    /// Constant added to every sample
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    offset: f32,

    /// Chart: lines-and-dots, lines, bars or bubbles
    #[arg(long, default_value_t = PlotKind::LinesAndDots)]
    plot: PlotKind,

    /// Figure title
    #[arg(long, default_value = "Sinusoidal Plot")]
    title: String,

    /// X-axis title
    #[arg(long, default_value = "Time")]
    x_label: String,

    /// Y-axis title
    #[arg(long, default_value = "Amplitude")]
    y_label: String,

    /// Keep the default look instead of the TMx light theme
    #[arg(long)]
    no_theme: bool,

    /// Output format: svg, png, html or terminal (default: from --output, else html)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Write the figure to this file instead of opening it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open the figure in a browser
    #[arg(long)]
    no_show: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tmx_plots=debug" } else { "tmx_plots=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    debug!(?args, "parsed arguments");

    let config = GeneratorConfig::new(args.kind)
        .length(args.length)
        .num_signals(args.signals)
        .sin_components(args.sin_components)
        .max_amplitude(args.max_amplitude)
        .offset(args.offset);
    let data = generate_data(&config);

    let bubble_size = if args.plot == PlotKind::Bubbles {
        random_bubble_sizes(&data, &mut rand::thread_rng())
    } else {
        Vec::new()
    };

    let mut fig = args
        .plot
        .build(&data, &bubble_size, &args.title, &args.x_label, &args.y_label)
        .with_context(|| format!("building {} plot", args.plot))?;
    if !args.no_theme {
        fig.apply_theme(light_template());
    }

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or_default();

    if let Some(path) = &args.output {
        write_figure(&fig, format, path)
            .with_context(|| format!("writing {}", path.display()))?;
    } else if format == OutputFormat::Terminal {
        let preview = TerminalEncoder::new()
            .render_figure(&fig)
            .context("rendering terminal preview")?;
        print!("{preview}");
    } else if !args.no_show {
        let page = show(&fig).context("showing figure")?;
        info!(path = %page.display(), "figure ready");
    }

    Ok(())
}
