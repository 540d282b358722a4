//! mobius: surface area and edge length of a Möbius strip.
//!
//! Builds the strip from three scalar parameters (demonstration defaults
//! `R = 1.0`, `w = 0.4`, `n = 200`), prints its surface area and edge
//! length, then renders a summary of the colored scene.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mobius=debug` - Strip construction and query results
//! - `RUST_LOG=mobius_integrate=trace` - Per-axis quadrature
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! mobius
//! mobius --radius 2 --width 0.5 --resolution 400 --closed
//! mobius --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mobius::{MobiusError, MobiusStrip, StripParams};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod output;
mod summary;

use output::Report;
use summary::SummaryRenderer;

/// mobius - Surface area and edge length of a Möbius strip.
#[derive(Parser, Debug)]
#[command(name = "mobius")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Radius of the center circle
    #[arg(long, short = 'R', default_value_t = StripParams::DEMO.radius, allow_negative_numbers = true)]
    radius: f64,

    /// Full width of the strip
    #[arg(long, short = 'w', default_value_t = StripParams::DEMO.width, allow_negative_numbers = true)]
    width: f64,

    /// Samples per parameter axis
    #[arg(long, short = 'n', default_value_t = StripParams::DEMO.resolution as i64, allow_negative_numbers = true)]
    resolution: i64,

    /// Also report the edge length closed back onto its first point
    #[arg(long)]
    closed: bool,

    /// Skip rendering the scene summary
    #[arg(long)]
    no_render: bool,

    /// Output format for results
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Suppress logging and the scene summary
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

impl Cli {
    /// The strip parameters named on the command line.
    fn params(&self) -> Result<StripParams, MobiusError> {
        let resolution = usize::try_from(self.resolution).map_err(|_| {
            MobiusError::invalid("resolution", self.resolution, "must be at least 2")
        })?;
        Ok(StripParams::new(self.radius, self.width, resolution))
    }
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "mobius=info",
            2 => "mobius=debug,mobius_mesh=debug,mobius_integrate=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.params()?;
    let strip = MobiusStrip::from_params(params).context("Failed to build strip")?;

    let surface_area = strip
        .surface_area()
        .context("Failed to integrate surface area")?;
    let edge_length = strip.edge_length();
    let edge_length_closed = cli.closed.then(|| strip.edge_length_closed());
    info!(surface_area, edge_length, "measured strip");

    let report = Report {
        params,
        surface_area,
        edge_length,
        edge_length_closed,
        scene: None,
    };

    match cli.format {
        OutputFormat::Text => {
            output::print_text(&report);
            if !cli.no_render && !cli.quiet {
                let summary = strip
                    .render_with(&mut SummaryRenderer)
                    .context("Failed to render scene")?;
                summary.print();
            }
        }
        OutputFormat::Json => {
            let scene = if cli.no_render {
                None
            } else {
                Some(
                    strip
                        .render_with(&mut SummaryRenderer)
                        .context("Failed to render scene")?,
                )
            };
            output::print_json(&Report { scene, ..report })?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    run(&cli)
}
