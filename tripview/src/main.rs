//! tripview - travel plan viewer
//!
//! Reads a navigation-state snapshot (JSON) from a file or stdin, normalizes
//! the embedded trip details and prints the resulting render tree.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tripview_core::{normalize_str, render, Config, NormalizedTrip, RenderTree};

#[derive(Parser, Debug)]
#[command(name = "tripview")]
#[command(about = "Normalize and render a generated travel plan")]
#[command(version)]
struct Args {
    /// Navigation-state JSON file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print normalization warnings to stderr
    #[arg(long)]
    warnings: bool,

    /// Print only the render tree fingerprint
    #[arg(long)]
    fingerprint: bool,

    /// Config file (default: $XDG_CONFIG_HOME/tripview/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Initialize logging (to file; stdout carries the rendered trip)
    let _log_guard =
        tripview_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let input = read_input(args.input.as_deref())?;
    let trip = normalize_str(&input);
    let tree = render(&trip, &config.render.options());

    tracing::info!(
        available = trip.is_available(),
        hotels = trip.hotels.len(),
        itinerary = trip.itinerary.kind(),
        warnings = trip.warnings.len(),
        "Rendered trip"
    );

    if args.warnings {
        print_warnings(&trip);
    }

    if args.fingerprint {
        println!("{}", tree.fingerprint().context("failed to fingerprint render tree")?);
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => print!("{}", tree),
        OutputFormat::Json => print_json(&tree)?,
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_warnings(trip: &NormalizedTrip) {
    for warning in &trip.warnings {
        eprintln!("warning: {}", warning);
    }
    if !trip.warnings.is_empty() {
        eprintln!(
            "details logged under {}",
            tripview_core::logging::log_dir().display()
        );
    }
}

fn print_json(tree: &RenderTree) -> Result<()> {
    let json = tree
        .to_json_pretty()
        .context("failed to serialize render tree")?;
    println!("{}", json);
    Ok(())
}
