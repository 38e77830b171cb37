//! chord2svg — render a chord fingering to an SVG diagram.
//!
//! The chord comes either from a JSON file or, with `--book` and `--chord`,
//! from a JSON chord book.

use std::{fs, path::PathBuf, process, str::FromStr};

use clap::{Parser, ValueEnum};
use log::{debug, error, info, LevelFilter};

use chordlib::{
    config::load_config, fetch_diagram, geometry_to_json, layout_diagram, parse_chord_file,
    render_diagram_to_svg, AcquisitionError, AppConfig, ChordBook, ChordDiagram, ChordError,
};

/// Output format for the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Self-contained SVG with title and difficulty badge
    Svg,
    /// Positioned primitives as JSON
    Json,
}

/// Command-line arguments for chord2svg
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a chord JSON file
    #[arg(required_unless_present = "chord")]
    input: Option<PathBuf>,

    /// Chord book (JSON array of chords) to look `--chord` up in
    #[arg(short, long)]
    book: Option<PathBuf>,

    /// Chord name to look up in the book, e.g. "F#m"
    #[arg(long, requires = "book", conflicts_with = "input")]
    chord: Option<String>,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    output: PathBuf,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Rendered SVG width; the height keeps the diagram's aspect ratio
    #[arg(long)]
    width: Option<f64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: &Args) -> Result<(), ChordError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    let ChordDiagram { chord, geometry } =
        if let (Some(book), Some(query)) = (&args.book, &args.chord) {
            let book = ChordBook::load(book)?;
            fetch_diagram(&book, query, config.layout())?
        } else if let Some(input) = &args.input {
            info!(input_path = input.display().to_string(); "Reading chord");
            let chord = parse_chord_file(input)?;
            let geometry = layout_diagram(&chord, config.layout());
            ChordDiagram { chord, geometry }
        } else {
            return Err(AcquisitionError::EmptyQuery.into());
        };
    debug!(chord = chord.name(), primitives = geometry.primitives.len(); "Chord laid out");

    let output = match args.format {
        Format::Svg => render_diagram_to_svg(&chord, &geometry, &config, args.width),
        Format::Json => geometry_to_json(&geometry)?,
    };

    fs::write(&args.output, output)?;
    info!(output_file = args.output.display().to_string(); "Diagram written");
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}
