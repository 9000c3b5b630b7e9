//! schedule-grid CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use schedule_grid::config::{CellSize, OutputFormat, RenderConfig};
use schedule_grid::layout::OverlapStrategy;
use schedule_grid::parsers::{self, SourceFormat};
use schedule_grid::{layout_schedule, render_with};

/// Weekly class schedule to text, SVG or JSON layout.
#[derive(Parser, Debug)]
#[command(
    name = "schedule-grid",
    version = env!("SCHEDULE_GRID_VERSION"),
    about = "Weekly class schedule to text, SVG or JSON layout"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Output format: text, svg or json
    #[arg(short = 'f', long = "format", default_value = "text")]
    format: OutputFormat,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// SVG size multiplier
    #[arg(long = "scale", default_value = "1.0", value_parser = parse_scale)]
    scale: f64,

    /// Overlap rule: clustered or anchored
    #[arg(long = "overlap", default_value = "clustered")]
    overlap: OverlapStrategy,

    /// Fail on any invalid course instead of skipping it
    #[arg(long = "strict")]
    strict: bool,

    /// Input format: json or toml (default: from extension, then content)
    #[arg(long = "input-format")]
    input_format: Option<SourceFormat>,

    /// Text output: columns per day
    #[arg(long = "day-width", default_value = "18")]
    day_width: usize,

    /// Text output: rows per hour
    #[arg(long = "rows-per-hour", default_value = "4")]
    rows_per_hour: usize,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a positive number, got '{s}'"))
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => fail(format!("cannot read '{}': {}", path, e)),
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let source_format = cli
        .input_format
        .or_else(|| cli.input.as_deref().and_then(|p| SourceFormat::from_path(Path::new(p))))
        .unwrap_or_else(|| parsers::detect_format(&text));
    debug!("reading schedule as {:?}", source_format);

    let config = RenderConfig {
        format: cli.format,
        unicode: !cli.use_ascii,
        scale: cli.scale,
        overlap: cli.overlap,
        strict: cli.strict,
        cells: CellSize {
            day_width: cli.day_width,
            rows_per_hour: cli.rows_per_hour,
            ..CellSize::default()
        },
        ..RenderConfig::default()
    };

    let schedule = match parsers::parse_as(&text, source_format) {
        Ok(s) => s,
        Err(e) => fail(e),
    };
    let layout = match layout_schedule(&schedule, &config) {
        Ok(l) => l,
        Err(e) => fail(e),
    };
    let rendered = render_with(&schedule, &layout, &config);

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
