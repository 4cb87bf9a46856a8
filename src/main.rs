//! Inkline - a streaming markdown renderer for modern terminals.
//!
//! This binary provides the CLI interface to the inkline library,
//! rendering markdown from stdin or files to stdout one logical line
//! at a time.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use inkline_config::{Config, Options};
use inkline_render::Writer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("inkline v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> io::Result<()> {
    let options = load_options(cli)?;
    debug!("Resolved options: width={}, colors={}", options.console_width, options.enable_colors);

    if cli.should_read_stdin() {
        run_stdin(&options)
    } else {
        run_files(cli, &options)
    }
}

/// Resolve the renderer's `Options` from the config file/override plus
/// the CLI's width and color flags.
fn load_options(cli: &Cli) -> io::Result<Options> {
    let mut config = Config::load_with_override(cli.config.as_deref())
        .unwrap_or_else(|e| {
            error!("Failed to load config: {}", e);
            Config::default()
        });

    config.options.console_width = cli.effective_width() as i64;
    if cli.no_color {
        config.options.enable_colors = false;
    }

    Ok(config.to_options())
}

/// Stream stdin, line by line, straight to stdout.
fn run_stdin(options: &Options) -> io::Result<()> {
    info!("Reading from stdin");

    let stdin = io::stdin();
    let mut writer = Writer::new(io::stdout(), options.clone());

    for line in stdin.lock().lines() {
        let line = line?;
        trace!("Input line: {}", line);
        writer.write_line(&line).map_err(to_io_error)?;
        writer.flush().map_err(to_io_error)?;
    }

    writer.complete().map_err(to_io_error)
}

/// Render each file in turn to stdout.
fn run_files(cli: &Cli, options: &Options) -> io::Result<()> {
    for path in &cli.files {
        info!("Processing file: {}", path.display());
        render_file(path, options)?;
    }
    Ok(())
}

fn render_file(path: &Path, options: &Options) -> io::Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut writer = Writer::new(io::stdout(), options.clone());
    for line in reader.lines() {
        let line = line?;
        writer.write_line(&line).map_err(to_io_error)?;
    }
    writer.complete().map_err(to_io_error)
}

fn to_io_error(e: inkline_core::InklineError) -> io::Error {
    match e {
        inkline_core::InklineError::Io(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_defaults_colors_on() {
        let cli = Cli::parse_from(["ink"]);
        let options = load_options(&cli).unwrap();
        assert!(options.enable_colors);
    }

    #[test]
    fn test_load_options_no_color_overrides_config() {
        let cli = Cli::parse_from(["ink", "--no-color"]);
        let options = load_options(&cli).unwrap();
        assert!(!options.enable_colors);
    }

    #[test]
    fn test_load_options_width_override() {
        let cli = Cli::parse_from(["ink", "-w", "100"]);
        let options = load_options(&cli).unwrap();
        assert_eq!(options.console_width, 100);
    }
}
