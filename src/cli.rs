//! Command-line interface for Inkline.

use clap::Parser;
use std::path::PathBuf;

/// Inkline - a streaming markdown renderer for modern terminals.
#[derive(Parser, Debug)]
#[command(
    name = "ink",
    author = "Inkline Contributors",
    version,
    about = "A streaming markdown renderer for modern terminals",
    after_help = "Examples:\n  \
                  cat README.md | ink\n  \
                  ink document.md\n  \
                  ink -w 100 -c theme.toml input.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the output width (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Disable colored output regardless of TTY detection
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    /// Get the effective width (0 means auto-detect).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(80)
        } else {
            self.width as usize
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}
