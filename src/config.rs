use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};

use crate::token::BracePair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable verdict line
    #[default]
    Text,
    /// One JSON object with the verdict, position and scan statistics
    Json,
}

/// Report the first unmatched brace in a text file.
#[derive(Debug, Parser)]
#[command(name = "bracecheck", version)]
pub struct Config {
    /// File to scan, or `-` for standard input
    pub path: PathBuf,

    /// Bracket pair to track
    #[arg(short, long, value_enum, default_value_t = BracePair::Brace, env = "BRACECHECK_PAIR")]
    pub pair: BracePair,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "BRACECHECK_FORMAT")]
    pub format: OutputFormat,

    /// Print a line each time the outermost scope closes (text format)
    #[arg(long)]
    pub scope_notices: bool,

    /// Raise log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn reads_stdin(&self) -> bool {
        self.path == Path::new("-")
    }

    /// Label used for the input in error messages and JSON output.
    pub fn origin(&self) -> &Path {
        if self.reads_stdin() {
            Path::new("<stdin>")
        } else {
            &self.path
        }
    }

    /// Default log filter when `BRACECHECK_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
