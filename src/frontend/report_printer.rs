use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::lexer::Span;
use crate::scan_error::ScanError;
use crate::scanner::{ScanOutcome, ScanReport, ScanStats};
use crate::token::BracePair;

/// Writes a scan verdict to an output stream.
///
/// Text output is one verdict line, optionally preceded by one line per
/// outer-scope closure. JSON output is a single object per run.
pub struct ReportPrinter {
    pub pair: BracePair,
    pub format: OutputFormat,
    pub scope_notices: bool,
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self {
            pair: BracePair::default(),
            format: OutputFormat::Text,
            scope_notices: false,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    pair: BracePair,
    #[serde(flatten)]
    report: ScanReport,
    stats: ScanStats,
    closed_scopes: &'a [Span],
}

#[derive(Serialize)]
struct JsonError {
    path: String,
    status: &'static str,
    message: String,
}

impl ReportPrinter {
    pub fn new(pair: BracePair) -> Self {
        Self {
            pair,
            ..Self::default()
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn scope_notices(mut self, on: bool) -> Self {
        self.scope_notices = on;
        self
    }

    /// The single verdict line, e.g. `Unclosed brace at line 3, col 7`.
    pub fn verdict(&self, report: &ScanReport) -> String {
        match report {
            ScanReport::ExtraCloser(span) => {
                format!("Extra closing {} at {}", self.pair.noun(), span)
            }
            ScanReport::Unclosed(span) => format!("Unclosed {} at {}", self.pair.noun(), span),
            ScanReport::Balanced => format!("{} are balanced", capitalize(self.pair.plural())),
        }
    }

    pub fn print(
        &self,
        out: &mut impl Write,
        origin: &Path,
        outcome: &ScanOutcome,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                if self.scope_notices {
                    for span in &outcome.closed_scopes {
                        writeln!(out, "Outer scope closed at {}", span)?;
                    }
                }
                writeln!(out, "{}", self.verdict(&outcome.report))
            }
            OutputFormat::Json => {
                let json = JsonReport {
                    path: origin.display().to_string(),
                    pair: self.pair,
                    report: outcome.report,
                    stats: outcome.stats,
                    closed_scopes: &outcome.closed_scopes,
                };
                serde_json::to_writer(&mut *out, &json)?;
                writeln!(out)
            }
        }
    }

    pub fn print_error(
        &self,
        out: &mut impl Write,
        origin: &Path,
        err: &ScanError,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "Error: {}", err),
            OutputFormat::Json => {
                let json = JsonError {
                    path: origin.display().to_string(),
                    status: "error",
                    message: err.to_string(),
                };
                serde_json::to_writer(&mut *out, &json)?;
                writeln!(out)
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
