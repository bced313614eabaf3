use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use bracecheck::config::Config;
use bracecheck::frontend::report_printer::ReportPrinter;
use bracecheck::scanner::{ScanReport, Scanner};

const BALANCED: u8 = 0;
const UNBALANCED: u8 = 1;
const IO_ERROR: u8 = 2;

fn main() -> ExitCode {
    let config = Config::parse();
    init_tracing(config.log_level());

    let scanner = Scanner::new(config.pair);
    let printer = ReportPrinter::new(config.pair)
        .format(config.format)
        .scope_notices(config.scope_notices);
    let origin = config.origin();

    let result = if config.reads_stdin() {
        scanner.scan_reader(io::stdin().lock(), origin)
    } else {
        scanner.scan_path(&config.path)
    };

    let mut out = io::stdout().lock();
    let (written, code) = match result {
        Ok(outcome) => {
            let code = match outcome.report {
                ScanReport::Balanced => BALANCED,
                _ => UNBALANCED,
            };
            (printer.print(&mut out, origin, &outcome), code)
        }
        Err(e) => {
            warn!(error = %e, "scan failed");
            (printer.print_error(&mut out, origin, &e), IO_ERROR)
        }
    };

    if let Err(e) = written.and_then(|()| out.flush()) {
        error!(error = %e, "failed to write report");
        return ExitCode::from(IO_ERROR);
    }
    ExitCode::from(code)
}

/// Logs go to stderr so stdout carries only the report.
/// `BRACECHECK_LOG` takes precedence over `-v`.
fn init_tracing(default_level: &str) {
    let filter = match EnvFilter::try_from_env("BRACECHECK_LOG") {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_level),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
