//! Stack-based bracket balance scan.
//!
//! The scan walks the input in document order and keeps one `Span` per
//! currently open bracket. The first closer seen with an empty stack ends the
//! scan; otherwise the stack is inspected once the input is exhausted.
//!
//! The scan is purely character-level: brackets inside string literals or
//! comments count like any other.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::lexer::{Lexer, Span, Spanned};
use crate::scan_error::ScanError;
use crate::token::{BracePair, Token};

/// Terminal verdict of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanReport {
    /// A closer with nothing open, at the closer's position.
    ExtraCloser(Span),
    /// Input ended with openers left; position of the innermost one.
    Unclosed(Span),
    Balanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub openers: usize,
    /// Closers that matched an opener. An extra closer is not counted.
    pub closers: usize,
    pub max_depth: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub report: ScanReport,
    pub stats: ScanStats,
    /// Positions of the closers that brought the stack back to empty.
    pub closed_scopes: Vec<Span>,
}

pub struct Scanner {
    pair: BracePair,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(BracePair::default())
    }
}

impl Scanner {
    pub fn new(pair: BracePair) -> Self {
        Scanner { pair }
    }

    /// Scans an in-memory document.
    pub fn scan_str(&self, text: &str) -> ScanOutcome {
        let mut state = ScanState::new(self.pair);
        match state.feed(text) {
            ControlFlow::Break(span) => state.extra_closer(span),
            ControlFlow::Continue(()) => state.finish(),
        }
    }

    /// Scans `reader` line by line. `origin` only labels I/O errors.
    ///
    /// Reading stops at the first extra closer, so bytes past it are never
    /// pulled from the reader.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        origin: &Path,
    ) -> Result<ScanOutcome, ScanError> {
        debug!(origin = %origin.display(), pair = %self.pair, "scan started");

        let mut state = ScanState::new(self.pair);
        let mut buf = String::new();
        loop {
            buf.clear();
            let read = reader
                .read_line(&mut buf)
                .map_err(|e| ScanError::io(origin, e))?;
            if read == 0 {
                break;
            }
            if let ControlFlow::Break(span) = state.feed(&buf) {
                return Ok(state.extra_closer(span));
            }
        }

        Ok(state.finish())
    }

    pub fn scan_path(&self, path: impl AsRef<Path>) -> Result<ScanOutcome, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
        self.scan_reader(BufReader::new(file), path)
    }
}

/// Scans the file at `path` for the given pair and returns only the verdict.
pub fn scan_path(path: impl AsRef<Path>, pair: BracePair) -> Result<ScanReport, ScanError> {
    Scanner::new(pair).scan_path(path).map(|outcome| outcome.report)
}

struct ScanState {
    lexer: Lexer,
    stack: Vec<Span>,
    stats: ScanStats,
    closed_scopes: Vec<Span>,
}

impl ScanState {
    fn new(pair: BracePair) -> Self {
        ScanState {
            lexer: Lexer::new(pair),
            stack: Vec::new(),
            stats: ScanStats::default(),
            closed_scopes: Vec::new(),
        }
    }

    /// Breaks with the position of an extra closer.
    fn feed(&mut self, text: &str) -> ControlFlow<Span> {
        for Spanned { token, span } in self.lexer.line(text) {
            match token {
                Token::Open => {
                    self.stack.push(span);
                    self.stats.openers += 1;
                    self.stats.max_depth = self.stats.max_depth.max(self.stack.len());
                    let depth = self.stack.len();
                    trace!(line = span.line, col = span.col, depth, "push");
                }
                Token::Close => {
                    if self.stack.pop().is_none() {
                        return ControlFlow::Break(span);
                    }
                    self.stats.closers += 1;
                    let depth = self.stack.len();
                    trace!(line = span.line, col = span.col, depth, "pop");

                    if self.stack.is_empty() {
                        debug!(line = span.line, col = span.col, "outer scope closed");
                        self.closed_scopes.push(span);
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn extra_closer(self, span: Span) -> ScanOutcome {
        self.into_outcome(ScanReport::ExtraCloser(span))
    }

    fn finish(self) -> ScanOutcome {
        let report = match self.stack.last() {
            Some(&top) => ScanReport::Unclosed(top),
            None => ScanReport::Balanced,
        };
        self.into_outcome(report)
    }

    fn into_outcome(self, report: ScanReport) -> ScanOutcome {
        let stats = ScanStats {
            lines: self.lexer.lines(),
            ..self.stats
        };
        debug!(
            ?report,
            openers = stats.openers,
            closers = stats.closers,
            max_depth = stats.max_depth,
            lines = stats.lines,
            "scan finished"
        );
        ScanOutcome {
            report,
            stats,
            closed_scopes: self.closed_scopes,
        }
    }
}
