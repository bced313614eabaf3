//! # bracecheck
//!
//! Finds the first unmatched bracket in a text file. The scan is a single
//! pass over the characters with a stack of open positions; it reports an
//! extra closer as soon as one is seen, otherwise the innermost unclosed
//! opener, otherwise that the file is balanced.

pub mod config;
pub mod frontend;
pub mod lexer;
pub mod scan_error;
pub mod scanner;
pub mod token;

pub use lexer::Span;
pub use scan_error::ScanError;
pub use scanner::{ScanOutcome, ScanReport, ScanStats, Scanner, scan_path};
pub use token::BracePair;
