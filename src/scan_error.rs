use std::path::PathBuf;

use thiserror::Error;

/// A scan that could not run to a verdict.
///
/// Structural problems (an extra closer, an unclosed opener) are not errors;
/// they are reported through `ScanReport`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}
