use std::path::PathBuf;
use thiserror::Error;
use crate::GridDim;

/// exit status reserved for a dimension mismatch
pub const EXIT_MISMATCH:u8 = 1;
/// exit status for every other failure
pub const EXIT_FATAL:u8 = 2;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{token}' is not a valid 32-bit float")]
    Parse { line: usize, token: String },

    /// the only failure that is reported rather than treated as fatal
    #[error("data size {actual} does not match the specified dimensions {dims} (expected {})", fmt_expected(expected))]
    DimensionMismatch {
        dims: GridDim,
        /// None when nx * ny * nt overflows
        expected: Option<i128>,
        actual: usize,
    },
}

fn fmt_expected(expected:&Option<i128>) -> String {
    match expected {
        Some(n) => format!("{n} samples"),
        None => "more samples than can be counted".to_string(),
    }
}

impl ConvertError {

    pub(crate) fn io(path:impl Into<PathBuf>, source:std::io::Error) -> Self {
        ConvertError::Io { path: path.into(), source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::DimensionMismatch { .. } => EXIT_MISMATCH,
            _ => EXIT_FATAL,
        }
    }

}
