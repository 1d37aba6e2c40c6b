//! Errors raised around the tree. The tree itself never fails; these come
//! from reading bid files and driving the console.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Input/output error (BSD sysexits).
const IOERR: i32 = 74;
/// Data format error (BSD sysexits).
const DATAERR: i32 = 65;

/// Everything that can go wrong outside the tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The bid file couldn't be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// A data row is shorter than the column mapping requires.
    #[error("line {line}: expected at least {} columns but found {found}", .column + 1)]
    MissingColumn {
        /// One-based line number in the file, counting the header.
        line: usize,
        /// The highest zero-based column that was asked for.
        column: usize,
        /// How many columns the row actually has.
        found: usize,
    },

    /// Reading a menu choice or writing output failed.
    #[error("console: {0}")]
    Console(#[from] io::Error),
}

/// Result type for everything in this crate that can fail.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io { .. } | Error::Console(_) => IOERR,
            Error::MissingColumn { .. } => DATAERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = Error::MissingColumn {
            line: 3,
            column: 8,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "line 3: expected at least 9 columns but found 5"
        );
        assert_eq!(err.exit_code(), DATAERR);
    }

    #[test]
    fn test_io_exit_code() {
        let err = Error::Io {
            path: PathBuf::from("bids.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read bids.csv: gone");
        assert_eq!(err.exit_code(), IOERR);
    }
}
