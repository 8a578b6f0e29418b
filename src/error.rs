use std::collections::TryReserveError;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An empty word, prefix or pattern. Carries what was empty.
    #[error("{0} cannot be empty")]
    InvalidArgument(&'static str),

    #[error("invalid UTF-8 sequence at byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    #[error("out of memory while decoding input: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("no rank recorded for word {0:?}")]
    UnknownRank(String),

    #[error("{}:{line}: {reason}", .file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// An encoded word in a [`crate::TelPadCollection`] has no real words.
    #[error("encoded word {0:?} has no matching real word")]
    CorruptIndex(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Utf8Error> for Error {
    fn from(err: Utf8Error) -> Self {
        Error::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_keeps_offset() {
        let bytes = [b'a', b'b', 0xff];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        match err {
            Error::InvalidEncoding { valid_up_to } => assert_eq!(valid_up_to, 2),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::InvalidArgument("prefix").to_string(),
            "prefix cannot be empty"
        );
        let err = Error::Parse {
            file: PathBuf::from("dict.txt"),
            line: 3,
            reason: "non-numeric rank \"x\"".to_string(),
        };
        assert_eq!(err.to_string(), "dict.txt:3: non-numeric rank \"x\"");
    }
}
