//! Module for errors.
use std::{error::Error, fmt::Display, path::PathBuf};

/// Error from fetching or reading the dataset.
#[derive(Debug)]
pub enum YomahaErr {
    // Transport errors
    /// Error forwarded from reqwest, e.g. the host is unreachable.
    Http(::reqwest::Error),
    /// The server answered with a non-success status code.
    HttpStatus {
        /// The requested URL
        url: String,
        /// The status code returned by the server
        status: ::reqwest::StatusCode,
    },
    /// A resource URL that can't be used to derive a local file name.
    InvalidUrl(String),

    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    /// The compressed stream was corrupt or truncated.
    Decompress {
        /// The compressed file being read
        path: PathBuf,
        /// The underlying decoder error
        source: ::std::io::Error,
    },

    // Parsing errors
    /// A line didn't have the number of fields declared in the schema.
    FieldCount {
        /// Line number, starting at 1
        line: usize,
        /// Number of columns in the schema
        expected: usize,
        /// Number of tokens found on the line
        found: usize,
    },
    /// A token couldn't be converted to a number.
    InvalidToken {
        /// Line number, starting at 1
        line: usize,
        /// Name of the column being decoded
        column: &'static str,
        /// The offending text
        token: String,
    },
    /// Error forwarded from the strum crate
    StrumError(strum::ParseError),

    /// There was an internal logic error.
    LogicError(&'static str),
}

impl Display for YomahaErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::YomahaErr::*;

        match self {
            Http(err) => write!(f, "http transport error: {}", err),
            HttpStatus { url, status } => write!(f, "HTTP error ({}): {}", status, url),
            InvalidUrl(url) => write!(f, "invalid resource url: {}", url),

            IO(err) => write!(f, "std lib io error: {}", err),

            Decompress { path, source } => write!(
                f,
                "error decompressing {}: {}",
                path.display(),
                source
            ),

            FieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, expected, found
            ),
            InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "line {}: invalid value '{}' for column {}",
                line, token, column
            ),
            StrumError(err) => write!(f, "error forwarded from strum crate: {}", err),

            LogicError(msg) => write!(f, "internal logic error: {}", msg),
        }
    }
}

impl Error for YomahaErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use crate::errors::YomahaErr::*;

        match self {
            Http(err) => Some(err),
            IO(err) => Some(err),
            Decompress { source, .. } => Some(source),
            StrumError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for YomahaErr {
    fn from(err: ::std::io::Error) -> YomahaErr {
        YomahaErr::IO(err)
    }
}

impl From<::reqwest::Error> for YomahaErr {
    fn from(err: ::reqwest::Error) -> YomahaErr {
        YomahaErr::Http(err)
    }
}

impl From<strum::ParseError> for YomahaErr {
    fn from(err: strum::ParseError) -> YomahaErr {
        YomahaErr::StrumError(err)
    }
}
