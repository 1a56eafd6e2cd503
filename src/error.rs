// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Application-wide error type.
///
/// Variants carry a human-readable description. The only runtime failure
/// surfaces are startup asset decoding and configuration IO, both of which
/// degrade gracefully instead of aborting.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Svg(String),
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "IO error: {msg}"),
            Error::Image(msg) => write!(f, "image error: {msg}"),
            Error::Svg(msg) => write!(f, "SVG error: {msg}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
