// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures that can occur outside the card itself (config and asset I/O).
///
/// The game logic has no error paths: out-of-order clicks and surplus timer
/// ticks are ignored, never reported.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
