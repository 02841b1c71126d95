use crate::utils::frame::Frame;
use std::error::Error;
use std::fmt;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame text is empty, too long or contains non-hex characters
    InvalidHex(String),
    /// No decoder could make sense of the frame
    UnrecognizedFrame(Frame, &'static str),
}

impl Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidHex(s) => write!(f, "Invalid hex frame '{}'", s),
            DecodeError::UnrecognizedFrame(frame, reason) => write!(
                f,
                "Unrecognized {}-bit frame {}: {}",
                frame.bit_length(),
                frame,
                reason
            ),
        }
    }
}

#[derive(Debug)]
pub enum ConsoleError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    #[cfg(feature = "serial")]
    SerialError(tokio_serial::Error),
}

impl Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> ConsoleError {
        ConsoleError::IoError(err)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> ConsoleError {
        ConsoleError::JsonError(err)
    }
}

#[cfg(feature = "serial")]
impl From<tokio_serial::Error> for ConsoleError {
    fn from(err: tokio_serial::Error) -> ConsoleError {
        ConsoleError::SerialError(err)
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::IoError(err) => write!(f, "{}", err),
            ConsoleError::JsonError(err) => write!(f, "Failed to encode JSON: {}", err),
            #[cfg(feature = "serial")]
            ConsoleError::SerialError(err) => write!(f, "{}", err),
        }
    }
}
