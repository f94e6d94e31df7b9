use thiserror::Error;

use crate::registry::{Family, Operation};

#[derive(Error, Debug)]
pub enum RseeError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Library error: {0}")]
    Library(String),

    #[error("Serial port error: {0}")]
    SerialPort(String),

    #[error("Function {0} not found in RseeController library")]
    FunctionNotFound(String),

    /// Registered operation whose native signature was never confirmed.
    #[error("Entry point {0} has no declared signature")]
    UndeclaredEntryPoint(&'static str),
}

/// Caller errors caught before anything reaches the driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{family} has no {operation:?} operation")]
    UnknownOperation { family: Family, operation: Operation },

    #[error("channel {channel} out of range 1..={max} for {family}")]
    ChannelOutOfRange { family: Family, channel: u8, max: u8 },

    #[error("{symbol} expects {expected} arguments, got {actual}")]
    Arity {
        symbol: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{symbol} argument {position} should be {expected}")]
    ArgumentKind {
        symbol: &'static str,
        position: usize,
        expected: &'static str,
    },

    #[error("{what} must hold exactly {expected} entries, got {actual}")]
    Length {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{symbol} is addressed by {expected}")]
    Addressing {
        symbol: &'static str,
        expected: &'static str,
    },

    #[error("handle {0} is not connected")]
    StaleHandle(String),

    #[error("handle {handle} was opened on {opened}, not {given}")]
    PortMismatch {
        handle: String,
        opened: String,
        given: String,
    },
}

/// Degraded text payload. The status code of the call is still valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("reply filled the whole buffer and was cut: {partial:?}")]
    Truncated { partial: String },

    #[error("reply is not ASCII: {lossy:?}")]
    NotAscii { lossy: String },
}

pub type RseeResult<T> = std::result::Result<T, RseeError>;
