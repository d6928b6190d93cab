// t4tag/src/error.rs
//! Error type shared by the codec, the emulator and reader sessions.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Record bytes could not be decoded.
    #[error("malformed NDEF record: {0}")]
    MalformedRecord(String),

    /// Record fields could not be encoded.
    #[error("NDEF encoding error: {0}")]
    Encoding(String),

    /// Message larger than the file or tag accepts.
    #[error("NDEF message too large: max {max} bytes, got {actual}")]
    CapacityExceeded {
        /// Largest accepted size.
        max: usize,
        /// Offending size.
        actual: usize,
    },

    /// A READ BINARY range past the end of the file.
    #[error("read out of bounds: offset {offset} + length {length} exceeds file size {size}")]
    OutOfBounds {
        /// Requested start.
        offset: usize,
        /// Requested length.
        length: usize,
        /// File size.
        size: usize,
    },

    /// A fixed-size structure had the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Command APDU not valid in the current selection state.
    #[error("command does not match any recognized pattern in the current state")]
    ProtocolMismatch,

    /// Reader session failure with a user-facing message.
    #[error("tag session error: {0}")]
    Session(String),

    /// The tag holds an empty NDEF message.
    #[error("No NDEF records found")]
    NoRecords,

    /// The tag is read-only or not NDEF formatted.
    #[error("Tag is not writable.")]
    NotWritable,

    /// The session was ended before it produced an outcome.
    #[error("session invalidated: {0}")]
    Invalidated(String),

    /// The session deadline passed.
    #[error("operation timed out")]
    Timeout,

    /// `stop_emulation` was called and not undone.
    #[error("emulation is stopped")]
    EmulationStopped,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
