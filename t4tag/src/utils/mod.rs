//! Small helpers: hex formatting for APDU traces and timing defaults.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use self::timeout::*;
