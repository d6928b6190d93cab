// t4tag/src/prelude.rs
//! Commonly used types and functions.

pub use crate::apdu::{ApduService, CommandApdu, ResponseApdu, SelectionState, Type4Session};
pub use crate::config::{EmulatorConfig, SessionConfig};
pub use crate::emulator::{EmulatorBuilder, HostCardEmulator, NfcAdapter, StaticAdapter};
pub use crate::file::{CapabilityContainer, NdefFile, NdefFileSlot};
pub use crate::ndef::{NdefRecord, decode_message, encode_message};
pub use crate::{
    DeactivationReason, Error, FileId, NdefState, NdefStatus, Result, StatusWord, Tnf,
};

#[cfg(feature = "async")]
pub use crate::session::{
    Haptics, NdefTag, SessionHandle, SessionInvalidator, TagScanner, begin_read_session, begin_write_session,
};

// Re-export small utilities for convenience
pub use crate::utils::{apdu_hex, bytes_to_hex, ms, parse_hex};
