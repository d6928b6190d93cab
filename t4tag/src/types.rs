// t4tag/src/types.rs
//! Shared value types: TNF, status words, file ids and tag status.

use derive_more::{Display, From};

/// Type Name Format: the 3-bit classification of an NDEF record's type field.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tnf {
    /// No type, id or payload.
    Empty = 0x00,
    /// NFC Forum well-known type (`T`, `U`, ...).
    WellKnown = 0x01,
    /// RFC 2046 media type.
    MimeMedia = 0x02,
    /// Absolute URI as the type.
    AbsoluteUri = 0x03,
    /// NFC Forum external type.
    ExternalType = 0x04,
    /// Unknown payload type.
    Unknown = 0x05,
    /// Continuation chunk of a chunked record.
    Unchanged = 0x06,
    /// Reserved value 7.
    Reserved = 0x07,
}

impl Tnf {
    /// Decode the TNF from the low 3 bits of a record header byte.
    pub fn from_header(header: u8) -> Self {
        match header & 0x07 {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MimeMedia,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::ExternalType,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }

    /// Raw 3-bit value.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Status word (SW1 SW2) of a response APDU
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// 90 00: normal processing
    pub const SUCCESS: Self = Self(0x9000);
    /// 6A 82: file or application not found. Used as the only failure code.
    pub const FILE_NOT_FOUND: Self = Self(0x6A82);

    /// Wrap a raw status word.
    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    /// Build from SW1 and SW2.
    pub fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(u16::from_be_bytes([sw1, sw2]))
    }

    /// Raw status word.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// SW1 SW2 as sent on the wire.
    pub fn to_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Whether this is 90 00.
    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// Elementary file identifier (u16)
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04X}", _0)]
pub struct FileId(u16);

impl FileId {
    /// E1 03
    pub const CAPABILITY_CONTAINER: Self = Self(crate::constants::CC_FILE_ID);
    /// E1 04
    pub const NDEF: Self = Self(crate::constants::NDEF_FILE_ID);

    /// Wrap a raw file id.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw file id.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Big-endian bytes, as found in SELECT data and the CC.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Why the reader left the field. Hosts report link loss or an explicit
/// deselect; other platform codes are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeactivationReason {
    /// The RF link was lost.
    LinkLoss,
    /// The reader selected another application.
    Deselected,
    /// Unrecognized platform code.
    Other(i32),
}

impl From<i32> for DeactivationReason {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::LinkLoss,
            1 => Self::Deselected,
            other => Self::Other(other),
        }
    }
}

/// NDEF availability reported by a tag during a write session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NdefState {
    /// The tag is not NDEF formatted.
    NotSupported,
    /// NDEF readable and writable.
    ReadWrite,
    /// NDEF readable only.
    ReadOnly,
}

/// NDEF status and capacity (in bytes) of a discovered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdefStatus {
    /// Reported availability.
    pub state: NdefState,
    /// Maximum message size in bytes.
    pub capacity: usize,
}

impl NdefStatus {
    /// Status with the given state and capacity.
    pub fn new(state: NdefState, capacity: usize) -> Self {
        Self { state, capacity }
    }

    /// Only `ReadWrite` tags accept a message.
    pub fn is_writable(&self) -> bool {
        self.state == NdefState::ReadWrite
    }
}
