// t4tag/src/constants.rs
//! Protocol constants of the NFC Forum Type 4 Tag platform.

/// NDEF Tag Application AID: D2 76 00 00 85 01 01
pub const NDEF_TAG_AID: [u8; 7] = [0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// SELECT by name of the NDEF Tag Application (with Le = 0x00)
pub const SELECT_APPLICATION: [u8; 13] = [
    0x00, 0xA4, 0x04, 0x00, 0x07, 0xD2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01, 0x00,
];

/// SELECT by file id of the Capability Container (E1 03)
pub const SELECT_CAPABILITY_CONTAINER: [u8; 7] = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x03];

/// SELECT by file id of the NDEF file (E1 04)
pub const SELECT_NDEF_FILE: [u8; 7] = [0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x04];

/// Interindustry class byte
pub const CLA_INTERINDUSTRY: u8 = 0x00;

/// READ BINARY instruction
pub const INS_READ_BINARY: u8 = 0xB0;

/// READ BINARY short header: CLA INS P1 P2 Le
pub const READ_BINARY_LEN: usize = 5;

/// Capability Container file identifier
pub const CC_FILE_ID: u16 = 0xE103;

/// NDEF file identifier
pub const NDEF_FILE_ID: u16 = 0xE104;

/// Capability Container length in bytes
pub const CC_LEN: usize = 15;

/// Mapping version 2.0
pub const CC_MAPPING_VERSION: u8 = 0x20;

/// Maximum R-APDU data size advertised in the CC
pub const CC_MAX_R_APDU: u16 = 0x003B;

/// Maximum C-APDU data size advertised in the CC
pub const CC_MAX_C_APDU: u16 = 0x0034;

/// NDEF File Control TLV tag
pub const NDEF_FILE_CONTROL_TLV_T: u8 = 0x04;
/// NDEF File Control TLV length
pub const NDEF_FILE_CONTROL_TLV_L: u8 = 0x06;

/// Read access condition: granted without any security
pub const ACCESS_GRANTED: u8 = 0x00;

/// Write access condition: no write access
pub const ACCESS_DENIED: u8 = 0xFF;

/// Upper bound for the advertised maximum NDEF size. Keeping the message
/// at or below 255 bytes keeps the short-record length fields valid.
pub const MAX_NDEF_SIZE_LIMIT: u16 = 0x00FF;

/// NDEF file length prefix (NLEN) size
pub const NLEN_SIZE: usize = 2;

/// Default emulated message text
pub const DEFAULT_MESSAGE: &str = "This is the default message.";

/// Default language code of emulated Text records
pub const DEFAULT_LANGUAGE: &str = "en";

/// Record id attached to emulated records
pub const NDEF_RECORD_ID: [u8; 2] = [0xE1, 0x04];

/// Description reported by a successful write session
pub const WRITE_SUCCESS_MESSAGE: &str = "Message written successfully.";

/// Haptic pulse emitted after a tag was read
pub const HAPTIC_PULSE_MS: u64 = 150;
