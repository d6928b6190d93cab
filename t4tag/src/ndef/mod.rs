// t4tag/src/ndef/mod.rs
//! NDEF message/record codec shared by the emulated tag and the reader
//! sessions.

pub mod message;
pub mod record;
pub mod text;
pub mod uri;

pub use message::{Records, decode_message};
pub use record::{
    NdefRecord, RTD_TEXT, RTD_URI, encode_message, encode_mime_record, encode_record,
    encode_uri_record,
};
pub use text::{TextPayload, decode_text_payload, encode_text_record};
pub use uri::decode_uri_payload;
