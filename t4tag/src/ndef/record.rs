// t4tag/src/ndef/record.rs
//! NDEF record model and encoder.

use crate::types::Tnf;
use crate::{Error, Result};

/// Message Begin flag
pub const FLAG_MB: u8 = 0x80;
/// Message End flag
pub const FLAG_ME: u8 = 0x40;
/// Chunk Flag
pub const FLAG_CF: u8 = 0x20;
/// Short Record flag (1-byte payload length)
pub const FLAG_SR: u8 = 0x10;
/// ID Length present flag
pub const FLAG_IL: u8 = 0x08;

/// RTD Text type
pub const RTD_TEXT: &[u8] = b"T";
/// RTD URI type
pub const RTD_URI: &[u8] = b"U";

/// A single NDEF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Type Name Format.
    pub tnf: Tnf,
    /// Type field, interpreted according to `tnf`.
    pub record_type: Vec<u8>,
    /// Optional id, empty when absent.
    pub id: Vec<u8>,
    /// Payload bytes.
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Record from raw fields.
    pub fn new<T, I, P>(tnf: Tnf, record_type: T, id: I, payload: P) -> Self
    where
        T: Into<Vec<u8>>,
        I: Into<Vec<u8>>,
        P: Into<Vec<u8>>,
    {
        Self {
            tnf,
            record_type: record_type.into(),
            id: id.into(),
            payload: payload.into(),
        }
    }

    /// Well-known Text record (RTD "T").
    pub fn text(language_code: &str, text: &str, id: &[u8]) -> Result<Self> {
        let payload = super::text::encode_text_payload(language_code, text)?;
        Ok(Self::new(Tnf::WellKnown, RTD_TEXT, id, payload))
    }

    /// Well-known URI record (RTD "U") using the shortest prefix encoding.
    pub fn uri(uri: &str, id: &[u8]) -> Self {
        Self::new(Tnf::WellKnown, RTD_URI, id, super::uri::encode_uri_payload(uri))
    }

    /// MIME media record. The type must be US-ASCII.
    pub fn mime(mime_type: &str, payload: &str, id: &[u8]) -> Result<Self> {
        if !mime_type.is_ascii() {
            return Err(Error::Encoding(format!(
                "mime type {:?} is not US-ASCII",
                mime_type
            )));
        }
        Ok(Self::new(
            Tnf::MimeMedia,
            mime_type.as_bytes(),
            id,
            payload.as_bytes(),
        ))
    }

    /// True for a well-known record whose type equals `rtd`.
    pub fn is_well_known(&self, rtd: &[u8]) -> bool {
        self.tnf == Tnf::WellKnown && self.record_type == rtd
    }

    /// Encode as a complete single-record message (MB and ME set).
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out, true, true)?;
        Ok(out)
    }

    /// Encoded size of this record in bytes.
    pub fn encoded_len(&self) -> usize {
        let payload_len_field = if self.is_short() { 1 } else { 4 };
        let id_len_field = if self.id.is_empty() { 0 } else { 1 };
        2 + payload_len_field
            + id_len_field
            + self.record_type.len()
            + self.id.len()
            + self.payload.len()
    }

    fn is_short(&self) -> bool {
        self.payload.len() <= u8::MAX as usize
    }

    /// Append the wire form of this record to `out` with the given
    /// message-begin/message-end flags.
    pub(crate) fn write_to(&self, out: &mut Vec<u8>, begin: bool, end: bool) -> Result<()> {
        let type_len = u8::try_from(self.record_type.len()).map_err(|_| {
            Error::Encoding(format!(
                "record type is {} bytes, at most 255 allowed",
                self.record_type.len()
            ))
        })?;
        let id_len = u8::try_from(self.id.len()).map_err(|_| {
            Error::Encoding(format!(
                "record id is {} bytes, at most 255 allowed",
                self.id.len()
            ))
        })?;
        let payload_len = u32::try_from(self.payload.len()).map_err(|_| {
            Error::Encoding(format!("payload of {} bytes is too large", self.payload.len()))
        })?;

        let mut header = self.tnf.as_u8();
        if begin {
            header |= FLAG_MB;
        }
        if end {
            header |= FLAG_ME;
        }
        if self.is_short() {
            header |= FLAG_SR;
        }
        if id_len > 0 {
            header |= FLAG_IL;
        }

        out.push(header);
        out.push(type_len);
        if self.is_short() {
            out.push(payload_len as u8);
        } else {
            out.extend_from_slice(&payload_len.to_be_bytes());
        }
        if id_len > 0 {
            out.push(id_len);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Encode a single-record NDEF message from its raw parts.
pub fn encode_record(tnf: Tnf, record_type: &[u8], id: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    NdefRecord::new(tnf, record_type, id, payload).encode()
}

/// Encode a MIME media record as a single-record message.
pub fn encode_mime_record(mime_type: &str, payload: &str, id: &[u8]) -> Result<Vec<u8>> {
    NdefRecord::mime(mime_type, payload, id)?.encode()
}

/// Encode a URI record as a single-record message.
pub fn encode_uri_record(uri: &str, id: &[u8]) -> Result<Vec<u8>> {
    NdefRecord::uri(uri, id).encode()
}

/// Encode several records into one message; MB goes on the first record
/// and ME on the last.
pub fn encode_message(records: &[NdefRecord]) -> Result<Vec<u8>> {
    if records.is_empty() {
        return Err(Error::Encoding("an NDEF message needs at least one record".into()));
    }
    let total = records.iter().map(NdefRecord::encoded_len).sum();
    let mut out = Vec::with_capacity(total);
    let last = records.len() - 1;
    for (i, record) in records.iter().enumerate() {
        record.write_to(&mut out, i == 0, i == last)?;
    }
    Ok(out)
}
