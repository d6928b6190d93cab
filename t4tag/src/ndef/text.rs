// t4tag/src/ndef/text.rs
//! RTD Text payloads.
//!
//! Layout: status(1) + language code(n) + text. Status bit 7 selects
//! UTF-16 (set) or UTF-8 (clear); bits 0-5 hold the language code length.

use super::record::NdefRecord;
use crate::{Error, Result};

const STATUS_UTF16: u8 = 0x80;
const LANGUAGE_LEN_MASK: u8 = 0x3F;

/// Longest language code the 6-bit length field can describe.
pub const MAX_LANGUAGE_CODE_LEN: usize = LANGUAGE_LEN_MASK as usize;

/// Decoded Text record payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload {
    /// IANA language code.
    pub language_code: String,
    /// Text, decoded from UTF-8 or UTF-16.
    pub text: String,
}

/// Build a UTF-8 Text payload.
pub fn encode_text_payload(language_code: &str, text: &str) -> Result<Vec<u8>> {
    if !language_code.is_ascii() {
        return Err(Error::Encoding(format!(
            "language code {:?} is not US-ASCII",
            language_code
        )));
    }
    let lang = language_code.as_bytes();
    if lang.len() > MAX_LANGUAGE_CODE_LEN {
        return Err(Error::Encoding(format!(
            "language code is {} bytes, at most {} allowed",
            lang.len(),
            MAX_LANGUAGE_CODE_LEN
        )));
    }

    let mut payload = Vec::with_capacity(1 + lang.len() + text.len());
    payload.push(lang.len() as u8 & LANGUAGE_LEN_MASK);
    payload.extend_from_slice(lang);
    payload.extend_from_slice(text.as_bytes());
    Ok(payload)
}

/// Encode a well-known Text record as a single-record message.
pub fn encode_text_record(language_code: &str, text: &str, id: &[u8]) -> Result<Vec<u8>> {
    NdefRecord::text(language_code, text, id)?.encode()
}

/// Parse a Text payload into its language code and text.
pub fn decode_text_payload(payload: &[u8]) -> Result<TextPayload> {
    let (&status, rest) = payload
        .split_first()
        .ok_or_else(|| Error::MalformedRecord("empty Text payload".into()))?;

    let lang_len = (status & LANGUAGE_LEN_MASK) as usize;
    if lang_len > rest.len() {
        return Err(Error::MalformedRecord(format!(
            "language code length {} exceeds {} payload bytes",
            lang_len,
            rest.len()
        )));
    }
    let (lang, body) = rest.split_at(lang_len);

    let language_code = std::str::from_utf8(lang)
        .map_err(|_| Error::MalformedRecord("language code is not ASCII".into()))?
        .to_string();

    let text = if status & STATUS_UTF16 != 0 {
        decode_utf16(body)?
    } else {
        String::from_utf8(body.to_vec())
            .map_err(|e| Error::MalformedRecord(format!("text is not valid UTF-8: {}", e)))?
    };

    Ok(TextPayload {
        language_code,
        text,
    })
}

/// UTF-16 text defaults to big-endian; a leading byte order mark overrides it.
fn decode_utf16(body: &[u8]) -> Result<String> {
    if body.len() % 2 != 0 {
        return Err(Error::MalformedRecord(
            "UTF-16 text has an odd number of bytes".into(),
        ));
    }
    let (little_endian, body) = match body {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, body),
    };
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little_endian {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|_| Error::MalformedRecord("text is not valid UTF-16".into()))
}
