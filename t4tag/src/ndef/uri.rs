// t4tag/src/ndef/uri.rs
//! RTD URI payloads: identifier code(1) + URI field.

use log::warn;

use crate::{Error, Result};

/// URI identifier codes 0x00..=0x23 from the NFC Forum URI RTD.
pub const URI_PREFIXES: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Look up the prefix for an identifier code. Reserved codes have no
/// prefix.
pub fn uri_prefix(code: u8) -> Option<&'static str> {
    URI_PREFIXES.get(code as usize).copied()
}

/// Expand a URI payload into the full URI. Reserved identifier codes fall
/// back to an empty prefix.
pub fn decode_uri_payload(payload: &[u8]) -> Result<String> {
    let (&code, suffix) = payload
        .split_first()
        .ok_or_else(|| Error::MalformedRecord("empty URI payload".into()))?;

    let prefix = uri_prefix(code).unwrap_or_else(|| {
        warn!("reserved URI identifier code {:#04x}, using no prefix", code);
        ""
    });

    let suffix = std::str::from_utf8(suffix)
        .map_err(|e| Error::MalformedRecord(format!("URI is not valid UTF-8: {}", e)))?;

    let mut uri = String::with_capacity(prefix.len() + suffix.len());
    uri.push_str(prefix);
    uri.push_str(suffix);
    Ok(uri)
}

/// Build a URI payload, abbreviating with the longest matching prefix.
pub fn encode_uri_payload(uri: &str) -> Vec<u8> {
    let (code, prefix) = URI_PREFIXES
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, p)| uri.starts_with(*p))
        .max_by_key(|(_, p)| p.len())
        .map(|(i, p)| (i as u8, *p))
        .unwrap_or((0, ""));

    let suffix = &uri.as_bytes()[prefix.len()..];
    let mut payload = Vec::with_capacity(1 + suffix.len());
    payload.push(code);
    payload.extend_from_slice(suffix);
    payload
}
