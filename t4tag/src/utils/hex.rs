//! Hex helpers for APDU tracing and test fixtures.

/// Uppercase hex with a space between bytes, the way APDUs are usually
/// written down: `&[0x90, 0x00]` -> `"90 00"`.
pub fn apdu_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact lowercase hex: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse hex, ignoring any ASCII whitespace (so `"00 A4 04 00"` works).
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    hex::decode(&cleaned).map_err(|e| format!("invalid hex {:?}: {}", s, e))
}
