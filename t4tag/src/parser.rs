// t4tag/src/parser.rs
//! Bounds-checked readers shared by the NDEF codec, the APDU command
//! parser and the Capability Container parser.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx.saturating_add(1))?;
    Ok(data[idx])
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

/// Read a big-endian u32 at given index, with bounds checking.
pub fn be_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 4)?;
    Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
}

/// Return a subslice with bounds checking. `idx + len` overflowing is
/// reported as a length error rather than wrapping.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.checked_add(len).ok_or(Error::InvalidLength {
        expected: usize::MAX,
        actual: data.len(),
    })?;
    ensure_len(data, end)?;
    Ok(&data[idx..end])
}
