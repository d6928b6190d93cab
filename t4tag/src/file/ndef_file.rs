// t4tag/src/file/ndef_file.rs
//! NLEN-prefixed NDEF file content.

use std::sync::Arc;

use crate::constants::NLEN_SIZE;
use crate::{Error, Result};

/// NDEF file (E1 04): NLEN(2, big-endian) + NDEF message.
///
/// The whole file is one immutable buffer; replacing the content means
/// building a new `NdefFile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefFile {
    bytes: Arc<[u8]>,
}

impl NdefFile {
    /// Wrap `message` with its length prefix. Fails when the message is
    /// larger than `max_ndef_size`.
    pub fn new(message: &[u8], max_ndef_size: usize) -> Result<Self> {
        if message.len() > max_ndef_size {
            return Err(Error::CapacityExceeded {
                max: max_ndef_size,
                actual: message.len(),
            });
        }
        // max_ndef_size never exceeds u16 (it comes from the CC)
        let nlen = u16::try_from(message.len()).map_err(|_| Error::CapacityExceeded {
            max: u16::MAX as usize,
            actual: message.len(),
        })?;

        let mut bytes = Vec::with_capacity(NLEN_SIZE + message.len());
        bytes.extend_from_slice(&nlen.to_be_bytes());
        bytes.extend_from_slice(message);
        Ok(Self {
            bytes: bytes.into(),
        })
    }

    /// Whole file content including the length prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total file size including the length prefix.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// NLEN is zero.
    pub fn is_empty(&self) -> bool {
        self.message().is_empty()
    }

    /// Value of the NLEN field.
    pub fn message_len(&self) -> usize {
        u16::from_be_bytes([self.bytes[0], self.bytes[1]]) as usize
    }

    /// The NDEF message without its length prefix.
    pub fn message(&self) -> &[u8] {
        &self.bytes[NLEN_SIZE..]
    }

    /// Exact slice `offset..offset + length` of the file.
    pub fn read_range(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let out_of_bounds = Error::OutOfBounds {
            offset,
            length,
            size: self.bytes.len(),
        };
        match offset.checked_add(length) {
            Some(end) if end <= self.bytes.len() => Ok(&self.bytes[offset..end]),
            _ => Err(out_of_bounds),
        }
    }
}

/// Build the NDEF file for `message`, enforcing `max_ndef_size`.
pub fn set_ndef_message(message: &[u8], max_ndef_size: usize) -> Result<NdefFile> {
    NdefFile::new(message, max_ndef_size)
}
