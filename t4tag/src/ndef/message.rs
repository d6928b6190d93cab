// t4tag/src/ndef/message.rs
//! NDEF message decoding.

use super::record::{FLAG_CF, FLAG_IL, FLAG_ME, FLAG_SR, NdefRecord};
use crate::parser;
use crate::types::Tnf;
use crate::{Error, Result};

/// Lazy iterator over the records of an NDEF message held in a fixed
/// buffer. A clone taken before advancing walks the same buffer again
/// independently.
///
/// Iteration stops after the record carrying the ME flag or at the end of
/// the buffer. After the first error the iterator is fused.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    buf: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> Records<'a> {
    /// Iterate from the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            done: false,
        }
    }

    /// Byte offset of the next record to decode.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn field(&self, at: usize, len: usize, what: &str) -> Result<&'a [u8]> {
        parser::slice_at(self.buf, at, len).map_err(|_| {
            Error::MalformedRecord(format!(
                "declared {} length {} exceeds {} remaining bytes",
                what,
                len,
                self.buf.len().saturating_sub(at)
            ))
        })
    }

    fn header_byte(&self, at: usize, what: &str) -> Result<u8> {
        parser::byte_at(self.buf, at)
            .map_err(|_| Error::MalformedRecord(format!("record truncated before {}", what)))
    }

    /// Decode the record at the current position. Returns the record and
    /// whether it carried the ME flag.
    fn decode_next(&mut self) -> Result<(NdefRecord, bool)> {
        let mut at = self.pos;
        let header = self.header_byte(at, "header")?;
        at += 1;

        if header & FLAG_CF != 0 {
            return Err(Error::MalformedRecord(
                "chunked records are not supported".into(),
            ));
        }

        let type_len = self.header_byte(at, "type length")? as usize;
        at += 1;

        let payload_len = if header & FLAG_SR != 0 {
            let len = self.header_byte(at, "payload length")? as usize;
            at += 1;
            len
        } else {
            let len = parser::be_u32_at(self.buf, at).map_err(|_| {
                Error::MalformedRecord("record truncated before payload length".into())
            })? as usize;
            at += 4;
            len
        };

        let id_len = if header & FLAG_IL != 0 {
            let len = self.header_byte(at, "id length")? as usize;
            at += 1;
            len
        } else {
            0
        };

        let record_type = self.field(at, type_len, "type")?;
        at += type_len;
        let id = self.field(at, id_len, "id")?;
        at += id_len;
        let payload = self.field(at, payload_len, "payload")?;
        at += payload_len;

        self.pos = at;
        let record = NdefRecord::new(Tnf::from_header(header), record_type, id, payload);
        Ok((record, header & FLAG_ME != 0))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<NdefRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.buf.len() {
            return None;
        }
        match self.decode_next() {
            Ok((record, last)) => {
                self.done = last;
                Some(Ok(record))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Records<'_> {}

impl NdefRecord {
    /// Iterate over the records contained in `message`.
    pub fn iter(message: &[u8]) -> Records<'_> {
        Records::new(message)
    }
}

/// Decode every record of an NDEF message. An empty buffer yields an
/// empty list.
pub fn decode_message(bytes: &[u8]) -> Result<Vec<NdefRecord>> {
    Records::new(bytes).collect()
}
