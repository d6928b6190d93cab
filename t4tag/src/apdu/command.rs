// t4tag/src/apdu/command.rs
//! Short command APDU parsing and building.

use crate::parser;
use crate::{Error, Result};

/// Parsed short command APDU.
///
/// Cases: 1 = header, 2 = header + Le, 3 = header + Lc + data,
/// 4 = header + Lc + data + Le.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandApdu {
    /// Class byte.
    pub cla: u8,
    /// Instruction byte.
    pub ins: u8,
    /// Parameter 1.
    pub p1: u8,
    /// Parameter 2.
    pub p2: u8,
    /// Command data (empty unless Lc is present).
    pub data: Vec<u8>,
    /// Expected response length.
    pub le: Option<u8>,
}

impl CommandApdu {
    /// Command without Le.
    pub fn new<D: Into<Vec<u8>>>(cla: u8, ins: u8, p1: u8, p2: u8, data: D) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: data.into(),
            le: None,
        }
    }

    /// Set Le.
    pub fn expect(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// READ BINARY with a 15-bit offset (P1 bit 8 must stay clear).
    pub fn read_binary(offset: u16, le: u8) -> Self {
        let [p1, p2] = offset.to_be_bytes();
        Self::new(
            crate::constants::CLA_INTERINDUSTRY,
            crate::constants::INS_READ_BINARY,
            p1,
            p2,
            Vec::new(),
        )
        .expect(le)
    }

    /// Parse raw command bytes.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        parser::ensure_len(raw, 4)?;
        let mut cmd = Self::new(raw[0], raw[1], raw[2], raw[3], Vec::new());

        let body = &raw[4..];
        match body.len() {
            0 => {}
            1 => cmd.le = Some(body[0]),
            _ => {
                let lc = body[0] as usize;
                let data = parser::slice_at(body, 1, lc)?;
                cmd.data = data.to_vec();
                match body.len() - 1 - lc {
                    0 => {}
                    1 => cmd.le = Some(body[1 + lc]),
                    _ => {
                        return Err(Error::InvalidLength {
                            expected: 4 + 1 + lc + 1,
                            actual: raw.len(),
                        });
                    }
                }
            }
        }
        Ok(cmd)
    }

    /// READ BINARY offset: (P1 << 8) | P2.
    pub fn offset(&self) -> u16 {
        u16::from_be_bytes([self.p1, self.p2])
    }

    /// Serialize into raw command bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = vec![self.cla, self.ins, self.p1, self.p2];
        if !self.data.is_empty() {
            let lc = u8::try_from(self.data.len()).map_err(|_| Error::InvalidLength {
                expected: u8::MAX as usize,
                actual: self.data.len(),
            })?;
            out.push(lc);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        Ok(out)
    }
}
