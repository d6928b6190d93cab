// t4tag/src/apdu/response.rs
//! Response APDU.

use crate::types::StatusWord;
use crate::{Error, Result};

/// Response APDU: data followed by the status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseApdu {
    /// Response data, without the status word.
    pub data: Vec<u8>,
    /// SW1 SW2.
    pub status: StatusWord,
}

impl ResponseApdu {
    /// Response with `status` and `data`.
    pub fn new<D: Into<Vec<u8>>>(status: StatusWord, data: D) -> Self {
        Self {
            data: data.into(),
            status,
        }
    }

    /// 90 00 with no data.
    pub fn success() -> Self {
        Self::new(StatusWord::SUCCESS, Vec::new())
    }

    /// 90 00 carrying `data`.
    pub fn with_data(data: &[u8]) -> Self {
        Self::new(StatusWord::SUCCESS, data)
    }

    /// 6A 82 with no data; the only failure this tag reports.
    pub fn failure() -> Self {
        Self::new(StatusWord::FILE_NOT_FOUND, Vec::new())
    }

    /// Status is 90 00.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Wire form: data || SW1 SW2.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.status.to_bytes());
        out
    }

    /// Split raw response bytes into data and status word.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let (sw2, rest) = raw.split_last().ok_or(Error::InvalidLength {
            expected: 2,
            actual: 0,
        })?;
        let (sw1, data) = rest.split_last().ok_or(Error::InvalidLength {
            expected: 2,
            actual: 1,
        })?;
        Ok(Self::new(StatusWord::from_bytes(*sw1, *sw2), data))
    }
}

impl From<ResponseApdu> for Vec<u8> {
    fn from(resp: ResponseApdu) -> Self {
        resp.to_bytes()
    }
}
