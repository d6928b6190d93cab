// t4tag/src/file/cc.rs
//! Capability Container file.

use crate::constants::{
    ACCESS_DENIED, ACCESS_GRANTED, CC_LEN, CC_MAPPING_VERSION, CC_MAX_C_APDU, CC_MAX_R_APDU,
    MAX_NDEF_SIZE_LIMIT, NDEF_FILE_CONTROL_TLV_L, NDEF_FILE_CONTROL_TLV_T,
};
use crate::parser;
use crate::types::FileId;
use crate::{Error, Result};

/// Capability Container file (E1 03).
///
/// Layout: CCLEN(2) + mapping version(1) + MLe(2) + MLc(2) + NDEF File
/// Control TLV(8) = { T=04, L=06, file id(2), max NDEF size(2), read
/// access(1), write access(1) }.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityContainer {
    /// Mapping version (major/minor nibbles).
    pub mapping_version: u8,
    /// MLe: largest R-APDU data size.
    pub max_r_apdu: u16,
    /// MLc: largest C-APDU data size.
    pub max_c_apdu: u16,
    /// NDEF file identifier.
    pub ndef_file_id: FileId,
    /// Largest NDEF file size, NLEN included.
    pub max_ndef_size: u16,
    /// Read access condition.
    pub read_access: u8,
    /// Write access condition.
    pub write_access: u8,
}

impl Default for CapabilityContainer {
    fn default() -> Self {
        Self {
            mapping_version: CC_MAPPING_VERSION,
            max_r_apdu: CC_MAX_R_APDU,
            max_c_apdu: CC_MAX_C_APDU,
            ndef_file_id: FileId::NDEF,
            max_ndef_size: MAX_NDEF_SIZE_LIMIT,
            read_access: ACCESS_GRANTED,
            write_access: ACCESS_DENIED,
        }
    }
}

impl CapabilityContainer {
    /// Override the advertised maximum NDEF size.
    pub fn with_max_ndef_size(mut self, size: u16) -> Self {
        self.max_ndef_size = size;
        self
    }

    /// Override the write access byte.
    pub fn with_write_access(mut self, access: u8) -> Self {
        self.write_access = access;
        self
    }

    /// Serialize into the 15-byte file content.
    pub fn to_bytes(&self) -> [u8; CC_LEN] {
        let cclen = (CC_LEN as u16).to_be_bytes();
        let mle = self.max_r_apdu.to_be_bytes();
        let mlc = self.max_c_apdu.to_be_bytes();
        let fid = self.ndef_file_id.to_be_bytes();
        let max = self.max_ndef_size.to_be_bytes();
        [
            cclen[0],
            cclen[1],
            self.mapping_version,
            mle[0],
            mle[1],
            mlc[0],
            mlc[1],
            NDEF_FILE_CONTROL_TLV_T,
            NDEF_FILE_CONTROL_TLV_L,
            fid[0],
            fid[1],
            max[0],
            max[1],
            self.read_access,
            self.write_access,
        ]
    }

    /// Parse CC file content as read back from a tag.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, CC_LEN)?;
        let cclen = parser::be_u16_at(data, 0)? as usize;
        if cclen < CC_LEN {
            return Err(Error::InvalidLength {
                expected: CC_LEN,
                actual: cclen,
            });
        }
        let tlv_t = parser::byte_at(data, 7)?;
        let tlv_l = parser::byte_at(data, 8)?;
        if tlv_t != NDEF_FILE_CONTROL_TLV_T || tlv_l != NDEF_FILE_CONTROL_TLV_L {
            return Err(Error::MalformedRecord(format!(
                "unexpected NDEF File Control TLV {:02X} {:02X}",
                tlv_t, tlv_l
            )));
        }
        Ok(Self {
            mapping_version: parser::byte_at(data, 2)?,
            max_r_apdu: parser::be_u16_at(data, 3)?,
            max_c_apdu: parser::be_u16_at(data, 5)?,
            ndef_file_id: FileId::new(parser::be_u16_at(data, 9)?),
            max_ndef_size: parser::be_u16_at(data, 11)?,
            read_access: parser::byte_at(data, 13)?,
            write_access: parser::byte_at(data, 14)?,
        })
    }
}

/// The Capability Container with its static default values.
pub fn build_capability_container() -> [u8; CC_LEN] {
    CapabilityContainer::default().to_bytes()
}
