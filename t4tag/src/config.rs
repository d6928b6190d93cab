// t4tag/src/config.rs
//! Emulator and reader-session configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCESS_DENIED, CC_MAX_C_APDU, CC_MAX_R_APDU, DEFAULT_LANGUAGE, DEFAULT_MESSAGE, MAX_NDEF_SIZE_LIMIT, NDEF_RECORD_ID,
};
use crate::file::CapabilityContainer;
use crate::ndef::text::MAX_LANGUAGE_CODE_LEN;
use crate::{Error, Result};

/// Settings for the emulated tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmulatorConfig {
    /// Text served before the host sets a message, and after stop.
    pub default_message: String,
    /// Language code of emulated Text records.
    pub language_code: String,
    /// Id attached to emulated records.
    pub record_id: Vec<u8>,
    /// Advertised maximum NDEF message size (at most 255).
    pub max_ndef_size: u16,
    /// CC write access byte (0xFF: no write access).
    pub write_access: u8,
    /// Advertised MLe.
    pub max_r_apdu: u16,
    /// Advertised MLc.
    pub max_c_apdu: u16,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_string(),
            language_code: DEFAULT_LANGUAGE.to_string(),
            record_id: NDEF_RECORD_ID.to_vec(),
            max_ndef_size: MAX_NDEF_SIZE_LIMIT,
            write_access: ACCESS_DENIED,
            max_r_apdu: CC_MAX_R_APDU,
            max_c_apdu: CC_MAX_C_APDU,
        }
    }
}

impl EmulatorConfig {
    /// Check the size limit, language code and record id.
    pub fn validate(&self) -> Result<()> {
        if self.max_ndef_size > MAX_NDEF_SIZE_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max_ndef_size {} exceeds {}",
                self.max_ndef_size, MAX_NDEF_SIZE_LIMIT
            )));
        }
        if !self.language_code.is_ascii() || self.language_code.len() > MAX_LANGUAGE_CODE_LEN {
            return Err(Error::InvalidConfig(format!(
                "language code {:?} must be ASCII and at most {} bytes",
                self.language_code, MAX_LANGUAGE_CODE_LEN
            )));
        }
        if self.record_id.len() > u8::MAX as usize {
            return Err(Error::InvalidConfig("record id longer than 255 bytes".into()));
        }
        Ok(())
    }

    /// Capability Container advertising these settings.
    pub fn capability_container(&self) -> CapabilityContainer {
        CapabilityContainer {
            max_r_apdu: self.max_r_apdu,
            max_c_apdu: self.max_c_apdu,
            ..CapabilityContainer::default()
        }
        .with_max_ndef_size(self.max_ndef_size)
        .with_write_access(self.write_access)
    }
}

/// Settings for initiator read/write sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Upper bound for discovery plus tag I/O.
    pub timeout: Duration,
    /// Haptic pulse emitted once a tag was read.
    pub haptic_pulse: Duration,
    /// Language code used by `begin_write_session`.
    pub language_code: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: crate::utils::default_session_timeout(),
            haptic_pulse: crate::utils::default_haptic_pulse(),
            language_code: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Replace the session timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject a zero timeout or an over-long language code.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("session timeout must be non-zero".into()));
        }
        if self.language_code.len() > MAX_LANGUAGE_CODE_LEN {
            return Err(Error::InvalidConfig(format!(
                "language code longer than {} bytes",
                MAX_LANGUAGE_CODE_LEN
            )));
        }
        Ok(())
    }
}
