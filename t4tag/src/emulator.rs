// t4tag/src/emulator.rs
//! Host card emulator facade: adapter checks, message control, sessions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::apdu::Type4Session;
use crate::config::{EmulatorConfig, SessionConfig};
use crate::file::{CapabilityContainer, NdefFile, NdefFileSlot};
use crate::ndef::NdefRecord;
use crate::{Error, Result};

#[cfg(feature = "async")]
use crate::session::{self, Haptics, SessionHandle, TagScanner};

/// Host NFC controller capabilities.
pub trait NfcAdapter {
    /// NFC is switched on.
    fn is_enabled(&self) -> bool;

    /// The controller can route tag reader commands to the host.
    fn supports_host_card_emulation(&self) -> bool;
}

/// Helper to construct a `HostCardEmulator`.
pub struct EmulatorBuilder<A> {
    adapter: Option<A>,
    config: EmulatorConfig,
    session_config: SessionConfig,
}

impl<A: NfcAdapter> Default for EmulatorBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: NfcAdapter> EmulatorBuilder<A> {
    /// Builder with default configuration and no adapter.
    pub fn new() -> Self {
        Self {
            adapter: None,
            config: EmulatorConfig::default(),
            session_config: SessionConfig::default(),
        }
    }

    /// Host NFC adapter (required).
    pub fn with_adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Tag configuration.
    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Reader session configuration.
    pub fn with_session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Validate the configuration and build the emulator. It starts out
    /// emulating the default message.
    pub fn build(self) -> Result<HostCardEmulator<A>> {
        let adapter = self
            .adapter
            .ok_or_else(|| Error::InvalidConfig("no NFC adapter provided".into()))?;
        self.config.validate()?;
        self.session_config.validate()?;

        let cc = self.config.capability_container();
        let default_file = text_file(&self.config, &self.config.default_message)?;
        Ok(HostCardEmulator {
            adapter,
            slot: NdefFileSlot::new(default_file.clone()),
            default_file,
            cc,
            config: self.config,
            session_config: self.session_config,
            running: AtomicBool::new(true),
        })
    }
}

fn text_file(config: &EmulatorConfig, text: &str) -> Result<NdefFile> {
    let message = NdefRecord::text(&config.language_code, text, &config.record_id)?.encode()?;
    NdefFile::new(&message, config.max_ndef_size as usize)
}

/// Emulated Type 4 Tag plus the host-facing controls around it.
///
/// All `Type4Session`s opened from one emulator share its NDEF file, so a
/// message set here is served to the next READ BINARY.
pub struct HostCardEmulator<A> {
    adapter: A,
    config: EmulatorConfig,
    session_config: SessionConfig,
    cc: CapabilityContainer,
    default_file: NdefFile,
    slot: NdefFileSlot,
    running: AtomicBool,
}

impl<A: NfcAdapter> HostCardEmulator<A> {
    /// Serve `text` as a Text record, starting emulation if stopped.
    pub fn emulate_message(&self, text: &str) -> Result<()> {
        let file = text_file(&self.config, text)?;
        self.install(file);
        Ok(())
    }

    /// Serve a MIME media record.
    pub fn emulate_mime(&self, mime_type: &str, content: &str) -> Result<()> {
        let record = NdefRecord::mime(mime_type, content, &self.config.record_id)?;
        self.emulate_records(&[record])
    }

    /// Serve an arbitrary message.
    pub fn emulate_records(&self, records: &[NdefRecord]) -> Result<()> {
        let message = crate::ndef::encode_message(records)?;
        let file = NdefFile::new(&message, self.config.max_ndef_size as usize)?;
        self.install(file);
        Ok(())
    }

    fn install(&self, file: NdefFile) {
        let len = file.message_len();
        self.slot.replace(file);
        info!("emulating {} byte NDEF message", len);
        self.start_emulation();
    }

    /// Resume answering readers with the current file.
    pub fn start_emulation(&self) {
        if !self.running.swap(true, Ordering::SeqCst) {
            info!("emulation started");
        }
    }

    /// Stop emulating and restore the default message.
    pub fn stop_emulation(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.slot.replace(self.default_file.clone());
        info!("emulation stopped, default message restored");
    }

    /// Whether `open_session` currently succeeds.
    pub fn is_emulating(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// NFC is switched on.
    pub fn is_field_enabled(&self) -> bool {
        self.adapter.is_enabled()
    }

    /// NFC is on and commands can be routed to the host.
    pub fn is_emulation_supported(&self) -> bool {
        self.adapter.is_enabled() && self.adapter.supports_host_card_emulation()
    }

    /// Processor for one field activation.
    pub fn open_session(&self) -> Result<Type4Session> {
        if !self.is_emulating() {
            return Err(Error::EmulationStopped);
        }
        Ok(Type4Session::new(self.cc, self.slot.clone()))
    }

    /// The NDEF file currently served.
    pub fn current_file(&self) -> Arc<NdefFile> {
        self.slot.load()
    }

    /// The CC served to readers.
    pub fn capability_container(&self) -> &CapabilityContainer {
        &self.cc
    }

    /// Tag configuration in use.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// The host adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }
}

#[cfg(feature = "async")]
impl<A: NfcAdapter> HostCardEmulator<A> {
    fn ensure_field_enabled(&self) -> Result<()> {
        if self.is_field_enabled() {
            Ok(())
        } else {
            Err(Error::Session("You need to enable NFC".into()))
        }
    }

    /// Read the next tag that enters the field.
    pub fn begin_read_session<S, H>(&self, scanner: S, haptics: H) -> Result<SessionHandle>
    where
        S: TagScanner + 'static,
        H: Haptics + 'static,
    {
        self.ensure_field_enabled()?;
        session::begin_read_session(scanner, haptics, &self.session_config)
    }

    /// Write `text` to the next tag that enters the field.
    pub fn begin_write_session<S>(&self, scanner: S, text: &str) -> Result<SessionHandle>
    where
        S: TagScanner + 'static,
    {
        self.ensure_field_enabled()?;
        session::begin_write_session(scanner, text, &self.session_config)
    }
}

/// Adapter with fixed capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAdapter {
    /// Reported by `is_enabled`.
    pub enabled: bool,
    /// Reported by `supports_host_card_emulation`.
    pub host_card_emulation: bool,
}

impl StaticAdapter {
    /// Enabled and capable.
    pub fn available() -> Self {
        Self {
            enabled: true,
            host_card_emulation: true,
        }
    }
}

impl NfcAdapter for StaticAdapter {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn supports_host_card_emulation(&self) -> bool {
        self.host_card_emulation
    }
}
