// t4tag/src/session/traits.rs
//! Platform seams for reader sessions.

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;
use crate::types::NdefStatus;

/// A discovered NDEF-capable tag, as seen from the reading device.
#[async_trait]
pub trait NdefTag: Send {
    /// Open a connection for status queries and writes.
    async fn connect(&mut self) -> Result<()>;

    /// Report whether the tag is writable, and how large a message it holds.
    async fn query_ndef_status(&mut self) -> Result<NdefStatus>;

    /// Raw NDEF message bytes. `None` when the tag carries no parsable
    /// NDEF data.
    async fn read_ndef(&mut self) -> Result<Option<Vec<u8>>>;

    /// Replace the tag's NDEF message.
    async fn write_ndef(&mut self, message: &[u8]) -> Result<()>;
}

/// Source of discovered tags (the platform's polling loop).
#[async_trait]
pub trait TagScanner: Send {
    /// Wait until the next tag enters the field.
    async fn next_tag(&mut self) -> Result<Box<dyn NdefTag>>;
}

/// Tactile feedback after discovery.
pub trait Haptics: Send + Sync {
    /// Vibrate for `duration`.
    fn pulse(&self, duration: Duration);
}

/// Haptics for hosts without a vibrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _duration: Duration) {}
}
