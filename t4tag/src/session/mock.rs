// t4tag/src/session/mock.rs
//! In-memory tags, scanner and haptics for exercising sessions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{Haptics, NdefTag, TagScanner};
use crate::types::{NdefState, NdefStatus};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct TagLog {
    connects: usize,
    written: Vec<Vec<u8>>,
}

/// Mock tag for tests. Clones share one log of connects and writes, so a
/// test can keep a clone while the session owns the boxed tag.
#[derive(Debug, Clone)]
pub struct MockTag {
    /// Answer to `query_ndef_status`.
    pub status: NdefStatus,
    /// Answer to `read_ndef`.
    pub ndef: Option<Vec<u8>>,
    /// Testing hook: make `connect` fail
    pub fail_connect: bool,
    /// Testing hook: make `write_ndef` fail
    pub fail_write: bool,
    log: Arc<Mutex<TagLog>>,
}

impl MockTag {
    /// Tag reporting `status` and holding `ndef`.
    pub fn new(status: NdefStatus, ndef: Option<Vec<u8>>) -> Self {
        Self {
            status,
            ndef,
            fail_connect: false,
            fail_write: false,
            log: Arc::default(),
        }
    }

    /// Writable tag of `capacity` bytes that holds `message`.
    pub fn writable(capacity: usize, message: Vec<u8>) -> Self {
        Self::new(NdefStatus::new(NdefState::ReadWrite, capacity), Some(message))
    }

    /// Read-only tag exactly as large as `message`.
    pub fn read_only(message: Vec<u8>) -> Self {
        let capacity = message.len();
        Self::new(NdefStatus::new(NdefState::ReadOnly, capacity), Some(message))
    }

    /// Messages written so far, oldest first.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.log().written.clone()
    }

    /// Number of `connect` calls across all clones.
    pub fn connect_count(&self) -> usize {
        self.log().connects
    }

    fn log(&self) -> std::sync::MutexGuard<'_, TagLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NdefTag for MockTag {
    async fn connect(&mut self) -> Result<()> {
        if self.fail_connect {
            return Err(Error::Session("tag connection lost".into()));
        }
        self.log().connects += 1;
        Ok(())
    }

    async fn query_ndef_status(&mut self) -> Result<NdefStatus> {
        Ok(self.status)
    }

    async fn read_ndef(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.ndef.clone())
    }

    async fn write_ndef(&mut self, message: &[u8]) -> Result<()> {
        if self.fail_write {
            return Err(Error::Session("tag rejected the write".into()));
        }
        self.log().written.push(message.to_vec());
        self.ndef = Some(message.to_vec());
        Ok(())
    }
}

/// Scanner yielding queued tags. Once the queue is empty `next_tag`
/// waits forever, like a field with no tag in it.
#[derive(Default)]
pub struct MockScanner {
    tags: VecDeque<Box<dyn NdefTag>>,
    /// Delay before each discovery
    pub discovery_delay: Option<Duration>,
}

impl MockScanner {
    /// Scanner with an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `tag` for discovery.
    pub fn with_tag<T: NdefTag + 'static>(mut self, tag: T) -> Self {
        self.push_tag(tag);
        self
    }

    /// Queue `tag` for discovery.
    pub fn push_tag<T: NdefTag + 'static>(&mut self, tag: T) {
        self.tags.push_back(Box::new(tag));
    }
}

#[async_trait]
impl TagScanner for MockScanner {
    async fn next_tag(&mut self) -> Result<Box<dyn NdefTag>> {
        if let Some(delay) = self.discovery_delay {
            tokio::time::sleep(delay).await;
        }
        match self.tags.pop_front() {
            Some(tag) => Ok(tag),
            None => std::future::pending().await,
        }
    }
}

/// Records every requested pulse.
#[derive(Debug, Clone, Default)]
pub struct MockHaptics {
    pulses: Arc<Mutex<Vec<Duration>>>,
}

impl MockHaptics {
    /// No pulses recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pulses requested so far.
    pub fn pulses(&self) -> Vec<Duration> {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Haptics for MockHaptics {
    fn pulse(&self, duration: Duration) {
        self.pulses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }
}
