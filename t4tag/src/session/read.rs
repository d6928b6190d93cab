// t4tag/src/session/read.rs
//! Read session flow.

use std::time::Duration;

use log::{debug, info};

use super::describe::describe_records;
use super::handle::SessionHandle;
use super::traits::{Haptics, NdefTag, TagScanner};
use crate::config::SessionConfig;
use crate::ndef::decode_message;
use crate::{Error, Result};

/// Start a read session: wait for one tag, read its NDEF message and
/// report a summary of its records. The session ends after the first tag.
pub fn begin_read_session<S, H>(scanner: S, haptics: H, config: &SessionConfig) -> Result<SessionHandle>
where
    S: TagScanner + 'static,
    H: Haptics + 'static,
{
    config.validate()?;
    let limit = config.timeout;
    let pulse = config.haptic_pulse;
    SessionHandle::spawn("read", async move {
        bounded(limit, read_flow(scanner, haptics, pulse)).await
    })
}

async fn read_flow<S: TagScanner, H: Haptics>(
    mut scanner: S,
    haptics: H,
    pulse: Duration,
) -> Result<String> {
    let mut tag = scanner.next_tag().await?;
    debug!("tag discovered");
    let outcome = read_tag(tag.as_mut()).await;
    haptics.pulse(pulse);
    outcome
}

/// Read and describe the message of an already discovered tag.
pub async fn read_tag(tag: &mut dyn NdefTag) -> Result<String> {
    let bytes = tag
        .read_ndef()
        .await?
        .ok_or_else(|| Error::Session("There was an error in NDEF data".into()))?;
    let records = decode_message(&bytes)?;
    if records.is_empty() {
        return Err(Error::NoRecords);
    }
    info!("read {} NDEF record(s)", records.len());
    Ok(describe_records(&records))
}

/// Bound `flow` by `limit`.
pub(crate) async fn bounded<F>(limit: Duration, flow: F) -> Result<String>
where
    F: std::future::Future<Output = Result<String>>,
{
    tokio::time::timeout(limit, flow)
        .await
        .map_err(|_| Error::Timeout)?
}
