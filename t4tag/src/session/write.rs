// t4tag/src/session/write.rs
//! Write session flow.

use log::{debug, info};

use super::handle::SessionHandle;
use super::read::bounded;
use super::traits::{NdefTag, TagScanner};
use crate::config::SessionConfig;
use crate::constants::WRITE_SUCCESS_MESSAGE;
use crate::ndef::{NdefRecord, encode_message};
use crate::{Error, Result};

/// Start a write session that stores `text` as a single Text record.
pub fn begin_write_session<S>(scanner: S, text: &str, config: &SessionConfig) -> Result<SessionHandle>
where
    S: TagScanner + 'static,
{
    let record = NdefRecord::text(&config.language_code, text, &[])?;
    begin_write_records(scanner, vec![record], config)
}

/// Start a write session for an arbitrary message. The message is encoded
/// up front, so encoding errors are returned before any tag is touched.
pub fn begin_write_records<S>(
    scanner: S,
    records: Vec<NdefRecord>,
    config: &SessionConfig,
) -> Result<SessionHandle>
where
    S: TagScanner + 'static,
{
    config.validate()?;
    let message = encode_message(&records)?;
    let limit = config.timeout;
    SessionHandle::spawn("write", async move {
        bounded(limit, write_flow(scanner, message)).await
    })
}

async fn write_flow<S: TagScanner>(mut scanner: S, message: Vec<u8>) -> Result<String> {
    let mut tag = scanner.next_tag().await?;
    debug!("tag discovered, writing {} bytes", message.len());
    write_tag(tag.as_mut(), &message).await
}

/// Connect, check status and capacity, then write `message` once.
pub async fn write_tag(tag: &mut dyn NdefTag, message: &[u8]) -> Result<String> {
    tag.connect()
        .await
        .map_err(|e| Error::Session(format!("Connection failed: {}", e)))?;
    let status = tag
        .query_ndef_status()
        .await
        .map_err(|e| Error::Session(format!("NDEF status query failed: {}", e)))?;

    if !status.is_writable() {
        return Err(Error::NotWritable);
    }
    if message.len() > status.capacity {
        return Err(Error::CapacityExceeded {
            max: status.capacity,
            actual: message.len(),
        });
    }

    tag.write_ndef(message)
        .await
        .map_err(|e| Error::Session(format!("Write failed: {}", e)))?;
    info!("wrote {} byte NDEF message", message.len());
    Ok(WRITE_SUCCESS_MESSAGE.to_string())
}
