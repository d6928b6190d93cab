//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the command sequences a tag reader sends so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::apdu::{CommandApdu, ResponseApdu, Type4Session};
use crate::constants::{
    CC_LEN, NLEN_SIZE, SELECT_APPLICATION, SELECT_CAPABILITY_CONTAINER, SELECT_NDEF_FILE,
};
use crate::emulator::{EmulatorBuilder, HostCardEmulator, StaticAdapter};
use crate::file::{CapabilityContainer, NdefFile, NdefFileSlot};
use crate::{Error, Result};

/// Emulator on an always-available adapter, serving `text`.
#[doc(hidden)]
pub fn text_emulator(text: &str) -> Result<HostCardEmulator<StaticAdapter>> {
    let emulator = EmulatorBuilder::new()
        .with_adapter(StaticAdapter::available())
        .build()?;
    emulator.emulate_message(text)?;
    Ok(emulator)
}

/// Stand-alone session over `message` with the default CC.
#[doc(hidden)]
pub fn session_with_message(message: &[u8]) -> Result<Type4Session> {
    let file = NdefFile::new(message, CapabilityContainer::default().max_ndef_size as usize)?;
    Ok(Type4Session::new(
        CapabilityContainer::default(),
        NdefFileSlot::new(file),
    ))
}

/// SELECT the application, then the NDEF file.
#[doc(hidden)]
pub fn select_ndef(session: &mut Type4Session) -> Result<()> {
    expect_success(session.process_command(&SELECT_APPLICATION))?;
    expect_success(session.process_command(&SELECT_NDEF_FILE))?;
    Ok(())
}

/// SELECT the application, then the CC file.
#[doc(hidden)]
pub fn select_cc(session: &mut Type4Session) -> Result<()> {
    expect_success(session.process_command(&SELECT_APPLICATION))?;
    expect_success(session.process_command(&SELECT_CAPABILITY_CONTAINER))?;
    Ok(())
}

/// Send READ BINARY at `offset` for `le` bytes.
#[doc(hidden)]
pub fn read_binary(session: &mut Type4Session, offset: u16, le: u8) -> Result<ResponseApdu> {
    let raw = CommandApdu::read_binary(offset, le).to_bytes()?;
    Ok(session.process_command(&raw))
}

/// Run the full reader procedure: read the CC, then the NLEN, then the
/// message in chunks of at most MLe bytes. Returns the NDEF message.
#[doc(hidden)]
pub fn read_like_reader(session: &mut Type4Session) -> Result<Vec<u8>> {
    select_cc(session)?;
    let cc = expect_success(read_binary(session, 0, CC_LEN as u8)?)?;
    let cc = CapabilityContainer::parse(&cc)?;
    let chunk = cc.max_r_apdu.min(u8::MAX as u16) as usize;

    expect_success(session.process_command(&SELECT_NDEF_FILE))?;
    let nlen = expect_success(read_binary(session, 0, NLEN_SIZE as u8)?)?;
    let total = u16::from_be_bytes([nlen[0], nlen[1]]) as usize;

    let mut message = Vec::with_capacity(total);
    while message.len() < total {
        let len = chunk.min(total - message.len());
        let offset = (NLEN_SIZE + message.len()) as u16;
        let data = expect_success(read_binary(session, offset, len as u8)?)?;
        message.extend_from_slice(&data);
    }
    Ok(message)
}

fn expect_success(response: ResponseApdu) -> Result<Vec<u8>> {
    if response.is_success() {
        Ok(response.data)
    } else {
        Err(Error::Session(format!(
            "tag answered {}",
            response.status
        )))
    }
}
