// t4tag/src/apdu/processor.rs
//! Command dispatch for the emulated tag.

use log::debug;

use super::command::CommandApdu;
use super::response::ResponseApdu;
use super::service::ApduService;
use super::state::SelectionState;
use crate::constants::{
    CC_LEN, CLA_INTERINDUSTRY, INS_READ_BINARY, READ_BINARY_LEN, SELECT_APPLICATION,
    SELECT_CAPABILITY_CONTAINER, SELECT_NDEF_FILE,
};
use crate::file::{CapabilityContainer, NdefFileSlot};
use crate::types::DeactivationReason;
use crate::utils::apdu_hex;
use crate::{Error, Result};

/// Type 4 Tag command processor for one emulation session.
///
/// Owns the selection state; the NDEF file is shared through an
/// `NdefFileSlot` so the host can replace the content at any time.
#[derive(Debug)]
pub struct Type4Session {
    state: SelectionState,
    cc: [u8; CC_LEN],
    file: NdefFileSlot,
}

impl Type4Session {
    /// Fresh session in `Initial`, serving `cc` and the file in the slot.
    pub fn new(cc: CapabilityContainer, file: NdefFileSlot) -> Self {
        Self {
            state: SelectionState::Initial,
            cc: cc.to_bytes(),
            file,
        }
    }

    /// Current selection.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Handle one command APDU. Every failure is reported as 6A 82 and
    /// leaves the selection state untouched.
    pub fn process_command(&mut self, command: &[u8]) -> ResponseApdu {
        debug!("command APDU: {}", apdu_hex(command));
        let response = match self.dispatch(command) {
            Ok(response) => response,
            Err(e) => {
                debug!("{} (state {:?})", e, self.state);
                ResponseApdu::failure()
            }
        };
        debug!("response APDU: {}", apdu_hex(&response.to_bytes()));
        response
    }

    /// The reader left the field; start over from `Initial`.
    pub fn on_field_deactivated(&mut self, reason: DeactivationReason) {
        debug!("deactivated ({:?}), selection reset", reason);
        self.state = SelectionState::Initial;
    }

    fn dispatch(&mut self, command: &[u8]) -> Result<ResponseApdu> {
        if command == SELECT_APPLICATION {
            self.select(SelectionState::AppSelected);
            return Ok(ResponseApdu::success());
        }
        if self.state.is_app_selected() {
            if command == SELECT_CAPABILITY_CONTAINER {
                self.select(SelectionState::CcSelected);
                return Ok(ResponseApdu::success());
            }
            if command == SELECT_NDEF_FILE {
                self.select(SelectionState::NdefSelected);
                return Ok(ResponseApdu::success());
            }
        }
        if let [CLA_INTERINDUSTRY, INS_READ_BINARY, ..] = command {
            return self.read_binary(command);
        }
        Err(Error::ProtocolMismatch)
    }

    fn select(&mut self, next: SelectionState) {
        debug!("selection {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn read_binary(&self, command: &[u8]) -> Result<ResponseApdu> {
        if command.len() != READ_BINARY_LEN {
            return Err(Error::InvalidLength {
                expected: READ_BINARY_LEN,
                actual: command.len(),
            });
        }
        let cmd = CommandApdu::parse(command)?;
        let offset = cmd.offset() as usize;
        let length = cmd.le.unwrap_or(0) as usize;

        match self.state {
            SelectionState::CcSelected if offset == 0 && length == CC_LEN => {
                Ok(ResponseApdu::with_data(&self.cc))
            }
            SelectionState::CcSelected => Err(Error::OutOfBounds {
                offset,
                length,
                size: CC_LEN,
            }),
            SelectionState::NdefSelected => {
                // One load per command: the slice comes from a single buffer
                let file = self.file.load();
                Ok(ResponseApdu::with_data(file.read_range(offset, length)?))
            }
            SelectionState::Initial | SelectionState::AppSelected => Err(Error::ProtocolMismatch),
        }
    }
}

impl ApduService for Type4Session {
    fn process_command_apdu(&mut self, command: &[u8]) -> Vec<u8> {
        self.process_command(command).to_bytes()
    }

    fn on_deactivated(&mut self, reason: DeactivationReason) {
        self.on_field_deactivated(reason)
    }
}
