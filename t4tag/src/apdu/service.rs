// t4tag/src/apdu/service.rs
//! Host card emulation entry point.

use crate::types::DeactivationReason;

/// Host card emulation seam: the platform hands over raw command bytes
/// and reports when the reader leaves the field.
pub trait ApduService {
    /// Process one command APDU and return the full response (data + SW).
    fn process_command_apdu(&mut self, command: &[u8]) -> Vec<u8>;

    /// The field session ended.
    fn on_deactivated(&mut self, reason: DeactivationReason);
}
