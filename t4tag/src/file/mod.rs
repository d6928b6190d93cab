// t4tag/src/file/mod.rs
//! Virtual card storage: the Capability Container and the NDEF file.

pub mod cc;
pub mod ndef_file;
pub mod slot;

pub use cc::{CapabilityContainer, build_capability_container};
pub use ndef_file::{NdefFile, set_ndef_message};
pub use slot::NdefFileSlot;
