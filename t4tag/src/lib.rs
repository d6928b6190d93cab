// t4tag/src/lib.rs

//! t4tag
//!
//! NFC Forum Type 4 Tag emulation and NDEF tag read/write sessions.
//!
//! The emulated tag answers the SELECT / READ BINARY sequence a reader uses
//! to fetch an NDEF message; the session side reads and writes NDEF
//! messages on external tags through platform traits.
#![warn(missing_docs)]

pub mod apdu;
pub mod config;
pub mod constants;
pub mod emulator;
pub mod error;
pub mod file;
pub mod ndef;
pub(crate) mod parser;
pub mod prelude;
#[cfg(feature = "async")]
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
