// t4tag/src/apdu/mod.rs
//! APDU side of the emulated Type 4 Tag.

pub mod command;
pub mod processor;
pub mod response;
pub mod service;
pub mod state;

pub use command::CommandApdu;
pub use processor::Type4Session;
pub use response::ResponseApdu;
pub use service::ApduService;
pub use state::SelectionState;
