// t4tag/src/session/mod.rs
//! Reader/writer sessions against external tags.

mod completion;
pub mod describe;
pub mod handle;
pub mod mock;
pub mod read;
pub mod traits;
pub mod write;

pub use describe::{RecordDescription, describe_records};
pub use handle::{SessionHandle, SessionInvalidator};
pub use read::{begin_read_session, read_tag};
pub use traits::{Haptics, NdefTag, NoHaptics, TagScanner};
pub use write::{begin_write_records, begin_write_session, write_tag};
