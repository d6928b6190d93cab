//! Session timing defaults.

use std::time::Duration;

/// Default time a reader session waits for a tag and its I/O to finish.
pub const DEFAULT_SESSION_TIMEOUT_MS: u64 = 60_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default session timeout as Duration.
pub fn default_session_timeout() -> Duration {
    ms(DEFAULT_SESSION_TIMEOUT_MS)
}

/// Default haptic pulse after a successful tag read.
pub fn default_haptic_pulse() -> Duration {
    ms(crate::constants::HAPTIC_PULSE_MS)
}
