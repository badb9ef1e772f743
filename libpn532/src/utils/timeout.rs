// libpn532/src/utils/timeout.rs

//! Timing defaults for the SPI handshake.

/// Default time to wait for the chip to report ready, in milliseconds.
/// Zero means wait forever.
pub const DEFAULT_HANDSHAKE_TIMEOUT_MS: u64 = 1000;

/// Sleep between two status polls.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Delay after asserting chip-select before the first byte.
pub const SETTLE_DELAY_MS: u64 = 2;

/// Delay before clocking each byte of a reply out of the chip.
pub const BYTE_DELAY_MS: u64 = 1;

/// Upper bound on the time `wait_ready` spends sleeping before it gives
/// up: whole poll intervals until the accumulated wait exceeds `timeout_ms`.
/// Returns `None` for an unbounded wait.
pub fn max_polling_sleep_ms(timeout_ms: u64, interval_ms: u64) -> Option<u64> {
    if timeout_ms == 0 || interval_ms == 0 {
        return None;
    }
    Some(timeout_ms / interval_ms * interval_ms)
}
