// libpn532/src/utils/mod.rs

//! Small helpers shared across the crate: hex rendering for logs and
//! fixtures, and the handshake timing defaults.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
