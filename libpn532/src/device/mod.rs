// libpn532/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod poller;
pub mod session;

pub use builder::Pn532Builder;
pub use config::Pn532Config;
pub use handle::Pn532;
pub use session::Session;
