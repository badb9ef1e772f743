// libpn532/src/device/builder.rs

use crate::device::config::Pn532Config;
use crate::device::handle::Pn532;
use crate::transport::Transport;
use crate::types::{BaudRate, SamMode};
use crate::{Error, Result};

/// Helper to construct a Pn532 with optional configuration.
pub struct Pn532Builder<T> {
    transport: Option<T>,
    config: Pn532Config,
}

impl<T: Transport> Default for Pn532Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Pn532Builder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: Pn532Config::default(),
        }
    }

    /// Provide the transport (e.g. MockTransport or HalTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Pn532Config) -> Self {
        self.config = config;
        self
    }

    /// Ready-wait limit per handshake step. Zero waits forever.
    pub fn handshake_timeout_ms(mut self, ms: u64) -> Self {
        self.config.handshake_timeout_ms = ms;
        self
    }

    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    pub fn byte_delay_ms(mut self, ms: u64) -> Self {
        self.config.byte_delay_ms = ms;
        self
    }

    pub fn sam(mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Self {
        self.config.sam_mode = mode;
        self.config.sam_timeout = timeout;
        self.config.sam_use_irq = use_irq;
        self
    }

    pub fn baud_rate(mut self, baud_rate: BaudRate) -> Self {
        self.config.baud_rate = baud_rate;
        self
    }

    pub fn max_targets(mut self, max_targets: u8) -> Self {
        self.config.max_targets = max_targets;
        self
    }

    /// Consume the builder and return the device handle.
    /// Requires a transport to be provided; otherwise returns NoTransport.
    pub fn build(self) -> Result<Pn532<T>> {
        if self.config.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig("poll interval must be non-zero".into()));
        }
        match self.transport {
            Some(t) => Ok(Pn532::with_config(t, self.config)),
            None => Err(Error::NoTransport),
        }
    }
}
