// libpn532/src/transport/mock.rs

use std::collections::VecDeque;

use crate::constants::{
    PN532_ACK_FRAME, PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE, PN532_SPI_READY, PN532_SPI_STATREAD,
};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It behaves like a PN532 on the SPI bus:
/// the first byte clocked in each chip-select session is the SPI op, the
/// rest are frame bytes (DATAWRITE), a status poll (STATREAD) or a reply
/// read (DATAREAD). Written frames are recorded and replies are taken from
/// a queue.
#[derive(Debug)]
pub struct MockTransport {
    /// Frames written with DATAWRITE, one entry per chip-select session.
    pub sent: Vec<Vec<u8>>,
    /// Bytes returned to DATAREAD sessions, consumed in order.
    pub reads: VecDeque<u8>,
    /// Status bytes returned to STATREAD sessions, consumed in order.
    pub statuses: VecDeque<u8>,
    /// Status returned once `statuses` is drained.
    pub idle_status: u8,
    /// Every `sleep_ms` argument, in call order.
    pub sleeps: Vec<u64>,
    /// Number of `configure` calls.
    pub configured: usize,
    /// Number of STATREAD sessions seen.
    pub status_polls: usize,
    /// Total `transfer` calls.
    pub transfers: usize,
    /// Chip-select asserted while already asserted.
    pub select_violations: usize,
    /// Testing hook: number of subsequent transfers that fail with Bus.
    pub transfer_failures: usize,
    selected: bool,
    op: Option<u8>,
    current: Vec<u8>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            reads: VecDeque::new(),
            statuses: VecDeque::new(),
            idle_status: PN532_SPI_READY,
            sleeps: Vec::new(),
            configured: 0,
            status_polls: 0,
            transfers: 0,
            select_violations: 0,
            transfer_failures: 0,
            selected: false,
            op: None,
            current: Vec::new(),
        }
    }

    /// A chip that never reports ready.
    pub fn never_ready() -> Self {
        let mut m = Self::new();
        m.idle_status = 0x00;
        m
    }

    /// Set how many subsequent transfers should fail (for tests).
    pub fn set_transfer_failures(&mut self, n: usize) {
        self.transfer_failures = n;
    }

    pub fn push_status(&mut self, status: u8) {
        self.statuses.push_back(status);
    }

    /// Queue `n` not-ready status bytes.
    pub fn push_busy(&mut self, n: usize) {
        self.statuses.extend(std::iter::repeat_n(0x00, n));
    }

    pub fn push_read(&mut self, bytes: &[u8]) {
        self.reads.extend(bytes.iter().copied());
    }

    pub fn push_ack(&mut self) {
        self.push_read(&PN532_ACK_FRAME);
    }

    /// Queue an ACK followed by the raw reply bytes of one command.
    pub fn push_reply(&mut self, reply: &[u8]) {
        self.push_ack();
        self.push_read(reply);
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.sent.last().map(Vec::as_slice)
    }

    /// Decode the last written frame. Fails if nothing was written or the
    /// frame is malformed.
    pub fn last_command(&self) -> Result<Frame> {
        let raw = self
            .last_frame()
            .ok_or_else(|| Error::FrameFormat("no frame written".into()))?;
        Frame::decode(raw)
    }

    pub fn total_sleep_ms(&self) -> u64 {
        self.sleeps.iter().sum()
    }

    /// True once any primitive has been called.
    pub fn touched(&self) -> bool {
        self.transfers > 0 || self.configured > 0 || !self.sleeps.is_empty()
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        self.transfers += 1;
        if !self.selected {
            return Err(Error::Bus("transfer without chip select".into()));
        }
        if self.transfer_failures > 0 {
            self.transfer_failures -= 1;
            return Err(Error::Bus("simulated transfer failure".into()));
        }

        let Some(op) = self.op else {
            if byte == PN532_SPI_STATREAD {
                self.status_polls += 1;
            }
            self.op = Some(byte);
            return Ok(0x00);
        };

        match op {
            PN532_SPI_DATAWRITE => {
                self.current.push(byte);
                Ok(0x00)
            }
            PN532_SPI_STATREAD => Ok(self.statuses.pop_front().unwrap_or(self.idle_status)),
            PN532_SPI_DATAREAD => Ok(self.reads.pop_front().unwrap_or(0x00)),
            other => Err(Error::Bus(format!("unknown spi op {:#04x}", other))),
        }
    }

    fn set_chip_select(&mut self, asserted: bool) -> Result<()> {
        if asserted {
            if self.selected {
                self.select_violations += 1;
            }
            self.op = None;
            self.current.clear();
        } else if self.op == Some(PN532_SPI_DATAWRITE) {
            self.sent.push(std::mem::take(&mut self.current));
        }
        self.selected = asserted;
        Ok(())
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.sleeps.push(ms);
    }

    fn configure(&mut self) -> Result<()> {
        self.configured += 1;
        Ok(())
    }
}
