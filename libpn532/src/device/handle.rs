// libpn532/src/device/handle.rs

use log::{debug, warn};

use crate::constants::{
    PN532_ACK_FRAME, PN532_PACKET_BUFFER_SIZE, PN532_P2P_CHUNK_LEN, PN532_SPI_DATAREAD,
    PN532_SPI_DATAWRITE,
};
use crate::device::config::Pn532Config;
use crate::device::poller;
use crate::device::session::Session;
use crate::protocol::responses::{
    decode_exchange_status, decode_firmware_version, decode_in_jump_for_dep,
    decode_in_list_passive_target, decode_initiator_exchange, decode_read_block,
    decode_sam_configuration, decode_tg_get_data, decode_tg_init_as_target, decode_tg_set_data,
};
use crate::protocol::{Command, Frame, Response, TargetModeParams, codec};
use crate::transport::Transport;
use crate::types::{
    BlockData, DepBaudRate, FirmwareVersion, KeyType, PassiveTarget, SamMode, TagFamily, TargetId,
};
use crate::utils::HexDump;
use crate::{Error, Result};

/// Driver handle for one PN532 on an SPI bus.
///
/// The handle owns its transport and a reply buffer. Tag memory operations
/// need a session, created by [`Pn532::select_tag_family`]; before that
/// they fail with [`Error::NotConfigured`] without touching the bus.
pub struct Pn532<T> {
    transport: T,
    config: Pn532Config,
    session: Option<Session>,
    buffer: [u8; PN532_PACKET_BUFFER_SIZE],
}

impl<T: Transport> Pn532<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Pn532Config::default())
    }

    pub fn with_config(transport: T, config: Pn532Config) -> Self {
        Self {
            transport,
            config,
            session: None,
            buffer: [0u8; PN532_PACKET_BUFFER_SIZE],
        }
    }

    pub fn config(&self) -> &Pn532Config {
        &self.config
    }

    /// The active session, if a tag family has been selected.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    fn require_session(&self) -> Result<Session> {
        self.session.ok_or(Error::NotConfigured)
    }

    // ---- framing ----

    /// Frame `payload` and write it in a single DATAWRITE session.
    pub fn write_command(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > PN532_PACKET_BUFFER_SIZE {
            return Err(Error::InvalidLength {
                expected: PN532_PACKET_BUFFER_SIZE,
                actual: payload.len(),
            });
        }
        let frame = Frame::encode(payload)?;

        self.transport.set_chip_select(true)?;
        self.transport.sleep_ms(self.config.settle_delay_ms);
        let res = write_frame(&mut self.transport, &frame);
        self.transport.set_chip_select(false)?;
        res?;

        debug!("frame sent: {}", HexDump(&frame));
        Ok(())
    }

    /// Clock `len` bytes out of the chip in one DATAREAD session. The
    /// returned slice borrows the handle's reply buffer.
    pub fn read_response(&mut self, len: usize) -> Result<&[u8]> {
        if len > PN532_PACKET_BUFFER_SIZE {
            return Err(Error::InvalidLength {
                expected: PN532_PACKET_BUFFER_SIZE,
                actual: len,
            });
        }

        self.transport.set_chip_select(true)?;
        self.transport.sleep_ms(self.config.settle_delay_ms);
        let res = read_into(
            &mut self.transport,
            &mut self.buffer[..len],
            self.config.byte_delay_ms,
        );
        self.transport.set_chip_select(false)?;
        res?;

        Ok(&self.buffer[..len])
    }

    /// Read the 6-byte acknowledgement that follows every command.
    pub fn read_ack(&mut self) -> Result<()> {
        let raw = self.read_response(PN532_ACK_FRAME.len())?;
        if Frame::is_ack(raw) {
            debug!("ack verified");
            return Ok(());
        }
        let mut actual = [0u8; 6];
        actual.copy_from_slice(raw);
        warn!("ack mismatch: {}", HexDump(&actual));
        Err(Error::AckMismatch { actual })
    }

    /// Poll the status byte until ready, failing after `timeout_ms`
    /// (zero waits forever).
    pub fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        poller::wait_ready(&mut self.transport, &self.config, timeout_ms)
    }

    /// Write a command and complete the acknowledgement handshake. On
    /// success the reply is ready to be read.
    pub fn send_command_and_ack(&mut self, payload: &[u8], timeout_ms: u64) -> Result<()> {
        self.write_command(payload)?;
        self.wait_ready(timeout_ms)?;
        self.read_ack()?;
        self.wait_ready(timeout_ms)
    }

    fn transact(&mut self, cmd: &Command) -> Result<&[u8]> {
        let timeout_ms = self.config.handshake_timeout_ms;
        self.send_command_and_ack(&cmd.encode(), timeout_ms)?;
        let raw = self.read_response(cmd.response_len())?;
        debug!("response received: {}", HexDump(raw));
        Ok(raw)
    }

    /// Execute a command and return the decoded Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let raw = self.transact(cmd)?;
        codec::decode_response(cmd, raw)
    }

    // ---- commands ----

    /// Query the firmware version.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let raw = self.transact(&Command::GetFirmwareVersion)?;
        decode_firmware_version(raw)
    }

    /// Configure the SAM with the mode, timeout and IRQ use from the
    /// device configuration.
    pub fn sam_config(&mut self) -> Result<()> {
        let c = self.config;
        self.sam_config_with(c.sam_mode, c.sam_timeout, c.sam_use_irq)
    }

    pub fn sam_config_with(&mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Result<()> {
        let raw = self.transact(&Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        })?;
        decode_sam_configuration(raw)
    }

    /// Discover a passive target with the session's modulation.
    pub fn read_passive_target(&mut self) -> Result<PassiveTarget> {
        let session = self.require_session()?;
        let raw = self.transact(&Command::InListPassiveTarget {
            max_targets: session.max_targets(),
            baud_rate: session.baud_rate(),
        })?;
        let target = decode_in_list_passive_target(raw)?;
        debug!(
            "target {} found, nfcid {}",
            target.target,
            target.nfcid.to_hex()
        );
        Ok(target)
    }

    /// MIFARE authentication of `block`. `id` is the card identifier
    /// returned by discovery.
    pub fn authenticate_block(
        &mut self,
        target: u8,
        id: TargetId,
        block: u8,
        key_type: KeyType,
        key: &[u8; 6],
    ) -> Result<()> {
        self.require_session()?.check_block(block)?;
        let raw = self.transact(&Command::Authenticate {
            target,
            key_type,
            block,
            key: *key,
            id,
        })?;
        decode_exchange_status(raw)
    }

    pub fn read_memory_block(&mut self, target: u8, block: u8) -> Result<BlockData> {
        self.require_session()?.check_block(block)?;
        let raw = self.transact(&Command::ReadBlock { target, block })?;
        decode_read_block(raw)
    }

    /// Write one block. Exactly one block size of bytes is taken from `data`.
    pub fn write_memory_block(&mut self, target: u8, block: u8, data: &[u8]) -> Result<()> {
        let session = self.require_session()?;
        session.check_block(block)?;
        let block_size = usize::from(session.block_size());
        if data.len() < block_size {
            return Err(Error::InvalidLength {
                expected: block_size,
                actual: data.len(),
            });
        }
        let raw = self.transact(&Command::WriteBlock {
            target,
            block,
            data: data[..block_size].to_vec(),
        })?;
        decode_exchange_status(raw)
    }

    /// Start an active-mode DEP link as initiator.
    pub fn configure_peer_as_initiator(&mut self, baud_rate: DepBaudRate) -> Result<()> {
        let raw = self.transact(&Command::InJumpForDep { baud_rate })?;
        decode_in_jump_for_dep(raw)
    }

    /// Send one chunk to the DEP target and return its answer.
    pub fn initiator_exchange(
        &mut self,
        data: &[u8; PN532_P2P_CHUNK_LEN],
    ) -> Result<[u8; PN532_P2P_CHUNK_LEN]> {
        let raw = self.transact(&Command::InitiatorExchange { data: *data })?;
        decode_initiator_exchange(raw)
    }

    /// Wait to be activated as a DEP target.
    pub fn configure_peer_as_target(&mut self, params: &TargetModeParams) -> Result<()> {
        let raw = self.transact(&Command::TgInitAsTarget { params: *params })?;
        decode_tg_init_as_target(raw)
    }

    /// Receive one chunk from the initiator, then answer with `data`.
    pub fn target_exchange(
        &mut self,
        data: &[u8; PN532_P2P_CHUNK_LEN],
    ) -> Result<[u8; PN532_P2P_CHUNK_LEN]> {
        let raw = self.transact(&Command::TgGetData)?;
        let received = decode_tg_get_data(raw)?;
        let raw = self.transact(&Command::TgSetData { data: *data })?;
        decode_tg_set_data(raw)?;
        Ok(received)
    }

    // ---- session ----

    /// Select the tag family, prepare the bus and check the chip answers.
    /// The session is kept only if the firmware query succeeds.
    pub fn select_tag_family(&mut self, family: TagFamily) -> Result<FirmwareVersion> {
        let session = Session::for_family(family, &self.config);
        self.transport.configure()?;
        let version = self.firmware_version()?;
        debug!(
            "{:?} selected: {} blocks of {} bytes, {}",
            family,
            session.blocks(),
            session.block_size(),
            version
        );
        self.session = Some(session);
        Ok(version)
    }

    /// Select a tag family by its numeric code.
    pub fn select_tag_family_code(&mut self, code: u32) -> Result<FirmwareVersion> {
        let family = TagFamily::from_code(code).ok_or(Error::UnrecognizedFamily(code))?;
        self.select_tag_family(family)
    }
}

fn write_frame<T: Transport + ?Sized>(transport: &mut T, frame: &[u8]) -> Result<()> {
    transport.transfer(PN532_SPI_DATAWRITE)?;
    transport.write_bytes(frame)
}

fn read_into<T: Transport + ?Sized>(transport: &mut T, buf: &mut [u8], byte_delay_ms: u64) -> Result<()> {
    transport.transfer(PN532_SPI_DATAREAD)?;
    for slot in buf.iter_mut() {
        transport.sleep_ms(byte_delay_ms);
        *slot = transport.transfer(0x00)?;
    }
    Ok(())
}
