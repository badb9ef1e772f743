// libpn532/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! The builders below produce the exact bytes a PN532 clocks out for each
//! reply shape, so tests can queue them on a MockTransport.
#![allow(dead_code)]

use crate::constants::{
    PN532_ACK_IN_LIST_PASSIVE_TARGET, PN532_ACK_SAM_CONFIGURATION, PN532_PN532_TO_HOST,
};
use crate::device::Pn532;
use crate::protocol::Frame;
use crate::transport::mock::MockTransport;
use crate::types::TagFamily;
use crate::Result;

fn chip_frame(payload: &[u8]) -> Vec<u8> {
    // payloads here are a handful of bytes, far below the frame limit
    Frame::encode_with_tfi(PN532_PN532_TO_HOST, payload).unwrap_or_default()
}

/// GetFirmwareVersion reply as read over SPI: the frame with its leading
/// preamble byte already consumed, 12 bytes.
#[doc(hidden)]
pub fn firmware_reply(version: u32) -> Vec<u8> {
    let mut payload = vec![0x03];
    payload.extend_from_slice(&version.to_be_bytes());
    chip_frame(&payload)[1..].to_vec()
}

/// SAMConfiguration reply, 8 bytes with the response code at offset 5.
#[doc(hidden)]
pub fn sam_reply() -> Vec<u8> {
    chip_frame(&[PN532_ACK_SAM_CONFIGURATION])[1..].to_vec()
}

/// Reply whose response code sits at offset 6 and status at offset 7,
/// followed by `data` and padded with zeros to `len` bytes.
#[doc(hidden)]
pub fn exchange_reply(code: u8, status: u8, data: &[u8], len: usize) -> Vec<u8> {
    let mut payload = vec![code, status];
    payload.extend_from_slice(data);
    let mut out = chip_frame(&payload);
    out.resize(len, 0x00);
    out
}

/// InListPassiveTarget reply reporting `count` ISO14443A targets, the first
/// carrying `nfcid`. Padded to the 20 bytes the driver reads.
#[doc(hidden)]
pub fn passive_target_reply(count: u8, nfcid: &[u8]) -> Vec<u8> {
    let mut payload = vec![PN532_ACK_IN_LIST_PASSIVE_TARGET, count];
    if count != 0 {
        payload.extend_from_slice(&[0x01, 0x00, 0x04, 0x08, nfcid.len() as u8]);
        payload.extend_from_slice(nfcid);
    }
    let mut out = chip_frame(&payload);
    out.resize(20, 0x00);
    out
}

/// A MockTransport with a firmware reply queued for tag-family selection.
#[doc(hidden)]
pub fn mock_with_firmware(version: u32) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_reply(&firmware_reply(version));
    mock
}

/// Convenience: a device with `family` already selected. Replies queued
/// on the returned device's transport serve the commands that follow.
#[doc(hidden)]
pub fn selected_mock_device(family: TagFamily) -> Result<Pn532<MockTransport>> {
    let mut dev = Pn532::new(mock_with_firmware(0x3201_0607));
    dev.select_tag_family(family)?;
    Ok(dev)
}
