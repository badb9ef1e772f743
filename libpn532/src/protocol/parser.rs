// libpn532/src/protocol/parser.rs

use crate::constants::PN532_ACK_IN_DATA_EXCHANGE;
use crate::{Error, Result};

/// Offset of the echoed acknowledgement code in a data exchange reply.
pub const ACK_CODE_OFFSET: usize = 6;
/// Offset of the status byte in a data exchange reply.
pub const STATUS_OFFSET: usize = 7;
/// Offset of the first data byte in a data exchange reply.
pub const DATA_OFFSET: usize = 8;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

/// Concatenate up to eight bytes big-endian into a u64.
pub fn be_concat(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Ensure the byte at `idx` equals the expected acknowledgement code.
pub fn expect_code_at(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}

/// Ensure the status byte at `idx` reports success (0x00).
pub fn expect_status_at(data: &[u8], idx: usize) -> Result<()> {
    let status = byte_at(data, idx)?;
    if status != 0x00 {
        return Err(Error::Status { status });
    }
    Ok(())
}

/// Check the echoed acknowledgement code and the status byte shared by
/// data exchange style replies. Both must match.
pub fn expect_exchange_ok(data: &[u8], ack_code: u8) -> Result<()> {
    expect_code_at(data, ACK_CODE_OFFSET, ack_code)?;
    expect_status_at(data, STATUS_OFFSET)
}

/// Convenience for InDataExchange replies.
pub fn expect_data_exchange_ok(data: &[u8]) -> Result<()> {
    expect_exchange_ok(data, PN532_ACK_IN_DATA_EXCHANGE)
}
