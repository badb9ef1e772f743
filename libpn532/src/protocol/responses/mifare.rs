// libpn532/src/protocol/responses/mifare.rs

use crate::protocol::parser;
use crate::types::BlockData;
use crate::Result;

/// Decode an authenticate or write reply (8 bytes read).
/// Layout: 00 00 FF LEN LCS D5 | 41 Status
pub fn decode_exchange_status(data: &[u8]) -> Result<()> {
    parser::expect_data_exchange_ok(data)
}

/// Decode a MIFARE READ reply (24 bytes read); 16 data bytes follow the
/// status byte.
pub fn decode_read_block(data: &[u8]) -> Result<BlockData> {
    parser::expect_data_exchange_ok(data)?;
    BlockData::try_from(parser::slice_at(data, parser::DATA_OFFSET, 16)?)
}
