// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Normal information frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Minimal frame length: preamble(3) + len + lcs + tfi + dcs + postamble
pub const PN532_MIN_FRAME_LEN: usize = 8;

/// Direction byte (TFI) host->PN532 (D4) and PN532->host (D5)
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Fixed ACK frame emitted by the chip after receiving a valid command frame
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Header of a firmware version reply as it arrives on the SPI data read.
pub const PN532_FIRMWARE_RESPONSE_HEADER: [u8; 6] = [0x00, 0xFF, 0x06, 0xFA, 0xD5, 0x03];

/// Size of the per-device scratch buffer used for frames and replies.
pub const PN532_PACKET_BUFFER_SIZE: usize = 64;

// SPI operation bytes (first byte of every chip-select session)
pub const PN532_SPI_DATAWRITE: u8 = 0x01;
pub const PN532_SPI_STATREAD: u8 = 0x02;
pub const PN532_SPI_DATAREAD: u8 = 0x03;
/// Status byte value reported when a reply is ready to be read
pub const PN532_SPI_READY: u8 = 0x01;

// Command codes
pub const PN532_CMD_DIAGNOSE: u8 = 0x00;
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_GET_GENERAL_STATUS: u8 = 0x04;
pub const PN532_CMD_READ_REGISTER: u8 = 0x06;
pub const PN532_CMD_WRITE_REGISTER: u8 = 0x08;
pub const PN532_CMD_READ_GPIO: u8 = 0x0C;
pub const PN532_CMD_WRITE_GPIO: u8 = 0x0E;
pub const PN532_CMD_SET_SERIAL_BAUD_RATE: u8 = 0x10;
pub const PN532_CMD_SET_PARAMETERS: u8 = 0x12;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_POWER_DOWN: u8 = 0x16;
pub const PN532_CMD_RF_CONFIGURATION: u8 = 0x32;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_COMMUNICATE_THRU: u8 = 0x42;
pub const PN532_CMD_IN_DESELECT: u8 = 0x44;
pub const PN532_CMD_IN_JUMP_FOR_PSL: u8 = 0x46;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const PN532_CMD_IN_PSL: u8 = 0x4E;
pub const PN532_CMD_IN_ATR: u8 = 0x50;
pub const PN532_CMD_IN_RELEASE: u8 = 0x52;
pub const PN532_CMD_IN_SELECT: u8 = 0x54;
pub const PN532_CMD_WAKEUP: u8 = 0x55;
pub const PN532_CMD_IN_JUMP_FOR_DEP: u8 = 0x56;
pub const PN532_CMD_RF_REGULATION_TEST: u8 = 0x58;
pub const PN532_CMD_IN_AUTO_POLL: u8 = 0x60;
pub const PN532_CMD_TG_GET_DATA: u8 = 0x86;
pub const PN532_CMD_TG_GET_INITIATOR_COMMAND: u8 = 0x88;
pub const PN532_CMD_TG_GET_TARGET_STATUS: u8 = 0x8A;
pub const PN532_CMD_TG_INIT_AS_TARGET: u8 = 0x8C;
pub const PN532_CMD_TG_SET_DATA: u8 = 0x8E;
pub const PN532_CMD_TG_RESPONSE_TO_INITIATOR: u8 = 0x90;
pub const PN532_CMD_TG_SET_GENERAL_BYTES: u8 = 0x92;
pub const PN532_CMD_TG_SET_METADATA: u8 = 0x94;

// Acknowledgement codes echoed in replies (command + 1)
pub const PN532_ACK_SAM_CONFIGURATION: u8 = 0x15;
pub const PN532_ACK_IN_DATA_EXCHANGE: u8 = 0x41;
pub const PN532_ACK_IN_LIST_PASSIVE_TARGET: u8 = 0x4B;
pub const PN532_ACK_TG_GET_DATA: u8 = 0x87;
pub const PN532_ACK_TG_SET_DATA: u8 = 0x8F;

// MIFARE Classic / Ultralight sub-commands carried by InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
pub const MIFARE_CMD_WRITE_ULTRALIGHT: u8 = 0xA2;
pub const MIFARE_CMD_TRANSFER: u8 = 0xB0;
pub const MIFARE_CMD_DECREMENT: u8 = 0xC0;
pub const MIFARE_CMD_INCREMENT: u8 = 0xC1;
pub const MIFARE_CMD_RESTORE: u8 = 0xC2;

// Tag family codes accepted by `select_tag_family_code`
pub const PN532_SHIELD: u32 = 0x1000_0000;
pub const PN532_TAG_MIFARE_ISO14443A: u32 = 0x1000_0001;
pub const PN532_TAG_NTAG203: u32 = 0x1000_0002;

/// Data bytes exchanged per peer-to-peer transfer
pub const PN532_P2P_CHUNK_LEN: usize = 16;
// libpn532/src/constants.rs
