// fixtures.rs — commonly used frames and replies

/// GetFirmwareVersion command frame as written over SPI.
pub fn firmware_command_frame() -> Vec<u8> {
    hex::decode("0000ff02fed4022a00").unwrap()
}

/// InListPassiveTarget, up to two targets at 106 kbps type A.
pub fn inlist_command_frame() -> Vec<u8> {
    hex::decode("0000ff04fcd44a0200e000").unwrap()
}

pub fn ack() -> [u8; 6] {
    [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]
}

/// NFCID1 of the sample card used across discovery tests.
pub fn sample_nfcid() -> [u8; 4] {
    [0x11, 0x22, 0x33, 0x44]
}

pub fn sample_key() -> [u8; 6] {
    [0xFF; 6]
}

pub fn sample_block(fill: u8) -> [u8; 16] {
    [fill; 16]
}

/// PN532 v1.6 as reported by the Adafruit shield.
pub const SAMPLE_FIRMWARE: u32 = 0x3201_0607;
