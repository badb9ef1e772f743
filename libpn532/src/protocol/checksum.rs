// libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over the direction byte and payload.
/// DCS = 0x100 - ((tfi + sum(payload)) & 0xff)
pub fn dcs(tfi: u8, payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
