use libpn532::constants::PN532_HOST_TO_PN532;
use libpn532::protocol::Frame;
use libpn532::protocol::checksum::{dcs, lcs};
use proptest::prelude::*;

proptest! {
    #[test]
    fn length_checksum_cancels(payload in prop::collection::vec(any::<u8>(), 0..=64)) {
        let frame = Frame::encode(&payload).unwrap();
        let len = frame[3];
        prop_assert_eq!(len as usize, payload.len() + 1);
        prop_assert_eq!(len.wrapping_add(frame[4]), 0);
    }

    #[test]
    fn data_checksum_cancels(payload in prop::collection::vec(any::<u8>(), 0..=64)) {
        let frame = Frame::encode(&payload).unwrap();
        let dcs_byte = frame[frame.len() - 2];
        let sum = payload
            .iter()
            .fold(PN532_HOST_TO_PN532, |acc, &b| acc.wrapping_add(b))
            .wrapping_add(dcs_byte);
        prop_assert_eq!(sum, 0);
    }

    #[test]
    fn frame_layout(payload in prop::collection::vec(any::<u8>(), 0..=64)) {
        let frame = Frame::encode(&payload).unwrap();
        prop_assert_eq!(frame.len(), payload.len() + 8);
        prop_assert_eq!(&frame[..3], &[0x00, 0x00, 0xFF]);
        prop_assert_eq!(frame[5], 0xD4);
        prop_assert_eq!(&frame[6..6 + payload.len()], &payload[..]);
        prop_assert_eq!(frame[frame.len() - 1], 0x00);
    }
}

#[test]
fn known_checksums() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(lcs(0x00), 0x00);
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
    assert_eq!(dcs(0xD4, &[0x4A, 0x01, 0x00]), 0xE1);
}
