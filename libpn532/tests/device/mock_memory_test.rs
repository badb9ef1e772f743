#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;
use libpn532::test_support;
use libpn532::types::{KeyType, TagFamily};

#[test]
fn ntag203_last_block_is_forwarded() {
    let mut dev = common::selected(TagFamily::Ntag203);
    dev.transport_mut().push_reply(&test_support::exchange_reply(
        0x41,
        0x00,
        &common::fixtures::sample_block(0x33),
        24,
    ));

    let block = dev.read_memory_block(1, 41).expect("read block 41");
    assert_eq!(block.as_bytes(), &[0x33; 16]);
    let cmd = dev.transport().last_command().unwrap();
    assert_eq!(cmd.payload, vec![0x40, 0x01, 0x30, 41]);
}

#[test]
fn ntag203_last_block_write_is_forwarded() {
    let mut dev = common::selected(TagFamily::Ntag203);
    dev.transport_mut()
        .push_reply(&test_support::exchange_reply(0x41, 0x00, &[], 8));

    dev.write_memory_block(1, 41, &[0x01, 0x02, 0x03, 0x04])
        .expect("write block 41");
    let cmd = dev.transport().last_command().unwrap();
    assert_eq!(cmd.payload, vec![0x40, 0x01, 0xA0, 41, 0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn ntag203_block_42_rejected_without_bus_traffic() {
    let mut dev = common::selected(TagFamily::Ntag203);
    let transfers = dev.transport().transfers;

    let expected = Err(Error::BlockOutOfRange {
        block: 42,
        blocks: 42,
    });
    assert_eq!(dev.read_memory_block(1, 42).map(|_| ()), expected);
    assert_eq!(dev.write_memory_block(1, 42, &[0; 4]), expected);
    assert_eq!(
        dev.authenticate_block(1, 0x1122_3344u32.into(), 42, KeyType::A, &[0xFF; 6]),
        expected
    );
    assert_eq!(dev.transport().transfers, transfers);
    assert!(dev.transport().sent.is_empty());
}

#[test]
fn discover_then_authenticate_and_read() {
    let mut dev = common::selected(TagFamily::MifareIso14443a);
    let mock = dev.transport_mut();
    mock.push_reply(&test_support::passive_target_reply(
        1,
        &common::fixtures::sample_nfcid(),
    ));
    mock.push_reply(&test_support::exchange_reply(0x41, 0x00, &[], 8));
    mock.push_reply(&test_support::exchange_reply(
        0x41,
        0x00,
        b"hello, pn532 now",
        24,
    ));

    let target = dev.read_passive_target().expect("discovery");
    assert_eq!(target.id(), 0x1122_3344);
    assert_eq!(
        dev.transport().last_frame().unwrap(),
        &common::fixtures::inlist_command_frame()[..]
    );

    dev.authenticate_block(
        target.target,
        target.target_id(),
        4,
        KeyType::A,
        &common::fixtures::sample_key(),
    )
    .expect("authenticate");
    let auth = dev.transport().last_command().unwrap();
    assert_eq!(&auth.payload[..4], &[0x40, 0x01, 0x60, 0x04]);
    assert_eq!(&auth.payload[10..], &[0x11, 0x22, 0x33, 0x44]);

    let block = dev.read_memory_block(target.target, 4).expect("read");
    assert_eq!(block.to_ascii_safe(), "hello, pn532 now");
}

#[test]
fn no_card_in_field() {
    let mut dev = common::selected(TagFamily::MifareIso14443a);
    dev.transport_mut()
        .push_reply(&test_support::passive_target_reply(0, &[]));
    assert_eq!(dev.read_passive_target(), Err(Error::NoTarget));
}

#[test]
fn failed_auth_reports_status() {
    let mut dev = common::selected(TagFamily::MifareIso14443a);
    dev.transport_mut()
        .push_reply(&test_support::exchange_reply(0x41, 0x14, &[], 8));
    let err = dev
        .authenticate_block(1, 0u32.into(), 0, KeyType::B, &[0; 6])
        .unwrap_err();
    assert_eq!(err, Error::Status { status: 0x14 });
    assert!(err.is_terminal());
}

#[test]
fn mifare_write_sends_full_block() {
    let mut dev = common::selected(TagFamily::MifareIso14443a);
    dev.transport_mut()
        .push_reply(&test_support::exchange_reply(0x41, 0x00, &[], 8));
    let data = common::fixtures::sample_block(0xAB);
    dev.write_memory_block(1, 63, &data).expect("write");

    let frame = Frame::decode(dev.transport().last_frame().unwrap()).unwrap();
    assert_eq!(frame.payload.len(), 4 + 16);
    assert_eq!(&frame.payload[4..], &data[..]);
}
