#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::constants::{PN532_SHIELD, PN532_TAG_MIFARE_ISO14443A, PN532_TAG_NTAG203};
use libpn532::device::{Pn532, Pn532Builder};
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;
use libpn532::types::{BaudRate, TagFamily};

#[test]
fn selecting_ntag203_sets_geometry() {
    let mut dev = Pn532::new(test_support::mock_with_firmware(
        common::fixtures::SAMPLE_FIRMWARE,
    ));
    let v = dev.select_tag_family_code(PN532_TAG_NTAG203).unwrap();
    assert_eq!(v.as_u32(), common::fixtures::SAMPLE_FIRMWARE);

    let s = dev.session().copied().unwrap();
    assert_eq!(s.family(), TagFamily::Ntag203);
    assert_eq!((s.blocks(), s.block_size()), (42, 4));
    assert_eq!(s.pages(), 11);
    assert_eq!(dev.transport().configured, 1);
    assert_eq!(
        dev.transport().last_frame().unwrap(),
        &common::fixtures::firmware_command_frame()[..]
    );
}

#[test]
fn selecting_mifare_uses_configured_discovery() {
    let mut dev = Pn532Builder::new()
        .with_transport(test_support::mock_with_firmware(
            common::fixtures::SAMPLE_FIRMWARE,
        ))
        .baud_rate(BaudRate::Jewel106)
        .max_targets(2)
        .build()
        .unwrap();
    dev.select_tag_family_code(PN532_TAG_MIFARE_ISO14443A).unwrap();

    let s = dev.session().unwrap();
    assert_eq!(s.memory_size(), 1024);
    assert_eq!(s.baud_rate(), BaudRate::Jewel106);
    assert_eq!(s.max_targets(), 1);
}

#[test]
fn default_discovery_lists_two_targets() {
    let mut dev = common::selected(TagFamily::MifareIso14443a);
    assert_eq!(dev.session().unwrap().max_targets(), 2);
    dev.transport_mut().push_reply(&test_support::passive_target_reply(
        1,
        &common::fixtures::sample_nfcid(),
    ));

    dev.read_passive_target().expect("discovery");
    let cmd = dev.transport().last_command().unwrap();
    assert_eq!(cmd.payload, vec![0x4A, 0x02, 0x00]);
}

#[test]
fn unrecognized_code_leaves_bus_alone() {
    let mut dev = Pn532::new(MockTransport::new());
    for code in [PN532_SHIELD, 0x1000_0003, 0] {
        assert_eq!(
            dev.select_tag_family_code(code),
            Err(Error::UnrecognizedFamily(code))
        );
    }
    assert!(!dev.transport().touched());
    assert!(dev.session().is_none());
}

#[test]
fn failed_firmware_query_keeps_previous_state() {
    let mut mock = MockTransport::new();
    let mut bad = test_support::firmware_reply(common::fixtures::SAMPLE_FIRMWARE);
    bad[0] = 0x01;
    mock.push_reply(&bad);
    let mut dev = Pn532::new(mock);

    assert_eq!(
        dev.select_tag_family(TagFamily::MifareIso14443a),
        Err(Error::FirmwareHeaderMismatch)
    );
    assert!(dev.session().is_none());
    assert_eq!(dev.read_memory_block(1, 0), Err(Error::NotConfigured));
}

#[test]
fn reselecting_replaces_session() {
    let mut mock = MockTransport::new();
    mock.push_reply(&test_support::firmware_reply(common::fixtures::SAMPLE_FIRMWARE));
    mock.push_reply(&test_support::firmware_reply(common::fixtures::SAMPLE_FIRMWARE));
    let mut dev = Pn532::new(mock);

    dev.select_tag_family(TagFamily::Ntag203).unwrap();
    dev.select_tag_family(TagFamily::MifareIso14443a).unwrap();
    assert_eq!(dev.session().unwrap().blocks(), 64);
    assert_eq!(dev.transport().configured, 2);
}
