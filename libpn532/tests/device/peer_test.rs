#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::device::Pn532;
use libpn532::protocol::{Frame, TargetModeParams};
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;
use libpn532::types::DepBaudRate;

#[test]
fn initiator_link_and_exchange() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_reply(&test_support::exchange_reply(0x57, 0x00, &[], 25));
    mock.push_reply(&test_support::exchange_reply(0x41, 0x00, &[0x99; 16], 24));
    let mut dev = Pn532::new(mock);

    dev.configure_peer_as_initiator(DepBaudRate::Kbps424)
        .expect("jump for dep");
    let link = dev.transport().last_command().unwrap();
    assert_eq!(&link.payload[..3], &[0x56, 0x01, 0x02]);

    let answer = dev.initiator_exchange(&[0x01; 16]).expect("exchange");
    assert_eq!(answer, [0x99; 16]);
    let sent = dev.transport().last_command().unwrap();
    assert_eq!(&sent.payload[..2], &[0x40, 0x01]);
    assert_eq!(&sent.payload[2..], &[0x01; 16]);
}

#[test]
fn initiator_link_refused() {
    let mut mock = MockTransport::new();
    mock.push_reply(&test_support::exchange_reply(0x57, 0x01, &[], 25));
    let mut dev = Pn532::new(mock);
    assert_eq!(
        dev.configure_peer_as_initiator(DepBaudRate::default()),
        Err(Error::Status { status: 0x01 })
    );
}

#[test]
fn target_activation_and_exchange() {
    let mut mock = MockTransport::new();
    mock.push_reply(&test_support::exchange_reply(0x8D, 0x05, &[], 24));
    mock.push_reply(&test_support::exchange_reply(0x87, 0x00, &[0x10; 16], 24));
    mock.push_reply(&test_support::exchange_reply(0x8F, 0x00, &[], 8));
    let mut dev = Pn532::new(mock);

    dev.configure_peer_as_target(&TargetModeParams::default())
        .expect("init as target");
    let got = dev.target_exchange(&[0x20; 16]).expect("target exchange");
    assert_eq!(got, [0x10; 16]);

    let sent = &dev.transport().sent;
    assert_eq!(sent.len(), 3);
    let init = Frame::decode(&sent[0]).unwrap();
    assert_eq!(init.payload.len(), 38);
    let set = Frame::decode(&sent[2]).unwrap();
    assert_eq!(set.payload[0], 0x8E);
    assert_eq!(&set.payload[1..], &[0x20; 16]);
}

#[test]
fn target_exchange_stops_on_get_failure() {
    let mut mock = MockTransport::new();
    mock.push_reply(&test_support::exchange_reply(0x87, 0x29, &[], 24));
    let mut dev = Pn532::new(mock);
    assert_eq!(
        dev.target_exchange(&[0; 16]),
        Err(Error::Status { status: 0x29 })
    );
    // TgSetData never sent
    assert_eq!(dev.transport().sent.len(), 1);
}
