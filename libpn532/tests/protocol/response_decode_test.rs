#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::{Command, Response};
use libpn532::test_support;
use libpn532::types::BaudRate;

fn inlist() -> Command {
    Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Iso14443a106,
    }
}

#[test]
fn discovery_reports_card_id() {
    let raw = test_support::passive_target_reply(1, &common::fixtures::sample_nfcid());
    match Response::decode(&inlist(), &raw).expect("decode") {
        Response::PassiveTarget(t) => {
            assert_eq!(t.id(), 0x1122_3344);
            assert_eq!(t.target, 1);
            assert_eq!(t.sens_res, 0x0004);
            assert_eq!(t.sel_res, 0x08);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn discovery_without_card() {
    let raw = test_support::passive_target_reply(0, &[]);
    assert_eq!(Response::decode(&inlist(), &raw), Err(Error::NoTarget));
}

#[test]
fn discovery_with_bogus_count() {
    let raw = test_support::passive_target_reply(3, &common::fixtures::sample_nfcid());
    assert_eq!(
        Response::decode(&inlist(), &raw),
        Err(Error::InvalidTargetCount(3))
    );
}

#[test]
fn firmware_header_checked() {
    let mut raw = test_support::firmware_reply(common::fixtures::SAMPLE_FIRMWARE);
    assert!(matches!(
        Response::decode(&Command::GetFirmwareVersion, &raw),
        Ok(Response::FirmwareVersion(_))
    ));
    raw[4] = 0xD4;
    assert_eq!(
        Response::decode(&Command::GetFirmwareVersion, &raw),
        Err(Error::FirmwareHeaderMismatch)
    );
}

#[test]
fn firmware_header_checked_past_leading_zero() {
    // every header byte after the leading 0x00 counts
    for i in 1..6 {
        let mut raw = test_support::firmware_reply(common::fixtures::SAMPLE_FIRMWARE);
        raw[i] ^= 0x01;
        assert_eq!(
            Response::decode(&Command::GetFirmwareVersion, &raw),
            Err(Error::FirmwareHeaderMismatch),
            "header byte {}",
            i
        );
    }
}

#[test]
fn read_block_status_and_code() {
    let cmd = Command::ReadBlock {
        target: 1,
        block: 0,
    };
    let ok = test_support::exchange_reply(0x41, 0x00, &common::fixtures::sample_block(0x5A), 24);
    match Response::decode(&cmd, &ok).unwrap() {
        Response::Block(b) => assert_eq!(b.as_bytes(), &[0x5A; 16]),
        other => panic!("unexpected response: {:?}", other),
    }

    let failed = test_support::exchange_reply(0x41, 0x14, &[], 24);
    assert_eq!(
        Response::decode(&cmd, &failed),
        Err(Error::Status { status: 0x14 })
    );

    let wrong = test_support::exchange_reply(0x4B, 0x00, &[], 24);
    assert_eq!(
        Response::decode(&cmd, &wrong),
        Err(Error::UnexpectedResponse {
            expected: 0x41,
            actual: 0x4B
        })
    );
}
