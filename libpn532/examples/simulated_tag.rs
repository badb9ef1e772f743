//! Drive the full command flow against a simulated chip.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libpn532 --example simulated_tag

use anyhow::{Context, Result};
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;
use libpn532::utils::bytes_to_hex_spaced;
use libpn532::{KeyType, Pn532Builder, TagFamily};

fn scripted_chip() -> MockTransport {
    let mut mock = MockTransport::new();
    // a few busy polls before each phase, like a real chip
    mock.push_busy(3);
    mock.push_reply(&test_support::firmware_reply(0x3201_0607));
    mock.push_reply(&test_support::sam_reply());
    mock.push_busy(5);
    mock.push_reply(&test_support::passive_target_reply(
        1,
        &[0x04, 0xA2, 0x2B, 0x6A],
    ));
    mock.push_reply(&test_support::exchange_reply(0x41, 0x00, &[], 8));
    mock.push_reply(&test_support::exchange_reply(
        0x41,
        0x00,
        b"libpn532 sample!",
        24,
    ));
    mock
}

fn main() -> Result<()> {
    env_logger::init();

    let mut dev = Pn532Builder::new()
        .with_transport(scripted_chip())
        .handshake_timeout_ms(500)
        .build()?;

    let version = dev
        .select_tag_family(TagFamily::MifareIso14443a)
        .context("select tag family")?;
    println!("Found {}", version);
    dev.sam_config().context("SAM configuration")?;

    let target = dev.read_passive_target().context("discovery")?;
    println!(
        "Card {} (SENS_RES {:04x}, SEL_RES {:02x})",
        target.nfcid.to_hex(),
        target.sens_res,
        target.sel_res
    );

    dev.authenticate_block(target.target, target.target_id(), 4, KeyType::A, &[0xFF; 6])
        .context("authenticate block 4")?;
    let block = dev
        .read_memory_block(target.target, 4)
        .context("read block 4")?;
    println!(
        "Block 4: {} \"{}\"",
        bytes_to_hex_spaced(block.as_bytes()),
        block.to_ascii_safe()
    );

    let mock = dev.release();
    println!(
        "{} frames written, {} status polls",
        mock.sent.len(),
        mock.status_polls
    );
    Ok(())
}
