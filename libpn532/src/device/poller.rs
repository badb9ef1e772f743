// libpn532/src/device/poller.rs

use log::{trace, warn};

use crate::constants::{PN532_SPI_READY, PN532_SPI_STATREAD};
use crate::device::config::Pn532Config;
use crate::transport::Transport;
use crate::{Error, Result};

/// One STATREAD session: select, settle, op byte, clock out the status.
pub fn read_status<T: Transport + ?Sized>(transport: &mut T, config: &Pn532Config) -> Result<u8> {
    transport.set_chip_select(true)?;
    transport.sleep_ms(config.settle_delay_ms);
    let status = clock_status(transport);
    transport.set_chip_select(false)?;
    status
}

fn clock_status<T: Transport + ?Sized>(transport: &mut T) -> Result<u8> {
    transport.transfer(PN532_SPI_STATREAD)?;
    transport.transfer(0x00)
}

/// Poll the status byte until the chip reports ready.
///
/// Every poll that is not ready adds one poll interval to the wait; once
/// the wait exceeds `timeout_ms` the call fails with [`Error::Timeout`].
/// A `timeout_ms` of zero keeps polling until the chip answers.
pub fn wait_ready<T: Transport + ?Sized>(
    transport: &mut T,
    config: &Pn532Config,
    timeout_ms: u64,
) -> Result<()> {
    let interval = config.poll_interval_ms.max(1);
    let mut waited_ms = 0u64;

    loop {
        let status = read_status(transport, config)?;
        trace!("spi status {:#04x} after {} ms", status, waited_ms);
        if status == PN532_SPI_READY {
            return Ok(());
        }

        if timeout_ms != 0 {
            waited_ms += interval;
            if waited_ms > timeout_ms {
                warn!("pn532 not ready after {} ms", waited_ms);
                return Err(Error::Timeout { waited_ms });
            }
        }
        transport.sleep_ms(interval);
    }
}
