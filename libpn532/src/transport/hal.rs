// libpn532/src/transport/hal.rs

//! embedded-hal 1.0 adapter.
//!
//! The PN532 shifts data LSB first in SPI mode 0. Controllers that can
//! only shift MSB first enable [`HalTransport::msb_first`] and every byte
//! is bit-reversed in software in both directions.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over an exclusively owned SPI bus with a GPIO chip-select
/// (active low) and a blocking delay provider.
pub struct HalTransport<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    msb_first: bool,
}

impl<SPI, CS, D> HalTransport<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Self {
            spi,
            cs,
            delay,
            msb_first: false,
        }
    }

    /// Reverse bit order in software for MSB-first controllers.
    pub fn msb_first(mut self, enabled: bool) -> Self {
        self.msb_first = enabled;
        self
    }

    #[inline]
    fn to_wire(&self, byte: u8) -> u8 {
        if self.msb_first {
            byte.reverse_bits()
        } else {
            byte
        }
    }

    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }
}

impl<SPI, CS, D> Transport for HalTransport<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    D: DelayNs,
{
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        let mut buf = [self.to_wire(byte)];
        self.spi
            .transfer_in_place(&mut buf)
            .map_err(|e| Error::Bus(format!("spi transfer: {:?}", e)))?;
        Ok(self.to_wire(buf[0]))
    }

    fn set_chip_select(&mut self, asserted: bool) -> Result<()> {
        let res = if asserted {
            self.cs.set_low()
        } else {
            self.spi
                .flush()
                .map_err(|e| Error::Bus(format!("spi flush: {:?}", e)))?;
            self.cs.set_high()
        };
        res.map_err(|e| Error::Bus(format!("chip select: {:?}", e)))
    }

    fn sleep_ms(&mut self, ms: u64) {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }

    fn configure(&mut self) -> Result<()> {
        // Mode and bit order are fixed when the bus is constructed; only
        // the idle chip-select level is ours to set.
        self.cs
            .set_high()
            .map_err(|e| Error::Bus(format!("chip select: {:?}", e)))
    }
}
