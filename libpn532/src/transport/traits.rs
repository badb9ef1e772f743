// libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the SPI byte exchange away from protocol
/// and device logic.
pub trait Transport {
    /// Exchange one byte full-duplex and return the byte clocked in.
    fn transfer(&mut self, byte: u8) -> Result<u8>;

    /// Drive the chip-select line. `true` selects the chip (line low).
    fn set_chip_select(&mut self, asserted: bool) -> Result<()>;

    /// Block for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64);

    /// Prepare the bus for the PN532 (SPI mode 0, LSB first, chip
    /// deselected). Default implementation assumes the bus is already
    /// set up by its owner.
    fn configure(&mut self) -> Result<()> {
        Ok(())
    }

    /// Send a run of bytes, discarding what is clocked in. Default falls
    /// back to one `transfer` per byte.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.transfer(b)?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        (**self).transfer(byte)
    }
    fn set_chip_select(&mut self, asserted: bool) -> Result<()> {
        (**self).set_chip_select(asserted)
    }
    fn sleep_ms(&mut self, ms: u64) {
        (**self).sleep_ms(ms)
    }
    fn configure(&mut self) -> Result<()> {
        (**self).configure()
    }
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        (**self).transfer(byte)
    }
    fn set_chip_select(&mut self, asserted: bool) -> Result<()> {
        (**self).set_chip_select(asserted)
    }
    fn sleep_ms(&mut self, ms: u64) {
        (**self).sleep_ms(ms)
    }
    fn configure(&mut self) -> Result<()> {
        (**self).configure()
    }
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }
}
