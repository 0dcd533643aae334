//! Low-level SPI register transaction layer.
//!
//! Implements the MAX31856 framing rules: every register access is a single
//! chip-select window containing one address byte followed by the payload,
//! and chip-select is released on every exit path so a bus failure cannot
//! leave the device half-selected.
//!
//! This module is crate-private — consumers interact with [`Max31856`]
//! in `max31856.rs` instead.
//!
//! [`Max31856`]: crate::Max31856

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::Max31856Error;

/// Low-level register interface.
///
/// Owns the SPI bus and the active-low chip-select pin and provides the
/// read/write transaction primitives. The bus clock mode is the host's
/// responsibility (the MAX31856 requires SPI mode 1 or 3); this layer only
/// moves bytes and toggles chip-select.
pub(crate) struct RegisterInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> RegisterInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a new register interface.
    ///
    /// The chip-select pin is expected to already be high (deasserted); no
    /// bus traffic is generated here.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Release the underlying bus and chip-select capabilities.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    // -----------------------------------------------------------------------
    // Transaction primitives
    // -----------------------------------------------------------------------

    /// Read `N` consecutive registers starting at `address`.
    ///
    /// One transaction: assert chip-select, write the address byte, clock in
    /// `N` bytes, flush, deassert chip-select. The MAX31856 auto-increments
    /// its internal register pointer, so consecutive registers arrive in one
    /// chip-select window.
    pub fn read_registers<const N: usize>(
        &mut self,
        address: u8,
    ) -> Result<[u8; N], Max31856Error<SPI::Error, CS::Error>> {
        let mut buffer = [0u8; N];

        self.cs.set_low().map_err(Max31856Error::Pin)?;
        let io = self.read_burst(address, &mut buffer);
        self.deselect(io)?;

        Ok(buffer)
    }

    /// Write a single register.
    ///
    /// One transaction: assert chip-select, write `[address, value]`, flush,
    /// deassert chip-select. `address` is used raw — callers pass the
    /// `*_WRITE` constants, which already carry the high "write" bit.
    pub fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Max31856Error<SPI::Error, CS::Error>> {
        self.cs.set_low().map_err(Max31856Error::Pin)?;
        let io = self.write_burst(&[address, value]);
        self.deselect(io)
    }

    // -----------------------------------------------------------------------
    // Bus traffic inside an open chip-select window
    // -----------------------------------------------------------------------

    fn read_burst(
        &mut self,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<(), Max31856Error<SPI::Error, CS::Error>> {
        self.spi.write(&[address]).map_err(Max31856Error::Spi)?;
        self.spi.read(buffer).map_err(Max31856Error::Spi)?;
        self.spi.flush().map_err(Max31856Error::Spi)
    }

    fn write_burst(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), Max31856Error<SPI::Error, CS::Error>> {
        self.spi.write(bytes).map_err(Max31856Error::Spi)?;
        self.spi.flush().map_err(Max31856Error::Spi)
    }

    /// Deassert chip-select and fold the result into the transaction outcome.
    ///
    /// Runs unconditionally after the bus traffic so the device is never left
    /// selected. An I/O error from the traffic takes precedence over a pin
    /// error raised while releasing.
    fn deselect(
        &mut self,
        io: Result<(), Max31856Error<SPI::Error, CS::Error>>,
    ) -> Result<(), Max31856Error<SPI::Error, CS::Error>> {
        let released = self.cs.set_high().map_err(Max31856Error::Pin);
        io.and(released)
    }
}
