//! Error types for the MAX31856 driver.

use core::fmt;

/// Errors that can occur when communicating with the MAX31856.
///
/// Both transport capabilities can fail independently: `SpiE` is the SPI bus
/// error, `PinE` the chip-select pin error. The driver never retries; every
/// failure is propagated unchanged to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Max31856Error<SpiE, PinE> {
    /// Underlying SPI bus error.
    Spi(SpiE),

    /// Chip-select pin error.
    Pin(PinE),
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Max31856Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Max31856Error::Spi(e) => write!(f, "SPI error: {:?}", e),
            Max31856Error::Pin(e) => write!(f, "chip-select pin error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<SpiE: defmt::Format, PinE: defmt::Format> defmt::Format for Max31856Error<SpiE, PinE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Max31856Error::Spi(e) => defmt::write!(f, "SPI error: {}", e),
            Max31856Error::Pin(e) => defmt::write!(f, "chip-select pin error: {}", e),
        }
    }
}
