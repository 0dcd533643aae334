//! High-level interface for the MAX31856 thermocouple-to-digital converter.
//!
//! [`Max31856`] wraps the low-level register transaction layer with the
//! conversion configuration written at construction and the fixed-point
//! decoding of the two temperature result registers.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::Config;
use crate::driver::RegisterInterface;
use crate::error::Max31856Error;
use crate::registers::{CJTH_READ, CR0_WRITE, CR1_WRITE, LTCBH_READ, SR_READ};

/// Significant bits in the cold-junction temperature result.
const CJ_BITS: u32 = 14;

/// Significant bits in the linearized thermocouple temperature result.
const TC_BITS: u32 = 19;

/// Driver for the MAX31856 thermocouple-to-digital converter.
///
/// Owns an SPI bus and an active-low chip-select pin and programs the chip's
/// conversion mode and averaging once, at construction. After that the
/// driver only reads: fresh temperature and fault bytes on every call,
/// nothing cached.
///
/// Communication with the MAX31856 only works in SPI mode 1 or 3; the host
/// configures the bus before handing it over.
///
/// # Example
///
/// ```no_run
/// use max31856_driver::Max31856;
///
/// # fn example<S, P>(spi: S, cs: P) -> Result<(), max31856_driver::Max31856Error<S::Error, P::Error>>
/// # where
/// #     S: embedded_hal::spi::SpiBus,
/// #     P: embedded_hal::digital::OutputPin,
/// # {
/// // Type K, continuous conversion, 16-sample averaging
/// let mut sensor = Max31856::new(spi, cs)?;
///
/// let probe = sensor.read_temperature()?;
/// let cold_junction = sensor.read_internal_temperature()?;
/// # Ok(())
/// # }
/// ```
pub struct Max31856<SPI, CS> {
    interface: RegisterInterface<SPI, CS>,
    config: Config,
}

impl<SPI, CS> Max31856<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a driver with the default configuration (type K thermocouple,
    /// continuous conversion, 16-sample averaging).
    ///
    /// See [`with_config`](Self::with_config) for the register writes this
    /// performs.
    pub fn new(spi: SPI, cs: CS) -> Result<Self, Max31856Error<SPI::Error, CS::Error>> {
        Self::with_config(spi, cs, Config::default())
    }

    /// Create a driver and program `config` into the chip.
    ///
    /// Issues two register-write transactions: CR0 receives the conversion
    /// mode, then CR1 receives the averaging selection in its upper nibble
    /// and the thermocouple type in its lower nibble. No read-back
    /// verification is performed — an unresponsive chip fails silently and
    /// shows up later as garbage readings.
    ///
    /// The configuration is never rewritten by the driver afterwards.
    ///
    /// # Errors
    /// Any SPI or chip-select failure during the two writes.
    pub fn with_config(
        spi: SPI,
        cs: CS,
        config: Config,
    ) -> Result<Self, Max31856Error<SPI::Error, CS::Error>> {
        let mut interface = RegisterInterface::new(spi, cs);
        interface.write_register(CR0_WRITE, config.cr0_value())?;
        interface.write_register(CR1_WRITE, config.cr1_value())?;

        Ok(Self { interface, config })
    }

    /// The configuration programmed at construction.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Release the underlying bus and chip-select capabilities.
    ///
    /// The driver borrows their lifecycle rather than owning it — it never
    /// closes or reconfigures them, and this hands them back unchanged.
    pub fn release(self) -> (SPI, CS) {
        self.interface.release()
    }

    // -----------------------------------------------------------------------
    // Temperature and fault reads
    // -----------------------------------------------------------------------

    /// Read the linearized, cold-junction-compensated thermocouple
    /// temperature in degrees Celsius.
    ///
    /// Reads 3 bytes starting at the LTCBH register and decodes the 19-bit
    /// two's-complement result (1/128 °C per LSB). A fresh bus transaction
    /// every call.
    ///
    /// # Errors
    /// Any SPI or chip-select failure; chip-select is still deasserted.
    pub fn read_temperature(&mut self) -> Result<f32, Max31856Error<SPI::Error, CS::Error>> {
        let bytes: [u8; 3] = self.interface.read_registers(LTCBH_READ)?;
        Ok(thermocouple_celsius(bytes))
    }

    /// Read the cold-junction (internal reference) temperature in degrees
    /// Celsius.
    ///
    /// Reads 2 bytes starting at the CJTH register and decodes the 14-bit
    /// two's-complement result (1/64 °C per LSB).
    ///
    /// # Errors
    /// Any SPI or chip-select failure; chip-select is still deasserted.
    pub fn read_internal_temperature(
        &mut self,
    ) -> Result<f32, Max31856Error<SPI::Error, CS::Error>> {
        let bytes: [u8; 2] = self.interface.read_registers(CJTH_READ)?;
        Ok(cold_junction_celsius(bytes))
    }

    /// Read the raw fault status register.
    ///
    /// The driver performs no interpretation — each bit is an independent
    /// fault condition for the caller to decode, either against the `SR_*`
    /// constants in [`registers`](crate::registers) or via
    /// [`FaultStatus::from_register`](crate::FaultStatus::from_register).
    pub fn read_fault(&mut self) -> Result<u8, Max31856Error<SPI::Error, CS::Error>> {
        let bytes: [u8; 1] = self.interface.read_registers(SR_READ)?;
        Ok(bytes[0])
    }

    // -----------------------------------------------------------------------
    // Low-level register access
    // -----------------------------------------------------------------------

    /// Read `N` consecutive registers starting at a read address.
    ///
    /// One chip-select-framed transaction: address byte out, `N` bytes in.
    /// Exposed for advanced use (thresholds, mask, raw result bytes).
    pub fn read_registers<const N: usize>(
        &mut self,
        address: u8,
    ) -> Result<[u8; N], Max31856Error<SPI::Error, CS::Error>> {
        self.interface.read_registers(address)
    }

    /// Write a single register.
    ///
    /// `address` must already carry the high "write" bit (the `*_WRITE`
    /// constants, read address | 0x80) — the transaction writes the two
    /// bytes exactly as given.
    pub fn write_register(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Max31856Error<SPI::Error, CS::Error>> {
        self.interface.write_register(address, value)
    }
}

// ---------------------------------------------------------------------------
// Fixed-point decoding
// ---------------------------------------------------------------------------

/// Decode the 2-byte cold-junction result to degrees Celsius.
///
/// The 16-bit container holds a sign bit, 13 magnitude bits, and 2 unused
/// low bits. The sign bit is masked out of the mantissa before shifting and
/// applied as `-2^13` afterwards; the scale is 1/64 °C per LSB.
fn cold_junction_celsius(bytes: [u8; 2]) -> f32 {
    let mut value = ((((bytes[0] & 0x7F) as i32) << 8) | bytes[1] as i32) >> 2;
    if bytes[0] & 0x80 != 0 {
        value -= 1 << (CJ_BITS - 1);
    }
    value as f32 / 64.0
}

/// Decode the 3-byte linearized thermocouple result to degrees Celsius.
///
/// The 24-bit container holds a sign bit, 18 magnitude bits, and 5 unused
/// low bits; the scale is 1/128 °C per LSB.
fn thermocouple_celsius(bytes: [u8; 3]) -> f32 {
    let mut value = ((((bytes[0] & 0x7F) as i32) << 16)
        | ((bytes[1] as i32) << 8)
        | bytes[2] as i32)
        >> 5;
    if bytes[0] & 0x80 != 0 {
        value -= 1 << (TC_BITS - 1);
    }
    value as f32 / 128.0
}
