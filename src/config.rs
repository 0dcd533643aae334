//! Conversion configuration written to CR0/CR1 at construction.
//!
//! The three selections are closed enumerations whose discriminants are the
//! exact register field values, so packing a [`Config`] into the two
//! configuration registers is a shift and an OR, nothing more.

/// Thermocouple type, CR1 bits 3:0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ThermocoupleType {
    /// Type B.
    B = 0x0,
    /// Type E.
    E = 0x1,
    /// Type J.
    J = 0x2,
    /// Type K (the default).
    K = 0x3,
    /// Type N.
    N = 0x4,
    /// Type R.
    R = 0x5,
    /// Type S.
    S = 0x6,
    /// Type T.
    T = 0x7,
}

/// Conversion mode, CR0 bits 7:6.
///
/// In one-shot mode the chip converts once (~200 ms) after the mode is
/// written and then idles; in continuous mode it converts automatically
/// roughly every 100 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ConversionMode {
    /// Single conversion triggered by writing CR0.
    OneShot = 0x40,
    /// Automatic continuous conversion (the default).
    Continuous = 0x80,
}

/// Sample averaging selection, CR1 bits 6:4 (stored unshifted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AveragingMode {
    /// No averaging, every sample reported as-is.
    OneSample = 0x0,
    /// Average of 2 samples.
    TwoSamples = 0x1,
    /// Average of 4 samples.
    FourSamples = 0x2,
    /// Average of 8 samples.
    EightSamples = 0x3,
    /// Average of 16 samples (the default).
    SixteenSamples = 0x4,
}

/// Conversion configuration programmed into the chip at construction.
///
/// Immutable from the driver's point of view: nothing else in the crate
/// rewrites CR0/CR1, so the physical chip configuration always matches the
/// `Config` the driver was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Thermocouple probe type.
    pub thermocouple_type: ThermocoupleType,
    /// One-shot or continuous conversion.
    pub conversion_mode: ConversionMode,
    /// Number of samples averaged per result.
    pub averaging: AveragingMode,
}

impl Default for Config {
    /// Type K, continuous conversion, 16-sample averaging.
    fn default() -> Self {
        Self {
            thermocouple_type: ThermocoupleType::K,
            conversion_mode: ConversionMode::Continuous,
            averaging: AveragingMode::SixteenSamples,
        }
    }
}

impl Config {
    /// CR0 value: the conversion mode field.
    pub(crate) fn cr0_value(&self) -> u8 {
        self.conversion_mode as u8
    }

    /// CR1 value: averaging in the upper nibble, thermocouple type in the
    /// lower nibble.
    pub(crate) fn cr1_value(&self) -> u8 {
        ((self.averaging as u8) << 4) | self.thermocouple_type as u8
    }
}
