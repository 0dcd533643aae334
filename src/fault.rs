//! Decoded view of the fault status register.

use crate::registers::{
    SR_CJ_HIGH, SR_CJ_LOW, SR_CJ_RANGE, SR_OPEN, SR_OVUV, SR_TC_HIGH, SR_TC_LOW, SR_TC_RANGE,
};

/// Decoded fault status register.
///
/// [`Max31856::read_fault`] returns the raw register byte; this type is a
/// pure convenience for callers that prefer named flags over bit tests.
///
/// Note that an over/undervoltage condition suppresses detection of the
/// other faults — clear it first.
///
/// [`Max31856::read_fault`]: crate::Max31856::read_fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    /// Cold-junction temperature out of range.
    pub cj_range: bool,
    /// Thermocouple temperature out of range.
    pub tc_range: bool,
    /// Cold-junction high threshold fault.
    pub cj_high: bool,
    /// Cold-junction low threshold fault.
    pub cj_low: bool,
    /// Thermocouple high threshold fault.
    pub tc_high: bool,
    /// Thermocouple low threshold fault.
    pub tc_low: bool,
    /// Overvoltage or undervoltage on the thermocouple inputs.
    pub ovuv: bool,
    /// Thermocouple open circuit.
    pub open: bool,
}

impl FaultStatus {
    /// Decode a raw fault status register byte.
    pub fn from_register(reg: u8) -> Self {
        Self {
            cj_range: reg & SR_CJ_RANGE != 0,
            tc_range: reg & SR_TC_RANGE != 0,
            cj_high: reg & SR_CJ_HIGH != 0,
            cj_low: reg & SR_CJ_LOW != 0,
            tc_high: reg & SR_TC_HIGH != 0,
            tc_low: reg & SR_TC_LOW != 0,
            ovuv: reg & SR_OVUV != 0,
            open: reg & SR_OPEN != 0,
        }
    }

    /// True if any fault bit is set.
    pub fn has_fault(&self) -> bool {
        self.cj_range
            || self.tc_range
            || self.cj_high
            || self.cj_low
            || self.tc_high
            || self.tc_low
            || self.ovuv
            || self.open
    }
}
