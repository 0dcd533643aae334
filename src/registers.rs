//! MAX31856 register address map and bit constants.
//!
//! The MAX31856 uses single-byte register addressing. Read addresses run
//! 0x00–0x0F; the matching write address for a writable register is the
//! read address with the high bit set (`read | 0x80`). The temperature
//! result registers (0x0A–0x0E) and the fault status register (0x0F) are
//! read-only, so no write addresses exist for them.

// ---------------------------------------------------------------------------
// Register read addresses (0x00–0x0F)
// ---------------------------------------------------------------------------

/// Configuration register 0 (conversion mode, fault handling, filter).
pub const CR0_READ: u8 = 0x00;

/// Configuration register 1 (averaging in bits 6:4, thermocouple type in 3:0).
pub const CR1_READ: u8 = 0x01;

/// Fault mask register.
pub const MASK_READ: u8 = 0x02;

/// Cold-junction high fault threshold.
pub const CJHF_READ: u8 = 0x03;

/// Cold-junction low fault threshold.
pub const CJLF_READ: u8 = 0x04;

/// Linearized temperature high fault threshold, MSB.
pub const LTHFTH_READ: u8 = 0x05;

/// Linearized temperature high fault threshold, LSB.
pub const LTHFTL_READ: u8 = 0x06;

/// Linearized temperature low fault threshold, MSB.
pub const LTLFTH_READ: u8 = 0x07;

/// Linearized temperature low fault threshold, LSB.
pub const LTLFTL_READ: u8 = 0x08;

/// Cold-junction temperature offset.
pub const CJTO_READ: u8 = 0x09;

/// Cold-junction temperature, MSB. Reading 2 bytes from here returns the
/// full 14-bit cold-junction result.
pub const CJTH_READ: u8 = 0x0A;

/// Cold-junction temperature, LSB.
pub const CJTL_READ: u8 = 0x0B;

/// Linearized thermocouple temperature, byte 2 (MSB). Reading 3 bytes from
/// here returns the full 19-bit linearized result.
pub const LTCBH_READ: u8 = 0x0C;

/// Linearized thermocouple temperature, byte 1.
pub const LTCBM_READ: u8 = 0x0D;

/// Linearized thermocouple temperature, byte 0 (LSB).
pub const LTCBL_READ: u8 = 0x0E;

/// Fault status register.
pub const SR_READ: u8 = 0x0F;

// ---------------------------------------------------------------------------
// Register write addresses (read address | 0x80, writable subset only)
// ---------------------------------------------------------------------------

/// Configuration register 0 (write).
pub const CR0_WRITE: u8 = 0x80;

/// Configuration register 1 (write).
pub const CR1_WRITE: u8 = 0x81;

/// Fault mask register (write).
pub const MASK_WRITE: u8 = 0x82;

/// Cold-junction high fault threshold (write).
pub const CJHF_WRITE: u8 = 0x83;

/// Cold-junction low fault threshold (write).
pub const CJLF_WRITE: u8 = 0x84;

/// Linearized temperature high fault threshold, MSB (write).
pub const LTHFTH_WRITE: u8 = 0x85;

/// Linearized temperature high fault threshold, LSB (write).
pub const LTHFTL_WRITE: u8 = 0x86;

/// Linearized temperature low fault threshold, MSB (write).
pub const LTLFTH_WRITE: u8 = 0x87;

/// Linearized temperature low fault threshold, LSB (write).
pub const LTLFTL_WRITE: u8 = 0x88;

/// Cold-junction temperature offset (write).
pub const CJTO_WRITE: u8 = 0x89;

// ---------------------------------------------------------------------------
// Fault status register bits
// ---------------------------------------------------------------------------

/// Cold-junction out-of-range.
pub const SR_CJ_RANGE: u8 = 1 << 7;

/// Thermocouple out-of-range.
pub const SR_TC_RANGE: u8 = 1 << 6;

/// Cold-junction high fault.
pub const SR_CJ_HIGH: u8 = 1 << 5;

/// Cold-junction low fault.
pub const SR_CJ_LOW: u8 = 1 << 4;

/// Thermocouple temperature high fault.
pub const SR_TC_HIGH: u8 = 1 << 3;

/// Thermocouple temperature low fault.
pub const SR_TC_LOW: u8 = 1 << 2;

/// Overvoltage or undervoltage input fault.
pub const SR_OVUV: u8 = 1 << 1;

/// Thermocouple open-circuit fault.
pub const SR_OPEN: u8 = 1 << 0;
