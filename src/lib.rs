//! Blocking SPI driver for the MAX31856 precision thermocouple-to-digital
//! converter.
//!
//! This crate provides an `embedded-hal` 1.0 driver for the MAX31856. It
//! programs the chip's conversion mode and signal averaging once, at
//! construction, then converts raw register bytes into calibrated
//! temperature readings: the linearized thermocouple temperature and the
//! cold-junction (internal reference) temperature, plus the raw fault
//! status bitmask.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — Low-level register transaction
//!   primitives that handle chip-select framing and address encoding.
//! - **[`Max31856`]** (public) — Configuration, temperature decoding, and
//!   fault reporting.
//!
//! # Quick start
//!
//! ```ignore
//! use max31856_driver::Max31856;
//!
//! // `spi` is any `embedded-hal` SpiBus in mode 1 or 3; `cs` is the
//! // active-low chip-select pin as an OutputPin.
//! let mut sensor = Max31856::new(spi, cs)?;
//!
//! let celsius = sensor.read_temperature()?;
//! ```
//!
//! The driver is single-threaded, synchronous, and blocking. It assumes
//! exclusive use of the bus while a transaction is in flight; a
//! multi-threaded host must serialize calls itself.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error and
//!   configuration types for embedded logging.

#![no_std]

pub use config::{AveragingMode, Config, ConversionMode, ThermocoupleType};
pub use error::Max31856Error;
pub use fault::FaultStatus;
pub use max31856::Max31856;

mod config;
mod driver;
mod error;
mod fault;
mod max31856;
pub mod registers;
