//! Simple thermocouple example
//!
//! Demonstrates basic usage of the max31856-driver crate on the Raspberry Pi
//! Pico 2. Configures the converter for a type K thermocouple in continuous
//! conversion mode, then polls the probe and cold-junction temperatures once
//! per second and logs them via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | SPI0 SCK  | GP18       |                              |
//! | SPI0 MOSI | GP19       | MAX31856 SDI                 |
//! | SPI0 MISO | GP16       | MAX31856 SDO                 |
//! | CS        | GP17       | Active-low, idle high        |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use max31856_driver::{FaultStatus, Max31856};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- SPI bus (GP18 = SCK, GP19 = MOSI, GP16 = MISO), mode 1 ---
    // The MAX31856 only speaks SPI mode 1 or 3.
    let mut config = spi::Config::default();
    config.frequency = 5_000_000;
    config.polarity = Polarity::IdleLow;
    config.phase = Phase::CaptureOnSecondTransition;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, config);

    // --- Chip-select (GP17, active-low, idle high) ---
    let cs = Output::new(p.PIN_17, Level::High);

    // --- Thermocouple converter, default config: type K, continuous, 16x avg ---
    let mut sensor = match Max31856::new(spi, cs) {
        Ok(sensor) => sensor,
        Err(e) => {
            error!("MAX31856 configuration failed: {}", e);
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    };

    info!("Thermocouple example started — polling once per second");

    loop {
        Timer::after(Duration::from_secs(1)).await;

        match (sensor.read_temperature(), sensor.read_internal_temperature()) {
            (Ok(probe), Ok(cold_junction)) => {
                info!("probe: {} °C, cold junction: {} °C", probe, cold_junction);
            }
            (probe, cold_junction) => {
                error!("read failed: {} / {}", probe.err(), cold_junction.err());
            }
        }

        match sensor.read_fault() {
            Ok(0) => {}
            Ok(raw) => {
                let status = FaultStatus::from_register(raw);
                warn!("fault status {:#x}: {}", raw, status);
            }
            Err(e) => error!("fault read failed: {}", e),
        }
    }
}
