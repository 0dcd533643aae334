//! Chip-select discipline tests against a recording fake.
//!
//! `embedded-hal-mock` checks per-capability expectations, but it cannot
//! observe the *interleaving* of pin edges and bus traffic. The fake chip
//! here shares one event log between the bus and the chip-select pin, so
//! the tests can assert the full transaction shape: select asserted exactly
//! once, all traffic inside the window, deasserted exactly once — on error
//! paths too.

use core::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use max31856_driver::{registers, Max31856, Max31856Error};

// ---------------------------------------------------------------------------
// Recording fake: a MAX31856 register file behind an SPI bus and a CS pin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    SelectLow,
    SelectHigh,
    Write(Vec<u8>),
    Read(usize),
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BusFault;

impl spi::Error for BusFault {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl digital::Error for BusFault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Shared chip state: the register file, the auto-incrementing read
/// pointer, and the event log both capabilities append to.
#[derive(Default)]
struct ChipState {
    log: Vec<Event>,
    registers: [u8; 16],
    pointer: usize,
    selected: bool,
    fail_writes: bool,
}

fn fake_chip() -> (Rc<RefCell<ChipState>>, FakeBus, FakeSelect) {
    let chip = Rc::new(RefCell::new(ChipState::default()));
    let bus = FakeBus { chip: chip.clone() };
    let select = FakeSelect { chip: chip.clone() };
    (chip, bus, select)
}

struct FakeBus {
    chip: Rc<RefCell<ChipState>>,
}

impl spi::ErrorType for FakeBus {
    type Error = BusFault;
}

impl SpiBus<u8> for FakeBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
        let mut chip = self.chip.borrow_mut();
        assert!(chip.selected, "bus read while chip-select deasserted");
        chip.log.push(Event::Read(words.len()));
        for word in words.iter_mut() {
            *word = chip.registers[chip.pointer];
            chip.pointer = (chip.pointer + 1) % chip.registers.len();
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), BusFault> {
        let mut chip = self.chip.borrow_mut();
        assert!(chip.selected, "bus write while chip-select deasserted");
        chip.log.push(Event::Write(words.to_vec()));
        if chip.fail_writes {
            return Err(BusFault);
        }
        // First byte is the address: high bit means register write, plain
        // address sets the auto-increment read pointer.
        if let Some((&address, payload)) = words.split_first() {
            if address & 0x80 != 0 {
                let mut index = (address & 0x0F) as usize;
                for &value in payload {
                    chip.registers[index] = value;
                    index = (index + 1) % chip.registers.len();
                }
            } else {
                chip.pointer = (address & 0x0F) as usize;
            }
        }
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), BusFault> {
        unreachable!("driver does not use full-duplex transfers")
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), BusFault> {
        unreachable!("driver does not use full-duplex transfers")
    }

    fn flush(&mut self) -> Result<(), BusFault> {
        self.chip.borrow_mut().log.push(Event::Flush);
        Ok(())
    }
}

struct FakeSelect {
    chip: Rc<RefCell<ChipState>>,
}

impl digital::ErrorType for FakeSelect {
    type Error = BusFault;
}

impl OutputPin for FakeSelect {
    fn set_low(&mut self) -> Result<(), BusFault> {
        let mut chip = self.chip.borrow_mut();
        chip.selected = true;
        chip.log.push(Event::SelectLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), BusFault> {
        let mut chip = self.chip.borrow_mut();
        chip.selected = false;
        chip.log.push(Event::SelectHigh);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn every_transaction_is_framed_by_one_select_cycle() {
    let (chip, bus, select) = fake_chip();
    chip.borrow_mut().registers[0x0A..=0x0B].copy_from_slice(&[0x19, 0x00]);

    let mut sensor = Max31856::new(bus, select).unwrap();
    assert_eq!(sensor.read_internal_temperature().unwrap(), 25.0);

    let expected = vec![
        // CR0 <- continuous conversion
        Event::SelectLow,
        Event::Write(vec![0x80, 0x80]),
        Event::Flush,
        Event::SelectHigh,
        // CR1 <- 16-sample averaging, type K
        Event::SelectLow,
        Event::Write(vec![0x81, 0x43]),
        Event::Flush,
        Event::SelectHigh,
        // CJTH/CJTL read
        Event::SelectLow,
        Event::Write(vec![0x0A]),
        Event::Read(2),
        Event::Flush,
        Event::SelectHigh,
    ];
    assert_eq!(chip.borrow().log, expected);
}

#[test]
fn assert_and_deassert_counts_match_transaction_count() {
    let (chip, bus, select) = fake_chip();

    let mut sensor = Max31856::new(bus, select).unwrap();
    let _ = sensor.read_temperature().unwrap();
    let _ = sensor.read_internal_temperature().unwrap();
    let _ = sensor.read_fault().unwrap();

    let log = &chip.borrow().log;
    let asserts = log.iter().filter(|e| **e == Event::SelectLow).count();
    let deasserts = log.iter().filter(|e| **e == Event::SelectHigh).count();
    // 2 configuration writes + 3 reads.
    assert_eq!(asserts, 5);
    assert_eq!(deasserts, 5);
    assert!(!chip.borrow().selected);
}

#[test]
fn chip_select_released_when_the_bus_write_fails() {
    let (chip, bus, select) = fake_chip();

    let mut sensor = Max31856::new(bus, select).unwrap();
    chip.borrow_mut().fail_writes = true;

    let result = sensor.write_register(registers::MASK_WRITE, 0x00);
    assert_eq!(result, Err(Max31856Error::Spi(BusFault)));

    // The failed transaction still closes its chip-select window.
    let log = &chip.borrow().log;
    assert_eq!(
        log[log.len() - 3..],
        [
            Event::SelectLow,
            Event::Write(vec![registers::MASK_WRITE, 0x00]),
            Event::SelectHigh,
        ]
    );
    assert!(!chip.borrow().selected);
}

#[test]
fn configuration_lands_in_the_register_file() {
    let (chip, bus, select) = fake_chip();

    let mut sensor = Max31856::new(bus, select).unwrap();
    assert_eq!(chip.borrow().registers[0x00], 0x80);
    assert_eq!(chip.borrow().registers[0x01], 0x43);

    // Reading CR1 back through the driver round-trips, twice.
    let first: [u8; 1] = sensor.read_registers(registers::CR1_READ).unwrap();
    let second: [u8; 1] = sensor.read_registers(registers::CR1_READ).unwrap();
    assert_eq!(first, [0x43]);
    assert_eq!(first, second);
}
