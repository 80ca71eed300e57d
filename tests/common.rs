#![cfg(not(feature = "async"))]
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;

use bq25672_rs::{Bq25672, ByteCount, I2cTransport, NullSink, PollCounter, Transport};
use embedded_hal::i2c::{ErrorType, I2c, Operation};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

pub const BQ25672_ADDR: u8 = 0x6B;

/// A mock I2C device that can be programmed with expected transactions.
#[derive(Clone)]
pub struct MockI2c {
    mock: Rc<RefCell<I2cMock>>,
}

impl MockI2c {
    pub fn new(transactions: &[I2cTransaction]) -> Self {
        Self {
            mock: Rc::new(RefCell::new(I2cMock::new(transactions))),
        }
    }

    /// Verifies that all expected transactions occurred.
    pub fn done(self) {
        self.mock.borrow_mut().done();
    }
}

impl ErrorType for MockI2c {
    type Error = embedded_hal::i2c::ErrorKind;
}

impl I2c for MockI2c {
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.mock
            .borrow_mut()
            .write(address, bytes)
            .map_err(|_| embedded_hal::i2c::ErrorKind::Other)
    }

    fn read(&mut self, address: u8, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.mock
            .borrow_mut()
            .read(address, bytes)
            .map_err(|_| embedded_hal::i2c::ErrorKind::Other)
    }

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.mock
            .borrow_mut()
            .write_read(address, bytes, buffer)
            .map_err(|_| embedded_hal::i2c::ErrorKind::Other)
    }

    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.mock
            .borrow_mut()
            .transaction(address, operations)
            .map_err(|_| embedded_hal::i2c::ErrorKind::Other)
    }
}

/// Creates a driver over the mocked bus and returns a handle for verification.
pub fn create_i2c_driver(
    transactions: &[I2cTransaction],
) -> (Bq25672<I2cTransport<MockI2c>, PollCounter, NullSink>, MockI2c) {
    let i2c = MockI2c::new(transactions);
    let driver = Bq25672::new_i2c(i2c.clone());
    (driver, i2c)
}

/// Expected transactions of a register read through [`I2cTransport`].
pub fn expect_read(register: u8, reply: &[u8]) -> [I2cTransaction; 2] {
    [
        I2cTransaction::write(BQ25672_ADDR, vec![register]),
        I2cTransaction::read(BQ25672_ADDR, reply.to_vec()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// Nobody acknowledged the address.
    Nack,
    /// The transaction was aborted by injected failure.
    Aborted,
}

/// In-memory register file behaving like a BQ25672 behind [`Transport`].
///
/// Two-byte registers are stored MSB first, as the chip sends them.
pub struct RegisterBank {
    pub registers: [u8; 0x49],
    pointer: usize,
    rx: VecDeque<u8>,
    /// Registers whose address write fails.
    failing: BTreeSet<u8>,
    /// Replies become visible only after this many `available` polls.
    arrive_after: Option<u32>,
    polls: Cell<u32>,
    pub writes: Vec<Vec<u8>>,
    pub opened: bool,
}

impl RegisterBank {
    pub fn new() -> Self {
        Self {
            registers: [0; 0x49],
            pointer: 0,
            rx: VecDeque::new(),
            failing: BTreeSet::new(),
            arrive_after: None,
            polls: Cell::new(0),
            writes: Vec::new(),
            opened: false,
        }
    }

    pub fn with(mut self, register: u8, bytes: &[u8]) -> Self {
        let start = register as usize;
        self.registers[start..start + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn fail(mut self, register: u8) -> Self {
        self.failing.insert(register);
        self
    }

    pub fn set_failing(&mut self, register: u8, failing: bool) {
        if failing {
            self.failing.insert(register);
        } else {
            self.failing.remove(&register);
        }
    }

    pub fn arrive_after(mut self, polls: u32) -> Self {
        self.arrive_after = Some(polls);
        self
    }

    pub fn byte(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    pub fn word(&self, register: u8) -> u16 {
        u16::from_be_bytes([self.byte(register), self.byte(register + 1)])
    }

    /// Bytes received but never consumed by the driver.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Register-write transactions, excluding pointer-only writes and probes.
    pub fn register_writes(&self) -> Vec<Vec<u8>> {
        self.writes.iter().filter(|w| w.len() > 1).cloned().collect()
    }

    fn visible(&self) -> bool {
        match self.arrive_after {
            Some(after) => self.polls.get() >= after,
            None => true,
        }
    }
}

impl Transport for RegisterBank {
    type Error = BankError;

    fn open(&mut self, _setup: Option<&bq25672_rs::BusSetup>) -> Result<(), BankError> {
        self.opened = true;
        Ok(())
    }

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), BankError> {
        if address != BQ25672_ADDR {
            return Err(BankError::Nack);
        }
        self.writes.push(bytes.to_vec());
        let Some((register, data)) = bytes.split_first() else {
            return Ok(());
        };
        if self.failing.contains(register) {
            return Err(BankError::Aborted);
        }
        self.pointer = *register as usize;
        for (offset, byte) in data.iter().enumerate() {
            self.registers[self.pointer + offset] = *byte;
        }
        Ok(())
    }

    fn request(&mut self, address: u8, count: ByteCount) -> Result<(), BankError> {
        if address != BQ25672_ADDR {
            return Err(BankError::Nack);
        }
        self.rx.clear();
        self.polls.set(0);
        for offset in 0..count.len() {
            self.rx.push_back(self.registers[self.pointer + offset]);
        }
        Ok(())
    }

    fn available(&self) -> usize {
        self.polls.set(self.polls.get() + 1);
        if self.visible() {
            self.rx.len()
        } else {
            0
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.visible() {
            self.rx.pop_front()
        } else {
            None
        }
    }
}

/// A clock that advances `step` milliseconds each time it is read, starting at `start`.
pub fn stepping_clock(start: u32, step: u32) -> impl FnMut() -> u32 {
    let mut now = start.wrapping_sub(step);
    move || {
        now = now.wrapping_add(step);
        now
    }
}

pub fn create_bank_driver(
    bank: RegisterBank,
) -> Bq25672<RegisterBank, impl FnMut() -> u32, NullSink> {
    Bq25672::new(bank, stepping_clock(0, 1))
}
