//! The byte-level bus the driver talks through.
//!
//! The driver does not assume a blocking `write_read`: it sends the register
//! address, requests the reply and then polls [`Transport::available`] until
//! the bytes arrive or the configured timeout runs out. [`I2cTransport`] maps
//! this onto any `embedded-hal` I2C bus.

#[cfg(not(feature = "async"))]
use embedded_hal::i2c::I2c;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c;

use crate::field::ByteCount;

/// Optional pin and clock hints handed to [`Transport::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusSetup {
    pub sda: u8,
    pub scl: u8,
    pub frequency_hz: u32,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Transport",),
    async(feature = "async", keep_self)
)]
#[allow(async_fn_in_trait)]
/// A half-duplex bus able to address a device, send bytes and queue a reply.
pub trait Transport {
    type Error;

    /// Prepares the bus. `setup` is `None` when the bus is already configured.
    async fn open(&mut self, setup: Option<&BusSetup>) -> Result<(), Self::Error>;

    /// Sends `bytes` to `address` as one transaction. An empty slice only
    /// checks that the device acknowledges its address.
    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Asks `address` for `count` bytes. Bytes left over from an earlier
    /// request are discarded.
    async fn request(&mut self, address: u8, count: ByteCount) -> Result<(), Self::Error>;

    /// Number of received bytes not yet consumed.
    fn available(&self) -> usize;

    /// Consumes the next received byte.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Monotonic millisecond time source used to bound the reply poll.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch. Allowed to wrap.
    fn now_ms(&mut self) -> u32;
}

impl<F> Clock for F
where
    F: FnMut() -> u32,
{
    fn now_ms(&mut self) -> u32 {
        self()
    }
}

/// A clock that advances by one tick every time it is read.
///
/// It measures polls, not time: a timeout of 50 allows 50 polls however long
/// they take. Suitable for transports whose replies are complete as soon as
/// [`Transport::request`] returns, such as [`I2cTransport`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PollCounter(u32);

impl Clock for PollCounter {
    fn now_ms(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }
}

/// [`Transport`] over an `embedded-hal` I2C bus.
///
/// The register address and the reply are sent as separate transactions; the
/// charger keeps its register pointer across the stop condition.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    rx: [u8; 2],
    len: usize,
    head: usize,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            rx: [0; 2],
            len: 0,
            head: 0,
        }
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "I2cTransport",),
    async(feature = "async", keep_self)
)]
impl<I2C, E> Transport for I2cTransport<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = E;

    async fn open(&mut self, setup: Option<&BusSetup>) -> Result<(), E> {
        // Pins and bus speed are owned by the HAL that built `I2C`.
        if let Some(_setup) = setup {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "I2C bus already configured, ignoring setup: sda={}, scl={}, {} Hz",
                _setup.sda,
                _setup.scl,
                _setup.frequency_hz
            );
        }
        self.len = 0;
        self.head = 0;
        Ok(())
    }

    async fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), E> {
        self.i2c.write(address, bytes).await
    }

    async fn request(&mut self, address: u8, count: ByteCount) -> Result<(), E> {
        self.len = 0;
        self.head = 0;
        let buffer = &mut self.rx[..count.len()];
        self.i2c.read(address, buffer).await?;
        self.len = count.len();
        Ok(())
    }

    fn available(&self) -> usize {
        self.len - self.head
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.head >= self.len {
            return None;
        }
        let byte = self.rx[self.head];
        self.head += 1;
        Some(byte)
    }
}
