#![no_std]
//! Register-map driver for the TI BQ25672 buck-boost battery charger.
//!
//! Every property of the chip is described by a [`FieldSpec`] in [`fields`].
//! The driver reads a field by fetching its one- or two-byte register and
//! masking out the field bits, and writes it with a read-modify-write that
//! leaves the neighbouring bits of the register untouched.
//!
//! ```ignore
//! let mut charger = Bq25672::new_i2c(i2c);
//! charger.begin(None)?;
//! charger.write_value(&fields::MIN_SYSTEM_VOLTAGE, 3000.0)?;
//! let vbat = charger.read_value(&fields::BATTERY_VOLTAGE)?;
//! ```
//!
//! Enable the `async` feature to get the same API as `async fn`s over
//! `embedded-hal-async`.

#[macro_use]
extern crate uom;

#[cfg(feature = "defmt")]
extern crate defmt;

use core::fmt::Write;

pub mod bus;
pub mod field;
pub mod fields;
pub mod flags;
pub mod registers;
pub mod units;

mod accessors;
mod data_types;
mod errors;

pub use bus::{BusSetup, Clock, I2cTransport, PollCounter, Transport};
pub use data_types::{
    AdcMode, AdcResolution, ChargeStatus, FastChargeTimer, IcoStatus, Measurements,
    PartInformation, Status, VbusStatus, WatchdogTimer,
};
pub use errors::Error;
pub use field::{Access, BitRange, ByteCount, FieldSpec, Unit};
pub use flags::{FlagCache, NullSink};
pub use registers::{Register, DEFAULT_ADDRESS};

use registers::FLAG_REGISTERS;

/// Prefix of every diagnostic line written by [`Bq25672::refresh_flags`].
pub const DIAGNOSTIC_PREFIX: &str = "BQ25672: ";

/// Driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit device address.
    pub address: u8,
    /// How long to wait for a register reply, in ticks of the driver's
    /// [`Clock`]. With [`PollCounter`] one tick is one poll of the transport.
    pub timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            timeout_ms: 50,
        }
    }
}

/// BQ25672 driver
pub struct Bq25672<T, C, W = NullSink> {
    transport: T,
    clock: C,
    sink: W,
    config: Config,
    flags: FlagCache,
}

impl<T, C> Bq25672<T, C, NullSink> {
    /// Creates a driver with the default address and timeout.
    ///
    /// # Arguments
    ///
    /// * `transport` - The bus the charger is attached to.
    /// * `clock` - Millisecond time source bounding register reads.
    pub fn new(transport: T, clock: C) -> Self {
        Self::with_config(transport, clock, Config::default())
    }

    pub fn with_config(transport: T, clock: C, config: Config) -> Self {
        Self {
            transport,
            clock,
            sink: NullSink,
            config,
            flags: FlagCache::new(),
        }
    }
}

impl<I2C> Bq25672<I2cTransport<I2C>, PollCounter, NullSink> {
    /// Creates a driver on an `embedded-hal` I2C bus at the default address.
    ///
    /// Reads are bounded by a [`PollCounter`], so the timeout counts polls
    /// rather than milliseconds. Use [`Self::new_i2c_with_clock`] when a real
    /// millisecond source is available.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::new(I2cTransport::new(i2c), PollCounter::default())
    }
}

impl<I2C, C> Bq25672<I2cTransport<I2C>, C, NullSink> {
    /// Creates a driver on an `embedded-hal` I2C bus whose reads are bounded
    /// by `clock`.
    pub fn new_i2c_with_clock(i2c: I2C, clock: C) -> Self {
        Self::new(I2cTransport::new(i2c), clock)
    }
}

impl<T, C, W> Bq25672<T, C, W> {
    /// Routes the flag descriptions printed by [`Self::refresh_flags`] to `sink`.
    pub fn with_diagnostics<S: Write>(self, sink: S) -> Bq25672<T, C, S> {
        Bq25672 {
            transport: self.transport,
            clock: self.clock,
            sink,
            config: self.config,
            flags: self.flags,
        }
    }

    /// Gives back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timeout_ms(&self) -> u32 {
        self.config.timeout_ms
    }

    /// Changes the reply timeout for all following register reads, in clock
    /// ticks.
    pub fn set_timeout_ms(&mut self, timeout_ms: u32) {
        self.config.timeout_ms = timeout_ms;
    }

    /// The flag snapshot taken by the last [`Self::refresh_flags`].
    pub fn flags(&self) -> &FlagCache {
        &self.flags
    }

    /// Whether `bit` of flag register `index` (0 = REG22) was set at the last
    /// refresh. Always `false` before the first refresh.
    pub fn flag(&self, index: usize, bit: u8) -> bool {
        self.flags.flag(index, bit)
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "RegisterAccess",),
    async(feature = "async", keep_self)
)]
#[allow(async_fn_in_trait)]
/// Whole-register access.
pub trait RegisterAccess<E>
where
    Self: Sized,
{
    /// Reads `count` bytes starting at `register`. Two bytes are assembled
    /// big-endian.
    async fn read_register(&mut self, register: Register, count: ByteCount)
        -> Result<u16, Error<E>>;

    /// Writes the low `count` bytes of `value` to `register`, high byte first.
    async fn write_register(
        &mut self,
        register: Register,
        value: u16,
        count: ByteCount,
    ) -> Result<(), Error<E>>;
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Bq25672",),
    async(feature = "async", keep_self)
)]
impl<T, C, W, E> RegisterAccess<E> for Bq25672<T, C, W>
where
    T: Transport<Error = E>,
    C: Clock,
    W: Write,
{
    async fn read_register(
        &mut self,
        register: Register,
        count: ByteCount,
    ) -> Result<u16, Error<E>> {
        let address = self.config.address;
        self.transport
            .write(address, &[register.address()])
            .await
            .map_err(Error::Bus)?;
        self.transport
            .request(address, count)
            .await
            .map_err(Error::Bus)?;

        let start = self.clock.now_ms();
        while self.transport.available() < count.len() {
            if self.clock.now_ms().wrapping_sub(start) > self.config.timeout_ms {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Timed out after {} ms waiting for {} byte(s) from register {:#x}",
                    self.config.timeout_ms,
                    count.len(),
                    register.address()
                );
                return Err(Error::Timeout);
            }
        }

        let mut value = 0u16;
        for _ in 0..count.len() {
            let byte = self.transport.read_byte().ok_or(Error::InvalidData)?;
            value = (value << 8) | u16::from(byte);
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("Read {:#x} from register {:#x}", value, register.address());
        Ok(value)
    }

    async fn write_register(
        &mut self,
        register: Register,
        value: u16,
        count: ByteCount,
    ) -> Result<(), Error<E>> {
        let [high, low] = value.to_be_bytes();
        let mut data = heapless::Vec::<u8, 3>::new();
        data.push(register.address())
            .map_err(|_| Error::InvalidData)?;
        if count == ByteCount::Two {
            data.push(high).map_err(|_| Error::InvalidData)?;
        }
        data.push(low).map_err(|_| Error::InvalidData)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Write {:#x} to register {:#x}", value, register.address());
        self.transport
            .write(self.config.address, &data)
            .await
            .map_err(Error::Bus)
    }
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), self = "Bq25672",),
    async(feature = "async", keep_self)
)]
impl<T, C, W, E> Bq25672<T, C, W>
where
    T: Transport<Error = E>,
    C: Clock,
    W: Write,
{
    /// Opens the transport and checks that the charger acknowledges its address.
    pub async fn begin(&mut self, setup: Option<BusSetup>) -> Result<(), Error<E>> {
        self.transport
            .open(setup.as_ref())
            .await
            .map_err(Error::Bus)?;
        self.transport
            .write(self.config.address, &[])
            .await
            .map_err(Error::Bus)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("BQ25672 acknowledged at {:#x}", self.config.address);
        Ok(())
    }

    /// Reads the raw bits of a field.
    pub async fn read_field(&mut self, spec: &FieldSpec) -> Result<u16, Error<E>> {
        let value = self.read_register(spec.register, spec.byte_count).await?;
        Ok(spec.bits.extract(value))
    }

    /// Replaces the raw bits of a field, keeping the rest of the register.
    ///
    /// The register is read back from the chip first; the write is not
    /// verified afterwards.
    pub async fn write_field(&mut self, spec: &FieldSpec, raw: u16) -> Result<(), Error<E>> {
        if !spec.is_writable() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Field {} is read-only", spec.name);
            return Err(Error::ReadOnly);
        }
        if raw > spec.bits.max_raw() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Raw value {} does not fit the {}-bit field {}",
                raw,
                spec.bits.width(),
                spec.name
            );
            return Err(Error::OutOfRange);
        }

        let current = self.read_register(spec.register, spec.byte_count).await?;
        let updated = spec.bits.inject(current, raw).ok_or(Error::OutOfRange)?;
        self.write_register(spec.register, updated, spec.byte_count)
            .await
    }

    /// Reads a field in its engineering unit (see [`FieldSpec::unit`]).
    pub async fn read_value(&mut self, spec: &FieldSpec) -> Result<f32, Error<E>> {
        let raw = self.read_field(spec).await?;
        Ok(spec.to_engineering(raw))
    }

    /// Writes a field from a value in its engineering unit. The value is
    /// truncated to a whole number of LSBs.
    pub async fn write_value(&mut self, spec: &FieldSpec, value: f32) -> Result<(), Error<E>> {
        if !spec.is_writable() {
            return Err(Error::ReadOnly);
        }
        let Some(raw) = spec.encode(value) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("Value {} is out of range for field {}", value, spec.name);
            return Err(Error::OutOfRange);
        };
        self.write_field(spec, raw).await
    }

    pub async fn read_bool(&mut self, spec: &FieldSpec) -> Result<bool, Error<E>> {
        Ok(self.read_field(spec).await? != 0)
    }

    pub async fn write_bool(&mut self, spec: &FieldSpec, value: bool) -> Result<(), Error<E>> {
        self.write_field(spec, u16::from(value)).await
    }

    /// Reads an enumerated field and returns its meaning, or `None` for
    /// fields without code descriptions and for reserved codes.
    pub async fn read_description(
        &mut self,
        spec: &FieldSpec,
    ) -> Result<Option<&'static str>, Error<E>> {
        let raw = self.read_field(spec).await?;
        Ok(spec.describe(raw))
    }

    /// Captures the six flag registers (REG22 to REG27).
    ///
    /// Every register is read even if an earlier one fails. A register that
    /// could not be read keeps its previous snapshot and is reported in
    /// [`Error::FlagRefresh`]. For each register that was read, one line per
    /// set bit is written to the diagnostic sink.
    pub async fn refresh_flags(&mut self) -> Result<(), Error<E>> {
        let mut failed = 0u8;
        for (index, register) in FLAG_REGISTERS.iter().enumerate() {
            match self.read_register(*register, ByteCount::One).await {
                Ok(value) => {
                    let byte = value as u8;
                    self.flags.store(index, byte);
                    for description in flags::asserted(index, byte) {
                        // diagnostics never affect the result
                        let _ = writeln!(self.sink, "{}{}", DIAGNOSTIC_PREFIX, description);
                    }
                }
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Failed to read flag register {:#x}", register.address());
                    failed |= 1 << index;
                }
            }
        }

        if failed == 0 {
            Ok(())
        } else {
            Err(Error::FlagRefresh { failed })
        }
    }
}
