//! Bit-field descriptions and the raw/engineering value codec.
//!
//! A [`FieldSpec`] names a region `[start, end]` (inclusive, bit 0 = LSB) of a
//! one- or two-byte register together with the linear transform
//! `raw × scale + offset` that turns the raw bits into an engineering value.
//! The functions here never touch the bus; the driver combines them with
//! [`crate::RegisterAccess`] to implement read-modify-write.

use crate::registers::Register;

/// Width of a register transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteCount {
    One = 1,
    /// Big-endian: the first byte on the wire is the most significant one.
    Two = 2,
}

impl ByteCount {
    /// Number of bytes on the wire.
    pub const fn len(self) -> usize {
        self as usize
    }

    /// Number of addressable bits in the assembled register value.
    pub const fn bits(self) -> u8 {
        match self {
            ByteCount::One => 8,
            ByteCount::Two => 16,
        }
    }
}

/// An inclusive bit range inside an assembled register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitRange {
    start: u8,
    end: u8,
}

impl BitRange {
    /// Creates a range covering bits `start..=end`.
    ///
    /// Panics (at compile time when used in a constant) if `start > end` or
    /// `end > 15`.
    pub const fn new(start: u8, end: u8) -> Self {
        assert!(start <= end, "bit range start must not exceed its end");
        assert!(end < 16, "bit range must fit in a 16-bit register");
        Self { start, end }
    }

    /// A single bit.
    pub const fn bit(bit: u8) -> Self {
        Self::new(bit, bit)
    }

    pub const fn start(self) -> u8 {
        self.start
    }

    pub const fn end(self) -> u8 {
        self.end
    }

    /// Number of bits covered by the range.
    pub const fn width(self) -> u8 {
        self.end - self.start + 1
    }

    /// Largest raw value the field can hold.
    pub const fn max_raw(self) -> u16 {
        u16::MAX >> (16 - self.width())
    }

    /// Register bits owned by this field.
    pub const fn mask(self) -> u16 {
        self.max_raw() << self.start
    }

    /// Extracts the raw field value from a full register value.
    pub const fn extract(self, register: u16) -> u16 {
        (register & self.mask()) >> self.start
    }

    /// Returns `register` with the field replaced by `raw`, or `None` if `raw`
    /// does not fit the field. Bits outside the range are preserved.
    pub const fn inject(self, register: u16, raw: u16) -> Option<u16> {
        if raw > self.max_raw() {
            return None;
        }
        Some((register & !self.mask()) | (raw << self.start))
    }
}

/// Whether a field may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// Engineering unit produced by a field's transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Millivolt,
    Milliampere,
    DegreeCelsius,
    Percent,
    /// Number of battery cells in series.
    Cells,
    /// Single-bit boolean.
    Flag,
    /// Enumerated code, see [`FieldSpec::codes`].
    Code,
    /// Unscaled value.
    Raw,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Millivolt => "mV",
            Unit::Milliampere => "mA",
            Unit::DegreeCelsius => "°C",
            Unit::Percent => "%",
            Unit::Cells => "S",
            Unit::Flag | Unit::Code | Unit::Raw => "",
        }
    }
}

/// Static description of one named property of the register map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub register: Register,
    pub byte_count: ByteCount,
    pub bits: BitRange,
    /// Engineering units per raw LSB.
    pub scale: f32,
    pub offset: f32,
    /// Raw data is two's complement of the field width.
    pub signed: bool,
    pub access: Access,
    pub unit: Unit,
    /// Meaning of each raw code, indexed by the code. `"-"` marks reserved codes.
    pub codes: &'static [&'static str],
}

impl FieldSpec {
    /// A read-write, unscaled field over `start..=end` of `register`.
    ///
    /// The byte count follows the register width; a range reaching past the
    /// register is rejected at compile time.
    pub const fn new(name: &'static str, register: Register, start: u8, end: u8) -> Self {
        let byte_count = register.width();
        assert!(
            end < byte_count.bits(),
            "bit range exceeds the register width"
        );
        Self {
            name,
            register,
            byte_count,
            bits: BitRange::new(start, end),
            scale: 1.0,
            offset: 0.0,
            signed: false,
            access: Access::ReadWrite,
            unit: Unit::Raw,
            codes: &[],
        }
    }

    /// Applies `raw × scale + offset` in `unit`.
    pub const fn scaled(self, scale: f32, offset: f32, unit: Unit) -> Self {
        Self {
            scale,
            offset,
            unit,
            ..self
        }
    }

    /// Marks the raw data as two's complement.
    pub const fn signed(self) -> Self {
        Self {
            signed: true,
            ..self
        }
    }

    pub const fn read_only(self) -> Self {
        Self {
            access: Access::ReadOnly,
            ..self
        }
    }

    /// A single-bit boolean.
    pub const fn flag(self) -> Self {
        Self {
            unit: Unit::Flag,
            ..self
        }
    }

    /// An enumerated field with one description per raw code.
    pub const fn codes(self, codes: &'static [&'static str]) -> Self {
        Self {
            unit: Unit::Code,
            codes,
            ..self
        }
    }

    pub const fn is_writable(&self) -> bool {
        matches!(self.access, Access::ReadWrite)
    }

    /// Converts a raw field value into engineering units.
    pub fn to_engineering(&self, raw: u16) -> f32 {
        to_engineering(raw, self.bits, self.scale, self.offset, self.signed)
    }

    /// Converts an engineering value into a raw field value, truncating toward
    /// zero unless the value sits within rounding noise of the next step. The
    /// result is not checked against the field width.
    pub fn from_engineering(&self, value: f32) -> i32 {
        from_engineering(value, self.scale, self.offset)
    }

    /// Converts an engineering value into the bits stored in the field, or
    /// `None` if it does not fit. Only signed fields accept negative results.
    pub fn encode(&self, value: f32) -> Option<u16> {
        if !value.is_finite() {
            return None;
        }
        let raw = self.from_engineering(value);
        if self.signed {
            let half = 1i32 << (self.bits.width() - 1);
            (-half..half)
                .contains(&raw)
                .then(|| raw as u16 & self.bits.max_raw())
        } else {
            u16::try_from(raw)
                .ok()
                .filter(|raw| *raw <= self.bits.max_raw())
        }
    }

    /// Description of a raw code, if the field is enumerated and the code is not reserved.
    pub fn describe(&self, raw: u16) -> Option<&'static str> {
        self.codes
            .get(raw as usize)
            .copied()
            .filter(|meaning| *meaning != "-")
    }
}

/// Reinterprets the low `width` bits of `raw` as a two's complement integer.
pub const fn sign_extend(raw: u16, width: u8) -> i32 {
    let shift = 32 - width as u32;
    ((raw as i32) << shift) >> shift
}

/// `raw × scale + offset`, sign-extending `raw` from the range width first when `signed`.
pub fn to_engineering(raw: u16, bits: BitRange, scale: f32, offset: f32, signed: bool) -> f32 {
    let value = if signed {
        sign_extend(raw, bits.width()) as f32
    } else {
        raw as f32
    };
    value * scale + offset
}

/// Fraction of a step below which a value is taken to be on the step itself.
const STEP_EPSILON: f32 = 1e-3;

/// `(value − offset) / scale`, truncated toward zero.
///
/// A value that misses a step only by float error (e.g. `3.0 V` arriving as
/// `2999.9998 mV`) lands on that step instead of the one below it.
pub fn from_engineering(value: f32, scale: f32, offset: f32) -> i32 {
    let steps = (value - offset) / scale;
    let truncated = steps as i32;
    if steps > 0.0 && truncated as f32 + 1.0 - steps < STEP_EPSILON {
        truncated.saturating_add(1)
    } else if steps < 0.0 && steps - (truncated as f32 - 1.0) < STEP_EPSILON {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mask_and_extract() {
        let bits = BitRange::new(0, 5);
        assert_eq!(bits.width(), 6);
        assert_eq!(bits.mask(), 0b0011_1111);
        assert_eq!(bits.extract(0b1100_0010), 2);

        let high = BitRange::new(6, 7);
        assert_eq!(high.mask(), 0b1100_0000);
        assert_eq!(high.extract(0b1100_0010), 0b11);

        let full = BitRange::new(0, 15);
        assert_eq!(full.width(), 16);
        assert_eq!(full.mask(), 0xFFFF);
        assert_eq!(full.max_raw(), 0xFFFF);
        assert_eq!(full.extract(0xABCD), 0xABCD);
    }

    #[test]
    fn test_inject_preserves_neighbours() {
        let bits = BitRange::new(2, 4);
        let updated = bits.inject(0b1110_0011, 0b010).unwrap();
        assert_eq!(updated, 0b1110_1011);
        assert_eq!(updated & !bits.mask(), 0b1110_0011 & !bits.mask());

        let top = BitRange::bit(15);
        assert_eq!(top.inject(0x1234, 1), Some(0x9234));
        assert_eq!(top.inject(0x9234, 0), Some(0x1234));
    }

    #[test]
    fn test_inject_rejects_wide_values() {
        let bits = BitRange::new(0, 5);
        assert_eq!(bits.inject(0, 63), Some(63));
        assert_eq!(bits.inject(0, 64), None);
        assert_eq!(BitRange::bit(3).inject(0, 2), None);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0xFFFF, 16), -1);
        assert_eq!(sign_extend(0x8000, 16), i16::MIN as i32);
        assert_eq!(sign_extend(0x7FFF, 16), i16::MAX as i32);
        assert_eq!(sign_extend(0b100, 3), -4);
        assert_eq!(sign_extend(0b011, 3), 3);
    }

    #[test]
    fn test_engineering_conversion() {
        let bits = BitRange::new(0, 5);
        assert_relative_eq!(to_engineering(2, bits, 250.0, 2500.0, false), 3000.0);
        assert_eq!(from_engineering(3000.0, 250.0, 2500.0), 2);
        // truncation toward zero
        assert_eq!(from_engineering(3249.0, 250.0, 2500.0), 2);
        assert_eq!(from_engineering(2400.0, 250.0, 2500.0), 0);
        assert_eq!(from_engineering(2000.0, 250.0, 2500.0), -2);
        assert_eq!(from_engineering(2999.9998, 10.0, 0.0), 300);
        assert_eq!(from_engineering(9.999_999, 10.0, 0.0), 1);
        assert_eq!(from_engineering(-0.999_99, 1.0, 0.0), -1);
        assert_eq!(from_engineering(3245.0, 250.0, 2500.0), 2);

        let full = BitRange::new(0, 15);
        assert_relative_eq!(to_engineering(0xFFFF, full, 0.5, 0.0, true), -0.5);
        assert_relative_eq!(to_engineering(0x8000, full, 1.0, 0.0, true), -32768.0);
        assert_relative_eq!(to_engineering(0xFFFF, full, 1.0, 0.0, false), 65535.0);
    }

    #[test]
    fn test_describe_skips_reserved_codes() {
        let spec = FieldSpec::new("ico", Register::ChargerStatus2, 6, 7)
            .read_only()
            .codes(&["Disabled", "In progress", "Done", "-"]);
        assert_eq!(spec.unit, Unit::Code);
        assert_eq!(spec.describe(1), Some("In progress"));
        assert_eq!(spec.describe(3), None);
        assert_eq!(spec.describe(9), None);
        assert!(!spec.is_writable());
    }

    #[test]
    fn test_byte_count_follows_register() {
        let one = FieldSpec::new("vsysmin", Register::MinSystemVoltage, 0, 5);
        assert_eq!(one.byte_count, ByteCount::One);
        let two = FieldSpec::new("vreg", Register::ChargeVoltageLimit, 0, 10);
        assert_eq!(two.byte_count, ByteCount::Two);
        assert_eq!(two.byte_count.len(), 2);
    }

    #[test]
    fn test_encode() {
        let vsysmin = FieldSpec::new("vsysmin", Register::MinSystemVoltage, 0, 5)
            .scaled(250.0, 2500.0, Unit::Millivolt);
        assert_eq!(vsysmin.encode(3000.0), Some(2));
        assert_eq!(vsysmin.encode(2500.0 + 63.0 * 250.0), Some(63));
        assert_eq!(vsysmin.encode(2500.0 + 64.0 * 250.0), None);
        assert_eq!(vsysmin.encode(2000.0), None);
        assert_eq!(vsysmin.encode(f32::NAN), None);
        assert_eq!(vsysmin.encode(f32::INFINITY), None);

        let ibus = FieldSpec::new("ibus", Register::IbusAdc, 0, 15)
            .scaled(1.0, 0.0, Unit::Milliampere)
            .signed();
        assert_eq!(ibus.encode(-1.0), Some(0xFFFF));
        assert_eq!(ibus.encode(-32768.0), Some(0x8000));
        assert_eq!(ibus.encode(32767.0), Some(0x7FFF));
        assert_eq!(ibus.encode(32768.0), None);
    }

    #[test]
    #[should_panic]
    fn test_inverted_range_panics() {
        let _ = BitRange::new(5, 2);
    }
}
