#![cfg(not(feature = "async"))]

mod common;

use approx::assert_relative_eq;
use bq25672_rs::{fields, ByteCount, Error, FieldSpec, Unit};
use common::*;

fn register_value(bank: &RegisterBank, spec: &FieldSpec) -> u16 {
    let address = spec.register.address();
    match spec.byte_count {
        ByteCount::One => u16::from(bank.byte(address)),
        ByteCount::Two => bank.word(address),
    }
}

fn fill(spec: &FieldSpec, pattern: u16) -> RegisterBank {
    let address = spec.register.address();
    match spec.byte_count {
        ByteCount::One => RegisterBank::new().with(address, &[pattern as u8]),
        ByteCount::Two => RegisterBank::new().with(address, &pattern.to_be_bytes()),
    }
}

#[test]
fn test_writes_leave_neighbouring_bits_alone() {
    for spec in fields::ALL.iter().filter(|spec| spec.is_writable()) {
        for pattern in [0x0000, 0xFFFF, 0xA5A5, 0x5A5A] {
            for raw in 0..=spec.bits.max_raw() {
                let mut bq = create_bank_driver(fill(spec, pattern));
                let before = register_value(bq.transport(), spec);

                bq.write_field(spec, raw).unwrap();
                assert_eq!(bq.read_field(spec).unwrap(), raw, "{}", spec.name);

                let after = register_value(bq.transport(), spec);
                let mask = spec.bits.mask();
                assert_eq!(after & !mask, before & !mask, "{}", spec.name);
            }
        }
    }
}

#[test]
fn test_unit_round_trip() {
    let scaled = fields::ALL
        .iter()
        .filter(|spec| spec.is_writable())
        .filter(|spec| matches!(spec.unit, Unit::Millivolt | Unit::Milliampere | Unit::Cells));
    for spec in scaled {
        for raw in 0..=spec.bits.max_raw() {
            let value = f32::from(raw) * spec.scale + spec.offset;
            let mut bq = create_bank_driver(RegisterBank::new());

            bq.write_value(spec, value).unwrap();
            assert_relative_eq!(bq.read_value(spec).unwrap(), value);
            assert_eq!(bq.read_field(spec).unwrap(), raw, "{}", spec.name);
        }
    }
}

#[test]
fn test_min_system_voltage_keeps_upper_bits() {
    let mut bq = create_bank_driver(RegisterBank::new().with(0x00, &[0b1100_0000]));

    bq.write_value(&fields::MIN_SYSTEM_VOLTAGE, 3000.0).unwrap();

    assert_eq!(bq.transport().byte(0x00), 0b1100_0010);
    assert_eq!(bq.transport().register_writes(), vec![vec![0x00, 0b1100_0010]]);
    assert_relative_eq!(
        bq.read_value(&fields::MIN_SYSTEM_VOLTAGE).unwrap(),
        3000.0
    );
}

#[test]
fn test_values_between_steps_are_truncated() {
    let mut bq = create_bank_driver(RegisterBank::new());

    bq.write_value(&fields::MIN_SYSTEM_VOLTAGE, 3249.0).unwrap();
    assert_eq!(bq.read_field(&fields::MIN_SYSTEM_VOLTAGE).unwrap(), 2);

    // below the offset
    assert_eq!(
        bq.write_value(&fields::MIN_SYSTEM_VOLTAGE, 2000.0),
        Err(Error::OutOfRange)
    );
}

#[test]
fn test_two_byte_field_keeps_reserved_bits() {
    let mut bq = create_bank_driver(RegisterBank::new().with(0x01, &[0xF8, 0x00]));

    bq.write_value(&fields::CHARGE_VOLTAGE, 16800.0).unwrap();

    assert_eq!(bq.transport().word(0x01), 0xF800 | 1680);
    assert_eq!(
        bq.transport().register_writes(),
        vec![vec![0x01, 0xFE, 0x90]]
    );
}

#[test]
fn test_twos_complement_adc() {
    let bank = RegisterBank::new()
        .with(0x31, &[0xFF, 0xFF])
        .with(0x33, &[0x80, 0x00])
        .with(0x41, &[0x00, 0x33]);
    let mut bq = create_bank_driver(bank);

    assert_relative_eq!(bq.read_value(&fields::INPUT_CURRENT).unwrap(), -1.0);
    assert_relative_eq!(
        bq.read_value(&fields::BATTERY_CURRENT).unwrap(),
        -32768.0
    );
    assert_relative_eq!(bq.read_value(&fields::DIE_TEMPERATURE).unwrap(), 25.5);
}

#[test]
fn test_read_failure_is_not_zero() {
    let mut bq = create_bank_driver(RegisterBank::new().fail(0x3B));

    assert_eq!(
        bq.read_value(&fields::BATTERY_VOLTAGE),
        Err(Error::Bus(BankError::Aborted))
    );
}

#[test]
fn test_reply_at_timeout_boundary_is_accepted() {
    // the clock advances 1 ms per poll, so the 51st poll happens 50 ms in
    let bank = RegisterBank::new()
        .with(0x01, &[0x06, 0x90])
        .arrive_after(51);
    let mut bq = create_bank_driver(bank);

    assert_eq!(bq.read_field(&fields::CHARGE_VOLTAGE).unwrap(), 1680);
}

#[test]
fn test_late_reply_times_out_without_partial_read() {
    let bank = RegisterBank::new()
        .with(0x01, &[0x06, 0x90])
        .arrive_after(52);
    let mut bq = create_bank_driver(bank);

    assert_eq!(
        bq.read_field(&fields::CHARGE_VOLTAGE),
        Err(Error::Timeout)
    );
    assert_eq!(bq.transport().pending(), 2);
}

#[test]
fn test_timeout_is_configurable() {
    let bank = RegisterBank::new().with(0x00, &[0x02]).arrive_after(7);
    let mut bq = create_bank_driver(bank);
    bq.set_timeout_ms(5);
    assert_eq!(bq.timeout_ms(), 5);

    assert_eq!(
        bq.read_field(&fields::MIN_SYSTEM_VOLTAGE),
        Err(Error::Timeout)
    );

    bq.set_timeout_ms(6);
    assert_eq!(bq.read_field(&fields::MIN_SYSTEM_VOLTAGE).unwrap(), 2);
}

#[test]
fn test_timeout_survives_clock_wrap() {
    let bank = RegisterBank::new().with(0x00, &[0x02]).arrive_after(51);
    let mut bq = bq25672_rs::Bq25672::new(bank, stepping_clock(u32::MAX - 10, 1));

    assert_eq!(bq.read_field(&fields::MIN_SYSTEM_VOLTAGE).unwrap(), 2);
}

#[test]
fn test_describe_enumerated_field() {
    // fast charge (CC) from a USB DCP
    let mut bq = create_bank_driver(RegisterBank::new().with(0x1C, &[0b0110_0110]));

    assert_eq!(
        bq.read_description(&fields::CHARGE_STATUS).unwrap(),
        Some("Fast charge (CC)")
    );
    assert_eq!(
        bq.read_description(&fields::BUS_VOLTAGE_STATUS).unwrap(),
        Some("USB DCP (3.25 A)")
    );
    assert_eq!(bq.read_description(&fields::CHARGE_VOLTAGE).unwrap(), None);
}

#[test]
fn test_find_by_name() {
    let spec = fields::find("charge_current").unwrap();
    let mut bq = create_bank_driver(RegisterBank::new());

    bq.write_value(spec, 1500.0).unwrap();
    assert_eq!(bq.transport().word(0x03), 150);
}
