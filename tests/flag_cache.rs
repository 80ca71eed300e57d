#![cfg(not(feature = "async"))]

mod common;

use bq25672_rs::registers::{ChargerFlag0, FaultFlag1};
use bq25672_rs::Error;
use common::*;

fn bank_with_flags(flags: [u8; 6]) -> RegisterBank {
    RegisterBank::new().with(0x22, &flags)
}

#[test]
fn test_flags_are_clear_before_refresh() {
    let bq = create_bank_driver(bank_with_flags([0xFF; 6]));

    for index in 0..6 {
        for bit in 0..8 {
            assert!(!bq.flag(index, bit));
        }
    }
}

#[test]
fn test_refresh_captures_all_registers() {
    let mut bq = create_bank_driver(bank_with_flags([
        0b0000_1000,
        0,
        0b0010_0000,
        0,
        0b0100_0000,
        0b1000_0000,
    ]));

    bq.refresh_flags().unwrap();

    assert!(bq.flag(0, 3));
    assert!(bq.flag(2, 5));
    assert!(bq.flag(4, 6));
    assert!(bq.flag(5, 7));
    assert!(!bq.flag(1, 0));
    assert!(!bq.flag(6, 0));
    assert!(bq.flags().charger_flag0().contains(ChargerFlag0::POWER_GOOD));
    assert!(bq.flags().fault_flag1().contains(FaultFlag1::VSYS_SHORT));

    // one-byte reads in register order
    let reads: Vec<Vec<u8>> = bq.transport().writes.clone();
    assert_eq!(
        reads,
        vec![
            vec![0x22],
            vec![0x23],
            vec![0x24],
            vec![0x25],
            vec![0x26],
            vec![0x27]
        ]
    );
}

#[test]
fn test_failed_register_keeps_stale_value() {
    let mut bq = create_bank_driver(bank_with_flags([0x01, 0x02, 0x04, 0x08, 0x10, 0x20]));
    bq.refresh_flags().unwrap();
    assert!(bq.flag(2, 2));

    // the chip cleared its flags, but REG24 cannot be read this time
    let bank = bq.transport_mut();
    bank.registers[0x22..0x28].copy_from_slice(&[0; 6]);
    bank.set_failing(0x24, true);

    assert_eq!(
        bq.refresh_flags(),
        Err(Error::FlagRefresh { failed: 0b0000_0100 })
    );
    assert!(!bq.flag(0, 0));
    assert!(!bq.flag(5, 5));
    assert!(bq.flag(2, 2));

    bq.transport_mut().set_failing(0x24, false);
    bq.refresh_flags().unwrap();
    assert!(!bq.flags().any());
}

#[test]
fn test_every_register_is_attempted() {
    let bank = bank_with_flags([0x80; 6]).fail(0x22).fail(0x27);
    let mut bq = create_bank_driver(bank);

    assert_eq!(
        bq.refresh_flags(),
        Err(Error::FlagRefresh { failed: 0b0010_0001 })
    );
    assert_eq!(bq.transport().writes.len(), 6);
    assert!(!bq.flag(0, 7));
    assert!(bq.flag(1, 7));
    assert!(bq.flag(4, 7));
    assert!(!bq.flag(5, 7));
}

#[test]
fn test_diagnostic_lines() {
    let bank = bank_with_flags([0b0000_1001, 0, 0, 0, 0, 0b1000_0000]).fail(0x24);
    let mut bq = create_bank_driver(bank).with_diagnostics(heapless::String::<512>::new());

    let _ = bq.refresh_flags();

    let lines: Vec<&str> = bq.sink().lines().collect();
    assert_eq!(
        lines,
        vec![
            "BQ25672: Bus voltage present changed",
            "BQ25672: Power good changed",
            "BQ25672: Stop switching due to system short",
        ]
    );
}

#[test]
fn test_full_sink_does_not_fail_refresh() {
    let bank = bank_with_flags([0xFF; 6]);
    let mut bq = create_bank_driver(bank).with_diagnostics(heapless::String::<16>::new());

    bq.refresh_flags().unwrap();
    assert_eq!(bq.flags().snapshot(), [0xFF; 6]);
}
