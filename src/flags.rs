//! Snapshot of the six event-flag registers (REG22 to REG27).
//!
//! The chip clears a flag register when it is read, so the driver captures all
//! of them at once with [`crate::Bq25672::refresh_flags`] and answers queries
//! from the stored bytes until the next refresh.

use core::fmt;

use crate::registers::{
    ChargerFlag0, ChargerFlag1, ChargerFlag2, ChargerFlag3, FaultFlag0, FaultFlag1,
    FLAG_REGISTERS,
};

/// Number of flag registers held by a [`FlagCache`].
pub const FLAG_REGISTER_COUNT: usize = FLAG_REGISTERS.len();

/// Human readable meaning of every flag bit, indexed by `[register][bit]`.
pub const FLAG_DESCRIPTIONS: [[&str; 8]; FLAG_REGISTER_COUNT] = [
    [
        "Bus voltage present changed",
        "Input 1 present changed",
        "Input 2 present changed",
        "Power good changed",
        "Poor source detected",
        "Watchdog timer passed",
        "VINDPM-VOTG regulation signal detected",
        "IINDPM-IOTG signal detected",
    ],
    [
        "BC12 detection status changed",
        "Battery present status changed",
        "Thermal regulation status changed",
        "Reserved",
        "Bus voltage status changed",
        "Reserved",
        "ICO status changed",
        "Charge status changed",
    ],
    [
        "Top off timer expired",
        "Pre-charge timer expired",
        "Trickle charger timer expired",
        "Fast charge timer expired",
        "Entered or exited VSYSMIN regulation",
        "ADC conversion completed",
        "D+/D- detection is completed",
        "Reserved",
    ],
    [
        "TS across hot temperature (T5) is detected",
        "TS across warm temperature (T3) is detected",
        "TS across cool temperature (T2) is detected",
        "TS across cold temperature (T1) is detected",
        "VBAT falls below the threshold to enable the OTG mode",
        "Reserved",
        "Reserved",
        "Reserved",
    ],
    [
        "Enter VAC1 OVP",
        "Enter VAC2 OVP",
        "Enter converter OCP",
        "Enter discharged OCP",
        "Enter IBUS OCP",
        "Enter VBAT OVP",
        "Enter VBUS OVP",
        "Enter or exit IBAT regulation",
    ],
    [
        "Reserved",
        "Reserved",
        "TS shutdown signal rising threshold detected",
        "Reserved",
        "Stop OTG due to VBUS under-voltage",
        "Stop OTG due to VBUS over voltage",
        "Stop switching due to system over-voltage",
        "Stop switching due to system short",
    ],
];

/// Description of flag `bit` of flag register `index`.
pub fn description(index: usize, bit: u8) -> Option<&'static str> {
    FLAG_DESCRIPTIONS
        .get(index)
        .and_then(|bits| bits.get(bit as usize))
        .copied()
}

/// Descriptions of the bits set in `byte`, lowest bit first.
pub fn asserted(index: usize, byte: u8) -> impl Iterator<Item = &'static str> {
    (0..8u8)
        .filter(move |bit| byte & (1 << *bit) != 0)
        .filter_map(move |bit| description(index, bit))
}

/// The last captured value of every flag register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlagCache {
    snapshot: [u8; FLAG_REGISTER_COUNT],
}

impl FlagCache {
    /// An empty cache; every flag reads as clear.
    pub const fn new() -> Self {
        Self {
            snapshot: [0; FLAG_REGISTER_COUNT],
        }
    }

    /// Whether `bit` of flag register `index` was set at the last refresh.
    /// Indices past the last flag register answer `false`.
    pub fn flag(&self, index: usize, bit: u8) -> bool {
        match self.snapshot.get(index) {
            Some(byte) if bit < 8 => byte & (1 << bit) != 0,
            _ => false,
        }
    }

    pub fn register(&self, index: usize) -> Option<u8> {
        self.snapshot.get(index).copied()
    }

    pub fn snapshot(&self) -> [u8; FLAG_REGISTER_COUNT] {
        self.snapshot
    }

    /// `true` if any flag was set at the last refresh.
    pub fn any(&self) -> bool {
        self.snapshot.iter().any(|byte| *byte != 0)
    }

    pub(crate) fn store(&mut self, index: usize, byte: u8) {
        if let Some(slot) = self.snapshot.get_mut(index) {
            *slot = byte;
        }
    }

    pub fn charger_flag0(&self) -> ChargerFlag0 {
        ChargerFlag0::from_bits_retain(self.snapshot[0])
    }

    pub fn charger_flag1(&self) -> ChargerFlag1 {
        ChargerFlag1::from_bits_retain(self.snapshot[1])
    }

    pub fn charger_flag2(&self) -> ChargerFlag2 {
        ChargerFlag2::from_bits_retain(self.snapshot[2])
    }

    pub fn charger_flag3(&self) -> ChargerFlag3 {
        ChargerFlag3::from_bits_retain(self.snapshot[3])
    }

    pub fn fault_flag0(&self) -> FaultFlag0 {
        FaultFlag0::from_bits_retain(self.snapshot[4])
    }

    pub fn fault_flag1(&self) -> FaultFlag1 {
        FaultFlag1::from_bits_retain(self.snapshot[5])
    }
}

/// A diagnostic sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl fmt::Write for NullSink {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_reports_nothing() {
        let cache = FlagCache::new();
        for index in 0..FLAG_REGISTER_COUNT {
            for bit in 0..8 {
                assert!(!cache.flag(index, bit));
            }
        }
        assert!(!cache.any());
        assert!(cache.charger_flag0().is_empty());
    }

    #[test]
    fn test_flag_lookup() {
        let mut cache = FlagCache::new();
        cache.store(2, 0b0010_0000);
        cache.store(4, 0b1000_0001);

        assert!(cache.flag(2, 5));
        assert!(!cache.flag(2, 4));
        assert!(cache.flag(4, 0));
        assert!(cache.flag(4, 7));
        assert!(!cache.flag(6, 0));
        assert!(!cache.flag(2, 8));
        assert_eq!(cache.register(2), Some(0b0010_0000));
        assert_eq!(cache.register(6), None);

        assert!(cache.charger_flag2().contains(ChargerFlag2::ADC_DONE));
        assert!(cache
            .fault_flag0()
            .contains(FaultFlag0::VAC1_OVP | FaultFlag0::IBAT_REGULATION));
        assert!(cache.any());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(description(0, 3), Some("Power good changed"));
        assert_eq!(description(5, 7), Some("Stop switching due to system short"));
        assert_eq!(description(6, 0), None);

        let mut lines = asserted(2, 0b0110_0000);
        assert_eq!(lines.next(), Some("ADC conversion completed"));
        assert_eq!(lines.next(), Some("D+/D- detection is completed"));
        assert_eq!(lines.next(), None);
    }
}
