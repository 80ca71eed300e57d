use crate::registers::{
    ChargerStatus0, ChargerStatus2, ChargerStatus3, ChargerStatus4, FaultStatus0, FaultStatus1,
};
use crate::units::{ElectricCurrent, ElectricPotential, Ratio, ThermodynamicTemperature};
use uom::si::{
    electric_current::milliampere, electric_potential::millivolt, ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

/// Charge cycle state, REG1C bits 7:5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChargeStatus {
    NotCharging = 0,
    TrickleCharge = 1,
    PreCharge = 2,
    /// Constant current fast charge.
    FastCharge = 3,
    /// Constant voltage taper charge.
    TaperCharge = 4,
    TopOffTimerActive = 6,
    TerminationDone = 7,
}

impl TryFrom<u16> for ChargeStatus {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::NotCharging),
            1 => Ok(Self::TrickleCharge),
            2 => Ok(Self::PreCharge),
            3 => Ok(Self::FastCharge),
            4 => Ok(Self::TaperCharge),
            6 => Ok(Self::TopOffTimerActive),
            7 => Ok(Self::TerminationDone),
            other => Err(other),
        }
    }
}

impl ChargeStatus {
    pub fn is_charging(self) -> bool {
        !matches!(self, Self::NotCharging | Self::TerminationDone)
    }
}

/// Detected input source, REG1C bits 4:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum VbusStatus {
    /// No input, or BHOT/BCOLD in OTG mode.
    NoInput = 0x0,
    /// USB SDP, 500 mA.
    UsbSdp = 0x1,
    /// USB CDP, 1.5 A.
    UsbCdp = 0x2,
    /// USB DCP, 3.25 A.
    UsbDcp = 0x3,
    /// Adjustable high voltage DCP (HVDCP), 1.5 A.
    HighVoltageDcp = 0x4,
    /// Unknown adapter, 3 A.
    UnknownAdapter = 0x5,
    NonStandardAdapter = 0x6,
    Otg = 0x7,
    NotQualifiedAdapter = 0x8,
    DirectlyPoweredFromVbus = 0xB,
    Backup = 0xC,
}

impl TryFrom<u16> for VbusStatus {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0x0 => Ok(Self::NoInput),
            0x1 => Ok(Self::UsbSdp),
            0x2 => Ok(Self::UsbCdp),
            0x3 => Ok(Self::UsbDcp),
            0x4 => Ok(Self::HighVoltageDcp),
            0x5 => Ok(Self::UnknownAdapter),
            0x6 => Ok(Self::NonStandardAdapter),
            0x7 => Ok(Self::Otg),
            0x8 => Ok(Self::NotQualifiedAdapter),
            0xB => Ok(Self::DirectlyPoweredFromVbus),
            0xC => Ok(Self::Backup),
            other => Err(other),
        }
    }
}

/// Input current optimizer state, REG1D bits 7:6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IcoStatus {
    Disabled = 0,
    InProgress = 1,
    MaximumInputCurrentDetected = 2,
}

impl TryFrom<u16> for IcoStatus {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::MaximumInputCurrentDetected),
            other => Err(other),
        }
    }
}

/// Watchdog timer period, REG10 bits 2:0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum WatchdogTimer {
    Disabled = 0,
    Ms500 = 1,
    S1 = 2,
    S2 = 3,
    S20 = 4,
    S40 = 5,
    S80 = 6,
    S160 = 7,
}

impl TryFrom<u16> for WatchdogTimer {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Ms500),
            2 => Ok(Self::S1),
            3 => Ok(Self::S2),
            4 => Ok(Self::S20),
            5 => Ok(Self::S40),
            6 => Ok(Self::S80),
            7 => Ok(Self::S160),
            other => Err(other),
        }
    }
}

/// Fast charge safety timer, REG0E bits 2:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FastChargeTimer {
    Hours5 = 0,
    Hours8 = 1,
    Hours12 = 2,
    Hours24 = 3,
}

impl TryFrom<u16> for FastChargeTimer {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Hours5),
            1 => Ok(Self::Hours8),
            2 => Ok(Self::Hours12),
            3 => Ok(Self::Hours24),
            other => Err(other),
        }
    }
}

/// ADC sample resolution, REG2E bits 5:4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcResolution {
    Bits15 = 0,
    Bits14 = 1,
    Bits13 = 2,
    Bits12 = 3,
}

impl TryFrom<u16> for AdcResolution {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Bits15),
            1 => Ok(Self::Bits14),
            2 => Ok(Self::Bits13),
            3 => Ok(Self::Bits12),
            other => Err(other),
        }
    }
}

/// ADC conversion mode, REG2E bit 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcMode {
    Continuous = 0,
    OneShot = 1,
}

impl TryFrom<u16> for AdcMode {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Continuous),
            1 => Ok(Self::OneShot),
            other => Err(other),
        }
    }
}

/// Contents of REG48.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PartInformation {
    pub part_number: u8,
    pub revision: u8,
}

/// One reading of every ADC channel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Measurements {
    /// Input current, negative in OTG mode.
    pub ibus: ElectricCurrent,
    /// Battery current, positive while charging.
    pub ibat: ElectricCurrent,
    pub vbus: ElectricPotential,
    pub vac1: ElectricPotential,
    pub vac2: ElectricPotential,
    pub vbat: ElectricPotential,
    pub vsys: ElectricPotential,
    /// TS pin voltage as a share of REGN.
    pub ts: Ratio,
    pub die_temperature: ThermodynamicTemperature,
    pub dplus: ElectricPotential,
    pub dminus: ElectricPotential,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            ibus: ElectricCurrent::new::<milliampere>(0.0),
            ibat: ElectricCurrent::new::<milliampere>(0.0),
            vbus: ElectricPotential::new::<millivolt>(0.0),
            vac1: ElectricPotential::new::<millivolt>(0.0),
            vac2: ElectricPotential::new::<millivolt>(0.0),
            vbat: ElectricPotential::new::<millivolt>(0.0),
            vsys: ElectricPotential::new::<millivolt>(0.0),
            ts: Ratio::new::<percent>(0.0),
            die_temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            dplus: ElectricPotential::new::<millivolt>(0.0),
            dminus: ElectricPotential::new::<millivolt>(0.0),
        }
    }
}

/// Decoded charger and fault status registers, REG1B to REG21.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status {
    pub charger0: ChargerStatus0,
    pub charge_status: ChargeStatus,
    pub vbus_status: VbusStatus,
    /// BC1.2 or non-standard detection finished.
    pub bc12_done: bool,
    pub charger2: ChargerStatus2,
    pub ico_status: IcoStatus,
    pub charger3: ChargerStatus3,
    pub charger4: ChargerStatus4,
    pub fault0: FaultStatus0,
    pub fault1: FaultStatus1,
}

impl Status {
    /// Decodes the seven status registers, starting at REG1B. Returns the
    /// offending code if a multi-bit field holds a reserved value.
    pub fn from_registers(raw: [u8; 7]) -> Result<Self, u16> {
        Ok(Self {
            charger0: ChargerStatus0::from_bits_retain(raw[0]),
            charge_status: ChargeStatus::try_from(u16::from(raw[1] >> 5))?,
            vbus_status: VbusStatus::try_from(u16::from((raw[1] >> 1) & 0x0F))?,
            bc12_done: raw[1] & 0x01 != 0,
            charger2: ChargerStatus2::from_bits_retain(raw[2]),
            ico_status: IcoStatus::try_from(u16::from(raw[2] >> 6))?,
            charger3: ChargerStatus3::from_bits_retain(raw[3]),
            charger4: ChargerStatus4::from_bits_retain(raw[4]),
            fault0: FaultStatus0::from_bits_retain(raw[5]),
            fault1: FaultStatus1::from_bits_retain(raw[6]),
        })
    }

    /// `true` if any fault status bit is set.
    pub fn has_fault(&self) -> bool {
        !self.fault0.difference(FaultStatus0::IBAT_REGULATION).is_empty()
            || !self.fault1.is_empty()
    }
}
