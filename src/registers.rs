use bitflags::bitflags;

use crate::field::ByteCount;

/// Default 7-bit I2C address of the BQ25672.
pub const DEFAULT_ADDRESS: u8 = 0x6B;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Minimal System Voltage
    MinSystemVoltage = 0x00,
    /// Charge Voltage Limit (16-bit)
    ChargeVoltageLimit = 0x01,
    /// Charge Current Limit (16-bit)
    ChargeCurrentLimit = 0x03,
    /// Input Voltage Limit (VINDPM)
    InputVoltageLimit = 0x05,
    /// Input Current Limit (16-bit)
    InputCurrentLimit = 0x06,
    /// Precharge Control
    PrechargeControl = 0x08,
    /// Termination Control
    TerminationControl = 0x09,
    /// Re-charge Control
    RechargeControl = 0x0A,
    /// VOTG regulation (16-bit)
    OtgVoltage = 0x0B,
    /// IOTG regulation
    OtgCurrent = 0x0D,
    /// Timer Control
    TimerControl = 0x0E,
    /// Charger Control 0
    ChargerControl0 = 0x0F,
    /// Charger Control 1
    ChargerControl1 = 0x10,
    /// Charger Control 2
    ChargerControl2 = 0x11,
    /// Charger Control 3
    ChargerControl3 = 0x12,
    /// Charger Control 4
    ChargerControl4 = 0x13,
    /// Charger Control 5
    ChargerControl5 = 0x14,
    /// MPPT Control
    MpptControl = 0x15,
    /// Temperature Control
    TemperatureControl = 0x16,
    /// NTC Control 0
    NtcControl0 = 0x17,
    /// NTC Control 1
    NtcControl1 = 0x18,
    /// ICO Current Limit (16-bit, read-only)
    IcoCurrentLimit = 0x19,
    /// Charger Status 0
    ChargerStatus0 = 0x1B,
    /// Charger Status 1
    ChargerStatus1 = 0x1C,
    /// Charger Status 2
    ChargerStatus2 = 0x1D,
    /// Charger Status 3
    ChargerStatus3 = 0x1E,
    /// Charger Status 4
    ChargerStatus4 = 0x1F,
    /// FAULT Status 0
    FaultStatus0 = 0x20,
    /// FAULT Status 1
    FaultStatus1 = 0x21,
    /// Charger Flag 0
    ChargerFlag0 = 0x22,
    /// Charger Flag 1
    ChargerFlag1 = 0x23,
    /// Charger Flag 2
    ChargerFlag2 = 0x24,
    /// Charger Flag 3
    ChargerFlag3 = 0x25,
    /// FAULT Flag 0
    FaultFlag0 = 0x26,
    /// FAULT Flag 1
    FaultFlag1 = 0x27,
    /// ADC Control
    AdcControl = 0x2E,
    /// ADC Function Disable 0
    AdcFunctionDisable0 = 0x2F,
    /// ADC Function Disable 1
    AdcFunctionDisable1 = 0x30,
    /// IBUS ADC (16-bit, two's complement)
    IbusAdc = 0x31,
    /// IBAT ADC (16-bit, two's complement)
    IbatAdc = 0x33,
    /// VBUS ADC (16-bit)
    VbusAdc = 0x35,
    /// VAC1 ADC (16-bit)
    Vac1Adc = 0x37,
    /// VAC2 ADC (16-bit)
    Vac2Adc = 0x39,
    /// VBAT ADC (16-bit)
    VbatAdc = 0x3B,
    /// VSYS ADC (16-bit)
    VsysAdc = 0x3D,
    /// TS ADC (16-bit)
    TsAdc = 0x3F,
    /// TDIE ADC (16-bit, two's complement)
    TdieAdc = 0x41,
    /// D+ ADC (16-bit)
    DplusAdc = 0x43,
    /// D- ADC (16-bit)
    DminusAdc = 0x45,
    /// DPDM Driver
    DpdmDriver = 0x47,
    /// Part Information
    PartInformation = 0x48,
}

impl Register {
    /// Number of bytes transferred for a full access of this register.
    pub const fn width(self) -> ByteCount {
        match self {
            Register::ChargeVoltageLimit
            | Register::ChargeCurrentLimit
            | Register::InputCurrentLimit
            | Register::OtgVoltage
            | Register::IcoCurrentLimit
            | Register::IbusAdc
            | Register::IbatAdc
            | Register::VbusAdc
            | Register::Vac1Adc
            | Register::Vac2Adc
            | Register::VbatAdc
            | Register::VsysAdc
            | Register::TsAdc
            | Register::TdieAdc
            | Register::DplusAdc
            | Register::DminusAdc => ByteCount::Two,
            _ => ByteCount::One,
        }
    }

    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// The event-flag registers, in the order they are captured by a flag refresh.
pub const FLAG_REGISTERS: [Register; 6] = [
    Register::ChargerFlag0,
    Register::ChargerFlag1,
    Register::ChargerFlag2,
    Register::ChargerFlag3,
    Register::FaultFlag0,
    Register::FaultFlag1,
];

/// The status registers, REG1B to REG21.
pub const STATUS_REGISTERS: [Register; 7] = [
    Register::ChargerStatus0,
    Register::ChargerStatus1,
    Register::ChargerStatus2,
    Register::ChargerStatus3,
    Register::ChargerStatus4,
    Register::FaultStatus0,
    Register::FaultStatus1,
];

bitflags! {
    /// REG1B Charger Status 0
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerStatus0: u8 {
        const VBUS_PRESENT = 1 << 0;
        const AC1_PRESENT = 1 << 1;
        const AC2_PRESENT = 1 << 2;
        const POWER_GOOD = 1 << 3;
        const WATCHDOG_EXPIRED = 1 << 5;
        const VINDPM = 1 << 6;
        const IINDPM = 1 << 7;
    }
}

bitflags! {
    /// REG1D Charger Status 2 (ICO status lives in bits 7:6, see [`crate::IcoStatus`])
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerStatus2: u8 {
        const BATTERY_PRESENT = 1 << 0;
        const DPDM_BUSY = 1 << 1;
        const THERMAL_REGULATION = 1 << 2;
    }
}

bitflags! {
    /// REG1E Charger Status 3
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerStatus3: u8 {
        const PRECHARGE_TIMER_EXPIRED = 1 << 1;
        const TRICKLE_TIMER_EXPIRED = 1 << 2;
        const FAST_CHARGE_TIMER_EXPIRED = 1 << 3;
        const VSYS_MIN_REGULATION = 1 << 4;
        const ADC_DONE = 1 << 5;
        const ACRB1_PLACED = 1 << 6;
        const ACRB2_PLACED = 1 << 7;
    }
}

bitflags! {
    /// REG1F Charger Status 4
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerStatus4: u8 {
        const TS_HOT = 1 << 0;
        const TS_WARM = 1 << 1;
        const TS_COOL = 1 << 2;
        const TS_COLD = 1 << 3;
        const VBAT_OTG_LOW = 1 << 4;
    }
}

bitflags! {
    /// REG20 FAULT Status 0
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FaultStatus0: u8 {
        const VAC1_OVP = 1 << 0;
        const VAC2_OVP = 1 << 1;
        const CONVERTER_OCP = 1 << 2;
        const IBAT_OCP = 1 << 3;
        const IBUS_OCP = 1 << 4;
        const VBAT_OVP = 1 << 5;
        const VBUS_OVP = 1 << 6;
        const IBAT_REGULATION = 1 << 7;
    }
}

bitflags! {
    /// REG21 FAULT Status 1
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FaultStatus1: u8 {
        const THERMAL_SHUTDOWN = 1 << 2;
        const OTG_UVP = 1 << 4;
        const OTG_OVP = 1 << 5;
        const VSYS_OVP = 1 << 6;
        const VSYS_SHORT = 1 << 7;
    }
}

bitflags! {
    /// REG22 Charger Flag 0
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerFlag0: u8 {
        const VBUS_PRESENT = 1 << 0;
        const AC1_PRESENT = 1 << 1;
        const AC2_PRESENT = 1 << 2;
        const POWER_GOOD = 1 << 3;
        const POOR_SOURCE = 1 << 4;
        const WATCHDOG = 1 << 5;
        const VINDPM = 1 << 6;
        const IINDPM = 1 << 7;
    }
}

bitflags! {
    /// REG23 Charger Flag 1
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerFlag1: u8 {
        const BC12_DONE = 1 << 0;
        const BATTERY_PRESENT = 1 << 1;
        const THERMAL_REGULATION = 1 << 2;
        const VBUS_STATUS = 1 << 4;
        const ICO = 1 << 6;
        const CHARGE_STATUS = 1 << 7;
    }
}

bitflags! {
    /// REG24 Charger Flag 2
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerFlag2: u8 {
        const TOP_OFF_TIMER = 1 << 0;
        const PRECHARGE_TIMER = 1 << 1;
        const TRICKLE_TIMER = 1 << 2;
        const FAST_CHARGE_TIMER = 1 << 3;
        const VSYS_MIN = 1 << 4;
        const ADC_DONE = 1 << 5;
        const DPDM_DONE = 1 << 6;
    }
}

bitflags! {
    /// REG25 Charger Flag 3
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChargerFlag3: u8 {
        const TS_HOT = 1 << 0;
        const TS_WARM = 1 << 1;
        const TS_COOL = 1 << 2;
        const TS_COLD = 1 << 3;
        const VBAT_OTG_LOW = 1 << 4;
    }
}

bitflags! {
    /// REG26 FAULT Flag 0
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FaultFlag0: u8 {
        const VAC1_OVP = 1 << 0;
        const VAC2_OVP = 1 << 1;
        const CONVERTER_OCP = 1 << 2;
        const IBAT_OCP = 1 << 3;
        const IBUS_OCP = 1 << 4;
        const VBAT_OVP = 1 << 5;
        const VBUS_OVP = 1 << 6;
        const IBAT_REGULATION = 1 << 7;
    }
}

bitflags! {
    /// REG27 FAULT Flag 1
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FaultFlag1: u8 {
        const TS_SHUTDOWN = 1 << 2;
        const OTG_UVP = 1 << 4;
        const OTG_OVP = 1 << 5;
        const VSYS_OVP = 1 << 6;
        const VSYS_SHORT = 1 << 7;
    }
}
