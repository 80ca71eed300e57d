//! Typed accessors for the most used fields.

use core::fmt::Write;

use uom::si::{
    electric_current::milliampere, electric_potential::millivolt, ratio::percent,
    thermodynamic_temperature::degree_celsius,
};

use crate::bus::{Clock, Transport};
use crate::data_types::{
    AdcMode, AdcResolution, ChargeStatus, FastChargeTimer, IcoStatus, Measurements,
    PartInformation, Status, VbusStatus, WatchdogTimer,
};
use crate::errors::Error;
use crate::field::{ByteCount, FieldSpec};
use crate::fields;
use crate::registers::STATUS_REGISTERS;
use crate::units::{ElectricCurrent, ElectricPotential, Ratio, ThermodynamicTemperature};
use crate::{Bq25672, RegisterAccess};

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
    async fn read_potential(&mut self, spec: &FieldSpec) -> Result<ElectricPotential, Error<E>> {
        let value = self.read_value(spec).await?;
        Ok(ElectricPotential::new::<millivolt>(value))
    }

    async fn write_potential(
        &mut self,
        spec: &FieldSpec,
        value: ElectricPotential,
    ) -> Result<(), Error<E>> {
        self.write_value(spec, value.get::<millivolt>()).await
    }

    async fn read_current(&mut self, spec: &FieldSpec) -> Result<ElectricCurrent, Error<E>> {
        let value = self.read_value(spec).await?;
        Ok(ElectricCurrent::new::<milliampere>(value))
    }

    async fn write_current(
        &mut self,
        spec: &FieldSpec,
        value: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        self.write_value(spec, value.get::<milliampere>()).await
    }

    async fn read_code<K>(&mut self, spec: &FieldSpec) -> Result<K, Error<E>>
    where
        K: TryFrom<u16>,
    {
        let raw = self.read_field(spec).await?;
        K::try_from(raw).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Reserved code {} in field {}", raw, spec.name);
            Error::InvalidData
        })
    }

    /// Battery regulation voltage (VREG), 10 mV steps.
    pub async fn charge_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::CHARGE_VOLTAGE).await
    }

    pub async fn set_charge_voltage(&mut self, voltage: ElectricPotential) -> Result<(), Error<E>> {
        self.write_potential(&fields::CHARGE_VOLTAGE, voltage).await
    }

    /// Fast charge current limit (ICHG), 10 mA steps.
    pub async fn charge_current(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::CHARGE_CURRENT).await
    }

    pub async fn set_charge_current(&mut self, current: ElectricCurrent) -> Result<(), Error<E>> {
        self.write_current(&fields::CHARGE_CURRENT, current).await
    }

    /// Input current limit (IINDPM), 10 mA steps.
    pub async fn input_current_limit(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::INPUT_CURRENT_LIMIT).await
    }

    pub async fn set_input_current_limit(
        &mut self,
        current: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        self.write_current(&fields::INPUT_CURRENT_LIMIT, current).await
    }

    /// Minimal system voltage (VSYSMIN), 250 mV steps from 2.5 V.
    pub async fn min_system_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::MIN_SYSTEM_VOLTAGE).await
    }

    pub async fn set_min_system_voltage(
        &mut self,
        voltage: ElectricPotential,
    ) -> Result<(), Error<E>> {
        self.write_potential(&fields::MIN_SYSTEM_VOLTAGE, voltage)
            .await
    }

    /// Absolute input voltage limit (VINDPM), 100 mV steps.
    pub async fn vindpm(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::VINDPM_THRESHOLD).await
    }

    pub async fn set_vindpm(&mut self, voltage: ElectricPotential) -> Result<(), Error<E>> {
        self.write_potential(&fields::VINDPM_THRESHOLD, voltage).await
    }

    pub async fn precharge_current(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::PRE_CHARGE_CURRENT).await
    }

    pub async fn set_precharge_current(
        &mut self,
        current: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        self.write_current(&fields::PRE_CHARGE_CURRENT, current).await
    }

    pub async fn termination_current(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::TERMINATION_CURRENT).await
    }

    pub async fn set_termination_current(
        &mut self,
        current: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        self.write_current(&fields::TERMINATION_CURRENT, current)
            .await
    }

    /// OTG mode regulation voltage, 10 mV steps from 2.8 V.
    pub async fn otg_voltage(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::OTG_VOLTAGE).await
    }

    pub async fn set_otg_voltage(&mut self, voltage: ElectricPotential) -> Result<(), Error<E>> {
        self.write_potential(&fields::OTG_VOLTAGE, voltage).await
    }

    pub async fn otg_current_limit(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::OTG_CURRENT_LIMIT).await
    }

    pub async fn set_otg_current_limit(
        &mut self,
        current: ElectricCurrent,
    ) -> Result<(), Error<E>> {
        self.write_current(&fields::OTG_CURRENT_LIMIT, current).await
    }

    pub async fn is_charging_enabled(&mut self) -> Result<bool, Error<E>> {
        self.read_bool(&fields::CHARGING_ENABLED).await
    }

    pub async fn set_charging_enabled(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.write_bool(&fields::CHARGING_ENABLED, enabled).await
    }

    pub async fn is_hiz_enabled(&mut self) -> Result<bool, Error<E>> {
        self.read_bool(&fields::HIZ_MODE_ENABLED).await
    }

    pub async fn set_hiz_enabled(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.write_bool(&fields::HIZ_MODE_ENABLED, enabled).await
    }

    pub async fn is_adc_enabled(&mut self) -> Result<bool, Error<E>> {
        self.read_bool(&fields::ADC_ENABLED).await
    }

    pub async fn set_adc_enabled(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.write_bool(&fields::ADC_ENABLED, enabled).await
    }

    pub async fn charge_status(&mut self) -> Result<ChargeStatus, Error<E>> {
        self.read_code(&fields::CHARGE_STATUS).await
    }

    pub async fn vbus_status(&mut self) -> Result<VbusStatus, Error<E>> {
        self.read_code(&fields::BUS_VOLTAGE_STATUS).await
    }

    pub async fn ico_status(&mut self) -> Result<IcoStatus, Error<E>> {
        self.read_code(&fields::ICO_STATUS).await
    }

    pub async fn watchdog_timer(&mut self) -> Result<WatchdogTimer, Error<E>> {
        self.read_code(&fields::WATCHDOG_TIMER).await
    }

    pub async fn set_watchdog_timer(&mut self, timer: WatchdogTimer) -> Result<(), Error<E>> {
        self.write_field(&fields::WATCHDOG_TIMER, timer as u16).await
    }

    pub async fn fast_charge_timer(&mut self) -> Result<FastChargeTimer, Error<E>> {
        self.read_code(&fields::FAST_CHARGE_TIMER).await
    }

    pub async fn set_fast_charge_timer(&mut self, timer: FastChargeTimer) -> Result<(), Error<E>> {
        self.write_field(&fields::FAST_CHARGE_TIMER, timer as u16)
            .await
    }

    pub async fn adc_resolution(&mut self) -> Result<AdcResolution, Error<E>> {
        self.read_code(&fields::ADC_RESOLUTION).await
    }

    pub async fn set_adc_resolution(&mut self, resolution: AdcResolution) -> Result<(), Error<E>> {
        self.write_field(&fields::ADC_RESOLUTION, resolution as u16)
            .await
    }

    pub async fn adc_mode(&mut self) -> Result<AdcMode, Error<E>> {
        self.read_code(&fields::ADC_CONVERSION).await
    }

    pub async fn set_adc_mode(&mut self, mode: AdcMode) -> Result<(), Error<E>> {
        self.write_field(&fields::ADC_CONVERSION, mode as u16).await
    }

    pub async fn part_information(&mut self) -> Result<PartInformation, Error<E>> {
        let raw = self
            .read_register(fields::PART_NUMBER.register, ByteCount::One)
            .await?;
        Ok(PartInformation {
            part_number: fields::PART_NUMBER.bits.extract(raw) as u8,
            revision: fields::DEVICE_REVISION.bits.extract(raw) as u8,
        })
    }

    /// IBUS ADC reading, negative while sourcing current in OTG mode.
    pub async fn ibus(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::INPUT_CURRENT).await
    }

    /// IBAT ADC reading, negative while discharging.
    pub async fn ibat(&mut self) -> Result<ElectricCurrent, Error<E>> {
        self.read_current(&fields::BATTERY_CURRENT).await
    }

    pub async fn vbus(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::BUS_VOLTAGE).await
    }

    pub async fn vac1(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::INPUT_1_VOLTAGE).await
    }

    pub async fn vac2(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::INPUT_2_VOLTAGE).await
    }

    pub async fn vbat(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::BATTERY_VOLTAGE).await
    }

    pub async fn vsys(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::SYSTEM_VOLTAGE).await
    }

    /// TS pin voltage as a percentage of REGN.
    pub async fn ts(&mut self) -> Result<Ratio, Error<E>> {
        let value = self.read_value(&fields::TS_PERCENTAGE).await?;
        Ok(Ratio::new::<percent>(value))
    }

    pub async fn die_temperature(&mut self) -> Result<ThermodynamicTemperature, Error<E>> {
        let value = self.read_value(&fields::DIE_TEMPERATURE).await?;
        Ok(ThermodynamicTemperature::new::<degree_celsius>(value))
    }

    pub async fn dplus(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::DPLUS_VOLTAGE).await
    }

    pub async fn dminus(&mut self) -> Result<ElectricPotential, Error<E>> {
        self.read_potential(&fields::DMINUS_VOLTAGE).await
    }

    /// Reads every ADC channel. The ADC must be enabled for the values to be
    /// current.
    pub async fn read_measurements(&mut self) -> Result<Measurements, Error<E>> {
        let measurements = Measurements {
            ibus: self.ibus().await?,
            ibat: self.ibat().await?,
            vbus: self.vbus().await?,
            vac1: self.vac1().await?,
            vac2: self.vac2().await?,
            vbat: self.vbat().await?,
            vsys: self.vsys().await?,
            ts: self.ts().await?,
            die_temperature: self.die_temperature().await?,
            dplus: self.dplus().await?,
            dminus: self.dminus().await?,
        };
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "VBUS={} mV, VBAT={} mV, IBAT={} mA",
            measurements.vbus.get::<millivolt>(),
            measurements.vbat.get::<millivolt>(),
            measurements.ibat.get::<milliampere>()
        );
        Ok(measurements)
    }

    /// Reads and decodes the charger and fault status registers.
    pub async fn read_status(&mut self) -> Result<Status, Error<E>> {
        let mut raw = [0u8; STATUS_REGISTERS.len()];
        for (byte, register) in raw.iter_mut().zip(STATUS_REGISTERS.iter()) {
            *byte = self.read_register(*register, ByteCount::One).await? as u8;
        }
        Status::from_registers(raw).map_err(|_code| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Reserved status code {}", _code);
            Error::InvalidData
        })
    }
}
