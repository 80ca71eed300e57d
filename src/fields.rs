//! The register map of the BQ25672 as a static table of named fields.
//!
//! Every property of the chip is one [`FieldSpec`] constant; the driver reads
//! and writes them through [`crate::Bq25672::read_field`] and friends. Scales
//! and offsets are the LSB sizes and offsets listed in the datasheet register
//! descriptions.

use crate::field::{FieldSpec, Unit};
use crate::registers::Register;

/// Charge current multiplier used in the JEITA cool and warm regions.
const JEITA_CURRENT: &[&str] = &["Charge suspended", "20% of ICHG", "40% of ICHG", "Unchanged"];

const DPDM_LEVELS: &[&str] = &["HIZ", "0 V", "0.6 V", "1.2 V", "2.0 V", "2.7 V", "3.3 V", "-"];

// REG00 Min System Voltage
pub const MIN_SYSTEM_VOLTAGE: FieldSpec =
    FieldSpec::new("min_system_voltage", Register::MinSystemVoltage, 0, 5)
        .scaled(250.0, 2500.0, Unit::Millivolt);

// REG01 Charge Voltage Limit
pub const CHARGE_VOLTAGE: FieldSpec =
    FieldSpec::new("charge_voltage", Register::ChargeVoltageLimit, 0, 10)
        .scaled(10.0, 0.0, Unit::Millivolt);

// REG03 Charge Current Limit
pub const CHARGE_CURRENT: FieldSpec =
    FieldSpec::new("charge_current", Register::ChargeCurrentLimit, 0, 8)
        .scaled(10.0, 0.0, Unit::Milliampere);

// REG05 Input Voltage Limit
pub const VINDPM_THRESHOLD: FieldSpec =
    FieldSpec::new("vindpm_threshold", Register::InputVoltageLimit, 0, 7)
        .scaled(100.0, 0.0, Unit::Millivolt);

// REG06 Input Current Limit
pub const INPUT_CURRENT_LIMIT: FieldSpec =
    FieldSpec::new("input_current_limit", Register::InputCurrentLimit, 0, 8)
        .scaled(10.0, 0.0, Unit::Milliampere);

// REG08 Precharge Control
pub const PRE_CHARGE_CURRENT: FieldSpec =
    FieldSpec::new("pre_charge_current", Register::PrechargeControl, 0, 5)
        .scaled(40.0, 0.0, Unit::Milliampere);
pub const PRECHARGE_FAST_CHARGE_THRESHOLD: FieldSpec =
    FieldSpec::new("precharge_fast_charge_threshold", Register::PrechargeControl, 6, 7)
        .codes(&["15% of VREG", "62.2% of VREG", "66.7% of VREG", "71.4% of VREG"]);

// REG09 Termination Control
pub const TERMINATION_CURRENT: FieldSpec =
    FieldSpec::new("termination_current", Register::TerminationControl, 0, 4)
        .scaled(40.0, 0.0, Unit::Milliampere);
pub const WATCHDOG_TIMER_DISABLES_CHARGING: FieldSpec =
    FieldSpec::new("watchdog_timer_disables_charging", Register::TerminationControl, 5, 5).flag();

// REG0A Recharge Control
pub const RECHARGE_THRESHOLD: FieldSpec =
    FieldSpec::new("recharge_threshold", Register::RechargeControl, 0, 3)
        .scaled(50.0, 50.0, Unit::Millivolt);
pub const RECHARGE_DEGLITCH_TIME: FieldSpec =
    FieldSpec::new("recharge_deglitch_time", Register::RechargeControl, 4, 5)
        .codes(&["64 ms", "256 ms", "1024 ms", "2048 ms"]);
pub const BATTERY_SERIES_COUNT: FieldSpec =
    FieldSpec::new("battery_series_count", Register::RechargeControl, 6, 7)
        .scaled(1.0, 1.0, Unit::Cells);

// REG0B Otg Voltage
pub const OTG_VOLTAGE: FieldSpec = FieldSpec::new("otg_voltage", Register::OtgVoltage, 0, 10)
    .scaled(10.0, 2800.0, Unit::Millivolt);

// REG0D Otg Current
pub const OTG_CURRENT_LIMIT: FieldSpec =
    FieldSpec::new("otg_current_limit", Register::OtgCurrent, 0, 6)
        .scaled(40.0, 0.0, Unit::Milliampere);
pub const PRE_CHARGE_TIMER: FieldSpec =
    FieldSpec::new("pre_charge_timer", Register::OtgCurrent, 7, 7).codes(&["2 h", "0.5 h"]);

// REG0E Timer Control
pub const SLOW_CHARGE_IN_THERMAL_REGULATION: FieldSpec =
    FieldSpec::new("slow_charge_in_thermal_regulation", Register::TimerControl, 0, 0).flag();
pub const FAST_CHARGE_TIMER: FieldSpec =
    FieldSpec::new("fast_charge_timer", Register::TimerControl, 1, 2)
        .codes(&["5 h", "8 h", "12 h", "24 h"]);
pub const FAST_CHARGE_TIMER_ENABLED: FieldSpec =
    FieldSpec::new("fast_charge_timer_enabled", Register::TimerControl, 3, 3).flag();
pub const PRE_CHARGE_TIMER_ENABLED: FieldSpec =
    FieldSpec::new("pre_charge_timer_enabled", Register::TimerControl, 4, 4).flag();
pub const TRICKLE_CHARGE_TIMER_ENABLED: FieldSpec =
    FieldSpec::new("trickle_charge_timer_enabled", Register::TimerControl, 5, 5).flag();
pub const TOP_OFF_TIMER: FieldSpec = FieldSpec::new("top_off_timer", Register::TimerControl, 6, 7)
    .codes(&["Disabled", "15 min", "30 min", "45 min"]);

// REG0F Charger Control 0
pub const TERMINATION_ENABLED: FieldSpec =
    FieldSpec::new("termination_enabled", Register::ChargerControl0, 1, 1).flag();
pub const HIZ_MODE_ENABLED: FieldSpec =
    FieldSpec::new("hiz_mode_enabled", Register::ChargerControl0, 2, 2).flag();
pub const ICO_ENABLED: FieldSpec = FieldSpec::new("ico_enabled", Register::ChargerControl0, 4, 4)
    .flag();
pub const CHARGING_ENABLED: FieldSpec =
    FieldSpec::new("charging_enabled", Register::ChargerControl0, 5, 5).flag();
pub const BATTERY_DISCHARGE_CURRENT_FORCED: FieldSpec =
    FieldSpec::new("battery_discharge_current_forced", Register::ChargerControl0, 6, 6).flag();
pub const BATTERY_DISCHARGE_DURING_OVP_ENABLED: FieldSpec =
    FieldSpec::new("battery_discharge_during_ovp_enabled", Register::ChargerControl0, 7, 7).flag();

// REG10 Charger Control 1
pub const WATCHDOG_TIMER: FieldSpec =
    FieldSpec::new("watchdog_timer", Register::ChargerControl1, 0, 2)
        .codes(&["Disabled", "0.5 s", "1 s", "2 s", "20 s", "40 s", "80 s", "160 s"]);
pub const VAC_OVP_THRESHOLD: FieldSpec =
    FieldSpec::new("vac_ovp_threshold", Register::ChargerControl1, 4, 5)
        .codes(&["26 V", "22 V", "12 V", "7 V"]);

// REG11 Charger Control 2
pub const SFET_10S_DELAY_REMOVED: FieldSpec =
    FieldSpec::new("sfet_10s_delay_removed", Register::ChargerControl2, 0, 0).flag();
pub const SFET_CONTROL: FieldSpec = FieldSpec::new("sfet_control", Register::ChargerControl2, 1, 2)
    .codes(&["Idle", "Shutdown mode", "Ship mode", "System power reset"]);
pub const HIGH_VOLTAGE_DCP_HANDSHAKE_ENABLED: FieldSpec =
    FieldSpec::new("high_voltage_dcp_handshake_enabled", Register::ChargerControl2, 3, 3).flag();
pub const HVDC_9V_ENABLED: FieldSpec =
    FieldSpec::new("hvdc_9v_enabled", Register::ChargerControl2, 4, 4).flag();
pub const HVDC_12V_ENABLED: FieldSpec =
    FieldSpec::new("hvdc_12v_enabled", Register::ChargerControl2, 5, 5).flag();
pub const AUTO_DPDN_DETECTION_ENABLED: FieldSpec =
    FieldSpec::new("auto_dpdn_detection_enabled", Register::ChargerControl2, 6, 6).flag();

// REG12 Charger Control 3
pub const OOA_IN_FORWARD_MODE_DISABLED: FieldSpec =
    FieldSpec::new("ooa_in_forward_mode_disabled", Register::ChargerControl3, 0, 0).flag();
pub const OOA_IN_OTG_MODE_DISABLED: FieldSpec =
    FieldSpec::new("ooa_in_otg_mode_disabled", Register::ChargerControl3, 1, 1).flag();
pub const BATFET_LDO_MODE_DURING_PRE_CHARGE_DISABLED: FieldSpec =
    FieldSpec::new("batfet_ldo_mode_during_pre_charge_disabled", Register::ChargerControl3, 2, 2)
        .flag();
pub const QON_WAKE_UP_TIMER: FieldSpec =
    FieldSpec::new("qon_wake_up_timer", Register::ChargerControl3, 3, 3).codes(&["1 s", "15 ms"]);
pub const PFM_IN_FORWARD_MODE_DISABLED: FieldSpec =
    FieldSpec::new("pfm_in_forward_mode_disabled", Register::ChargerControl3, 4, 4).flag();
pub const PFM_IN_OTG_MODE_DISABLED: FieldSpec =
    FieldSpec::new("pfm_in_otg_mode_disabled", Register::ChargerControl3, 5, 5).flag();
pub const OTG_CONTROL_ENABLED: FieldSpec =
    FieldSpec::new("otg_control_enabled", Register::ChargerControl3, 6, 6).flag();
pub const INPUTS_DISCONNECTED: FieldSpec =
    FieldSpec::new("inputs_disconnected", Register::ChargerControl3, 7, 7).flag();

// REG13 Charger Control 4
pub const BUS_CURRENT_OCP_IN_FORWARD_MODE_ENABLED: FieldSpec =
    FieldSpec::new("bus_current_ocp_in_forward_mode_enabled", Register::ChargerControl4, 0, 0)
        .flag();
pub const VINDPM_DETECTION_FORCED: FieldSpec =
    FieldSpec::new("vindpm_detection_forced", Register::ChargerControl4, 1, 1).flag();
pub const UVP_HICCUP_PROTECTION_OTG_MODE_DISABLED: FieldSpec =
    FieldSpec::new("uvp_hiccup_protection_otg_mode_disabled", Register::ChargerControl4, 2, 2)
        .flag();
pub const SYSTEM_VOLTAGE_SHORT_PROTECTION_FORWARD_MODE_DISABLED: FieldSpec =
    FieldSpec::new(
        "system_voltage_short_protection_forward_mode_disabled",
        Register::ChargerControl4,
        3,
        3,
    )
        .flag();
pub const STAT_PIN_DISABLED: FieldSpec =
    FieldSpec::new("stat_pin_disabled", Register::ChargerControl4, 4, 4).flag();
pub const SWITCHING_FREQUENCY: FieldSpec =
    FieldSpec::new("switching_frequency", Register::ChargerControl4, 5, 5)
        .codes(&["1.5 MHz", "750 kHz"]);
pub const INPUT_1_ENABLED: FieldSpec =
    FieldSpec::new("input_1_enabled", Register::ChargerControl4, 6, 6).flag();
pub const INPUT_2_ENABLED: FieldSpec =
    FieldSpec::new("input_2_enabled", Register::ChargerControl4, 7, 7).flag();

// REG14 Charger Control 5
pub const BATTERY_DISCHARGE_OCP_ENABLED: FieldSpec =
    FieldSpec::new("battery_discharge_ocp_enabled", Register::ChargerControl5, 0, 0).flag();
pub const EXTERNAL_INPUT_CURRENT_LIMIT_ENABLED: FieldSpec =
    FieldSpec::new("external_input_current_limit_enabled", Register::ChargerControl5, 1, 1).flag();
pub const SOFTWARE_INPUT_CURRENT_LIMIT_ENABLED: FieldSpec =
    FieldSpec::new("software_input_current_limit_enabled", Register::ChargerControl5, 2, 2).flag();
pub const IBAT_OCP_OTG: FieldSpec = FieldSpec::new("ibat_ocp_otg", Register::ChargerControl5, 3, 4)
    .codes(&["3 A", "4 A", "5 A", "Disabled"]);
pub const BATTERY_CURRENT_SENSING_ENABLED: FieldSpec =
    FieldSpec::new("battery_current_sensing_enabled", Register::ChargerControl5, 5, 5).flag();
pub const SFET_PRESENT: FieldSpec = FieldSpec::new("sfet_present", Register::ChargerControl5, 7, 7)
    .flag();

// REG15 Mppt Control
pub const MPPT_ENABLED: FieldSpec = FieldSpec::new("mppt_enabled", Register::MpptControl, 0, 0)
    .flag();
pub const MPPT_VOC_INTERVAL: FieldSpec =
    FieldSpec::new("mppt_voc_interval", Register::MpptControl, 1, 2)
        .codes(&["30 s", "2 min", "10 min", "30 min"]);
pub const MPPT_VOC_DELAY: FieldSpec = FieldSpec::new("mppt_voc_delay", Register::MpptControl, 3, 4)
    .codes(&["50 ms", "300 ms", "2 s", "5 s"]);
pub const MPPT_VOC_PERCENTAGE: FieldSpec =
    FieldSpec::new("mppt_voc_percentage", Register::MpptControl, 5, 7)
        .codes(&["56.25%", "62.5%", "68.75%", "75%", "81.25%", "87.5%", "93.75%", "100%"]);

// REG16 Temperature Control
pub const INPUT_2_PULLDOWN_RESISTOR_ENABLED: FieldSpec =
    FieldSpec::new("input_2_pulldown_resistor_enabled", Register::TemperatureControl, 1, 1).flag();
pub const INPUT_1_PULLDOWN_RESISTOR_ENABLED: FieldSpec =
    FieldSpec::new("input_1_pulldown_resistor_enabled", Register::TemperatureControl, 2, 2).flag();
pub const BUS_VOLTAGE_PULLDOWN_RESISTOR_ENABLED: FieldSpec =
    FieldSpec::new("bus_voltage_pulldown_resistor_enabled", Register::TemperatureControl, 3, 3)
        .flag();
pub const THERMAL_SHUTDOWN_THRESHOLD: FieldSpec =
    FieldSpec::new("thermal_shutdown_threshold", Register::TemperatureControl, 4, 5)
        .codes(&["150 °C", "130 °C", "120 °C", "85 °C"]);
pub const THERMAL_REGULATION_THRESHOLD: FieldSpec =
    FieldSpec::new("thermal_regulation_threshold", Register::TemperatureControl, 6, 7)
        .codes(&["60 °C", "80 °C", "100 °C", "120 °C"]);

// REG17 Ntc Control 0
pub const JEITA_COOL_CHARGE_CURRENT: FieldSpec =
    FieldSpec::new("jeita_cool_charge_current", Register::NtcControl0, 1, 2).codes(JEITA_CURRENT);
pub const JEITA_WARM_CHARGE_CURRENT: FieldSpec =
    FieldSpec::new("jeita_warm_charge_current", Register::NtcControl0, 3, 4).codes(JEITA_CURRENT);
pub const JEITA_WARM_CHARGE_VOLTAGE: FieldSpec =
    FieldSpec::new("jeita_warm_charge_voltage", Register::NtcControl0, 5, 7)
        .codes(&[
            "Charge suspended",
            "VREG - 800 mV",
            "VREG - 600 mV",
            "VREG - 400 mV",
            "VREG - 300 mV",
            "VREG - 200 mV",
            "VREG - 100 mV",
            "Unchanged",
        ]);

// REG18 Ntc Control 1
pub const NTC_FEEDBACK_DISABLED: FieldSpec =
    FieldSpec::new("ntc_feedback_disabled", Register::NtcControl1, 0, 0).flag();
pub const OTG_COLD_THRESHOLD: FieldSpec =
    FieldSpec::new("otg_cold_threshold", Register::NtcControl1, 1, 1)
        .codes(&["75.8% (-10 °C)", "88.7% (-20 °C)"]);
pub const OTG_HOT_THRESHOLD: FieldSpec =
    FieldSpec::new("otg_hot_threshold", Register::NtcControl1, 2, 3)
        .codes(&["37.7% (55 °C)", "34.4% (60 °C)", "31.3% (65 °C)", "Disabled"]);
pub const JEITA_VT_3_THRESHOLD: FieldSpec =
    FieldSpec::new("jeita_vt_3_threshold", Register::NtcControl1, 4, 5)
        .codes(&["48.4% (40 °C)", "44.8% (45 °C)", "41.2% (50 °C)", "37.7% (55 °C)"]);
pub const JEITA_VT_2_THRESHOLD: FieldSpec =
    FieldSpec::new("jeita_vt_2_threshold", Register::NtcControl1, 6, 7)
        .codes(&["71.2% (5 °C)", "68.4% (10 °C)", "65.5% (15 °C)", "62.4% (20 °C)"]);

// REG19 Ico Current Limit
pub const ICO_CURRENT_LIMIT: FieldSpec =
    FieldSpec::new("ico_current_limit", Register::IcoCurrentLimit, 0, 8)
        .scaled(10.0, 0.0, Unit::Milliampere)
        .read_only();

// REG1B Charger Status 0
pub const BUS_VOLTAGE_PRESENT: FieldSpec =
    FieldSpec::new("bus_voltage_present", Register::ChargerStatus0, 0, 0).flag().read_only();
pub const INPUT_1_PRESENT: FieldSpec =
    FieldSpec::new("input_1_present", Register::ChargerStatus0, 1, 1).flag().read_only();
pub const INPUT_2_PRESENT: FieldSpec =
    FieldSpec::new("input_2_present", Register::ChargerStatus0, 2, 2).flag().read_only();
pub const POWER_GOOD: FieldSpec = FieldSpec::new("power_good", Register::ChargerStatus0, 3, 3)
    .flag()
    .read_only();
pub const WATCHDOG_TIMER_EXPIRED: FieldSpec =
    FieldSpec::new("watchdog_timer_expired", Register::ChargerStatus0, 5, 5).flag().read_only();
pub const IN_VINDPM_OR_VOTG_REGULATION: FieldSpec =
    FieldSpec::new("in_vindpm_or_votg_regulation", Register::ChargerStatus0, 6, 6)
        .flag()
        .read_only();
pub const IN_IINDPM_OR_IOTG_REGULATION: FieldSpec =
    FieldSpec::new("in_iindpm_or_iotg_regulation", Register::ChargerStatus0, 7, 7)
        .flag()
        .read_only();

// REG1C Charger Status 1
pub const BC12_DETECTION_DONE: FieldSpec =
    FieldSpec::new("bc12_detection_done", Register::ChargerStatus1, 0, 0).flag().read_only();
pub const BUS_VOLTAGE_STATUS: FieldSpec =
    FieldSpec::new("bus_voltage_status", Register::ChargerStatus1, 1, 4)
        .codes(&[
            "No input or BHOT/BCOLD in OTG",
            "USB SDP (500 mA)",
            "USB CDP (1.5 A)",
            "USB DCP (3.25 A)",
            "Adjustable high voltage DCP (1.5 A)",
            "Unknown adapter (3 A)",
            "Non-standard adapter",
            "In OTG mode",
            "Not qualified adapter",
            "-",
            "-",
            "Device directly powered from VBUS",
            "Backup mode",
            "-",
            "-",
            "-",
        ])
        .read_only();
pub const CHARGE_STATUS: FieldSpec = FieldSpec::new("charge_status", Register::ChargerStatus1, 5, 7)
    .codes(&[
        "Not charging",
        "Trickle charge",
        "Pre-charge",
        "Fast charge (CC)",
        "Taper charge (CV)",
        "-",
        "Top-off timer active",
        "Charge termination done",
    ])
    .read_only();

// REG1D Charger Status 2
pub const BATTERY_PRESENT: FieldSpec =
    FieldSpec::new("battery_present", Register::ChargerStatus2, 0, 0).flag().read_only();
pub const DPDN_DETECTION_BUSY: FieldSpec =
    FieldSpec::new("dpdn_detection_busy", Register::ChargerStatus2, 1, 1).flag().read_only();
pub const IN_THERMAL_REGULATION: FieldSpec =
    FieldSpec::new("in_thermal_regulation", Register::ChargerStatus2, 2, 2).flag().read_only();
pub const ICO_STATUS: FieldSpec = FieldSpec::new("ico_status", Register::ChargerStatus2, 6, 7)
    .codes(&["Disabled", "In progress", "Maximum input current detected", "-"])
    .read_only();

// REG1E Charger Status 3
pub const PRE_CHARGE_TIMER_EXPIRED: FieldSpec =
    FieldSpec::new("pre_charge_timer_expired", Register::ChargerStatus3, 1, 1).flag().read_only();
pub const TRICKLE_CHARGE_TIMER_EXPIRED: FieldSpec =
    FieldSpec::new("trickle_charge_timer_expired", Register::ChargerStatus3, 2, 2)
        .flag()
        .read_only();
pub const FAST_CHARGE_TIMER_EXPIRED: FieldSpec =
    FieldSpec::new("fast_charge_timer_expired", Register::ChargerStatus3, 3, 3).flag().read_only();
pub const IN_MIN_SYSTEM_VOLTAGE_REGULATION: FieldSpec =
    FieldSpec::new("in_min_system_voltage_regulation", Register::ChargerStatus3, 4, 4)
        .flag()
        .read_only();
pub const ADC_CONVERSION_DONE: FieldSpec =
    FieldSpec::new("adc_conversion_done", Register::ChargerStatus3, 5, 5).flag().read_only();
pub const INPUT_FETS_1_PLACED: FieldSpec =
    FieldSpec::new("input_fets_1_placed", Register::ChargerStatus3, 6, 6).flag().read_only();
pub const INPUT_FETS_2_PLACED: FieldSpec =
    FieldSpec::new("input_fets_2_placed", Register::ChargerStatus3, 7, 7).flag().read_only();

// REG1F Charger Status 4
pub const BATTERY_HOT: FieldSpec = FieldSpec::new("battery_hot", Register::ChargerStatus4, 0, 0)
    .flag()
    .read_only();
pub const BATTERY_WARM: FieldSpec = FieldSpec::new("battery_warm", Register::ChargerStatus4, 1, 1)
    .flag()
    .read_only();
pub const BATTERY_COOL: FieldSpec = FieldSpec::new("battery_cool", Register::ChargerStatus4, 2, 2)
    .flag()
    .read_only();
pub const BATTERY_COLD: FieldSpec = FieldSpec::new("battery_cold", Register::ChargerStatus4, 3, 3)
    .flag()
    .read_only();
pub const BATTERY_UVLO_FOR_OTG: FieldSpec =
    FieldSpec::new("battery_uvlo_for_otg", Register::ChargerStatus4, 4, 4).flag().read_only();

// REG20 Fault Status 0
pub const INPUT_1_OVP: FieldSpec = FieldSpec::new("input_1_ovp", Register::FaultStatus0, 0, 0)
    .flag()
    .read_only();
pub const INPUT_2_OVP: FieldSpec = FieldSpec::new("input_2_ovp", Register::FaultStatus0, 1, 1)
    .flag()
    .read_only();
pub const CONVERTER_OCP: FieldSpec = FieldSpec::new("converter_ocp", Register::FaultStatus0, 2, 2)
    .flag()
    .read_only();
pub const BATTERY_CURRENT_OCP: FieldSpec =
    FieldSpec::new("battery_current_ocp", Register::FaultStatus0, 3, 3).flag().read_only();
pub const BUS_CURRENT_OCP: FieldSpec =
    FieldSpec::new("bus_current_ocp", Register::FaultStatus0, 4, 4).flag().read_only();
pub const BATTERY_VOLTAGE_OVP: FieldSpec =
    FieldSpec::new("battery_voltage_ovp", Register::FaultStatus0, 5, 5).flag().read_only();
pub const BUS_VOLTAGE_OVP: FieldSpec =
    FieldSpec::new("bus_voltage_ovp", Register::FaultStatus0, 6, 6).flag().read_only();
pub const IN_BATTERY_DISCHARGE_CURRENT_REGULATION: FieldSpec =
    FieldSpec::new("in_battery_discharge_current_regulation", Register::FaultStatus0, 7, 7)
        .flag()
        .read_only();

// REG21 Fault Status 1
pub const IN_THERMAL_SHUTDOWN_PROTECTION: FieldSpec =
    FieldSpec::new("in_thermal_shutdown_protection", Register::FaultStatus1, 2, 2)
        .flag()
        .read_only();
pub const IN_OTG_UNDER_VOLTAGE: FieldSpec =
    FieldSpec::new("in_otg_under_voltage", Register::FaultStatus1, 4, 4).flag().read_only();
pub const IN_OTG_OVER_VOLTAGE: FieldSpec =
    FieldSpec::new("in_otg_over_voltage", Register::FaultStatus1, 5, 5).flag().read_only();
pub const IN_SYSTEM_OVER_VOLTAGE_PROTECTION: FieldSpec =
    FieldSpec::new("in_system_over_voltage_protection", Register::FaultStatus1, 6, 6)
        .flag()
        .read_only();
pub const IN_SYSTEM_SHORT_CIRCUIT_PROTECTION: FieldSpec =
    FieldSpec::new("in_system_short_circuit_protection", Register::FaultStatus1, 7, 7)
        .flag()
        .read_only();

// REG2E Adc Control
pub const START_AVERAGE_WITH_NEW_ADC_CONVERSION: FieldSpec =
    FieldSpec::new("start_average_with_new_adc_conversion", Register::AdcControl, 2, 2).flag();
pub const RUNNING_AVERAGE_ENABLED: FieldSpec =
    FieldSpec::new("running_average_enabled", Register::AdcControl, 3, 3).flag();
pub const ADC_RESOLUTION: FieldSpec = FieldSpec::new("adc_resolution", Register::AdcControl, 4, 5)
    .codes(&["15 bit", "14 bit", "13 bit", "12 bit"]);
pub const ADC_CONVERSION: FieldSpec = FieldSpec::new("adc_conversion", Register::AdcControl, 6, 6)
    .codes(&["Continuous", "One shot"]);
pub const ADC_ENABLED: FieldSpec = FieldSpec::new("adc_enabled", Register::AdcControl, 7, 7)
    .flag();

// REG2F Adc Function Disable 0
pub const DIE_TEMPERATURE_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("die_temperature_adc_control_disabled", Register::AdcFunctionDisable0, 1, 1)
        .flag();
pub const NTC_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("ntc_adc_control_disabled", Register::AdcFunctionDisable0, 2, 2).flag();
pub const SYSTEM_VOLTAGE_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("system_voltage_adc_control_disabled", Register::AdcFunctionDisable0, 3, 3)
        .flag();
pub const BATTERY_VOLTAGE_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("battery_voltage_adc_control_disabled", Register::AdcFunctionDisable0, 4, 4)
        .flag();
pub const BUS_VOLTAGE_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("bus_voltage_adc_control_disabled", Register::AdcFunctionDisable0, 5, 5).flag();
pub const BATTERY_CURRENT_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("battery_current_adc_control_disabled", Register::AdcFunctionDisable0, 6, 6)
        .flag();
pub const BUS_CURRENT_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("bus_current_adc_control_disabled", Register::AdcFunctionDisable0, 7, 7).flag();

// REG30 Adc Function Disable 1
pub const INPUT_1_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("input_1_adc_control_disabled", Register::AdcFunctionDisable1, 4, 4).flag();
pub const INPUT_2_ADC_CONTROL_DISABLED: FieldSpec =
    FieldSpec::new("input_2_adc_control_disabled", Register::AdcFunctionDisable1, 5, 5).flag();
pub const DMINUS_ADC_DISABLED: FieldSpec =
    FieldSpec::new("dminus_adc_disabled", Register::AdcFunctionDisable1, 6, 6).flag();
pub const DPLUS_ADC_DISABLED: FieldSpec =
    FieldSpec::new("dplus_adc_disabled", Register::AdcFunctionDisable1, 7, 7).flag();

// REG31 Ibus Adc
pub const INPUT_CURRENT: FieldSpec = FieldSpec::new("input_current", Register::IbusAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Milliampere)
    .signed()
    .read_only();

// REG33 Ibat Adc
pub const BATTERY_CURRENT: FieldSpec = FieldSpec::new("battery_current", Register::IbatAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Milliampere)
    .signed()
    .read_only();

// REG35 Vbus Adc
pub const BUS_VOLTAGE: FieldSpec = FieldSpec::new("bus_voltage", Register::VbusAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG37 Vac 1Adc
pub const INPUT_1_VOLTAGE: FieldSpec = FieldSpec::new("input_1_voltage", Register::Vac1Adc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG39 Vac 2Adc
pub const INPUT_2_VOLTAGE: FieldSpec = FieldSpec::new("input_2_voltage", Register::Vac2Adc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG3B Vbat Adc
pub const BATTERY_VOLTAGE: FieldSpec = FieldSpec::new("battery_voltage", Register::VbatAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG3D Vsys Adc
pub const SYSTEM_VOLTAGE: FieldSpec = FieldSpec::new("system_voltage", Register::VsysAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG3F Ts Adc
pub const TS_PERCENTAGE: FieldSpec = FieldSpec::new("ts_percentage", Register::TsAdc, 0, 15)
    .scaled(0.0976563, 0.0, Unit::Percent)
    .read_only();

// REG41 Tdie Adc
pub const DIE_TEMPERATURE: FieldSpec = FieldSpec::new("die_temperature", Register::TdieAdc, 0, 15)
    .scaled(0.5, 0.0, Unit::DegreeCelsius)
    .signed()
    .read_only();

// REG43 Dplus Adc
pub const DPLUS_VOLTAGE: FieldSpec = FieldSpec::new("dplus_voltage", Register::DplusAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG45 Dminus Adc
pub const DMINUS_VOLTAGE: FieldSpec = FieldSpec::new("dminus_voltage", Register::DminusAdc, 0, 15)
    .scaled(1.0, 0.0, Unit::Millivolt)
    .read_only();

// REG47 Dpdm Driver
pub const DMINUS_OUTPUT: FieldSpec = FieldSpec::new("dminus_output", Register::DpdmDriver, 2, 4)
    .codes(DPDM_LEVELS);
pub const DPLUS_OUTPUT: FieldSpec = FieldSpec::new("dplus_output", Register::DpdmDriver, 5, 7)
    .codes(&["HIZ", "0 V", "0.6 V", "1.2 V", "2.0 V", "2.7 V", "3.3 V", "D+/D- short"]);

// REG48 Part Information
pub const DEVICE_REVISION: FieldSpec =
    FieldSpec::new("device_revision", Register::PartInformation, 0, 2).read_only();
pub const PART_NUMBER: FieldSpec = FieldSpec::new("part_number", Register::PartInformation, 3, 5)
    .read_only();

/// Every field of the register map, in register order.
pub const ALL: &[FieldSpec] = &[
    MIN_SYSTEM_VOLTAGE,
    CHARGE_VOLTAGE,
    CHARGE_CURRENT,
    VINDPM_THRESHOLD,
    INPUT_CURRENT_LIMIT,
    PRE_CHARGE_CURRENT,
    PRECHARGE_FAST_CHARGE_THRESHOLD,
    TERMINATION_CURRENT,
    WATCHDOG_TIMER_DISABLES_CHARGING,
    RECHARGE_THRESHOLD,
    RECHARGE_DEGLITCH_TIME,
    BATTERY_SERIES_COUNT,
    OTG_VOLTAGE,
    OTG_CURRENT_LIMIT,
    PRE_CHARGE_TIMER,
    SLOW_CHARGE_IN_THERMAL_REGULATION,
    FAST_CHARGE_TIMER,
    FAST_CHARGE_TIMER_ENABLED,
    PRE_CHARGE_TIMER_ENABLED,
    TRICKLE_CHARGE_TIMER_ENABLED,
    TOP_OFF_TIMER,
    TERMINATION_ENABLED,
    HIZ_MODE_ENABLED,
    ICO_ENABLED,
    CHARGING_ENABLED,
    BATTERY_DISCHARGE_CURRENT_FORCED,
    BATTERY_DISCHARGE_DURING_OVP_ENABLED,
    WATCHDOG_TIMER,
    VAC_OVP_THRESHOLD,
    SFET_10S_DELAY_REMOVED,
    SFET_CONTROL,
    HIGH_VOLTAGE_DCP_HANDSHAKE_ENABLED,
    HVDC_9V_ENABLED,
    HVDC_12V_ENABLED,
    AUTO_DPDN_DETECTION_ENABLED,
    OOA_IN_FORWARD_MODE_DISABLED,
    OOA_IN_OTG_MODE_DISABLED,
    BATFET_LDO_MODE_DURING_PRE_CHARGE_DISABLED,
    QON_WAKE_UP_TIMER,
    PFM_IN_FORWARD_MODE_DISABLED,
    PFM_IN_OTG_MODE_DISABLED,
    OTG_CONTROL_ENABLED,
    INPUTS_DISCONNECTED,
    BUS_CURRENT_OCP_IN_FORWARD_MODE_ENABLED,
    VINDPM_DETECTION_FORCED,
    UVP_HICCUP_PROTECTION_OTG_MODE_DISABLED,
    SYSTEM_VOLTAGE_SHORT_PROTECTION_FORWARD_MODE_DISABLED,
    STAT_PIN_DISABLED,
    SWITCHING_FREQUENCY,
    INPUT_1_ENABLED,
    INPUT_2_ENABLED,
    BATTERY_DISCHARGE_OCP_ENABLED,
    EXTERNAL_INPUT_CURRENT_LIMIT_ENABLED,
    SOFTWARE_INPUT_CURRENT_LIMIT_ENABLED,
    IBAT_OCP_OTG,
    BATTERY_CURRENT_SENSING_ENABLED,
    SFET_PRESENT,
    MPPT_ENABLED,
    MPPT_VOC_INTERVAL,
    MPPT_VOC_DELAY,
    MPPT_VOC_PERCENTAGE,
    INPUT_2_PULLDOWN_RESISTOR_ENABLED,
    INPUT_1_PULLDOWN_RESISTOR_ENABLED,
    BUS_VOLTAGE_PULLDOWN_RESISTOR_ENABLED,
    THERMAL_SHUTDOWN_THRESHOLD,
    THERMAL_REGULATION_THRESHOLD,
    JEITA_COOL_CHARGE_CURRENT,
    JEITA_WARM_CHARGE_CURRENT,
    JEITA_WARM_CHARGE_VOLTAGE,
    NTC_FEEDBACK_DISABLED,
    OTG_COLD_THRESHOLD,
    OTG_HOT_THRESHOLD,
    JEITA_VT_3_THRESHOLD,
    JEITA_VT_2_THRESHOLD,
    ICO_CURRENT_LIMIT,
    BUS_VOLTAGE_PRESENT,
    INPUT_1_PRESENT,
    INPUT_2_PRESENT,
    POWER_GOOD,
    WATCHDOG_TIMER_EXPIRED,
    IN_VINDPM_OR_VOTG_REGULATION,
    IN_IINDPM_OR_IOTG_REGULATION,
    BC12_DETECTION_DONE,
    BUS_VOLTAGE_STATUS,
    CHARGE_STATUS,
    BATTERY_PRESENT,
    DPDN_DETECTION_BUSY,
    IN_THERMAL_REGULATION,
    ICO_STATUS,
    PRE_CHARGE_TIMER_EXPIRED,
    TRICKLE_CHARGE_TIMER_EXPIRED,
    FAST_CHARGE_TIMER_EXPIRED,
    IN_MIN_SYSTEM_VOLTAGE_REGULATION,
    ADC_CONVERSION_DONE,
    INPUT_FETS_1_PLACED,
    INPUT_FETS_2_PLACED,
    BATTERY_HOT,
    BATTERY_WARM,
    BATTERY_COOL,
    BATTERY_COLD,
    BATTERY_UVLO_FOR_OTG,
    INPUT_1_OVP,
    INPUT_2_OVP,
    CONVERTER_OCP,
    BATTERY_CURRENT_OCP,
    BUS_CURRENT_OCP,
    BATTERY_VOLTAGE_OVP,
    BUS_VOLTAGE_OVP,
    IN_BATTERY_DISCHARGE_CURRENT_REGULATION,
    IN_THERMAL_SHUTDOWN_PROTECTION,
    IN_OTG_UNDER_VOLTAGE,
    IN_OTG_OVER_VOLTAGE,
    IN_SYSTEM_OVER_VOLTAGE_PROTECTION,
    IN_SYSTEM_SHORT_CIRCUIT_PROTECTION,
    START_AVERAGE_WITH_NEW_ADC_CONVERSION,
    RUNNING_AVERAGE_ENABLED,
    ADC_RESOLUTION,
    ADC_CONVERSION,
    ADC_ENABLED,
    DIE_TEMPERATURE_ADC_CONTROL_DISABLED,
    NTC_ADC_CONTROL_DISABLED,
    SYSTEM_VOLTAGE_ADC_CONTROL_DISABLED,
    BATTERY_VOLTAGE_ADC_CONTROL_DISABLED,
    BUS_VOLTAGE_ADC_CONTROL_DISABLED,
    BATTERY_CURRENT_ADC_CONTROL_DISABLED,
    BUS_CURRENT_ADC_CONTROL_DISABLED,
    INPUT_1_ADC_CONTROL_DISABLED,
    INPUT_2_ADC_CONTROL_DISABLED,
    DMINUS_ADC_DISABLED,
    DPLUS_ADC_DISABLED,
    INPUT_CURRENT,
    BATTERY_CURRENT,
    BUS_VOLTAGE,
    INPUT_1_VOLTAGE,
    INPUT_2_VOLTAGE,
    BATTERY_VOLTAGE,
    SYSTEM_VOLTAGE,
    TS_PERCENTAGE,
    DIE_TEMPERATURE,
    DPLUS_VOLTAGE,
    DMINUS_VOLTAGE,
    DMINUS_OUTPUT,
    DPLUS_OUTPUT,
    DEVICE_REVISION,
    PART_NUMBER,
];

/// Looks up a field by its snake_case name.
pub fn find(name: &str) -> Option<&'static FieldSpec> {
    ALL.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ByteCount;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find() {
        let spec = find("min_system_voltage").unwrap();
        assert_eq!(spec.register, Register::MinSystemVoltage);
        assert_eq!(spec.bits.width(), 6);
        assert!(find("no_such_field").is_none());
    }

    #[test]
    fn test_fields_fit_their_registers() {
        for spec in ALL {
            assert_eq!(spec.byte_count, spec.register.width());
            assert!(spec.bits.end() < spec.byte_count.bits(), "{}", spec.name);
            if spec.unit == Unit::Flag {
                assert_eq!(spec.bits.width(), 1, "{}", spec.name);
            }
            if !spec.codes.is_empty() {
                assert!(spec.codes.len() <= spec.bits.max_raw() as usize + 1, "{}", spec.name);
            }
        }
    }

    #[test]
    fn test_adc_fields_are_read_only() {
        for spec in [&INPUT_CURRENT, &BATTERY_CURRENT, &BUS_VOLTAGE, &DIE_TEMPERATURE] {
            assert!(!spec.is_writable(), "{}", spec.name);
            assert_eq!(spec.byte_count, ByteCount::Two);
        }
        assert!(INPUT_CURRENT.signed);
        assert!(!BUS_VOLTAGE.signed);
    }
}
